//! Greeting formatter, the usual target for the tracing middleware.

use crate::middleware::{TraceArgs, TraceOptions, Traced};
use std::io::{self, Write};

const GREETING_PREFIX: &str = "hello, ";
const GREETING_AGAIN_PREFIX: &str = "hello again, ";

/// A required first name plus optional middle and last names
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GreetingArgs {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

impl GreetingArgs {
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            ..Self::default()
        }
    }

    pub fn middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = Some(middle_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Components joined by single spaces, skipping absent or empty ones
    pub fn display_name(&self) -> String {
        std::iter::once(self.first_name.as_str())
            .chain(self.middle_name.as_deref())
            .chain(self.last_name.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Optional names are always traced as `name: value`, even when all three were supplied.
impl TraceArgs for GreetingArgs {
    fn positional(&self) -> Vec<String> {
        vec![self.first_name.clone()]
    }

    fn named(&self) -> Vec<(&'static str, String)> {
        let mut named = Vec::new();
        if let Some(middle) = &self.middle_name {
            named.push(("middle_name", middle.clone()));
        }
        if let Some(last) = &self.last_name {
            named.push(("last_name", last.clone()));
        }
        named
    }
}

pub fn format_greeting(args: &GreetingArgs) -> String {
    format!("{}{}!", GREETING_PREFIX, args.display_name())
}

pub fn format_greeting_again(args: &GreetingArgs) -> String {
    format!("{}{}!", GREETING_AGAIN_PREFIX, args.display_name())
}

/// Write the greeting line to `out`
pub fn greet_to<W: Write>(out: &mut W, args: &GreetingArgs) -> io::Result<()> {
    writeln!(out, "{}", format_greeting(args))
}

/// Print the greeting to stdout
pub fn greet(args: GreetingArgs) {
    println!("{}", format_greeting(&args));
}

/// Print the "hello again" greeting to stdout
pub fn greet_again(args: GreetingArgs) {
    println!("{}", format_greeting_again(&args));
}

crate::traced_fn! {
    /// [`greet`] with every argument and the result logged to `sink`
    pub fn greet_with_trace(args: GreetingArgs) => greet;
}

/// [`greet_again`] logging the entry marker and arguments but not the result
pub fn greet_again_traced<S>(sink: S) -> Traced<fn(GreetingArgs), S> {
    TraceOptions::configurable(true, false).apply(greet_again as fn(GreetingArgs), sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::middleware::{trace, Operation};

    #[test]
    fn test_first_name_only() {
        assert_eq!(format_greeting(&GreetingArgs::new("stupid")), "hello, stupid!");
    }

    #[test]
    fn test_all_three_components() {
        let args = GreetingArgs::new("stupid").middle_name("and").last_name("ugly");
        assert_eq!(format_greeting(&args), "hello, stupid and ugly!");
    }

    #[test]
    fn test_last_name_without_middle() {
        let args = GreetingArgs::new("Matt").last_name("Wilson");
        assert_eq!(format_greeting(&args), "hello, Matt Wilson!");
    }

    #[test]
    fn test_empty_components_are_omitted() {
        let args = GreetingArgs::new("Matt").middle_name("").last_name("Wilson");
        assert_eq!(args.display_name(), "Matt Wilson");
    }

    #[test]
    fn test_greet_again_prefix() {
        let args = GreetingArgs::new("stupid").middle_name("and").last_name("ugly");
        assert_eq!(format_greeting_again(&args), "hello again, stupid and ugly!");
    }

    #[test]
    fn test_greet_to_writes_line() {
        let mut out = Vec::new();
        greet_to(&mut out, &GreetingArgs::new("stupid")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello, stupid!\n");
    }

    #[test]
    fn test_named_arguments_are_reported_by_name() {
        let args = GreetingArgs::new("Matt").last_name("Wilson");
        assert_eq!(args.positional(), vec!["Matt"]);
        assert_eq!(args.named(), vec![("last_name", "Wilson".to_string())]);
    }

    #[test]
    fn test_greet_with_trace_matches_explicit_trace() {
        let args = GreetingArgs::new("Matt").last_name("Wilson");

        let via_macro = MemorySink::new();
        greet_with_trace(&via_macro, args.clone());

        let explicit = MemorySink::new();
        trace(greet, &explicit).invoke(args);

        assert_eq!(via_macro.records(), explicit.records());
        assert_eq!(
            via_macro.records(),
            vec!["Matt", "last_name: Wilson", "result: ()"]
        );
    }

    #[test]
    fn test_greet_again_traced_skips_result() {
        let sink = MemorySink::new();
        greet_again_traced(&sink).invoke(GreetingArgs::new("stupid").middle_name("and"));

        assert_eq!(
            sink.records(),
            vec!["In here", "stupid", "middle_name: and"]
        );
    }
}
