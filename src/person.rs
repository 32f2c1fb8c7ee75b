//! Display-name holder.
//!
//! The combined "First Last" view is derived from two plain fields. Writing it
//! goes through [`split_display_name`], which rejects anything that does not
//! split into two non-blank parts, and leaves the fields untouched on failure.

use crate::error::{DsfError, ErrorCode, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn display_name(&self) -> String {
        combine_names(&self.first_name, &self.last_name)
    }

    /// Replace both names from a combined "First Last" value
    pub fn set_display_name(&mut self, value: &str) -> Result<()> {
        let (first_name, last_name) = split_display_name(value)?;
        self.first_name = first_name;
        self.last_name = last_name;
        Ok(())
    }
}

pub fn combine_names(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}

/// Split a combined "First Last" value on single spaces.
///
/// Exactly two parts are accepted and neither may be blank, so `"Matt"`,
/// `"Mary Ann Smith"` and `"Matt  Wilson"` are all rejected.
pub fn split_display_name(value: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = value.splitn(3, ' ').collect();
    match parts.as_slice() {
        [first, last] if !first.trim().is_empty() && !last.trim().is_empty() => {
            Ok((first.to_string(), last.to_string()))
        }
        _ => Err(DsfError::value_format_with_code(
            ErrorCode::VALUE_FORMAT_DISPLAY_NAME,
            value,
            "expected a first and last name separated by a single space",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_joins_with_space() {
        let person = Person::new("Matt", "Wilson");
        assert_eq!(person.display_name(), "Matt Wilson");
    }

    #[test]
    fn test_set_display_name_updates_both_fields() {
        let mut person = Person::new("Someone", "Else");
        person.set_display_name("Matt Wilson").unwrap();

        assert_eq!(person.first_name, "Matt");
        assert_eq!(person.last_name, "Wilson");
        assert_eq!(person.display_name(), "Matt Wilson");
    }

    #[test]
    fn test_single_word_is_rejected() {
        let mut person = Person::new("Matt", "Wilson");
        let err = person.set_display_name("Matt").unwrap_err();

        match err {
            DsfError::ValueFormat { value, code, .. } => {
                assert_eq!(value, "Matt");
                assert_eq!(code, ErrorCode::VALUE_FORMAT_DISPLAY_NAME);
            }
            other => panic!("expected ValueFormat, got {other:?}"),
        }
        assert_eq!(person, Person::new("Matt", "Wilson"));
    }

    #[test]
    fn test_blank_value_is_rejected() {
        let mut person = Person::new("Matt", "Wilson");
        assert!(matches!(
            person.set_display_name("  "),
            Err(DsfError::ValueFormat { .. })
        ));
        assert!(person.set_display_name("").is_err());
        assert!(person.set_display_name(" Wilson").is_err());
    }

    #[test]
    fn test_three_words_are_rejected() {
        let mut person = Person::new("Matt", "Wilson");
        let err = person.set_display_name("Mary Ann Smith").unwrap_err();

        assert!(matches!(
            err,
            DsfError::ValueFormat { ref value, .. } if value == "Mary Ann Smith"
        ));
        assert_eq!(person, Person::new("Matt", "Wilson"));
    }

    #[test]
    fn test_double_space_is_rejected() {
        let mut person = Person::new("Matt", "Wilson");

        assert!(person.set_display_name("Matt  Wilson").is_err());
        assert!(split_display_name("Matt Wilson ").is_err());
        assert_eq!(person.last_name, "Wilson");
    }
}
