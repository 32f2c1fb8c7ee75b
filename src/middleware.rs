//! Logging middleware
//!
//! A [`Traced`] operation wraps any [`Operation`] and reports its arguments
//! and result to a [`DiagnosticSink`] while delegating the actual work. The
//! wrapper has the same argument and output types as the operation it wraps,
//! calls it exactly once per invocation, and hands back whatever it returned,
//! failures included.
//!
//! Three ways to build one:
//!
//! - [`trace`] wraps an operation explicitly and logs arguments and result.
//! - [`traced_fn!`](crate::traced_fn) does the same at function definition time.
//! - [`TraceOptions::configurable`] adds an entry marker and lets the
//!   argument and result records be switched off independently.
//!
//! ```
//! use dsf::diagnostics::MemorySink;
//! use dsf::middleware::{trace, Operation};
//!
//! let sink = MemorySink::new();
//! let double = trace(|x: i64| x * 2, &sink);
//!
//! assert_eq!(double.invoke(21), 42);
//! assert_eq!(sink.records(), vec!["21", "result: 42"]);
//! ```

use crate::diagnostics::DiagnosticSink;
use std::fmt::Display;

/// Record emitted on every invocation of a configurable wrapper
pub const ENTRY_MARKER: &str = "In here";

/// A callable unit of work taking `A` and producing [`Operation::Output`]
pub trait Operation<A> {
    type Output;

    fn invoke(&self, args: A) -> Self::Output;
}

impl<A, R, F> Operation<A> for F
where
    F: Fn(A) -> R,
{
    type Output = R;

    fn invoke(&self, args: A) -> R {
        self(args)
    }
}

/// Arguments that can describe themselves to the middleware.
///
/// Required parameters are reported as positional values; optional ones that
/// were supplied are reported as `name: value` pairs.
pub trait TraceArgs {
    fn positional(&self) -> Vec<String>;

    fn named(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

macro_rules! impl_trace_args_for_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TraceArgs for $ty {
                fn positional(&self) -> Vec<String> {
                    vec![self.to_string()]
                }
            }
        )*
    };
}

impl_trace_args_for_display!(i32, i64, u32, u64, usize, f32, f64, bool, String, &str);

impl TraceArgs for () {
    fn positional(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<A: Display, B: Display> TraceArgs for (A, B) {
    fn positional(&self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string()]
    }
}

/// Return values that can describe themselves to the middleware.
///
/// `None` means the call failed and there is no result to report.
pub trait TraceOutcome {
    fn describe(&self) -> Option<String>;
}

macro_rules! impl_trace_outcome_for_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TraceOutcome for $ty {
                fn describe(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_trace_outcome_for_display!(i32, i64, u32, u64, usize, f32, f64, bool, String, &str);

impl TraceOutcome for () {
    fn describe(&self) -> Option<String> {
        Some("()".to_string())
    }
}

impl<T: TraceOutcome, E> TraceOutcome for Result<T, E> {
    fn describe(&self) -> Option<String> {
        match self {
            Ok(value) => value.describe(),
            Err(_) => None,
        }
    }
}

/// Which records a [`Traced`] operation emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceOptions {
    /// Emit [`ENTRY_MARKER`] before anything else
    pub announce_entry: bool,
    /// Emit one record per argument
    pub log_start: bool,
    /// Emit a `result: ...` record after a successful call
    pub log_end: bool,
}

impl TraceOptions {
    /// Arguments and result, no entry marker
    pub fn unconditional() -> Self {
        Self {
            announce_entry: false,
            log_start: true,
            log_end: true,
        }
    }

    /// Entry marker always; argument and result records as requested
    pub fn configurable(log_start: bool, log_end: bool) -> Self {
        Self {
            announce_entry: true,
            log_start,
            log_end,
        }
    }

    /// Wrap `inner` so that it reports to `sink` according to these options
    pub fn apply<O, S>(self, inner: O, sink: S) -> Traced<O, S> {
        Traced {
            inner,
            sink,
            options: self,
        }
    }
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self::configurable(true, true)
    }
}

/// An operation wrapped with logging
#[derive(Debug, Clone)]
pub struct Traced<O, S> {
    inner: O,
    sink: S,
    options: TraceOptions,
}

impl<O, S> Traced<O, S> {
    pub fn options(&self) -> TraceOptions {
        self.options
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<A, O, S> Operation<A> for Traced<O, S>
where
    A: TraceArgs,
    O: Operation<A>,
    O::Output: TraceOutcome,
    S: DiagnosticSink,
{
    type Output = O::Output;

    fn invoke(&self, args: A) -> Self::Output {
        if self.options.announce_entry {
            self.sink.emit(ENTRY_MARKER);
        }

        if self.options.log_start {
            for value in args.positional() {
                self.sink.emit(&value);
            }
            for (name, value) in args.named() {
                self.sink.emit(&format!("{}: {}", name, value));
            }
        }

        let result = self.inner.invoke(args);

        if self.options.log_end {
            if let Some(text) = result.describe() {
                self.sink.emit(&format!("result: {}", text));
            }
        }

        result
    }
}

/// Wrap `inner` so that every call logs its arguments and result to `sink`
pub fn trace<O, S>(inner: O, sink: S) -> Traced<O, S> {
    TraceOptions::unconditional().apply(inner, sink)
}

/// Define a function that calls `$target` through [`trace`].
///
/// The generated function takes the diagnostic sink as its first parameter,
/// followed by the target's own argument.
///
/// ```
/// use dsf::diagnostics::MemorySink;
///
/// fn square(x: i64) -> i64 {
///     x * x
/// }
///
/// dsf::traced_fn! {
///     /// `square` with argument and result logging
///     pub fn traced_square(x: i64) -> i64 => square;
/// }
///
/// let sink = MemorySink::new();
/// assert_eq!(traced_square(&sink, 7), 49);
/// assert_eq!(sink.records(), vec!["7", "result: 49"]);
/// ```
#[macro_export]
macro_rules! traced_fn {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($arg:ident : $ty:ty) -> $ret:ty => $target:path;
    ) => {
        $(#[$meta])*
        $vis fn $name<S: $crate::diagnostics::DiagnosticSink>(sink: S, $arg: $ty) -> $ret {
            use $crate::middleware::Operation as _;
            $crate::middleware::trace($target, sink).invoke($arg)
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($arg:ident : $ty:ty) => $target:path;
    ) => {
        $(#[$meta])*
        $vis fn $name<S: $crate::diagnostics::DiagnosticSink>(sink: S, $arg: $ty) {
            use $crate::middleware::Operation as _;
            $crate::middleware::trace($target, sink).invoke($arg)
        }
    };
}
