//! # dsf
//!
//! Per-capita GDP and a small logging middleware for wrapping plain functions.
//!
//! ## Modules
//!
//! - `app` - Logging initialization and application configuration
//! - `diagnostics` - Sinks that receive diagnostic records
//! - `error` - Error type and error code registry
//! - `gdp` - Per-capita GDP, with and without diagnostics
//! - `greeting` - Greeting formatter used as a tracing target
//! - `middleware` - Tracing wrappers for any operation
//! - `person` - Display-name holder with a validated combined view
pub mod app;
pub mod diagnostics;
pub mod error;
pub mod gdp;
pub mod greeting;
pub mod middleware;
pub mod person;


pub use diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use error::{DsfError, ErrorCode};
pub use middleware::{trace, Operation, TraceOptions, Traced};
