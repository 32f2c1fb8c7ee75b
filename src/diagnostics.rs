//! Diagnostic sinks
//!
//! Every component that reports what it is doing takes a [`DiagnosticSink`]
//! instead of reaching for a global logger. Production code passes
//! [`TracingSink`], which forwards each record to the `tracing` subscriber
//! installed by [`init_logging`](crate::app::init_logging). Tests pass a
//! [`MemorySink`] and inspect the records directly.

use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Event target used for every record forwarded to `tracing`
pub const DIAGNOSTIC_TARGET: &str = "dsf";

/// Destination for diagnostic records
pub trait DiagnosticSink {
    /// Record a single diagnostic line
    fn emit(&self, record: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, record: &str) {
        (**self).emit(record)
    }
}

/// Forwards records to `tracing` as debug events on the `dsf` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, record: &str) {
        debug!(target: DIAGNOSTIC_TARGET, "{}", record);
    }
}

/// Keeps records in memory, in emission order.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record emitted so far
    pub fn records(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, record: &str) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.to_string());
    }
}
