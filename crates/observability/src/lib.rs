//! Process-wide diagnostics setup for binaries and test harnesses that embed
//! the statement pipeline.

/// Tracing subscriber configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{init, init_with_default, DEFAULT_FILTER};
