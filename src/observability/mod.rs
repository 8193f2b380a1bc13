//! Observability for fieldcheck
//!
//! Structured one-line JSON logging only: synchronous, no buffering,
//! deterministic key ordering, no side effects on validation.

mod logger;

pub use logger::{Logger, Severity};
