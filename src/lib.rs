//! redfang — manually-triggered web vulnerability probing toolkit.
//!
//! The core is the scan orchestration engine: resolve a module id and a raw
//! target descriptor into a concrete scanner, iterate a payload corpus
//! against one URL/parameter pair on a background task, and stream
//! classified events back to the caller until exhaustion, cancellation, or
//! a precondition error.

pub mod cli;
pub mod core;
pub mod http;
pub mod payload;
pub mod reporting;
pub mod scanner;
