//! Pure derivation engine for staff training-point compliance.
//!
//! The surrounding system fetches employees, terms, submission records, and
//! clearances from the backend; this crate consumes the already-resolved
//! collections and derives the display state every dashboard needs — term
//! point totals, cleared/not-cleared verdicts, filtered and paginated
//! listings, and department overview summaries. Nothing here performs network
//! or database I/O, and every function is a synchronous function of its
//! inputs.

pub mod clearance;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod telemetry;
