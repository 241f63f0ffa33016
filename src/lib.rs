//! Repository quality gate.
//!
//! Scores already-fetched repository snapshots against a fixed rubric of
//! critical and warning checks and produces a 0-100 score with a pass/fail
//! verdict. The engine performs no I/O; snapshots are produced by an external
//! metadata collaborator and reports are rendered by the presentation layer.

pub mod analyze;
pub mod config;
pub mod error;
pub mod report;
pub mod scan;
pub mod search;
pub mod types;

pub use analyze::metrics::{derive, DerivedMetrics};
pub use analyze::Evaluator;
pub use error::{RepocheckError, Result};
pub use types::report::{EvaluationReport, FailedCheck};
pub use types::snapshot::{RepoIdentity, RepositorySnapshot};
