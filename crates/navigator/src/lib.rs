//! # Teleinsight Navigator
//!
//! Maps the operator's menu selection onto exactly one analytics operation.
//!
//! ## Architectural Principles
//!
//! - **Registry, not branching:** every section is a `Query` registered under
//!   its `Section` key. The dispatcher looks the key up; it never switches on it.
//! - **Dependency injection:** the registry is given its `ReportSettings`; it
//!   does not load configuration itself.
//! - **Extensibility:** adding a section means adding a `Section` variant and
//!   a `Query` implementation, then registering it.
//!
//! ## Public API
//!
//! - `Section`: the ten navigation keys.
//! - `Query`: the trait every section implements.
//! - `QueryRegistry`: key → query lookup and dispatch.
//! - `Report`: the tables produced by one navigation event.

// Declare all the modules that constitute this crate.
pub mod error;
pub mod queries;
pub mod registry;
pub mod report;
pub mod section;

// Re-export the key components to create a clean, public-facing API.
pub use error::NavigationError;
pub use registry::QueryRegistry;
pub use report::Report;
pub use section::Section;

use analytics::{AnalyticsEngine, ResultTable};
use core_types::Dataset;

/// The trait every report section implements.
///
/// `run` must be a pure function of the dataset: no caching, no I/O, and the
/// same dataset always produces the same tables.
pub trait Query: Send + Sync {
    /// The navigation key this query answers.
    fn section(&self) -> Section;

    fn run(&self, engine: &AnalyticsEngine, dataset: &Dataset) -> Vec<ResultTable>;
}
