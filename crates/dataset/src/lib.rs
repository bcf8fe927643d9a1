//! # Teleinsight Dataset Crate
//!
//! Turns the customer CSV into an immutable `Dataset` and keeps it cached for
//! the life of the process.
//!
//! ## Public API
//!
//! - `DatasetSource` / `CsvSource`: where records come from. The CSV source
//!   parses with polars and validates every required column.
//! - `DatasetCache`: load-on-first-access handle with an explicit, atomic
//!   `reload` and an `invalidate` entry point.
//! - `IngestionError` / `SchemaError`: everything that can go wrong while loading.

// Declare the modules that constitute this crate.
pub mod cache;
pub mod error;
pub mod loader;

// Re-export the key components to create a clean, public-facing API.
pub use cache::DatasetCache;
pub use error::{IngestionError, SchemaError};
pub use loader::{CsvSource, DatasetSource, REQUIRED_COLUMNS, dataset_from_frame, load_csv};
