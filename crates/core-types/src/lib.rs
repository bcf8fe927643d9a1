//! # Teleinsight Core Types
//!
//! The foundational data structures shared by every other crate: the
//! `CustomerRecord` row, its `PaymentStatus`, and the immutable `Dataset`.
//! This crate has no knowledge of files, configuration or rendering.

pub mod dataset;
pub mod enums;
pub mod error;
pub mod record;

// Re-export the core types to provide a clean public API.
pub use dataset::Dataset;
pub use enums::PaymentStatus;
pub use error::CoreError;
pub use record::CustomerRecord;
