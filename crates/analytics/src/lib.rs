//! # Teleinsight Analytics Engine
//!
//! The aggregation engine behind every report section.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** This crate has no knowledge of files, configuration or
//!   rendering. It depends only on `core-types`.
//! - **Stateless Calculation:** `AnalyticsEngine` takes a read-only `Dataset`
//!   and produces typed rows. The same dataset always yields the same rows.
//! - **Flat Output:** hierarchical views (plan type → plan, device → OS) are
//!   returned as flat grouped rows; building the tree is the consumer's job.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: the ten query operations.
//! - `rows`: one typed row struct per operation, each implementing `TableRow`.
//! - `ResultTable` / `ChartHint`: the uniform, serializable output shape.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod rows;
pub mod table;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AnalyticsEngine, SUPPORT_TICKET_THRESHOLD, is_churn_risk};
pub use error::AnalyticsError;
pub use table::{ChartHint, Column, ResultTable, TableRow, Value, ValueKind};
