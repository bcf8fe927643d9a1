use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetSettings,
    pub reports: ReportSettings,
    pub logging: LoggingSettings,
}

/// Where the customer dataset lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    /// Path to the CSV file with one header row.
    pub path: PathBuf,
}

/// Parameters shared by the report sections.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// How many rows the "top N" rankings keep.
    pub top_n: usize,
}

/// Controls the tracing subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set (e.g. "info", "teleinsight=debug").
    pub level: String,
    /// When set, logs are also written to a daily-rotated file in this directory.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

/// How the binary prints results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

// --- Default Implementations ---
// A missing section (or a missing config file altogether) falls back to these.

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("telecom_customers.csv"),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "teleinsight.log".to_string(),
        }
    }
}
