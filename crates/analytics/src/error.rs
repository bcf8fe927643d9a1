use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Result table '{table}' has no column named '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("Column '{column}' of result table '{table}' is not numeric")]
    NotNumeric { table: String, column: String },
}
