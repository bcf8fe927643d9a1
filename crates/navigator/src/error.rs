use crate::section::Section;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Unknown section '{0}'")]
    UnknownSection(String),

    #[error("No query is registered for section '{0}'")]
    NotRegistered(Section),

    #[error("A query for section '{0}' is already registered")]
    DuplicateSection(Section),
}
