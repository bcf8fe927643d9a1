use crate::section::Section;
use analytics::ResultTable;
use serde::Serialize;

/// Everything one navigation event produces: the section's heading and its
/// result tables, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub section: Section,
    pub title: &'static str,
    pub tables: Vec<ResultTable>,
}

impl Report {
    /// True when no table has any rows. Not an error; the consumer shows "no data".
    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(ResultTable::is_empty)
    }
}
