use crate::record::CustomerRecord;
use std::collections::HashSet;

/// The immutable, ordered collection of customer records the reports run over.
///
/// There is no way to mutate a `Dataset` once it is built; a fresh load produces
/// a new value instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<CustomerRecord>,
}

impl Dataset {
    pub fn new(records: Vec<CustomerRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CustomerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct `customer_id` values. Differs from `len()` only when
    /// the source contains duplicate IDs.
    pub fn distinct_customers(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.customer_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CustomerRecord;
    type IntoIter = std::slice::Iter<'a, CustomerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<CustomerRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = CustomerRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
