use serde::{Deserialize, Serialize};
use std::fmt;

/// The billing state of a customer's most recent invoice.
///
/// Only `Unpaid` and `Overdue` carry meaning for the reports; any other label
/// found in the dataset is kept verbatim so it still shows up in listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Overdue,
    Other(String),
}

impl PaymentStatus {
    /// True for the statuses that count a customer as a defaulter.
    pub fn is_defaulting(&self) -> bool {
        matches!(self, PaymentStatus::Unpaid | PaymentStatus::Overdue)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::Other(label) => label,
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(value: &str) -> Self {
        match value {
            "Paid" => PaymentStatus::Paid,
            "Unpaid" => PaymentStatus::Unpaid,
            "Overdue" => PaymentStatus::Overdue,
            other => PaymentStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        PaymentStatus::from(value.as_str())
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unpaid_and_overdue_are_defaulting() {
        assert!(PaymentStatus::Unpaid.is_defaulting());
        assert!(PaymentStatus::Overdue.is_defaulting());
        assert!(!PaymentStatus::Paid.is_defaulting());
        assert!(!PaymentStatus::from("Pending").is_defaulting());
    }

    #[test]
    fn unknown_labels_are_kept_verbatim() {
        let status = PaymentStatus::from("Partially Paid");
        assert_eq!(status, PaymentStatus::Other("Partially Paid".to_string()));
        assert_eq!(status.to_string(), "Partially Paid");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!(PaymentStatus::from("unpaid"), PaymentStatus::Other("unpaid".to_string()));
        assert_eq!(PaymentStatus::from("Unpaid"), PaymentStatus::Unpaid);
    }
}
