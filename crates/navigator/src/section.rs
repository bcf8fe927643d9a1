use crate::error::NavigationError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The ten navigation keys, in menu order.
///
/// `Default` is the section shown when the operator has not picked one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    #[default]
    CustomerSegmentation,
    ChurnRiskAnalysis,
    TopUsersAndRevenue,
    KycCompliance,
    PlanPerformance,
    NetworkQuality,
    PaymentBehavior,
    SupportDemand,
    CustomerLoyalty,
    DeviceUsage,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::CustomerSegmentation,
        Section::ChurnRiskAnalysis,
        Section::TopUsersAndRevenue,
        Section::KycCompliance,
        Section::PlanPerformance,
        Section::NetworkQuality,
        Section::PaymentBehavior,
        Section::SupportDemand,
        Section::CustomerLoyalty,
        Section::DeviceUsage,
    ];

    /// The exact menu label.
    pub fn key(&self) -> &'static str {
        match self {
            Section::CustomerSegmentation => "Customer Segmentation",
            Section::ChurnRiskAnalysis => "Churn Risk Analysis",
            Section::TopUsersAndRevenue => "Top Users & Revenue",
            Section::KycCompliance => "KYC Compliance",
            Section::PlanPerformance => "Plan Performance",
            Section::NetworkQuality => "Network Quality",
            Section::PaymentBehavior => "Payment Behavior",
            Section::SupportDemand => "Support Demand",
            Section::CustomerLoyalty => "Customer Loyalty",
            Section::DeviceUsage => "Device Usage",
        }
    }

    /// Page heading shown above the section's tables.
    pub fn title(&self) -> &'static str {
        match self {
            Section::CustomerSegmentation => "Customer Segmentation",
            Section::ChurnRiskAnalysis => "Churn Risk Analysis",
            Section::TopUsersAndRevenue => "Top Users and Revenue Contributors",
            Section::KycCompliance => "KYC Compliance Check",
            Section::PlanPerformance => "Plan Performance",
            Section::NetworkQuality => "Network Quality Evaluation",
            Section::PaymentBehavior => "Payment Method Trends",
            Section::SupportDemand => "Customer Support Demand",
            Section::CustomerLoyalty => "Loyalty and Referrals",
            Section::DeviceUsage => "Device Type and OS Usage",
        }
    }

    /// Command-line friendly form of the key, e.g. `top-users-revenue`.
    pub fn slug(&self) -> String {
        self.key()
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// 1-based position in the menu.
    pub fn number(&self) -> usize {
        Section::ALL
            .iter()
            .position(|s| s == self)
            .map(|idx| idx + 1)
            .unwrap_or_default()
    }
}

impl FromStr for Section {
    type Err = NavigationError;

    /// Accepts the menu label (any case), its slug, or its menu number.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let wanted = input.trim();

        if let Ok(number) = wanted.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|idx| Section::ALL.get(idx).copied())
                .ok_or_else(|| NavigationError::UnknownSection(input.to_string()));
        }

        Section::ALL
            .into_iter()
            .find(|s| s.key().eq_ignore_ascii_case(wanted) || s.slug() == wanted.to_lowercase())
            .ok_or_else(|| NavigationError::UnknownSection(input.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_every_accepted_form() {
        for section in Section::ALL {
            assert_eq!(section.key().parse::<Section>(), Ok(section));
            assert_eq!(section.key().to_uppercase().parse::<Section>(), Ok(section));
            assert_eq!(section.slug().parse::<Section>(), Ok(section));
            assert_eq!(section.number().to_string().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn slugs_drop_punctuation() {
        assert_eq!(Section::TopUsersAndRevenue.slug(), "top-users-revenue");
        assert_eq!(Section::KycCompliance.slug(), "kyc-compliance");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(
            "Billing Disputes".parse::<Section>(),
            Err(NavigationError::UnknownSection("Billing Disputes".to_string()))
        );
        assert!("0".parse::<Section>().is_err());
        assert!("11".parse::<Section>().is_err());
    }

    #[test]
    fn default_is_the_first_menu_entry() {
        assert_eq!(Section::default(), Section::ALL[0]);
        assert_eq!(Section::default().number(), 1);
    }
}
