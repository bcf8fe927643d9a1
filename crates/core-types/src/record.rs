use crate::enums::PaymentStatus;
use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One customer row of the telecom dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    // Identity
    pub customer_id: String,
    pub full_name: String,

    // Geography and plan
    pub state: String,
    pub plan_type: String,
    pub plan_name: String,

    // Usage
    pub data_usage_mb: f64,
    pub voice_usage_minutes: f64,
    pub sms_count: f64,

    // Billing
    pub bill_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub payment_method: String,

    // Compliance
    pub kyc_status: String,

    // Network
    pub network_quality_score: f64,
    pub call_drop_rate: f64,

    // Support
    pub support_tickets_count: u32,
    pub customer_satisfaction: f64,

    // Loyalty
    pub customer_tier: String,
    pub referrals_made: u32,

    // Device
    pub device_type: String,
    pub os_type: String,
}

impl CustomerRecord {
    /// Checks the numeric invariants every record must hold.
    ///
    /// Usage counters and the bill must be non-negative, and every float must
    /// be finite so that sums and means never turn into NaN.
    pub fn validate(&self) -> Result<(), CoreError> {
        let non_negative = [
            ("data_usage_mb", self.data_usage_mb),
            ("voice_usage_minutes", self.voice_usage_minutes),
            ("sms_count", self.sms_count),
        ];
        for (name, value) in non_negative {
            check_finite(name, value)?;
            if value < 0.0 {
                return Err(CoreError::InvalidInput(
                    name.to_string(),
                    format!("{value} is negative"),
                ));
            }
        }

        check_finite("network_quality_score", self.network_quality_score)?;
        check_finite("call_drop_rate", self.call_drop_rate)?;
        check_finite("customer_satisfaction", self.customer_satisfaction)?;

        if self.bill_amount.is_sign_negative() && !self.bill_amount.is_zero() {
            return Err(CoreError::InvalidInput(
                "bill_amount".to_string(),
                format!("{} is negative", self.bill_amount),
            ));
        }

        Ok(())
    }
}

fn check_finite(name: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(
            name.to_string(),
            format!("{value} is not a finite number"),
        ))
    }
}
