//! Typed output rows, one struct per query.

use crate::table::{Column, TableRow, Value, ValueKind};
use core_types::PaymentStatus;
use rust_decimal::Decimal;
use serde::Serialize;

/// Distinct customers per (state, plan type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentRow {
    pub state: String,
    pub plan_type: String,
    pub customer_count: u64,
}

impl TableRow for SegmentRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("state", ValueKind::Text),
        Column::new("plan_type", ValueKind::Text),
        Column::new("customer_count", ValueKind::Integer),
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            Value::Text(self.state.clone()),
            Value::Text(self.plan_type.clone()),
            Value::Integer(self.customer_count),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChurnRiskRow {
    pub customer_id: String,
    pub full_name: String,
    pub payment_status: PaymentStatus,
}

impl TableRow for ChurnRiskRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("customer_id", ValueKind::Text),
        Column::new("full_name", ValueKind::Text),
        Column::new("payment_status", ValueKind::Text),
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            Value::Text(self.customer_id.clone()),
            Value::Text(self.full_name.clone()),
            Value::Text(self.payment_status.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataUserRow {
    pub full_name: String,
    pub data_usage_mb: f64,
}

impl TableRow for DataUserRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("full_name", ValueKind::Text),
        Column::new("data_usage_mb", ValueKind::Float),
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            Value::Text(self.full_name.clone()),
            Value::Float(self.data_usage_mb),
        ]
    }
}

/// Total billed per customer. `customer_id` keeps same-named customers apart
/// but is not part of the rendered table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayerRow {
    pub customer_id: String,
    pub full_name: String,
    pub bill_amount: Decimal,
}

impl TableRow for PayerRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("full_name", ValueKind::Text),
        Column::new("bill_amount", ValueKind::Money),
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            Value::Text(self.full_name.clone()),
            Value::Money(self.bill_amount),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KycRow {
    pub kyc_status: String,
    pub total_users: u64,
    pub defaulters: u64,
}

impl TableRow for KycRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("kyc_status", ValueKind::Text),
        Column::new("total_users", ValueKind::Integer),
        Column::new("defaulters", ValueKind::Integer),
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            Value::Text(self.kyc_status.clone()),
            Value::Integer(self.total_users),
            Value::Integer(self.defaulters),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanRevenueRow {
    pub plan_type: String,
    pub plan_name: String,
    pub revenue: Decimal,
}

impl TableRow for PlanRevenueRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("plan_type", ValueKind::Text),
        Column::new("plan_name", ValueKind::Text),
        Column::new("revenue", ValueKind::Money),
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            Value::Text(self.plan_type.clone()),
            Value::Text(self.plan_name.clone()),
            Value::Money(self.revenue),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkQualityRow {
    pub state: String,
    pub avg_score: f64,
    pub avg_drops: f64,
}

impl TableRow for NetworkQualityRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("state", ValueKind::Text),
        Column::new("avg_score", ValueKind::Float),
        Column::new("avg_drops", ValueKind::Float),
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            Value::Text(self.state.clone()),
            Value::Float(self.avg_score),
            Value::Float(self.avg_drops),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethodRow {
    pub payment_method: String,
    pub count: u64,
}

impl TableRow for PaymentMethodRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("payment_method", ValueKind::Text),
        Column::new("count", ValueKind::Integer),
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            Value::Text(self.payment_method.clone()),
            Value::Integer(self.count),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupportDemandRow {
    pub customer_id: String,
    pub full_name: String,
    pub support_tickets_count: u32,
    pub customer_satisfaction: f64,
}

impl TableRow for SupportDemandRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("customer_id", ValueKind::Text),
        Column::new("full_name", ValueKind::Text),
        Column::new("support_tickets_count", ValueKind::Integer),
        Column::new("customer_satisfaction", ValueKind::Float),
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            Value::Text(self.customer_id.clone()),
            Value::Text(self.full_name.clone()),
            Value::Integer(u64::from(self.support_tickets_count)),
            Value::Float(self.customer_satisfaction),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoyaltyRow {
    pub customer_tier: String,
    pub avg_referrals: f64,
    pub total_referrals: u64,
}

impl TableRow for LoyaltyRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("customer_tier", ValueKind::Text),
        Column::new("avg_referrals", ValueKind::Float),
        Column::new("total_referrals", ValueKind::Integer),
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            Value::Text(self.customer_tier.clone()),
            Value::Float(self.avg_referrals),
            Value::Integer(self.total_referrals),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceUsageRow {
    pub device_type: String,
    pub os_type: String,
    pub user_count: u64,
}

impl TableRow for DeviceUsageRow {
    const COLUMNS: &'static [Column] = &[
        Column::new("device_type", ValueKind::Text),
        Column::new("os_type", ValueKind::Text),
        Column::new("user_count", ValueKind::Integer),
    ];

    fn cells(&self) -> Vec<Value> {
        vec![
            Value::Text(self.device_type.clone()),
            Value::Text(self.os_type.clone()),
            Value::Integer(self.user_count),
        ]
    }
}
