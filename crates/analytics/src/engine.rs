use crate::rows::{
    ChurnRiskRow, DataUserRow, DeviceUsageRow, KycRow, LoyaltyRow, NetworkQualityRow,
    PayerRow, PaymentMethodRow, PlanRevenueRow, SegmentRow, SupportDemandRow,
};
use core_types::{CustomerRecord, Dataset};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Customers with at least this many tickets count as high support demand.
pub const SUPPORT_TICKET_THRESHOLD: u32 = 3;

/// A stateless calculator for the customer reports.
///
/// Every method is a pure function of the dataset it is given: nothing is
/// cached between calls and the dataset is only ever read. Grouped outputs are
/// ordered by their group key, filtered outputs keep dataset order.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct customers per (state, plan type). Combinations with no
    /// customers are absent rather than zero.
    pub fn segmentation(&self, dataset: &Dataset) -> Vec<SegmentRow> {
        let mut groups: BTreeMap<(&str, &str), BTreeSet<&str>> = BTreeMap::new();
        for r in dataset {
            groups
                .entry((r.state.as_str(), r.plan_type.as_str()))
                .or_default()
                .insert(r.customer_id.as_str());
        }

        let rows: Vec<SegmentRow> = groups
            .into_iter()
            .map(|((state, plan_type), ids)| SegmentRow {
                state: state.to_string(),
                plan_type: plan_type.to_string(),
                customer_count: ids.len() as u64,
            })
            .collect();
        tracing::debug!(rows = rows.len(), "Segmentation computed");
        rows
    }

    /// Defaulting customers who used no data, voice or SMS at all.
    pub fn churn_risk(&self, dataset: &Dataset) -> Vec<ChurnRiskRow> {
        let rows: Vec<ChurnRiskRow> = dataset
            .iter()
            .filter(|r| is_churn_risk(r))
            .map(|r| ChurnRiskRow {
                customer_id: r.customer_id.clone(),
                full_name: r.full_name.clone(),
                payment_status: r.payment_status.clone(),
            })
            .collect();
        tracing::debug!(rows = rows.len(), "Churn risk computed");
        rows
    }

    /// The `n` records with the highest data usage, largest first.
    ///
    /// Records with equal usage keep their dataset order.
    pub fn top_data_users(&self, dataset: &Dataset, n: usize) -> Vec<DataUserRow> {
        let mut ranked: Vec<&CustomerRecord> = dataset.iter().collect();
        // `sort_by` is stable, which is what makes the tie-break deterministic.
        ranked.sort_by(|a, b| {
            b.data_usage_mb
                .partial_cmp(&a.data_usage_mb)
                .unwrap_or(Ordering::Equal)
        });

        ranked
            .into_iter()
            .take(n)
            .map(|r| DataUserRow {
                full_name: r.full_name.clone(),
                data_usage_mb: r.data_usage_mb,
            })
            .collect()
    }

    /// Bills summed per (customer_id, full_name), then the `n` largest totals.
    ///
    /// Equal totals keep the order in which each customer first appears.
    pub fn top_payers(&self, dataset: &Dataset, n: usize) -> Vec<PayerRow> {
        let mut totals: Vec<PayerRow> = Vec::new();
        let mut index: HashMap<(&str, &str), usize> = HashMap::new();
        for r in dataset {
            let key = (r.customer_id.as_str(), r.full_name.as_str());
            match index.get(&key) {
                Some(&i) => totals[i].bill_amount += r.bill_amount,
                None => {
                    index.insert(key, totals.len());
                    totals.push(PayerRow {
                        customer_id: r.customer_id.clone(),
                        full_name: r.full_name.clone(),
                        bill_amount: r.bill_amount,
                    });
                }
            }
        }

        totals.sort_by(|a, b| b.bill_amount.cmp(&a.bill_amount));
        totals.truncate(n);
        totals
    }

    /// Users and defaulters per KYC status.
    pub fn kyc_compliance(&self, dataset: &Dataset) -> Vec<KycRow> {
        let mut groups: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
        for r in dataset {
            let (total, defaulters) = groups.entry(r.kyc_status.as_str()).or_default();
            *total += 1;
            if r.payment_status.is_defaulting() {
                *defaulters += 1;
            }
        }

        groups
            .into_iter()
            .map(|(kyc_status, (total_users, defaulters))| KycRow {
                kyc_status: kyc_status.to_string(),
                total_users,
                defaulters,
            })
            .collect()
    }

    /// Revenue per (plan type, plan name). The rows are flat; any per-type
    /// total is for the consumer to derive.
    pub fn plan_performance(&self, dataset: &Dataset) -> Vec<PlanRevenueRow> {
        let mut groups: BTreeMap<(&str, &str), Decimal> = BTreeMap::new();
        for r in dataset {
            *groups
                .entry((r.plan_type.as_str(), r.plan_name.as_str()))
                .or_default() += r.bill_amount;
        }

        groups
            .into_iter()
            .map(|((plan_type, plan_name), revenue)| PlanRevenueRow {
                plan_type: plan_type.to_string(),
                plan_name: plan_name.to_string(),
                revenue,
            })
            .collect()
    }

    /// Mean network score and call drop rate per state. A state whose means
    /// are undefined is left out.
    pub fn network_quality(&self, dataset: &Dataset) -> Vec<NetworkQualityRow> {
        let mut groups: BTreeMap<&str, (f64, f64, usize)> = BTreeMap::new();
        for r in dataset {
            let (score, drops, count) = groups.entry(r.state.as_str()).or_default();
            *score += r.network_quality_score;
            *drops += r.call_drop_rate;
            *count += 1;
        }

        let rows: Vec<NetworkQualityRow> = groups
            .into_iter()
            .filter_map(|(state, (score, drops, count))| {
                Some(NetworkQualityRow {
                    state: state.to_string(),
                    avg_score: mean(score, count)?,
                    avg_drops: mean(drops, count)?,
                })
            })
            .collect();
        tracing::debug!(rows = rows.len(), "Network quality computed");
        rows
    }

    /// Customers per payment method, most common first.
    ///
    /// The counts always add up to the number of records.
    pub fn payment_behavior(&self, dataset: &Dataset) -> Vec<PaymentMethodRow> {
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for r in dataset {
            *counts.entry(r.payment_method.as_str()).or_default() += 1;
        }

        let mut rows: Vec<PaymentMethodRow> = counts
            .into_iter()
            .map(|(payment_method, count)| PaymentMethodRow {
                payment_method: payment_method.to_string(),
                count,
            })
            .collect();
        // Stable: equal counts stay in method-name order.
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }

    /// Customers who raised `SUPPORT_TICKET_THRESHOLD` or more tickets.
    pub fn support_demand(&self, dataset: &Dataset) -> Vec<SupportDemandRow> {
        dataset
            .iter()
            .filter(|r| r.support_tickets_count >= SUPPORT_TICKET_THRESHOLD)
            .map(|r| SupportDemandRow {
                customer_id: r.customer_id.clone(),
                full_name: r.full_name.clone(),
                support_tickets_count: r.support_tickets_count,
                customer_satisfaction: r.customer_satisfaction,
            })
            .collect()
    }

    pub fn customer_loyalty(&self, dataset: &Dataset) -> Vec<LoyaltyRow> {
        let mut groups: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
        for r in dataset {
            let (total, count) = groups.entry(r.customer_tier.as_str()).or_default();
            *total += u64::from(r.referrals_made);
            *count += 1;
        }

        groups
            .into_iter()
            .filter_map(|(tier, (total, count))| {
                Some(LoyaltyRow {
                    customer_tier: tier.to_string(),
                    avg_referrals: mean(total as f64, count)?,
                    total_referrals: total,
                })
            })
            .collect()
    }

    /// Records per (device type, OS). Flat, like `plan_performance`.
    pub fn device_usage(&self, dataset: &Dataset) -> Vec<DeviceUsageRow> {
        let mut groups: BTreeMap<(&str, &str), u64> = BTreeMap::new();
        for r in dataset {
            *groups
                .entry((r.device_type.as_str(), r.os_type.as_str()))
                .or_default() += 1;
        }

        groups
            .into_iter()
            .map(|((device_type, os_type), user_count)| DeviceUsageRow {
                device_type: device_type.to_string(),
                os_type: os_type.to_string(),
                user_count,
            })
            .collect()
    }
}

/// All four conditions must hold: a defaulting payment status and zero usage
/// on every channel.
pub fn is_churn_risk(record: &CustomerRecord) -> bool {
    record.payment_status.is_defaulting()
        && record.data_usage_mb == 0.0
        && record.voice_usage_minutes == 0.0
        && record.sms_count == 0.0
}

/// `None` for an empty group or a result that is not a finite number.
fn mean(sum: f64, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let value = sum / count as f64;
    value.is_finite().then_some(value)
}
