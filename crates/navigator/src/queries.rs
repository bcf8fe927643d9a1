//! One `Query` per section, each wrapping a single analytics operation and
//! attaching its chart hint.

use crate::Query;
use crate::section::Section;
use analytics::{AnalyticsEngine, ChartHint, ResultTable};
use core_types::Dataset;

pub struct CustomerSegmentation;

impl Query for CustomerSegmentation {
    fn section(&self) -> Section {
        Section::CustomerSegmentation
    }

    fn run(&self, engine: &AnalyticsEngine, dataset: &Dataset) -> Vec<ResultTable> {
        let chart = ChartHint::Bar {
            x: "state",
            y: vec!["customer_count"],
            color: Some("plan_type"),
            grouped: false,
        };
        vec![ResultTable::from_rows(
            "Customer Count by State and Plan Type",
            chart,
            &engine.segmentation(dataset),
        )]
    }
}

pub struct ChurnRiskAnalysis;

impl Query for ChurnRiskAnalysis {
    fn section(&self) -> Section {
        Section::ChurnRiskAnalysis
    }

    fn run(&self, engine: &AnalyticsEngine, dataset: &Dataset) -> Vec<ResultTable> {
        vec![ResultTable::from_rows(
            "Customers at High Risk of Churn",
            ChartHint::Table,
            &engine.churn_risk(dataset),
        )]
    }
}

/// Two rankings: heaviest data users and biggest payers.
pub struct TopUsersAndRevenue {
    pub top_n: usize,
}

impl Query for TopUsersAndRevenue {
    fn section(&self) -> Section {
        Section::TopUsersAndRevenue
    }

    fn run(&self, engine: &AnalyticsEngine, dataset: &Dataset) -> Vec<ResultTable> {
        let users = ResultTable::from_rows(
            format!("Top {} Data Users", self.top_n),
            ChartHint::Bar {
                x: "full_name",
                y: vec!["data_usage_mb"],
                color: None,
                grouped: false,
            },
            &engine.top_data_users(dataset, self.top_n),
        );
        let payers = ResultTable::from_rows(
            format!("Top {} Revenue-Contributing Customers", self.top_n),
            ChartHint::Bar {
                x: "full_name",
                y: vec!["bill_amount"],
                color: None,
                grouped: false,
            },
            &engine.top_payers(dataset, self.top_n),
        );
        vec![users, payers]
    }
}

pub struct KycCompliance;

impl Query for KycCompliance {
    fn section(&self) -> Section {
        Section::KycCompliance
    }

    fn run(&self, engine: &AnalyticsEngine, dataset: &Dataset) -> Vec<ResultTable> {
        let chart = ChartHint::Bar {
            x: "kyc_status",
            y: vec!["total_users", "defaulters"],
            color: None,
            grouped: true,
        };
        vec![ResultTable::from_rows(
            "KYC Status vs Defaulters",
            chart,
            &engine.kyc_compliance(dataset),
        )]
    }
}

pub struct PlanPerformance;

impl Query for PlanPerformance {
    fn section(&self) -> Section {
        Section::PlanPerformance
    }

    fn run(&self, engine: &AnalyticsEngine, dataset: &Dataset) -> Vec<ResultTable> {
        let chart = ChartHint::Treemap {
            path: vec!["plan_type", "plan_name"],
            values: "revenue",
        };
        vec![ResultTable::from_rows(
            "Revenue by Plan",
            chart,
            &engine.plan_performance(dataset),
        )]
    }
}

pub struct NetworkQuality;

impl Query for NetworkQuality {
    fn section(&self) -> Section {
        Section::NetworkQuality
    }

    fn run(&self, engine: &AnalyticsEngine, dataset: &Dataset) -> Vec<ResultTable> {
        let chart = ChartHint::Bar {
            x: "state",
            y: vec!["avg_score"],
            color: None,
            grouped: false,
        };
        vec![ResultTable::from_rows(
            "Average Network Quality by State",
            chart,
            &engine.network_quality(dataset),
        )]
    }
}

pub struct PaymentBehavior;

impl Query for PaymentBehavior {
    fn section(&self) -> Section {
        Section::PaymentBehavior
    }

    fn run(&self, engine: &AnalyticsEngine, dataset: &Dataset) -> Vec<ResultTable> {
        let chart = ChartHint::Pie {
            names: "payment_method",
            values: "count",
        };
        vec![ResultTable::from_rows(
            "Distribution of Payment Methods",
            chart,
            &engine.payment_behavior(dataset),
        )]
    }
}

pub struct SupportDemand;

impl Query for SupportDemand {
    fn section(&self) -> Section {
        Section::SupportDemand
    }

    fn run(&self, engine: &AnalyticsEngine, dataset: &Dataset) -> Vec<ResultTable> {
        let chart = ChartHint::Scatter {
            x: "support_tickets_count",
            y: "customer_satisfaction",
            color: Some("full_name"),
        };
        vec![ResultTable::from_rows(
            "Support Tickets vs Satisfaction",
            chart,
            &engine.support_demand(dataset),
        )]
    }
}

pub struct CustomerLoyalty;

impl Query for CustomerLoyalty {
    fn section(&self) -> Section {
        Section::CustomerLoyalty
    }

    fn run(&self, engine: &AnalyticsEngine, dataset: &Dataset) -> Vec<ResultTable> {
        let chart = ChartHint::Bar {
            x: "customer_tier",
            y: vec!["total_referrals"],
            color: None,
            grouped: false,
        };
        vec![ResultTable::from_rows(
            "Total Referrals by Loyalty Tier",
            chart,
            &engine.customer_loyalty(dataset),
        )]
    }
}

pub struct DeviceUsage;

impl Query for DeviceUsage {
    fn section(&self) -> Section {
        Section::DeviceUsage
    }

    fn run(&self, engine: &AnalyticsEngine, dataset: &Dataset) -> Vec<ResultTable> {
        let chart = ChartHint::Sunburst {
            path: vec!["device_type", "os_type"],
            values: "user_count",
        };
        vec![ResultTable::from_rows(
            "Device Usage Patterns",
            chart,
            &engine.device_usage(dataset),
        )]
    }
}
