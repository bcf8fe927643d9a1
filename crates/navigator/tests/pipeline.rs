//! End-to-end: CSV on disk → dataset → every registered section.

use analytics::Value;
use configuration::ReportSettings;
use core_types::Dataset;
use dataset::load_csv;
use navigator::{QueryRegistry, Section};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "customer_id,full_name,state,plan_type,plan_name,data_usage_mb,voice_usage_minutes,sms_count,bill_amount,payment_status,payment_method,kyc_status,network_quality_score,call_drop_rate,support_tickets_count,customer_satisfaction,customer_tier,referrals_made,device_type,os_type";

fn load_sample() -> Dataset {
    let mut file = NamedTempFile::new().unwrap();
    for line in [
        HEADER,
        "C001,Ada Obi,Lagos,Prepaid,Xtra Value,1200.5,340,12,4500.50,Paid,Card,Verified,7.5,0.02,1,4.0,Gold,3,Smartphone,Android",
        "C002,Bayo Ade,Abuja,Postpaid,Business Plus,0,0,0,12000,Unpaid,Bank Transfer,Pending,6.1,0.05,4,2.5,Silver,0,Feature Phone,KaiOS",
        "C003,Chika Eze,Lagos,Prepaid,Pulse,250,15,40,800,Overdue,USSD,Verified,8.2,0.01,0,4.8,Bronze,1,Smartphone,iOS",
        "C004,Dayo Bello,Abuja,Prepaid,Xtra Value,3000,120,5,1500,Paid,Card,Verified,5.0,0.08,5,1.5,Gold,2,Smartphone,Android",
    ] {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    load_csv(file.path()).unwrap()
}

fn integer(value: &Value) -> u64 {
    match value {
        Value::Integer(v) => *v,
        other => panic!("expected an integer cell, got {other:?}"),
    }
}

fn text(value: &Value) -> &str {
    value.as_text().expect("expected a text cell")
}

#[test]
fn test_every_section_produces_schema_conformant_tables() {
    let dataset = load_sample();
    let registry = QueryRegistry::standard(&ReportSettings { top_n: 2 });

    for section in registry.sections() {
        let report = registry.run(section, &dataset).unwrap();
        assert_eq!(report.title, section.title());
        for table in &report.tables {
            for row in table.rows() {
                assert_eq!(row.len(), table.columns().len(), "{}", table.title());
                for (cell, column) in row.iter().zip(table.columns()) {
                    assert_eq!(cell.kind(), column.kind, "{}", table.title());
                }
            }
        }
    }
}

#[test]
fn test_payment_counts_cover_every_record() {
    let dataset = load_sample();
    let report = QueryRegistry::default()
        .run(Section::PaymentBehavior, &dataset)
        .unwrap();

    let table = &report.tables[0];
    let count = table.column_index("count").unwrap();
    let total: u64 = table.rows().iter().map(|r| integer(&r[count])).sum();
    assert_eq!(total, dataset.len() as u64);
    assert_eq!(text(&table.rows()[0][0]), "Card");
    assert_eq!(integer(&table.rows()[0][count]), 2);
}

#[test]
fn test_kyc_totals_and_defaulters() {
    let dataset = load_sample();
    let report = QueryRegistry::default()
        .run_key("KYC Compliance", &dataset)
        .unwrap();

    let rows: Vec<(String, u64, u64)> = report.tables[0]
        .rows()
        .iter()
        .map(|r| (text(&r[0]).to_string(), integer(&r[1]), integer(&r[2])))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Pending".to_string(), 1, 1),
            ("Verified".to_string(), 3, 1),
        ]
    );
}

#[test]
fn test_churn_and_support_filters_keep_dataset_order() {
    let dataset = load_sample();
    let registry = QueryRegistry::default();

    let churn = registry.run(Section::ChurnRiskAnalysis, &dataset).unwrap();
    let ids: Vec<&str> = churn.tables[0].rows().iter().map(|r| text(&r[0])).collect();
    assert_eq!(ids, vec!["C002"]);

    let support = registry.run(Section::SupportDemand, &dataset).unwrap();
    let ids: Vec<&str> = support.tables[0].rows().iter().map(|r| text(&r[0])).collect();
    assert_eq!(ids, vec!["C002", "C004"]);
}

#[test]
fn test_top_rankings_respect_configured_n() {
    let dataset = load_sample();
    let registry = QueryRegistry::standard(&ReportSettings { top_n: 2 });
    let report = registry.run(Section::TopUsersAndRevenue, &dataset).unwrap();

    let users: Vec<&str> = report.tables[0].rows().iter().map(|r| text(&r[0])).collect();
    assert_eq!(users, vec!["Dayo Bello", "Ada Obi"]);

    let payers: Vec<&str> = report.tables[1].rows().iter().map(|r| text(&r[0])).collect();
    assert_eq!(payers, vec!["Bayo Ade", "Ada Obi"]);
}

#[test]
fn test_segmentation_counts_distinct_customers() {
    let dataset = load_sample();
    let report = QueryRegistry::default()
        .run(Section::CustomerSegmentation, &dataset)
        .unwrap();

    let rows: Vec<(String, String, u64)> = report.tables[0]
        .rows()
        .iter()
        .map(|r| (text(&r[0]).to_string(), text(&r[1]).to_string(), integer(&r[2])))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Abuja".to_string(), "Postpaid".to_string(), 1),
            ("Abuja".to_string(), "Prepaid".to_string(), 1),
            ("Lagos".to_string(), "Prepaid".to_string(), 2),
        ]
    );
}

#[test]
fn test_repeated_runs_serialize_identically() {
    let dataset = load_sample();
    let registry = QueryRegistry::default();

    for section in Section::ALL {
        let first = serde_json::to_vec(&registry.run(section, &dataset).unwrap()).unwrap();
        let second = serde_json::to_vec(&registry.run(section, &dataset).unwrap()).unwrap();
        assert_eq!(first, second, "{section}");
    }
}
