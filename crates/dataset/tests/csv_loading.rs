//! Integration tests for loading the customer CSV.

use core_types::PaymentStatus;
use dataset::{CsvSource, DatasetCache, DatasetSource, IngestionError, SchemaError, load_csv};
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "customer_id,full_name,state,plan_type,plan_name,data_usage_mb,voice_usage_minutes,sms_count,bill_amount,payment_status,payment_method,kyc_status,network_quality_score,call_drop_rate,support_tickets_count,customer_satisfaction,customer_tier,referrals_made,device_type,os_type";

/// Write a CSV file with the given lines, header included by the caller.
fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn sample_csv() -> NamedTempFile {
    write_csv(&[
        HEADER,
        "C001,Ada Obi,Lagos,Prepaid,Xtra Value,1200.5,340,12,4500.50,Paid,Card,Verified,7.5,0.02,1,4.0,Gold,3,Smartphone,Android",
        "C002,Bayo Ade,Abuja,Postpaid,Business Plus,0,0,0,12000,Unpaid,Bank Transfer,Pending,6.1,0.05,4,2.5,Silver,0,Feature Phone,KaiOS",
        "C003,Chika Eze,Lagos,Prepaid,Pulse,250,15,40,800,Overdue,USSD,Verified,8.2,0.01,0,4.8,Bronze,1,Smartphone,iOS",
    ])
}

#[test]
fn test_loads_every_row_with_typed_values() {
    let file = sample_csv();
    let dataset = load_csv(file.path()).unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.distinct_customers(), 3);

    let first = &dataset.records()[0];
    assert_eq!(first.customer_id, "C001");
    assert_eq!(first.full_name, "Ada Obi");
    assert_eq!(first.data_usage_mb, 1200.5);
    assert_eq!(first.bill_amount, dec!(4500.50));
    assert_eq!(first.payment_status, PaymentStatus::Paid);
    assert_eq!(first.support_tickets_count, 1);
    assert_eq!(first.referrals_made, 3);

    let second = &dataset.records()[1];
    assert_eq!(second.payment_status, PaymentStatus::Unpaid);
    assert_eq!(second.bill_amount, dec!(12000));
    assert_eq!(second.os_type, "KaiOS");
}

#[test]
fn test_preserves_file_order() {
    let file = sample_csv();
    let dataset = load_csv(file.path()).unwrap();
    let ids: Vec<&str> = dataset.iter().map(|r| r.customer_id.as_str()).collect();
    assert_eq!(ids, vec!["C001", "C002", "C003"]);
}

#[test]
fn test_numeric_customer_ids_are_read_as_text() {
    let file = write_csv(&[
        HEADER,
        "1001,Ada Obi,Lagos,Prepaid,Pulse,1,1,1,10,Paid,Card,Verified,7,0.1,0,4,Gold,0,Smartphone,Android",
    ]);
    let dataset = load_csv(file.path()).unwrap();
    assert_eq!(dataset.records()[0].customer_id, "1001");
}

#[test]
fn test_leading_zero_ids_stay_distinct_customers() {
    let file = write_csv(&[
        HEADER,
        "007,Ada Obi,Lagos,Prepaid,Pulse,1,1,1,10,Paid,Card,Verified,7,0.1,0,4,Gold,0,Smartphone,Android",
        "7,Ada Obi,Lagos,Prepaid,Pulse,1,1,1,10,Paid,Card,Verified,7,0.1,0,4,Gold,0,Smartphone,Android",
    ]);
    let dataset = load_csv(file.path()).unwrap();
    let ids: Vec<&str> = dataset.iter().map(|r| r.customer_id.as_str()).collect();
    assert_eq!(ids, vec!["007", "7"]);
    assert_eq!(dataset.distinct_customers(), 2);
    assert_eq!(dataset.records()[0].call_drop_rate, 0.1);
}

#[test]
fn test_bill_amounts_are_read_exactly() {
    let file = write_csv(&[
        HEADER,
        "C001,Ada Obi,Lagos,Prepaid,Pulse,1,1,1,9007199254740993.01,Paid,Card,Verified,7,0.1,0,4,Gold,0,Smartphone,Android",
        "C002,Bayo Ade,Abuja,Prepaid,Pulse,1,1,1,0.10,Paid,Card,Verified,7,0.1,0,4,Gold,0,Smartphone,Android",
    ]);
    let dataset = load_csv(file.path()).unwrap();
    assert_eq!(dataset.records()[0].bill_amount, dec!(9007199254740993.01));
    assert_eq!(dataset.records()[1].bill_amount, dec!(0.10));
}

#[test]
fn test_non_numeric_bill_is_a_schema_error() {
    let file = write_csv(&[
        HEADER,
        "C001,Ada Obi,Lagos,Prepaid,Pulse,1,1,1,ten,Paid,Card,Verified,7,0.1,0,4,Gold,0,Smartphone,Android",
    ]);
    let err = load_csv(file.path()).unwrap_err();
    match err {
        IngestionError::Schema(SchemaError::NonNumeric { column, row }) => {
            assert_eq!(column, "bill_amount");
            assert_eq!(row, 1);
        }
        other => panic!("expected a non-numeric error, got {other:?}"),
    }
}

#[test]
fn test_header_only_file_is_an_empty_dataset() {
    let file = write_csv(&[HEADER]);
    let dataset = load_csv(file.path()).unwrap();
    assert!(dataset.is_empty());
}

#[test]
fn test_empty_file_is_rejected() {
    let file = write_csv(&[]);
    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, IngestionError::Empty(_)), "got {err:?}");
}

#[test]
fn test_unreadable_path_is_rejected() {
    let err = load_csv(std::path::Path::new("/definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, IngestionError::Unreadable { .. }), "got {err:?}");
}

#[test]
fn test_missing_column_is_named() {
    let header_without_kyc = HEADER.replace(",kyc_status", "");
    let file = write_csv(&[
        &header_without_kyc,
        "C001,Ada Obi,Lagos,Prepaid,Pulse,1,1,1,10,Paid,Card,7,0.1,0,4,Gold,0,Smartphone,Android",
    ]);
    let err = load_csv(file.path()).unwrap_err();
    match err {
        IngestionError::Schema(SchemaError::MissingColumn(column)) => {
            assert_eq!(column, "kyc_status")
        }
        other => panic!("expected a missing column error, got {other:?}"),
    }
}

#[test]
fn test_non_numeric_value_is_a_schema_error() {
    let file = write_csv(&[
        HEADER,
        "C001,Ada Obi,Lagos,Prepaid,Pulse,1,1,1,10,Paid,Card,Verified,7,0.1,0,4,Gold,0,Smartphone,Android",
        "C002,Bayo Ade,Abuja,Prepaid,Pulse,lots,1,1,10,Paid,Card,Verified,7,0.1,0,4,Gold,0,Smartphone,Android",
    ]);
    let err = load_csv(file.path()).unwrap_err();
    match err {
        IngestionError::Schema(SchemaError::NonNumeric { column, row }) => {
            assert_eq!(column, "data_usage_mb");
            assert_eq!(row, 2);
        }
        other => panic!("expected a non-numeric error, got {other:?}"),
    }
}

#[test]
fn test_blank_value_fails_instead_of_dropping_the_row() {
    let file = write_csv(&[
        HEADER,
        "C001,Ada Obi,Lagos,Prepaid,Pulse,1,1,1,10,Paid,Card,Verified,7,0.1,0,4,Gold,0,Smartphone,Android",
        "C002,Bayo Ade,Abuja,Prepaid,Pulse,1,1,1,,Paid,Card,Verified,7,0.1,0,4,Gold,0,Smartphone,Android",
    ]);
    let err = load_csv(file.path()).unwrap_err();
    match err {
        IngestionError::MissingValue { column, row } => {
            assert_eq!(column, "bill_amount");
            assert_eq!(row, 2);
        }
        other => panic!("expected a missing value error, got {other:?}"),
    }
}

#[test]
fn test_fractional_ticket_count_is_rejected() {
    let file = write_csv(&[
        HEADER,
        "C001,Ada Obi,Lagos,Prepaid,Pulse,1,1,1,10,Paid,Card,Verified,7,0.1,2.5,4,Gold,0,Smartphone,Android",
    ]);
    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, IngestionError::InvalidValue { row: 1, .. }), "got {err:?}");
}

#[test]
fn test_negative_bill_is_rejected() {
    let file = write_csv(&[
        HEADER,
        "C001,Ada Obi,Lagos,Prepaid,Pulse,1,1,1,-10,Paid,Card,Verified,7,0.1,0,4,Gold,0,Smartphone,Android",
    ]);
    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, IngestionError::InvalidValue { row: 1, .. }), "got {err:?}");
}

#[test]
fn test_cache_over_csv_source_picks_up_changes_on_reload() {
    let mut file = sample_csv();
    let cache = DatasetCache::new(CsvSource::new(file.path()));
    assert_eq!(cache.source().describe(), file.path().display().to_string());

    assert_eq!(cache.get().unwrap().len(), 3);

    writeln!(
        file,
        "C004,Dayo Musa,Kano,Prepaid,Pulse,5,5,5,50,Paid,Card,Verified,6,0.2,0,3,Bronze,0,Smartphone,Android"
    )
    .unwrap();
    file.flush().unwrap();

    // the cached handle does not change until a reload is requested
    assert_eq!(cache.get().unwrap().len(), 3);
    assert_eq!(cache.reload().unwrap().len(), 4);
    assert_eq!(cache.get().unwrap().len(), 4);
}
