use crate::error::{IngestionError, SchemaError};
use core_types::{CustomerRecord, Dataset, PaymentStatus};
use polars::prelude::*;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

/// Every column a source must provide, named exactly as in the header row.
pub const REQUIRED_COLUMNS: [&str; 20] = [
    "customer_id",
    "full_name",
    "state",
    "plan_type",
    "plan_name",
    "data_usage_mb",
    "voice_usage_minutes",
    "sms_count",
    "bill_amount",
    "payment_status",
    "payment_method",
    "kyc_status",
    "network_quality_score",
    "call_drop_rate",
    "support_tickets_count",
    "customer_satisfaction",
    "customer_tier",
    "referrals_made",
    "device_type",
    "os_type",
];

/// Anything that can produce a complete `Dataset` on demand.
///
/// The cache only talks to this trait, so a reload can be driven by any source.
pub trait DatasetSource: Send + Sync {
    fn load(&self) -> Result<Dataset, IngestionError>;

    /// Human-readable origin of the data, used in log lines.
    fn describe(&self) -> String;
}

/// A comma-delimited, UTF-8 CSV file whose first row is the header.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for CsvSource {
    fn load(&self) -> Result<Dataset, IngestionError> {
        load_csv(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads and validates the CSV file at `path`.
///
/// Malformed rows fail the whole load; nothing is silently dropped.
pub fn load_csv(path: &Path) -> Result<Dataset, IngestionError> {
    let started = Instant::now();

    let metadata = std::fs::metadata(path).map_err(|source| IngestionError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() == 0 {
        return Err(IngestionError::Empty(path.to_path_buf()));
    }

    // No type inference: every column arrives as text, so identifiers such as
    // `007` keep their leading zeros and numbers are parsed column by column below.
    let frame = CsvReader::from_path(path)?
        .has_header(true)
        .infer_schema(Some(0))
        .finish()?;
    if frame.width() == 0 {
        return Err(IngestionError::Empty(path.to_path_buf()));
    }

    let dataset = dataset_from_frame(&frame)?;

    tracing::info!(
        source = %path.display(),
        rows = dataset.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Dataset loaded"
    );

    Ok(dataset)
}

/// Converts a parsed frame into typed records, enforcing the schema.
pub fn dataset_from_frame(frame: &DataFrame) -> Result<Dataset, IngestionError> {
    let present = frame.get_column_names();
    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|c| !present.contains(c)) {
        return Err(SchemaError::MissingColumn(missing.to_string()).into());
    }

    let customer_id = text_column(frame, "customer_id")?;
    let full_name = text_column(frame, "full_name")?;
    let state = text_column(frame, "state")?;
    let plan_type = text_column(frame, "plan_type")?;
    let plan_name = text_column(frame, "plan_name")?;
    let data_usage_mb = numeric_column(frame, "data_usage_mb")?;
    let voice_usage_minutes = numeric_column(frame, "voice_usage_minutes")?;
    let sms_count = numeric_column(frame, "sms_count")?;
    let bill_amount = money_column(frame, "bill_amount")?;
    let payment_status = text_column(frame, "payment_status")?;
    let payment_method = text_column(frame, "payment_method")?;
    let kyc_status = text_column(frame, "kyc_status")?;
    let network_quality_score = numeric_column(frame, "network_quality_score")?;
    let call_drop_rate = numeric_column(frame, "call_drop_rate")?;
    let support_tickets_count = count_column(frame, "support_tickets_count")?;
    let customer_satisfaction = numeric_column(frame, "customer_satisfaction")?;
    let customer_tier = text_column(frame, "customer_tier")?;
    let referrals_made = count_column(frame, "referrals_made")?;
    let device_type = text_column(frame, "device_type")?;
    let os_type = text_column(frame, "os_type")?;

    let mut records = Vec::with_capacity(frame.height());
    for i in 0..frame.height() {
        let record = CustomerRecord {
            customer_id: customer_id[i].clone(),
            full_name: full_name[i].clone(),
            state: state[i].clone(),
            plan_type: plan_type[i].clone(),
            plan_name: plan_name[i].clone(),
            data_usage_mb: data_usage_mb[i],
            voice_usage_minutes: voice_usage_minutes[i],
            sms_count: sms_count[i],
            bill_amount: bill_amount[i],
            payment_status: PaymentStatus::from(payment_status[i].as_str()),
            payment_method: payment_method[i].clone(),
            kyc_status: kyc_status[i].clone(),
            network_quality_score: network_quality_score[i],
            call_drop_rate: call_drop_rate[i],
            support_tickets_count: support_tickets_count[i],
            customer_satisfaction: customer_satisfaction[i],
            customer_tier: customer_tier[i].clone(),
            referrals_made: referrals_made[i],
            device_type: device_type[i].clone(),
            os_type: os_type[i].clone(),
        };
        record.validate().map_err(|e| IngestionError::InvalidValue {
            row: i + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(Dataset::new(records))
}

fn column<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Series, IngestionError> {
    frame
        .column(name)
        .map_err(|_| SchemaError::MissingColumn(name.to_string()).into())
}

fn text_column(frame: &DataFrame, name: &str) -> Result<Vec<String>, IngestionError> {
    let series = column(frame, name)?.cast(&DataType::String)?;
    series
        .str()?
        .into_iter()
        .enumerate()
        .map(|(idx, value)| match value {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(IngestionError::MissingValue {
                column: name.to_string(),
                row: idx + 1,
            }),
        })
        .collect()
}

/// A null after the cast is either a blank cell (null before the cast too) or
/// text that does not parse as a number.
fn numeric_column(frame: &DataFrame, name: &str) -> Result<Vec<f64>, IngestionError> {
    let original = column(frame, name)?;
    let missing = original.is_null();
    let cast = original.cast(&DataType::Float64)?;

    let mut values = Vec::with_capacity(cast.len());
    for (idx, (was_null, value)) in missing.into_iter().zip(cast.f64()?.into_iter()).enumerate() {
        match value {
            Some(v) => values.push(v),
            None if was_null.unwrap_or(true) => {
                return Err(IngestionError::MissingValue {
                    column: name.to_string(),
                    row: idx + 1,
                });
            }
            None => {
                return Err(SchemaError::NonNumeric {
                    column: name.to_string(),
                    row: idx + 1,
                }
                .into());
            }
        }
    }
    Ok(values)
}

fn count_column(frame: &DataFrame, name: &str) -> Result<Vec<u32>, IngestionError> {
    numeric_column(frame, name)?
        .into_iter()
        .enumerate()
        .map(|(idx, v)| {
            if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) {
                Ok(v as u32)
            } else {
                Err(IngestionError::InvalidValue {
                    row: idx + 1,
                    reason: format!("{name} must be a non-negative whole number, got {v}"),
                })
            }
        })
        .collect()
}

/// Parsed from the cell text so amounts like `4500.50` stay exact.
fn money_column(frame: &DataFrame, name: &str) -> Result<Vec<Decimal>, IngestionError> {
    let series = column(frame, name)?.cast(&DataType::String)?;
    series
        .str()?
        .into_iter()
        .enumerate()
        .map(|(idx, value)| -> Result<Decimal, IngestionError> {
            let text = value.map(str::trim).filter(|t| !t.is_empty()).ok_or_else(|| {
                IngestionError::MissingValue {
                    column: name.to_string(),
                    row: idx + 1,
                }
            })?;
            Decimal::from_str(text)
                .or_else(|_| Decimal::from_scientific(text))
                .map_err(|_| {
                    IngestionError::from(SchemaError::NonNumeric {
                        column: name.to_string(),
                        row: idx + 1,
                    })
                })
        })
        .collect()
}
