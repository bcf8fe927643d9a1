use crate::error::AnalyticsError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::fmt;

/// The type of the values a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Integer,
    Float,
    Money,
}

/// A single cell of a result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(u64),
    Float(f64),
    Money(Decimal),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Money(_) => ValueKind::Money,
        }
    }

    /// Numeric view of the cell, `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Text(_) => None,
            Value::Integer(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Money(v) => v.to_f64(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(v) => f.write_str(v),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:.2}"),
            Value::Money(v) => write!(f, "{:.2}", v.round_dp(2)),
        }
    }
}

/// A named, typed column of a result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub kind: ValueKind,
}

impl Column {
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self { name, kind }
    }
}

/// Declarative description of how a table is meant to be charted.
///
/// The engine only names columns; drawing is left entirely to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartHint {
    /// Plain tabular listing.
    Table,
    Bar {
        x: &'static str,
        y: Vec<&'static str>,
        color: Option<&'static str>,
        /// Several `y` series side by side rather than stacked.
        grouped: bool,
    },
    Pie {
        names: &'static str,
        values: &'static str,
    },
    /// Hierarchy given by `path`, outermost level first. Parent totals are
    /// left for the consumer to compute.
    Treemap {
        path: Vec<&'static str>,
        values: &'static str,
    },
    Sunburst {
        path: Vec<&'static str>,
        values: &'static str,
    },
    Scatter {
        x: &'static str,
        y: &'static str,
        color: Option<&'static str>,
    },
}

/// A strongly typed output row that knows its own column schema.
pub trait TableRow {
    const COLUMNS: &'static [Column];

    /// One value per entry of `COLUMNS`, in the same order.
    fn cells(&self) -> Vec<Value>;
}

/// The uniform output of every query: ordered rows under a fixed schema, plus
/// a chart hint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    title: String,
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
    chart: ChartHint,
}

impl ResultTable {
    pub fn from_rows<R: TableRow>(title: impl Into<String>, chart: ChartHint, rows: &[R]) -> Self {
        Self {
            title: title.into(),
            columns: R::COLUMNS.to_vec(),
            rows: rows.iter().map(TableRow::cells).collect(),
            chart,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn chart(&self) -> &ChartHint {
        &self.chart
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column called `name`.
    pub fn column_index(&self, name: &str) -> Result<usize, AnalyticsError> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| AnalyticsError::MissingColumn {
                table: self.title.clone(),
                column: name.to_string(),
            })
    }

    /// Index of a column that must hold numbers (integer, float or money).
    pub fn numeric_column_index(&self, name: &str) -> Result<usize, AnalyticsError> {
        let idx = self.column_index(name)?;
        if self.columns[idx].kind == ValueKind::Text {
            return Err(AnalyticsError::NotNumeric {
                table: self.title.clone(),
                column: name.to_string(),
            });
        }
        Ok(idx)
    }
}
