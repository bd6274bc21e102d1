//! Typed Survey Cell Values
//! Decides once per cell whether a value is a numeric code, missing, or free text.

use polars::prelude::*;
use std::fmt;

/// A single survey cell after typing.
///
/// Columns holding only integer codes are read by polars as `Int64`, columns
/// with gaps may come back as `Float64`, and columns mixing combined answers
/// (e.g. `"3,4"`) come back as `String`. All three collapse into this enum so
/// downstream code never inspects dtypes again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyValue {
    /// Integral numeric code, whatever dtype it was stored as.
    Code(i64),
    /// Null, NaN, or blank.
    Missing,
    /// Anything else: combined codes, non-integral numbers, free text.
    Text(String),
}

impl SurveyValue {
    /// Type a numeric cell.
    pub fn from_number(value: f64) -> Self {
        if value.is_nan() {
            SurveyValue::Missing
        } else if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            SurveyValue::Code(value as i64)
        } else {
            SurveyValue::Text(value.to_string())
        }
    }

    /// Type a textual cell, recovering numeric codes stored as text.
    pub fn from_text(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return SurveyValue::Missing;
        }
        if let Ok(code) = trimmed.parse::<i64>() {
            return SurveyValue::Code(code);
        }
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => SurveyValue::from_number(number),
            _ => SurveyValue::Text(trimmed.to_string()),
        }
    }

    /// The integer code, if this cell holds one.
    pub fn code(&self) -> Option<i64> {
        match self {
            SurveyValue::Code(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, SurveyValue::Missing)
    }
}

impl fmt::Display for SurveyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurveyValue::Code(code) => write!(f, "{code}"),
            SurveyValue::Missing => Ok(()),
            SurveyValue::Text(text) => f.write_str(text),
        }
    }
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Read a source column as typed survey values.
///
/// Returns `Ok(None)` when the column is absent.
pub fn column_values(df: &DataFrame, name: &str) -> PolarsResult<Option<Vec<SurveyValue>>> {
    let Ok(column) = df.column(name) else {
        return Ok(None);
    };

    let values = if is_numeric(column.dtype()) {
        let as_f64 = column.cast(&DataType::Float64)?;
        as_f64
            .f64()?
            .into_iter()
            .map(|v| v.map_or(SurveyValue::Missing, SurveyValue::from_number))
            .collect()
    } else {
        let as_str = column.cast(&DataType::String)?;
        as_str
            .str()?
            .into_iter()
            .map(|v| v.map_or(SurveyValue::Missing, SurveyValue::from_text))
            .collect()
    };

    Ok(Some(values))
}

/// Read a derived category column as optional labels.
///
/// Returns `Ok(None)` when the column is absent.
pub fn column_labels(df: &DataFrame, name: &str) -> PolarsResult<Option<Vec<Option<String>>>> {
    let Ok(column) = df.column(name) else {
        return Ok(None);
    };

    let as_str = column.cast(&DataType::String)?;
    let labels = as_str
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect();

    Ok(Some(labels))
}
