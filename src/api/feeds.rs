//! Conversion from upstream price feed shapes into chart series.
//!
//! Fetching and caching happen elsewhere; these functions only read already
//! decoded JSON and never fail on individual bad samples.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::{
    Dataset, PriceUnit, Series, electricity_display_value, normalize_values, parse_price_value,
};
use crate::error::{ChartError, ChartResult};

/// Field carrying the daily electricity average in history records.
pub const ELECTRICITY_AVERAGE_FIELD: &str = "avg_price";

/// Top-level keys under which history payloads list electricity records.
const ELECTRICITY_HISTORY_KEYS: [&str; 4] = ["electricity", "electricity_prices", "el", "data"];

/// Top-level key listing fuel history records.
const FUEL_HISTORY_KEY: &str = "gas";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FuelKind {
    #[serde(rename = "95")]
    Petrol95,
    #[serde(rename = "98")]
    Petrol98,
    #[serde(rename = "D")]
    Diesel,
    #[serde(rename = "EL")]
    Electricity,
}

impl FuelKind {
    pub const ALL: [Self; 4] = [
        Self::Petrol95,
        Self::Petrol98,
        Self::Diesel,
        Self::Electricity,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Petrol95 => "95",
            Self::Petrol98 => "98",
            Self::Diesel => "D",
            Self::Electricity => "EL",
        }
    }

    /// Translation key of the series label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Petrol95 => "petrol95",
            Self::Petrol98 => "petrol98",
            Self::Diesel => "diesel",
            Self::Electricity => "electricity",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Petrol95 => "#10B981",
            Self::Petrol98 => "#F59E0B",
            Self::Diesel => "#000000",
            Self::Electricity => "#3B82F6",
        }
    }

    #[must_use]
    pub fn unit(self) -> PriceUnit {
        match self {
            Self::Electricity => PriceUnit::CentPerKilowattHour,
            _ => PriceUnit::EuroPerLitre,
        }
    }

    /// Record field of this kind in fuel history, e.g. `price_95`.
    ///
    /// Electricity is not part of fuel history records.
    #[must_use]
    pub fn history_field(self) -> Option<String> {
        match self {
            Self::Electricity => None,
            kind => Some(format!("price_{}", kind.code().to_lowercase())),
        }
    }

    /// Builds a series for this kind, normalizing `values`.
    #[must_use]
    pub fn series(self, values: &[f64]) -> Series {
        Series::new(
            self.code(),
            normalize_values(values),
            self.label_key(),
            self.color(),
        )
        .with_unit(self.unit())
    }
}

impl fmt::Display for FuelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FuelKind {
    type Err = ChartError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| ChartError::InvalidData(format!("unknown fuel kind `{code}`")))
    }
}

/// Extracts one series per requested fuel kind from daily history records.
///
/// Duplicate kinds are requested once, electricity is skipped, and kinds
/// without any valid sample are omitted.
#[must_use]
pub fn fuel_history_series(records: &[Value], kinds: &[FuelKind]) -> Dataset {
    let kinds: IndexSet<FuelKind> = kinds.iter().copied().collect();
    let mut dataset = Dataset::with_capacity(kinds.len());

    for kind in kinds {
        let Some(field) = kind.history_field() else {
            continue;
        };
        let raw: Vec<f64> = records
            .iter()
            .map(|record| parse_price_value(record.get(&field)))
            .collect();
        let series = kind.series(&raw);
        debug!(
            kind = %kind,
            raw_count = raw.len(),
            valid_count = series.len(),
            "extract fuel history"
        );
        if !series.is_empty() {
            dataset.push(series);
        }
    }

    dataset
}

/// Extracts the electricity daily-average series, converted to display unit.
#[must_use]
pub fn electricity_history_series(records: &[Value]) -> Option<Series> {
    let raw: Vec<f64> = records
        .iter()
        .map(|record| parse_price_value(record.get(ELECTRICITY_AVERAGE_FIELD)))
        .map(electricity_display_value)
        .collect();
    let series = FuelKind::Electricity.series(&raw);
    debug!(
        raw_count = raw.len(),
        valid_count = series.len(),
        "extract electricity history"
    );
    (!series.is_empty()).then_some(series)
}

/// Today's electricity feed: one price per half-open `"HH:MM-HH:MM"` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayElectricityFeed {
    #[serde(default)]
    pub price: Vec<Value>,
    #[serde(default)]
    pub time: Vec<String>,
}

impl TodayElectricityFeed {
    /// Hourly series in display unit; slot matching is left to the caller.
    #[must_use]
    pub fn series(&self) -> Option<Series> {
        let raw: Vec<f64> = self
            .price
            .iter()
            .map(|value| electricity_display_value(parse_price_value(Some(value))))
            .collect();
        let series = FuelKind::Electricity.series(&raw);
        debug!(
            raw_count = raw.len(),
            valid_count = series.len(),
            "extract today electricity"
        );
        (!series.is_empty()).then_some(series)
    }
}

/// Decodes a history payload and extracts the requested fuel series.
///
/// A missing or non-array `gas` list is "no data", not an error.
pub fn fuel_history_from_json_str(input: &str, kinds: &[FuelKind]) -> ChartResult<Dataset> {
    let payload = parse_payload(input)?;
    Ok(match payload.get(FUEL_HISTORY_KEY).and_then(Value::as_array) {
        Some(records) => fuel_history_series(records, kinds),
        None => Dataset::new(),
    })
}

/// Decodes a history payload and extracts the electricity series.
///
/// The record list is looked up under the first key among `electricity`,
/// `electricity_prices`, `el` and `data` whose value is set. Null, `false`,
/// zero and empty strings count as unset and fall through to the next key.
pub fn electricity_history_from_json_str(input: &str) -> ChartResult<Option<Series>> {
    let payload = parse_payload(input)?;
    let records = ELECTRICITY_HISTORY_KEYS
        .iter()
        .filter_map(|key| payload.get(*key))
        .find(|value| is_set(value))
        .and_then(Value::as_array);
    Ok(records.and_then(|records| electricity_history_series(records)))
}

pub fn today_electricity_from_json_str(input: &str) -> ChartResult<Option<Series>> {
    let feed: TodayElectricityFeed = serde_json::from_str(input).map_err(|e| {
        ChartError::InvalidData(format!("failed to parse electricity feed payload: {e}"))
    })?;
    Ok(feed.series())
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn parse_payload(input: &str) -> ChartResult<Value> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse price payload: {e}")))
}
