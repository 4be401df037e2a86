use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{PriceUnit, format_price};
use crate::interaction::resolve_series_index;

use super::{ChartOptions, SeriesRenderModel};

/// Position label of a selected sample.
///
/// Kept structured so hosts can localize it; `Display` gives the plain form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexLabel {
    /// One-based day number of a daily series.
    Day { number: usize },
    /// Hour bucket of an intraday series, `end_hour` may be `hours_per_day`.
    HourRange { start_hour: u32, end_hour: u32 },
}

impl IndexLabel {
    /// Day number for fuels, hour bucket for electricity.
    ///
    /// The hour is `floor(index / series_len * hours_per_day)`, so a series
    /// with other than 24 samples is spread across the day.
    #[must_use]
    pub fn for_index(unit: PriceUnit, index: usize, series_len: usize, hours_per_day: u32) -> Self {
        match unit {
            PriceUnit::EuroPerLitre => Self::Day { number: index + 1 },
            PriceUnit::CentPerKilowattHour => {
                let len = series_len.max(1) as f64;
                let start_hour = (index as f64 / len * f64::from(hours_per_day)).floor() as u32;
                Self::HourRange {
                    start_hour,
                    end_hour: start_hour + 1,
                }
            }
        }
    }
}

impl fmt::Display for IndexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day { number } => write!(f, "Day {number}"),
            Self::HourRange {
                start_hour,
                end_hour,
            } => write!(f, "{start_hour:02}:00 - {end_hour:02}:00"),
        }
    }
}

/// Display readout of one series at the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReadout {
    pub series_id: String,
    pub label: String,
    pub index: usize,
    pub value: f64,
    pub index_label: IndexLabel,
    /// Two-decimal price with unit suffix, e.g. `1.65 €/L`.
    pub formatted_price: String,
}

/// Builds readouts for every series at a reference-space selection.
///
/// Series resolve their own index proportionally when their length differs
/// from the reference; series with no value there are skipped.
#[must_use]
pub fn build_readouts(
    series: &[SeriesRenderModel],
    selected: usize,
    reference_len: usize,
    options: &ChartOptions,
) -> Vec<SeriesReadout> {
    series
        .iter()
        .filter_map(|model| {
            let len = model.values.len();
            let index = resolve_series_index(selected, reference_len, len)?;
            let value = *model.values.get(index)?;
            Some(SeriesReadout {
                series_id: model.id.clone(),
                label: model.label.clone(),
                index,
                value,
                index_label: IndexLabel::for_index(model.unit, index, len, options.hours_per_day),
                formatted_price: format!(
                    "{} {}",
                    format_price(value),
                    options.unit_suffix(model.unit)
                ),
            })
        })
        .collect()
}
