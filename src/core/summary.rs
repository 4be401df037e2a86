use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Aggregate readout of one normalized series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl SeriesSummary {
    /// Returns `None` for an empty series.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let min = values.iter().copied().map(OrderedFloat).min()?;
        let max = values.iter().copied().map(OrderedFloat).max()?;
        let average = values.iter().sum::<f64>() / values.len() as f64;

        Some(Self {
            average,
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }
}
