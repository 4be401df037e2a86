use serde::{Deserialize, Serialize};

use crate::core::normalize::normalize_values;
use crate::core::units::PriceUnit;

/// One named, colored price sequence. Index order is temporal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub values: Vec<f64>,
    pub label: String,
    /// Stroke color as `#RRGGBB`.
    pub color: String,
    #[serde(default = "default_unit")]
    pub unit: PriceUnit,
}

fn default_unit() -> PriceUnit {
    PriceUnit::EuroPerLitre
}

impl Series {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        values: Vec<f64>,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            values,
            label: label.into(),
            color: color.into(),
            unit: default_unit(),
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: PriceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Copy of this series with invalid samples dropped.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id.clone(),
            values: normalize_values(&self.values),
            label: self.label.clone(),
            color: self.color.clone(),
            unit: self.unit,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Series sharing one chart index domain. Lengths may differ.
pub type Dataset = Vec<Series>;
