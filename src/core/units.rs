use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Divisor from the upstream electricity unit (EUR/MWh) to the displayed one
/// (cents/kWh): 1000 kWh per MWh combined with 100 cents per euro.
///
/// Fixed by the upstream data contract; not configurable.
pub const ELECTRICITY_DISPLAY_DIVISOR: u32 = 10;

/// Decimal places kept for displayed prices.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Unit a series is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceUnit {
    /// Liquid fuels, euros per litre.
    EuroPerLitre,
    /// Electricity after [`electricity_display_value`], cents per kWh.
    CentPerKilowattHour,
}

impl PriceUnit {
    #[must_use]
    pub fn default_suffix(self) -> &'static str {
        match self {
            Self::EuroPerLitre => "€/L",
            Self::CentPerKilowattHour => "s/kWh",
        }
    }
}

/// Converts an upstream electricity price to its display unit, rounded to two
/// decimals (half away from zero).
///
/// Non-finite input is passed through so the normalizer can drop it. Finite
/// values outside the decimal range are converted in `f64`.
#[must_use]
pub fn electricity_display_value(raw: f64) -> f64 {
    if !raw.is_finite() {
        return raw;
    }
    let divisor = f64::from(ELECTRICITY_DISPLAY_DIVISOR);
    let exact = Decimal::from_f64(raw)
        .map(|raw| round_display(raw / Decimal::from(ELECTRICITY_DISPLAY_DIVISOR)))
        .and_then(|rounded| rounded.to_f64());
    exact.unwrap_or_else(|| {
        let factor = 10f64.powi(DISPLAY_DECIMALS as i32);
        (raw / divisor * factor).round() / factor
    })
}

/// Formats a value with exactly two decimals, e.g. `1.5` as `"1.50"`.
#[must_use]
pub fn format_price(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(decimal) => {
            let mut rounded = round_display(decimal);
            rounded.rescale(DISPLAY_DECIMALS);
            rounded.to_string()
        }
        None => format!("{value:.2}"),
    }
}

fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}
