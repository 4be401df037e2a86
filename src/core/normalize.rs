use serde_json::Value;

/// Keeps only finite, strictly positive samples in their original order.
///
/// Upstream feeds encode "no data" as `0`, negative sentinels or `NaN`.
/// Gaps are dropped, not interpolated, so the output may be shorter than the
/// input; an empty result is the "no data" state.
#[must_use]
pub fn normalize_values(raw: &[f64]) -> Vec<f64> {
    raw.iter().copied().filter(|v| is_valid_price(*v)).collect()
}

#[must_use]
pub fn is_valid_price(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Reads a JSON number or numeric string as a price sample.
///
/// Anything else (null, bool, garbage text, missing field) becomes `NaN` so the
/// normalizer drops it like any other invalid sample.
#[must_use]
pub fn parse_price_value(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{normalize_values, parse_price_value};

    #[test]
    fn parse_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_price_value(Some(&json!(1.649))), 1.649);
        assert_eq!(parse_price_value(Some(&json!(" 1.71 "))), 1.71);
        assert!(parse_price_value(Some(&json!("n/a"))).is_nan());
        assert!(parse_price_value(Some(&json!(null))).is_nan());
        assert!(parse_price_value(None).is_nan());
    }

    #[test]
    fn normalize_drops_sentinels_in_order() {
        let raw = [1.5, 0.0, f64::NAN, -1.0, 1.6, f64::INFINITY, 1.4];
        assert_eq!(normalize_values(&raw), vec![1.5, 1.6, 1.4]);
    }
}
