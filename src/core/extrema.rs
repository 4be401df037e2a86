use serde::{Deserialize, Serialize};

/// Minimum index spacing between kept extrema unless a caller overrides it.
pub const DEFAULT_MIN_EXTREMA_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtremumKind {
    /// First or last sample of the series.
    Endpoint,
    /// Strictly greater than both neighbors.
    Peak,
    /// Strictly smaller than both neighbors.
    Valley,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extremum {
    pub index: usize,
    pub kind: ExtremumKind,
}

/// Finds peaks and valleys, thinned so kept points are at least
/// `min_distance` indices apart.
///
/// Index `0` and `len - 1` are always present. Interior candidates are walked
/// in order and kept greedily against the last kept index. A `min_distance`
/// of zero behaves like one.
#[must_use]
pub fn find_extrema(values: &[f64], min_distance: usize) -> Vec<Extremum> {
    let len = values.len();
    match len {
        0 => return Vec::new(),
        1 => return vec![endpoint(0)],
        2 => return vec![endpoint(0), endpoint(1)],
        _ => {}
    }

    let last = len - 1;
    let mut kept = vec![endpoint(0)];
    let mut last_kept = 0;

    for (offset, window) in values.windows(3).enumerate() {
        let index = offset + 1;
        let Some(kind) = classify(window[0], window[1], window[2]) else {
            continue;
        };
        if index - last_kept >= min_distance {
            kept.push(Extremum { index, kind });
            last_kept = index;
        }
    }

    kept.push(endpoint(last));
    kept
}

/// Index-only view of [`find_extrema`].
#[must_use]
pub fn extrema_indices(values: &[f64], min_distance: usize) -> Vec<usize> {
    find_extrema(values, min_distance)
        .into_iter()
        .map(|extremum| extremum.index)
        .collect()
}

fn classify(prev: f64, current: f64, next: f64) -> Option<ExtremumKind> {
    if current > prev && current > next {
        Some(ExtremumKind::Peak)
    } else if current < prev && current < next {
        Some(ExtremumKind::Valley)
    } else {
        None
    }
}

fn endpoint(index: usize) -> Extremum {
    Extremum {
        index,
        kind: ExtremumKind::Endpoint,
    }
}
