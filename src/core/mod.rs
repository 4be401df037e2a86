pub mod extrema;
pub mod normalize;
pub mod path;
pub mod scale;
pub mod series;
pub mod summary;
pub mod types;
pub mod units;

pub use extrema::{
    DEFAULT_MIN_EXTREMA_DISTANCE, Extremum, ExtremumKind, extrema_indices, find_extrema,
};
pub use normalize::{is_valid_price, normalize_values, parse_price_value};
pub use path::{LinePath, PathPoint, build_line_path, index_step, index_to_x};
pub use scale::{ScaleRange, ValueScale};
pub use series::{Dataset, Series};
pub use summary::SeriesSummary;
pub use types::{ChartLayout, Padding, Viewport};
pub use units::{
    DISPLAY_DECIMALS, ELECTRICITY_DISPLAY_DIVISOR, PriceUnit, electricity_display_value,
    format_price,
};
