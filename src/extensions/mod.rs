//! Optional presentation helpers built on top of the core outputs.
//!
//! Nothing here feeds back into scale, path or selection math.

pub mod markers;

pub use markers::{
    MarkerLabelGeometry, MarkerPlacementConfig, MarkerSide, PlacedMarker, place_extrema_markers,
};
