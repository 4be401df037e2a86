use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Inner spacing between the viewport edge and the drawable interior.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Padding {
    #[must_use]
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Validated chart dimensions shared by scale, path and selection math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    viewport: Viewport,
    padding: Padding,
}

impl ChartLayout {
    pub fn new(viewport: Viewport, padding: Padding) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        for (value, name) in [
            (padding.horizontal, "horizontal"),
            (padding.vertical, "vertical"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidLayout(format!(
                    "{name} padding must be finite and >= 0"
                )));
            }
        }

        if 2.0 * padding.horizontal > viewport.width {
            return Err(ChartError::InvalidLayout(
                "horizontal padding exceeds half of the viewport width".to_owned(),
            ));
        }
        if 2.0 * padding.vertical > viewport.height {
            return Err(ChartError::InvalidLayout(
                "vertical padding exceeds half of the viewport height".to_owned(),
            ));
        }

        Ok(Self { viewport, padding })
    }

    /// Layout without padding, the drawable interior is the full viewport.
    pub fn unpadded(viewport: Viewport) -> ChartResult<Self> {
        Self::new(viewport, Padding::default())
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn padding(self) -> Padding {
        self.padding
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.viewport.width
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.viewport.height
    }

    #[must_use]
    pub fn usable_width(self) -> f64 {
        self.viewport.width - 2.0 * self.padding.horizontal
    }

    #[must_use]
    pub fn usable_height(self) -> f64 {
        self.viewport.height - 2.0 * self.padding.vertical
    }
}
