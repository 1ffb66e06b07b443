//! Rounded rectangle crop mask.

use super::{PATH_TOLERANCE, ShapeError, min_dimension};
use kurbo::{BezPath, Rect, RoundedRect as KurboRoundedRect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A rectangle mask with uniformly rounded corners.
///
/// The corner radius is relative: `corners_percent` percent of the smaller
/// rectangle dimension. The percentage is validated once, at construction,
/// so a value held in a `RoundedRect` is always in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RoundedRect {
    corners_percent: u8,
}

impl RoundedRect {
    /// Corner percentage used by the default shape catalog.
    pub const DEFAULT_CORNERS_PERCENT: u8 = 15;

    /// Create a rounded rectangle mask.
    ///
    /// Fails fast when `corners_percent` exceeds 100.
    pub fn new(corners_percent: u8) -> Result<Self, ShapeError> {
        if corners_percent > 100 {
            return Err(ShapeError::CornersPercent(corners_percent));
        }
        Ok(Self { corners_percent })
    }

    /// The validated corner percentage.
    pub fn corners_percent(&self) -> u8 {
        self.corners_percent
    }

    /// Corner radius this mask uses for `rect`.
    pub fn radius_for(&self, rect: Rect) -> f64 {
        min_dimension(rect) * f64::from(self.corners_percent) / 100.0
    }

    /// Build the rounded-rectangle boundary path for `rect`.
    pub fn as_path(&self, rect: Rect) -> BezPath {
        KurboRoundedRect::from_rect(rect, self.radius_for(rect)).to_path(PATH_TOLERANCE)
    }
}

impl Default for RoundedRect {
    fn default() -> Self {
        Self {
            corners_percent: Self::DEFAULT_CORNERS_PERCENT,
        }
    }
}

impl TryFrom<u8> for RoundedRect {
    type Error = ShapeError;

    fn try_from(corners_percent: u8) -> Result<Self, Self::Error> {
        Self::new(corners_percent)
    }
}

impl From<RoundedRect> for u8 {
    fn from(rounded: RoundedRect) -> Self {
        rounded.corners_percent
    }
}
