//! Crop mask shapes and their clip paths.

mod polygon;
mod rounded;

pub use polygon::Polygon;
pub use rounded::RoundedRect;

use kurbo::{BezPath, Ellipse, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Curve flattening tolerance for paths built from kurbo primitives.
pub(crate) const PATH_TOLERANCE: f64 = 0.1;

/// Shape construction errors.
///
/// Every variant is a construction-time contract violation; path generation
/// itself never fails, degenerate inputs produce degenerate paths.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ShapeError {
    #[error("corners percent must be in [0, 100], got {0}")]
    CornersPercent(u8),
    #[error("polygon extent must be finite and positive, got {0}")]
    PolygonExtent(f64),
    #[error("flat point list has odd length {0}, expected (x, y) pairs")]
    OddPointList(usize),
    #[error("a star needs at least 2 spikes, got {0}")]
    StarSpikes(usize),
    #[error("star inner radius ratio must be in (0, 1], got {0}")]
    StarInnerRatio(f64),
}

/// Smaller of a rectangle's width and height.
pub fn min_dimension(rect: Rect) -> f64 {
    rect.width().min(rect.height())
}

/// A shape used to clip the image being cropped.
///
/// Every variant is a pure value: `as_path` depends only on the variant and
/// the rectangle it is given, so two equal shapes always produce identical
/// paths for the same rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CropShape {
    /// The crop rectangle itself.
    Rect,
    /// The largest oval inscribed in the crop rectangle.
    Circle,
    /// Isosceles triangle, apex at top center, base along the bottom edge.
    Triangle,
    /// A five-spike star (ten vertices).
    Star,
    /// Rectangle with rounded corners.
    RoundedRect(RoundedRect),
    /// An arbitrary polygon authored in a normalized coordinate space.
    Polygon(Polygon),
}

impl CropShape {
    /// Build the closed boundary path of this shape fitted to `rect`.
    ///
    /// `rect` is expected to be well formed (`x1 >= x0`, `y1 >= y0`).
    /// A zero-area rectangle yields a degenerate path, not an error.
    pub fn as_path(&self, rect: Rect) -> BezPath {
        match self {
            CropShape::Rect => rect.to_path(PATH_TOLERANCE),
            CropShape::Circle => {
                let oval = Ellipse::new(
                    rect.center(),
                    (rect.width() / 2.0, rect.height() / 2.0),
                    0.0,
                );
                oval.to_path(PATH_TOLERANCE)
            }
            CropShape::Triangle => {
                let mut path = BezPath::new();
                path.move_to(Point::new(rect.x0, rect.y1));
                path.line_to(Point::new(rect.center().x, rect.y0));
                path.line_to(Point::new(rect.x1, rect.y1));
                path.close_path();
                path
            }
            CropShape::Star => Polygon::ten_point_star().path_in(rect),
            CropShape::RoundedRect(rounded) => rounded.as_path(rect),
            CropShape::Polygon(polygon) => polygon.path_in(rect),
        }
    }

    /// Winding test: is `point` inside this shape's mask over `rect`?
    pub fn contains(&self, rect: Rect, point: Point) -> bool {
        self.as_path(rect).contains(point)
    }

    /// Display name for the shape picker.
    pub fn label(&self) -> &'static str {
        match self {
            CropShape::Rect => "Rectangle",
            CropShape::Circle => "Circle",
            CropShape::Triangle => "Triangle",
            CropShape::Star => "Star",
            CropShape::RoundedRect(_) => "Rounded rectangle",
            CropShape::Polygon(_) => "Polygon",
        }
    }
}

/// The default shape catalog offered by the crop shape picker.
///
/// The order is the on-screen selection order.
pub fn default_shapes() -> Vec<CropShape> {
    vec![
        CropShape::Rect,
        CropShape::Circle,
        CropShape::RoundedRect(RoundedRect::default()),
        CropShape::Star,
        CropShape::Triangle,
    ]
}
