//! Normalized polygon paths.
//!
//! A [`Polygon`] is a vertex list authored in its own square coordinate
//! space (`[0, extent]` on both axes). [`Polygon::path_in`] scales and
//! translates the vertices into a target rectangle and joins them with
//! straight segments, which is how the built-in star mask is rendered.

use super::ShapeError;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Coordinate space the built-in star vertices were authored in.
const STAR_EXTENT: f64 = 32.0;

/// Hand-authored five-spike star, ten vertices in a 0-32 square.
const STAR_POINTS: [(f64, f64); 10] = [
    (31.95, 12.418856),
    (20.63289, 11.223692),
    (16.0, 0.83228856),
    (11.367113, 11.223692),
    (0.05000003, 12.418856),
    (8.503064, 20.03748),
    (6.1431603, 31.167711),
    (16.0, 25.48308),
    (25.85684, 31.167711),
    (23.496937, 20.03748),
];

/// A closed polygon in a normalized square coordinate space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPolygon", into = "RawPolygon")]
pub struct Polygon {
    points: Vec<Point>,
    extent: f64,
}

impl Polygon {
    /// Create a polygon from vertices in a `[0, extent]` square.
    ///
    /// Fails fast when `extent` is not finite and positive. Fewer than
    /// three vertices is allowed and yields a degenerate path.
    pub fn new(points: Vec<Point>, extent: f64) -> Result<Self, ShapeError> {
        if !extent.is_finite() || extent <= 0.0 {
            return Err(ShapeError::PolygonExtent(extent));
        }
        Ok(Self { points, extent })
    }

    /// Create a polygon from a flat `[x0, y0, x1, y1, ...]` slice.
    pub fn from_flat(coords: &[f64], extent: f64) -> Result<Self, ShapeError> {
        if coords.len() % 2 != 0 {
            return Err(ShapeError::OddPointList(coords.len()));
        }
        let points = coords
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect();
        Self::new(points, extent)
    }

    /// The built-in ten-vertex star used by the shape catalog.
    pub fn ten_point_star() -> Self {
        Self {
            points: STAR_POINTS
                .iter()
                .map(|&(x, y)| Point::new(x, y))
                .collect(),
            extent: STAR_EXTENT,
        }
    }

    /// Generate a symmetric star with `spikes` outer vertices.
    ///
    /// `inner_ratio` is the inner radius as a fraction of the outer radius
    /// and must lie in `(0, 1]`. The first spike points straight up.
    pub fn regular_star(spikes: usize, inner_ratio: f64) -> Result<Self, ShapeError> {
        if spikes < 2 {
            return Err(ShapeError::StarSpikes(spikes));
        }
        if !(inner_ratio > 0.0 && inner_ratio <= 1.0) {
            return Err(ShapeError::StarInnerRatio(inner_ratio));
        }
        let outer = 0.5;
        let inner = 0.5 * inner_ratio;
        let step = PI / spikes as f64;
        let points = (0..2 * spikes)
            .map(|i| {
                let radius = if i % 2 == 0 { outer } else { inner };
                let angle = -FRAC_PI_2 + i as f64 * step;
                Point::new(0.5 + radius * angle.cos(), 0.5 + radius * angle.sin())
            })
            .collect();
        Ok(Self { points, extent: 1.0 })
    }

    /// The vertices in authoring coordinates.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Side length of the authoring coordinate space.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Map the vertices into `rect` and join them into a closed path.
    ///
    /// Each vertex `(px, py)` maps to
    /// `(rect.x0 + px * rect.width() / extent, rect.y0 + py * rect.height() / extent)`.
    pub fn path_in(&self, rect: Rect) -> BezPath {
        let sx = rect.width() / self.extent;
        let sy = rect.height() / self.extent;

        let mut path = BezPath::new();
        let mut mapped = self
            .points
            .iter()
            .map(|p| Point::new(rect.x0 + p.x * sx, rect.y0 + p.y * sy));

        let Some(first) = mapped.next() else {
            return path;
        };
        if self.points.len() < 3 {
            log::trace!(
                "polygon with {} vertices produces a degenerate path",
                self.points.len()
            );
        }
        path.move_to(first);
        for point in mapped {
            path.line_to(point);
        }
        path.close_path();
        path
    }
}

/// Unvalidated wire form of [`Polygon`].
#[derive(Serialize, Deserialize)]
struct RawPolygon {
    points: Vec<Point>,
    extent: f64,
}

impl TryFrom<RawPolygon> for Polygon {
    type Error = ShapeError;

    fn try_from(raw: RawPolygon) -> Result<Self, Self::Error> {
        Self::new(raw.points, raw.extent)
    }
}

impl From<Polygon> for RawPolygon {
    fn from(polygon: Polygon) -> Self {
        Self {
            points: polygon.points,
            extent: polygon.extent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Shape as KurboShape};

    fn vertices(path: &BezPath) -> Vec<Point> {
        path.elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_extent_validation() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(
            Polygon::new(points.clone(), 0.0),
            Err(ShapeError::PolygonExtent(0.0))
        );
        assert_eq!(
            Polygon::new(points.clone(), -4.0),
            Err(ShapeError::PolygonExtent(-4.0))
        );
        assert!(Polygon::new(points.clone(), f64::NAN).is_err());
        assert!(Polygon::new(points, 32.0).is_ok());
    }

    #[test]
    fn test_from_flat_rejects_odd_length() {
        assert_eq!(
            Polygon::from_flat(&[0.0, 1.0, 2.0], 4.0),
            Err(ShapeError::OddPointList(3))
        );
        let polygon = Polygon::from_flat(&[0.0, 1.0, 2.0, 3.0], 4.0).unwrap();
        assert_eq!(
            polygon.points(),
            &[Point::new(0.0, 1.0), Point::new(2.0, 3.0)]
        );
    }

    #[test]
    fn test_path_maps_identity_rect() {
        // A rect matching the authoring space maps vertices through unchanged
        // up to translation.
        let star = Polygon::ten_point_star();
        let mapped = vertices(&star.path_in(Rect::new(5.0, 7.0, 37.0, 39.0)));
        assert_eq!(mapped.len(), star.points().len());
        for (v, p) in mapped.iter().zip(star.points()) {
            assert!((v.x - (5.0 + p.x)).abs() < 1e-9);
            assert!((v.y - (7.0 + p.y)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_path_scales_with_rect() {
        // Doubling the rect about its origin doubles every vertex offset.
        let star = Polygon::ten_point_star();
        let small = vertices(&star.path_in(Rect::new(0.0, 0.0, 32.0, 32.0)));
        let large = vertices(&star.path_in(Rect::new(0.0, 0.0, 64.0, 64.0)));
        for (s, l) in small.iter().zip(&large) {
            assert!((l.x - 2.0 * s.x).abs() < 1e-9);
            assert!((l.y - 2.0 * s.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_short_point_lists_are_degenerate_not_errors() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        let empty = Polygon::new(Vec::new(), 1.0).unwrap();
        assert!(empty.path_in(rect).elements().is_empty());

        let pair = Polygon::from_flat(&[0.0, 0.0, 1.0, 1.0], 1.0).unwrap();
        let path = pair.path_in(rect);
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 10.0)),
                PathEl::ClosePath,
            ]
        );
        // A back-and-forth segment encloses nothing.
        assert!(!path.contains(Point::new(2.0, 5.0)));
    }

    #[test]
    fn test_regular_star_validation() {
        assert_eq!(
            Polygon::regular_star(1, 0.5),
            Err(ShapeError::StarSpikes(1))
        );
        assert_eq!(
            Polygon::regular_star(5, 0.0),
            Err(ShapeError::StarInnerRatio(0.0))
        );
        assert_eq!(
            Polygon::regular_star(5, 1.5),
            Err(ShapeError::StarInnerRatio(1.5))
        );
        assert!(Polygon::regular_star(5, 1.0).is_ok());
    }

    #[test]
    fn test_regular_star_geometry() {
        let star = Polygon::regular_star(4, 0.5).unwrap();
        assert_eq!(star.points().len(), 8);
        // First spike points straight up in the unit square.
        let apex = star.points()[0];
        assert!((apex.x - 0.5).abs() < 1e-9);
        assert!(apex.y.abs() < 1e-9);
        // All vertices stay inside the unit authoring square.
        for p in star.points() {
            assert!(p.x >= -1e-9 && p.x <= 1.0 + 1e-9);
            assert!(p.y >= -1e-9 && p.y <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_serde_rejects_invalid_extent() {
        let json = r#"{"points":[],"extent":0.0}"#;
        assert!(serde_json::from_str::<Polygon>(json).is_err());
    }
}
