//! Cropshapes Core Library
//!
//! Shape catalog and clip path generation for an image cropping tool.
//! Each [`CropShape`] turns the current crop rectangle into a closed
//! [`kurbo::BezPath`] used as a clip mask when previewing or exporting
//! the cropped image. Everything here is a pure value: shapes hold no
//! external state and can be queried from any thread.

pub mod shapes;

pub use shapes::{CropShape, Polygon, RoundedRect, ShapeError, default_shapes, min_dimension};
