//! chunkhull - Trace sets of map chunks into hull and hole polygons for overlays

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod input;
pub mod outline;
pub mod output;

pub use domain::{Cell, Point, Polygon, PolygonWithHoles, Rect};
pub use error::PolygonError;
pub use outline::{ExtractionReport, extract_polygons, extract_region, extract_region_with_report};
