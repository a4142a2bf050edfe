pub mod point;
pub mod polygon;

pub use point::{Cell, Point, Rect};
pub use polygon::{Polygon, PolygonWithHoles};
