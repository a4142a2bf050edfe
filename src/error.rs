//! Error types for polygon construction.

use thiserror::Error;

/// Errors raised while building polygons and rectangles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    /// Not enough distinct corners to enclose an area.
    #[error("polygon needs at least {required} distinct corners, got {found}")]
    TooFewVertices {
        /// Minimum number of distinct corners.
        required: usize,
        /// Distinct corners actually supplied.
        found: usize,
    },

    /// Rectangle with a zero or negative side.
    #[error("rectangle must have positive size, got {width}x{height}")]
    InvalidRect { width: i32, height: i32 },

    /// Cell or rectangle whose world-space corners do not fit in `i32`.
    ///
    /// `x`/`z` are the cell coordinates for cells and the origin for rectangles.
    #[error("shape at ({x}, {z}) leaves the i32 coordinate range")]
    OutOfRange { x: i32, z: i32 },
}
