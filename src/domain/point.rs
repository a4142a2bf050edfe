use serde::{Deserialize, Serialize};

use crate::config::grid::CELL_SIZE;
use crate::error::PolygonError;

/// A world position: `x`/`z` are planar (+X east, +Z south), `y` is elevation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn planar(&self) -> (i32, i32) {
        (self.x, self.z)
    }
}

/// A map chunk, addressed in cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The cell that contains a world block coordinate.
    ///
    /// Uses floor division, so block -1 lives in cell -1, not cell 0.
    pub fn containing(block_x: i32, block_z: i32) -> Self {
        let size = i32::from(CELL_SIZE);
        Self {
            x: block_x.div_euclid(size),
            z: block_z.div_euclid(size),
        }
    }

    /// World-space footprint of this cell at the standard cell size
    pub fn rect(&self) -> Result<Rect, PolygonError> {
        self.rect_sized(CELL_SIZE)
    }

    /// World-space footprint for an arbitrary cell size.
    ///
    /// Fails with `InvalidRect` for a zero size and `OutOfRange` when a corner
    /// would not fit in `i32`.
    pub fn rect_sized(&self, cell_size: u16) -> Result<Rect, PolygonError> {
        let size = i32::from(cell_size);
        let out_of_range = PolygonError::OutOfRange {
            x: self.x,
            z: self.z,
        };
        let x = self.x.checked_mul(size).ok_or_else(|| out_of_range.clone())?;
        let z = self.z.checked_mul(size).ok_or_else(|| out_of_range.clone())?;
        Rect::new(x, z, size, size).map_err(|err| match err {
            PolygonError::OutOfRange { .. } => out_of_range,
            other => other,
        })
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

/// Axis-aligned rectangle in world units, origin at its north-west corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    x: i32,
    z: i32,
    width: i32,
    height: i32,
}

impl Rect {
    pub fn new(x: i32, z: i32, width: i32, height: i32) -> Result<Self, PolygonError> {
        if width <= 0 || height <= 0 {
            return Err(PolygonError::InvalidRect { width, height });
        }
        if x.checked_add(width).is_none() || z.checked_add(height).is_none() {
            return Err(PolygonError::OutOfRange { x, z });
        }
        Ok(Self {
            x,
            z,
            width,
            height,
        })
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Opposite (south-east) corner. `new` guarantees it fits in `i32`.
    pub fn max(&self) -> (i32, i32) {
        (self.x + self.width, self.z + self.height)
    }

    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }
}
