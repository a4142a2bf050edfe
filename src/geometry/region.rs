//! Planar regions built from axis-aligned cells
//!
//! The extraction pipeline only talks to the [`PlanarRegion`] trait: union,
//! intersection, subtraction, area and a boundary walk. [`Region`] implements it
//! on top of `geo`'s boolean operations.

use geo::orient::{Direction, Orient};
use geo::{Area, BooleanOps, LineString, MultiPolygon, coord};
use std::collections::BTreeSet;

use crate::domain::{Cell, Polygon, Rect};
use crate::error::PolygonError;

/// Areas at or below this are treated as boolean-op noise
const EMPTY_AREA: f64 = 1e-9;

/// One step of a boundary walk
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Begin a new ring at `(x, z)`
    Start(f64, f64),
    /// Continue the current ring to `(x, z)`
    LineTo(f64, f64),
    /// Close the current ring back to its start
    Close,
}

/// Minimal geometry surface needed to trace and pair boundaries.
///
/// `boundary` must emit outer rings with a non-negative shoelace sum and inner
/// rings with a negative one, in the +X east / +Z south frame.
pub trait PlanarRegion: Sized {
    /// Filled interior of a single ring, ignoring its winding
    fn from_ring(ring: &Polygon) -> Self;

    fn union(&self, other: &Self) -> Self;

    fn intersect(&self, other: &Self) -> Self;

    fn subtract(&self, other: &Self) -> Self;

    fn area(&self) -> f64;

    fn boundary(&self) -> Vec<Segment>;

    fn is_empty(&self) -> bool {
        self.area() <= EMPTY_AREA
    }
}

/// Union of rectangles, backed by a `geo` multipolygon
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    shape: MultiPolygon<f64>,
}

impl Region {
    pub fn empty() -> Self {
        Self {
            shape: MultiPolygon::new(Vec::new()),
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        let (max_x, max_z) = rect.max();
        let polygon = geo::Rect::new(
            coord! { x: f64::from(rect.x()), y: f64::from(rect.z()) },
            coord! { x: f64::from(max_x), y: f64::from(max_z) },
        )
        .to_polygon();
        Self {
            shape: MultiPolygon::new(vec![polygon]),
        }
    }

    /// Union of the footprints of `cells` at the given cell size.
    ///
    /// Duplicate cells are ignored. A zero cell size yields an empty region.
    /// Fails when a cell's footprint does not fit in `i32` world coordinates.
    pub fn from_cells(cells: &[Cell], cell_size: u16) -> Result<Self, PolygonError> {
        if cell_size == 0 {
            return Ok(Self::empty());
        }
        let unique: BTreeSet<Cell> = cells.iter().copied().collect();
        let rects = unique
            .iter()
            .map(|cell| cell.rect_sized(cell_size).map(Region::from_rect))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(union_all(rects))
    }

    pub fn multi_polygon(&self) -> &MultiPolygon<f64> {
        &self.shape
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::empty()
    }
}

/// Pairwise reduction keeps each boolean op working on similarly sized inputs
fn union_all(mut regions: Vec<Region>) -> Region {
    if regions.is_empty() {
        return Region::empty();
    }
    while regions.len() > 1 {
        let mut merged = Vec::with_capacity(regions.len().div_ceil(2));
        let mut iter = regions.into_iter();
        while let Some(left) = iter.next() {
            match iter.next() {
                Some(right) => merged.push(left.union(&right)),
                None => merged.push(left),
            }
        }
        regions = merged;
    }
    regions.pop().unwrap_or_default()
}

impl PlanarRegion for Region {
    fn from_ring(ring: &Polygon) -> Self {
        let exterior: LineString<f64> = ring
            .points()
            .iter()
            .map(|p| coord! { x: f64::from(p.x), y: f64::from(p.z) })
            .collect();
        Self {
            shape: MultiPolygon::new(vec![geo::Polygon::new(exterior, Vec::new())]),
        }
    }

    fn union(&self, other: &Self) -> Self {
        Self {
            shape: self.shape.union(&other.shape),
        }
    }

    fn intersect(&self, other: &Self) -> Self {
        Self {
            shape: self.shape.intersection(&other.shape),
        }
    }

    fn subtract(&self, other: &Self) -> Self {
        Self {
            shape: self.shape.difference(&other.shape),
        }
    }

    fn area(&self) -> f64 {
        self.shape.unsigned_area()
    }

    fn boundary(&self) -> Vec<Segment> {
        // Exterior clockwise in math orientation is counter-clockwise once +Z points south
        let oriented = self.shape.orient(Direction::Reversed);
        let mut segments = Vec::new();
        for polygon in &oriented {
            for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
                push_ring(&mut segments, ring);
            }
        }
        segments
    }
}

fn push_ring(segments: &mut Vec<Segment>, ring: &LineString<f64>) {
    let Some((first, rest)) = ring.0.split_first() else {
        return;
    };
    let open = match rest.split_last() {
        Some((last, body)) if last == first => body,
        _ => rest,
    };

    segments.push(Segment::Start(first.x, first.y));
    segments.extend(open.iter().map(|c| Segment::LineTo(c.x, c.y)));
    segments.push(Segment::Close);
}

#[cfg(test)]
pub(crate) fn assert_area(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "area {} != {}",
        actual,
        expected
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_empty_cells() {
        let region = Region::from_cells(&[], 16).unwrap();
        assert!(region.is_empty());
        assert!(region.boundary().is_empty());
    }

    #[test]
    fn test_zero_cell_size() {
        assert!(Region::from_cells(&cells(&[(0, 0), (1, 1)]), 0).unwrap().is_empty());
    }

    #[test]
    fn test_union_area() {
        let region = Region::from_cells(&cells(&[(0, 0), (1, 0), (0, 1), (1, 0)]), 16).unwrap();
        assert_area(region.area(), 3.0 * 256.0);
    }

    #[test]
    fn test_subtract_and_intersect() {
        let block = Region::from_cells(&cells(&[(0, 0), (1, 0)]), 16).unwrap();
        let right = Region::from_cells(&cells(&[(1, 0)]), 16).unwrap();

        assert_area(block.subtract(&right).area(), 256.0);
        assert_area(block.intersect(&right).area(), 256.0);
        assert!(block.subtract(&block).is_empty());
    }

    #[test]
    fn test_cells_beyond_coordinate_range() {
        let far = cells(&[(0, 0), (200_000_000, 0)]);
        assert_eq!(
            Region::from_cells(&far, 16),
            Err(PolygonError::OutOfRange {
                x: 200_000_000,
                z: 0
            })
        );
        // Same cell fits once the cell size is small enough
        assert_area(Region::from_cells(&far, 8).unwrap().area(), 2.0 * 64.0);
    }

    #[test]
    fn test_boundary_segments_per_ring() {
        let region = Region::from_cells(&cells(&[(0, 0)]), 16).unwrap();
        let segments = region.boundary();

        assert!(matches!(segments.first(), Some(Segment::Start(..))));
        assert_eq!(segments.last(), Some(&Segment::Close));
        // One start, three line-tos, one close
        assert_eq!(segments.len(), 5);
    }

    #[test]
    fn test_from_ring_ignores_winding() {
        let ring = |coords: &[(i32, i32)]| {
            Polygon::new(coords.iter().map(|&(x, z)| Point::new(x, 0, z)).collect()).unwrap()
        };
        let clockwise = Region::from_ring(&ring(&[(0, 0), (0, 4), (4, 4), (4, 0)]));
        let counter = Region::from_ring(&ring(&[(0, 0), (4, 0), (4, 4), (0, 4)]));

        assert_area(clockwise.area(), 16.0);
        assert_area(counter.area(), 16.0);
        assert_area(clockwise.intersect(&counter).area(), 16.0);
    }
}
