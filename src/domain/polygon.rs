use serde::Serialize;
use std::collections::HashSet;

use super::Point;
use crate::error::PolygonError;
use crate::geometry::winding::shoelace_sum;

/// Minimum number of distinct corners for a ring that encloses area
pub const MIN_CORNERS: usize = 3;

/// A closed ring of vertices, first point repeated at the end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build a ring, closing it if the first and last points differ.
    pub fn new(mut points: Vec<Point>) -> Result<Self, PolygonError> {
        if let (Some(&first), Some(&last)) = (points.first(), points.last())
            && first != last
        {
            points.push(first);
        }

        let open = &points[..points.len().saturating_sub(1)];
        let corners = open.iter().map(Point::planar).collect::<HashSet<_>>().len();
        if corners < MIN_CORNERS {
            return Err(PolygonError::TooFewVertices {
                required: MIN_CORNERS,
                found: corners,
            });
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Vertex count including the closing point
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn area(&self) -> f64 {
        shoelace_sum(&self.points).unsigned_abs() as f64 / 2.0
    }
}

/// One hull and the holes cut out of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolygonWithHoles {
    hull: Polygon,
    holes: Vec<Polygon>,
}

impl PolygonWithHoles {
    pub fn new(hull: Polygon, holes: Vec<Polygon>) -> Self {
        Self { hull, holes }
    }

    pub fn hull(&self) -> &Polygon {
        &self.hull
    }

    pub fn holes(&self) -> &[Polygon] {
        &self.holes
    }

    /// Hull area minus the area of every hole
    pub fn net_area(&self) -> f64 {
        self.hull.area() - self.holes.iter().map(Polygon::area).sum::<f64>()
    }

    pub fn into_parts(self) -> (Polygon, Vec<Polygon>) {
        (self.hull, self.holes)
    }
}
