use crate::domain::{Point, Polygon};

/// Role of a traced ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Counter-clockwise outer boundary
    Hull,
    /// Clockwise inner boundary
    Hole,
}

/// Shoelace sum `Σ (xb - xa) * (zb + za)` over consecutive pairs, wrapping last to first.
///
/// With +X east and +Z south a counter-clockwise ring yields a positive sum.
/// The magnitude is twice the enclosed area.
pub fn shoelace_sum(points: &[Point]) -> i64 {
    let Some(&last) = points.last() else {
        return 0;
    };
    let mut prev = last;
    let mut sum = 0i64;
    for &point in points {
        let dx = i64::from(point.x) - i64::from(prev.x);
        let zs = i64::from(point.z) + i64::from(prev.z);
        sum += dx * zs;
        prev = point;
    }
    sum
}

pub fn classify(polygon: &Polygon) -> Winding {
    if shoelace_sum(polygon.points()) < 0 {
        Winding::Hole
    } else {
        Winding::Hull
    }
}
