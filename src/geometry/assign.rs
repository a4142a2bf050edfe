//! Pair each hole with the hull that encloses it

use tracing::{debug, warn};

use super::region::PlanarRegion;
use crate::domain::{Polygon, PolygonWithHoles};

/// Overlap areas within this tolerance count as full containment
const AREA_EPSILON: f64 = 1e-6;

/// Hulls grouped with their holes, plus the holes that could not be placed
#[derive(Debug, Default)]
pub struct Assignment {
    pub groups: Vec<PolygonWithHoles>,
    /// Holes that intersected no hull and were dropped
    pub unmatched: usize,
    /// Holes only partially covered by their chosen hull
    pub ambiguous: usize,
}

enum Claim {
    /// Hull index whose filled footprint covers the whole hole
    Contained(usize),
    /// First hull that overlaps the hole at all
    Overlapping(usize),
}

/// Group `holes` under `hulls`, keeping hull order.
///
/// A hole goes to the smallest hull that fully contains it, so a hole in an
/// outer hull is not stolen by an island sitting inside that hole. If no hull
/// covers it completely, the first overlapping hull takes it. A hole that
/// overlaps no hull is dropped.
pub fn assign_holes<R: PlanarRegion>(hulls: Vec<Polygon>, holes: Vec<Polygon>) -> Assignment {
    let hull_regions: Vec<R> = hulls.iter().map(R::from_ring).collect();
    let hull_areas: Vec<f64> = hull_regions.iter().map(R::area).collect();
    let mut claimed: Vec<Vec<Polygon>> = vec![Vec::new(); hulls.len()];
    let mut assignment = Assignment::default();

    for hole in holes {
        let hole_region = R::from_ring(&hole);
        match find_claim(&hull_regions, &hull_areas, &hole_region) {
            Some(Claim::Contained(index)) => claimed[index].push(hole),
            Some(Claim::Overlapping(index)) => {
                debug!(
                    "Hole starting at {:?} is not fully inside hull {}, assigning anyway",
                    hole.points().first(),
                    index
                );
                assignment.ambiguous += 1;
                claimed[index].push(hole);
            }
            None => {
                warn!(
                    "Dropping hole starting at {:?}: it intersects no hull",
                    hole.points().first()
                );
                assignment.unmatched += 1;
            }
        }
    }

    assignment.groups = hulls
        .into_iter()
        .zip(claimed)
        .map(|(hull, holes)| PolygonWithHoles::new(hull, holes))
        .collect();
    assignment
}

fn find_claim<R: PlanarRegion>(hulls: &[R], hull_areas: &[f64], hole: &R) -> Option<Claim> {
    let hole_area = hole.area();
    let mut best: Option<usize> = None;
    let mut first_overlap = None;

    for (index, hull) in hulls.iter().enumerate() {
        let overlap = hull.intersect(hole);
        if overlap.is_empty() {
            continue;
        }
        first_overlap.get_or_insert(index);

        let contains = (overlap.area() - hole_area).abs() <= AREA_EPSILON;
        if contains && best.is_none_or(|b| hull_areas[index] < hull_areas[b]) {
            best = Some(index);
        }
    }

    best.map(Claim::Contained)
        .or_else(|| first_overlap.map(Claim::Overlapping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;
    use crate::geometry::region::Region;

    fn polygon(coords: &[(i32, i32)]) -> Polygon {
        Polygon::new(coords.iter().map(|&(x, z)| Point::new(x, 64, z)).collect()).unwrap()
    }

    fn square(x: i32, z: i32, size: i32) -> Polygon {
        polygon(&[(x, z + size), (x + size, z + size), (x + size, z), (x, z)])
    }

    fn hole(x: i32, z: i32, size: i32) -> Polygon {
        polygon(&[(x, z), (x + size, z), (x + size, z + size), (x, z + size)])
    }

    #[test]
    fn test_hole_joins_enclosing_hull() {
        let assignment = assign_holes::<Region>(
            vec![square(100, 100, 16), square(0, 0, 48)],
            vec![hole(16, 16, 16)],
        );

        assert_eq!(assignment.groups.len(), 2);
        assert!(assignment.groups[0].holes().is_empty());
        assert_eq!(assignment.groups[1].holes().len(), 1);
        assert_eq!(assignment.unmatched, 0);
    }

    #[test]
    fn test_unmatched_hole_dropped() {
        let assignment =
            assign_holes::<Region>(vec![square(0, 0, 16)], vec![hole(200, 200, 16)]);

        assert_eq!(assignment.groups.len(), 1);
        assert!(assignment.groups[0].holes().is_empty());
        assert_eq!(assignment.unmatched, 1);
    }

    #[test]
    fn test_island_does_not_steal_hole() {
        // Outer 5x5 hull, 3x3 hole in it, single-cell island in the middle of the hole
        let island = square(32, 32, 16);
        let outer = square(0, 0, 80);
        let assignment = assign_holes::<Region>(vec![island, outer], vec![hole(16, 16, 48)]);

        assert!(assignment.groups[0].holes().is_empty());
        assert_eq!(assignment.groups[1].holes().len(), 1);
        assert_eq!(assignment.ambiguous, 0);
    }

    #[test]
    fn test_nested_hole_goes_to_smallest_container() {
        let big = square(0, 0, 160);
        let small = square(32, 32, 64);
        let assignment = assign_holes::<Region>(vec![big, small], vec![hole(48, 48, 16)]);

        assert!(assignment.groups[0].holes().is_empty());
        assert_eq!(assignment.groups[1].holes().len(), 1);
    }

    #[test]
    fn test_straddling_hole_goes_to_first_overlap() {
        let left = square(0, 0, 32);
        let right = square(32, 0, 32);
        let assignment = assign_holes::<Region>(vec![left, right], vec![hole(24, 8, 16)]);

        assert_eq!(assignment.groups[0].holes().len(), 1);
        assert!(assignment.groups[1].holes().is_empty());
        assert_eq!(assignment.ambiguous, 1);
    }

    #[test]
    fn test_no_hulls() {
        let assignment = assign_holes::<Region>(Vec::new(), vec![hole(0, 0, 16)]);
        assert!(assignment.groups.is_empty());
        assert_eq!(assignment.unmatched, 1);
    }
}
