//! Cell sets to hull/hole polygon groups
//!
//! # Algorithm
//! 1. Union the cell rectangles into one planar region
//! 2. Walk the region boundary into closed rings, simplifying each one
//! 3. Classify rings by shoelace sign: non-negative is a hull, negative a hole
//! 4. Attach every hole to the hull that encloses it

pub mod report;

pub use report::ExtractionReport;

use tracing::debug;

use crate::config::grid::CELL_SIZE;
use crate::domain::{Cell, PolygonWithHoles};
use crate::error::PolygonError;
use crate::geometry::{
    PlanarRegion, Region, Winding, assign_holes, classify, shoelace_sum, walk_boundary,
};

/// Outline a set of map cells. Empty input gives an empty list.
///
/// Fails only when a cell lies too far out for its corners to fit in `i32`.
pub fn extract_polygons(
    cells: &[Cell],
    elevation: i32,
) -> Result<Vec<PolygonWithHoles>, PolygonError> {
    let region = Region::from_cells(cells, CELL_SIZE)?;
    Ok(extract_region(&region, elevation))
}

pub fn extract_region<R: PlanarRegion>(region: &R, elevation: i32) -> Vec<PolygonWithHoles> {
    extract_region_with_report(region, elevation).0
}

/// Outline any planar region and report what was dropped along the way
pub fn extract_region_with_report<R: PlanarRegion>(
    region: &R,
    elevation: i32,
) -> (Vec<PolygonWithHoles>, ExtractionReport) {
    let walk = walk_boundary(region.boundary(), elevation);
    let mut report = ExtractionReport {
        rings_walked: walk.rings_walked,
        vertices_removed: walk.vertices_removed,
        degenerate_rings: walk.degenerate_rings,
        ..Default::default()
    };

    let mut hulls = Vec::new();
    let mut holes = Vec::new();
    for ring in walk.rings {
        if shoelace_sum(ring.points()) == 0 {
            report.degenerate_rings += 1;
            continue;
        }
        match classify(&ring) {
            Winding::Hull => hulls.push(ring),
            Winding::Hole => holes.push(ring),
        }
    }

    let hole_count = holes.len();
    debug!("Classified {} hulls and {} holes", hulls.len(), hole_count);

    let assignment = assign_holes::<R>(hulls, holes);
    report.hulls = assignment.groups.len();
    report.holes = hole_count - assignment.unmatched;
    report.unmatched_holes = assignment.unmatched;
    report.ambiguous_holes = assignment.ambiguous;

    (assignment.groups, report)
}
