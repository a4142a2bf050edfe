//! Counters describing one extraction run

/// What the extraction pipeline did with the traced boundary
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Sub-paths produced by the boundary walk
    pub rings_walked: usize,
    /// Collinear vertices removed by simplification; usually 0 for cell
    /// unions, where the geometry engine has already merged collinear runs
    pub vertices_removed: usize,
    /// Rings discarded for too few corners or zero area
    pub degenerate_rings: usize,
    /// Hulls emitted, one per output group
    pub hulls: usize,
    /// Holes attached to a hull
    pub holes: usize,
    /// Holes that intersected no hull and were dropped
    pub unmatched_holes: usize,
    /// Holes attached to a hull that does not fully contain them
    pub ambiguous_holes: usize,
}

impl ExtractionReport {
    /// Check if anything was dropped or guessed
    pub fn has_issues(&self) -> bool {
        self.degenerate_rings > 0 || self.unmatched_holes > 0 || self.ambiguous_holes > 0
    }

    pub fn summary(&self) -> String {
        if !self.has_issues() {
            format!(
                "{} hulls, {} holes from {} rings, no issues",
                self.hulls, self.holes, self.rings_walked
            )
        } else {
            format!(
                "{} hulls, {} holes from {} rings: {} degenerate, {} unmatched holes, {} ambiguous holes",
                self.hulls,
                self.holes,
                self.rings_walked,
                self.degenerate_rings,
                self.unmatched_holes,
                self.ambiguous_holes
            )
        }
    }
}
