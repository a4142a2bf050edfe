//! Boundary walking: turn a segment stream into closed, simplified rings

use tracing::debug;

use super::region::Segment;
use super::simplify::simplify_ring;
use crate::domain::{Point, Polygon};

/// Rings traced from one boundary walk
#[derive(Debug, Default)]
pub struct WalkResult {
    pub rings: Vec<Polygon>,
    /// Number of sub-paths seen in the segment stream
    pub rings_walked: usize,
    /// Vertices removed by simplification.
    ///
    /// Usually 0 for a geo-backed [`Region`](super::Region): its boolean ops
    /// already merge collinear runs, so only other segment sources feed the
    /// simplifier redundant vertices.
    pub vertices_removed: usize,
    /// Sub-paths discarded for having too few distinct corners
    pub degenerate_rings: usize,
}

/// Accumulates vertices for the ring currently being walked
struct BoundaryWalker {
    elevation: i32,
    current: Vec<Point>,
    result: WalkResult,
}

impl BoundaryWalker {
    fn new(elevation: i32) -> Self {
        Self {
            elevation,
            current: Vec::new(),
            result: WalkResult::default(),
        }
    }

    fn point(&self, x: f64, z: f64) -> Point {
        // Boolean ops can leave tiny float noise on otherwise integral corners
        Point::new(x.round() as i32, self.elevation, z.round() as i32)
    }

    fn step(&mut self, segment: Segment) {
        match segment {
            Segment::Start(x, z) => {
                self.finish();
                let start = self.point(x, z);
                self.current.push(start);
            }
            Segment::LineTo(x, z) => {
                let next = self.point(x, z);
                self.current.push(next);
            }
            Segment::Close => self.finish(),
        }
    }

    fn finish(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let mut ring = std::mem::take(&mut self.current);
        self.result.rings_walked += 1;

        if let (Some(&first), Some(&last)) = (ring.first(), ring.last())
            && first != last
        {
            ring.push(first);
        }

        let simplified = simplify_ring(&ring);
        self.result.vertices_removed += ring.len() - simplified.len();

        match Polygon::new(simplified) {
            Ok(polygon) => self.result.rings.push(polygon),
            Err(e) => {
                debug!("Discarding boundary ring: {}", e);
                self.result.degenerate_rings += 1;
            }
        }
    }

    fn into_result(mut self) -> WalkResult {
        self.finish();
        self.result
    }
}

/// Walk `segments`, emitting one closed simplified ring per sub-path.
///
/// Every vertex gets `elevation` as its `y`.
pub fn walk_boundary<I>(segments: I, elevation: i32) -> WalkResult
where
    I: IntoIterator<Item = Segment>,
{
    let mut walker = BoundaryWalker::new(elevation);
    for segment in segments {
        walker.step(segment);
    }
    let result = walker.into_result();

    debug!(
        "Walked {} rings ({} kept, {} vertices simplified away)",
        result.rings_walked,
        result.rings.len(),
        result.vertices_removed
    );
    result
}
