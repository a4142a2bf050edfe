use crate::domain::Point;

/// True when `a`, `b`, `c` lie on one vertical or one horizontal line
fn on_axis_run(a: Point, b: Point, c: Point) -> bool {
    (a.x == b.x && b.x == c.x) || (a.z == b.z && b.z == c.z)
}

/// Drop vertices that sit inside a straight axis-aligned run.
///
/// Expects a closed ring (first == last) and returns a closed ring holding only
/// corners plus the closing point. Running it on its own output is a no-op.
pub fn simplify_ring(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut simplified = Vec::with_capacity(points.len());
    let mut prev2 = points[0];
    let mut prev1 = points[1];
    simplified.push(prev2);

    for &next in &points[2..] {
        if next == prev1 {
            continue;
        }
        if on_axis_run(prev2, prev1, next) {
            prev1 = next;
        } else {
            simplified.push(prev1);
            prev2 = prev1;
            prev1 = next;
        }
    }
    simplified.push(prev1);

    close_seam(simplified)
}

/// Rotate the ring off a start vertex that lies mid-run
fn close_seam(mut ring: Vec<Point>) -> Vec<Point> {
    while ring.len() > 4 && ring.first() == ring.last() {
        let n = ring.len();
        if !on_axis_run(ring[n - 2], ring[0], ring[1]) {
            break;
        }
        ring.pop();
        ring.remove(0);
        ring.push(ring[0]);
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, z)| Point::new(x, 70, z)).collect()
    }

    #[test]
    fn test_simplify_square_unchanged() {
        let square = ring(&[(0, 16), (16, 16), (16, 0), (0, 0), (0, 16)]);
        assert_eq!(simplify_ring(&square), square);
    }

    #[test]
    fn test_simplify_merged_cells() {
        // Two cells side by side, with the shared edge's endpoints still present
        let strip = ring(&[
            (0, 16),
            (16, 16),
            (32, 16),
            (32, 0),
            (16, 0),
            (0, 0),
            (0, 16),
        ]);
        let expected = ring(&[(0, 16), (32, 16), (32, 0), (0, 0), (0, 16)]);
        assert_eq!(simplify_ring(&strip), expected);
    }

    #[test]
    fn test_simplify_long_vertical_run() {
        let column = ring(&[(0, 0), (0, 16), (0, 32), (0, 48), (16, 48), (16, 0), (0, 0)]);
        let expected = ring(&[(0, 0), (0, 48), (16, 48), (16, 0), (0, 0)]);
        assert_eq!(simplify_ring(&column), expected);
    }

    #[test]
    fn test_simplify_start_mid_run() {
        let strip = ring(&[(16, 16), (32, 16), (32, 0), (0, 0), (0, 16), (16, 16)]);
        let simplified = simplify_ring(&strip);

        assert_eq!(simplified.len(), 5);
        assert_eq!(simplified.first(), simplified.last());
        assert!(!simplified.contains(&Point::new(16, 70, 16)));
    }

    #[test]
    fn test_simplify_collapses_duplicates() {
        let square = ring(&[(0, 0), (0, 0), (4, 0), (4, 4), (4, 4), (0, 4), (0, 0)]);
        let expected = ring(&[(0, 0), (4, 0), (4, 4), (0, 4), (0, 0)]);
        assert_eq!(simplify_ring(&square), expected);
    }

    #[test]
    fn test_simplify_idempotent() {
        let l_shape = ring(&[
            (0, 0),
            (16, 0),
            (32, 0),
            (32, 16),
            (16, 16),
            (16, 32),
            (0, 32),
            (0, 16),
            (0, 0),
        ]);
        let once = simplify_ring(&l_shape);
        let twice = simplify_ring(&once);

        assert_eq!(once, twice);
        assert_eq!(once.len(), 7);
    }
}
