pub mod assign;
pub mod region;
pub mod shape;
pub mod simplify;
pub mod walker;
pub mod winding;

pub use assign::{Assignment, assign_holes};
pub use region::{PlanarRegion, Region, Segment};
pub use shape::ShapeBuilder;
pub use simplify::simplify_ring;
pub use walker::{WalkResult, walk_boundary};
pub use winding::{Winding, classify, shoelace_sum};
