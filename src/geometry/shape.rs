use super::region::{PlanarRegion, Region};
use crate::config::grid::CELL_SIZE;
use crate::domain::{Cell, Rect};
use crate::error::PolygonError;

/// Composite shape assembled from cells and rectangles.
///
/// Operations apply in call order, so a later `add_*` can refill an area an
/// earlier `subtract_*` removed.
#[derive(Debug, Clone)]
pub struct ShapeBuilder {
    region: Region,
    cell_size: u16,
}

impl Default for ShapeBuilder {
    fn default() -> Self {
        Self {
            region: Region::empty(),
            cell_size: CELL_SIZE,
        }
    }
}

impl ShapeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cell_size(mut self, cell_size: u16) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn add_cells(mut self, cells: &[Cell]) -> Result<Self, PolygonError> {
        if !cells.is_empty() {
            let cells = Region::from_cells(cells, self.cell_size)?;
            self.region = self.region.union(&cells);
        }
        Ok(self)
    }

    pub fn subtract_cells(mut self, cells: &[Cell]) -> Result<Self, PolygonError> {
        if !cells.is_empty() {
            let cells = Region::from_cells(cells, self.cell_size)?;
            self.region = self.region.subtract(&cells);
        }
        Ok(self)
    }

    pub fn add_rect(mut self, rect: Rect) -> Self {
        self.region = self.region.union(&Region::from_rect(rect));
        self
    }

    pub fn subtract_rect(mut self, rect: Rect) -> Self {
        self.region = self.region.subtract(&Region::from_rect(rect));
        self
    }

    pub fn build(self) -> Region {
        self.region
    }
}
