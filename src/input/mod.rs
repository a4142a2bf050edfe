//! Shape description files
//!
//! A shape file lists cells and rectangles in JSON or TOML:
//!
//! ```toml
//! elevation = 70
//! cells = [[0, 0], [1, 0]]
//! remove = [[1, 0]]
//!
//! [[add]]
//! x = 40
//! z = 0
//! width = 8
//! height = 24
//!
//! [[subtract]]
//! x = 4
//! z = 4
//! width = 4
//! height = 4
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

use crate::domain::{Cell, Rect};
use crate::geometry::{Region, ShapeBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeFormat {
    Json,
    Toml,
}

impl ShapeFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ShapeFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ShapeFormat::Toml),
            _ => bail!(
                "Unsupported shape file {:?}: expected a .json or .toml extension",
                path
            ),
        }
    }
}

/// Rectangle entry in world units
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RectSpec {
    pub x: i32,
    pub z: i32,
    pub width: i32,
    pub height: i32,
}

impl RectSpec {
    fn to_rect(self) -> Result<Rect> {
        Rect::new(self.x, self.z, self.width, self.height)
            .with_context(|| format!("Invalid rectangle at ({}, {})", self.x, self.z))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ShapeFile {
    #[serde(default)]
    pub elevation: Option<i32>,
    /// Cells to fill, as `[cell_x, cell_z]`
    #[serde(default)]
    pub cells: Vec<(i32, i32)>,
    /// Cells cut out after everything else is added
    #[serde(default)]
    pub remove: Vec<(i32, i32)>,
    #[serde(default)]
    pub add: Vec<RectSpec>,
    #[serde(default)]
    pub subtract: Vec<RectSpec>,
}

impl ShapeFile {
    pub fn parse(contents: &str, format: ShapeFormat) -> Result<Self> {
        match format {
            ShapeFormat::Json => {
                serde_json::from_str(contents).context("Failed to parse JSON shape file")
            }
            ShapeFormat::Toml => toml::from_str(contents).context("Failed to parse TOML shape file"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.add.is_empty()
    }

    /// Build the region: cells and `add` rectangles first, then `subtract`, then `remove`
    pub fn to_region(&self) -> Result<Region> {
        let cells: Vec<Cell> = self.cells.iter().copied().map(Cell::from).collect();
        let removed: Vec<Cell> = self.remove.iter().copied().map(Cell::from).collect();

        let mut builder = ShapeBuilder::new()
            .add_cells(&cells)
            .context("Invalid cell in shape file")?;
        for spec in &self.add {
            builder = builder.add_rect(spec.to_rect()?);
        }
        for spec in &self.subtract {
            builder = builder.subtract_rect(spec.to_rect()?);
        }
        let builder = builder
            .subtract_cells(&removed)
            .context("Invalid cell in remove list")?;
        Ok(builder.build())
    }
}

/// Read and parse a shape file, choosing the format by extension
pub fn load_shape(path: &Path) -> Result<ShapeFile> {
    let format = ShapeFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read shape file: {:?}", path))?;
    ShapeFile::parse(&contents, format)
}
