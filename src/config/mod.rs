use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Grid constants shared by the region builder and the CLI.
///
/// A cell is one map chunk: a square of 16x16 world units whose north-west
/// corner sits at `(cell_x * 16, cell_z * 16)`.
pub mod grid {
    pub const CELL_SIZE: u16 = 16;

    /// Elevation stamped on output vertices when neither the shape file nor the
    /// command line picks one.
    pub const DEFAULT_ELEVATION: i32 = 64;
}

fn default_elevation() -> i32 {
    grid::DEFAULT_ELEVATION
}
fn default_pretty() -> bool {
    false
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_elevation")]
    pub elevation: i32,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            elevation: default_elevation(),
            output: None,
            pretty: default_pretty(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// Search the standard locations and return the first config that parses
    pub fn load() -> Option<Self> {
        get_config_paths().into_iter().find_map(|path| {
            let contents = std::fs::read_to_string(&path).ok()?;
            toml::from_str::<FileConfig>(&contents)
                .inspect_err(|e| eprintln!("Warning: skipping config file {:?}: {}", path, e))
                .ok()
        })
    }

    /// Load an explicitly requested config file; failures are errors here
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }
}

/// Base name for every config file location
const CONFIG_NAME: &str = "chunkhull";

/// Candidate config files, most local first
fn get_config_paths() -> Vec<PathBuf> {
    let file_name = format!("{CONFIG_NAME}.toml");
    let mut paths = vec![PathBuf::from(&file_name), PathBuf::from(format!(".{file_name}"))];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(CONFIG_NAME).join("config.toml"));
        paths.push(config_dir.join(&file_name));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{file_name}")));
        paths.push(home.join(".config").join(CONFIG_NAME).join("config.toml"));
    }
    paths
}
