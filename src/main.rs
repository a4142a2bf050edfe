use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use chunkhull::config::FileConfig;
use chunkhull::extract_region_with_report;
use chunkhull::geometry::PlanarRegion;
use chunkhull::input::load_shape;
use chunkhull::output::{write_json, write_json_file};

/// Trace a set of map chunks into hull and hole polygons
///
/// Examples:
///   # Outline the cells listed in claim.toml and print JSON
///   chunkhull claim.toml
///
///   # Stamp elevation 70 on every vertex and write pretty JSON to a file
///   chunkhull -e 70 -o claim.json --pretty claim.json
///
///   # Use a config file
///   chunkhull --config my-settings.toml claim.toml
#[derive(Parser, Debug)]
#[command(name = "chunkhull")]
#[command(version, about, long_about = None)]
struct Args {
    /// Shape file (.json or .toml) listing cells and rectangles
    input: PathBuf,

    /// Path to config file (optional, auto-searches chunkhull.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Elevation stamped on every output vertex (overrides shape file and config)
    #[arg(short = 'e', long, allow_hyphen_values = true)]
    elevation: Option<i32>,

    /// Output JSON file path (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print settings and the extraction report to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = match args.config {
        Some(ref config_path) if config_path.exists() => FileConfig::from_path(config_path)?,
        Some(ref config_path) => bail!("Config file not found: {:?}", config_path),
        None => FileConfig::load().unwrap_or_default(),
    };

    let verbose = args.verbose || file_config.verbose;
    let pretty = args.pretty || file_config.pretty;
    let output = args.output.clone().or_else(|| file_config.output.clone());

    let shape = load_shape(&args.input)
        .with_context(|| format!("Failed to load shape from {}", args.input.display()))?;
    if shape.is_empty() {
        eprintln!("Warning: {} lists no cells or rectangles", args.input.display());
    }

    let elevation = args
        .elevation
        .or(shape.elevation)
        .unwrap_or(file_config.elevation);

    if verbose {
        eprintln!("chunkhull - Chunk Outline Tracer");
        eprintln!("================================");
        eprintln!();
        eprintln!("Configuration:");
        eprintln!("  Input: {}", args.input.display());
        eprintln!("  Cells: {}", shape.cells.len());
        eprintln!("  Removed cells: {}", shape.remove.len());
        eprintln!("  Rectangles: +{} / -{}", shape.add.len(), shape.subtract.len());
        eprintln!("  Elevation: {}", elevation);
        match output {
            Some(ref path) => eprintln!("  Output: {}", path.display()),
            None => eprintln!("  Output: stdout"),
        }
        eprintln!();
    }

    let spinner = create_spinner("Building region...")?;
    let start = Instant::now();
    let region = shape.to_region()?;
    spinner.finish_with_message(format!(
        "Region covers {:.0} square units [{:.1}s]",
        region.area(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Tracing outlines...")?;
    let start = Instant::now();
    let (polygons, report) = extract_region_with_report(&region, elevation);
    spinner.finish_with_message(format!(
        "Traced {} polygons [{:.1}s]",
        polygons.len(),
        start.elapsed().as_secs_f32()
    ));

    if verbose {
        eprintln!("  {}", report.summary());
        eprintln!(
            "  Simplification removed {} vertices",
            report.vertices_removed
        );
    }
    if report.unmatched_holes > 0 {
        eprintln!(
            "Warning: dropped {} holes that lie inside no hull",
            report.unmatched_holes
        );
    }

    match output {
        Some(ref path) => {
            write_json_file(path, &polygons, pretty).context("Failed to write polygons")?;
            if verbose {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => write_json(std::io::stdout().lock(), &polygons, pretty)
            .context("Failed to write polygons to stdout")?,
    }

    if verbose {
        eprintln!(
            "Done! Total time: {:.1}s",
            total_start.elapsed().as_secs_f32()
        );
    }

    Ok(())
}

fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .context("Invalid spinner template")?
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    Ok(pb)
}
