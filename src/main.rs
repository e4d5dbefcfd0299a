use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use shape2poi::batch::{BatchOptions, check_interpolate_distance, process_input_files};
use shape2poi::config::FileConfig;
use shape2poi::domain::poi::{DEFAULT_COLOR, DEFAULT_MAX_LOD};
use shape2poi::logging::init_logging;
use shape2poi::normalize_color;
use shape2poi::package::{PackageConfig, create_package, default_output_path};

/// Convert shapefile and KML/KMZ geometry into a POI layer mod
///
/// Examples:
///   # Convert one KML file into routes_mod.zip
///   shape2poi routes.kml
///
///   # Combine several inputs, densify lines to one marker every 500 m
///   shape2poi a.shp b.kmz --interpolate-distance 500 -o combined.zip
///
///   # Custom color, detail level and manifest
///   shape2poi trail.kml --color "#ff8800" --max-lod 8 -m mod.txt
///
///   # Use a config file
///   shape2poi --config my-settings.toml trail.kml
#[derive(Parser, Debug)]
#[command(name = "shape2poi")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input files (.shp, .kml, .kmz)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Path to config file (optional, auto-searches shape2poi.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output zip path (defaults to {input}_mod.zip or combined_mod.zip)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Custom mod.txt; its tsv entries are pointed at the generated table
    #[arg(short = 'm', long)]
    manifest: Option<PathBuf>,

    /// Max distance in meters between markers along lines (0 disables, otherwise at least 1)
    #[arg(long, default_value = "0")]
    interpolate_distance: f64,

    /// Maximum level of detail at which markers are shown
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(i32).range(0..=15))]
    max_lod: i32,

    /// Marker color as RRGGBB, #RRGGBB or AARRGGBB
    #[arg(long, default_value = DEFAULT_COLOR)]
    color: String,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = match args.config {
        Some(ref config_path) => Some(FileConfig::from_path(config_path)?),
        None => FileConfig::load(),
    };

    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    init_logging(verbose);

    let interpolate_distance = if args.interpolate_distance != 0.0 {
        args.interpolate_distance
    } else {
        file_config
            .as_ref()
            .map(|c| c.interpolate_distance)
            .unwrap_or(0.0)
    };
    let interpolate_distance = check_interpolate_distance(interpolate_distance)?;
    let max_lod = if args.max_lod != DEFAULT_MAX_LOD {
        args.max_lod
    } else {
        file_config
            .as_ref()
            .map(|c| c.max_lod)
            .unwrap_or(DEFAULT_MAX_LOD)
    };
    let color = if args.color != DEFAULT_COLOR {
        args.color.clone()
    } else {
        file_config
            .as_ref()
            .map(|c| c.color.clone())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string())
    };
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()))
        .unwrap_or_else(|| default_output_path(&args.inputs));
    let manifest = args
        .manifest
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.manifest.clone()));

    let options = BatchOptions::default()
        .with_interpolate_distance(interpolate_distance)
        .with_max_lod(max_lod)
        .with_color(normalize_color(&color));
    let package_config = PackageConfig::new(output).with_manifest(manifest);

    println!("shape2poi - Geographic files to POI layer");
    println!("=========================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Inputs: {}", args.inputs.len());
        println!("  Interpolate distance: {}m", options.interpolate_distance);
        println!("  Max LOD: {}", options.max_lod);
        println!("  Color: {}", options.color);
        if let Some(ref m) = package_config.manifest {
            println!("  Manifest: {}", m.display());
        }
        println!("  Output: {}", package_config.output.display());
        println!();
    }

    let spinner = create_spinner(&format!("Processing {} input files...", args.inputs.len()));
    let start = Instant::now();
    let pois = process_input_files(&args.inputs, &options);
    let pois = match pois {
        Ok(pois) => pois,
        Err(e) => {
            spinner.abandon_with_message("No POIs extracted");
            return Err(e).context("Failed to convert input files");
        }
    };
    spinner.finish_with_message(format!(
        "Extracted {} POIs [{:.1}s]",
        pois.len(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Writing mod package...");
    let start = Instant::now();
    let summary = create_package(&pois, &package_config).context("Failed to write mod package")?;
    let file_size = std::fs::metadata(&summary.path)
        .map(|m| m.len())
        .unwrap_or(0);
    spinner.finish_with_message(format!(
        "Wrote {} ({:.1} KB) [{:.1}s]",
        summary.tsv_file,
        file_size as f64 / 1024.0,
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("POIs:   {}", summary.poi_count);
    println!("Output: {}", summary.path.display());

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
