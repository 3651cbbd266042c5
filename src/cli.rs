//! Command-line front end.
//!
//! Loads the persisted configuration, applies any overrides, runs the
//! requested placement batches and writes the result as DXF.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use circlefill_core::units::{format_diameter_label, format_length};
use circlefill_core::{FitMode, LinearUnit};
use circlefill_designer::Circle;
use circlefill_settings::{default_config_path, Config};

use crate::{designer_from_config, store_in_config};

/// Output file name used when no `--output` is given.
const DEFAULT_OUTPUT_NAME: &str = "circles.dxf";

#[derive(Debug, Parser)]
#[command(name = "circlefill", version)]
#[command(about = "Place random non-overlapping circles in a rectangle and export them as DXF")]
pub struct Cli {
    /// Config file (.toml or .json); the platform config dir is used when omitted
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Rectangle top-left X in mm
    #[arg(long, allow_negative_numbers = true)]
    pub x0: Option<f64>,

    /// Rectangle top-left Y in mm
    #[arg(long, allow_negative_numbers = true)]
    pub y0: Option<f64>,

    /// Rectangle width in mm
    #[arg(long, short = 'W')]
    pub width: Option<f64>,

    /// Rectangle height in mm
    #[arg(long, short = 'H')]
    pub height: Option<f64>,

    /// Circle diameter in mm
    #[arg(long, short = 'd')]
    pub diameter: Option<f64>,

    /// Circles per batch
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Minimum edge-to-edge spacing in mm
    #[arg(long, short = 's')]
    pub spacing: Option<f64>,

    /// Number of batches to add
    #[arg(long, default_value_t = 1)]
    pub batches: usize,

    /// Reposition every circle after adding, largest first
    #[arg(long)]
    pub mix: bool,

    /// Seed for reproducible placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// View fit mode used for the export reference (auto or manual)
    #[arg(long)]
    pub fit: Option<FitMode>,

    /// Manual scale in px/mm
    #[arg(long)]
    pub px_per_mm: Option<f64>,

    /// DXF layer name
    #[arg(long)]
    pub layer: Option<String>,

    /// DXF color index (1-255)
    #[arg(long)]
    pub color: Option<u8>,

    /// Output DXF path
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    pub save_config: bool,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    pub fn apply_overrides(&self, config: &mut Config) {
        let rect = &mut config.rectangle;
        if let Some(x0) = self.x0 {
            rect.x0 = x0;
        }
        if let Some(y0) = self.y0 {
            rect.y0 = y0;
        }
        if let Some(width) = self.width {
            rect.width = width;
        }
        if let Some(height) = self.height {
            rect.height = height;
        }

        let circles = &mut config.circles;
        if let Some(diameter) = self.diameter {
            circles.diameter = diameter;
        }
        if let Some(count) = self.count {
            circles.count = count;
        }
        if let Some(spacing) = self.spacing {
            circles.min_spacing = spacing;
        }

        if let Some(fit) = self.fit {
            config.view.fit_mode = fit;
        }
        if let Some(px_per_mm) = self.px_per_mm {
            config.view.manual_px_per_mm = px_per_mm;
        }
        if let Some(layer) = &self.layer {
            config.export.layer = layer.clone();
        }
        if let Some(color) = self.color {
            config.export.color = color;
        }
    }

    /// Output path, with `.dxf` appended when no extension was given.
    fn output_path(&self, config: &Config) -> PathBuf {
        let mut path = self
            .output
            .clone()
            .unwrap_or_else(|| config.export.output_directory.join(DEFAULT_OUTPUT_NAME));
        if path.extension().is_none() {
            path.set_extension("dxf");
        }
        path
    }
}

/// Circle counts per diameter label, in first-seen order.
fn diameter_summary(circles: &[Circle]) -> Vec<(String, usize)> {
    let mut summary: Vec<(String, usize)> = Vec::new();
    for circle in circles {
        let label = format_diameter_label(circle.diameter);
        match summary.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => summary.push((label, 1)),
        }
    }
    summary
}

/// Runs one command-line session.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => match default_config_path() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("{}; using built-in defaults", e);
                None
            }
        },
    };

    let mut config = match &config_path {
        Some(path) => Config::load_or_default(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    cli.apply_overrides(&mut config);

    let mut state = designer_from_config(&config, cli.seed)?;

    for batch in 0..cli.batches {
        let report = state
            .add_random_circles()
            .with_context(|| format!("Batch {} failed", batch + 1))?;
        if let Some(notice) = report.notice() {
            eprintln!("{}", notice);
        }
    }

    if cli.mix {
        let report = state.mix_circles()?;
        if let Some(notice) = report.notice() {
            eprintln!("{}", notice);
        }
    }

    let output = cli.output_path(&config);
    state.save_dxf(&output)?;
    info!("{}", state.scale_label());
    println!("{} circles written to {}", state.circles.len(), output.display());
    println!(
        "Rectangle: {} x {}",
        format_length(state.rectangle.width, LinearUnit::Millimeters),
        format_length(state.rectangle.height, LinearUnit::Millimeters)
    );
    for (label, count) in diameter_summary(&state.circles) {
        println!("  {}: {}", label, count);
    }

    if cli.save_config {
        if let Some(path) = &config_path {
            store_in_config(&state, &mut config);
            config.add_recent_export(output);
            config.save_to_file(path)?;
        } else {
            warn!("No config path available, settings not saved");
        }
    }

    Ok(())
}
