//! Command line interface
//!
//! Options mirror [`BoxConfig`]. A config file is loaded first, then every
//! option given on the command line replaces the matching field. Lengths are
//! read in the effective unit, and inch lengths accept fractions (`4 1/2`).

use anyhow::Context;
use clap::Parser;
use kerfbox_boxgen::{GenericBox, LidStyle};
use kerfbox_core::{parse_length, LengthUnit};
use kerfbox_settings::{BoxConfig, SettingsResult};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "kerfbox", version, about = "Laser-cut box generator, writes SVG cut paths")]
pub struct Cli {
    /// Box configuration to start from (.json or .toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the effective configuration to this file (.json or .toml)
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// SVG output file, stdout when absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Unit of every length option (mm, cm, m, in, pt, px, pc, ft, yd)
    #[arg(long)]
    pub unit: Option<LengthUnit>,

    /// Material thickness
    #[arg(short, long)]
    pub thickness: Option<String>,

    /// Laser kerf compensation
    #[arg(long)]
    pub burn: Option<String>,

    /// Lid style: Without, Simple, Sliding, WoodHinge, SteelHinge, Coffin
    #[arg(long)]
    pub lid: Option<LidStyle>,

    /// External length
    #[arg(short = 'x', long = "length")]
    pub x: Option<String>,

    /// External depth
    #[arg(short = 'y', long = "depth")]
    pub y: Option<String>,

    /// External height
    #[arg(short = 'z', long = "height")]
    pub z: Option<String>,

    /// Lid height of hinged lids
    #[arg(long)]
    pub z_lid: Option<String>,

    /// Dome height of the coffin lid
    #[arg(long)]
    pub z_dome_lid: Option<String>,

    /// Compartments along the length
    #[arg(long)]
    pub n_slot_x: Option<usize>,

    /// Compartments along the depth
    #[arg(long)]
    pub n_slot_y: Option<usize>,

    /// Use the corner radii instead of square corners
    #[arg(long)]
    pub rounded: bool,

    /// Radius of every vertical edge, before the per corner options
    #[arg(long)]
    pub radius: Option<String>,

    #[arg(long)]
    pub back_left_radius: Option<String>,

    #[arg(long)]
    pub back_right_radius: Option<String>,

    #[arg(long)]
    pub front_left_radius: Option<String>,

    #[arg(long)]
    pub front_right_radius: Option<String>,

    /// Finger size along the length, disables automatic joint sizes
    #[arg(long)]
    pub x_joint: Option<String>,

    /// Finger size along the depth, disables automatic joint sizes
    #[arg(long)]
    pub y_joint: Option<String>,

    /// Finger size along the height, disables automatic joint sizes
    #[arg(long)]
    pub z_joint: Option<String>,

    /// Draw every flex line of the coffin lid, flat parts included
    #[arg(long)]
    pub all_flex_lines: bool,
}

impl Cli {
    /// Replace the fields of `config` given on the command line
    pub fn apply_overrides(&self, config: &mut BoxConfig) -> SettingsResult<()> {
        fn set<T: Copy>(field: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *field = value;
            }
        }
        set(&mut config.unit, self.unit);
        let unit = config.unit;
        let length = |value: &Option<String>| -> SettingsResult<Option<f64>> {
            Ok(value.as_deref().map(|s| parse_length(s, unit)).transpose()?)
        };

        set(&mut config.thickness, length(&self.thickness)?);
        set(&mut config.burn, length(&self.burn)?);
        set(&mut config.lid_type, self.lid);
        set(&mut config.x, length(&self.x)?);
        set(&mut config.y, length(&self.y)?);
        set(&mut config.z, length(&self.z)?);
        set(&mut config.z_lid, length(&self.z_lid)?);
        set(&mut config.z_dome_lid, length(&self.z_dome_lid)?);
        set(&mut config.n_slot_x, self.n_slot_x);
        set(&mut config.n_slot_y, self.n_slot_y);
        if self.rounded {
            config.straight_corners = false;
        }
        if let Some(radius) = length(&self.radius)? {
            config.back_left_radius = radius;
            config.back_right_radius = radius;
            config.front_left_radius = radius;
            config.front_right_radius = radius;
        }
        set(&mut config.back_left_radius, length(&self.back_left_radius)?);
        set(&mut config.back_right_radius, length(&self.back_right_radius)?);
        set(&mut config.front_left_radius, length(&self.front_left_radius)?);
        set(&mut config.front_right_radius, length(&self.front_right_radius)?);
        if self.x_joint.is_some() || self.y_joint.is_some() || self.z_joint.is_some() {
            config.auto_size_joints = false;
        }
        set(&mut config.x_joint, length(&self.x_joint)?);
        set(&mut config.y_joint, length(&self.y_joint)?);
        set(&mut config.z_joint, length(&self.z_joint)?);
        if self.all_flex_lines {
            config.skip_flex_lines = false;
        }
        Ok(())
    }
}

/// Build the box described by the command line and write its SVG
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => BoxConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BoxConfig::default(),
    };
    cli.apply_overrides(&mut config).context("Invalid command line length")?;
    config.validate().context("Invalid box configuration")?;

    if let Some(path) = &cli.save_config {
        config
            .save_to_file(path)
            .with_context(|| format!("Failed to save config {}", path.display()))?;
        info!("configuration saved to {}", path.display());
    }

    let params = config.to_params()?;
    let document = GenericBox::new(params)?.generate()?;
    let svg = document.to_svg();
    match &cli.output {
        Some(path) => {
            std::fs::write(path, svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("{} parts written to {}", document.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(svg.as_bytes())
                .context("Failed to write SVG to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
