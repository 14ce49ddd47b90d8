//! Box configuration
//!
//! One flat record holding every generator option, lengths expressed in
//! `unit`. Stored as JSON or TOML, the format being picked from the file
//! extension. Only structural checks happen here: whether the box can
//! actually be built is decided by the generator.

use crate::error::{SettingsError, SettingsResult};
use kerfbox_boxgen::{BoxParams, CornerRadii, LidStyle};
use kerfbox_core::LengthUnit;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Format named by the extension of `path`
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(format!(
                "config file must be .json or .toml, got {}",
                other.unwrap_or("no extension")
            ))),
        }
    }
}

/// Every option of the box generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    /// Unit of every length below
    pub unit: LengthUnit,
    pub thickness: f64,
    /// Laser kerf compensation
    pub burn: f64,
    pub lid_type: LidStyle,
    /// External length
    pub x: f64,
    /// External depth
    pub y: f64,
    /// External height
    pub z: f64,
    pub z_lid: f64,
    pub z_dome_lid: f64,
    pub n_slot_x: usize,
    pub n_slot_y: usize,
    pub straight_corners: bool,
    pub back_left_radius: f64,
    pub back_right_radius: f64,
    pub front_left_radius: f64,
    pub front_right_radius: f64,
    pub auto_size_joints: bool,
    pub x_joint: f64,
    pub y_joint: f64,
    pub z_joint: f64,
    pub skip_flex_lines: bool,
}

impl Default for BoxConfig {
    fn default() -> Self {
        let params = BoxParams::default();
        Self {
            unit: LengthUnit::Mm,
            thickness: params.thickness,
            burn: params.burn,
            lid_type: params.lid,
            x: params.x,
            y: params.y,
            z: params.z,
            z_lid: params.z_lid,
            z_dome_lid: params.z_dome_lid,
            n_slot_x: params.n_slot_x,
            n_slot_y: params.n_slot_y,
            straight_corners: params.straight_corners,
            back_left_radius: params.radii.back_left,
            back_right_radius: params.radii.back_right,
            front_left_radius: params.radii.front_left,
            front_right_radius: params.radii.front_right,
            auto_size_joints: params.auto_size_joints,
            x_joint: params.x_joint,
            y_joint: params.y_joint,
            z_joint: params.z_joint,
            skip_flex_lines: params.skip_flex_lines,
        }
    }
}

impl BoxConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        debug!("loaded box config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        debug!("saved box config to {}", path.display());
        Ok(())
    }

    /// Structural checks: finite lengths, positive box size, at least one slot
    pub fn validate(&self) -> SettingsResult<()> {
        for (key, value) in [("x", self.x), ("y", self.y), ("z", self.z)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::invalid(key, "box dimensions must be > 0"));
            }
        }
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(SettingsError::invalid("thickness", "must be > 0"));
        }
        let non_negative = [
            ("burn", self.burn),
            ("z_lid", self.z_lid),
            ("z_dome_lid", self.z_dome_lid),
            ("back_left_radius", self.back_left_radius),
            ("back_right_radius", self.back_right_radius),
            ("front_left_radius", self.front_left_radius),
            ("front_right_radius", self.front_right_radius),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::invalid(key, "must be >= 0"));
            }
        }
        if !self.auto_size_joints {
            for (key, value) in [
                ("x_joint", self.x_joint),
                ("y_joint", self.y_joint),
                ("z_joint", self.z_joint),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(SettingsError::invalid(key, "joint size must be > 0"));
                }
            }
        }
        if self.n_slot_x == 0 {
            return Err(SettingsError::invalid("n_slot_x", "should be at least 1"));
        }
        if self.n_slot_y == 0 {
            return Err(SettingsError::invalid("n_slot_y", "should be at least 1"));
        }
        Ok(())
    }

    /// Generator parameters, every length converted to millimeters
    pub fn to_params(&self) -> SettingsResult<BoxParams> {
        self.validate()?;
        let mm = |value: f64| self.unit.to_mm(value);
        Ok(BoxParams {
            x: mm(self.x),
            y: mm(self.y),
            z: mm(self.z),
            z_lid: mm(self.z_lid),
            z_dome_lid: mm(self.z_dome_lid),
            thickness: mm(self.thickness),
            burn: mm(self.burn),
            lid: self.lid_type,
            n_slot_x: self.n_slot_x,
            n_slot_y: self.n_slot_y,
            straight_corners: self.straight_corners,
            radii: CornerRadii::new(
                mm(self.back_left_radius),
                mm(self.back_right_radius),
                mm(self.front_right_radius),
                mm(self.front_left_radius),
            ),
            auto_size_joints: self.auto_size_joints,
            x_joint: mm(self.x_joint),
            y_joint: mm(self.y_joint),
            z_joint: mm(self.z_joint),
            skip_flex_lines: self.skip_flex_lines,
        })
    }
}
