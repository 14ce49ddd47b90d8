//! Type definitions for the generic box generator

use kerfbox_core::ParameterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the box is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LidStyle {
    /// Open box
    Without,
    /// Top frame glued on the box plus a loose lid resting in it
    #[default]
    Simple,
    /// Lid sliding in grooves of the side walls
    Sliding,
    /// Lid turning on knuckles cut in the side walls
    WoodHinge,
    /// Lid held by steel hinges made of cut knuckles and a nail
    SteelHinge,
    /// Steel hinge lid with a half ellipse dome
    Coffin,
}

impl LidStyle {
    pub const ALL: [LidStyle; 6] = [
        LidStyle::Without,
        LidStyle::Simple,
        LidStyle::Sliding,
        LidStyle::WoodHinge,
        LidStyle::SteelHinge,
        LidStyle::Coffin,
    ];

    /// A lid turning on hinges at the back
    pub fn is_hinged(self) -> bool {
        matches!(
            self,
            LidStyle::WoodHinge | LidStyle::SteelHinge | LidStyle::Coffin
        )
    }

    /// Lids held by steel hinge knuckles
    pub fn uses_steel_hinges(self) -> bool {
        matches!(self, LidStyle::SteelHinge | LidStyle::Coffin)
    }

    pub fn name(self) -> &'static str {
        match self {
            LidStyle::Without => "Without",
            LidStyle::Simple => "Simple",
            LidStyle::Sliding => "Sliding",
            LidStyle::WoodHinge => "WoodHinge",
            LidStyle::SteelHinge => "SteelHinge",
            LidStyle::Coffin => "Coffin",
        }
    }
}

impl fmt::Display for LidStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LidStyle {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        LidStyle::ALL
            .into_iter()
            .find(|style| style.name().to_ascii_lowercase() == key)
            .ok_or_else(|| {
                ParameterError::invalid(
                    "lid_type",
                    format!(
                        "unknown lid style '{}', expected one of Without, Simple, Sliding, WoodHinge, SteelHinge, Coffin",
                        s
                    ),
                )
            })
    }
}

/// Radii of the four vertical edges of the box (mm), 0 for a square edge
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadii {
    pub back_left: f64,
    pub back_right: f64,
    pub front_right: f64,
    pub front_left: f64,
}

impl CornerRadii {
    pub fn new(back_left: f64, back_right: f64, front_right: f64, front_left: f64) -> Self {
        Self {
            back_left,
            back_right,
            front_right,
            front_left,
        }
    }

    pub fn uniform(radius: f64) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    pub fn max(&self) -> f64 {
        self.back_left
            .max(self.back_right)
            .max(self.front_right)
            .max(self.front_left)
    }

    pub fn has_rounded_back(&self) -> bool {
        self.back_left > 0.0 || self.back_right > 0.0
    }

    pub fn has_rounded_front(&self) -> bool {
        self.front_left > 0.0 || self.front_right > 0.0
    }
}

/// Everything needed to build a box. Lengths in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxParams {
    /// External length (left to right)
    pub x: f64,
    /// External depth (back to front)
    pub y: f64,
    /// External height, lid included
    pub z: f64,
    /// Height of the lid for hinged styles
    pub z_lid: f64,
    /// Height of the coffin dome
    pub z_dome_lid: f64,
    pub thickness: f64,
    pub burn: f64,
    pub lid: LidStyle,
    /// Compartments along x
    pub n_slot_x: usize,
    /// Compartments along y
    pub n_slot_y: usize,
    /// Ignore `radii`
    pub straight_corners: bool,
    pub radii: CornerRadii,
    pub auto_size_joints: bool,
    pub x_joint: f64,
    pub y_joint: f64,
    pub z_joint: f64,
    /// Only cut the coffin flex band where the dome actually bends
    pub skip_flex_lines: bool,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            x: 40.0,
            y: 60.0,
            z: 40.0,
            z_lid: 20.0,
            z_dome_lid: 20.0,
            thickness: 3.0,
            burn: 0.1,
            lid: LidStyle::Simple,
            n_slot_x: 1,
            n_slot_y: 2,
            straight_corners: true,
            radii: CornerRadii::uniform(10.0),
            auto_size_joints: true,
            x_joint: 10.0,
            y_joint: 10.0,
            z_joint: 10.0,
            skip_flex_lines: true,
        }
    }
}

impl BoxParams {
    /// Radii actually used, all zero with straight corners
    pub fn effective_radii(&self) -> CornerRadii {
        if self.straight_corners {
            CornerRadii::default()
        } else {
            self.radii
        }
    }
}

/// Finger joint sizes along each axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSizes {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A hole in the bottom plate receiving a divider wall tab
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotchPos {
    /// Start from the internal side of the box
    pub start: f64,
    pub size: f64,
    /// Slot (compartment) holding the notch
    pub slot: usize,
}
