//! Shape presets offered by the picker and their box dimensions.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

/// Extents of the rectangular solid along local X, Y and Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeDimensions {
    pub width: f32,
    pub height: f32,
    pub length: f32,
}

impl Default for ShapeDimensions {
    fn default() -> Self {
        ShapePreset::default().dimensions()
    }
}

impl ShapeDimensions {
    pub fn new(width: f32, height: f32, length: f32) -> Result<Self> {
        let valid = [width, height, length]
            .iter()
            .all(|extent| extent.is_finite() && *extent > 0.0);
        if !valid {
            return Err(ViewerError::InvalidDimensions {
                width,
                height,
                length,
            });
        }
        Ok(Self::new_unchecked(width, height, length))
    }

    /// Skips validation; used for the compile-time preset table.
    pub const fn new_unchecked(width: f32, height: f32, length: f32) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    pub fn extents(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.length)
    }

    pub fn half_extents(&self) -> Vec3 {
        self.extents() * 0.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShapePreset {
    #[default]
    Cube,
    Cuboid,
}

static PRESET_TABLE: [(ShapePreset, &str, ShapeDimensions); 2] = [
    (ShapePreset::Cube, "Cube", ShapeDimensions::new_unchecked(2.0, 2.0, 2.0)),
    (ShapePreset::Cuboid, "Cuboid", ShapeDimensions::new_unchecked(3.0, 2.0, 1.0)),
];

impl ShapePreset {
    pub const ALL: [ShapePreset; 2] = [ShapePreset::Cube, ShapePreset::Cuboid];

    fn entry(self) -> &'static (ShapePreset, &'static str, ShapeDimensions) {
        // The table lists every variant in declaration order.
        &PRESET_TABLE[self as usize]
    }

    pub fn dimensions(self) -> ShapeDimensions {
        self.entry().2
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }
}

impl fmt::Display for ShapePreset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapePreset {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        PRESET_TABLE
            .iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(preset, _, _)| *preset)
            .ok_or_else(|| ViewerError::UnknownPreset(s.to_string()))
    }
}
