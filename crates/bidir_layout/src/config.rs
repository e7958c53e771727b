//! Group configuration: padding, spacing, child alignment, per-axis child flags and the
//! reverse flag of the primary axis.

use crate::geometry::{Axis, Padding};
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

/// Fractional alignment of children inside the container.
///
/// `x` runs from 0 (left) to 1 (right); `y` runs from 0 (top) to 1 (bottom).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Alignment {
    pub x: f32,
    pub y: f32,
}

impl Alignment {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Fraction of surplus space placed before the children on `axis`.
    #[inline]
    pub const fn on_axis(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// The preset this alignment corresponds to, if both components sit on a preset step.
    pub fn preset(self) -> Option<AnchorPreset> {
        AnchorPreset::ALL
            .into_iter()
            .find(|preset| Self::from(*preset) == self)
    }
}

/// The nine named alignments offered by the inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnchorPreset {
    #[default]
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

impl AnchorPreset {
    pub const ALL: [Self; 9] = [
        Self::UpperLeft,
        Self::UpperCenter,
        Self::UpperRight,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::LowerLeft,
        Self::LowerCenter,
        Self::LowerRight,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::UpperLeft => "Upper Left",
            Self::UpperCenter => "Upper Center",
            Self::UpperRight => "Upper Right",
            Self::MiddleLeft => "Middle Left",
            Self::MiddleCenter => "Middle Center",
            Self::MiddleRight => "Middle Right",
            Self::LowerLeft => "Lower Left",
            Self::LowerCenter => "Lower Center",
            Self::LowerRight => "Lower Right",
        }
    }

    /// Column (0..3) and row (0..3) of the preset in the 3x3 grid.
    const fn cell(self) -> (u8, u8) {
        let index = self as u8;
        (index % 3, index / 3)
    }
}

impl From<AnchorPreset> for Alignment {
    fn from(preset: AnchorPreset) -> Self {
        let (column, row) = preset.cell();
        Self::new(f32::from(column) * 0.5, f32::from(row) * 0.5)
    }
}

/// A value per axis, named the way the inspector labels its toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerAxis<T> {
    pub width: T,
    pub height: T,
}

impl<T: Copy> PerAxis<T> {
    #[inline]
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::new(value, value)
    }

    #[inline]
    pub const fn get(&self, axis: Axis) -> T {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    #[inline]
    pub fn set(&mut self, axis: Axis, value: T) {
        match axis {
            Axis::Horizontal => self.width = value,
            Axis::Vertical => self.height = value,
        }
    }
}

/// Child flags resolved for a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisFlags {
    /// The group writes the child's size on this axis.
    pub control_size: bool,
    /// The child's local scale multiplies its footprint on this axis.
    pub use_scale: bool,
    /// Every child gets a flexible weight of at least 1.
    pub force_expand: bool,
}

/// Complete configuration of a bidirectional horizontal layout group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub padding: Padding,
    /// Gap between consecutive children along the primary axis.
    pub spacing: f32,
    pub child_alignment: Alignment,
    pub control_child_size: PerAxis<bool>,
    pub use_child_scale: PerAxis<bool>,
    pub child_force_expand: PerAxis<bool>,
    /// Lay children out right-to-left. Only the horizontal pass honours it.
    pub reverse: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            spacing: 0.0,
            child_alignment: Alignment::from(AnchorPreset::UpperLeft),
            control_child_size: PerAxis::splat(true),
            use_child_scale: PerAxis::splat(false),
            child_force_expand: PerAxis::splat(true),
            reverse: false,
        }
    }
}

impl LayoutConfig {
    /// Flags that apply to `axis`.
    #[inline]
    pub const fn axis_flags(&self, axis: Axis) -> AxisFlags {
        AxisFlags {
            control_size: self.control_child_size.get(axis),
            use_scale: self.use_child_scale.get(axis),
            force_expand: self.child_force_expand.get(axis),
        }
    }

    /// Parse a configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns an error if `source` is not valid JSON for a configuration.
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("failed to parse layout configuration")
    }

    /// Serialize the configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize layout configuration")
    }
}
