//! Axis layout: distributes a container's space among its children along one axis.
//!
//! The group runs this once per axis. On the packing axis children are laid out one after
//! another; on the other axis every child is sized and aligned on its own.

use crate::config::LayoutConfig;
use crate::geometry::Axis;
use crate::metrics::{AxisChild, AxisTotals};
use log::debug;

/// Where one child lands on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSlot {
    /// Distance of the child's leading edge from the container's leading edge.
    pub position: f32,
    /// Size to write, or `None` when the group leaves the child's size alone.
    pub size: Option<f32>,
    /// Factor applied to the child's size when converting to an anchored position.
    pub scale_factor: f32,
}

/// Inputs of one arrange call along one axis.
#[derive(Debug, Clone, Copy)]
pub struct AxisPass<'cfg> {
    pub config: &'cfg LayoutConfig,
    pub axis: Axis,
    /// Container size along `axis`.
    pub container_size: f32,
    /// The group's totals on `axis` from the measure call.
    pub totals: AxisTotals,
    /// Whether the group packs vertically. The bidirectional group is always horizontal.
    pub is_vertical: bool,
    pub reverse: bool,
}

/// Clamp that lets `min` win when the bounds cross.
#[inline]
fn clamp_min_wins(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation with `factor` clamped to `[0, 1]`.
#[inline]
fn lerp(from: f32, to: f32, factor: f32) -> f32 {
    (to - from).mul_add(factor.clamp(0.0, 1.0), from)
}

impl AxisPass<'_> {
    /// True when `axis` is not the group's packing axis.
    #[inline]
    pub const fn along_other_axis(&self) -> bool {
        self.is_vertical ^ matches!(self.axis, Axis::Vertical)
    }

    #[inline]
    fn alignment(&self) -> f32 {
        self.config.child_alignment.on_axis(self.axis)
    }

    /// Position of content of the given size once surplus space is split by alignment.
    ///
    /// `required_space_without_padding` excludes padding; the result is measured from the
    /// leading edge, which the reverse flag moves to the right or bottom.
    pub fn start_offset(&self, required_space_without_padding: f32) -> f32 {
        let required_space = required_space_without_padding + self.config.padding.along(self.axis);
        let surplus_space = self.container_size - required_space;
        surplus_space.mul_add(
            self.alignment(),
            self.config.padding.leading(self.axis, self.reverse),
        )
    }

    /// Interpolation factor between every child's min and preferred size.
    ///
    /// Zero when total min equals total preferred, otherwise the container's position between
    /// the two clamped to `[0, 1]`.
    pub fn min_max_lerp(&self) -> f32 {
        let AxisTotals { min, preferred, .. } = self.totals;
        #[expect(clippy::float_cmp, reason = "only an exact match would divide by zero")]
        let degenerate = min == preferred;
        if degenerate {
            return 0.0;
        }
        ((self.container_size - min) / (preferred - min)).clamp(0.0, 1.0)
    }

    /// Compute a slot for every child, in input order.
    pub fn layout(&self, children: &[AxisChild]) -> Vec<AxisSlot> {
        if self.along_other_axis() {
            self.layout_independent(children)
        } else {
            self.layout_sequential(children)
        }
    }

    /// Cross-axis layout: each child fits the inner size on its own.
    fn layout_independent(&self, children: &[AxisChild]) -> Vec<AxisSlot> {
        let flags = self.config.axis_flags(self.axis);
        let inner_size = self.container_size - self.config.padding.along(self.axis);
        children
            .iter()
            .map(|child| {
                let metrics = child.metrics;
                let scale_factor = child.scale_factor(flags.use_scale);
                let max_size = if metrics.flexible > 0.0 {
                    self.container_size
                } else {
                    metrics.preferred
                };
                let required_space = clamp_min_wins(inner_size, metrics.min, max_size);
                let start_offset = self.start_offset(required_space * scale_factor);
                self.slot(child, start_offset, required_space, scale_factor)
            })
            .collect()
    }

    /// Packing-axis layout: children follow each other separated by spacing.
    fn layout_sequential(&self, children: &[AxisChild]) -> Vec<AxisSlot> {
        let flags = self.config.axis_flags(self.axis);
        let totals = self.totals;
        let mut pos = self.config.padding.leading(self.axis, self.reverse);
        let mut item_flexible_multiplier = 0.0;
        let surplus_space = self.container_size - totals.preferred;

        #[expect(clippy::float_cmp, reason = "only a group with no flexible weight aligns")]
        let rigid = totals.flexible == 0.0;
        if surplus_space > 0.0 {
            if rigid {
                pos = self.start_offset(totals.preferred - self.config.padding.along(self.axis));
            } else if totals.flexible > 0.0 {
                item_flexible_multiplier = surplus_space / totals.flexible;
            }
        }

        let min_max_lerp = self.min_max_lerp();
        debug!(
            target: "bidir_layout::engine",
            "[AXIS-PACK] axis={:?} reverse={} container={:.3} surplus={:.3} flex_mult={:.3} lerp={:.3} start={:.3}",
            self.axis,
            self.reverse,
            self.container_size,
            surplus_space,
            item_flexible_multiplier,
            min_max_lerp,
            pos
        );

        let mut slots = Vec::with_capacity(children.len());
        for child in children {
            let metrics = child.metrics;
            let scale_factor = child.scale_factor(flags.use_scale);
            let child_size = metrics.flexible.mul_add(
                item_flexible_multiplier,
                lerp(metrics.min, metrics.preferred, min_max_lerp),
            );
            slots.push(self.slot(child, pos, child_size, scale_factor));
            pos += child_size.mul_add(scale_factor, self.config.spacing);
        }
        slots
    }

    /// Size-controlled slot, or an alignment offset inside the cell when size is left alone.
    fn slot(&self, child: &AxisChild, pos: f32, size: f32, scale_factor: f32) -> AxisSlot {
        if self.config.control_child_size.get(self.axis) {
            AxisSlot {
                position: pos,
                size: Some(size),
                scale_factor,
            }
        } else {
            let offset_in_cell = (size - child.stored_size) * self.alignment();
            AxisSlot {
                position: pos + offset_in_cell,
                size: None,
                scale_factor,
            }
        }
    }
}
