//! Per-child axis metrics and the aggregate totals a group reports for an axis.

use crate::config::AxisFlags;
use log::trace;
use serde::{Deserialize, Serialize};

/// Sizes a child's layout element reports for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSizes {
    pub min: f32,
    pub preferred: f32,
    pub flexible: f32,
}

impl ElementSizes {
    #[inline]
    pub const fn new(min: f32, preferred: f32, flexible: f32) -> Self {
        Self {
            min,
            preferred,
            flexible,
        }
    }

    /// A rigid element: min and preferred both `size`, no flexible weight.
    #[inline]
    pub const fn fixed(size: f32) -> Self {
        Self::new(size, size, 0.0)
    }
}

/// Resolved `(min, preferred, flexible)` for one child on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisMetrics {
    pub min: f32,
    pub preferred: f32,
    pub flexible: f32,
}

/// Resolve the metrics the group uses for a child.
///
/// Without size control the child's stored size is both its min and preferred size and it
/// never flexes. Force-expand raises the flexible weight to at least 1 in either case.
pub fn child_metrics(reported: ElementSizes, stored_size: f32, flags: AxisFlags) -> AxisMetrics {
    let mut metrics = if flags.control_size {
        AxisMetrics {
            min: reported.min,
            preferred: reported.preferred.max(reported.min),
            flexible: reported.flexible,
        }
    } else {
        AxisMetrics {
            min: stored_size,
            preferred: stored_size,
            flexible: 0.0,
        }
    };
    if flags.force_expand {
        metrics.flexible = metrics.flexible.max(1.0);
    }
    metrics
}

/// One child's inputs to a single axis pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisChild {
    pub metrics: AxisMetrics,
    /// Stored size on the axis; alignment-only placement offsets against it.
    pub stored_size: f32,
    /// Local scale on the axis.
    pub scale: f32,
}

impl AxisChild {
    pub fn new(reported: ElementSizes, stored_size: f32, scale: f32, flags: AxisFlags) -> Self {
        Self {
            metrics: child_metrics(reported, stored_size, flags),
            stored_size,
            scale,
        }
    }

    /// The factor applied to the child's footprint: its scale when `use_scale`, else 1.
    #[inline]
    pub const fn scale_factor(&self, use_scale: bool) -> f32 {
        if use_scale { self.scale } else { 1.0 }
    }
}

/// Aggregate min/preferred/flexible sizes of a group on one axis, padding included.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisTotals {
    pub min: f32,
    pub preferred: f32,
    pub flexible: f32,
}

/// Compute the group's totals on one axis.
///
/// Along the packing axis children add up, with `spacing` between neighbours. Along the other
/// axis the largest child decides. Both include `combined_padding` once.
pub fn calc_along_axis(
    children: &[AxisChild],
    use_scale: bool,
    combined_padding: f32,
    spacing: f32,
    along_other_axis: bool,
) -> AxisTotals {
    let mut totals = AxisTotals {
        min: combined_padding,
        preferred: combined_padding,
        flexible: 0.0,
    };
    for child in children {
        let factor = child.scale_factor(use_scale);
        let min = child.metrics.min * factor;
        let preferred = child.metrics.preferred * factor;
        let flexible = child.metrics.flexible * factor;
        if along_other_axis {
            totals.min = totals.min.max(min + combined_padding);
            totals.preferred = totals.preferred.max(preferred + combined_padding);
            totals.flexible = totals.flexible.max(flexible);
        } else {
            totals.min += min + spacing;
            totals.preferred += preferred + spacing;
            totals.flexible += flexible;
        }
    }
    if !along_other_axis && !children.is_empty() {
        totals.min -= spacing;
        totals.preferred -= spacing;
    }
    totals.preferred = totals.preferred.max(totals.min);
    trace!(
        target: "bidir_layout::metrics",
        "[TOTALS] children={} other_axis={} min={:.3} preferred={:.3} flexible={:.3}",
        children.len(),
        along_other_axis,
        totals.min,
        totals.preferred,
        totals.flexible
    );
    totals
}
