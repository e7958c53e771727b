//! Horizontal layout group that can lay its children out right-to-left.
//!
//! The host drives a pass by calling, in this order:
//! [`calculate_layout_input_horizontal`](BidirHorizontalLayoutGroup::calculate_layout_input_horizontal),
//! [`calculate_layout_input_vertical`](BidirHorizontalLayoutGroup::calculate_layout_input_vertical),
//! [`set_layout_horizontal`](BidirHorizontalLayoutGroup::set_layout_horizontal) and
//! [`set_layout_vertical`](BidirHorizontalLayoutGroup::set_layout_vertical).
//! The first two measure, the last two write child geometry.

use crate::config::{Alignment, LayoutConfig, PerAxis};
use crate::engine::AxisPass;
use crate::geometry::{Axis, Padding};
use crate::host::{ChildId, LayoutHost};
use crate::metrics::{AxisChild, AxisTotals, calc_along_axis};
use crate::placer::place_child;
use core::mem::replace;
use log::{debug, trace};

/// The group packs horizontally; the vertical axis is its cross axis.
const IS_VERTICAL: bool = false;

/// Store `value` in `field` if it differs. Returns whether anything changed.
fn set_property<T: PartialEq>(field: &mut T, value: T) -> bool {
    if *field == value {
        return false;
    }
    *field = value;
    true
}

/// A horizontal box layout whose packing order can be reversed.
#[derive(Debug, Clone, PartialEq)]
pub struct BidirHorizontalLayoutGroup {
    config: LayoutConfig,
    /// Children taking part in the current pass, collected by the horizontal measure call.
    children: Vec<ChildId>,
    /// Totals reported by the measure calls.
    totals: PerAxis<AxisTotals>,
    dirty: bool,
}

impl Default for BidirHorizontalLayoutGroup {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl BidirHorizontalLayoutGroup {
    /// Create a group. It starts dirty so the host schedules a first pass.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            children: Vec::new(),
            totals: PerAxis::default(),
            dirty: true,
        }
    }

    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Children collected by the last horizontal measure call.
    pub fn layout_children(&self) -> &[ChildId] {
        &self.children
    }

    /// Min, preferred and flexible size the group reports on `axis`.
    pub const fn layout_input(&self, axis: Axis) -> AxisTotals {
        self.totals.get(axis)
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the dirty flag and clears it.
    pub const fn take_dirty(&mut self) -> bool {
        replace(&mut self.dirty, false)
    }

    /// Collect layout children and measure the horizontal axis.
    pub fn calculate_layout_input_horizontal<H: LayoutHost + ?Sized>(&mut self, host: &mut H) {
        host.clear_driven();
        self.children = host
            .child_ids()
            .into_iter()
            .filter(|child| host.participates_in_layout(*child))
            .collect();
        trace!(
            target: "bidir_layout::group",
            "[COLLECT] {} layout children",
            self.children.len()
        );
        self.measure(host, Axis::Horizontal);
    }

    /// Measure the vertical axis over the children collected by the horizontal call.
    pub fn calculate_layout_input_vertical<H: LayoutHost + ?Sized>(&mut self, host: &H) {
        self.measure(host, Axis::Vertical);
    }

    /// Write horizontal geometry, honouring the reverse flag.
    pub fn set_layout_horizontal<H: LayoutHost + ?Sized>(&self, host: &mut H) {
        self.arrange(host, Axis::Horizontal, self.config.reverse);
    }

    /// Write vertical geometry. The reverse flag does not apply to this axis.
    pub fn set_layout_vertical<H: LayoutHost + ?Sized>(&self, host: &mut H) {
        self.arrange(host, Axis::Vertical, false);
    }

    /// Run a full pass in host order and clear the dirty flag.
    pub fn layout<H: LayoutHost + ?Sized>(&mut self, host: &mut H) {
        self.calculate_layout_input_horizontal(host);
        self.calculate_layout_input_vertical(host);
        self.set_layout_horizontal(host);
        self.set_layout_vertical(host);
        self.dirty = false;
    }

    fn axis_children<H: LayoutHost + ?Sized>(&self, host: &H, axis: Axis) -> Vec<AxisChild> {
        let flags = self.config.axis_flags(axis);
        self.children
            .iter()
            .map(|child| {
                let geometry = host.geometry(*child);
                let stored_size = geometry.map_or(0.0, |found| found.size_delta[axis]);
                let scale = geometry.map_or(1.0, |found| found.local_scale[axis]);
                AxisChild::new(host.element_sizes(*child, axis), stored_size, scale, flags)
            })
            .collect()
    }

    fn measure<H: LayoutHost + ?Sized>(&mut self, host: &H, axis: Axis) {
        let children = self.axis_children(host, axis);
        let totals = calc_along_axis(
            &children,
            self.config.use_child_scale.get(axis),
            self.config.padding.along(axis),
            self.config.spacing,
            IS_VERTICAL ^ matches!(axis, Axis::Vertical),
        );
        self.totals.set(axis, totals);
    }

    fn arrange<H: LayoutHost + ?Sized>(&self, host: &mut H, axis: Axis, reverse: bool) {
        let children = self.axis_children(host, axis);
        let pass = AxisPass {
            config: &self.config,
            axis,
            container_size: host.container_size()[axis],
            totals: self.totals.get(axis),
            is_vertical: IS_VERTICAL,
            reverse,
        };
        let slots = pass.layout(&children);
        for (child, slot) in self.children.iter().copied().zip(slots) {
            let geometry = host.geometry(child);
            let Some(update) = place_child(geometry.as_ref(), axis, reverse, slot) else {
                trace!(
                    target: "bidir_layout::group",
                    "[ARRANGE] skipping {child:?}: no geometry"
                );
                continue;
            };
            host.track_driven(child, update.driven);
            host.commit(child, &update);
        }
    }

    fn changed(&mut self, what: &str) {
        debug!(target: "bidir_layout::group", "[CONFIG] {what} changed; marking dirty");
        self.dirty = true;
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        if set_property(&mut self.config.reverse, reverse) {
            self.changed("reverse");
        }
    }

    pub fn set_padding(&mut self, padding: Padding) {
        if set_property(&mut self.config.padding, padding) {
            self.changed("padding");
        }
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        if set_property(&mut self.config.spacing, spacing) {
            self.changed("spacing");
        }
    }

    pub fn set_child_alignment(&mut self, alignment: Alignment) {
        if set_property(&mut self.config.child_alignment, alignment) {
            self.changed("child alignment");
        }
    }

    pub fn set_control_child_size(&mut self, axis: Axis, control: bool) {
        let mut flags = self.config.control_child_size;
        flags.set(axis, control);
        if set_property(&mut self.config.control_child_size, flags) {
            self.changed("control child size");
        }
    }

    pub fn set_use_child_scale(&mut self, axis: Axis, use_scale: bool) {
        let mut flags = self.config.use_child_scale;
        flags.set(axis, use_scale);
        if set_property(&mut self.config.use_child_scale, flags) {
            self.changed("use child scale");
        }
    }

    pub fn set_child_force_expand(&mut self, axis: Axis, force_expand: bool) {
        let mut flags = self.config.child_force_expand;
        flags.set(axis, force_expand);
        if set_property(&mut self.config.child_force_expand, flags) {
            self.changed("child force expand");
        }
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: LayoutConfig) {
        if set_property(&mut self.config, config) {
            self.changed("configuration");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostChild, StaticHost};
    use crate::metrics::ElementSizes;

    fn three_children(width: f32) -> StaticHost {
        (1..=3).fold(StaticHost::new(width, 40.0), |host, id| {
            host.with_child(
                HostChild::new(id)
                    .with_width(ElementSizes::new(0.0, 50.0, 0.0))
                    .with_height(ElementSizes::new(0.0, 20.0, 0.0)),
            )
        })
    }

    #[test]
    /// # Panics
    /// Panics if setters mark the group dirty when nothing changed, or stay clean after a change.
    fn setters_mark_dirty_only_on_change() {
        let mut group = BidirHorizontalLayoutGroup::default();
        assert!(group.take_dirty());
        group.set_reverse(false);
        group.set_spacing(0.0);
        group.set_control_child_size(Axis::Horizontal, true);
        assert!(!group.is_dirty());
        group.set_reverse(true);
        assert!(group.take_dirty());
        group.set_child_force_expand(Axis::Vertical, false);
        assert!(group.take_dirty());
        assert!(!group.config().child_force_expand.height);
        group.set_config(*group.config());
        assert!(!group.is_dirty());
    }

    #[test]
    /// # Panics
    /// Panics if measurement does not report packing-axis sums and cross-axis maxima.
    fn measure_reports_layout_input() {
        let mut host = three_children(300.0);
        let mut group = BidirHorizontalLayoutGroup::new(LayoutConfig {
            spacing: 10.0,
            padding: Padding::uniform(5.0),
            ..LayoutConfig::default()
        });
        group.calculate_layout_input_horizontal(&mut host);
        group.calculate_layout_input_vertical(&host);
        let horizontal = group.layout_input(Axis::Horizontal);
        assert!((horizontal.preferred - 180.0).abs() < 0.001);
        assert!((horizontal.flexible - 3.0).abs() < 0.001);
        let vertical = group.layout_input(Axis::Vertical);
        assert!((vertical.preferred - 30.0).abs() < 0.001);
        assert!((vertical.flexible - 1.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if only active, non-ignored children are collected.
    fn collects_participating_children_in_order() {
        let mut host = three_children(300.0);
        if let Some(second) = host.child_mut(ChildId(2)) {
            second.active = false;
        }
        let mut group = BidirHorizontalLayoutGroup::default();
        group.calculate_layout_input_horizontal(&mut host);
        assert_eq!(group.layout_children(), &[ChildId(1), ChildId(3)]);
    }

    #[test]
    /// # Panics
    /// Panics if the full pass leaves the group dirty or does not commit both axes per child.
    fn layout_commits_both_axes() {
        let mut host = three_children(300.0);
        let mut group = BidirHorizontalLayoutGroup::default();
        group.layout(&mut host);
        assert!(!group.is_dirty());
        assert_eq!(host.commit_count(), 6);
    }
}
