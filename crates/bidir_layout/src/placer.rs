//! Converts axis slots into geometry writes for a child.
//!
//! The engine measures every position from the leading edge. Only the final anchored position
//! depends on direction: children anchored to the top-left corner grow forward from it, while
//! reversed children (anchored top-right) and the vertical axis (y up in anchor space) grow
//! backwards.

use crate::engine::AxisSlot;
use crate::geometry::{Axis, ChildGeometry, Vec2};
use core::ops::BitOr;
use serde::{Deserialize, Serialize};

/// Geometry channels a layout pass claims for the current frame.
///
/// Hosts can use this to stop other systems from editing values the group will overwrite.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DrivenProperties(u32);

impl DrivenProperties {
    pub const NONE: Self = Self(0);
    pub const ANCHOR_MIN_X: Self = Self(1 << 0);
    pub const ANCHOR_MIN_Y: Self = Self(1 << 1);
    pub const ANCHOR_MAX_X: Self = Self(1 << 2);
    pub const ANCHOR_MAX_Y: Self = Self(1 << 3);
    pub const ANCHORED_POSITION_X: Self = Self(1 << 4);
    pub const ANCHORED_POSITION_Y: Self = Self(1 << 5);
    pub const SIZE_DELTA_X: Self = Self(1 << 6);
    pub const SIZE_DELTA_Y: Self = Self(1 << 7);
    /// All four anchor components.
    pub const ANCHORS: Self = Self(
        Self::ANCHOR_MIN_X.0 | Self::ANCHOR_MIN_Y.0 | Self::ANCHOR_MAX_X.0 | Self::ANCHOR_MAX_Y.0,
    );

    #[inline]
    pub const fn anchored_position(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::ANCHORED_POSITION_X,
            Axis::Vertical => Self::ANCHORED_POSITION_Y,
        }
    }

    #[inline]
    pub const fn size_delta(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::SIZE_DELTA_X,
            Axis::Vertical => Self::SIZE_DELTA_Y,
        }
    }

    /// Combine two sets of channels.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check if all channels in `other` are present.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Names of the channels present, in bit order.
    pub fn names(self) -> Vec<&'static str> {
        CHANNEL_NAMES
            .iter()
            .filter(|(channel, _)| self.contains(*channel))
            .map(|(_, name)| *name)
            .collect()
    }
}

const CHANNEL_NAMES: [(DrivenProperties, &str); 8] = [
    (DrivenProperties::ANCHOR_MIN_X, "anchor_min.x"),
    (DrivenProperties::ANCHOR_MIN_Y, "anchor_min.y"),
    (DrivenProperties::ANCHOR_MAX_X, "anchor_max.x"),
    (DrivenProperties::ANCHOR_MAX_Y, "anchor_max.y"),
    (DrivenProperties::ANCHORED_POSITION_X, "anchored_position.x"),
    (DrivenProperties::ANCHORED_POSITION_Y, "anchored_position.y"),
    (DrivenProperties::SIZE_DELTA_X, "size_delta.x"),
    (DrivenProperties::SIZE_DELTA_Y, "size_delta.y"),
];

impl BitOr for DrivenProperties {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Geometry writes for one child produced by one axis pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildUpdate {
    pub axis: Axis,
    /// New value for both anchor points; only the horizontal pass sets anchors.
    pub anchor: Option<Vec2>,
    /// Anchored position along `axis`.
    pub anchored_position: f32,
    /// Stored size along `axis`, when the group controls it.
    pub size_delta: Option<f32>,
    pub driven: DrivenProperties,
}

impl ChildUpdate {
    /// Write the update into a geometry record.
    pub fn apply_to(&self, geometry: &mut ChildGeometry) {
        if let Some(anchor) = self.anchor {
            geometry.anchor_min = anchor;
            geometry.anchor_max = anchor;
        }
        if let Some(size) = self.size_delta {
            geometry.size_delta[self.axis] = size;
        }
        geometry.anchored_position[self.axis] = self.anchored_position;
    }
}

/// Anchor the horizontal pass assigns: top-left normally, top-right when reversed.
#[inline]
pub const fn leading_anchor(reverse: bool) -> Vec2 {
    if reverse { Vec2::TOP_RIGHT } else { Vec2::TOP_LEFT }
}

/// Place a child on `axis` from its slot. A missing geometry record yields no update.
///
/// When the slot carries a size it is written and used for the anchored position; otherwise
/// the child's stored size is kept and used instead.
pub fn place_child(
    geometry: Option<&ChildGeometry>,
    axis: Axis,
    reverse: bool,
    slot: AxisSlot,
) -> Option<ChildUpdate> {
    let geometry = geometry?;

    let mut driven = DrivenProperties::ANCHORS | DrivenProperties::anchored_position(axis);
    if slot.size.is_some() {
        driven = driven | DrivenProperties::size_delta(axis);
    }

    let anchor = matches!(axis, Axis::Horizontal).then_some(leading_anchor(reverse));
    let size = slot.size.unwrap_or(geometry.size_delta[axis]);
    let pivot = geometry.pivot[axis];
    let grows_forward = matches!(axis, Axis::Horizontal) ^ reverse;
    let anchored_position = if grows_forward {
        (size * pivot).mul_add(slot.scale_factor, slot.position)
    } else {
        (size * (1.0 - pivot)).mul_add(-slot.scale_factor, -slot.position)
    };

    Some(ChildUpdate {
        axis,
        anchor,
        anchored_position,
        size_delta: slot.size,
        driven,
    })
}
