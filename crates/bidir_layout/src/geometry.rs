//! Geometry primitives shared by the measure and arrange passes.
//!
//! Two coordinate spaces appear in this crate:
//! - Anchor space, used by [`ChildGeometry`]: x grows to the right, y grows upwards, and an
//!   anchor of `(0, 1)` is the top-left corner of the container.
//! - Container space, used by [`Rect`]: origin at the container's top-left corner, y grows
//!   downwards. Layout positions (`pos` in the axis engine) are distances from the leading edge.

use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

/// Layout axis. The group packs children along `Horizontal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal, // Width, X
    Vertical,   // Height, Y
}

/// Two-component vector indexed by [`Axis`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const HALF: Self = Self::new(0.5, 0.5);
    /// Anchor at the container's top-left corner.
    pub const TOP_LEFT: Self = Self::new(0.0, 1.0);
    /// Anchor at the container's top-right corner.
    pub const TOP_RIGHT: Self = Self::new(1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Index<Axis> for Vec2 {
    type Output = f32;

    #[inline]
    fn index(&self, axis: Axis) -> &f32 {
        match axis {
            Axis::Horizontal => &self.x,
            Axis::Vertical => &self.y,
        }
    }
}

impl IndexMut<Axis> for Vec2 {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::Horizontal => &mut self.x,
            Axis::Vertical => &mut self.y,
        }
    }
}

/// Inner spacing between the container's edges and its children.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    #[inline]
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[inline]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Combined padding along `axis` (left + right, or top + bottom).
    #[inline]
    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left + self.right,
            Axis::Vertical => self.top + self.bottom,
        }
    }

    /// Padding on the edge children start from. Reversing swaps left/right and top/bottom.
    #[inline]
    pub const fn leading(self, axis: Axis, reverse: bool) -> f32 {
        match (axis, reverse) {
            (Axis::Horizontal, false) => self.left,
            (Axis::Horizontal, true) => self.right,
            (Axis::Vertical, false) => self.top,
            (Axis::Vertical, true) => self.bottom,
        }
    }
}

/// Axis-aligned rectangle in container space (y down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// Inclusive on the leading edges, exclusive on the trailing ones.
    #[inline]
    pub fn contains(self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// A child's geometry record as the host stores it.
///
/// `size_delta` is the stored size (anchors are coincident, so it equals the box size).
/// `anchored_position` is the offset of the pivot point from the anchor reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildGeometry {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub anchored_position: Vec2,
    pub size_delta: Vec2,
    pub pivot: Vec2,
    pub local_scale: Vec2,
}

impl Default for ChildGeometry {
    fn default() -> Self {
        Self {
            anchor_min: Vec2::HALF,
            anchor_max: Vec2::HALF,
            anchored_position: Vec2::ZERO,
            size_delta: Vec2::ZERO,
            pivot: Vec2::HALF,
            local_scale: Vec2::ONE,
        }
    }
}

impl ChildGeometry {
    /// Geometry of the given stored size with default anchors, pivot and scale.
    #[inline]
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            size_delta: Vec2::new(width, height),
            ..Self::default()
        }
    }

    /// Visual extent (after scaling around the pivot) in container space.
    pub fn visual_rect(&self, container: Vec2) -> Rect {
        let (left, width) = self.visual_span(Axis::Horizontal, container.x);
        let (bottom_up, height) = self.visual_span(Axis::Vertical, container.y);
        Rect::new(left, container.y - (bottom_up + height), width, height)
    }

    /// Returns `(lower edge in anchor space, scaled extent)` along `axis`.
    fn visual_span(&self, axis: Axis, container: f32) -> (f32, f32) {
        let anchor_span = self.anchor_max[axis] - self.anchor_min[axis];
        let size = anchor_span.mul_add(container, self.size_delta[axis]);
        let reference = anchor_span.mul_add(self.pivot[axis], self.anchor_min[axis]) * container;
        let pivot_point = reference + self.anchored_position[axis];
        let scaled = size * self.local_scale[axis];
        (self.pivot[axis].mul_add(-scaled, pivot_point), scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if leading padding does not follow the reverse flag.
    fn leading_padding_swaps_edges_when_reversed() {
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert!((padding.leading(Axis::Horizontal, false) - 1.0).abs() < 0.001);
        assert!((padding.leading(Axis::Horizontal, true) - 2.0).abs() < 0.001);
        assert!((padding.leading(Axis::Vertical, false) - 3.0).abs() < 0.001);
        assert!((padding.leading(Axis::Vertical, true) - 4.0).abs() < 0.001);
        assert!((padding.along(Axis::Horizontal) - 3.0).abs() < 0.001);
        assert!((padding.along(Axis::Vertical) - 7.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if a top-left anchored box does not resolve to its container-space rectangle.
    fn visual_rect_from_top_left_anchor() {
        let geometry = ChildGeometry {
            anchor_min: Vec2::TOP_LEFT,
            anchor_max: Vec2::TOP_LEFT,
            anchored_position: Vec2::new(35.0, -20.0),
            size_delta: Vec2::new(50.0, 20.0),
            pivot: Vec2::HALF,
            local_scale: Vec2::ONE,
        };
        let rect = geometry.visual_rect(Vec2::new(300.0, 100.0));
        assert!((rect.x - 10.0).abs() < 0.001);
        assert!((rect.y - 10.0).abs() < 0.001);
        assert!((rect.width - 50.0).abs() < 0.001);
        assert!((rect.height - 20.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if axis indexing reads or writes the wrong component.
    fn vec2_axis_access() {
        let mut value = Vec2::new(1.0, 2.0);
        value[Axis::Vertical] = 5.0;
        assert!((value.y - 5.0).abs() < 0.001);
        assert!((value[Axis::Horizontal] - 1.0).abs() < 0.001);
    }
}
