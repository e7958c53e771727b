//! Bidirectional horizontal layout group.
//!
//! Packs children side by side, left-to-right or right-to-left, and sizes and aligns them on
//! the vertical axis. The host toolkit owns the child boxes; this crate measures them through
//! [`LayoutHost`] and hands back per-axis [`ChildUpdate`]s.

pub mod config;
pub mod engine;
pub mod geometry;
pub mod group;
pub mod host;
pub mod metrics;
pub mod placer;

pub use config::{Alignment, AnchorPreset, AxisFlags, LayoutConfig, PerAxis};
pub use engine::{AxisPass, AxisSlot};
pub use geometry::{Axis, ChildGeometry, Padding, Rect, Vec2};
pub use group::BidirHorizontalLayoutGroup;
pub use host::{ChildId, HostChild, LayoutHost, StaticHost};
pub use metrics::{AxisChild, AxisMetrics, AxisTotals, ElementSizes, calc_along_axis, child_metrics};
pub use placer::{ChildUpdate, DrivenProperties, leading_anchor, place_child};
