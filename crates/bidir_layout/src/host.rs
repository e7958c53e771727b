//! The boundary between the layout group and the toolkit that owns the child boxes.

use crate::geometry::{Axis, ChildGeometry, Rect, Vec2};
use crate::metrics::ElementSizes;
use crate::placer::{ChildUpdate, DrivenProperties};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque handle for a child owned by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct ChildId(pub u64);

/// Queries and writes the group needs from its host toolkit.
///
/// The group never keeps references into host storage: it reads geometry by value and hands
/// back [`ChildUpdate`]s through [`LayoutHost::commit`].
pub trait LayoutHost {
    /// Size of the group's own rectangle.
    fn container_size(&self) -> Vec2;

    /// Direct children in host order.
    fn child_ids(&self) -> Vec<ChildId>;

    /// Whether `child` takes part in layout (active and not opted out).
    fn participates_in_layout(&self, child: ChildId) -> bool;

    /// Current geometry of `child`, or `None` if the host no longer has it.
    fn geometry(&self, child: ChildId) -> Option<ChildGeometry>;

    /// Sizes reported by the child's layout element on `axis`.
    fn element_sizes(&self, child: ChildId, axis: Axis) -> ElementSizes;

    /// Apply a geometry update to `child`.
    fn commit(&mut self, child: ChildId, update: &ChildUpdate);

    /// Record channels the group drives on `child`. Hosts without such bookkeeping ignore it.
    fn track_driven(&mut self, _child: ChildId, _properties: DrivenProperties) {}

    /// Forget every channel recorded since the last clear.
    fn clear_driven(&mut self) {}
}

/// A child as stored by [`StaticHost`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostChild {
    pub id: ChildId,
    pub active: bool,
    pub ignore_layout: bool,
    /// The child's box has been destroyed while its handle is still listed.
    pub detached: bool,
    pub geometry: ChildGeometry,
    pub width: ElementSizes,
    pub height: ElementSizes,
}

impl Default for HostChild {
    fn default() -> Self {
        Self {
            id: ChildId::default(),
            active: true,
            ignore_layout: false,
            detached: false,
            geometry: ChildGeometry::default(),
            width: ElementSizes::default(),
            height: ElementSizes::default(),
        }
    }
}

impl HostChild {
    pub fn new(id: u64) -> Self {
        Self {
            id: ChildId(id),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_width(mut self, sizes: ElementSizes) -> Self {
        self.width = sizes;
        self
    }

    #[must_use]
    pub const fn with_height(mut self, sizes: ElementSizes) -> Self {
        self.height = sizes;
        self
    }

    #[must_use]
    pub const fn with_geometry(mut self, geometry: ChildGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub const fn sizes(&self, axis: Axis) -> ElementSizes {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// In-memory host: a container with a flat list of children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticHost {
    pub container: Vec2,
    pub children: Vec<HostChild>,
    #[serde(skip)]
    driven: BTreeMap<ChildId, DrivenProperties>,
    #[serde(skip)]
    commits: usize,
}

impl StaticHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            container: Vec2::new(width, height),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: HostChild) -> Self {
        self.children.push(child);
        self
    }

    pub fn child(&self, id: ChildId) -> Option<&HostChild> {
        self.children.iter().find(|child| child.id == id)
    }

    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut HostChild> {
        self.children.iter_mut().find(|child| child.id == id)
    }

    /// Channels currently driven on `id`.
    pub fn driven(&self, id: ChildId) -> DrivenProperties {
        self.driven.get(&id).copied().unwrap_or_default()
    }

    /// Number of updates applied since construction.
    pub const fn commit_count(&self) -> usize {
        self.commits
    }

    /// Visual rectangle of `id` in container space, if it is still attached.
    pub fn visual_rect(&self, id: ChildId) -> Option<Rect> {
        self.child(id)
            .filter(|child| !child.detached)
            .map(|child| child.geometry.visual_rect(self.container))
    }
}

impl LayoutHost for StaticHost {
    fn container_size(&self) -> Vec2 {
        self.container
    }

    fn child_ids(&self) -> Vec<ChildId> {
        self.children.iter().map(|child| child.id).collect()
    }

    fn participates_in_layout(&self, child: ChildId) -> bool {
        self.child(child)
            .is_some_and(|found| found.active && !found.ignore_layout)
    }

    fn geometry(&self, child: ChildId) -> Option<ChildGeometry> {
        self.child(child)
            .filter(|found| !found.detached)
            .map(|found| found.geometry)
    }

    fn element_sizes(&self, child: ChildId, axis: Axis) -> ElementSizes {
        self.child(child)
            .map(|found| found.sizes(axis))
            .unwrap_or_default()
    }

    fn commit(&mut self, child: ChildId, update: &ChildUpdate) {
        if let Some(found) = self.child_mut(child) {
            update.apply_to(&mut found.geometry);
            self.commits += 1;
        }
    }

    fn track_driven(&mut self, child: ChildId, properties: DrivenProperties) {
        let entry = self.driven.entry(child).or_default();
        *entry = entry.union(properties);
    }

    fn clear_driven(&mut self) {
        self.driven.clear();
    }
}
