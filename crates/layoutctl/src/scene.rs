//! Scene documents: a container, a group configuration and the children to lay out.

use anyhow::{Context as _, Result, bail};
use bidir_layout::{
    Axis, AxisTotals, BidirHorizontalLayoutGroup, ChildGeometry, ChildId, HostChild, LayoutConfig,
    PerAxis, Rect, StaticHost, Vec2,
};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::from_slice;
use std::collections::BTreeSet;

/// A scene as read from disk. Omitted fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// Size of the group's rectangle.
    pub container: Vec2,
    pub config: LayoutConfig,
    pub children: Vec<HostChild>,
}

/// Placed geometry of one child.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedChild {
    pub id: ChildId,
    /// `None` for detached children.
    pub geometry: Option<ChildGeometry>,
    /// Visual rectangle in container space, y down.
    pub rect: Option<Rect>,
    pub driven: Vec<&'static str>,
}

/// Result of laying a scene out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneReport {
    pub container: Vec2,
    /// Min/preferred/flexible size the group reports per axis.
    pub layout_input: PerAxis<AxisTotals>,
    pub children: Vec<PlacedChild>,
}

impl Scene {
    /// Parse and validate a scene document.
    ///
    /// # Errors
    /// Returns an error if the document is not a valid scene, the container size is negative
    /// or not finite, or two children share an id.
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let scene: Self = from_slice(data).context("invalid scene document")?;
        scene.validate()?;
        Ok(scene)
    }

    fn validate(&self) -> Result<()> {
        let Vec2 { x: width, y: height } = self.container;
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            bail!("container size must be finite and non-negative, got {width} x {height}");
        }
        let mut seen = BTreeSet::new();
        for child in &self.children {
            if !seen.insert(child.id) {
                bail!("duplicate child id {}", child.id.0);
            }
        }
        Ok(())
    }

    /// Run one full layout pass and collect the result.
    pub fn run(&self) -> SceneReport {
        let mut host = StaticHost::new(self.container.x, self.container.y);
        host.children.clone_from(&self.children);
        let mut group = BidirHorizontalLayoutGroup::new(self.config);
        group.layout(&mut host);
        info!(
            target: "layoutctl::scene",
            "[SCENE] laid out {} of {} children in {} x {}",
            group.layout_children().len(),
            self.children.len(),
            self.container.x,
            self.container.y
        );

        let children = host
            .children
            .iter()
            .map(|child| PlacedChild {
                id: child.id,
                geometry: (!child.detached).then_some(child.geometry),
                rect: host.visual_rect(child.id),
                driven: host.driven(child.id).names(),
            })
            .collect();
        SceneReport {
            container: self.container,
            layout_input: PerAxis::new(
                group.layout_input(Axis::Horizontal),
                group.layout_input(Axis::Vertical),
            ),
            children,
        }
    }
}
