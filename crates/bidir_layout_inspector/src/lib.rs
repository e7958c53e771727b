//! Headless model of the inspector panel for [`bidir_layout::BidirHorizontalLayoutGroup`].
//!
//! [`SerializedGroups`] edits one or many selected groups at once and knows when their values
//! disagree. [`InspectorPanel`] lays the panel out as rows of rectangles and routes clicks on
//! the width/height toggles back into the selection.

pub mod panel;
pub mod property;

pub use panel::{InspectorPanel, InspectorRow, InspectorStyle, ToggleControl, prefix_label, toggle_pair_rects};
pub use property::{PropertyValue, SerializedGroups, SerializedProperty};
