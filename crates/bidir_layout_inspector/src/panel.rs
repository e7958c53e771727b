//! Row geometry of the inspector panel and click routing for its toggles.

use crate::property::{PropertyValue, SerializedGroups, SerializedProperty};
use anyhow::Result;
use bidir_layout::{Alignment, AnchorPreset, Rect, Vec2};
use log::{debug, trace};

/// Measurements of the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InspectorStyle {
    /// Width taken by a row's prefix label.
    pub label_width: f32,
    pub line_height: f32,
    /// Vertical gap between rows.
    pub row_spacing: f32,
    /// Label width inside a width/height toggle.
    pub toggle_label_width: f32,
}

impl Default for InspectorStyle {
    fn default() -> Self {
        Self {
            label_width: 150.0,
            line_height: 18.0,
            row_spacing: 2.0,
            toggle_label_width: 50.0,
        }
    }
}

/// The part of `rect` left after a prefix label of `label_width`.
pub fn prefix_label(rect: Rect, label_width: f32) -> Rect {
    let consumed = label_width.min(rect.width).max(0.0);
    Rect::new(rect.x + consumed, rect.y, rect.width - consumed, rect.height)
}

/// Width and height toggle rectangles inside the field area of a row.
///
/// Each toggle takes a third of the area less the gaps, but never less than 50 wide; the
/// second follows the first after a 2 wide gap.
pub fn toggle_pair_rects(field: Rect) -> (Rect, Rect) {
    let width = ((field.width - 4.0) / 3.0).max(50.0);
    let first = Rect::new(field.x, field.y, width, field.height);
    let second = Rect::new(field.x + width + 2.0, field.y, width, field.height);
    (first, second)
}

fn alignment_row(label: &'static str, rect: Rect, value: Alignment, mixed: bool) -> InspectorRow {
    let preset = value.preset();
    let text = match preset {
        _ if mixed => "Mixed",
        Some(found) => found.label(),
        None => "Custom",
    };
    InspectorRow::Alignment {
        label,
        rect,
        value,
        preset,
        text,
        mixed,
    }
}

/// One left-labelled toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleControl {
    pub property: SerializedProperty,
    pub label: &'static str,
    pub rect: Rect,
    /// Where the label text sits, right of the check box.
    pub label_rect: Rect,
    pub value: bool,
    /// The selection disagrees; the toggle shows a mixed state.
    pub mixed: bool,
}

/// A laid-out panel row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InspectorRow {
    /// A plain property field.
    Field {
        property: SerializedProperty,
        label: &'static str,
        rect: Rect,
        value: PropertyValue,
        mixed: bool,
    },
    /// The child alignment, shown as its named preset.
    Alignment {
        label: &'static str,
        rect: Rect,
        value: Alignment,
        /// `None` when the alignment is off the preset grid.
        preset: Option<AnchorPreset>,
        /// Text shown in the popup.
        text: &'static str,
        mixed: bool,
    },
    /// A prefix label followed by a width and a height toggle.
    Toggles {
        label: &'static str,
        rect: Rect,
        width: ToggleControl,
        height: ToggleControl,
    },
}

impl InspectorRow {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Field { label, .. } | Self::Alignment { label, .. } | Self::Toggles { label, .. } => {
                *label
            }
        }
    }

    pub const fn rect(&self) -> Rect {
        match self {
            Self::Field { rect, .. } | Self::Alignment { rect, .. } | Self::Toggles { rect, .. } => {
                *rect
            }
        }
    }
}

const FIELDS: [SerializedProperty; 4] = [
    SerializedProperty::IsReverse,
    SerializedProperty::Padding,
    SerializedProperty::Spacing,
    SerializedProperty::ChildAlignment,
];

const TOGGLE_ROWS: [(&str, SerializedProperty, SerializedProperty); 3] = [
    (
        "Control Child Size",
        SerializedProperty::ChildControlWidth,
        SerializedProperty::ChildControlHeight,
    ),
    (
        "Use Child Scale",
        SerializedProperty::ChildScaleWidth,
        SerializedProperty::ChildScaleHeight,
    ),
    (
        "Child Force Expand",
        SerializedProperty::ChildForceExpandWidth,
        SerializedProperty::ChildForceExpandHeight,
    ),
];

/// The inspector panel for a selection of groups, laid out top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InspectorPanel {
    pub style: InspectorStyle,
    /// Width available to each row.
    pub width: f32,
}

impl InspectorPanel {
    pub fn new(width: f32) -> Self {
        Self {
            style: InspectorStyle::default(),
            width,
        }
    }

    fn control_rect(&self, row: usize) -> Rect {
        let pitch = self.style.line_height + self.style.row_spacing;
        Rect::new(0.0, pitch * row as f32, self.width, self.style.line_height)
    }

    fn toggle(
        &self,
        groups: &SerializedGroups<'_>,
        property: SerializedProperty,
        label: &'static str,
        rect: Rect,
    ) -> ToggleControl {
        let check = self.style.line_height.min(rect.width);
        let label_rect = Rect::new(
            rect.x + check,
            rect.y,
            self.style.toggle_label_width.min(rect.width - check),
            rect.height,
        );
        ToggleControl {
            property,
            label,
            rect,
            label_rect,
            value: groups.bool_value(property).unwrap_or(false),
            mixed: groups.has_multiple_different_values(property),
        }
    }

    /// Lay out the panel: the four property fields, then the three toggle rows.
    ///
    /// An empty selection has no rows.
    pub fn rows(&self, groups: &SerializedGroups<'_>) -> Vec<InspectorRow> {
        if groups.is_empty() {
            trace!(target: "bidir_layout_inspector::panel", "[PANEL] nothing selected");
            return Vec::new();
        }
        let mut rows = Vec::with_capacity(FIELDS.len() + TOGGLE_ROWS.len());
        for property in FIELDS {
            let Some(value) = groups.value(property) else {
                continue;
            };
            let label = property.display_name();
            let rect = self.control_rect(rows.len());
            let mixed = groups.has_multiple_different_values(property);
            rows.push(match value {
                PropertyValue::Alignment(alignment) => {
                    alignment_row(label, rect, alignment, mixed)
                }
                PropertyValue::Bool(_) | PropertyValue::Float(_) | PropertyValue::Padding(_) => {
                    InspectorRow::Field {
                        property,
                        label,
                        rect,
                        value,
                        mixed,
                    }
                }
            });
        }
        for (label, width_property, height_property) in TOGGLE_ROWS {
            let rect = self.control_rect(rows.len());
            let (width_rect, height_rect) =
                toggle_pair_rects(prefix_label(rect, self.style.label_width));
            rows.push(InspectorRow::Toggles {
                label,
                rect,
                width: self.toggle(groups, width_property, "Width", width_rect),
                height: self.toggle(groups, height_property, "Height", height_rect),
            });
        }
        rows
    }

    /// Route a click at `point` to the toggle under it.
    ///
    /// Returns the toggled property, or `None` when the click missed every toggle.
    ///
    /// # Errors
    /// Returns an error if writing the toggled value fails.
    pub fn click(
        &self,
        groups: &mut SerializedGroups<'_>,
        point: Vec2,
    ) -> Result<Option<SerializedProperty>> {
        let hit = self.rows(groups).into_iter().find_map(|row| match row {
            InspectorRow::Toggles { width, height, .. } => [width, height]
                .into_iter()
                .find(|toggle| toggle.rect.contains(point))
                .map(|toggle| toggle.property),
            InspectorRow::Field { .. } | InspectorRow::Alignment { .. } => None,
        });
        let Some(property) = hit else {
            return Ok(None);
        };
        let value = groups.toggle_left(property)?;
        debug!(
            target: "bidir_layout_inspector::panel",
            "[PANEL] toggled {} to {value}",
            property.display_name()
        );
        Ok(Some(property))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidir_layout::{BidirHorizontalLayoutGroup, LayoutConfig};

    #[test]
    /// # Panics
    /// Panics if toggle widths ignore the 50 wide floor or the 2 wide gap.
    fn toggle_pair_geometry() {
        let (first, second) = toggle_pair_rects(Rect::new(150.0, 0.0, 304.0, 18.0));
        assert!((first.width - 100.0).abs() < 0.001);
        assert!((second.x - 252.0).abs() < 0.001);
        let (narrow, narrow_second) = toggle_pair_rects(Rect::new(0.0, 0.0, 60.0, 18.0));
        assert!((narrow.width - 50.0).abs() < 0.001);
        assert!((narrow_second.x - 52.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if the prefix label does not consume its width, or overflows a narrow row.
    fn prefix_label_consumes_width() {
        let field = prefix_label(Rect::new(10.0, 4.0, 400.0, 18.0), 150.0);
        assert!((field.x - 160.0).abs() < 0.001);
        assert!((field.width - 250.0).abs() < 0.001);
        let squeezed = prefix_label(Rect::new(0.0, 0.0, 100.0, 18.0), 150.0);
        assert!(squeezed.width.abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if rows are not four fields followed by three toggle rows stacked by pitch.
    fn rows_follow_panel_order() {
        let mut groups = [BidirHorizontalLayoutGroup::default()];
        let serialized = SerializedGroups::new(&mut groups);
        let rows = InspectorPanel::new(454.0).rows(&serialized);
        let labels: Vec<&str> = rows.iter().map(InspectorRow::label).collect();
        assert_eq!(
            labels,
            [
                "Is Reverse",
                "Padding",
                "Spacing",
                "Child Alignment",
                "Control Child Size",
                "Use Child Scale",
                "Child Force Expand",
            ]
        );
        assert!((rows.get(6).map_or(0.0, |row| row.rect().y) - 120.0).abs() < 0.001);
    }

    fn aligned(alignment: Alignment) -> BidirHorizontalLayoutGroup {
        BidirHorizontalLayoutGroup::new(LayoutConfig {
            child_alignment: alignment,
            ..LayoutConfig::default()
        })
    }

    fn alignment_text(
        groups: &mut [BidirHorizontalLayoutGroup],
    ) -> Option<(Option<AnchorPreset>, &'static str)> {
        let serialized = SerializedGroups::new(groups);
        InspectorPanel::new(454.0)
            .rows(&serialized)
            .into_iter()
            .find_map(|row| match row {
                InspectorRow::Alignment { preset, text, .. } => Some((preset, text)),
                InspectorRow::Field { .. } | InspectorRow::Toggles { .. } => None,
            })
    }

    #[test]
    /// # Panics
    /// Panics if the alignment row does not name its preset, or misreports off-grid and mixed values.
    fn alignment_row_shows_preset() {
        let mut centred = [aligned(Alignment::from(AnchorPreset::MiddleCenter))];
        assert_eq!(
            alignment_text(&mut centred),
            Some((Some(AnchorPreset::MiddleCenter), "Middle Center"))
        );

        let mut off_grid = [aligned(Alignment::new(0.25, 0.0))];
        assert_eq!(alignment_text(&mut off_grid), Some((None, "Custom")));

        let mut disagreeing = [
            BidirHorizontalLayoutGroup::default(),
            aligned(Alignment::from(AnchorPreset::LowerRight)),
        ];
        assert_eq!(
            alignment_text(&mut disagreeing),
            Some((Some(AnchorPreset::UpperLeft), "Mixed"))
        );
    }
}
