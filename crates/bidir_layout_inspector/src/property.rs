//! Property handles over a multi-selection of layout groups.

use anyhow::{Result, bail};
use bidir_layout::{Alignment, Axis, BidirHorizontalLayoutGroup, LayoutConfig, Padding};
use log::debug;

/// Every field of a group the inspector edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerializedProperty {
    IsReverse,
    Padding,
    Spacing,
    ChildAlignment,
    ChildControlWidth,
    ChildControlHeight,
    ChildScaleWidth,
    ChildScaleHeight,
    ChildForceExpandWidth,
    ChildForceExpandHeight,
}

impl SerializedProperty {
    pub const ALL: [Self; 10] = [
        Self::IsReverse,
        Self::Padding,
        Self::Spacing,
        Self::ChildAlignment,
        Self::ChildControlWidth,
        Self::ChildControlHeight,
        Self::ChildScaleWidth,
        Self::ChildScaleHeight,
        Self::ChildForceExpandWidth,
        Self::ChildForceExpandHeight,
    ];

    /// Path of the field in a serialized [`LayoutConfig`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::IsReverse => "reverse",
            Self::Padding => "padding",
            Self::Spacing => "spacing",
            Self::ChildAlignment => "child_alignment",
            Self::ChildControlWidth => "control_child_size.width",
            Self::ChildControlHeight => "control_child_size.height",
            Self::ChildScaleWidth => "use_child_scale.width",
            Self::ChildScaleHeight => "use_child_scale.height",
            Self::ChildForceExpandWidth => "child_force_expand.width",
            Self::ChildForceExpandHeight => "child_force_expand.height",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::IsReverse => "Is Reverse",
            Self::Padding => "Padding",
            Self::Spacing => "Spacing",
            Self::ChildAlignment => "Child Alignment",
            Self::ChildControlWidth => "Child Control Width",
            Self::ChildControlHeight => "Child Control Height",
            Self::ChildScaleWidth => "Child Scale Width",
            Self::ChildScaleHeight => "Child Scale Height",
            Self::ChildForceExpandWidth => "Child Force Expand Width",
            Self::ChildForceExpandHeight => "Child Force Expand Height",
        }
    }

    /// Kind of [`PropertyValue`] the property holds.
    pub const fn value_kind(self) -> &'static str {
        match self {
            Self::Padding => "padding",
            Self::Spacing => "float",
            Self::ChildAlignment => "alignment",
            Self::IsReverse
            | Self::ChildControlWidth
            | Self::ChildControlHeight
            | Self::ChildScaleWidth
            | Self::ChildScaleHeight
            | Self::ChildForceExpandWidth
            | Self::ChildForceExpandHeight => "bool",
        }
    }

    /// Current value of the property in `config`.
    pub const fn read(self, config: &LayoutConfig) -> PropertyValue {
        match self {
            Self::IsReverse => PropertyValue::Bool(config.reverse),
            Self::Padding => PropertyValue::Padding(config.padding),
            Self::Spacing => PropertyValue::Float(config.spacing),
            Self::ChildAlignment => PropertyValue::Alignment(config.child_alignment),
            Self::ChildControlWidth => PropertyValue::Bool(config.control_child_size.width),
            Self::ChildControlHeight => PropertyValue::Bool(config.control_child_size.height),
            Self::ChildScaleWidth => PropertyValue::Bool(config.use_child_scale.width),
            Self::ChildScaleHeight => PropertyValue::Bool(config.use_child_scale.height),
            Self::ChildForceExpandWidth => PropertyValue::Bool(config.child_force_expand.width),
            Self::ChildForceExpandHeight => PropertyValue::Bool(config.child_force_expand.height),
        }
    }

    /// Write `value` through the group's setter, which marks it dirty on change.
    fn write(self, group: &mut BidirHorizontalLayoutGroup, value: PropertyValue) -> Result<()> {
        match (self, value) {
            (Self::IsReverse, PropertyValue::Bool(reverse)) => group.set_reverse(reverse),
            (Self::Padding, PropertyValue::Padding(padding)) => group.set_padding(padding),
            (Self::Spacing, PropertyValue::Float(spacing)) => group.set_spacing(spacing),
            (Self::ChildAlignment, PropertyValue::Alignment(alignment)) => {
                group.set_child_alignment(alignment);
            }
            (Self::ChildControlWidth, PropertyValue::Bool(flag)) => {
                group.set_control_child_size(Axis::Horizontal, flag);
            }
            (Self::ChildControlHeight, PropertyValue::Bool(flag)) => {
                group.set_control_child_size(Axis::Vertical, flag);
            }
            (Self::ChildScaleWidth, PropertyValue::Bool(flag)) => {
                group.set_use_child_scale(Axis::Horizontal, flag);
            }
            (Self::ChildScaleHeight, PropertyValue::Bool(flag)) => {
                group.set_use_child_scale(Axis::Vertical, flag);
            }
            (Self::ChildForceExpandWidth, PropertyValue::Bool(flag)) => {
                group.set_child_force_expand(Axis::Horizontal, flag);
            }
            (Self::ChildForceExpandHeight, PropertyValue::Bool(flag)) => {
                group.set_child_force_expand(Axis::Vertical, flag);
            }
            (property, other) => bail!(
                "{} holds a {} value, got {}",
                property.display_name(),
                property.value_kind(),
                other.kind()
            ),
        }
        Ok(())
    }
}

/// A property value as shown in the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Float(f32),
    Padding(Padding),
    Alignment(Alignment),
}

impl PropertyValue {
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Padding(_) => "padding",
            Self::Alignment(_) => "alignment",
        }
    }
}

/// The groups selected in the inspector, edited together.
///
/// Reads report the first target; writes go to every target.
#[derive(Debug)]
pub struct SerializedGroups<'targets> {
    targets: &'targets mut [BidirHorizontalLayoutGroup],
}

impl<'targets> SerializedGroups<'targets> {
    pub fn new(targets: &'targets mut [BidirHorizontalLayoutGroup]) -> Self {
        Self { targets }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Value of `property` on the first target.
    pub fn value(&self, property: SerializedProperty) -> Option<PropertyValue> {
        self.targets
            .first()
            .map(|group| property.read(group.config()))
    }

    /// Boolean value of `property` on the first target, or `None` for non-boolean properties.
    pub fn bool_value(&self, property: SerializedProperty) -> Option<bool> {
        match self.value(property)? {
            PropertyValue::Bool(flag) => Some(flag),
            PropertyValue::Float(_) | PropertyValue::Padding(_) | PropertyValue::Alignment(_) => None,
        }
    }

    /// Whether the targets disagree on `property`.
    pub fn has_multiple_different_values(&self, property: SerializedProperty) -> bool {
        let mut values = self.targets.iter().map(|group| property.read(group.config()));
        values
            .next()
            .is_some_and(|first| values.any(|other| other != first))
    }

    /// Write `value` to every target. Returns how many targets changed.
    ///
    /// # Errors
    /// Returns an error if `value` is not of the kind `property` holds. No target is touched
    /// in that case.
    pub fn set_value(&mut self, property: SerializedProperty, value: PropertyValue) -> Result<usize> {
        if property.value_kind() != value.kind() {
            bail!(
                "{} holds a {} value, got {}",
                property.display_name(),
                property.value_kind(),
                value.kind()
            );
        }
        let mut changed = 0;
        for group in self.targets.iter_mut() {
            if property.read(group.config()) != value {
                changed += 1;
            }
            property.write(group, value)?;
        }
        debug!(
            target: "bidir_layout_inspector::property",
            "[INSPECTOR] {} = {value:?} changed {changed}/{} targets",
            property.name(),
            self.targets.len()
        );
        Ok(changed)
    }

    /// Flip a boolean property the way a left-labelled toggle does.
    ///
    /// A mixed selection becomes `true` everywhere; otherwise the first value is inverted.
    /// Returns the value written.
    ///
    /// # Errors
    /// Returns an error if nothing is selected or `property` is not boolean.
    pub fn toggle_left(&mut self, property: SerializedProperty) -> Result<bool> {
        let Some(first) = self.bool_value(property) else {
            bail!(
                "cannot toggle {}: no selection or not a boolean",
                property.display_name()
            );
        };
        let value = self.has_multiple_different_values(property) || !first;
        self.set_value(property, PropertyValue::Bool(value))?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidir_layout::PerAxis;

    fn selection(control_widths: &[bool]) -> Vec<BidirHorizontalLayoutGroup> {
        control_widths
            .iter()
            .map(|control| {
                let mut group = BidirHorizontalLayoutGroup::new(LayoutConfig {
                    control_child_size: PerAxis::new(*control, true),
                    ..LayoutConfig::default()
                });
                group.take_dirty();
                group
            })
            .collect()
    }

    #[test]
    /// # Panics
    /// Panics if a mixed selection is not toggled to `true` everywhere.
    fn mixed_toggle_sets_all_true() {
        let mut groups = selection(&[false, true, false]);
        let mut serialized = SerializedGroups::new(&mut groups);
        assert!(serialized.has_multiple_different_values(SerializedProperty::ChildControlWidth));
        let written = serialized.toggle_left(SerializedProperty::ChildControlWidth);
        assert_eq!(written.ok(), Some(true));
        assert!(!serialized.has_multiple_different_values(SerializedProperty::ChildControlWidth));
        assert!(groups.iter().all(|group| group.config().control_child_size.width));
    }

    #[test]
    /// # Panics
    /// Panics if a uniform selection is not inverted, or unchanged targets become dirty.
    fn uniform_toggle_inverts_and_marks_dirty() {
        let mut groups = selection(&[true, true]);
        let mut serialized = SerializedGroups::new(&mut groups);
        assert_eq!(
            serialized.toggle_left(SerializedProperty::ChildControlWidth).ok(),
            Some(false)
        );
        assert_eq!(
            serialized.bool_value(SerializedProperty::ChildControlWidth),
            Some(false)
        );
        assert!(groups.iter_mut().all(BidirHorizontalLayoutGroup::take_dirty));

        let mut reselected = SerializedGroups::new(&mut groups);
        let changed = reselected.set_value(SerializedProperty::Spacing, PropertyValue::Float(0.0));
        assert_eq!(changed.ok(), Some(0));
        assert!(groups.iter().all(|group| !group.is_dirty()));
    }

    #[test]
    /// # Panics
    /// Panics if a value of the wrong kind is accepted or leaks into any target.
    fn wrong_kind_is_rejected() {
        let mut groups = selection(&[true]);
        let mut serialized = SerializedGroups::new(&mut groups);
        let mismatched = serialized.set_value(SerializedProperty::Padding, PropertyValue::Bool(true));
        assert!(mismatched.is_err_and(|err| err.to_string().contains("got bool")));
        let toggled = serialized.toggle_left(SerializedProperty::Spacing);
        assert!(toggled.is_err_and(|err| err.to_string().contains("cannot toggle")));
        assert!(groups.iter().all(|group| !group.is_dirty()));
    }

    #[test]
    /// # Panics
    /// Panics if an empty selection reports a value or can be toggled.
    fn empty_selection_has_no_value() {
        let mut groups: Vec<BidirHorizontalLayoutGroup> = Vec::new();
        let mut serialized = SerializedGroups::new(&mut groups);
        assert!(serialized.is_empty());
        assert_eq!(serialized.value(SerializedProperty::IsReverse), None);
        assert!(!serialized.has_multiple_different_values(SerializedProperty::IsReverse));
        let toggled = serialized.toggle_left(SerializedProperty::IsReverse);
        assert!(toggled.is_err_and(|err| err.to_string().contains("no selection")));
    }

    #[test]
    /// # Panics
    /// Panics if every property does not read back the value written through its setter.
    fn every_property_writes_through_setters() {
        let mut groups = selection(&[true]);
        let mut serialized = SerializedGroups::new(&mut groups);
        for property in SerializedProperty::ALL {
            let value = match property.value_kind() {
                "padding" => PropertyValue::Padding(Padding::uniform(4.0)),
                "float" => PropertyValue::Float(12.0),
                "alignment" => PropertyValue::Alignment(Alignment::new(1.0, 0.5)),
                _ => PropertyValue::Bool(!serialized.bool_value(property).unwrap_or(false)),
            };
            assert_eq!(serialized.set_value(property, value).ok(), Some(1), "{}", property.name());
            assert_eq!(serialized.value(property), Some(value));
        }
    }
}
