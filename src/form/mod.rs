//! The configuration form: field access, snapshots, and the two
//! directions of form/descriptor mapping.
//!
//! [`build_from_form`] turns a [`FormState`] into a descriptor;
//! [`apply_to_form`] writes a descriptor back into the visible controls.

mod builder;
mod sync;

use std::collections::{HashMap, HashSet};

pub use builder::build_from_form;
pub use sync::{apply_to_form, apply_type_defaults, default_values};

/// The controls of the configuration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Property-type selector.
    AnimationType,
    /// Start value text.
    StartValue,
    /// End value text.
    EndValue,
    /// Duration number input.
    Duration,
    /// Delay number input.
    Delay,
    /// Easing selector.
    Easing,
    /// Loop checkbox.
    Loop,
    /// Alternate checkbox.
    Alternate,
}

impl FormField {
    /// Every control, in page order.
    pub const ALL: [FormField; 8] = [
        FormField::AnimationType,
        FormField::StartValue,
        FormField::EndValue,
        FormField::Duration,
        FormField::Delay,
        FormField::Easing,
        FormField::Loop,
        FormField::Alternate,
    ];

    /// Element id of the control in the page.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            FormField::AnimationType => "animType",
            FormField::StartValue => "startValue",
            FormField::EndValue => "endValue",
            FormField::Duration => "duration",
            FormField::Delay => "delay",
            FormField::Easing => "easing",
            FormField::Loop => "loop",
            FormField::Alternate => "alternate",
        }
    }

    /// Whether the control is a checkbox.
    #[must_use]
    pub fn is_checkbox(self) -> bool {
        matches!(self, FormField::Loop | FormField::Alternate)
    }
}

/// Read/write access to the form controls.
pub trait FormFields {
    /// Current text of a text, number, or select control.
    fn value(&self, field: FormField) -> String;

    /// Replace the text of a text, number, or select control.
    fn set_value(&mut self, field: FormField, value: &str);

    /// Whether a checkbox is ticked.
    fn is_checked(&self, field: FormField) -> bool;

    /// Tick or clear a checkbox.
    fn set_checked(&mut self, field: FormField, checked: bool);
}

/// Snapshot of every control, read in one go before building a descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Raw property-type selection.
    pub animation_type: String,
    /// Raw start value.
    pub start: String,
    /// Raw end value.
    pub end: String,
    /// Raw duration text.
    pub duration: String,
    /// Raw delay text.
    pub delay: String,
    /// Raw easing selection.
    pub easing: String,
    /// Loop checkbox.
    pub looping: bool,
    /// Alternate checkbox.
    pub alternate: bool,
}

impl FormState {
    /// Read every control of `form`.
    #[must_use]
    pub fn read<F: FormFields + ?Sized>(form: &F) -> Self {
        Self {
            animation_type: form.value(FormField::AnimationType),
            start: form.value(FormField::StartValue),
            end: form.value(FormField::EndValue),
            duration: form.value(FormField::Duration),
            delay: form.value(FormField::Delay),
            easing: form.value(FormField::Easing),
            looping: form.is_checked(FormField::Loop),
            alternate: form.is_checked(FormField::Alternate),
        }
    }
}

/// Form held in memory, for native front-ends and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryForm {
    values: HashMap<FormField, String>,
    checked: HashSet<FormField>,
}

impl MemoryForm {
    /// Empty form: blank text and unticked boxes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`FormFields::set_value`].
    #[must_use]
    pub fn with_value(mut self, field: FormField, value: &str) -> Self {
        self.set_value(field, value);
        self
    }

    /// Builder-style [`FormFields::set_checked`].
    #[must_use]
    pub fn with_checked(mut self, field: FormField, checked: bool) -> Self {
        self.set_checked(field, checked);
        self
    }
}

impl FormFields for MemoryForm {
    fn value(&self, field: FormField) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, field: FormField, value: &str) {
        let _ = self.values.insert(field, value.to_owned());
    }

    fn is_checked(&self, field: FormField) -> bool {
        self.checked.contains(&field)
    }

    fn set_checked(&mut self, field: FormField, checked: bool) {
        if checked {
            let _ = self.checked.insert(field);
        } else {
            let _ = self.checked.remove(&field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_are_unique() {
        let ids: HashSet<_> =
            FormField::ALL.into_iter().map(FormField::element_id).collect();
        assert_eq!(ids.len(), FormField::ALL.len());
    }

    #[test]
    fn read_snapshots_every_control() {
        let form = MemoryForm::new()
            .with_value(FormField::AnimationType, "scale")
            .with_value(FormField::StartValue, "1")
            .with_value(FormField::EndValue, "1.5")
            .with_value(FormField::Duration, "600")
            .with_value(FormField::Delay, "50")
            .with_value(FormField::Easing, "linear")
            .with_checked(FormField::Alternate, true);
        let state = FormState::read(&form);
        assert_eq!(state.animation_type, "scale");
        assert_eq!(state.start, "1");
        assert_eq!(state.end, "1.5");
        assert_eq!(state.duration, "600");
        assert_eq!(state.delay, "50");
        assert_eq!(state.easing, "linear");
        assert!(!state.looping);
        assert!(state.alternate);
    }

    #[test]
    fn unchecking_clears_the_box() {
        let mut form = MemoryForm::new().with_checked(FormField::Loop, true);
        form.set_checked(FormField::Loop, false);
        assert!(!form.is_checked(FormField::Loop));
    }
}
