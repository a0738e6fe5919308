//! Descriptor back onto the form, and per-type default values.

use super::{FormField, FormFields};
use crate::animation::descriptor::{
    AnimatedProperty, AnimationDescriptor, Choice,
};

/// Start and end values written into the form when the property type
/// changes.
#[must_use]
pub fn default_values(
    property: AnimatedProperty,
) -> (&'static str, &'static str) {
    match property {
        AnimatedProperty::TranslateX | AnimatedProperty::TranslateY => {
            ("0px", "100px")
        }
        AnimatedProperty::Scale => ("1", "1.5"),
        AnimatedProperty::Rotate => ("0deg", "360deg"),
        AnimatedProperty::Opacity => ("0", "1"),
        AnimatedProperty::BackgroundColor => ("#4a6bff", "#ff6b6b"),
    }
}

/// Fill start/end with the defaults of `animation_type`.
///
/// Unknown types leave the fields as they are. Returns whether anything
/// was written.
pub fn apply_type_defaults<F: FormFields + ?Sized>(
    animation_type: &str,
    form: &mut F,
) -> bool {
    let Choice::Known(property) =
        Choice::<AnimatedProperty>::parse(animation_type)
    else {
        return false;
    };
    let (start, end) = default_values(property);
    form.set_value(FormField::StartValue, start);
    form.set_value(FormField::EndValue, end);
    true
}

/// Project `descriptor` onto the form.
///
/// Writes the type selector, start and end (the closing keyframe is never
/// shown since it repeats the start), duration, easing, and the loop box.
/// Delay and alternate are left alone. A descriptor whose property has no
/// selector entry writes nothing. Returns whether the form was updated.
pub fn apply_to_form<F: FormFields + ?Sized>(
    descriptor: &AnimationDescriptor,
    form: &mut F,
) -> bool {
    let Choice::Known(property) = descriptor.property else {
        log::debug!(
            "no form mapping for property '{}', form left unchanged",
            descriptor.property
        );
        return false;
    };
    form.set_value(FormField::AnimationType, property.key());
    form.set_value(FormField::StartValue, descriptor.keyframes.rest());
    form.set_value(FormField::EndValue, descriptor.keyframes.peak());
    form.set_value(FormField::Duration, &descriptor.duration_ms.to_string());
    form.set_value(FormField::Easing, &descriptor.easing.to_string());
    form.set_checked(FormField::Loop, descriptor.looping);
    true
}
