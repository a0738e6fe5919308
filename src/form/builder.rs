//! Form snapshot to descriptor.

use super::FormState;
use crate::animation::descriptor::{
    AnimatedProperty, AnimationDescriptor, Choice, Keyframes,
};
use crate::animation::easing::Easing;
use crate::animation::units::{format_with_unit, parse_int_prefix};
use crate::options::LabOptions;

/// Build the descriptor described by `state`.
///
/// Never fails. Offsets and rotation get their unit appended, invalid
/// duration or delay text falls back to the configured defaults, and an
/// unrecognized property or easing is carried through as
/// [`Choice::Unmapped`].
#[must_use]
pub fn build_from_form(
    state: &FormState,
    options: &LabOptions,
) -> AnimationDescriptor {
    let property: Choice<AnimatedProperty> =
        Choice::parse(&state.animation_type);
    let (start, end) = match property.known().and_then(|p| p.unit()) {
        Some(unit) => (
            format_with_unit(&state.start, unit),
            format_with_unit(&state.end, unit),
        ),
        None => (state.start.clone(), state.end.clone()),
    };

    AnimationDescriptor {
        target: options.target.clone(),
        property,
        keyframes: Keyframes::new(start, end),
        duration_ms: parse_duration(&state.duration)
            .unwrap_or(options.fallback_duration_ms),
        delay_ms: parse_delay(&state.delay)
            .unwrap_or(options.fallback_delay_ms),
        easing: Choice::<Easing>::parse(&state.easing),
        looping: state.looping,
        alternate: state.alternate,
        suspend_transitions: true,
    }
}

/// Positive integer milliseconds. Digit runs beyond `i64::MAX` saturate
/// there.
fn parse_duration(raw: &str) -> Option<u64> {
    parse_delay(raw).filter(|&ms| ms > 0)
}

/// Non-negative integer milliseconds. Digit runs beyond `i64::MAX`
/// saturate there.
fn parse_delay(raw: &str) -> Option<u64> {
    parse_int_prefix(raw).and_then(|ms| u64::try_from(ms).ok())
}
