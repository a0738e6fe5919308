//! Property-based invariants of the form/descriptor mapping.
//!
//! 1. Every built descriptor has the closed `[rest, peak, rest]` shape
//! 2. Syncing a descriptor back and rebuilding yields the same descriptor
//! 3. Unit formatting is idempotent on its own output
//! 4. Duration and delay fall back exactly when no usable integer is typed

use motion_lab::animation::{
    format_with_unit, AnimatedProperty, Choice, Easing, Unit,
};
use motion_lab::form::{
    apply_to_form, build_from_form, FormField, FormFields, FormState,
    MemoryForm,
};
use motion_lab::options::LabOptions;
use proptest::prelude::*;
use proptest::sample::select;

// ── Strategies ──────────────────────────────────────────────────────────

/// Every selector value, plus arbitrary unmapped text.
fn animation_type() -> impl Strategy<Value = String> {
    prop_oneof![
        select(AnimatedProperty::ALL.to_vec())
            .prop_map(|p| p.key().to_owned()),
        "[a-zA-Z]{0,10}",
    ]
}

/// Every easing name, plus arbitrary unmapped text.
fn easing() -> impl Strategy<Value = String> {
    prop_oneof![
        select(Easing::ALL.to_vec()).prop_map(|e| e.name().to_owned()),
        "[a-zA-Z]{0,12}",
    ]
}

/// What a user might type into a start or end field.
fn raw_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "-?[0-9]{1,6}(\\.[0-9]{0,3})?",
        "-?[0-9]{1,4}(px|deg|%|em|turn)",
        "#[0-9a-f]{6}",
        "0\\.0000000[1-9]",
        "[1-9][0-9]{21,24}",
        " *[+-]?\\.?[0-9]{0,3}",
        "\\PC{0,12}",
    ]
}

/// What a user might type into a duration or delay field.
fn raw_millis() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[0-9]{1,12}",
        "[0-9]{1,6}(ms|\\.[0-9]{1,3})",
        "[0-9]{20,25}",
        "\\PC{0,8}",
    ]
}

fn form_state() -> impl Strategy<Value = FormState> {
    (
        animation_type(),
        raw_value(),
        raw_value(),
        raw_millis(),
        raw_millis(),
        easing(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(animation_type, start, end, duration, delay, easing, l, a)| {
                FormState {
                    animation_type,
                    start,
                    end,
                    duration,
                    delay,
                    easing,
                    looping: l,
                    alternate: a,
                }
            },
        )
}

fn form_from(state: &FormState) -> MemoryForm {
    MemoryForm::new()
        .with_value(FormField::AnimationType, &state.animation_type)
        .with_value(FormField::StartValue, &state.start)
        .with_value(FormField::EndValue, &state.end)
        .with_value(FormField::Duration, &state.duration)
        .with_value(FormField::Delay, &state.delay)
        .with_value(FormField::Easing, &state.easing)
        .with_checked(FormField::Loop, state.looping)
        .with_checked(FormField::Alternate, state.alternate)
}

// ── Invariants ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn built_descriptors_are_closed(state in form_state()) {
        let desc = build_from_form(&state, &LabOptions::default());
        let values = desc.keyframes.values();
        prop_assert_eq!(values[0], values[2]);
        prop_assert!(desc.duration_ms > 0);
    }

    #[test]
    fn sync_then_rebuild_is_stable(state in form_state()) {
        let options = LabOptions::default();
        let first = build_from_form(&state, &options);

        let mut form = form_from(&state);
        let synced = apply_to_form(&first, &mut form);
        prop_assert_eq!(synced, first.property.known().is_some());
        let second = build_from_form(&FormState::read(&form), &options);

        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn known_properties_sync_their_selector(
        property in select(AnimatedProperty::ALL.to_vec()),
        looping in any::<bool>(),
        start in raw_value(),
    ) {
        let state = FormState {
            animation_type: property.key().to_owned(),
            start,
            end: "1".to_owned(),
            duration: "500".to_owned(),
            delay: "0".to_owned(),
            easing: "linear".to_owned(),
            looping,
            alternate: false,
        };
        let desc = build_from_form(&state, &LabOptions::default());
        prop_assert_eq!(&desc.property, &Choice::Known(property));

        let mut form =
            MemoryForm::new().with_checked(FormField::Loop, !looping);
        prop_assert!(apply_to_form(&desc, &mut form));
        prop_assert_eq!(form.value(FormField::AnimationType), property.key());
        prop_assert_eq!(
            form.value(FormField::StartValue),
            desc.keyframes.rest()
        );
        prop_assert_eq!(form.is_checked(FormField::Loop), looping);
    }

    #[test]
    fn unit_formatting_is_idempotent(
        raw in raw_value(),
        unit in select(vec![Unit::Px, Unit::Deg]),
    ) {
        let once = format_with_unit(&raw, unit);
        prop_assert_eq!(format_with_unit(&once, unit), once);
    }

    #[test]
    fn digitless_timing_falls_back(
        duration in "[^0-9]{0,8}",
        delay in "[^0-9]{0,8}",
    ) {
        let state = FormState {
            animation_type: "scale".to_owned(),
            duration,
            delay,
            ..FormState::default()
        };
        let desc = build_from_form(&state, &LabOptions::default());
        prop_assert_eq!(desc.duration_ms, 1000);
        prop_assert_eq!(desc.delay_ms, 0);
    }

    #[test]
    fn typed_integers_are_kept(
        duration in 1u64..=i64::MAX.unsigned_abs(),
        delay in 0u64..=i64::MAX.unsigned_abs(),
        suffix in "(ms|\\.[0-9]{1,3})?",
    ) {
        let state = FormState {
            animation_type: "opacity".to_owned(),
            duration: format!("{duration}{suffix}"),
            delay: format!("{delay}{suffix}"),
            ..FormState::default()
        };
        let desc = build_from_form(&state, &LabOptions::default());
        prop_assert_eq!(desc.duration_ms, duration);
        prop_assert_eq!(desc.delay_ms, delay);
    }

    #[test]
    fn non_positive_durations_fall_back(ms in 0u64..1_000_000) {
        let state = FormState {
            animation_type: "rotate".to_owned(),
            duration: format!("-{ms}"),
            delay: format!("-{}", ms + 1),
            ..FormState::default()
        };
        let desc = build_from_form(&state, &LabOptions::default());
        prop_assert_eq!(desc.duration_ms, 1000);
        prop_assert_eq!(desc.delay_ms, 0);
    }
}
