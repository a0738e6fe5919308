//! The canonical description of one animation run.
//!
//! A descriptor names exactly one animated property, the three keyframe
//! values it passes through, and the timing of the run. It is rebuilt from
//! scratch on every Animate click or preset selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::easing::Easing;
use super::units::Unit;
use crate::error::LabError;

/// The property a descriptor animates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum AnimatedProperty {
    /// Horizontal offset.
    TranslateX,
    /// Vertical offset.
    TranslateY,
    /// Uniform scale factor.
    Scale,
    /// Rotation around the element center.
    Rotate,
    /// Opacity, 0 to 1.
    Opacity,
    /// Background color as a hex string.
    BackgroundColor,
}

impl AnimatedProperty {
    /// Every property, in selector order.
    pub const ALL: [AnimatedProperty; 6] = [
        AnimatedProperty::TranslateX,
        AnimatedProperty::TranslateY,
        AnimatedProperty::Scale,
        AnimatedProperty::Rotate,
        AnimatedProperty::Opacity,
        AnimatedProperty::BackgroundColor,
    ];

    /// Property key as used by the tweening engine and the type selector.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            AnimatedProperty::TranslateX => "translateX",
            AnimatedProperty::TranslateY => "translateY",
            AnimatedProperty::Scale => "scale",
            AnimatedProperty::Rotate => "rotate",
            AnimatedProperty::Opacity => "opacity",
            AnimatedProperty::BackgroundColor => "backgroundColor",
        }
    }

    /// Unit appended to bare numbers, if the property takes one.
    #[must_use]
    pub fn unit(self) -> Option<Unit> {
        match self {
            AnimatedProperty::TranslateX | AnimatedProperty::TranslateY => {
                Some(Unit::Px)
            }
            AnimatedProperty::Rotate => Some(Unit::Deg),
            AnimatedProperty::Scale
            | AnimatedProperty::Opacity
            | AnimatedProperty::BackgroundColor => None,
        }
    }
}

impl fmt::Display for AnimatedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AnimatedProperty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimatedProperty::ALL
            .into_iter()
            .find(|prop| prop.key() == s)
            .ok_or(())
    }
}

/// A selector value that is either one of the known variants or passed
/// through untouched.
///
/// Unknown property or easing selections are not errors: the descriptor is
/// still built, and whatever consumes it decides what an unmapped value
/// means (the tweening engine animates nothing, the form synchronizer
/// writes nothing).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    /// A recognized value.
    Known(T),
    /// The raw selector text, kept verbatim.
    Unmapped(String),
}

impl<T: FromStr> Choice<T> {
    /// Classify raw selector text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse::<T>()
            .map_or_else(|_| Choice::Unmapped(raw.to_owned()), Choice::Known)
    }
}

impl<T> Choice<T> {
    /// The recognized value, if any.
    #[must_use]
    pub fn known(&self) -> Option<&T> {
        match self {
            Choice::Known(value) => Some(value),
            Choice::Unmapped(_) => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Known(value) => fmt::Display::fmt(value, f),
            Choice::Unmapped(raw) => f.write_str(raw),
        }
    }
}

impl<T> From<T> for Choice<T> {
    fn from(value: T) -> Self {
        Choice::Known(value)
    }
}

/// Keyframe values of a "return to rest" animation: `[rest, peak, rest]`.
///
/// Only the rest and peak values are stored, so the closing value always
/// equals the opening one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Keyframes {
    rest: String,
    peak: String,
}

impl Keyframes {
    /// Keyframes going from `rest` to `peak` and back.
    #[must_use]
    pub fn new(rest: impl Into<String>, peak: impl Into<String>) -> Self {
        Self {
            rest: rest.into(),
            peak: peak.into(),
        }
    }

    /// Starting (and closing) value.
    #[must_use]
    pub fn rest(&self) -> &str {
        &self.rest
    }

    /// Value reached halfway through.
    #[must_use]
    pub fn peak(&self) -> &str {
        &self.peak
    }

    /// All three values in playback order.
    #[must_use]
    pub fn values(&self) -> [&str; 3] {
        [&self.rest, &self.peak, &self.rest]
    }
}

impl TryFrom<Vec<String>> for Keyframes {
    type Error = LabError;

    fn try_from(values: Vec<String>) -> Result<Self, Self::Error> {
        match <[String; 3]>::try_from(values) {
            Ok([rest, peak, closing]) if rest == closing => {
                Ok(Self { rest, peak })
            }
            Ok([rest, _, closing]) => Err(LabError::InvalidKeyframes(format!(
                "closing value '{closing}' differs from start '{rest}'"
            ))),
            Err(values) => Err(LabError::InvalidKeyframes(format!(
                "expected 3 values, got {}",
                values.len()
            ))),
        }
    }
}

impl From<Keyframes> for Vec<String> {
    fn from(keyframes: Keyframes) -> Self {
        let closing = keyframes.rest.clone();
        vec![keyframes.rest, keyframes.peak, closing]
    }
}

/// Canonical record of one animation: target, property, keyframes, timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationDescriptor {
    /// Selector of the animated element.
    pub target: String,
    /// The single animated property.
    pub property: Choice<AnimatedProperty>,
    /// `[rest, peak, rest]` values of that property.
    pub keyframes: Keyframes,
    /// Run length in milliseconds, always positive.
    pub duration_ms: u64,
    /// Delay before the run starts, in milliseconds.
    pub delay_ms: u64,
    /// Interpolation curve.
    pub easing: Choice<Easing>,
    /// Repeat indefinitely.
    pub looping: bool,
    /// Play back and forth. Captured from the form; presets never set it.
    pub alternate: bool,
    /// Suspend CSS transitions on the target before playback begins, so the
    /// tweening engine has exclusive control of the property.
    pub suspend_transitions: bool,
}

impl AnimationDescriptor {
    /// Configuration object handed to the tweening engine.
    ///
    /// Shape: `{targets, <property>: [v0, v1, v2], duration, delay, easing,
    /// loop}` plus `direction: "alternate"` when alternating.
    #[must_use]
    pub fn tween_config(&self) -> Value {
        let mut config = serde_json::Map::new();
        let _ = config.insert("targets".to_owned(), json!(self.target));
        let _ = config.insert(
            self.property.to_string(),
            json!(self.keyframes.values()),
        );
        let _ = config.insert("duration".to_owned(), json!(self.duration_ms));
        let _ = config.insert("delay".to_owned(), json!(self.delay_ms));
        let _ = config
            .insert("easing".to_owned(), json!(self.easing.to_string()));
        let _ = config.insert("loop".to_owned(), json!(self.looping));
        if self.alternate {
            let _ = config.insert("direction".to_owned(), json!("alternate"));
        }
        Value::Object(config)
    }
}
