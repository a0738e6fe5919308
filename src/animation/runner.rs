//! In-process tweening engine.
//!
//! [`TimelineEngine`] stands in for the browser's tweening engine when the
//! lab runs natively: each [`TweenRunner`] computes the animated value of its
//! descriptor at any instant. The three keyframes split the duration into
//! two equal segments, each eased with the descriptor's curve.

use std::time::Duration;

use web_time::Instant;

use super::controller::{PlaybackHandle, TweenEngine};
use super::descriptor::{AnimatedProperty, AnimationDescriptor, Choice};
use super::easing::Easing;
use super::units::{format_number, parse_float_prefix};

/// A keyframe value decoded for interpolation.
#[derive(Debug, Clone, PartialEq)]
pub enum TweenValue {
    /// A number with an optional unit suffix (`"150px"`, `"1.2"`).
    Number {
        /// Numeric part.
        value: f64,
        /// Unit suffix, possibly empty.
        unit: String,
    },
    /// An opaque RGB color.
    Color([u8; 3]),
}

impl TweenValue {
    /// Decode a keyframe string. Hex colors (`#rgb`, `#rrggbb`) become
    /// colors; everything else is read as a number with a trailing unit,
    /// falling back to `0`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(rgb) = raw.strip_prefix('#').and_then(parse_hex) {
            return TweenValue::Color(rgb);
        }
        let value = parse_float_prefix(raw).unwrap_or(0.0);
        let unit = raw
            .trim_start_matches(|c: char| {
                c.is_ascii_digit() || matches!(c, '+' | '-' | '.')
            })
            .to_owned();
        TweenValue::Number { value, unit }
    }

    /// Interpolate towards `other`. Mismatched kinds snap at the midpoint.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = f64::from(t);
        match (self, other) {
            (
                TweenValue::Number { value: a, unit: ua },
                TweenValue::Number { value: b, unit: ub },
            ) => TweenValue::Number {
                value: a + (b - a) * t,
                unit: if ub.is_empty() { ua.clone() } else { ub.clone() },
            },
            (TweenValue::Color(a), TweenValue::Color(b)) => {
                let mut out = [0u8; 3];
                for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
                    let v = f64::from(x) + (f64::from(y) - f64::from(x)) * t;
                    *o = v.round().clamp(0.0, 255.0) as u8;
                }
                TweenValue::Color(out)
            }
            _ if t < 0.5 => self.clone(),
            _ => other.clone(),
        }
    }

    /// CSS text of the value.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            TweenValue::Number { value, unit } => {
                let rounded = (value * 1000.0).round() / 1000.0;
                format!("{}{unit}", format_number(rounded))
            }
            TweenValue::Color([r, g, b]) => format!("rgb({r}, {g}, {b})"),
        }
    }
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (o, i) in out.iter_mut().zip(0..3) {
                *o = channel(&hex[i..=i])? * 17;
            }
            Some(out)
        }
        6 => Some([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ]),
        _ => None,
    }
}

/// Executes a single descriptor from its start time.
pub struct TweenRunner {
    /// When playback was requested (before the delay).
    start_time: Instant,
    /// Frozen instant once paused.
    paused_at: Option<Instant>,
    delay: Duration,
    duration: Duration,
    easing: Easing,
    /// `None` for unmapped properties, which animate nothing.
    property: Option<AnimatedProperty>,
    rest: TweenValue,
    peak: TweenValue,
    looping: bool,
    alternate: bool,
}

impl TweenRunner {
    /// Runner for `descriptor` starting at `start_time`.
    ///
    /// An unmapped easing name plays linearly.
    #[must_use]
    pub fn new(descriptor: &AnimationDescriptor, start_time: Instant) -> Self {
        let easing = match &descriptor.easing {
            Choice::Known(easing) => *easing,
            Choice::Unmapped(name) => {
                log::warn!("unknown easing '{name}', playing linearly");
                Easing::Linear
            }
        };
        Self {
            start_time,
            paused_at: None,
            delay: Duration::from_millis(descriptor.delay_ms),
            duration: Duration::from_millis(descriptor.duration_ms),
            easing,
            property: descriptor.property.known().copied(),
            rest: TweenValue::parse(descriptor.keyframes.rest()),
            peak: TweenValue::parse(descriptor.keyframes.peak()),
            looping: descriptor.looping,
            alternate: descriptor.alternate,
        }
    }

    /// The animated property, if it is one the runner understands.
    #[must_use]
    pub fn property(&self) -> Option<AnimatedProperty> {
        self.property
    }

    /// Whether [`PlaybackHandle::pause`] was called.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Delay plus one pass through the keyframes.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.delay + self.duration
    }

    /// Normalized progress (0.0 to 1.0) through the current pass after
    /// `elapsed` has passed since the start.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let ratio = active.as_secs_f64() / self.duration.as_secs_f64();
        if !self.looping {
            return ratio.min(1.0) as f32;
        }
        let pass = ratio.floor();
        let t = (ratio - pass) as f32;
        if self.alternate && pass as u64 % 2 == 1 {
            1.0 - t
        } else {
            t
        }
    }

    /// Whether a non-looping run has played out after `elapsed`.
    #[must_use]
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        !self.looping && elapsed >= self.total_duration()
    }

    /// Animated value after `elapsed` since the start, or `None` when the
    /// property is unmapped.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> Option<TweenValue> {
        if self.property.is_none() {
            return None;
        }
        let t = self.progress(elapsed);
        let value = if t < 0.5 {
            let eased = self.easing.evaluate(t * 2.0);
            self.rest.lerp(&self.peak, eased)
        } else {
            let eased = self.easing.evaluate((t - 0.5) * 2.0);
            self.peak.lerp(&self.rest, eased)
        };
        Some(value)
    }

    /// Animated value at `now`, honoring a pause.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Option<TweenValue> {
        let at = self.paused_at.unwrap_or(now);
        self.value_at(at.saturating_duration_since(self.start_time))
    }
}

impl PlaybackHandle for TweenRunner {
    fn pause(&mut self) {
        if self.paused_at.is_none() {
            self.paused_at = Some(Instant::now());
        }
    }
}

impl std::fmt::Debug for TweenRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenRunner")
            .field("property", &self.property)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("easing", &self.easing)
            .field("paused", &self.is_paused())
            .finish_non_exhaustive()
    }
}

/// Engine producing [`TweenRunner`]s that start at the moment of `play`.
#[derive(Debug, Default)]
pub struct TimelineEngine {
    started: usize,
}

impl TimelineEngine {
    /// Number of runs started so far.
    #[must_use]
    pub fn started(&self) -> usize {
        self.started
    }
}

impl TweenEngine for TimelineEngine {
    type Handle = TweenRunner;

    fn play(&mut self, descriptor: &AnimationDescriptor) -> TweenRunner {
        self.started += 1;
        TweenRunner::new(descriptor, Instant::now())
    }
}
