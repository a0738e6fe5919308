//! Named easing curves offered by the easing selector.
//!
//! The names follow the tweening engine's vocabulary (`linear`,
//! `easeInQuad`, `easeOutBounce`, ...). Every "out" curve is the mirrored
//! "in" curve and every "in-out" curve is the two halves stitched together,
//! so only the "in" shapes are written out.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Overshoot amount of the `Back` family.
const BACK_OVERSHOOT: f32 = 1.701_58;
/// Oscillation period of the `Elastic` family.
const ELASTIC_PERIOD: f32 = 0.5;

/// Curve family, evaluated as its "in" shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Curve {
    /// `t²`
    Quad,
    /// `t³`
    Cubic,
    /// Quarter cosine.
    Sine,
    /// Pulls back before moving forward.
    Back,
    /// Decaying bounces.
    Bounce,
    /// Decaying spring oscillation.
    Elastic,
}

impl Curve {
    fn ease_in(self, t: f32) -> f32 {
        match self {
            Curve::Quad => t * t,
            Curve::Cubic => t * t * t,
            Curve::Sine => 1.0 - (t * PI / 2.0).cos(),
            Curve::Back => {
                t * t * ((BACK_OVERSHOOT + 1.0) * t - BACK_OVERSHOOT)
            }
            Curve::Bounce => 1.0 - bounce_out(1.0 - t),
            Curve::Elastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let shift = ELASTIC_PERIOD / 4.0;
                -(2f32.powf(10.0 * (t - 1.0)))
                    * ((t - 1.0 - shift) * (2.0 * PI) / ELASTIC_PERIOD).sin()
            }
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984_375
    }
}

/// Easing function variants selectable in the form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic, slow start.
    EaseInQuad,
    /// Quadratic, slow end.
    EaseOutQuad,
    /// Quadratic, slow start and end.
    #[default]
    EaseInOutQuad,
    /// Cubic, slow start.
    EaseInCubic,
    /// Cubic, slow end.
    EaseOutCubic,
    /// Cubic, slow start and end.
    EaseInOutCubic,
    /// Sine, slow start.
    EaseInSine,
    /// Sine, slow end.
    EaseOutSine,
    /// Sine, slow start and end.
    EaseInOutSine,
    /// Anticipates before starting.
    EaseInBack,
    /// Overshoots the end, then settles.
    EaseOutBack,
    /// Anticipates and overshoots.
    EaseInOutBack,
    /// Bounces at the start.
    EaseInBounce,
    /// Bounces at the end.
    EaseOutBounce,
    /// Bounces at both ends.
    EaseInOutBounce,
    /// Springs at the start.
    EaseInElastic,
    /// Springs at the end.
    EaseOutElastic,
    /// Springs at both ends.
    EaseInOutElastic,
}

#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
}

impl Easing {
    /// Every easing offered by the selector, in display order.
    pub const ALL: [Easing; 19] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInBack,
        Easing::EaseOutBack,
        Easing::EaseInOutBack,
        Easing::EaseInBounce,
        Easing::EaseOutBounce,
        Easing::EaseInOutBounce,
        Easing::EaseInElastic,
        Easing::EaseOutElastic,
        Easing::EaseInOutElastic,
    ];

    /// Name understood by the tweening engine.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInQuad => "easeInQuad",
            Easing::EaseOutQuad => "easeOutQuad",
            Easing::EaseInOutQuad => "easeInOutQuad",
            Easing::EaseInCubic => "easeInCubic",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::EaseInOutCubic => "easeInOutCubic",
            Easing::EaseInSine => "easeInSine",
            Easing::EaseOutSine => "easeOutSine",
            Easing::EaseInOutSine => "easeInOutSine",
            Easing::EaseInBack => "easeInBack",
            Easing::EaseOutBack => "easeOutBack",
            Easing::EaseInOutBack => "easeInOutBack",
            Easing::EaseInBounce => "easeInBounce",
            Easing::EaseOutBounce => "easeOutBounce",
            Easing::EaseInOutBounce => "easeInOutBounce",
            Easing::EaseInElastic => "easeInElastic",
            Easing::EaseOutElastic => "easeOutElastic",
            Easing::EaseInOutElastic => "easeInOutElastic",
        }
    }

    fn decompose(self) -> Option<(Curve, Shape)> {
        let pair = match self {
            Easing::Linear => return None,
            Easing::EaseInQuad => (Curve::Quad, Shape::In),
            Easing::EaseOutQuad => (Curve::Quad, Shape::Out),
            Easing::EaseInOutQuad => (Curve::Quad, Shape::InOut),
            Easing::EaseInCubic => (Curve::Cubic, Shape::In),
            Easing::EaseOutCubic => (Curve::Cubic, Shape::Out),
            Easing::EaseInOutCubic => (Curve::Cubic, Shape::InOut),
            Easing::EaseInSine => (Curve::Sine, Shape::In),
            Easing::EaseOutSine => (Curve::Sine, Shape::Out),
            Easing::EaseInOutSine => (Curve::Sine, Shape::InOut),
            Easing::EaseInBack => (Curve::Back, Shape::In),
            Easing::EaseOutBack => (Curve::Back, Shape::Out),
            Easing::EaseInOutBack => (Curve::Back, Shape::InOut),
            Easing::EaseInBounce => (Curve::Bounce, Shape::In),
            Easing::EaseOutBounce => (Curve::Bounce, Shape::Out),
            Easing::EaseInOutBounce => (Curve::Bounce, Shape::InOut),
            Easing::EaseInElastic => (Curve::Elastic, Shape::In),
            Easing::EaseOutElastic => (Curve::Elastic, Shape::Out),
            Easing::EaseInOutElastic => (Curve::Elastic, Shape::InOut),
        };
        Some(pair)
    }

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. The result starts at 0.0 and ends
    /// at 1.0 but may leave that range in between (`Back`, `Elastic`).
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let Some((curve, shape)) = self.decompose() else {
            return t;
        };
        match shape {
            Shape::In => curve.ease_in(t),
            Shape::Out => 1.0 - curve.ease_in(1.0 - t),
            Shape::InOut => {
                if t < 0.5 {
                    curve.ease_in(t * 2.0) / 2.0
                } else {
                    1.0 - curve.ease_in(t * -2.0 + 2.0) / 2.0
                }
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .into_iter()
            .find(|easing| easing.name() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = Easing::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_every_curve_hits_both_endpoints() {
        for easing in Easing::ALL {
            assert!(easing.evaluate(0.0).abs() < 1e-4, "{easing} at 0");
            assert!(
                (easing.evaluate(1.0) - 1.0).abs() < 1e-4,
                "{easing} at 1"
            );
        }
    }

    #[test]
    fn test_input_clamping() {
        assert_eq!(Easing::Linear.evaluate(-0.5), 0.0);
        assert_eq!(Easing::Linear.evaluate(1.5), 1.0);
        assert_eq!(Easing::EaseInQuad.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_quad_shapes() {
        assert_eq!(Easing::EaseInQuad.evaluate(0.5), 0.25);
        assert_eq!(Easing::EaseOutQuad.evaluate(0.5), 0.75);
        assert_eq!(Easing::EaseInOutQuad.evaluate(0.5), 0.5);
        assert_eq!(Easing::EaseInOutQuad.evaluate(0.25), 0.125);
    }

    #[test]
    fn test_back_overshoots() {
        // easeOutBack passes beyond the target before settling.
        let peak = (1..100)
            .map(|i| Easing::EaseOutBack.evaluate(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "expected overshoot, got {peak}");
        // easeInBack dips below the start first.
        assert!(Easing::EaseInBack.evaluate(0.2) < 0.0);
    }

    #[test]
    fn test_bounce_stays_in_range() {
        for i in 0..=100 {
            let v = Easing::EaseOutBounce.evaluate(i as f32 / 100.0);
            assert!((-1e-4..=1.0 + 1e-4).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>(), Ok(easing));
        }
        assert!("easeSideways".parse::<Easing>().is_err());
    }

    #[test]
    fn test_serde_uses_engine_names() {
        let json = serde_json::to_string(&Easing::EaseOutBack).unwrap();
        assert_eq!(json, "\"easeOutBack\"");
    }
}
