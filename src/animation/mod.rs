//! Animation model and single-slot playback.

pub mod controller;
pub mod descriptor;
pub mod easing;
pub mod runner;
pub mod units;

pub use controller::{
    PlaybackController, PlaybackHandle, PlaybackState, PreviewElement,
    TweenEngine,
};
pub use descriptor::{AnimatedProperty, AnimationDescriptor, Choice, Keyframes};
pub use easing::Easing;
pub use runner::{TimelineEngine, TweenRunner, TweenValue};
pub use units::{format_with_unit, Unit};
