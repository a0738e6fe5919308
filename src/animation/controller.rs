//! Single-slot playback control.
//!
//! The controller owns at most one running animation. Starting a new one
//! always stops the current handle and restores the element's rest state
//! first, so two runs never fight over the same property and every run
//! begins from the same place.

use super::descriptor::AnimationDescriptor;
use crate::options::RestStyle;

/// Opaque reference to one in-progress animation.
pub trait PlaybackHandle {
    /// Stop advancing the animation. Called once when the handle is
    /// superseded or reset.
    fn pause(&mut self);
}

/// The tweening engine that computes intermediate frames over time.
///
/// `play` returns immediately; frame progression happens outside the
/// controller and is never awaited.
pub trait TweenEngine {
    /// Handle type for a running animation.
    type Handle: PlaybackHandle;

    /// Begin playing `descriptor` and return its handle.
    fn play(&mut self, descriptor: &AnimationDescriptor) -> Self::Handle;
}

/// Style access to the element being animated.
pub trait PreviewElement {
    /// Disable CSS transitions so they do not compete with the tween.
    fn suspend_transitions(&mut self);

    /// Put the element back into its rest visual state.
    fn restore(&mut self, rest: &RestStyle);
}

/// Whether a handle is currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No animation has been started since the last reset.
    Idle,
    /// A handle is held. The animation may already have finished on its
    /// own; the controller does not observe completion.
    Playing,
}

/// Owns the current playback handle and the preview element.
pub struct PlaybackController<E: TweenEngine, P: PreviewElement> {
    engine: E,
    element: P,
    rest: RestStyle,
    current: Option<E::Handle>,
}

impl<E: TweenEngine, P: PreviewElement> PlaybackController<E, P> {
    /// Controller with no animation running.
    #[must_use]
    pub fn new(engine: E, element: P, rest: RestStyle) -> Self {
        Self {
            engine,
            element,
            rest,
            current: None,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        if self.current.is_some() {
            PlaybackState::Playing
        } else {
            PlaybackState::Idle
        }
    }

    /// The live handle, if any.
    #[must_use]
    pub fn current(&self) -> Option<&E::Handle> {
        self.current.as_ref()
    }

    /// The tweening engine.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The preview element.
    #[must_use]
    pub fn element(&self) -> &P {
        &self.element
    }

    /// Rest style restored on reset.
    #[must_use]
    pub fn rest(&self) -> &RestStyle {
        &self.rest
    }

    /// Stop whatever is running, reset the element, then play `descriptor`.
    pub fn start(&mut self, descriptor: &AnimationDescriptor) {
        self.reset();
        if descriptor.suspend_transitions {
            self.element.suspend_transitions();
        }
        log::debug!(
            "starting {} on {} ({} ms, {})",
            descriptor.property,
            descriptor.target,
            descriptor.duration_ms,
            descriptor.easing,
        );
        self.current = Some(self.engine.play(descriptor));
    }

    /// Stop and discard the current handle, then restore the rest style.
    ///
    /// Safe to call repeatedly; with nothing running only the (already
    /// applied) rest style is written again.
    pub fn reset(&mut self) {
        if let Some(mut handle) = self.current.take() {
            log::debug!("pausing superseded animation");
            handle.pause();
        }
        self.element.restore(&self.rest);
    }
}

impl<E: TweenEngine, P: PreviewElement> std::fmt::Debug
    for PlaybackController<E, P>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state())
            .field("rest", &self.rest)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::animation::descriptor::{AnimatedProperty, Choice, Keyframes};
    use crate::animation::easing::Easing;

    /// Everything the fakes observed, in order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Event {
        Play(usize, String),
        Pause(usize),
        Suspend,
        Restore,
    }

    pub(crate) type Journal = Rc<RefCell<Vec<Event>>>;

    pub(crate) struct FakeHandle {
        id: usize,
        journal: Journal,
        live: Rc<RefCell<usize>>,
    }

    impl PlaybackHandle for FakeHandle {
        fn pause(&mut self) {
            *self.live.borrow_mut() -= 1;
            self.journal.borrow_mut().push(Event::Pause(self.id));
        }
    }

    #[derive(Default)]
    pub(crate) struct FakeEngine {
        pub(crate) journal: Journal,
        pub(crate) live: Rc<RefCell<usize>>,
        next_id: usize,
    }

    impl TweenEngine for FakeEngine {
        type Handle = FakeHandle;

        fn play(&mut self, descriptor: &AnimationDescriptor) -> FakeHandle {
            self.next_id += 1;
            *self.live.borrow_mut() += 1;
            let property = descriptor.property.to_string();
            self.journal
                .borrow_mut()
                .push(Event::Play(self.next_id, property));
            FakeHandle {
                id: self.next_id,
                journal: Rc::clone(&self.journal),
                live: Rc::clone(&self.live),
            }
        }
    }

    pub(crate) struct FakeElement {
        pub(crate) journal: Journal,
    }

    impl PreviewElement for FakeElement {
        fn suspend_transitions(&mut self) {
            self.journal.borrow_mut().push(Event::Suspend);
        }

        fn restore(&mut self, _rest: &RestStyle) {
            self.journal.borrow_mut().push(Event::Restore);
        }
    }

    /// Engine and element sharing one journal.
    pub(crate) fn fake_parts() -> (FakeEngine, FakeElement) {
        let engine = FakeEngine::default();
        let element = FakeElement {
            journal: Rc::clone(&engine.journal),
        };
        (engine, element)
    }

    fn fake_controller() -> PlaybackController<FakeEngine, FakeElement> {
        let (engine, element) = fake_parts();
        PlaybackController::new(engine, element, RestStyle::default())
    }

    fn descriptor(property: AnimatedProperty) -> AnimationDescriptor {
        AnimationDescriptor {
            target: "#previewElement".to_owned(),
            property: Choice::Known(property),
            keyframes: Keyframes::new("0px", "100px"),
            duration_ms: 1000,
            delay_ms: 0,
            easing: Choice::Known(Easing::Linear),
            looping: false,
            alternate: false,
            suspend_transitions: true,
        }
    }

    #[test]
    fn starts_idle() {
        let controller = fake_controller();
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert!(controller.current().is_none());
    }

    #[test]
    fn start_resets_then_suspends_then_plays() {
        let mut controller = fake_controller();
        controller.start(&descriptor(AnimatedProperty::TranslateX));
        assert_eq!(controller.state(), PlaybackState::Playing);
        assert_eq!(
            *controller.engine().journal.borrow(),
            [
                Event::Restore,
                Event::Suspend,
                Event::Play(1, "translateX".to_owned()),
            ]
        );
    }

    #[test]
    fn second_start_supersedes_first() {
        let mut controller = fake_controller();
        controller.start(&descriptor(AnimatedProperty::TranslateX));
        controller.start(&descriptor(AnimatedProperty::Scale));

        assert_eq!(*controller.engine().live.borrow(), 1);
        let journal = controller.engine().journal.borrow();
        let pause_at = journal.iter().position(|e| *e == Event::Pause(1));
        let play_at = journal
            .iter()
            .position(|e| *e == Event::Play(2, "scale".to_owned()));
        assert!(pause_at.unwrap() < play_at.unwrap());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut controller = fake_controller();
        controller.start(&descriptor(AnimatedProperty::Rotate));
        controller.reset();
        controller.reset();
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert_eq!(*controller.engine().live.borrow(), 0);
        let pauses = controller
            .engine()
            .journal
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Pause(_)))
            .count();
        assert_eq!(pauses, 1);
    }

    #[test]
    fn reset_when_idle_is_harmless() {
        let mut controller = fake_controller();
        controller.reset();
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert_eq!(*controller.engine().journal.borrow(), [Event::Restore]);
    }

    #[test]
    fn transitions_left_alone_when_not_requested() {
        let mut controller = fake_controller();
        let mut desc = descriptor(AnimatedProperty::Opacity);
        desc.suspend_transitions = false;
        controller.start(&desc);
        assert!(!controller
            .engine()
            .journal
            .borrow()
            .contains(&Event::Suspend));
    }
}
