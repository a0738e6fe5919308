//! User actions wired to the components.
//!
//! [`AnimationLab`] is what the page (or the CLI) talks to. Each action runs
//! to completion synchronously: read the form or pick a preset, hand the
//! descriptor to the playback controller, sync the form back on the preset
//! path, and refresh the rendered code.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::animation::controller::{
    PlaybackController, PlaybackState, PreviewElement, TweenEngine,
};
use crate::animation::descriptor::AnimationDescriptor;
use crate::clipboard::{self, Clipboard, Notifier};
use crate::code;
use crate::error::LabError;
use crate::form::{
    apply_to_form, apply_type_defaults, build_from_form, FormField,
    FormFields, FormState,
};
use crate::options::LabOptions;
use crate::presets::PresetCatalog;

/// Every user-facing action of the lab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LabCommand {
    /// Build from the form and play.
    Animate,
    /// Stop playback and restore the rest style.
    Reset,
    /// Play a preset and show it in the form.
    ApplyPreset {
        /// Preset name.
        name: String,
    },
    /// The type selector changed; write that type's defaults.
    ChangeType {
        /// New selector value.
        animation_type: String,
    },
    /// Copy the rendered code to the clipboard.
    CopyCode,
}

impl LabCommand {
    /// Decode a JSON command message such as
    /// `{"action": "apply_preset", "name": "Pulse"}`.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::UnknownCommand`] for malformed JSON or an
    /// unknown `action`.
    pub fn from_json(message: &str) -> Result<Self, LabError> {
        serde_json::from_str(message)
            .map_err(|e| LabError::UnknownCommand(e.to_string()))
    }
}

/// The interactive lab: form, playback, presets, and code output.
pub struct AnimationLab<F, E, P>
where
    F: FormFields,
    E: TweenEngine,
    P: PreviewElement,
{
    options: LabOptions,
    form: F,
    controller: PlaybackController<E, P>,
    catalog: PresetCatalog,
    notifier: Rc<dyn Notifier>,
    code: String,
}

impl<F, E, P> AnimationLab<F, E, P>
where
    F: FormFields,
    E: TweenEngine,
    P: PreviewElement,
{
    /// Assemble a lab. Call [`init`](Self::init) before the first action.
    #[must_use]
    pub fn new(
        options: LabOptions,
        form: F,
        engine: E,
        element: P,
        catalog: PresetCatalog,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let controller =
            PlaybackController::new(engine, element, options.rest.clone());
        Self {
            options,
            form,
            controller,
            catalog,
            notifier,
            code: String::new(),
        }
    }

    /// Put the element at rest and fill in the defaults of the selected
    /// type.
    pub fn init(&mut self) {
        self.controller.reset();
        let animation_type = self.form.value(FormField::AnimationType);
        let _ = apply_type_defaults(&animation_type, &mut self.form);
        log::debug!(
            "lab ready: {} presets, type '{animation_type}'",
            self.catalog.list().len()
        );
    }

    /// Run one command. Only an unknown preset name fails; clipboard
    /// outcomes are reported through the notifier instead.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::PresetNotFound`] when an `ApplyPreset` names a
    /// preset the catalog does not have.
    pub fn execute<C: Clipboard + ?Sized>(
        &mut self,
        command: &LabCommand,
        clipboard: &C,
    ) -> Result<(), LabError> {
        match command {
            LabCommand::Animate => {
                let _ = self.animate();
            }
            LabCommand::Reset => self.reset(),
            LabCommand::ApplyPreset { name } => {
                let _ = self.apply_preset(name)?;
            }
            LabCommand::ChangeType { animation_type } => {
                self.change_type(animation_type);
            }
            LabCommand::CopyCode => self.copy_code(clipboard),
        }
        Ok(())
    }

    /// Build a descriptor from the form, play it, and render its code.
    pub fn animate(&mut self) -> AnimationDescriptor {
        let state = FormState::read(&self.form);
        let descriptor = build_from_form(&state, &self.options);
        self.controller.start(&descriptor);
        self.code = code::render(&descriptor);
        descriptor
    }

    /// Stop playback and restore the rest style.
    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Play the preset called `name`, show it in the form, and render it.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::PresetNotFound`] for an unknown name; playback,
    /// form, and code are then left untouched.
    pub fn apply_preset(
        &mut self,
        name: &str,
    ) -> Result<AnimationDescriptor, LabError> {
        let descriptor =
            self.catalog.select(name)?.descriptor(&self.options.target);
        log::info!("Applying preset '{name}'");
        self.controller.start(&descriptor);
        let _ = apply_to_form(&descriptor, &mut self.form);
        self.code = code::render(&descriptor);
        Ok(descriptor)
    }

    /// Select `animation_type` and write its default start/end values.
    pub fn change_type(&mut self, animation_type: &str) {
        self.form.set_value(FormField::AnimationType, animation_type);
        let _ = apply_type_defaults(animation_type, &mut self.form);
    }

    /// Copy the rendered code; the outcome arrives through the notifier.
    pub fn copy_code<C: Clipboard + ?Sized>(&self, clipboard: &C) {
        clipboard::copy_code(&self.code, clipboard, Rc::clone(&self.notifier));
    }

    /// Text currently shown in the code area.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Playback state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.controller.state()
    }

    /// The playback controller.
    #[must_use]
    pub fn controller(&self) -> &PlaybackController<E, P> {
        &self.controller
    }

    /// The form.
    #[must_use]
    pub fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access to the form, for typing into it.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// The preset catalog.
    #[must_use]
    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &LabOptions {
        &self.options
    }
}
