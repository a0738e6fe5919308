//! Browser front-end: DOM form, preview element, anime.js, clipboard.
//!
//! Built with the `web` feature. [`mount`] binds the lab to a page that
//! provides the form controls (see [`FormField::element_id`]), the preview
//! element, the `btnAnimate` / `btnReset` / `btnCopyCode` buttons, a
//! `presetList` container, a `codeOutput` area, and the global `anime`
//! function.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::animation::controller::{
    PlaybackHandle, PreviewElement, TweenEngine,
};
use crate::animation::descriptor::AnimationDescriptor;
use crate::clipboard::{Clipboard, CopyCallback, Notice, Notifier};
use crate::error::LabError;
use crate::form::{FormField, FormFields};
use crate::lab::{AnimationLab, LabCommand};
use crate::options::{LabOptions, RestStyle};
use crate::presets::PresetCatalog;

#[wasm_bindgen]
extern "C" {
    /// Animation instance returned by anime.js.
    pub type AnimeInstance;

    #[wasm_bindgen(js_name = anime)]
    fn anime(params: &JsValue) -> AnimeInstance;

    #[wasm_bindgen(method, js_name = pause)]
    fn pause_playback(this: &AnimeInstance);
}

impl PlaybackHandle for AnimeInstance {
    fn pause(&mut self) {
        self.pause_playback();
    }
}

/// Tweening engine backed by the page's global `anime` function.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnimeEngine;

impl TweenEngine for AnimeEngine {
    type Handle = AnimeInstance;

    fn play(&mut self, descriptor: &AnimationDescriptor) -> AnimeInstance {
        let config = descriptor.tween_config().to_string();
        let params = js_sys::JSON::parse(&config).unwrap_or_else(|e| {
            log::error!("tween config is not valid JSON: {e:?}");
            JsValue::UNDEFINED
        });
        anime(&params)
    }
}

/// Form controls looked up by element id.
#[derive(Debug, Clone)]
pub struct DomForm {
    document: Document,
}

impl DomForm {
    /// Form backed by `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn input(&self, field: FormField) -> Option<HtmlInputElement> {
        self.document
            .get_element_by_id(field.element_id())?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    fn select(&self, field: FormField) -> Option<HtmlSelectElement> {
        self.document
            .get_element_by_id(field.element_id())?
            .dyn_into::<HtmlSelectElement>()
            .ok()
    }
}

impl FormFields for DomForm {
    fn value(&self, field: FormField) -> String {
        if let Some(input) = self.input(field) {
            input.value()
        } else if let Some(select) = self.select(field) {
            select.value()
        } else {
            log::warn!("no form control #{}", field.element_id());
            String::new()
        }
    }

    fn set_value(&mut self, field: FormField, value: &str) {
        if let Some(input) = self.input(field) {
            input.set_value(value);
        } else if let Some(select) = self.select(field) {
            select.set_value(value);
        }
    }

    fn is_checked(&self, field: FormField) -> bool {
        self.input(field).is_some_and(|input| input.checked())
    }

    fn set_checked(&mut self, field: FormField, checked: bool) {
        if let Some(input) = self.input(field) {
            input.set_checked(checked);
        }
    }
}

/// The animated element's inline style.
#[derive(Debug, Clone)]
pub struct DomPreview {
    element: HtmlElement,
}

impl DomPreview {
    /// Find the element matching `selector`.
    ///
    /// # Errors
    ///
    /// Fails if the selector is invalid or matches no HTML element.
    pub fn find(document: &Document, selector: &str) -> Result<Self, JsValue> {
        let element = document
            .query_selector(selector)?
            .ok_or_else(|| {
                JsValue::from_str(&format!("no element {selector}"))
            })?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("preview is not an HTML element"))?;
        Ok(Self { element })
    }

    fn set_style(&self, name: &str, value: &str) {
        if let Err(e) = self.element.style().set_property(name, value) {
            log::warn!("failed to set {name}: {e:?}");
        }
    }
}

impl PreviewElement for DomPreview {
    fn suspend_transitions(&mut self) {
        self.set_style("transition", "none");
    }

    fn restore(&mut self, rest: &RestStyle) {
        self.set_style("transform", &rest.transform);
        self.set_style("opacity", &rest.opacity);
        self.set_style("background-color", &rest.background_color);
    }
}

/// `navigator.clipboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NavigatorClipboard;

impl Clipboard for NavigatorClipboard {
    fn write_text(&self, text: &str, done: CopyCallback) {
        let Some(window) = web_sys::window() else {
            done(Err(LabError::Clipboard("no global window".to_owned())));
            return;
        };
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| LabError::Clipboard(format!("{e:?}")));
            done(result);
        });
    }
}

/// Blocking `alert()` notices.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        let shown = web_sys::window()
            .is_some_and(|w| w.alert_with_message(&notice.message()).is_ok());
        if !shown {
            log::warn!("{}", notice.message());
        }
    }
}

type WebLab = AnimationLab<DomForm, AnimeEngine, DomPreview>;

/// Run `command` and refresh the code area.
fn dispatch(
    lab: &RefCell<WebLab>,
    document: &Document,
    command: &LabCommand,
) {
    let mut lab = lab.borrow_mut();
    if let Err(e) = lab.execute(command, &NavigatorClipboard) {
        log::error!("{e}");
    }
    if let Some(output) = document.get_element_by_id("codeOutput") {
        output.set_text_content(Some(lab.code()));
    }
}

/// Dispatch `command` whenever `id` fires `event`.
fn listen(
    lab: &Rc<RefCell<WebLab>>,
    document: &Document,
    id: &str,
    event: &str,
    command: impl Fn() -> LabCommand + 'static,
) -> Result<(), JsValue> {
    let Some(target) = document.get_element_by_id(id) else {
        log::warn!("no element #{id}, {event} not wired");
        return Ok(());
    };
    let lab = Rc::clone(lab);
    let doc = document.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        dispatch(&lab, &doc, &command());
    });
    target.add_event_listener_with_callback(
        event,
        handler.as_ref().unchecked_ref(),
    )?;
    handler.forget();
    Ok(())
}

/// Fill `presetList` with one clickable entry per preset.
fn render_presets(
    lab: &Rc<RefCell<WebLab>>,
    document: &Document,
) -> Result<(), JsValue> {
    let Some(list) = document.get_element_by_id("presetList") else {
        log::warn!("no #presetList, presets not rendered");
        return Ok(());
    };
    list.set_inner_html("");
    let names: Vec<String> = lab
        .borrow()
        .catalog()
        .list()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    for name in names {
        let item = document.create_element("div")?;
        item.set_class_name("preset-item");
        item.set_text_content(Some(&name));
        let _ = list.append_child(&item)?;

        let lab = Rc::clone(lab);
        let doc = document.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            let command = LabCommand::ApplyPreset { name: name.clone() };
            dispatch(&lab, &doc, &command);
        });
        item.add_event_listener_with_callback(
            "click",
            handler.as_ref().unchecked_ref(),
        )?;
        handler.forget();
    }
    Ok(())
}

/// Bind the lab to the current page.
///
/// # Errors
///
/// Fails if the window, document, preview element, or any control is
/// missing.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let options = LabOptions::default();
    let preview = DomPreview::find(&document, &options.target)?;
    let lab = AnimationLab::new(
        options,
        DomForm::new(document.clone()),
        AnimeEngine,
        preview,
        PresetCatalog::builtin(),
        Rc::new(AlertNotifier),
    );
    let lab = Rc::new(RefCell::new(lab));
    lab.borrow_mut().init();

    render_presets(&lab, &document)?;
    listen(&lab, &document, "btnAnimate", "click", || LabCommand::Animate)?;
    listen(&lab, &document, "btnReset", "click", || LabCommand::Reset)?;
    listen(&lab, &document, "btnCopyCode", "click", || {
        LabCommand::CopyCode
    })?;

    let form = DomForm::new(document.clone());
    let type_id = FormField::AnimationType.element_id();
    listen(&lab, &document, type_id, "change", move || {
        LabCommand::ChangeType {
            animation_type: form.value(FormField::AnimationType),
        }
    })?;

    log::info!("motion-lab mounted");
    Ok(())
}
