//! Named, immutable preset animations.
//!
//! The builtin catalog holds six presets. Catalogs can also be read from
//! TOML, one `[[preset]]` table per entry:
//!
//! ```toml
//! [[preset]]
//! name = "Pulse"
//! property = "scale"
//! keyframes = ["1", "1.2", "1"]
//! duration = 800
//! easing = "easeInOutSine"
//! loop = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::descriptor::{
    AnimatedProperty, AnimationDescriptor, Choice, Keyframes,
};
use crate::animation::easing::Easing;
use crate::error::LabError;

/// A named descriptor fragment: everything except target and delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name, also the lookup key.
    pub name: String,
    /// Animated property.
    pub property: AnimatedProperty,
    /// `[rest, peak, rest]` values.
    pub keyframes: Keyframes,
    /// Run length in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    /// Interpolation curve.
    pub easing: Easing,
    /// Repeat indefinitely.
    #[serde(default, rename = "loop")]
    pub looping: bool,
}

impl Preset {
    fn new(
        name: &str,
        property: AnimatedProperty,
        keyframes: (&str, &str),
        duration_ms: u64,
        easing: Easing,
    ) -> Self {
        Self {
            name: name.to_owned(),
            property,
            keyframes: Keyframes::new(keyframes.0, keyframes.1),
            duration_ms,
            easing,
            looping: false,
        }
    }

    fn forever(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Full descriptor for this preset aimed at `target`. Presets carry no
    /// delay and never alternate.
    #[must_use]
    pub fn descriptor(&self, target: &str) -> AnimationDescriptor {
        AnimationDescriptor {
            target: target.to_owned(),
            property: Choice::Known(self.property),
            keyframes: self.keyframes.clone(),
            duration_ms: self.duration_ms,
            delay_ms: 0,
            easing: Choice::Known(self.easing),
            looping: self.looping,
            alternate: false,
            suspend_transitions: true,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "preset")]
    presets: Vec<Preset>,
}

/// Fixed, ordered list of presets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// The reference catalog: Fade In, Slide Right, Bounce, Pulse, Rotate,
    /// Color Change.
    #[must_use]
    pub fn builtin() -> Self {
        use AnimatedProperty::{
            BackgroundColor, Opacity, Rotate, Scale, TranslateX, TranslateY,
        };
        Self {
            presets: vec![
                Preset::new(
                    "Fade In",
                    Opacity,
                    ("0", "1"),
                    800,
                    Easing::EaseInOutQuad,
                ),
                Preset::new(
                    "Slide Right",
                    TranslateX,
                    ("0px", "150px"),
                    1000,
                    Easing::EaseOutBack,
                ),
                Preset::new(
                    "Bounce",
                    TranslateY,
                    ("0px", "-50px"),
                    900,
                    Easing::EaseOutBounce,
                ),
                Preset::new(
                    "Pulse",
                    Scale,
                    ("1", "1.2"),
                    800,
                    Easing::EaseInOutSine,
                )
                .forever(),
                Preset::new(
                    "Rotate",
                    Rotate,
                    ("0deg", "360deg"),
                    1200,
                    Easing::Linear,
                ),
                Preset::new(
                    "Color Change",
                    BackgroundColor,
                    ("#4a6bff", "#ff6b6b"),
                    1000,
                    Easing::EaseInOutQuad,
                ),
            ],
        }
    }

    /// Catalog from TOML text. Entries keep their file order.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::PresetParse`] for malformed TOML, bad keyframes,
    /// or a zero duration.
    pub fn from_toml_str(content: &str) -> Result<Self, LabError> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| LabError::PresetParse(e.to_string()))?;
        if let Some(bad) = file.presets.iter().find(|p| p.duration_ms == 0) {
            return Err(LabError::PresetParse(format!(
                "preset '{}' has a zero duration",
                bad.name
            )));
        }
        Ok(Self {
            presets: file.presets,
        })
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Io`] if the file cannot be read, or
    /// [`LabError::PresetParse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, LabError> {
        let content = std::fs::read_to_string(path).map_err(LabError::Io)?;
        let catalog = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded {} presets from {}",
            catalog.presets.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Serialize the catalog to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::PresetParse`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, LabError> {
        let file = CatalogFile {
            presets: self.presets.clone(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| LabError::PresetParse(e.to_string()))
    }

    /// Presets in display order.
    #[must_use]
    pub fn list(&self) -> &[Preset] {
        &self.presets
    }

    /// Preset called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::PresetNotFound`] if no preset has that name.
    pub fn select(&self, name: &str) -> Result<&Preset, LabError> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| LabError::PresetNotFound(name.to_owned()))
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
