//! Runtime configuration with TOML file support.
//!
//! Options cover the fixed parts of the lab: which element is animated, the
//! rest style it returns to on reset, and the fallbacks used when numeric
//! form input does not parse. Animation configurations themselves are never
//! stored here.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LabError;

/// Visual state the preview element is restored to on reset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Rest Style", inline)]
#[serde(default)]
pub struct RestStyle {
    /// CSS `transform` at rest.
    #[schemars(title = "Transform")]
    pub transform: String,
    /// CSS `opacity` at rest.
    #[schemars(title = "Opacity")]
    pub opacity: String,
    /// CSS `background-color` at rest.
    #[schemars(title = "Background Color")]
    pub background_color: String,
}

impl Default for RestStyle {
    fn default() -> Self {
        Self {
            transform: "none".to_owned(),
            opacity: "1".to_owned(),
            background_color: "#4a6bff".to_owned(),
        }
    }
}

/// Top-level options container. Uses `#[serde(default)]` so partial TOML
/// files (e.g. only overriding `[rest]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct LabOptions {
    /// Selector of the animated preview element.
    #[schemars(title = "Target")]
    pub target: String,
    /// Duration used when the duration field does not hold a positive
    /// integer.
    #[schemars(title = "Fallback Duration (ms)", range(min = 1))]
    pub fallback_duration_ms: u64,
    /// Delay used when the delay field does not hold a non-negative
    /// integer.
    #[schemars(title = "Fallback Delay (ms)")]
    pub fallback_delay_ms: u64,
    /// Style restored on reset.
    pub rest: RestStyle,
}

impl Default for LabOptions {
    fn default() -> Self {
        Self {
            target: "#previewElement".to_owned(),
            fallback_duration_ms: 1000,
            fallback_delay_ms: 0,
            rest: RestStyle::default(),
        }
    }
}

impl LabOptions {
    /// Generate JSON Schema describing the options file.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(LabOptions)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::OptionsParse`] if the TOML is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self, LabError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| LabError::OptionsParse(e.to_string()))?;
        if options.fallback_duration_ms == 0 {
            log::warn!("fallback_duration_ms must be positive, using 1000");
            options.fallback_duration_ms = 1000;
        }
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Io`] if the file cannot be read, or
    /// [`LabError::OptionsParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self, LabError> {
        let content = std::fs::read_to_string(path).map_err(LabError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = LabOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = LabOptions::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r##"
[rest]
background_color = "#222222"
"##;
        let opts = LabOptions::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.rest.background_color, "#222222");
        // Everything else should be default
        assert_eq!(opts.rest.opacity, "1");
        assert_eq!(opts.rest.transform, "none");
        assert_eq!(opts.target, "#previewElement");
        assert_eq!(opts.fallback_duration_ms, 1000);
    }

    #[test]
    fn zero_fallback_duration_is_replaced() {
        let opts =
            LabOptions::from_toml_str("fallback_duration_ms = 0").unwrap();
        assert_eq!(opts.fallback_duration_ms, 1000);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = LabOptions::from_toml_str("target = ").unwrap_err();
        assert!(matches!(err, LabError::OptionsParse(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(LabOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("target"));
        assert!(props.contains_key("rest"));
        assert!(props.contains_key("fallback_duration_ms"));
        assert!(props.contains_key("fallback_delay_ms"));
    }
}
