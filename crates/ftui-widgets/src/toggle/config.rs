#![forbid(unsafe_code)]

//! Declarative toggle configuration.
//!
//! ```
//! use ftui_widgets::toggle::{SelectionState, ToggleConfig, ToggleController};
//!
//! let config = ToggleConfig::from_json(
//!     r#"{ "toggle_on_value": "bold", "toggle_off_value": "normal", "value": ["bold", "bold"] }"#,
//! )
//! .unwrap();
//! let toggle = ToggleController::from_config(&config).unwrap();
//! assert_eq!(toggle.selection_state(), SelectionState::On);
//! ```

use serde::{Deserialize, Serialize};

use super::content::{ContentKeys, ContentSlot};
use super::state::ToggleReference;
use super::value::{Scalar, ToggleValue};
use crate::error::ToggleError;

/// Everything a toggle widget is configured with. All fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    pub toggle_on_value: Scalar,
    pub toggle_off_value: Scalar,
    /// Initial value. Null leaves the widget selection-driven.
    pub value: ToggleValue,
    pub content_value_key: Option<String>,
    pub content_title_key: Option<String>,
    pub content_icon_key: Option<String>,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub localize: bool,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            toggle_on_value: Scalar::Bool(true),
            toggle_off_value: Scalar::Bool(false),
            value: ToggleValue::NULL,
            content_value_key: None,
            content_title_key: None,
            content_icon_key: None,
            title: None,
            icon: None,
            localize: false,
        }
    }
}

impl ToggleConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// [`ToggleError::Config`] for malformed JSON or unknown fields, or the
    /// reference validation error when on/off values do not round-trip.
    pub fn from_json(json: &str) -> Result<Self, ToggleError> {
        let config: Self = serde_json::from_str(json)?;
        config.reference().validate()?;
        Ok(config)
    }

    /// Pretty JSON form of this configuration.
    ///
    /// # Errors
    ///
    /// [`ToggleError::Config`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ToggleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn reference(&self) -> ToggleReference {
        ToggleReference::new(self.toggle_on_value.clone(), self.toggle_off_value.clone())
    }

    #[must_use]
    pub fn content_keys(&self) -> ContentKeys {
        let mut keys = ContentKeys::default();
        keys.set(ContentSlot::Value, self.content_value_key.clone());
        keys.set(ContentSlot::Title, self.content_title_key.clone());
        keys.set(ContentSlot::Icon, self.content_icon_key.clone());
        keys
    }
}
