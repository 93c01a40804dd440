//! # Engine Settings
//!
//! Tunables for digit entry and result formatting. Settings are plain JSON;
//! every field has a default, so `{}` is a valid settings file.
//!
//! ```rust
//! use calc_core::settings::EngineSettings;
//!
//! let settings = EngineSettings::from_json(r#"{ "significant_digits": 8 }"#).unwrap();
//! assert_eq!(settings.max_input_len, 15);
//! assert_eq!(settings.significant_digits, 8);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::DEFAULT_SIGNIFICANT_DIGITS;

/// Default digit-entry length limit
pub const DEFAULT_MAX_INPUT_LEN: usize = 15;

/// Longest text the display can hold
pub const MAX_INPUT_LEN: usize = 15;

/// Largest precision whose formatted results still fit a 15-character display
pub const MAX_SIGNIFICANT_DIGITS: usize = 8;

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Longest number (in characters) that digit entry may build
    pub max_input_len: usize,

    /// Significant digits shown for computed results
    pub significant_digits: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

impl EngineSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: EngineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every field is in range.
    pub fn validate(&self) -> CalcResult<()> {
        if !(1..=MAX_INPUT_LEN).contains(&self.max_input_len) {
            return Err(CalcError::invalid_settings(
                "max_input_len",
                self.max_input_len.to_string(),
                format!("must be between 1 and {}", MAX_INPUT_LEN),
            ));
        }
        if !(1..=MAX_SIGNIFICANT_DIGITS).contains(&self.significant_digits) {
            return Err(CalcError::invalid_settings(
                "significant_digits",
                self.significant_digits.to_string(),
                format!("must be between 1 and {}", MAX_SIGNIFICANT_DIGITS),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.max_input_len, 15);
        assert_eq!(settings.significant_digits, 6);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        assert_eq!(EngineSettings::from_json("{}").unwrap(), EngineSettings::default());
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = EngineSettings::from_json(r#"{ "max_input_len": 0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTINGS");

        let err = EngineSettings::from_json(r#"{ "max_input_len": 16 }"#).unwrap_err();
        assert!(matches!(err, CalcError::InvalidSettings { ref field, .. } if field == "max_input_len"));

        let err = EngineSettings::from_json(r#"{ "significant_digits": 12 }"#).unwrap_err();
        assert!(matches!(err, CalcError::InvalidSettings { ref field, .. } if field == "significant_digits"));
    }

    #[test]
    fn test_accepts_display_width() {
        let settings = EngineSettings::from_json(r#"{ "max_input_len": 15 }"#).unwrap();
        assert_eq!(settings.max_input_len, MAX_INPUT_LEN);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = EngineSettings::from_json("{ max_input_len").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
