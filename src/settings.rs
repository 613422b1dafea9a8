//! Constants used by the demos, overridable from a TOML file.

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

// =============================================================================
// Settings with defaults
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub eager_fallback: String,
    pub lazy_fallback: String,
    pub absent_message: String,
    pub bracket_open: String,
    pub bracket_close: String,
    pub bullet: String,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            eager_fallback: "I'm Eager".to_string(),
            lazy_fallback: "I'm Lazy".to_string(),
            absent_message: "absent value was given".to_string(),
            bracket_open: "<<".to_string(),
            bracket_close: ">>".to_string(),
            bullet: "* ".to_string(),
            color: true,
        }
    }
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// `value` wrapped in the configured brackets, e.g. `<<One>>`.
    pub fn bracket(&self, value: &str) -> String {
        format!("{}{}{}", self.bracket_open, value, self.bracket_close)
    }

    pub fn bulleted(&self, value: &str) -> String {
        format!("{}{}", self.bullet, value)
    }
}

// =============================================================================
// Fluent builder
// =============================================================================

/// Collects overrides; anything left unset falls back to `Settings::default()`.
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    eager_fallback: Option<String>,
    lazy_fallback: Option<String>,
    absent_message: Option<String>,
    brackets: Option<(String, String)>,
    bullet: Option<String>,
    color: Option<bool>,
}

impl SettingsBuilder {
    pub fn eager_fallback(mut self, value: impl Into<String>) -> Self {
        self.eager_fallback = Some(value.into());
        self
    }

    pub fn lazy_fallback(mut self, value: impl Into<String>) -> Self {
        self.lazy_fallback = Some(value.into());
        self
    }

    pub fn absent_message(mut self, value: impl Into<String>) -> Self {
        self.absent_message = Some(value.into());
        self
    }

    pub fn brackets(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.brackets = Some((open.into(), close.into()));
        self
    }

    pub fn bullet(mut self, value: impl Into<String>) -> Self {
        self.bullet = Some(value.into());
        self
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = Some(enabled);
        self
    }

    pub fn build(self) -> Settings {
        let defaults = Settings::default();
        let (bracket_open, bracket_close) = self
            .brackets
            .unwrap_or((defaults.bracket_open, defaults.bracket_close));

        Settings {
            eager_fallback: self.eager_fallback.unwrap_or(defaults.eager_fallback),
            lazy_fallback: self.lazy_fallback.unwrap_or(defaults.lazy_fallback),
            absent_message: self.absent_message.unwrap_or(defaults.absent_message),
            bracket_open,
            bracket_close,
            bullet: self.bullet.unwrap_or(defaults.bullet),
            color: self.color.unwrap_or(defaults.color),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
