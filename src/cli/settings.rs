//! Typed per-command option sets
//!
//! Each command declares its options as a list of `FieldSpec`s; the
//! dispatcher binds raw argument tokens onto a fresh `SettingsModel` per
//! invocation.

use std::collections::HashMap;

/// The kind of value an option carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Takes a string value token
    Text,
    /// Presence flag, consumes no value token
    Flag,
}

/// Metadata for one command option
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name, doubling as the long alias
    pub name: String,
    /// Optional single-character short alias
    pub short: Option<char>,
    /// Value kind
    pub kind: FieldKind,
    /// Default value for text fields
    pub default: Option<String>,
    /// Whether binding fails when the field is not supplied
    pub required: bool,
    /// Help text
    pub help: String,
}

impl FieldSpec {
    /// A text-valued option
    pub fn text(name: &str) -> Self {
        FieldSpec {
            name: name.to_string(),
            short: None,
            kind: FieldKind::Text,
            default: None,
            required: false,
            help: String::new(),
        }
    }

    /// A presence-flag option
    pub fn flag(name: &str) -> Self {
        FieldSpec {
            name: name.to_string(),
            short: None,
            kind: FieldKind::Flag,
            default: None,
            required: false,
            help: String::new(),
        }
    }

    /// Set the short alias
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Set the default value
    pub fn default_value(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the help text
    pub fn help(mut self, help: &str) -> Self {
        self.help = help.to_string();
        self
    }
}

/// A bound option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Text(String),
    Flag(bool),
}

/// A command's bound option values, constructed fresh per invocation.
/// Text fields without a default and without an explicit argument stay
/// unset; flags are always present.
#[derive(Debug, Clone, Default)]
pub struct SettingsModel {
    values: HashMap<String, SettingValue>,
}

impl SettingsModel {
    /// Create an empty model
    pub fn new() -> Self {
        SettingsModel {
            values: HashMap::new(),
        }
    }

    /// Set a text value
    pub fn set_text(&mut self, name: &str, value: String) {
        self.values.insert(name.to_string(), SettingValue::Text(value));
    }

    /// Set a flag value
    pub fn set_flag(&mut self, name: &str, value: bool) {
        self.values.insert(name.to_string(), SettingValue::Flag(value));
    }

    /// Get a text value, if set
    pub fn get_text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(SettingValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Get a flag value (unset flags read as false)
    pub fn get_flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(SettingValue::Flag(true)))
    }

    /// Whether a field has any bound value
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}
