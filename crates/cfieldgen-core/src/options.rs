//! File-level generation options

use crate::error::CodegenResult;
use serde::{Deserialize, Serialize};

/// Generation switches declared once per schema file
///
/// Passed explicitly into every generator operation. All switches default
/// to off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Declare generated string pointers as `const char *`
    pub const_strings: bool,

    /// Replaces the schema package prefix in derived C symbol names
    pub c_package: Option<String>,

    /// Name oneof members in descriptor rows after the oneof itself
    pub use_oneof_field_name: bool,

    /// Omit field names from descriptor rows
    pub optimize_for_code_size: bool,
}

impl GenerationOptions {
    /// Create options with every switch off
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON bytes
    pub fn from_json(bytes: &[u8]) -> CodegenResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Parse options from a TOML document
    pub fn from_toml(text: &str) -> CodegenResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_const_strings(mut self, enabled: bool) -> Self {
        self.const_strings = enabled;
        self
    }

    pub fn with_c_package(mut self, package: impl Into<String>) -> Self {
        self.c_package = Some(package.into());
        self
    }
}
