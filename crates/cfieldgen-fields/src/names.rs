//! Per-field symbol resolution

use cfieldgen_core::{FieldMetadata, GenerationOptions};
use cfieldgen_emit::Variables;
use cfieldgen_emit::naming::{default_value_symbol, field_deprecated, field_name};

/// Symbols derived once from a field and its file options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNames {
    /// Struct member name
    pub name: String,

    /// Global symbol holding the default value
    pub default: String,

    /// Annotation following declarations, empty unless deprecated
    pub deprecated: &'static str,
}

impl ResolvedNames {
    pub fn resolve(field: &FieldMetadata, options: &GenerationOptions) -> Self {
        Self {
            name: field_name(&field.name),
            default: default_value_symbol(field, options),
            deprecated: field_deprecated(field),
        }
    }

    /// Template variables `name`, `default`, and `deprecated`
    pub fn variables(&self) -> Variables {
        [
            ("name", self.name.as_str()),
            ("default", self.default.as_str()),
            ("deprecated", self.deprecated),
        ]
        .into_iter()
        .collect()
    }
}
