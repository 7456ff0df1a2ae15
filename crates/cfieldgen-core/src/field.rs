//! Field metadata as produced by the upstream descriptor model

use crate::error::CodegenError;
use serde::{Deserialize, Serialize};

/// Whether a field is required, optional, or repeated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    Required,
    Optional,
    Repeated,
}

impl Cardinality {
    /// Upper-case label name as used in `PROTOBUF_C_LABEL_*`
    pub fn label_name(&self) -> &'static str {
        match self {
            Cardinality::Required => "REQUIRED",
            Cardinality::Optional => "OPTIONAL",
            Cardinality::Repeated => "REPEATED",
        }
    }
}

/// Generation of the schema language a field was declared in
///
/// Serialized as the bare number (`2` or `3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SchemaVersion {
    Proto2,
    Proto3,
}

impl TryFrom<u8> for SchemaVersion {
    type Error = CodegenError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(SchemaVersion::Proto2),
            3 => Ok(SchemaVersion::Proto3),
            other => Err(CodegenError::Config(format!(
                "unsupported schema version: {other}"
            ))),
        }
    }
}

impl From<SchemaVersion> for u8 {
    fn from(version: SchemaVersion) -> Self {
        match version {
            SchemaVersion::Proto2 => 2,
            SchemaVersion::Proto3 => 3,
        }
    }
}

/// Wire type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Bytes,
    Bool,
    Int32,
    Sint32,
    Sfixed32,
    Int64,
    Sint64,
    Sfixed64,
    Uint32,
    Fixed32,
    Uint64,
    Fixed64,
    Float,
    Double,
    Enum,
    Message,
}

impl FieldKind {
    /// Whether repeated values of this kind may use packed encoding
    pub fn is_packable(&self) -> bool {
        !matches!(self, FieldKind::String | FieldKind::Bytes | FieldKind::Message)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::Bytes => "bytes",
            FieldKind::Bool => "bool",
            FieldKind::Int32 => "int32",
            FieldKind::Sint32 => "sint32",
            FieldKind::Sfixed32 => "sfixed32",
            FieldKind::Int64 => "int64",
            FieldKind::Sint64 => "sint64",
            FieldKind::Sfixed64 => "sfixed64",
            FieldKind::Uint32 => "uint32",
            FieldKind::Fixed32 => "fixed32",
            FieldKind::Uint64 => "uint64",
            FieldKind::Fixed64 => "fixed64",
            FieldKind::Float => "float",
            FieldKind::Double => "double",
            FieldKind::Enum => "enum",
            FieldKind::Message => "message",
        };
        f.write_str(name)
    }
}

/// Schema-level description of one message field
///
/// Read-only to the generators; the schema model that produces it has
/// already rejected malformed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Short field name as written in the schema
    pub name: String,

    /// Fully-qualified name, e.g. `pkg.Message.field`
    pub full_name: String,

    /// Package of the declaring file (may be empty)
    #[serde(default)]
    pub package: String,

    /// Wire tag
    pub number: u32,

    /// Wire type
    pub kind: FieldKind,

    pub cardinality: Cardinality,

    pub schema_version: SchemaVersion,

    /// Explicit default value, if the schema declares one
    #[serde(default)]
    pub default_value: Option<String>,

    #[serde(default)]
    pub deprecated: bool,

    /// Containing oneof, if any
    #[serde(default)]
    pub oneof: Option<String>,

    /// Packed encoding requested for a repeated field
    #[serde(default)]
    pub packed: bool,
}

impl FieldMetadata {
    /// Create metadata for a field with no default, oneof, or flags
    pub fn new(
        full_name: impl Into<String>,
        number: u32,
        kind: FieldKind,
        cardinality: Cardinality,
        schema_version: SchemaVersion,
    ) -> Self {
        let full_name = full_name.into();
        let name = full_name
            .rsplit('.')
            .next()
            .unwrap_or(full_name.as_str())
            .to_string();
        Self {
            name,
            full_name,
            package: String::new(),
            number,
            kind,
            cardinality,
            schema_version,
            default_value: None,
            deprecated: false,
            oneof: None,
            packed: false,
        }
    }

    /// Set the explicit default value
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set the declaring file's package
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Mark the field deprecated
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Place the field inside a oneof
    pub fn in_oneof(mut self, oneof: impl Into<String>) -> Self {
        self.oneof = Some(oneof.into());
        self
    }

    /// Request packed encoding
    pub fn packed(mut self) -> Self {
        self.packed = true;
        self
    }

    pub fn has_explicit_default(&self) -> bool {
        self.default_value.is_some()
    }

    /// Fully-qualified name of the message that declares this field
    pub fn containing_type(&self) -> &str {
        match self.full_name.rfind('.') {
            Some(idx) => &self.full_name[..idx],
            None => "",
        }
    }
}
