//! Dispatch over the implemented field kinds

use crate::string_field::StringFieldGenerator;
use cfieldgen_core::{CodegenError, CodegenResult, FieldKind, FieldMetadata, GenerationOptions};

/// A field generator of any implemented kind.
///
/// Each variant exposes the same five operations; callers invoke them in
/// order: struct members, default declaration, default definition,
/// static initializer, descriptor entry.
#[derive(Debug, Clone)]
pub enum FieldGenerator<'a> {
    String(StringFieldGenerator<'a>),
}

impl<'a> FieldGenerator<'a> {
    /// Select the generator for `field`'s wire type
    pub fn for_field(field: &'a FieldMetadata, options: &GenerationOptions) -> CodegenResult<Self> {
        match field.kind {
            FieldKind::String => Ok(FieldGenerator::String(StringFieldGenerator::new(
                field, options,
            ))),
            other => Err(CodegenError::UnsupportedFieldKind {
                field: field.full_name.clone(),
                kind: other.to_string(),
            }),
        }
    }

    pub fn field(&self) -> &FieldMetadata {
        match self {
            FieldGenerator::String(g) => g.field(),
        }
    }

    pub fn generate_struct_members(&self, options: &GenerationOptions) -> CodegenResult<String> {
        match self {
            FieldGenerator::String(g) => g.generate_struct_members(options),
        }
    }

    pub fn generate_default_value_declaration(&self) -> CodegenResult<String> {
        match self {
            FieldGenerator::String(g) => g.generate_default_value_declaration(),
        }
    }

    pub fn generate_default_value_definition(&self) -> CodegenResult<String> {
        match self {
            FieldGenerator::String(g) => g.generate_default_value_definition(),
        }
    }

    pub fn generate_static_initializer(&self, options: &GenerationOptions) -> CodegenResult<String> {
        match self {
            FieldGenerator::String(g) => g.generate_static_initializer(options),
        }
    }

    pub fn generate_descriptor_entry(&self, options: &GenerationOptions) -> CodegenResult<String> {
        match self {
            FieldGenerator::String(g) => g.generate_descriptor_entry(options),
        }
    }
}
