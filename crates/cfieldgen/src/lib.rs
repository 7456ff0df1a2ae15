//! # cfieldgen
//!
//! Field code generators for C message structs in the protobuf-c layout.
//!
//! Given the metadata of one message field and the file's generation
//! options, a generator emits the fragments the enclosing message needs:
//! its struct members, its default value declaration and definition, its
//! static initializer, and its row in the runtime field descriptor table.
//!
//! ## Example
//!
//! ```
//! use cfieldgen::prelude::*;
//!
//! let field = FieldMetadata::new(
//!     "label",
//!     1,
//!     FieldKind::String,
//!     Cardinality::Required,
//!     SchemaVersion::Proto3,
//! );
//! let options = GenerationOptions::default();
//! let generator = FieldGenerator::for_field(&field, &options).unwrap();
//!
//! assert_eq!(generator.generate_struct_members(&options).unwrap(), "char *label;\n");
//! assert_eq!(
//!     generator.generate_static_initializer(&options).unwrap(),
//!     "(char *)protobuf_c_empty_string"
//! );
//! ```

pub use cfieldgen_core::{
    Cardinality, CodegenError, CodegenResult, FieldKind, FieldMetadata, GenerationOptions,
    LogLevel, SchemaVersion,
};
pub use cfieldgen_emit::{
    DescriptorParams, EscapeError, Printer, Variables, c_escape, c_unescape,
    generate_descriptor_initializer_generic, naming, render, sentinels,
};
pub use cfieldgen_fields::{FieldGenerator, ResolvedNames, StringFieldGenerator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Cardinality, CodegenError, CodegenResult, FieldGenerator, FieldKind, FieldMetadata,
        GenerationOptions, SchemaVersion, StringFieldGenerator,
    };
}
