//! cfieldgen-fields - Field code generators
//!
//! Each generator turns one [`FieldMetadata`](cfieldgen_core::FieldMetadata)
//! into the fragments a generated C message needs:
//!
//! 1. struct members
//! 2. the default value `extern` declaration
//! 3. the default value definition
//! 4. the static initializer snippet
//! 5. the field descriptor table row
//!
//! [`FieldGenerator`] dispatches over the implemented field kinds.

mod generator;
mod names;
mod string_field;

pub use generator::FieldGenerator;
pub use names::ResolvedNames;
pub use string_field::StringFieldGenerator;
