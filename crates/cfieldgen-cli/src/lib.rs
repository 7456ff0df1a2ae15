//! cfieldgen-cli - Driver library behind the `cfieldgen` binary
//!
//! - [`schema`] loads schema descriptions from JSON or TOML
//! - [`assemble`] runs the field generators for every message
//! - [`logging`] installs the stderr tracing subscriber

pub mod assemble;
pub mod logging;
pub mod schema;

pub use assemble::{GeneratedFile, assemble_file, check_file, failure_headline};
pub use schema::{SchemaFile, load_options};
