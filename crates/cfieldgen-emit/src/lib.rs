//! cfieldgen-emit - Shared emission layer for field generators
//!
//! This crate provides:
//! - [`render`] and [`Printer`] for `$variable$` template substitution
//! - [`c_escape`] / [`c_unescape`] for embedding strings in C literals
//! - [`naming`] helpers deriving C identifiers from schema names
//! - [`sentinels`] naming the process-wide constants generated code refers to
//! - [`generate_descriptor_initializer_generic`] for field descriptor rows

mod descriptor;
mod escape;
pub mod naming;
mod printer;
pub mod sentinels;

pub use descriptor::{DescriptorParams, generate_descriptor_initializer_generic};
pub use escape::{EscapeError, c_escape, c_unescape};
pub use printer::{Printer, Variables, render};
