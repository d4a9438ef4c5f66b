//! Core mapping engine for nvgen.
//!
//! This crate turns the host's decoded API manifest into renderable binding
//! models: the type mapper classifies manifest type names into native Rust
//! forms, the function model builds typed signatures on top of it, and the
//! driver aggregates the valid functions plus the extension type table for
//! the renderer. Everything here is a pure, synchronous computation over its
//! input; failures are values, never prints.

mod bindings;
mod diagnostic;
mod function;
mod type_mapper;

pub use bindings::{BindingSet, build_bindings};
pub use diagnostic::{Diagnostic, Severity};
pub use function::{Function, Parameter};
pub use type_mapper::{NativeType, Side, UnsupportedType, resolve};
