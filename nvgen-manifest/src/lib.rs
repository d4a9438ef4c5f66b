//! Host API manifest acquisition for nvgen.
//!
//! Neovim describes its own RPC API: `nvim --api-info` writes a single
//! msgpack document to stdout listing every function, extension type, and
//! error type. This crate invokes the host binary, decodes that document,
//! and exposes it as a plain [`ApiManifest`] value that the rest of the
//! workspace can consume without knowing anything about msgpack.
// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod query;

pub use error::{Error, Result};
pub use manifest::{ApiManifest, ErrorTypeDecl, ExtTypeDecl, FunctionDecl, ParameterDecl};
pub use query::query_api_info;
