//! Binding renderer for nvgen.
//!
//! Takes the validated [`BindingSet`](nvgen_core::BindingSet) produced by
//! the core, feeds it to every discovered template file, and writes the
//! formatted output. All inputs for a run travel in an explicit
//! [`GenerationContext`]; nothing is read from ambient global state.

mod context;
mod renderer;

pub use context::GenerationContext;
pub use renderer::Renderer;
