//! Driver aggregating function models into a renderable binding set.

use indexmap::IndexMap;
use nvgen_manifest::ApiManifest;
use serde::Serialize;

use crate::{diagnostic::Diagnostic, function::Function};

/// Everything the renderer needs for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BindingSet {
    /// Valid functions only; entries with unresolvable types are dropped.
    pub functions: Vec<Function>,
    /// Extension type name -> msgpack extension tag, verbatim from the
    /// manifest, in manifest order.
    pub exttypes: IndexMap<String, u64>,
    /// Warnings collected while building; never rendered, printed by the
    /// caller.
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

/// Build a binding set from a decoded manifest.
///
/// Pure function of its input: running it twice over the same manifest
/// yields identical output. Each function with an unsupported type produces
/// exactly one warning naming the function and the type; unknown top-level
/// manifest keys produce one warning each.
pub fn build_bindings(manifest: &ApiManifest) -> BindingSet {
    let mut functions = Vec::with_capacity(manifest.functions.len());
    let mut diagnostics = Vec::new();

    for decl in &manifest.functions {
        match Function::build(decl) {
            Ok(fun) => functions.push(fun),
            Err(err) => diagnostics.push(
                Diagnostic::warning(format!(
                    "found {err} when adding function {}(), skipping",
                    decl.name
                ))
                .at(format!("functions.{}", decl.name)),
            ),
        }
    }

    let exttypes = manifest
        .types
        .iter()
        .map(|(name, decl)| (name.clone(), decl.id))
        .collect();

    for key in &manifest.unknown_keys {
        diagnostics.push(
            Diagnostic::warning(format!("unknown API info attribute '{key}'")).at(key.clone()),
        );
    }

    BindingSet {
        functions,
        exttypes,
        diagnostics,
    }
}
