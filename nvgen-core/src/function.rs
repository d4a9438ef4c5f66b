//! Function model built on top of the type mapper.

use nvgen_manifest::FunctionDecl;
use serde::Serialize;

use crate::type_mapper::{NativeType, UnsupportedType};

/// Prefix reserved for free functions on the global namespace. Functions
/// outside it take their receiver as the first declared parameter.
const GLOBAL_PREFIX: &str = "vim";

/// Token appended to signature views of functions the host marks fallible.
const FAIL_MARKER: &str = "!fails";

/// A typed function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub ty: NativeType,
}

impl Parameter {
    fn resolve(api_type: &str, name: &str) -> Result<Self, UnsupportedType> {
        Ok(Self {
            name: name.to_string(),
            ty: NativeType::resolve(api_type)?,
        })
    }
}

/// A fully resolved API function, ready for rendering.
///
/// Construction is all-or-nothing: the first unresolvable type abandons the
/// entry, so a `Function` never carries partially resolved state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    /// Manifest name, e.g. `buffer_get_line`.
    pub name: String,
    /// True when the first declared parameter is an implicit receiver.
    pub ext: bool,
    /// Parameters with the receiver already stripped.
    pub parameters: Vec<Parameter>,
    pub return_type: NativeType,
    pub argcount: usize,
    pub can_fail: bool,
    /// Pre-rendered `name: reference_type, ...` list for templates.
    pub argstring: String,
}

impl Function {
    /// Build a function model from one manifest entry.
    ///
    /// The instance-method classification keys off the name alone; the
    /// manifest carries no explicit receiver flag, and the host's own
    /// bindings depend on this exact convention.
    pub fn build(decl: &FunctionDecl) -> Result<Self, UnsupportedType> {
        let ext = !decl.name.starts_with(GLOBAL_PREFIX);

        // Return type first; a failure here means no parameter is processed.
        let return_type = NativeType::resolve(&decl.return_type)?;

        let declared = if ext {
            decl.parameters.get(1..).unwrap_or(&[])
        } else {
            &decl.parameters[..]
        };
        let mut parameters = Vec::with_capacity(declared.len());
        for param in declared {
            parameters.push(Parameter::resolve(&param.api_type, &param.name)?);
        }

        let argstring = parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty.reference))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Self {
            name: decl.name.clone(),
            ext,
            argcount: parameters.len(),
            parameters,
            return_type,
            can_fail: decl.can_fail,
            argstring,
        })
    }

    /// Signature view echoing manifest type names. Diagnostic output only.
    pub fn signature(&self) -> String {
        self.render_signature(|p| p.ty.api_type.as_str(), &self.return_type.api_type)
    }

    /// Signature view echoing native reference types. Diagnostic output only.
    pub fn real_signature(&self) -> String {
        self.render_signature(|p| p.ty.reference.as_str(), &self.return_type.reference)
    }

    fn render_signature<'a>(
        &'a self,
        param_type: impl Fn(&'a Parameter) -> &'a str,
        return_type: &str,
    ) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| format!("{} {}", param_type(p), p.name))
            .collect::<Vec<_>>()
            .join(", ");
        let notes = if self.can_fail { FAIL_MARKER } else { "" };
        format!("{} {}({}) {}", return_type, self.name, params, notes)
    }
}
