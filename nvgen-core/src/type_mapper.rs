//! Mapping between host manifest type names and native Rust types.
//!
//! Every manifest type name classifies into exactly one of three shapes:
//! a fixed scalar, an extension (opaque handle) type, or an unbounded
//! `ArrayOf(E)` sequence. Each shape resolves to two native projections: a
//! borrowed reference form for input parameters and an owned value form for
//! return values and nested elements.

use serde::Serialize;
use thiserror::Error;

/// A manifest type name that matches no known classification.
///
/// Carries the offending name verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported API type '{0}'")]
pub struct UnsupportedType(pub String);

/// Which projection of a manifest type is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Borrowed form, used for input parameters.
    Reference,
    /// Owned form, used for return values and array elements.
    Value,
}

/// Fixed scalar table: (manifest name, reference form, value form).
///
/// `String` is the only row whose two sides differ; parameters borrow the
/// text while return values own it. The asymmetry is intentional.
const SCALARS: &[(&str, &str, &str)] = &[
    ("Array", "Vec<Value>", "Vec<Value>"),
    ("ArrayOf(Integer, 2)", "(u64, u64)", "(u64, u64)"),
    ("void", "()", "()"),
    ("Integer", "u64", "u64"),
    ("Boolean", "bool", "bool"),
    ("String", "&str", "String"),
    ("Object", "Value", "Value"),
    ("Dictionary", "Vec<(Value, Value)>", "Vec<(Value, Value)>"),
];

/// Opaque handle types the host defines, identified by name and numeric id.
const EXTTYPES: &[&str] = &["Buffer", "Window", "Tabpage"];

/// Classified manifest type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApiType<'a> {
    Scalar {
        reference: &'static str,
        value: &'static str,
    },
    Ext(&'a str),
    ArrayOf(&'a str),
}

/// Classify a manifest type name, first match wins: fixed scalar table,
/// extension set, unbounded array pattern.
fn classify(name: &str) -> Result<ApiType<'_>, UnsupportedType> {
    if let Some((_, reference, value)) = SCALARS.iter().find(|(api, _, _)| *api == name) {
        Ok(ApiType::Scalar { reference, value })
    } else if EXTTYPES.contains(&name) {
        Ok(ApiType::Ext(name))
    } else if let Some(element) = unbound_element(name) {
        Ok(ApiType::ArrayOf(element))
    } else {
        Err(UnsupportedType(name.to_string()))
    }
}

/// Extract `E` from `ArrayOf(E)`. The element is a single word; surrounding
/// whitespace is tolerated. Fixed-shape aliases like `ArrayOf(Integer, 2)`
/// never reach this point because the scalar table matches first.
fn unbound_element(name: &str) -> Option<&str> {
    let inner = name.strip_prefix("ArrayOf(")?.strip_suffix(')')?.trim();
    if !inner.is_empty() && inner.chars().all(|c| c.is_alphanumeric() || c == '_') {
        Some(inner)
    } else {
        None
    }
}

/// Resolve one projection of a manifest type name.
///
/// Arrays ignore the requested side: they are always owned sequences of the
/// element's value form, even when used as a function argument.
pub fn resolve(name: &str, side: Side) -> Result<String, UnsupportedType> {
    match classify(name)? {
        ApiType::Scalar { reference, value } => Ok(match side {
            Side::Reference => reference.to_string(),
            Side::Value => value.to_string(),
        }),
        ApiType::Ext(ext) => Ok(match side {
            Side::Reference => format!("&{ext}"),
            Side::Value => ext.to_string(),
        }),
        ApiType::ArrayOf(element) => Ok(format!("Vec<{}>", resolve(element, Side::Value)?)),
    }
}

/// Both projections of a manifest type, resolved once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeType {
    /// Type name as the host declared it.
    pub api_type: String,
    /// Borrowed form used for input parameters.
    pub reference: String,
    /// Owned form used for return values.
    pub value: String,
    /// True when this is a host extension type.
    pub ext: bool,
}

impl NativeType {
    /// Resolve a manifest type name into both native forms.
    pub fn resolve(api_type: &str) -> Result<Self, UnsupportedType> {
        let ext = matches!(classify(api_type)?, ApiType::Ext(_));
        Ok(Self {
            api_type: api_type.to_string(),
            reference: resolve(api_type, Side::Reference)?,
            value: resolve(api_type, Side::Value)?,
            ext,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_sides_agree_except_text() {
        for (name, _, _) in SCALARS {
            let by_ref = resolve(name, Side::Reference).unwrap();
            let by_val = resolve(name, Side::Value).unwrap();
            if *name == "String" {
                assert_ne!(by_ref, by_val);
            } else {
                assert_eq!(by_ref, by_val, "scalar '{name}' should not depend on side");
            }
        }
    }

    #[test]
    fn test_text_scalar_borrows_by_reference() {
        assert_eq!(resolve("String", Side::Reference).unwrap(), "&str");
        assert_eq!(resolve("String", Side::Value).unwrap(), "String");
    }

    #[test]
    fn test_ext_reference_borrows_value_form() {
        for name in EXTTYPES {
            let by_val = resolve(name, Side::Value).unwrap();
            let by_ref = resolve(name, Side::Reference).unwrap();
            assert_eq!(by_val, *name);
            assert_eq!(by_ref, format!("&{by_val}"));
        }
    }

    #[test]
    fn test_unbound_array_ignores_side() {
        // Element is always the value form, even for the reference side.
        assert_eq!(
            resolve("ArrayOf(String)", Side::Reference).unwrap(),
            "Vec<String>"
        );
        assert_eq!(
            resolve("ArrayOf(String)", Side::Value).unwrap(),
            "Vec<String>"
        );
        assert_eq!(
            resolve("ArrayOf(Buffer)", Side::Reference).unwrap(),
            "Vec<Buffer>"
        );
    }

    #[test]
    fn test_unbound_array_tolerates_whitespace() {
        assert_eq!(
            resolve("ArrayOf( Window )", Side::Value).unwrap(),
            "Vec<Window>"
        );
    }

    #[test]
    fn test_fixed_pair_alias_matches_scalar_table() {
        assert_eq!(
            resolve("ArrayOf(Integer, 2)", Side::Reference).unwrap(),
            "(u64, u64)"
        );
        assert_eq!(
            resolve("ArrayOf(Integer, 2)", Side::Value).unwrap(),
            "(u64, u64)"
        );
    }

    #[test]
    fn test_unknown_type_carries_name() {
        let err = resolve("totally-unknown-type", Side::Value).unwrap_err();
        assert_eq!(err.0, "totally-unknown-type");
        let err = resolve("ArrayOf(Nope)", Side::Reference).unwrap_err();
        assert_eq!(err.0, "Nope");
    }

    #[test]
    fn test_native_type_resolves_both_sides() {
        let ty = NativeType::resolve("String").unwrap();
        assert_eq!(ty.api_type, "String");
        assert_eq!(ty.reference, "&str");
        assert_eq!(ty.value, "String");
        assert!(!ty.ext);

        let ty = NativeType::resolve("Buffer").unwrap();
        assert!(ty.ext);
        assert_eq!(ty.reference, "&Buffer");
        assert_eq!(ty.value, "Buffer");
    }
}
