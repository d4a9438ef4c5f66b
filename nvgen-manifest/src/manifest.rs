//! Decoded shape of the host's `--api-info` document.

use indexmap::IndexMap;
use rmpv::Value;

use crate::error::{Error, Result};

/// One `[type, name]` pair from a function's parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDecl {
    /// Type name as the host declared it (e.g. `Integer`, `ArrayOf(String)`).
    pub api_type: String,
    /// Parameter name.
    pub name: String,
}

/// One entry of the manifest's `functions` sequence.
///
/// Entry keys beyond the ones modeled here (`since`, `method`, ...) are
/// ignored; the generator only consumes what it maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<ParameterDecl>,
    /// Defaults to false when the host omits the key.
    pub can_fail: bool,
}

/// One entry of the manifest's `types` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtTypeDecl {
    /// msgpack extension type tag.
    pub id: u64,
}

/// One entry of the manifest's `error_types` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorTypeDecl {
    pub id: u64,
}

/// The full decoded API manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiManifest {
    pub functions: Vec<FunctionDecl>,
    /// Extension type name -> declaration, in manifest order.
    pub types: IndexMap<String, ExtTypeDecl>,
    /// Error type name -> declaration, in manifest order.
    pub error_types: IndexMap<String, ErrorTypeDecl>,
    /// Top-level keys outside the known set. Tolerated, reported by the
    /// driver, never fatal.
    pub unknown_keys: Vec<String>,
}

impl ApiManifest {
    /// Walk a decoded msgpack value into an [`ApiManifest`].
    ///
    /// `features` is recognized and skipped; any other unexpected top-level
    /// key is recorded in `unknown_keys`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let entries = value
            .as_map()
            .ok_or_else(|| Error::malformed("top-level document is not a map"))?;

        let mut manifest = ApiManifest::default();
        for (key, val) in entries {
            let key = text(key)
                .ok_or_else(|| Error::malformed("top-level key is not a string"))?;
            match key.as_str() {
                "functions" => manifest.functions = decode_functions(val)?,
                "types" => {
                    manifest.types = decode_id_table(val, "types")?
                        .into_iter()
                        .map(|(name, id)| (name, ExtTypeDecl { id }))
                        .collect();
                }
                "error_types" => {
                    manifest.error_types = decode_id_table(val, "error_types")?
                        .into_iter()
                        .map(|(name, id)| (name, ErrorTypeDecl { id }))
                        .collect();
                }
                "features" => {}
                _ => manifest.unknown_keys.push(key),
            }
        }
        Ok(manifest)
    }
}

fn decode_functions(value: &Value) -> Result<Vec<FunctionDecl>> {
    let entries = value
        .as_array()
        .ok_or_else(|| Error::malformed("'functions' is not a sequence"))?;

    entries.iter().map(decode_function).collect()
}

fn decode_function(value: &Value) -> Result<FunctionDecl> {
    let fields = value
        .as_map()
        .ok_or_else(|| Error::malformed("function entry is not a map"))?;

    let mut name = None;
    let mut return_type = None;
    let mut parameters = Vec::new();
    let mut can_fail = false;

    for (key, val) in fields {
        match text(key).as_deref() {
            Some("name") => name = text(val),
            Some("return_type") => return_type = text(val),
            Some("parameters") => parameters = decode_parameters(val)?,
            Some("can_fail") => can_fail = val.as_bool().unwrap_or(false),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| Error::malformed("function entry without a name"))?;
    let return_type = return_type
        .ok_or_else(|| Error::malformed(format!("function '{name}' has no return_type")))?;

    Ok(FunctionDecl {
        name,
        return_type,
        parameters,
        can_fail,
    })
}

fn decode_parameters(value: &Value) -> Result<Vec<ParameterDecl>> {
    let entries = value
        .as_array()
        .ok_or_else(|| Error::malformed("'parameters' is not a sequence"))?;

    entries
        .iter()
        .map(|pair| {
            let pair = pair
                .as_array()
                .filter(|p| p.len() == 2)
                .ok_or_else(|| Error::malformed("parameter is not a [type, name] pair"))?;
            let api_type = text(&pair[0])
                .ok_or_else(|| Error::malformed("parameter type is not a string"))?;
            let name = text(&pair[1])
                .ok_or_else(|| Error::malformed("parameter name is not a string"))?;
            Ok(ParameterDecl { api_type, name })
        })
        .collect()
}

fn decode_id_table(value: &Value, table: &str) -> Result<IndexMap<String, u64>> {
    let entries = value
        .as_map()
        .ok_or_else(|| Error::malformed(format!("'{table}' is not a map")))?;

    let mut decoded = IndexMap::with_capacity(entries.len());
    for (key, info) in entries {
        let name = text(key)
            .ok_or_else(|| Error::malformed(format!("'{table}' key is not a string")))?;
        let id = lookup_id(info).ok_or_else(|| {
            Error::malformed(format!("'{table}' entry '{name}' has no integer id"))
        })?;
        decoded.insert(name, id);
    }
    Ok(decoded)
}

/// Find the `id` field inside a type-info map.
fn lookup_id(value: &Value) -> Option<u64> {
    let fields = value.as_map()?;
    fields
        .iter()
        .find(|(key, _)| text(key).as_deref() == Some("id"))
        .and_then(|(_, id)| id.as_u64())
}

/// Decode a string leaf. Hosts encode text either as msgpack str or as raw
/// bin; bin leaves are decoded as UTF-8.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => s.as_str().map(str::to_owned),
        Value::Binary(b) => std::str::from_utf8(b).ok().map(str::to_owned),
        _ => None,
    }
}
