//! Invoking the host binary for its API description.

use std::{path::Path, process::Command};

use crate::{
    error::{Error, Result},
    manifest::ApiManifest,
};

/// Flag the host understands as "describe your API on stdout and exit".
const API_INFO_FLAG: &str = "--api-info";

/// Run `<program> --api-info` and decode its stdout into an [`ApiManifest`].
///
/// Any spawn failure, nonzero exit, or decode failure is fatal; there is no
/// retry and no partial-manifest recovery.
pub fn query_api_info(program: &Path) -> Result<ApiManifest> {
    let output = Command::new(program)
        .arg(API_INFO_FLAG)
        .output()
        .map_err(|source| {
            Box::new(Error::Spawn {
                program: program.display().to_string(),
                source,
            })
        })?;

    if !output.status.success() {
        return Err(Box::new(Error::HostQuery {
            program: program.display().to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }));
    }

    let mut bytes = &output.stdout[..];
    let value = rmpv::decode::read_value(&mut bytes)
        .map_err(|source| Box::new(Error::Decode { source }))?;

    ApiManifest::from_value(&value)
}
