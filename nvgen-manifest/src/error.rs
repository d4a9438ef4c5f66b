use std::process::ExitStatus;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to launch '{program}'")]
    #[diagnostic(
        code(nvgen::spawn),
        help("make sure the host binary exists and is executable")
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program} --api-info' exited with {status}")]
    #[diagnostic(
        code(nvgen::host_query),
        help("run the command by hand to see what the host printed")
    )]
    HostQuery {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to decode API info msgpack document")]
    #[diagnostic(code(nvgen::decode))]
    Decode {
        #[source]
        source: rmpv::decode::Error,
    },

    #[error("malformed API info: {message}")]
    #[diagnostic(
        code(nvgen::malformed),
        help("the host answered with a document this generator does not understand")
    )]
    Malformed { message: String },
}

impl Error {
    /// Create a malformed-manifest error
    pub fn malformed(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Malformed {
            message: message.into(),
        })
    }
}
