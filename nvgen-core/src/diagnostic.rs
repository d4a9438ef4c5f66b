//! Diagnostic values collected while building bindings.
//!
//! Non-fatal findings (skipped functions, unrecognized manifest keys) are
//! collected as values and printed by the caller, keeping the core free of
//! I/O.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A fatal finding that prevents further processing.
    Error,
    /// A finding that doesn't stop generation but should be addressed.
    Warning,
}

impl Severity {
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message produced while building a binding set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Optional location in the manifest (e.g. `functions.buffer_get_line`).
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            location: None,
        }
    }

    /// Add a manifest location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {location})")?;
        }
        Ok(())
    }
}
