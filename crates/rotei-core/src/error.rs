//! Error types and exit codes for rotei
//!
//! The search engine itself never fails: unreachable routes and capped
//! searches come back as values. These errors cover the layers around it:
//! catalogue and config loading, caller-side waypoint checks, and the CLI.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad catalogue, unknown or unconnected waypoint, no route)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad catalogue, missing route (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around route calculation
#[derive(Error, Debug)]
pub enum RoteiError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    #[error("too many via points: {count} (maximum {max})")]
    TooManyViaPoints { count: usize, max: usize },

    #[error("a route needs at least two points (got {count})")]
    TooFewPoints { count: usize },

    // Data errors (exit code 3)
    #[error("catalogue not found: {path:?}")]
    CatalogNotFound { path: PathBuf },

    #[error("invalid catalogue: {reason}")]
    InvalidCatalog { reason: String },

    #[error("unknown point: {name}")]
    UnknownNode { name: String },

    #[error("no roads are available with the current road settings")]
    EmptyGraph,

    #[error("'{point}' is not connected to any other point")]
    DisconnectedWaypoint { point: String },

    #[error("no route found from {from} to {to}")]
    NoRoute { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RoteiError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RoteiError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        RoteiError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a malformed catalogue
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        RoteiError::InvalidCatalog {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoteiError::UnknownFormat(_)
            | RoteiError::UsageError(_)
            | RoteiError::InvalidValue { .. }
            | RoteiError::Unsupported { .. }
            | RoteiError::TooManyViaPoints { .. }
            | RoteiError::TooFewPoints { .. } => ExitCode::Usage,

            RoteiError::CatalogNotFound { .. }
            | RoteiError::InvalidCatalog { .. }
            | RoteiError::UnknownNode { .. }
            | RoteiError::EmptyGraph
            | RoteiError::DisconnectedWaypoint { .. }
            | RoteiError::NoRoute { .. } => ExitCode::Data,

            RoteiError::Io(_)
            | RoteiError::Json(_)
            | RoteiError::Toml(_)
            | RoteiError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RoteiError::UnknownFormat(_) => "unknown_format",
            RoteiError::UsageError(_) => "usage_error",
            RoteiError::InvalidValue { .. } => "invalid_value",
            RoteiError::Unsupported { .. } => "unsupported",
            RoteiError::TooManyViaPoints { .. } => "too_many_via_points",
            RoteiError::TooFewPoints { .. } => "too_few_points",
            RoteiError::CatalogNotFound { .. } => "catalog_not_found",
            RoteiError::InvalidCatalog { .. } => "invalid_catalog",
            RoteiError::UnknownNode { .. } => "unknown_node",
            RoteiError::EmptyGraph => "empty_graph",
            RoteiError::DisconnectedWaypoint { .. } => "disconnected_waypoint",
            RoteiError::NoRoute { .. } => "no_route",
            RoteiError::Io(_) => "io_error",
            RoteiError::Json(_) => "json_error",
            RoteiError::Toml(_) => "toml_error",
            RoteiError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for rotei operations
pub type Result<T> = std::result::Result<T, RoteiError>;
