use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::enums::Field;

/// Why a field assignment was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The value is not in the field's domain.
    OutOfDomain,
    /// The value names a catalog option that is not offered yet.
    Disabled,
    /// The field is not answerable in the current state.
    Unavailable,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RejectReason::OutOfDomain => "value is outside the field's domain",
            RejectReason::Disabled => "option is not available yet",
            RejectReason::Unavailable => "field is not available in the current state",
        })
    }
}

/// Produced by `Wizard::set_field` when an assignment is rejected.
/// The selection state is unchanged whenever this is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WizardError {
    #[error("invalid value {value:?} for {field}: {reason}")]
    InvalidValue {
        field: Field,
        value: String,
        reason: RejectReason,
    },
}

/// Diagnostic severity level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A non-fatal finding produced during table validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
}

/// Error kind for table document parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
    UnknownSegment,
    MissingSegment,
    /// The document names a built-in edition but its rows differ from it.
    EditionMismatch,
}

/// Produced by `parse_table` when a table document cannot be read.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}{message}", path_prefix(.path))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

fn path_prefix(path: &Option<String>) -> String {
    path.as_deref()
        .map(|path| format!("{path}: "))
        .unwrap_or_default()
}

/// Produced by `validate_table` when a table breaks a coverage or format rule.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{rule} at {path}: {message}")]
pub struct ValidationError {
    pub rule: String,
    pub path: String,
    pub message: String,
}

/// Result of validation: errors and warnings.
#[derive(Clone, Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Serialization error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SerializeError {
    pub message: String,
}

/// Combined error type for the `load` entry point.
#[derive(Clone, Debug, Error)]
pub enum LoadError {
    #[error("Parse error: {0}")]
    Parse(ParseError),
    #[error("Validation error: {0}")]
    Validation(ValidationError),
}
