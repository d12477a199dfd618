//! Selection wizard and resolution engine for SPAR# (Special Order Form) numbers.
//!
//! A consumer answers one field at a time: series, device, function,
//! auxiliary latch and door thickness. The device picks one of two paths
//! through those fields. Once every field the path needs is set, the engine
//! looks the answers up in a static table and yields a code:
//!
//! ```text
//! set_field(..) → SelectionState → availability(state) → Availability
//!                                → resolve(state, table) → Resolution
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use spar::{Field, Wizard};
//!
//! let mut wizard = Wizard::new();
//! wizard.set_field(Field::Series, "80").unwrap();
//! wizard.set_field(Field::Device, "8500").unwrap();
//! let snapshot = wizard.set_field(Field::Thickness, "2").unwrap();
//! assert_eq!(snapshot.result.code(), Some("SPAR10080"));
//! ```
//!
//! Tables can also be supplied as YAML documents:
//!
//! ```text
//! parse_table(yaml) → LookupTable → validate_table(table) → ValidationResult
//!                                 → serialize_table(table) → yaml
//! ```
//!
//! # Logging
//!
//! Mutations, rejections and table gaps are reported through [`tracing`].
//! The crate installs no subscriber.

pub mod availability;
pub mod catalog;
pub mod enums;
pub mod error;
pub mod parse;
pub mod resolve;
pub mod serialize;
pub mod table;
pub mod types;
pub mod validate;
pub mod wizard;

pub use enums::*;
pub use error::*;
pub use types::*;

// Re-export entry points at the crate root for convenience.
pub use availability::availability;
pub use parse::parse_table;
pub use resolve::resolve;
pub use serialize::serialize_table;
pub use table::{Edition, LookupTable, reachable_keys};
pub use validate::validate_table;
pub use wizard::{SharedWizard, StateObserver, SubscriptionId, Wizard, WizardBuilder, WizardOptions};

/// Result of the [`load`] convenience entry point.
#[derive(Clone, Debug)]
pub struct LoadResult {
    /// The parsed table.
    pub table: LookupTable,
    /// Non-fatal warnings produced during validation.
    pub warnings: Vec<Diagnostic>,
}

/// Convenience entry point composing parse → validate.
///
/// # Errors
///
/// Returns `Err(Vec<LoadError>)` if parsing fails or validation finds errors.
///
/// # Example
///
/// ```rust
/// let yaml = r#"
/// codes:
///   "80":
///     "8400":
///       exit_only:
///         "yes": { "2": SPAR20001, "2-9/16": SPAR20002 }
///         "no": { "2": SPAR20003, "2-9/16": SPAR20004 }
///       all_other:
///         "yes": { "2": SPAR20005, "2-9/16": SPAR20006 }
///         "no": { "2": SPAR20007, "2-9/16": SPAR20008 }
///     "8500":
///       all_other: { "2": SPAR20009, "2-9/16": SPAR20010 }
/// "#;
///
/// let loaded = spar::load(yaml).unwrap();
/// assert!(loaded.warnings.is_empty());
/// assert_eq!(loaded.table.len(), 10);
/// ```
pub fn load(input: &str) -> Result<LoadResult, Vec<LoadError>> {
    let table = parse::parse_table(input).map_err(|e| vec![LoadError::Parse(e)])?;

    let result = validate::validate_table(&table);
    if !result.errors.is_empty() {
        return Err(result
            .errors
            .into_iter()
            .map(LoadError::Validation)
            .collect());
    }

    Ok(LoadResult {
        table,
        warnings: result.warnings,
    })
}
