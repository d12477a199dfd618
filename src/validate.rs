//! Table validation against coverage and format rules.
//!
//! Returns **all** errors and warnings, not just the first. Validation does not
//! modify the table. Rule codes:
//!
//! | Rule  | Severity | Meaning |
//! |-------|----------|---------|
//! | T-001 | error    | a reachable key has no entry |
//! | T-002 | error    | a code is not a SPAR# |
//! | W-001 | warning  | bare and descriptive code formats are mixed |
//! | W-002 | warning  | an entry cannot be reached by the wizard |
//! | W-003 | warning  | one code is mapped from several keys |

use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use crate::error::*;
use crate::table::{LookupTable, reachable_keys};
use crate::types::LookupKey;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static SPAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^SPAR[A-Z0-9-]+$").unwrap());

static BARE_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^SPAR[0-9]{5}$").unwrap());

static DESCRIPTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^SPAR-[0-9A-Z]+-[0-9]{4}(-[0-9A-Z]+)*-T[0-9]{3}$").unwrap()
});

/// Validate a table against every rule. Returns all errors and warnings found.
pub fn validate_table(table: &LookupTable) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    t001_reachable_coverage(table, &mut errors);
    t002_code_format(table, &mut errors);
    w001_mixed_formats(table, &mut warnings);
    w002_unreachable_entries(table, &mut warnings);
    w003_duplicate_codes(table, &mut warnings);

    ValidationResult { errors, warnings }
}

fn key_path(key: &LookupKey) -> String {
    format!("codes.{}", key.dotted())
}

fn warning(code: &str, path: Option<String>, message: String) -> Diagnostic {
    Diagnostic {
        severity: DiagnosticSeverity::Warning,
        code: code.to_string(),
        path,
        message,
    }
}

// ─── T-001: every reachable key resolves ────────────────────────────────────

fn t001_reachable_coverage(table: &LookupTable, errors: &mut Vec<ValidationError>) {
    for key in reachable_keys() {
        if table.get(&key).is_none() {
            errors.push(ValidationError {
                rule: "T-001".to_string(),
                path: key_path(&key),
                message: "reachable selection has no code".to_string(),
            });
        }
    }
}

// ─── T-002: code format ─────────────────────────────────────────────────────

fn t002_code_format(table: &LookupTable, errors: &mut Vec<ValidationError>) {
    for (key, code) in table.entries() {
        if !SPAR_RE.is_match(code) {
            errors.push(ValidationError {
                rule: "T-002".to_string(),
                path: key_path(key),
                message: format!("{:?} is not a SPAR# code", code),
            });
        }
    }
}

// ─── W-001: mixed code formats ──────────────────────────────────────────────

fn w001_mixed_formats(table: &LookupTable, warnings: &mut Vec<Diagnostic>) {
    let bare = table.entries().filter(|(_, c)| BARE_ID_RE.is_match(c)).count();
    let descriptive = table
        .entries()
        .filter(|(_, c)| DESCRIPTIVE_RE.is_match(c))
        .count();
    if bare > 0 && descriptive > 0 {
        warnings.push(warning(
            "W-001",
            None,
            format!(
                "table mixes {} bare IDs with {} descriptive codes",
                bare, descriptive
            ),
        ));
    }
}

// ─── W-002: unreachable entries ─────────────────────────────────────────────

fn w002_unreachable_entries(table: &LookupTable, warnings: &mut Vec<Diagnostic>) {
    let reachable: HashSet<LookupKey> = reachable_keys().into_iter().collect();
    for (key, _) in table.entries() {
        if !reachable.contains(key) {
            warnings.push(warning(
                "W-002",
                Some(key_path(key)),
                "entry cannot be reached through the wizard".to_string(),
            ));
        }
    }
}

// ─── W-003: duplicate codes ─────────────────────────────────────────────────

fn w003_duplicate_codes(table: &LookupTable, warnings: &mut Vec<Diagnostic>) {
    let mut by_code: BTreeMap<&str, Vec<&LookupKey>> = BTreeMap::new();
    for (key, code) in table.entries() {
        by_code.entry(code).or_default().push(key);
    }
    for (code, keys) in by_code {
        if keys.len() > 1 {
            let paths: Vec<String> = keys.iter().map(|k| k.dotted()).collect();
            warnings.push(warning(
                "W-003",
                Some(key_path(keys[0])),
                format!("code {} is mapped from {}", code, paths.join(", ")),
            ));
        }
    }
}
