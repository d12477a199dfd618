//! YAML table documents → [`LookupTable`].
//!
//! A table document nests codes by key segment, in path order:
//!
//! ```yaml
//! edition: custom
//! codes:
//!   "80":
//!     "8400":
//!       exit_only:
//!         "yes":
//!           "2": SPAR10091
//!     "8500":
//!       all_other:
//!         "2": SPAR10080
//! ```
//!
//! 8400 branches carry an `auxLatch` level; 8500 branches do not.
//!
//! `edition` defaults to `custom`. A document that names `current` or
//! `legacy` must carry exactly that built-in table's rows.

use serde_json::{Map, Value};

use crate::enums::*;
use crate::error::{ParseError, ParseErrorKind};
use crate::table::{Edition, LookupTable};
use crate::types::LookupKey;

/// Parse a YAML string into an unvalidated table.
///
/// Checks structure and segment names only; coverage is checked by
/// [`validate_table`](crate::validate::validate_table).
pub fn parse_table(input: &str) -> Result<LookupTable, ParseError> {
    if input.trim().is_empty() {
        return Err(error(ParseErrorKind::Syntax, "empty input", None));
    }

    let value: Value = serde_saphyr::from_str(input)
        .map_err(|e| error(ParseErrorKind::Syntax, e.to_string(), None))?;

    let Some(root) = value.as_object() else {
        return Err(error(
            ParseErrorKind::TypeMismatch,
            "document root must be a YAML mapping",
            None,
        ));
    };

    for key in root.keys() {
        if !matches!(key.as_str(), "edition" | "codes") {
            return Err(error(
                ParseErrorKind::TypeMismatch,
                format!("unknown top-level field: {}", key),
                Some(key.clone()),
            ));
        }
    }

    let edition = match root.get("edition") {
        None => Edition::Custom,
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
            error(
                ParseErrorKind::TypeMismatch,
                e.to_string(),
                Some("edition".to_string()),
            )
        })?,
    };

    let codes = root.get("codes").ok_or_else(|| {
        error(
            ParseErrorKind::MissingSegment,
            "missing required field: codes",
            None,
        )
    })?;

    let mut entries = Vec::new();
    for (series_name, devices) in branch(codes, "codes")? {
        let series_path = format!("codes.{}", series_name);
        let series: Series = segment(series_name, Field::Series, &series_path)?;
        for (device_name, functions) in branch(devices, &series_path)? {
            let device_path = format!("{}.{}", series_path, device_name);
            let device: Device = segment(device_name, Field::Device, &device_path)?;
            for (function_name, rest) in branch(functions, &device_path)? {
                let function_path = format!("{}.{}", device_path, function_name);
                let function: Function = segment(function_name, Field::Function, &function_path)?;
                match device {
                    Device::D8400 => {
                        for (aux_name, thicknesses) in branch(rest, &function_path)? {
                            let aux_path = format!("{}.{}", function_path, aux_name);
                            let aux_latch: AuxLatch = segment(aux_name, Field::AuxLatch, &aux_path)?;
                            for (thickness, code) in leaves(thicknesses, &aux_path)? {
                                entries.push((
                                    LookupKey::A {
                                        series,
                                        function,
                                        aux_latch,
                                        thickness,
                                    },
                                    code,
                                ));
                            }
                        }
                    }
                    Device::D8500 => {
                        for (thickness, code) in leaves(rest, &function_path)? {
                            entries.push((
                                LookupKey::B {
                                    series,
                                    function,
                                    thickness,
                                },
                                code,
                            ));
                        }
                    }
                }
            }
        }
    }

    let table = LookupTable::from_entries(edition, entries);
    if edition != Edition::Custom && table != LookupTable::builtin(edition) {
        return Err(error(
            ParseErrorKind::EditionMismatch,
            format!(
                "rows differ from the built-in {} table; use `edition: custom`",
                edition.as_str()
            ),
            Some("edition".to_string()),
        ));
    }
    Ok(table)
}

fn error(kind: ParseErrorKind, message: impl Into<String>, path: Option<String>) -> ParseError {
    ParseError {
        kind,
        message: message.into(),
        path,
    }
}

fn branch<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ParseError> {
    value.as_object().ok_or_else(|| {
        error(
            ParseErrorKind::TypeMismatch,
            "expected a mapping of key segments",
            Some(path.to_string()),
        )
    })
}

fn segment<T: std::str::FromStr>(name: &str, field: Field, path: &str) -> Result<T, ParseError> {
    name.parse().map_err(|_| {
        error(
            ParseErrorKind::UnknownSegment,
            format!("unknown {} {:?}", field, name),
            Some(path.to_string()),
        )
    })
}

/// The thickness level: each value must be a code string.
fn leaves(value: &Value, path: &str) -> Result<Vec<(Thickness, String)>, ParseError> {
    let mut out = Vec::new();
    for (name, code) in branch(value, path)? {
        let leaf_path = format!("{}.{}", path, name);
        let thickness: Thickness = segment(name, Field::Thickness, &leaf_path)?;
        let Some(code) = code.as_str() else {
            return Err(error(
                ParseErrorKind::TypeMismatch,
                "expected a code string",
                Some(leaf_path),
            ));
        };
        out.push((thickness, code.to_string()));
    }
    Ok(out)
}
