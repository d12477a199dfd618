//! The resolution engine: a complete selection to a SPAR# code.

use crate::enums::*;
use crate::table::LookupTable;
use crate::types::*;

/// Resolve a selection against a table.
///
/// Incomplete selections are not errors; they yield [`Resolution::Incomplete`]
/// naming the fields still missing. A complete selection with no table entry
/// yields [`Resolution::Unmapped`] and is logged as a table gap.
///
/// Deterministic: the same state and table always give the same result.
pub fn resolve(state: &SelectionState, table: &LookupTable) -> Resolution {
    let key = match lookup_key(state) {
        Ok(key) => key,
        Err(missing) => {
            tracing::trace!(?missing, "selection incomplete");
            return Resolution::Incomplete { missing };
        }
    };

    match table.get(&key) {
        Some(code) => {
            tracing::trace!(key = %key.dotted(), code, "resolved");
            Resolution::Resolved {
                code: code.to_string(),
            }
        }
        None => {
            tracing::warn!(
                key = %key.dotted(),
                edition = ?table.edition(),
                "complete selection has no table entry"
            );
            Resolution::Unmapped { key }
        }
    }
}

/// Build the lookup key for a selection, or list the fields that are unset.
///
/// Without a device the path is unknown, so only `series` and `device` are
/// reported. On Path B the path's fixed function is always used.
pub fn lookup_key(state: &SelectionState) -> Result<LookupKey, Vec<Field>> {
    let Some(device) = state.device else {
        let missing = [Field::Series, Field::Device]
            .into_iter()
            .filter(|f| !state.is_set(*f))
            .collect();
        return Err(missing);
    };

    let path = Path::for_device(device);
    let function = path.fixed_function().or(state.function);

    match (path, state.series, function, state.aux_latch, state.thickness) {
        (Path::A, Some(series), Some(function), Some(aux_latch), Some(thickness)) => {
            Ok(LookupKey::A {
                series,
                function,
                aux_latch,
                thickness,
            })
        }
        (Path::B, Some(series), Some(function), _, Some(thickness)) => Ok(LookupKey::B {
            series,
            function,
            thickness,
        }),
        _ => Err(path
            .required_fields()
            .iter()
            .copied()
            .filter(|f| match f {
                Field::Function => function.is_none(),
                other => !state.is_set(*other),
            })
            .collect()),
    }
}
