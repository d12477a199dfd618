//! Which fields are answerable, derived purely from the current selection.

use crate::enums::*;
use crate::types::*;

/// Compute availability from the selection.
///
/// Holds no memory of earlier calls. Diff two results (or use
/// [`StateChange::newly_available`]) to detect transitions.
pub fn availability(state: &SelectionState) -> Availability {
    let path = state.path();
    Availability {
        series: true,
        device: state.series.is_some(),
        function: path == Some(Path::A),
        aux_latch: path == Some(Path::A) && state.function.is_some(),
        thickness: match path {
            Some(Path::A) => state.aux_latch.is_some(),
            Some(Path::B) => true,
            None => false,
        },
    }
}

/// Fields that come after `field` in canonical order.
///
/// Path A's order contains Path B's, so this covers both paths and also
/// clears `auxLatch` when the device moves from 8400 to 8500.
pub(crate) fn downstream_of(field: Field) -> Vec<Field> {
    Field::ALL.into_iter().filter(|f| *f > field).collect()
}
