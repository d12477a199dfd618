//! Built-in SPAR# lookup tables.
//!
//! Two editions ship with the crate. [`Edition::Current`] uses bare
//! `SPARnnnnn` IDs and is the default. [`Edition::Legacy`] keeps the earlier
//! descriptive codes (`SPAR-80-8400-10-106-T200`) and the 8500 `exit_only`
//! branch that the wizard no longer reaches.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::*;
use crate::types::LookupKey;

/// A single row of a compiled-in table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableEntry {
    pub key: LookupKey,
    pub code: &'static str,
}

/// Which table a [`LookupTable`] was built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edition {
    #[default]
    Current,
    Legacy,
    /// Loaded from a table document or built from arbitrary rows.
    Custom,
}

impl Edition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Edition::Current => "current",
            Edition::Legacy => "legacy",
            Edition::Custom => "custom",
        }
    }
}

const fn a(
    function: Function,
    aux_latch: AuxLatch,
    thickness: Thickness,
    code: &'static str,
) -> TableEntry {
    TableEntry {
        key: LookupKey::A {
            series: Series::S80,
            function,
            aux_latch,
            thickness,
        },
        code,
    }
}

const fn b(function: Function, thickness: Thickness, code: &'static str) -> TableEntry {
    TableEntry {
        key: LookupKey::B {
            series: Series::S80,
            function,
            thickness,
        },
        code,
    }
}

use AuxLatch::{No, Yes};
use Function::{AllOther, ExitOnly};
use Thickness::{Two, TwoNineSixteenths as TwoNine};

/// Current edition. Keys without a confirmed bare ID keep their descriptive
/// code until one is issued; `validate_table` reports the mixed formats.
pub static CURRENT_TABLE: &[TableEntry] = &[
    a(ExitOnly, Yes, Two, "SPAR10091"),
    a(ExitOnly, Yes, TwoNine, "SPAR10068"),
    a(ExitOnly, No, Two, "SPAR-80-8400-10-N106-T200"),
    a(ExitOnly, No, TwoNine, "SPAR-80-8400-10-N106-T256"),
    a(AllOther, Yes, Two, "SPAR-80-8400-AF-106-T200"),
    a(AllOther, Yes, TwoNine, "SPAR-80-8400-AF-106-T256"),
    a(AllOther, No, Two, "SPAR-80-8400-AF-N106-T200"),
    a(AllOther, No, TwoNine, "SPAR10063"),
    b(AllOther, Two, "SPAR10080"),
    b(AllOther, TwoNine, "SPAR-80-8500-AF-T256"),
];

pub static LEGACY_TABLE: &[TableEntry] = &[
    a(ExitOnly, Yes, Two, "SPAR-80-8400-10-106-T200"),
    a(ExitOnly, Yes, TwoNine, "SPAR-80-8400-10-106-T256"),
    a(ExitOnly, No, Two, "SPAR-80-8400-10-N106-T200"),
    a(ExitOnly, No, TwoNine, "SPAR-80-8400-10-N106-T256"),
    a(AllOther, Yes, Two, "SPAR-80-8400-AF-106-T200"),
    a(AllOther, Yes, TwoNine, "SPAR-80-8400-AF-106-T256"),
    a(AllOther, No, Two, "SPAR-80-8400-AF-N106-T200"),
    a(AllOther, No, TwoNine, "SPAR-80-8400-AF-N106-T256"),
    b(ExitOnly, Two, "SPAR-80-8500-10-T200"),
    b(ExitOnly, TwoNine, "SPAR-80-8500-10-T256"),
    b(AllOther, Two, "SPAR-80-8500-AF-T200"),
    b(AllOther, TwoNine, "SPAR-80-8500-AF-T256"),
];

/// An immutable mapping from complete lookup keys to codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTable {
    edition: Edition,
    entries: BTreeMap<LookupKey, String>,
}

impl LookupTable {
    /// A compiled-in table. `Edition::Custom` has no built-in rows.
    pub fn builtin(edition: Edition) -> LookupTable {
        let rows: &[TableEntry] = match edition {
            Edition::Current => CURRENT_TABLE,
            Edition::Legacy => LEGACY_TABLE,
            Edition::Custom => &[],
        };
        LookupTable {
            edition,
            entries: rows
                .iter()
                .map(|row| (row.key, row.code.to_string()))
                .collect(),
        }
    }

    pub fn current() -> LookupTable {
        Self::builtin(Edition::Current)
    }

    pub fn legacy() -> LookupTable {
        Self::builtin(Edition::Legacy)
    }

    /// Build a table from arbitrary rows. Later rows replace earlier ones.
    pub fn from_entries<I>(edition: Edition, entries: I) -> LookupTable
    where
        I: IntoIterator<Item = (LookupKey, String)>,
    {
        LookupTable {
            edition,
            entries: entries.into_iter().collect(),
        }
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn get(&self, key: &LookupKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Rows in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&LookupKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::current()
    }
}

/// Every key a user can reach by following the availability policy to the end.
///
/// Path B keys always carry the path's fixed function.
pub fn reachable_keys() -> Vec<LookupKey> {
    let mut keys = Vec::new();
    for &series in Series::ALL {
        for &function in Function::ALL {
            for &aux_latch in AuxLatch::ALL {
                for &thickness in Thickness::ALL {
                    keys.push(LookupKey::A {
                        series,
                        function,
                        aux_latch,
                        thickness,
                    });
                }
            }
        }
        if let Some(function) = Path::B.fixed_function() {
            for &thickness in Thickness::ALL {
                keys.push(LookupKey::B {
                    series,
                    function,
                    thickness,
                });
            }
        }
    }
    keys
}
