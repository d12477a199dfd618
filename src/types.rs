use serde::{Deserialize, Serialize};

use crate::enums::*;

// ─── Selection state ────────────────────────────────────────────────────────

/// The answers given so far. `None` means unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub series: Option<Series>,
    pub device: Option<Device>,
    pub function: Option<Function>,
    pub aux_latch: Option<AuxLatch>,
    pub thickness: Option<Thickness>,
}

impl SelectionState {
    pub fn is_set(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// The current value of a field, if set.
    pub fn get(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::Series => self.series.map(FieldValue::Series),
            Field::Device => self.device.map(FieldValue::Device),
            Field::Function => self.function.map(FieldValue::Function),
            Field::AuxLatch => self.aux_latch.map(FieldValue::AuxLatch),
            Field::Thickness => self.thickness.map(FieldValue::Thickness),
        }
    }

    pub(crate) fn assign(&mut self, value: FieldValue) {
        match value {
            FieldValue::Series(v) => self.series = Some(v),
            FieldValue::Device(v) => self.device = Some(v),
            FieldValue::Function(v) => self.function = Some(v),
            FieldValue::AuxLatch(v) => self.aux_latch = Some(v),
            FieldValue::Thickness(v) => self.thickness = Some(v),
        }
    }

    pub(crate) fn clear(&mut self, field: Field) {
        match field {
            Field::Series => self.series = None,
            Field::Device => self.device = None,
            Field::Function => self.function = None,
            Field::AuxLatch => self.aux_latch = None,
            Field::Thickness => self.thickness = None,
        }
    }

    /// The active path, once a device has been chosen.
    pub fn path(&self) -> Option<Path> {
        self.device.map(Path::for_device)
    }

    pub fn is_empty(&self) -> bool {
        *self == SelectionState::default()
    }
}

/// A typed assignment for a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldValue {
    Series(Series),
    Device(Device),
    Function(Function),
    AuxLatch(AuxLatch),
    Thickness(Thickness),
}

impl FieldValue {
    pub fn field(&self) -> Field {
        match self {
            FieldValue::Series(_) => Field::Series,
            FieldValue::Device(_) => Field::Device,
            FieldValue::Function(_) => Field::Function,
            FieldValue::AuxLatch(_) => Field::AuxLatch,
            FieldValue::Thickness(_) => Field::Thickness,
        }
    }

    /// The wire value, as used in lookup tables and submitted by consumers.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldValue::Series(v) => v.as_str(),
            FieldValue::Device(v) => v.as_str(),
            FieldValue::Function(v) => v.as_str(),
            FieldValue::AuxLatch(v) => v.as_str(),
            FieldValue::Thickness(v) => v.as_str(),
        }
    }

    /// Parses a wire value for `field`. Returns `None` outside the domain.
    pub fn parse(field: Field, value: &str) -> Option<FieldValue> {
        match field {
            Field::Series => value.parse().ok().map(FieldValue::Series),
            Field::Device => value.parse().ok().map(FieldValue::Device),
            Field::Function => value.parse().ok().map(FieldValue::Function),
            Field::AuxLatch => value.parse().ok().map(FieldValue::AuxLatch),
            Field::Thickness => value.parse().ok().map(FieldValue::Thickness),
        }
    }
}

// ─── Availability ───────────────────────────────────────────────────────────

/// Which fields are currently legal targets for `set_field`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub series: bool,
    pub device: bool,
    pub function: bool,
    pub aux_latch: bool,
    pub thickness: bool,
}

impl Availability {
    pub fn is_available(&self, field: Field) -> bool {
        match field {
            Field::Series => self.series,
            Field::Device => self.device,
            Field::Function => self.function,
            Field::AuxLatch => self.aux_latch,
            Field::Thickness => self.thickness,
        }
    }

    /// Available fields in path order.
    pub fn fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.is_available(*f))
            .collect()
    }
}

// ─── Resolution ─────────────────────────────────────────────────────────────

/// A fully-specified lookup key, tagged by path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "path", rename_all_fields = "camelCase")]
pub enum LookupKey {
    /// Device 8400.
    A {
        series: Series,
        function: Function,
        aux_latch: AuxLatch,
        thickness: Thickness,
    },
    /// Device 8500.
    B {
        series: Series,
        function: Function,
        thickness: Thickness,
    },
}

impl LookupKey {
    pub fn device(&self) -> Device {
        match self {
            LookupKey::A { .. } => Device::D8400,
            LookupKey::B { .. } => Device::D8500,
        }
    }

    /// Key segments in traversal order.
    pub fn segments(&self) -> Vec<&'static str> {
        match *self {
            LookupKey::A {
                series,
                function,
                aux_latch,
                thickness,
            } => vec![
                series.as_str(),
                Device::D8400.as_str(),
                function.as_str(),
                aux_latch.as_str(),
                thickness.as_str(),
            ],
            LookupKey::B {
                series,
                function,
                thickness,
            } => vec![
                series.as_str(),
                Device::D8500.as_str(),
                function.as_str(),
                thickness.as_str(),
            ],
        }
    }

    /// Dotted rendering used in diagnostics, e.g. `80.8400.exit_only.yes.2`.
    pub fn dotted(&self) -> String {
        self.segments().join(".")
    }
}

/// Outcome of resolving a selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// All fields the path requires are set and the table maps them.
    Resolved { code: String },
    /// Required fields are still unset. A normal transient state.
    Incomplete { missing: Vec<Field> },
    /// The selection is complete but the table has no entry for it.
    Unmapped { key: LookupKey },
}

impl Resolution {
    /// The resolved code, or `None` for "no result".
    pub fn code(&self) -> Option<&str> {
        match self {
            Resolution::Resolved { code } => Some(code),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::Incomplete {
            missing: vec![Field::Series, Field::Device],
        }
    }
}

// ─── Snapshots and notifications ────────────────────────────────────────────

/// Everything a presentation layer needs after a mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: SelectionState,
    pub availability: Availability,
    pub result: Resolution,
}

impl Snapshot {
    /// Whether the "Start Over" affordance should be shown.
    pub fn can_restart(&self) -> bool {
        self.state.series.is_some() || self.result.is_resolved()
    }
}

/// What triggered a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cause {
    Set { value: FieldValue },
    Reset,
}

/// Emitted once per successful mutation or reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    pub cause: Cause,
    pub previous: Snapshot,
    pub current: Snapshot,
}

impl StateChange {
    /// Fields that were unavailable before this change and are available now.
    /// Consumers use this to scroll a newly revealed step into view.
    pub fn newly_available(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| {
                !self.previous.availability.is_available(*f)
                    && self.current.availability.is_available(*f)
            })
            .collect()
    }

    /// True when a code is present now and was absent before.
    pub fn result_appeared(&self) -> bool {
        !self.previous.result.is_resolved() && self.current.result.is_resolved()
    }

    /// Fields that held a value before this change and are unset now.
    pub fn cleared(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.previous.state.is_set(*f) && !self.current.state.is_set(*f))
            .collect()
    }
}
