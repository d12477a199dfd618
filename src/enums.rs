//! Closed enumerations for every wizard field.
//!
//! Each field has a fixed domain. The wire value (the string a consumer submits
//! and the string used as a lookup-table segment) is the serde name of the
//! variant, so `Device::D8400` travels as `"8400"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named choice in the wizard, in path order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Series,
    Device,
    Function,
    AuxLatch,
    Thickness,
}

impl Field {
    /// All fields in canonical order.
    pub const ALL: [Field; 5] = [
        Field::Series,
        Field::Device,
        Field::Function,
        Field::AuxLatch,
        Field::Thickness,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Series => "series",
            Field::Device => "device",
            Field::Function => "function",
            Field::AuxLatch => "auxLatch",
            Field::Thickness => "thickness",
        }
    }

    /// The wire values this field accepts.
    pub fn domain(self) -> &'static [&'static str] {
        match self {
            Field::Series => &["80"],
            Field::Device => &["8400", "8500"],
            Field::Function => &["exit_only", "all_other"],
            Field::AuxLatch => &["yes", "no"],
            Field::Thickness => &["2", "2-9/16"],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Series {
    #[serde(rename = "80")]
    S80,
}

/// Exit device family. Selects the path through the wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Device {
    /// 8400 CVR Exit.
    #[serde(rename = "8400")]
    D8400,
    /// 8500 Rim Exit.
    #[serde(rename = "8500")]
    D8500,
}

/// Device function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Function {
    ExitOnly,
    AllOther,
}

/// Auxiliary control (cylinder + thumbturn).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuxLatch {
    Yes,
    No,
}

/// Door thickness in inches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Thickness {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "2-9/16")]
    TwoNineSixteenths,
}

/// Implements `as_str`, `ALL`, `FromStr` and `Display` from a variant/wire-name list.
macro_rules! wire_enum {
    ($ty:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $wire),+
                }
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($ty::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(Series { S80 => "80" });
wire_enum!(Device { D8400 => "8400", D8500 => "8500" });
wire_enum!(Function { ExitOnly => "exit_only", AllOther => "all_other" });
wire_enum!(AuxLatch { Yes => "yes", No => "no" });
wire_enum!(Thickness { Two => "2", TwoNineSixteenths => "2-9/16" });

/// The ordered set of fields required to produce a code, selected by device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Path {
    /// 8400: every field is asked.
    A,
    /// 8500: function is fixed and auxLatch does not apply.
    B,
}

impl Path {
    pub fn for_device(device: Device) -> Path {
        match device {
            Device::D8400 => Path::A,
            Device::D8500 => Path::B,
        }
    }

    /// Fields that must be set before resolution, in order.
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            Path::A => &[
                Field::Series,
                Field::Device,
                Field::Function,
                Field::AuxLatch,
                Field::Thickness,
            ],
            Path::B => &[Field::Series, Field::Device, Field::Function, Field::Thickness],
        }
    }

    /// Function value implied by the path, if the user never chooses it.
    pub fn fixed_function(self) -> Option<Function> {
        match self {
            Path::A => None,
            Path::B => Some(Function::AllOther),
        }
    }
}
