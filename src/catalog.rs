//! Step titles, numbering and choice labels derived from the selection.
//!
//! Nothing here affects resolution; it is the state-dependent data a
//! presentation layer needs to draw the wizard.

use serde::Serialize;

use crate::availability::availability;
use crate::enums::*;
use crate::types::SelectionState;

/// A selectable option for one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<&'static str>,
    pub enabled: bool,
}

/// One step of the wizard as it should currently be shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub number: u8,
    pub field: Field,
    pub title: &'static str,
    pub visible: bool,
}

/// Options listed in the catalog but not yet offered.
static DISABLED_OPTIONS: &[(Field, &str, &str, &str)] =
    &[(Field::Series, "PE80", "PE80 Series", "Coming Soon")];

/// Whether `value` names a listed-but-disabled option for `field`.
pub fn is_disabled_option(field: Field, value: &str) -> bool {
    DISABLED_OPTIONS
        .iter()
        .any(|(f, v, _, _)| *f == field && *v == value)
}

pub fn title(field: Field) -> &'static str {
    match field {
        Field::Series => "Select Series",
        Field::Device => "Select Device",
        Field::Function => "Select Function",
        Field::AuxLatch => "Auxiliary control (Cylinder + Thumbturn)",
        Field::Thickness => "Select Door Thickness",
    }
}

/// Steps in display order. Thickness is numbered 4 on Path B, which skips
/// the auxiliary control step.
pub fn steps(state: &SelectionState) -> Vec<Step> {
    let avail = availability(state);
    let path_b = state.path() == Some(Path::B);
    Field::ALL
        .into_iter()
        .map(|field| {
            let number = match field {
                Field::Series => 1,
                Field::Device => 2,
                Field::Function => 3,
                Field::AuxLatch => 4,
                Field::Thickness if path_b => 4,
                Field::Thickness => 5,
            };
            Step {
                number,
                field,
                title: title(field),
                visible: avail.is_available(field),
            }
        })
        .collect()
}

/// Options for `field`, labelled for the current device where that matters.
pub fn options(field: Field, state: &SelectionState) -> Vec<ChoiceOption> {
    let mut out: Vec<ChoiceOption> = field
        .domain()
        .iter()
        .map(|&value| ChoiceOption {
            value,
            label: label(field, value, state.device),
            sublabel: None,
            enabled: true,
        })
        .collect();

    out.extend(
        DISABLED_OPTIONS
            .iter()
            .filter(|(f, _, _, _)| *f == field)
            .map(|&(_, value, label, sublabel)| ChoiceOption {
                value,
                label: label.to_string(),
                sublabel: Some(sublabel),
                enabled: false,
            }),
    );
    out
}

fn label(field: Field, value: &str, device: Option<Device>) -> String {
    match (field, value) {
        (Field::Series, v) => format!("{} Series", v),
        (Field::Device, "8400") => "8400 CVR Exit".to_string(),
        (Field::Device, "8500") => "8500 Rim Exit".to_string(),
        (Field::Function, "exit_only") => {
            let model = match device {
                Some(Device::D8500) => "8510",
                _ => "8410",
            };
            format!("10- Exit Only ({})", model)
        }
        (Field::Function, "all_other") => "All other functions".to_string(),
        (Field::AuxLatch, "yes") => "Yes".to_string(),
        (Field::AuxLatch, "no") => "No".to_string(),
        (Field::Thickness, v) => format!("{}\"", v),
        (_, v) => v.to_string(),
    }
}
