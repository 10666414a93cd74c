//! Dependency graph between UI inputs and outputs.
//!
//! Each [`Callback`] declares the properties it reads and the properties it
//! writes. An update starts from the set of properties the browser changed,
//! fires every callback reading one of them, feeds the written values back
//! into the inputs and carries on down the graph. [`CALLBACKS`] is listed in
//! dependency order, so one pass reaches a fixed point.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::Figure;
use crate::models::{Dataset, Selection};
use crate::reactors::{toggle_dropdowns, update_graph, ChartError, SelectorState};

/// A component property, named `<component id>.<property>` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prop {
    #[serde(rename = "filter_type.value")]
    FilterType,
    #[serde(rename = "country_dropdown.value")]
    CountryValue,
    #[serde(rename = "year_dropdown.value")]
    YearValue,
    #[serde(rename = "country_container.style")]
    CountryStyle,
    #[serde(rename = "year_container.style")]
    YearStyle,
    #[serde(rename = "worldcup_map.figure")]
    Figure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackId {
    ToggleDropdowns,
    UpdateGraph,
}

#[derive(Debug, Clone, Copy)]
pub struct Callback {
    pub id: CallbackId,
    pub name: &'static str,
    pub inputs: &'static [Prop],
    pub outputs: &'static [Prop],
}

impl Callback {
    fn triggered_by(&self, changed: &HashSet<Prop>) -> bool {
        self.inputs.iter().any(|p| changed.contains(p))
    }
}

pub const CALLBACKS: [Callback; 2] = [
    Callback {
        id: CallbackId::ToggleDropdowns,
        name: "toggle_dropdowns",
        inputs: &[Prop::FilterType],
        outputs: &[
            Prop::CountryStyle,
            Prop::YearStyle,
            Prop::CountryValue,
            Prop::YearValue,
        ],
    },
    Callback {
        id: CallbackId::UpdateGraph,
        name: "update_graph",
        inputs: &[Prop::FilterType, Prop::CountryValue, Prop::YearValue],
        outputs: &[Prop::Figure],
    },
];

/// Body of `POST /api/update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Properties changed by the user. Empty on first load, which fires
    /// every callback.
    #[serde(default)]
    pub changed: Vec<Prop>,

    #[serde(default)]
    pub inputs: Selection,
}

/// Outputs recomputed by an update. Outputs whose callback did not fire are
/// left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selectors: Option<SelectorState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure: Option<Figure>,

    /// Names of the callbacks that ran, in order
    pub fired: Vec<&'static str>,
}

/// Run every callback reachable from the changed properties.
pub fn dispatch(dataset: &Dataset, request: &UpdateRequest) -> Result<UpdateResponse, ChartError> {
    let mut inputs = request.inputs.clone();
    let initial = request.changed.is_empty();
    let mut changed: HashSet<Prop> = request.changed.iter().copied().collect();
    let mut response = UpdateResponse::default();

    for callback in &CALLBACKS {
        if !initial && !callback.triggered_by(&changed) {
            continue;
        }

        debug!("Firing {} for {:?}", callback.name, inputs);
        match callback.id {
            CallbackId::ToggleDropdowns => {
                let selectors = toggle_dropdowns(inputs.filter_type);
                inputs.country = selectors.country.clone();
                inputs.year = selectors.year;
                response.selectors = Some(selectors);
            }
            CallbackId::UpdateGraph => {
                response.figure = Some(update_graph(dataset, &inputs)?);
            }
        }

        changed.extend(callback.outputs.iter().copied());
        response.fired.push(callback.name);
    }

    Ok(response)
}
