//! Choropleth figure description.
//!
//! A [`Figure`] serializes to the JSON figure format plotly.js draws with
//! `Plotly.react`. Only the attributes the dashboard uses are modelled.

use serde::Serialize;

use crate::calculate::max_wins;
use crate::models::CountryStats;

/// Sequential green scale, lightest first.
pub const GREENS: [&str; 9] = [
    "rgb(247,252,245)",
    "rgb(229,245,224)",
    "rgb(199,233,192)",
    "rgb(161,217,155)",
    "rgb(116,196,118)",
    "rgb(65,171,93)",
    "rgb(35,139,69)",
    "rgb(0,109,44)",
    "rgb(0,68,27)",
];

pub const WINS_LABEL: &str = "Number of Wins";
pub const RUNNER_UP_LABEL: &str = "Times Runner-Up";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: FigureLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub locations: Vec<String>,
    pub locationmode: &'static str,
    pub z: Vec<u32>,
    pub coloraxis: &'static str,
    pub hovertext: Vec<String>,
    /// `[wins, runner_up]` per location
    pub customdata: Vec<[u32; 2]>,
    pub hovertemplate: String,
    pub geo: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    pub title: Title,
    pub geo: Geo,
    pub coloraxis: ColorAxis,
    pub legend: Legend,
    pub margin: Margin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

/// Map chrome. Fixed styling apart from `fitbounds`, which the renderer
/// resolves against whatever locations the trace holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
    pub domain: Domain,
    pub projection: Projection,
    pub showcoastlines: bool,
    pub coastlinecolor: &'static str,
    pub showland: bool,
    pub landcolor: &'static str,
    pub showocean: bool,
    pub oceancolor: &'static str,
    pub showlakes: bool,
    pub showcountries: bool,
    pub countrycolor: &'static str,
    pub fitbounds: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorAxis {
    pub cmin: u32,
    pub cmax: u32,
    pub colorscale: Vec<(f64, &'static str)>,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub tracegroupgap: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
}

impl Geo {
    fn styled() -> Self {
        Self {
            domain: Domain {
                x: [0.0, 1.0],
                y: [0.0, 1.0],
            },
            projection: Projection {
                kind: "natural earth",
            },
            showcoastlines: true,
            coastlinecolor: "Black",
            showland: true,
            landcolor: "LightGray",
            showocean: true,
            oceancolor: "LightBlue",
            showlakes: false,
            showcountries: true,
            countrycolor: "Black",
            fitbounds: "locations",
        }
    }
}

/// Evenly spaced stops over [`GREENS`].
pub fn greens_colorscale() -> Vec<(f64, &'static str)> {
    let last = (GREENS.len() - 1) as f64;
    GREENS
        .iter()
        .enumerate()
        .map(|(i, color)| (i as f64 / last, *color))
        .collect()
}

fn hover_template() -> String {
    format!(
        "<b>%{{hovertext}}</b><br><br>{}=%{{z}}<br>{}=%{{customdata[1]}}<extra></extra>",
        WINS_LABEL, RUNNER_UP_LABEL
    )
}

/// Build a choropleth of `rows`, colored by wins.
///
/// The color range is `[0, max wins]` over `rows` alone, so a single-country
/// map is always drawn at full intensity.
pub fn choropleth(rows: &[CountryStats], title: impl Into<String>) -> Figure {
    let trace = ChoroplethTrace {
        kind: "choropleth",
        name: String::new(),
        locations: rows.iter().map(|r| r.country.clone()).collect(),
        locationmode: "country names",
        z: rows.iter().map(|r| r.wins).collect(),
        coloraxis: "coloraxis",
        hovertext: rows.iter().map(|r| r.country.clone()).collect(),
        customdata: rows.iter().map(|r| [r.wins, r.runner_up]).collect(),
        hovertemplate: hover_template(),
        geo: "geo",
    };

    Figure {
        data: vec![trace],
        layout: FigureLayout {
            title: Title { text: title.into() },
            geo: Geo::styled(),
            coloraxis: ColorAxis {
                cmin: 0,
                cmax: max_wins(rows),
                colorscale: greens_colorscale(),
                colorbar: ColorBar {
                    title: Title {
                        text: WINS_LABEL.to_string(),
                    },
                },
            },
            legend: Legend { tracegroupgap: 0 },
            margin: Margin { t: 60 },
        },
    }
}

impl Figure {
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Countries drawn on the map, in trace order.
    pub fn locations(&self) -> &[String] {
        self.data
            .first()
            .map(|t| t.locations.as_slice())
            .unwrap_or(&[])
    }

    /// Color range as `(cmin, cmax)`.
    pub fn color_range(&self) -> (u32, u32) {
        (self.layout.coloraxis.cmin, self.layout.coloraxis.cmax)
    }
}
