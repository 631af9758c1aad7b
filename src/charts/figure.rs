//! Serializable figure description understood by plotly.js
//! (`Plotly.newPlot(div, figure.data, figure.layout)`).

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar {
        name: String,
        x: Vec<String>,
        y: Vec<u64>,
        #[serde(rename = "legendgroup")]
        legend_group: String,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
        hole: f64,
        sort: bool,
    },
    Scatter {
        name: String,
        x: Vec<String>,
        y: Vec<u64>,
        mode: String,
        visible: bool,
    },
}

impl Trace {
    pub fn name(&self) -> Option<&str> {
        match self {
            Trace::Bar { name, .. } | Trace::Scatter { name, .. } => Some(name.as_str()),
            Trace::Pie { .. } => None,
        }
    }

    /// Bars and slices are always drawn; line series carry their own flag.
    pub fn is_visible(&self) -> bool {
        match self {
            Trace::Scatter { visible, .. } => *visible,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
}

/// A dropdown whose buttons restyle and relayout the figure client-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateMenu {
    pub active: usize,
    pub buttons: Vec<MenuButton>,
    pub direction: String,
    pub x: f64,
    pub xanchor: String,
    pub y: f64,
    pub yanchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuButton {
    pub label: String,
    pub method: String,
    pub args: (TraceUpdate, LayoutUpdate),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceUpdate {
    pub visible: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutUpdate {
    #[serde(rename = "title.text")]
    pub title: String,
    pub showlegend: bool,
}
