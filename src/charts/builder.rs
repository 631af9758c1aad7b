use crate::charts::figure::{
    Axis, Figure, Layout, Legend, LayoutUpdate, MenuButton, Title, Trace, TraceUpdate, UpdateMenu,
};
use crate::domain::model::{Aggregates, Month};

pub const TOTAL_SERIES: &str = "Total";
pub const TOTAL_VIEW_LABEL: &str = "Total (Todas as Cidades)";

const CHART_HEIGHT: u32 = 500;
const LINE_TITLE_PREFIX: &str = "Evolução de Casos Confirmados";

/// Visibility vector for a dropdown choice: `n` entries, only `selected` on.
pub fn select(selected: usize, n: usize) -> Vec<bool> {
    (0..n).map(|i| i == selected).collect()
}

pub fn line_title(label: &str) -> String {
    format!("{} - {}", LINE_TITLE_PREFIX, label)
}

/// Confirmed cases per municipality, one stacked series per month.
pub fn bar_chart(aggregates: &Aggregates) -> Figure {
    let data = Month::ALL
        .iter()
        .map(|&month| {
            let (x, y) = aggregates
                .confirmed_long
                .iter()
                .filter(|s| s.month == month)
                .map(|s| (s.municipality.clone(), s.confirmed))
                .unzip();
            Trace::Bar {
                name: month.label().to_string(),
                x,
                y,
                legend_group: month.label().to_string(),
            }
        })
        .collect();

    Figure {
        data,
        layout: Layout {
            title: Title::new("Casos Confirmados de Dengue por Município e Mês"),
            height: Some(CHART_HEIGHT),
            barmode: Some("relative".to_string()),
            xaxis: Some(Axis {
                title: Title::new("Município de Residência"),
            }),
            yaxis: Some(Axis {
                title: Title::new("Total de Casos Confirmados"),
            }),
            legend: Some(Legend {
                title: Title::new("Mês"),
            }),
            ..Layout::default()
        },
    }
}

/// Share of confirmed cases per month, as a donut in calendar order.
pub fn pie_chart(aggregates: &Aggregates) -> Figure {
    let (labels, values) = aggregates
        .monthly_totals
        .iter()
        .map(|t| (t.month.label().to_string(), t.confirmed))
        .unzip();

    Figure {
        data: vec![Trace::Pie {
            labels,
            values,
            hole: 0.3,
            sort: false,
        }],
        layout: Layout {
            title: Title::new("Distribuição de Casos Confirmados por Mês"),
            ..Layout::default()
        },
    }
}

/// "Total" line plus one hidden line per municipality, switched by a dropdown.
pub fn line_chart(aggregates: &Aggregates) -> Figure {
    let (total_x, total_y) = aggregates
        .monthly_totals
        .iter()
        .map(|t| (t.month.label().to_string(), t.confirmed))
        .unzip();

    let mut data = vec![Trace::Scatter {
        name: TOTAL_SERIES.to_string(),
        x: total_x,
        y: total_y,
        mode: "lines+markers".to_string(),
        visible: true,
    }];

    for municipality in &aggregates.municipalities {
        let (x, y) = aggregates
            .series_for(municipality)
            .map(|s| (s.month.label().to_string(), s.confirmed))
            .unzip();
        data.push(Trace::Scatter {
            name: municipality.clone(),
            x,
            y,
            mode: "lines+markers".to_string(),
            visible: false,
        });
    }

    let buttons = selector_buttons(&data);

    Figure {
        data,
        layout: Layout {
            title: Title::new(line_title(TOTAL_VIEW_LABEL)),
            height: Some(CHART_HEIGHT),
            xaxis: Some(Axis {
                title: Title::new("Mês"),
            }),
            yaxis: Some(Axis {
                title: Title::new("Casos Confirmados"),
            }),
            updatemenus: vec![UpdateMenu {
                active: 0,
                buttons,
                direction: "down".to_string(),
                x: 0.01,
                xanchor: "left".to_string(),
                y: 1.15,
                yanchor: "top".to_string(),
            }],
            ..Layout::default()
        },
    }
}

/// One button per series. Every choice hides the legend, including the
/// return to "Total"; only the initial view shows it.
fn selector_buttons(traces: &[Trace]) -> Vec<MenuButton> {
    traces
        .iter()
        .enumerate()
        .map(|(i, trace)| {
            let label = trace.name().unwrap_or_default().to_string();
            let title_label = if i == 0 { TOTAL_VIEW_LABEL } else { label.as_str() };
            MenuButton {
                args: (
                    TraceUpdate {
                        visible: select(i, traces.len()),
                    },
                    LayoutUpdate {
                        title: line_title(title_label),
                        showlegend: false,
                    },
                ),
                label,
                method: "update".to_string(),
            }
        })
        .collect()
}
