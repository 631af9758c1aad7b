//! HTML page assembly.
//!
//! The page is self-contained apart from Bootstrap and plotly.js, which are
//! pulled from their CDNs. Figures are embedded as JSON and mounted with
//! `Plotly.newPlot` once the document has loaded.

use crate::charts::{ChartArtifact, Dashboard, SummaryTable};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const BOOTSTRAP_CDN: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Render the full dashboard page.
pub fn render_page(dashboard: &Dashboard, generated_at: DateTime<Utc>) -> Result<String> {
    let [bar, pie, line] = dashboard.charts();
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Dashboard de Casos de Dengue</title>
    <link rel="stylesheet" href="{bootstrap}">
    <script src="{plotly}"></script>
    <style>{css}</style>
</head>
<body>
    <div class="container-fluid py-4">
        <h1 class="text-center mb-4">Dashboard de Casos de Dengue</h1>
        <div class="row">
            <div class="col-12 chart-card">{bar}</div>
        </div>
        <div class="row">
            <div class="col-lg-6 chart-card">{pie}</div>
            <div class="col-lg-6 chart-card">{line}</div>
        </div>
        <div class="row">
            <div class="col-12 chart-card">
                <h2 class="h4 text-center">Resumo de Casos por Município</h2>
                {table}
            </div>
        </div>
        <footer class="text-muted text-center small mt-4">Dados processados em {generated}</footer>
    </div>
</body>
</html>"#,
        bootstrap = BOOTSTRAP_CDN,
        plotly = PLOTLY_CDN,
        css = inline_css(),
        bar = render_chart(bar)?,
        pie = render_chart(pie)?,
        line = render_chart(line)?,
        table = render_table(&dashboard.table),
        generated = generated_at.format("%d/%m/%Y %H:%M UTC"),
    ))
}

/// A `<div>` plus the script that mounts the figure into it.
pub fn render_chart(chart: &ChartArtifact) -> Result<String> {
    let json = embed_json(&serde_json::to_string(&chart.figure)?);
    Ok(format!(
        r#"<div id="{id}" class="plotly-graph-div"></div>
<script>(function () {{ var fig = {json}; Plotly.newPlot("{id}", fig.data, fig.layout, {{responsive: true}}); }})();</script>"#,
        id = chart.id,
        json = json,
    ))
}

pub fn render_table(table: &SummaryTable) -> String {
    let mut html = String::from(
        "<table class=\"dataframe table table-striped table-hover\">\n<thead>\n<tr style=\"text-align: center;\">",
    );
    for header in table.headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&row.municipality),
            row.total_notified,
            row.total_confirmed
        ));
    }

    html.push_str("</tbody>\n</table>");
    html
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// JSON inside `<script>` must not contain `</`; `<\/` is the same string to a JSON parser.
fn embed_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn inline_css() -> &'static str {
    "body { background-color: #f8f9fa; }\n\
     .chart-card { background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,.1); margin-bottom: 1.5rem; padding: 1rem; }\n\
     .table { font-size: .9rem; }\n\
     .table td:not(:first-child) { text-align: right; }"
}
