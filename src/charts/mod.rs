pub mod builder;
pub mod figure;

pub use builder::{bar_chart, line_chart, pie_chart, select};
pub use figure::Figure;

use crate::domain::model::{Aggregates, SummaryRow};

/// A figure ready to be mounted into the page element `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    pub id: &'static str,
    pub figure: Figure,
}

/// Summary table in source row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    pub headers: [&'static str; 3],
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn new(rows: Vec<SummaryRow>) -> Self {
        Self {
            headers: ["municipio", "total_notificados", "total_confirmados"],
            rows,
        }
    }
}

/// The three charts and the table, built once at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub bar: ChartArtifact,
    pub pie: ChartArtifact,
    pub line: ChartArtifact,
    pub table: SummaryTable,
}

impl Dashboard {
    pub fn build(aggregates: &Aggregates) -> Self {
        Self {
            bar: ChartArtifact {
                id: "grafico-barras",
                figure: bar_chart(aggregates),
            },
            pie: ChartArtifact {
                id: "grafico-pizza",
                figure: pie_chart(aggregates),
            },
            line: ChartArtifact {
                id: "grafico-linha",
                figure: line_chart(aggregates),
            },
            table: SummaryTable::new(aggregates.summary.clone()),
        }
    }

    pub fn charts(&self) -> [&ChartArtifact; 3] {
        [&self.bar, &self.pie, &self.line]
    }
}
