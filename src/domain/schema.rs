use crate::domain::model::Month;

pub const REGION_CODE: usize = 0;
pub const REGION_NAME: usize = 1;
pub const SUBREGION_CODE: usize = 2;
pub const SUBREGION_NAME: usize = 3;
pub const MUNICIPALITY: usize = 4;

const IDENTIFYING_COLUMNS: [&str; 5] = ["drs", "drs_nome", "cod_rs", "nome_rs_2024", "municipio"];
const DISCARDED_COLUMN: &str = "unnamed_col";

/// Positions of one month's three count columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthColumns {
    pub month: Month,
    pub notified: usize,
    pub autochthonous: usize,
    pub imported: usize,
}

/// Fixed positional layout of the notification file: five identifying
/// columns, three count columns per month, and one trailing artifact column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSchema {
    columns: Vec<String>,
    months: Vec<MonthColumns>,
}

impl SourceSchema {
    pub fn dengue() -> Self {
        let mut columns: Vec<String> = IDENTIFYING_COLUMNS.iter().map(|c| c.to_string()).collect();
        let mut months = Vec::with_capacity(Month::ALL.len());

        for month in Month::ALL {
            let base = columns.len();
            let prefix = month.column_prefix();
            columns.push(format!("{}_notificados", prefix));
            columns.push(format!("{}_confirmados_autoctone", prefix));
            columns.push(format!("{}_confirmados_importados", prefix));
            months.push(MonthColumns {
                month,
                notified: base,
                autochthonous: base + 1,
                imported: base + 2,
            });
        }

        columns.push(DISCARDED_COLUMN.to_string());

        Self { columns, months }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Month column sets in calendar order.
    pub fn month_columns(&self) -> &[MonthColumns] {
        &self.months
    }

    /// Columns that must be non-empty for a row to be kept.
    pub fn required_columns(&self) -> [usize; 2] {
        [REGION_CODE, MUNICIPALITY]
    }

}

impl Default for SourceSchema {
    fn default() -> Self {
        Self::dengue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dengue_schema_layout() {
        let schema = SourceSchema::dengue();

        assert_eq!(schema.width(), 21);
        assert_eq!(schema.columns[MUNICIPALITY], "municipio");
        assert_eq!(schema.columns[5], "janeiro_notificados");
        assert_eq!(schema.columns[19], "maio_confirmados_importados");
        assert_eq!(schema.columns[20], "unnamed_col");
    }

    #[test]
    fn test_count_columns_stop_before_trailing_column() {
        let schema = SourceSchema::dengue();
        let counted: Vec<usize> = schema
            .month_columns()
            .iter()
            .flat_map(|m| [m.notified, m.autochthonous, m.imported])
            .collect();

        assert_eq!(counted, (5..20).collect::<Vec<_>>());
        assert!(!counted.contains(&(schema.width() - 1)));
    }

    #[test]
    fn test_month_columns_in_calendar_order() {
        let schema = SourceSchema::dengue();
        let march = schema.month_columns()[2];

        assert_eq!(march.month, Month::March);
        assert_eq!(schema.columns[march.notified], "março_notificados");
        assert_eq!(schema.columns[march.imported], "março_confirmados_importados");
    }
}
