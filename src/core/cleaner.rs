use crate::domain::model::{CaseRecord, MonthCounts, RawTable};
use crate::domain::schema::{
    SourceSchema, MUNICIPALITY, REGION_CODE, REGION_NAME, SUBREGION_CODE, SUBREGION_NAME,
};

/// Largest value a single count cell may hold. Sums over any realistic number
/// of rows stay far below `u64::MAX`.
pub const MAX_CELL_COUNT: u64 = u32::MAX as u64;

/// Parse a count cell. Anything that is not a non-negative whole number
/// up to `MAX_CELL_COUNT` (blank, text, negative, fractional, too large)
/// becomes 0.
pub fn coerce_count(raw: &str) -> u64 {
    let value = raw.trim();
    if let Ok(n) = value.parse::<u32>() {
        return u64::from(n);
    }

    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= MAX_CELL_COUNT as f64 => f as u64,
        _ => 0,
    }
}

/// Turn raw rows into `CaseRecord`s: counts are coerced, the trailing
/// artifact column is dropped, and rows missing a required identifying
/// field are skipped. Retained rows keep their source order.
pub fn clean(table: RawTable, schema: &SourceSchema) -> Vec<CaseRecord> {
    let total = table.rows.len();

    let records: Vec<CaseRecord> = table
        .rows
        .into_iter()
        .filter(|row| {
            schema
                .required_columns()
                .iter()
                .all(|&idx| row.get(idx).is_some_and(|v| !v.trim().is_empty()))
        })
        .map(|row| to_record(&row, schema))
        .collect();

    let dropped = total - records.len();
    if dropped > 0 {
        tracing::debug!("Dropped {} rows missing region code or municipality", dropped);
    }

    records
}

fn to_record(row: &[String], schema: &SourceSchema) -> CaseRecord {
    let text = |idx: usize| row.get(idx).map(|v| v.trim().to_string()).unwrap_or_default();
    let count = |idx: usize| row.get(idx).map(|v| coerce_count(v)).unwrap_or(0);

    let mut months = [MonthCounts::default(); 5];
    for columns in schema.month_columns() {
        months[columns.month.index()] = MonthCounts {
            notified: count(columns.notified),
            autochthonous: count(columns.autochthonous),
            imported: count(columns.imported),
        };
    }

    CaseRecord {
        region_code: text(REGION_CODE),
        region_name: text(REGION_NAME),
        subregion_code: text(SUBREGION_CODE),
        subregion_name: text(SUBREGION_NAME),
        municipality: text(MUNICIPALITY),
        months,
    }
}
