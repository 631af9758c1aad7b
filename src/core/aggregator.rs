use crate::domain::model::{Aggregates, CaseRecord, Month, MonthTotal, MonthlySeries, SummaryRow};
use std::collections::BTreeSet;

impl Aggregates {
    pub fn from_records(records: &[CaseRecord]) -> Self {
        Self {
            confirmed_long: confirmed_long(records),
            monthly_totals: monthly_totals(records),
            summary: summarize(records),
            municipalities: municipalities(records),
        }
    }

    /// Points for one municipality, month-ordered; one point per source row.
    pub fn series_for<'a>(&'a self, municipality: &'a str) -> impl Iterator<Item = &'a MonthlySeries> {
        self.confirmed_long
            .iter()
            .filter(move |s| s.municipality == municipality)
    }
}

/// Wide to long: for each month in calendar order, one point per row.
/// Rows sharing a municipality are not merged here.
pub fn confirmed_long(records: &[CaseRecord]) -> Vec<MonthlySeries> {
    let mut series = Vec::with_capacity(records.len() * Month::ALL.len());
    for month in Month::ALL {
        series.extend(records.iter().map(|record| MonthlySeries {
            municipality: record.municipality.clone(),
            month,
            confirmed: record.confirmed(month),
        }));
    }
    series
}

/// Confirmed cases per month across every row, calendar-ordered.
pub fn monthly_totals(records: &[CaseRecord]) -> Vec<MonthTotal> {
    Month::ALL
        .iter()
        .map(|&month| MonthTotal {
            month,
            confirmed: records.iter().map(|r| r.confirmed(month)).sum(),
        })
        .collect()
}

/// One summary row per source row, in source order. Duplicate municipality
/// names stay separate rows.
pub fn summarize(records: &[CaseRecord]) -> Vec<SummaryRow> {
    records
        .iter()
        .map(|record| SummaryRow {
            municipality: record.municipality.clone(),
            total_notified: record.total_notified(),
            total_confirmed: record.total_confirmed(),
        })
        .collect()
}

/// Distinct municipality labels, sorted.
pub fn municipalities(records: &[CaseRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.municipality.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MonthCounts;

    fn record(municipality: &str, counts: [(u64, u64, u64); 5]) -> CaseRecord {
        let mut months = [MonthCounts::default(); 5];
        for (slot, (notified, autochthonous, imported)) in months.iter_mut().zip(counts) {
            *slot = MonthCounts {
                notified,
                autochthonous,
                imported,
            };
        }
        CaseRecord {
            region_code: "SP".to_string(),
            region_name: "São Paulo".to_string(),
            subregion_code: "1".to_string(),
            subregion_name: "RS1".to_string(),
            municipality: municipality.to_string(),
            months,
        }
    }

    fn sample() -> Vec<CaseRecord> {
        vec![
            record("Votuporanga", [(10, 3, 1), (4, 2, 0), (0, 0, 0), (1, 1, 0), (2, 0, 2)]),
            record("Cedral", [(5, 1, 1), (0, 0, 0), (3, 2, 1), (0, 0, 0), (0, 0, 0)]),
            record("Votuporanga", [(1, 0, 1), (0, 0, 0), (0, 0, 0), (0, 0, 0), (7, 5, 0)]),
        ]
    }

    #[test]
    fn test_confirmed_long_is_month_major() {
        let records = sample();
        let long = confirmed_long(&records);

        assert_eq!(long.len(), records.len() * 5);
        assert_eq!(long[0].month, Month::January);
        assert_eq!(long[0].municipality, "Votuporanga");
        assert_eq!(long[0].confirmed, 4);
        assert_eq!(long[1].municipality, "Cedral");
        assert_eq!(long[3].month, Month::February);

        let months: Vec<Month> = long.iter().map(|s| s.month).collect();
        let mut sorted = months.clone();
        sorted.sort();
        assert_eq!(months, sorted);
    }

    #[test]
    fn test_monthly_totals_match_long_format_sums() {
        let records = sample();
        let long = confirmed_long(&records);
        let totals = monthly_totals(&records);

        assert_eq!(totals.len(), 5);
        for total in &totals {
            let expected: u64 = long
                .iter()
                .filter(|s| s.month == total.month)
                .map(|s| s.confirmed)
                .sum();
            assert_eq!(total.confirmed, expected);
        }
        assert_eq!(totals[0].confirmed, 4 + 2 + 1);
        assert_eq!(totals[4].month, Month::May);
        assert_eq!(totals[4].confirmed, 2 + 5);
    }

    #[test]
    fn test_summary_row_totals_equal_monthly_sums() {
        let records = sample();
        let summary = summarize(&records);

        for (row, record) in summary.iter().zip(&records) {
            let monthly: u64 = Month::ALL.iter().map(|&m| record.confirmed(m)).sum();
            assert_eq!(row.total_confirmed, monthly);
        }
        assert_eq!(summary[0].total_notified, 17);
        assert_eq!(summary[0].total_confirmed, 9);
    }

    #[test]
    fn test_summary_keeps_duplicate_municipalities_separate() {
        // Intentional: one summary row per source row, never merged by name.
        let summary = summarize(&sample());

        let names: Vec<&str> = summary.iter().map(|r| r.municipality.as_str()).collect();
        assert_eq!(names, vec!["Votuporanga", "Cedral", "Votuporanga"]);
    }

    #[test]
    fn test_municipalities_are_distinct_and_sorted() {
        assert_eq!(municipalities(&sample()), vec!["Cedral", "Votuporanga"]);
    }

    #[test]
    fn test_series_for_keeps_row_level_points() {
        let aggregates = Aggregates::from_records(&sample());
        let points: Vec<(Month, u64)> = aggregates
            .series_for("Votuporanga")
            .map(|s| (s.month, s.confirmed))
            .collect();

        assert_eq!(points.len(), 10);
        assert_eq!(points[0], (Month::January, 4));
        assert_eq!(points[1], (Month::January, 1));
        assert_eq!(points[9], (Month::May, 5));
    }

    #[test]
    fn test_empty_input_yields_zero_totals() {
        let aggregates = Aggregates::from_records(&[]);

        assert!(aggregates.confirmed_long.is_empty());
        assert!(aggregates.summary.is_empty());
        assert!(aggregates.municipalities.is_empty());
        assert!(aggregates.monthly_totals.iter().all(|t| t.confirmed == 0));
    }
}
