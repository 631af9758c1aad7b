use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting months, in calendar order. `Month::ALL` is the only ordering
/// used anywhere; labels are never sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    #[serde(rename = "Janeiro")]
    January,
    #[serde(rename = "Fevereiro")]
    February,
    #[serde(rename = "Março")]
    March,
    #[serde(rename = "Abril")]
    April,
    #[serde(rename = "Maio")]
    May,
}

impl Month {
    pub const ALL: [Month; 5] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Month::January => "Janeiro",
            Month::February => "Fevereiro",
            Month::March => "Março",
            Month::April => "Abril",
            Month::May => "Maio",
        }
    }

    /// Prefix of the month's columns in the source file.
    pub fn column_prefix(self) -> &'static str {
        match self {
            Month::January => "janeiro",
            Month::February => "fevereiro",
            Month::March => "março",
            Month::April => "abril",
            Month::May => "maio",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts reported for one municipality in one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCounts {
    pub notified: u64,
    pub autochthonous: u64,
    pub imported: u64,
}

impl MonthCounts {
    pub fn confirmed(&self) -> u64 {
        self.autochthonous + self.imported
    }
}

/// A cleaned source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub region_code: String,
    pub region_name: String,
    pub subregion_code: String,
    pub subregion_name: String,
    pub municipality: String,
    pub months: [MonthCounts; 5],
}

impl CaseRecord {
    pub fn counts(&self, month: Month) -> &MonthCounts {
        &self.months[month.index()]
    }

    pub fn confirmed(&self, month: Month) -> u64 {
        self.counts(month).confirmed()
    }

    pub fn total_notified(&self) -> u64 {
        self.months.iter().map(|m| m.notified).sum()
    }

    pub fn total_confirmed(&self) -> u64 {
        self.months.iter().map(MonthCounts::confirmed).sum()
    }
}

/// Rows as read from the source, positionally aligned with the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One (municipality, month) point in long format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySeries {
    pub municipality: String,
    pub month: Month,
    pub confirmed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthTotal {
    pub month: Month,
    pub confirmed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "municipio")]
    pub municipality: String,
    #[serde(rename = "total_notificados")]
    pub total_notified: u64,
    #[serde(rename = "total_confirmados")]
    pub total_confirmed: u64,
}

/// Everything the chart builder needs, derived from the cleaned rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregates {
    pub confirmed_long: Vec<MonthlySeries>,
    pub monthly_totals: Vec<MonthTotal>,
    pub summary: Vec<SummaryRow>,
    pub municipalities: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "latin-1", alias = "latin1", alias = "iso-8859-1")]
    Latin1,
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
}

impl TextEncoding {
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            // ISO-8859-1 bytes map one-to-one onto U+0000..=U+00FF.
            TextEncoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latin-1" | "latin1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            other => Err(format!("unsupported encoding: {}", other)),
        }
    }
}

/// How the source file is laid out on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    pub skip_rows: usize,
    pub delimiter: u8,
    pub encoding: TextEncoding,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            skip_rows: 2,
            delimiter: b';',
            encoding: TextEncoding::Latin1,
        }
    }
}
