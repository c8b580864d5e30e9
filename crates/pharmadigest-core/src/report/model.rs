use chrono::{DateTime, Utc};

use crate::aggregate::CategoryBuckets;
use crate::classify::Category;

/// Version string recorded on the Metadata sheet
pub const AGENT_VERSION: &str = "1.0.0";

const SUMMARY_SHEET: &str = "Summary";
const METADATA_SHEET: &str = "Metadata";
const TOTAL_LABEL: &str = "Total Articles";
const RECORD_HEADERS: [&str; 6] = ["Company", "Date", "Title", "Source", "URL", "Summary"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Count(usize),
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            Cell::Count(_) => None,
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        match self {
            Cell::Count(n) => Some(*n),
            Cell::Text(_) => None,
        }
    }
}

/// One worksheet: a header row followed by data rows
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    fn new(name: impl Into<String>, headers: &[&'static str]) -> Self {
        Self {
            name: name.into(),
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Row whose first cell is the text `label`
    pub fn row(&self, label: &str) -> Option<&[Cell]> {
        self.rows
            .iter()
            .find(|row| row.first().and_then(Cell::as_text) == Some(label))
            .map(Vec::as_slice)
    }
}

/// In-memory workbook: Summary, one sheet per non-empty category, Metadata
#[derive(Debug, Clone)]
pub struct Report {
    pub file_name: String,
    pub sheets: Vec<Sheet>,
}

impl Report {
    pub fn build(
        buckets: &CategoryBuckets,
        source_names: &[String],
        generated_at: DateTime<Utc>,
    ) -> Self {
        let mut sheets = vec![summary_sheet(buckets)];

        for (category, records) in buckets.iter() {
            if records.is_empty() {
                continue;
            }

            let mut sheet = Sheet::new(category.sheet_name(), &RECORD_HEADERS);
            sheet.rows = records
                .iter()
                .map(|r| {
                    vec![
                        Cell::Text(r.company.clone()),
                        Cell::Text(r.date.clone()),
                        Cell::Text(r.title.clone()),
                        Cell::Text(r.source.clone()),
                        Cell::Text(r.url.clone()),
                        Cell::Text(r.summary.clone()),
                    ]
                })
                .collect();
            sheets.push(sheet);
        }

        sheets.push(metadata_sheet(source_names, generated_at));

        Self {
            file_name: report_file_name(generated_at),
            sheets,
        }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Workbook file name for a report generated at `generated_at`
pub fn report_file_name(generated_at: DateTime<Utc>) -> String {
    format!("Biotech_Pharma_Report_{}.xlsx", generated_at.format("%Y-%m"))
}

fn summary_sheet(buckets: &CategoryBuckets) -> Sheet {
    let mut sheet = Sheet::new(SUMMARY_SHEET, &["Category", "Count"]);

    for category in Category::ALL {
        sheet.rows.push(vec![
            Cell::Text(category.summary_label().to_string()),
            Cell::Count(buckets.count(category)),
        ]);
    }
    sheet.rows.push(vec![
        Cell::Text(TOTAL_LABEL.to_string()),
        Cell::Count(buckets.total()),
    ]);

    sheet
}

fn metadata_sheet(source_names: &[String], generated_at: DateTime<Utc>) -> Sheet {
    let mut sheet = Sheet::new(METADATA_SHEET, &["Field", "Value"]);

    let fields = [
        ("Report Generated", generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        ("Report Period", generated_at.format("%B %Y").to_string()),
        ("Sources Used", source_names.join(", ")),
        ("Agent Version", AGENT_VERSION.to_string()),
    ];

    sheet.rows = fields
        .into_iter()
        .map(|(field, value)| vec![Cell::Text(field.to_string()), Cell::Text(value)])
        .collect();

    sheet
}
