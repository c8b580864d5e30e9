use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};

use super::model::{Cell, Report};
use crate::Result;

/// Serializes a [`Report`] to an `.xlsx` workbook
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the workbook, replacing any report with the same name, and return its path
    pub fn write(&self, report: &Report) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(&report.file_name);

        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        for sheet in &report.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;

            for (col, title) in sheet.headers.iter().enumerate() {
                worksheet.write_string_with_format(0, col as u16, *title, &header)?;
            }

            for (idx, row) in sheet.rows.iter().enumerate() {
                let row_num = idx as u32 + 1;
                for (col, cell) in row.iter().enumerate() {
                    match cell {
                        Cell::Text(text) => worksheet.write_string(row_num, col as u16, text)?,
                        Cell::Count(count) => worksheet.write_number(row_num, col as u16, *count as f64)?,
                    };
                }
            }

            worksheet.autofit();
        }

        workbook.save(&path)?;
        tracing::info!("Excel report created: {}", path.display());

        Ok(path)
    }
}
