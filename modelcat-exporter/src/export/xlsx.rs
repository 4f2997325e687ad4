use std::path::Path;

use modelcat_core::domain::{ModelRow, COLUMNS, NOT_AVAILABLE};
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, XlsxError};
use tracing::info;

const SHEET_NAME: &str = "AI Foundry Models";
const HEADER_FILL: Color = Color::RGB(0x366092);
const MAX_COLUMN_WIDTH: f64 = 50.0;

/// Write all rows to one styled sheet: bold frozen header, wrapped cells,
/// columns sized to their longest value. Any failure aborts the export.
pub fn write_models(rows: &[ModelRow], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_FILL)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();
    let body_format = Format::new().set_align(FormatAlign::Top).set_text_wrap();

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    let mut widths: Vec<usize> = COLUMNS.iter().map(|header| header.len()).collect();
    for (i, row) in rows.iter().enumerate() {
        for (col, value) in row.values().into_iter().enumerate() {
            // A blank cell never reaches the sheet.
            let value = if value.trim().is_empty() {
                NOT_AVAILABLE
            } else {
                value
            };
            widths[col] = widths[col].max(value.chars().count());
            worksheet.write_string_with_format((i + 1) as u32, col as u16, value, &body_format)?;
        }
    }

    for (col, width) in widths.iter().enumerate() {
        let width = ((width + 2) as f64).min(MAX_COLUMN_WIDTH);
        worksheet.set_column_width(col as u16, width)?;
    }

    worksheet.set_freeze_panes(1, 0)?;
    workbook.save(path)?;
    info!("Workbook written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_a_workbook_with_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("models.xlsx");

        let mut row = ModelRow::default();
        row.source = "AI Foundry Catalog".to_string();
        row.name = "gpt-4o".to_string();
        let rows = vec![row, ModelRow::default()];

        write_models(&rows, &path).unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn writes_a_header_only_workbook_for_zero_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        write_models(&[], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn blank_values_are_refilled_at_write_time() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("refill.xlsx");

        let mut row = ModelRow::default();
        row.description = "   ".to_string();
        write_models(&[row], &path).unwrap();
        assert!(path.exists());
    }
}
