use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use crate::error::AppError;
use crate::models::CellValue;

/// One sheet's raw grid: the sheet name and its rows as tagged cell values.
#[derive(Debug)]
pub struct SheetGrid {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

/// Reads every sheet of the workbook at `path` into raw grids. The reader is
/// format-agnostic (`.xls` and `.xlsx` both open); an unreadable file is
/// `SourceUnavailable` and fatal to startup, while a single bad worksheet is
/// logged and skipped.
pub fn load_workbook(path: &Path) -> Result<Vec<SheetGrid>, AppError> {
    tracing::info!("Opening workbook {}", path.display());
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        tracing::error!("Failed to open workbook {}: {}", path.display(), e);
        AppError::SourceUnavailable(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    tracing::info!("Found {} sheets: {:?}", sheet_names.len(), sheet_names);

    let mut grids = Vec::with_capacity(sheet_names.len());
    for sheet_name in &sheet_names {
        match workbook.worksheet_range(sheet_name) {
            Ok(range) => {
                let rows: Vec<Vec<CellValue>> = range
                    .rows()
                    .map(|row| row.iter().map(convert_cell).collect())
                    .collect();
                tracing::info!("Loaded sheet {} with {} rows", sheet_name, rows.len());
                grids.push(SheetGrid {
                    name: sheet_name.clone(),
                    rows,
                });
            }
            Err(e) => {
                tracing::warn!("Failed to read worksheet {}: {}", sheet_name, e);
                continue;
            }
        }
    }

    Ok(grids)
}

/// Collapses the reader's cell type into the three-valued model the
/// segmenter works with. Booleans become text so they stay out of sums;
/// date cells carry their serial number; error cells read as empty.
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(d) => CellValue::Number(d.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_scalar_cells() {
        assert_eq!(convert_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(
            convert_cell(&Data::String("Rent=".to_string())),
            CellValue::Text("Rent=".to_string())
        );
        assert_eq!(convert_cell(&Data::Float(2.5)), CellValue::Number(2.5));
        assert_eq!(convert_cell(&Data::Int(7)), CellValue::Number(7.0));
    }

    #[test]
    fn test_convert_bool_to_text_keeps_it_out_of_sums() {
        assert_eq!(
            convert_cell(&Data::Bool(true)),
            CellValue::Text("true".to_string())
        );
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let result = load_workbook(Path::new("no/such/workbook.xls"));
        assert!(matches!(result, Err(AppError::SourceUnavailable(_))));
    }
}
