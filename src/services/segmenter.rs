use super::grid_source::SheetGrid;
use crate::models::{CellValue, Row, Table, TableCatalog};

/// Segments every sheet independently and concatenates the results in
/// workbook order into one catalog.
pub fn build_catalog(grids: Vec<SheetGrid>) -> TableCatalog {
    let mut tables = Vec::new();
    for grid in grids {
        let mut segmented = segment_sheet(&grid.name, grid.rows);
        tracing::info!("Sheet {} produced {} tables", grid.name, segmented.len());
        tables.append(&mut segmented);
    }
    TableCatalog::new(tables)
}

/// Splits one sheet's rows into tables, covering every non-blank row exactly
/// once. A title row seals the open table and opens a new one; the title row
/// itself is not stored as data. Data rows seen while no table is open fall
/// into an implicit `Sheet_<name>` table, so a sheet with no titles at all
/// collapses to that single table.
pub fn segment_sheet(sheet_name: &str, rows: Vec<Vec<CellValue>>) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut current: Option<Table> = None;

    for cells in rows {
        let Some(first) = cells.first() else {
            continue;
        };
        if first.is_blank() {
            // Visual separator only; never opens or closes a table.
            continue;
        }

        if is_title_row(&cells) {
            if let Some(done) = current.take() {
                tables.push(done);
            }
            current = Some(Table::new(first.to_string()));
        } else {
            let table =
                current.get_or_insert_with(|| Table::new(format!("Sheet_{}", sheet_name)));
            table.rows.push(Row {
                label: first.to_string(),
                cells: cells[1..].to_vec(),
            });
        }
    }

    if let Some(done) = current.take() {
        tables.push(done);
    }
    tables
}

/// A title row carries non-blank text in its first cell and nothing in any
/// other cell. A lone numeric cell is a data row, not a title.
fn is_title_row(cells: &[CellValue]) -> bool {
    match cells.first() {
        Some(CellValue::Text(text)) if !text.trim().is_empty() => {
            cells[1..].iter().all(CellValue::is_blank)
        }
        _ => false,
    }
}
