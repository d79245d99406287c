use crate::error::AppError;

/// Raw content of one grid cell as delivered by the spreadsheet reader.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Empty cells and whitespace-only text both count as blank. The stored
    /// text itself is never trimmed; only classification looks through
    /// surrounding whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

/// One data row of a table: the label from the first cell plus the remaining
/// cells on that spreadsheet row. Cell counts may differ row to row.
#[derive(Debug, Clone)]
pub struct Row {
    pub label: String,
    pub cells: Vec<CellValue>,
}

/// A contiguous block of data rows under one title. A table with zero rows
/// is legal (a title immediately followed by another title).
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(name: String) -> Self {
        Self {
            name,
            rows: Vec::new(),
        }
    }

    pub fn row_labels(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.label.clone()).collect()
    }
}

/// Every table found in the workbook, in original sheet order. Built once at
/// startup and read-only afterwards; duplicate names are kept verbatim and
/// lookups return the first match in sheet order.
#[derive(Debug, Clone, Default)]
pub struct TableCatalog {
    tables: Vec<Table>,
}

impl TableCatalog {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table_names(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.name.clone()).collect()
    }

    /// First table whose name matches exactly. No trimming, no case folding:
    /// the comparison is against the text captured at segmentation time.
    pub fn table(&self, name: &str) -> Result<&Table, AppError> {
        self.tables
            .iter()
            .find(|table| table.name == name)
            .ok_or_else(|| AppError::TableNotFound(name.to_string()))
    }

    pub fn row_labels(&self, table_name: &str) -> Result<Vec<String>, AppError> {
        Ok(self.table(table_name)?.row_labels())
    }

    /// First row of the named table whose label matches exactly.
    pub fn row(&self, table_name: &str, row_label: &str) -> Result<&Row, AppError> {
        let table = self.table(table_name)?;
        table
            .rows
            .iter()
            .find(|row| row.label == row_label)
            .ok_or_else(|| {
                AppError::RowNotFound(format!(
                    "Row '{}' not found in table '{}'",
                    row_label, table_name
                ))
            })
    }
}
