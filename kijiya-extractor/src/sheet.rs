//! Workbook access — calamine adapters and the in-memory sheet grid.

use calamine::{DataType, Reader, Xlsx};

use crate::ExtractError;

/// A sheet materialized as rows of normalized cell text.
///
/// The row scans operate on this grid rather than on calamine ranges so the
/// extraction logic stays pure and unit-testable without workbook files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetGrid {
    pub rows: Vec<Vec<String>>,
}

impl SheetGrid {
    /// Build a grid from literal rows. Intended for tests and callers that
    /// already hold tabular data in memory.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = &'static str>,
    {
        SheetGrid {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(str::to_owned).collect())
                .collect(),
        }
    }

    fn from_range(range: &calamine::Range<DataType>) -> Self {
        SheetGrid {
            rows: range
                .rows()
                .map(|row| row.iter().map(|cell| cell_to_string(Some(cell))).collect())
                .collect(),
        }
    }
}

/// Read the named sheet, failing with [`ExtractError::MissingSheet`] when it
/// is absent from the workbook.
pub(crate) fn required_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<SheetGrid, ExtractError> {
    optional_sheet(workbook, name)?.ok_or_else(|| ExtractError::MissingSheet {
        name: name.to_owned(),
    })
}

/// Read the named sheet, returning `None` when it is absent.
pub(crate) fn optional_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<Option<SheetGrid>, ExtractError> {
    match workbook.worksheet_range(name) {
        Some(range) => Ok(Some(SheetGrid::from_range(&range?))),
        None => Ok(None),
    }
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_to_string_normalizes_scalar_kinds() {
        assert_eq!(cell_to_string(Some(&DataType::String("G-ID".into()))), "G-ID");
        assert_eq!(cell_to_string(Some(&DataType::Float(16169.0))), "16169");
        assert_eq!(cell_to_string(Some(&DataType::Int(3))), "3");
        assert_eq!(cell_to_string(Some(&DataType::Bool(true))), "true");
        assert_eq!(cell_to_string(Some(&DataType::Empty)), "");
        assert_eq!(cell_to_string(None), "");
    }

    #[test]
    fn from_rows_builds_a_grid() {
        let grid = SheetGrid::from_rows([["a", "b"], ["c", ""]]);
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.rows[1], vec!["c".to_owned(), String::new()]);
    }
}
