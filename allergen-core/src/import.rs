//! Spreadsheet importer.
//!
//! Converts an uploaded tabular file into recipes. The first row is treated
//! as a header row and skipped; column 0 is the recipe name and column 1 is a
//! comma-separated ingredient list. Rows without a name are dropped.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::error::ImportError;
use crate::types::Recipe;

/// Parse an uploaded spreadsheet into recipes.
///
/// Dispatches on the file extension: `.csv` goes through the CSV reader,
/// everything else through calamine's format auto-detection (xlsx/xls/ods).
pub fn parse_spreadsheet(filename: &str, data: &[u8]) -> Result<Vec<Recipe>, ImportError> {
    if filename.to_ascii_lowercase().ends_with(".csv") {
        parse_csv(data)
    } else {
        parse_workbook(data)
    }
}

/// Parse the first sheet of an Excel/ODS workbook into recipes.
pub fn parse_workbook(data: &[u8]) -> Result<Vec<Recipe>, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
        .map_err(|e| ImportError::UnreadableWorkbook(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoSheets)?
        .map_err(|e| ImportError::UnreadableWorkbook(e.to_string()))?;

    let mut recipes = Vec::new();
    for row in range.rows().skip(1) {
        let name = row.first().map(cell_text).unwrap_or_default();
        if name.is_empty() {
            continue;
        }
        let ingredients = row.get(1).map(cell_text).unwrap_or_default();
        recipes.push(Recipe {
            name,
            ingredients: split_ingredients(&ingredients),
        });
    }

    Ok(recipes)
}

/// Parse a CSV file into recipes. The header row is consumed by the reader.
pub fn parse_csv(data: &[u8]) -> Result<Vec<Recipe>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let mut recipes = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(0).map(str::trim).unwrap_or_default();
        if name.is_empty() {
            continue;
        }
        let ingredients = record.get(1).unwrap_or_default();
        recipes.push(Recipe {
            name: name.to_string(),
            ingredients: split_ingredients(ingredients),
        });
    }

    Ok(recipes)
}

/// Split a raw ingredient list on commas, trimming and dropping empty tokens.
fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .map(str::to_string)
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}
