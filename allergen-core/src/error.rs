use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Unreadable spreadsheet: {0}")]
    UnreadableWorkbook(String),

    #[error("Spreadsheet contains no sheets")]
    NoSheets,

    #[error("Invalid CSV: {0}")]
    InvalidCsv(#[from] csv::Error),
}
