use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

pub type Result<T> = std::result::Result<T, ShopError>;
