use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Car not found: {0}")]
    CarNotFound(String),
    #[error("Out of stock: {0}")]
    OutOfStock(String),
    #[error("Not enough stock for {car}: requested {requested}, available {available}")]
    InsufficientStock {
        car: String,
        requested: u32,
        available: u32,
    },
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Lot not found: {0}")]
    LotNotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
