use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Customer name cannot be empty")]
    EmptyName,

    #[error("Customer phone cannot be empty")]
    EmptyPhone,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("PIN must be exactly 4 digits")]
    InvalidPin,
}
