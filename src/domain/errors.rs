use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Cart {0} does not exist")]
    NotExistCart(i64),
    #[error("User {0} does not exist")]
    NotExistUser(i64),
    #[error("Order {0} does not exist")]
    NotExistOrder(i64),
    #[error("Cannot use {requested} savings, only {available} available")]
    InsufficientSavings { available: i32, requested: i32 },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
