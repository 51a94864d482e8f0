use thiserror::Error;

use super::customer::CustomerId;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Customer with id \"{0}\" was not found.")]
    CustomerNotFound(CustomerId),
    #[error("Internal error: {0}")]
    Internal(String),
}
