//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`NotFound`] thrown when a referenced row does not exist.
//! - [`MissingField`] thrown when a required request field was omitted.
//! - [`InsufficientFunds`] thrown when a reservation would drive a balance
//!   negative.
//!
//! [`NotFound`]: EngineError::NotFound
//! [`MissingField`]: EngineError::MissingField
//! [`InsufficientFunds`]: EngineError::InsufficientFunds
use sea_orm::DbErr;
use thiserror::Error;

use crate::MoneyCents;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("Invalid input: {0} is not provided")]
    MissingField(&'static str),
    #[error("Laundry's cost exceeds user's current balance")]
    InsufficientFunds {
        required: MoneyCents,
        available: MoneyCents,
    },
    #[error(transparent)]
    Database(#[from] DbErr),
}
