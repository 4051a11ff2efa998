//! Core error types for cardbox domain logic
//!
//! These errors represent domain-level failures, not I/O or interpreter
//! errors. Every one of them is recoverable: the interpreter reports the
//! message and keeps reading input.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("'{0}' is not a valid date, expected dd-mm-yyyy or null")]
    InvalidDate(String),

    #[error("provide a valid number, '{0}' is not one")]
    InvalidNumber(String),

    #[error("card number {0} exceeds the number of cards")]
    PositionOutOfRange(i64),

    #[error("please provide a valid label, '{0}' is not valid")]
    InvalidLabel(String),

    #[error("please provide a valid status, '{0}' is not valid")]
    InvalidStatus(String),

    #[error("the card already has the '{0}' label")]
    DuplicateLabel(String),

    #[error("the card does not have the '{0}' label, it cannot be removed")]
    LabelNotPresent(String),

    #[error("the card status is already '{0}'")]
    StatusUnchanged(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
