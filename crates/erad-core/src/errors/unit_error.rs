//! Unit parsing and conversion errors.

use super::error_code::{self, EradErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown unit: {symbol}")]
    UnknownUnit { symbol: String },

    #[error("Cannot convert {from} to {to}: incompatible dimensions")]
    IncompatibleDimensions { from: String, to: String },
}

impl EradErrorCode for UnitError {
    fn error_code(&self) -> &'static str {
        error_code::UNIT_ERROR
    }
}
