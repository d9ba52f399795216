use thiserror::Error;

/// Errors reported by the checked arithmetic entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// A zero divisor would make repeated subtraction loop forever, so it
    /// is rejected up front.
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors reported when parsing a decimal literal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDecimalError {
    #[error("empty decimal literal")]
    Empty,
    #[error("invalid character {0:?} in decimal literal")]
    InvalidDigit(char),
    #[error("sign character allowed only at the front of a decimal literal")]
    EmbeddedSign,
}
