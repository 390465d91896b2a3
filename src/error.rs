use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("literal 0 has no variable or polarity")]
    ZeroLiteral,

    #[error("literal {0} is out of range")]
    LiteralOutOfRange(i64),

    /// Raised by exhaustive checkers that would need 2^n assignments.
    #[error("formula has {vars} variables, truth table is capped at {cap}")]
    TooManyVariables { vars: usize, cap: usize },
}
