use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid input: cannot aggregate an empty {0}")]
    EmptyAggregate(&'static str),

    #[error("Invalid input: field count mismatch, left has {left}, right has {right}")]
    FieldCountMismatch { left: usize, right: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Whether this error belongs to the invalid-input family
    /// (degenerate sequences or mismatched field lists).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyAggregate(_) | Error::FieldCountMismatch { .. }
        )
    }
}
