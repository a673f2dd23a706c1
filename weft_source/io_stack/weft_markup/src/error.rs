use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarkupError {
    #[error("{message} at line {line}, column {column}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },
    #[error("document has no root element")]
    NoRoot,
}
