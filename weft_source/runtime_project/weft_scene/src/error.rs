use thiserror::Error;
use weft_markup::MarkupError;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene structure: {0}")]
    Structure(String),
    #[error(transparent)]
    Parse(#[from] MarkupError),
    #[error("cannot read scene source: {0}")]
    Io(#[from] std::io::Error),
}
