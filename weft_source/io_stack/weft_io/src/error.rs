use thiserror::Error;

use crate::format::DataFormat;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binary error: {0}")]
    Binary(#[from] bincode::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("markup error: {0}")]
    Markup(#[from] weft_markup::MarkupError),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("{format} is not supported for {type_name}")]
    UnsupportedFormat {
        format: DataFormat,
        type_name: &'static str,
    },
    #[error("CSV needs a header line and at least one data line")]
    MissingRows,
    #[error("expected root element <{expected}>, found <{found}>")]
    WrongRoot { expected: String, found: String },
    #[error("parse error: {0}")]
    Parse(String),
}
