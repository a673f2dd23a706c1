//! Generic Record Codec: typed values and record tables in binary, JSON,
//! XML, plain text and CSV, plus asset path and sprite helpers.

pub mod assets;
pub mod codecs;
pub mod error;
pub mod format;
pub mod persist;
pub mod record;
pub mod storage;

pub use assets::*;
pub use codecs::{BinaryCodec, Codec, CsvCodec, JsonCodec, TextCodec, XmlCodec};
pub use error::*;
pub use format::*;
pub use persist::*;
pub use record::*;
pub use storage::*;
