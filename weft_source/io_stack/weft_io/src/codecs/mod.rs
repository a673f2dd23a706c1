pub mod binary;
pub mod csv;
pub mod json;
pub mod text;
pub mod xml;

pub use self::binary::BinaryCodec;
pub use self::csv::CsvCodec;
pub use self::json::JsonCodec;
pub use self::text::TextCodec;
pub use self::xml::XmlCodec;

use crate::error::CodecError;

/// Byte-level encoding of a `T` in one format.
pub trait Codec<T> {
    fn encode(&self, value: &T) -> Result<Vec<u8>, CodecError>;
    fn decode(&self, bytes: &[u8]) -> Result<T, CodecError>;
}
