use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codecs::{BinaryCodec, Codec, CsvCodec, JsonCodec, TextCodec, XmlCodec};
use crate::error::CodecError;
use crate::format::DataFormat;
use crate::record::Record;

/// Picks the codec for a `DataFormat`. Formats a type cannot be written in fail
/// with `CodecError::UnsupportedFormat`.
pub trait Persist: Sized {
    fn encode_as(&self, format: DataFormat) -> Result<Vec<u8>, CodecError>;
    fn decode_as(bytes: &[u8], format: DataFormat) -> Result<Self, CodecError>;
}

fn unsupported<T>(format: DataFormat) -> CodecError {
    CodecError::UnsupportedFormat {
        format,
        type_name: std::any::type_name::<T>(),
    }
}

/// Record tables: every format except plain text.
impl<R> Persist for Vec<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    fn encode_as(&self, format: DataFormat) -> Result<Vec<u8>, CodecError> {
        match format {
            DataFormat::Binary => BinaryCodec.encode(self),
            DataFormat::Json => JsonCodec.encode(self),
            DataFormat::Xml => XmlCodec.encode(self),
            DataFormat::Csv => CsvCodec.encode(self),
            DataFormat::Text => Err(unsupported::<Self>(format)),
        }
    }

    fn decode_as(bytes: &[u8], format: DataFormat) -> Result<Self, CodecError> {
        match format {
            DataFormat::Binary => BinaryCodec.decode(bytes),
            DataFormat::Json => JsonCodec.decode(bytes),
            DataFormat::Xml => XmlCodec.decode(bytes),
            DataFormat::Csv => CsvCodec.decode(bytes),
            DataFormat::Text => Err(unsupported::<Self>(format)),
        }
    }
}

/// Scalars: text, JSON and binary.
macro_rules! persist_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Persist for $ty {
                fn encode_as(&self, format: DataFormat) -> Result<Vec<u8>, CodecError> {
                    match format {
                        DataFormat::Text => TextCodec.encode(self),
                        DataFormat::Json => JsonCodec.encode(self),
                        DataFormat::Binary => BinaryCodec.encode(self),
                        DataFormat::Xml | DataFormat::Csv => Err(unsupported::<Self>(format)),
                    }
                }

                fn decode_as(bytes: &[u8], format: DataFormat) -> Result<Self, CodecError> {
                    match format {
                        DataFormat::Text => TextCodec.decode(bytes),
                        DataFormat::Json => JsonCodec.decode(bytes),
                        DataFormat::Binary => BinaryCodec.decode(bytes),
                        DataFormat::Xml | DataFormat::Csv => Err(unsupported::<Self>(format)),
                    }
                }
            }
        )+
    };
}

persist_scalar!(String, i32, i64, f32, f64, bool);
