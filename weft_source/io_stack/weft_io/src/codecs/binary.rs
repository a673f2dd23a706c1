use serde::Serialize;
use serde::de::DeserializeOwned;

use super::Codec;
use crate::error::CodecError;

/// bincode. Only guaranteed to round-trip within the same build.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryCodec;

impl<T: Serialize + DeserializeOwned> Codec<T> for BinaryCodec {
    fn encode(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(value)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, CodecError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
