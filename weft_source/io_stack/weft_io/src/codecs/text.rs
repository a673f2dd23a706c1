use std::fmt::Display;
use std::str::FromStr;

use super::Codec;
use crate::error::CodecError;

/// Canonical `Display` form, parsed back with `FromStr`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextCodec;

impl<T> Codec<T> for TextCodec
where
    T: Display + FromStr,
    T::Err: Display,
{
    fn encode(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        Ok(value.to_string().into_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, CodecError> {
        let text = String::from_utf8(bytes.to_vec())?;
        // A trailing line break from an editor is not part of the value.
        let text = text.trim_end_matches(['\r', '\n']);
        text.parse::<T>()
            .map_err(|e| CodecError::Parse(format!("'{text}': {e}")))
    }
}
