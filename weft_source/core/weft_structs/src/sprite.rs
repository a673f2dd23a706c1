use std::fmt;
use std::sync::Arc;

use crate::Vector2;

/// Decoded RGBA8 image ready to be drawn. Pixel storage is shared, so clones are cheap.
#[derive(Clone, PartialEq)]
pub struct Sprite {
    /// Path the sprite was resolved from, relative to the sprites directory.
    pub source: String,
    pub width: u32,
    pub height: u32,
    /// Normalized pivot; (0.5, 0.5) is the image centre.
    pub pivot: Vector2,
    pixels: Arc<[u8]>,
}

impl Sprite {
    pub fn from_rgba(source: impl Into<String>, width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            source: source.into(),
            width,
            height,
            pivot: Vector2::new(0.5, 0.5),
            pixels: rgba.into(),
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("source", &self.source)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pivot", &self.pivot)
            .finish()
    }
}
