use std::fs;
use std::path::{Path, PathBuf};

use weft_structs::Sprite;

use crate::error::CodecError;

pub const DEFAULT_ASSETS_ROOT: &str = "assets";
pub const DEFAULT_SPRITES_DIR: &str = "Sprites";

/// Where sprite references are resolved from.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    pub assets_root: PathBuf,
    pub sprites_dir: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from(DEFAULT_ASSETS_ROOT),
            sprites_dir: DEFAULT_SPRITES_DIR.to_string(),
        }
    }
}

impl AssetPaths {
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        Self {
            assets_root: assets_root.into(),
            ..Self::default()
        }
    }

    pub fn sprites_root(&self) -> PathBuf {
        self.assets_root.join(&self.sprites_dir)
    }

    /// `<assets_root>/<sprites_dir>/<relative>`, separators normalized.
    pub fn resolve_sprite(&self, relative: &str) -> PathBuf {
        let relative = relative.trim().replace('\\', "/");
        let relative = relative.trim_start_matches('/');
        self.sprites_root().join(relative)
    }
}

/// Decodes PNG/JPEG/... bytes into an RGBA sprite.
pub fn decode_sprite(source: &str, bytes: &[u8]) -> Result<Sprite, CodecError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Sprite::from_rgba(source, width, height, rgba.into_raw()))
}

pub fn load_sprite_file(path: &Path, source: &str) -> Result<Sprite, CodecError> {
    let bytes = fs::read(path)?;
    decode_sprite(source, &bytes)
}
