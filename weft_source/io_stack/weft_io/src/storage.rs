//! File-level save/load. The `try_*` functions return typed errors; `save`,
//! `load` and `load_first` log failures and never return an error.

use std::fs;
use std::path::Path;

use crate::error::CodecError;
use crate::format::DataFormat;
use crate::persist::Persist;

/// Creates the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }
    fs::create_dir_all(parent)?;
    log::info!("created directory {}", parent.display());
    Ok(())
}

pub fn try_save<T: Persist>(
    data: &T,
    path: impl AsRef<Path>,
    format: DataFormat,
) -> Result<(), CodecError> {
    let path = path.as_ref();
    let bytes = data.encode_as(format)?;
    ensure_parent_dir(path)?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn try_load<T: Persist>(path: impl AsRef<Path>, format: DataFormat) -> Result<T, CodecError> {
    let bytes = fs::read(path.as_ref())?;
    T::decode_as(&bytes, format)
}

/// Writes `data` to `path`. Returns `false` (and logs) on any failure.
pub fn save<T: Persist>(data: &T, path: impl AsRef<Path>, format: DataFormat) -> bool {
    let path = path.as_ref();
    match try_save(data, path, format) {
        Ok(()) => {
            log::debug!("saved {} as {format}", path.display());
            true
        }
        Err(e) => {
            log::error!("failed to save {} as {format}: {e}", path.display());
            false
        }
    }
}

/// Reads `path`. Returns `None` (and logs) on any failure.
pub fn load<T: Persist>(path: impl AsRef<Path>, format: DataFormat) -> Option<T> {
    let path = path.as_ref();
    match try_load(path, format) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("failed to load {} as {format}: {e}", path.display());
            None
        }
    }
}

/// First record of a stored table.
pub fn load_first<R>(path: impl AsRef<Path>, format: DataFormat) -> Option<R>
where
    Vec<R>: Persist,
{
    let path = path.as_ref();
    let first = load::<Vec<R>>(path, format)?.into_iter().next();
    if first.is_none() {
        log::warn!("{} holds no records", path.display());
    }
    first
}
