use std::{fs, path::Path};

use crate::{
    errors::{Result, SweepError},
    metadata::MediaItem,
};

/// Read a JSON array of media records as exported by the host application.
pub fn load_media_items<P: AsRef<Path>>(path: P) -> Result<Vec<MediaItem>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(SweepError::InvalidPath(path.to_path_buf()));
    }

    let data = fs::read_to_string(path)?;
    let items: Vec<MediaItem> = serde_json::from_str(&data).map_err(|e| SweepError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("Loaded {} media items from {}", items.len(), path.display());
    Ok(items)
}
