use serde::Serialize;

use crate::metadata::MediaItem;

/// System folder a device path points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    Screenshots,
    Whatsapp,
    Camera,
    Downloads,
}

impl AsRef<str> for Folder {
    fn as_ref(&self) -> &str {
        match self {
            Folder::Screenshots => "screenshots",
            Folder::Whatsapp => "whatsapp",
            Folder::Camera => "camera",
            Folder::Downloads => "downloads",
        }
    }
}

/// Guess the folder from the uri alone; `None` when nothing recognisable.
pub fn detect_photo_folder(item: &MediaItem) -> Option<Folder> {
    let uri = item.uri().to_lowercase();

    if uri.contains("screenshot") {
        Some(Folder::Screenshots)
    } else if uri.contains("whatsapp") {
        Some(Folder::Whatsapp)
    } else if uri.contains("dcim") || uri.contains("camera") {
        Some(Folder::Camera)
    } else if uri.contains("download") {
        Some(Folder::Downloads)
    } else {
        None
    }
}
