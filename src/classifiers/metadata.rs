use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Kind of asset reported by the device media library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Photo,
    Video,
    /// Anything the library reports that is neither (audio, live photo
    /// variants, ...). Never treated as video.
    #[serde(other)]
    Unknown,
}

/// One photo or video descriptor as handed over by the host application.
///
/// Only metadata is carried here, never pixel data. Every field except `id`
/// may be missing in the upstream enumeration, so they are modelled as
/// `Option` and defaulted where they are used. `id` and `mediaType` fall
/// back to their defaults when absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_type: MediaType,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub creation_time: Option<f64>,
    #[serde(default)]
    pub album_id: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MediaItem {
    pub fn new(id: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            id: id.into(),
            media_type,
            ..Default::default()
        }
    }

    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    pub fn uri(&self) -> &str {
        self.uri.as_deref().unwrap_or_default()
    }

    pub fn filename(&self) -> &str {
        self.filename.as_deref().unwrap_or_default()
    }

    pub fn album_id(&self) -> &str {
        self.album_id.as_deref().unwrap_or_default()
    }

    pub fn size(&self) -> u64 {
        self.file_size.unwrap_or(0)
    }

    pub fn created(&self) -> f64 {
        self.creation_time.unwrap_or(0.0)
    }

    /// Both dimensions, only when the library reported them.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some((w, h)),
            _ => None,
        }
    }
}

/// Lower-cased view of the string fields the classifiers match against.
///
/// Built once per item so every rule sees the same normalized input.
#[derive(Debug, Clone)]
pub struct MediaSignals<'a> {
    pub item: &'a MediaItem,
    pub filename: String,
    pub uri: String,
    pub album_id: String,
}

impl<'a> MediaSignals<'a> {
    pub fn new(item: &'a MediaItem) -> Self {
        Self {
            item,
            filename: item.filename().to_lowercase(),
            uri: item.uri().to_lowercase(),
            album_id: item.album_id().to_lowercase(),
        }
    }

    /// True when `marker` shows up in the uri, the album id or the filename.
    pub fn mentions(&self, marker: &str) -> bool {
        self.uri.contains(marker)
            || self.album_id.contains(marker)
            || self.filename.contains(marker)
    }
}

/// The fixed set of buckets every item ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Screenshot,
    Whatsapp,
    Camera,
    Downloads,
    Video,
    Other,
}

impl Category {
    pub const VARIANTS: [Category; 6] = [
        Category::Screenshot,
        Category::Whatsapp,
        Category::Camera,
        Category::Downloads,
        Category::Video,
        Category::Other,
    ];

    #[inline]
    pub fn as_index(&self) -> usize {
        match self {
            Category::Screenshot => 0,
            Category::Whatsapp => 1,
            Category::Camera => 2,
            Category::Downloads => 3,
            Category::Video => 4,
            Category::Other => 5,
        }
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        match self {
            Category::Screenshot => "screenshot",
            Category::Whatsapp => "whatsapp",
            Category::Camera => "camera",
            Category::Downloads => "downloads",
            Category::Video => "video",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_line_up_with_indexes() {
        for (i, category) in Category::VARIANTS.iter().enumerate() {
            assert_eq!(category.as_index(), i);
        }
    }

    #[test]
    fn deserializes_host_records() {
        let json = r#"{
            "id": "A1",
            "uri": "file:///DCIM/IMG_0001.JPG",
            "filename": "IMG_0001.JPG",
            "mediaType": "photo",
            "width": 4032,
            "height": 3024,
            "fileSize": 2048,
            "creationTime": 1700000000000,
            "albumId": "camera-roll"
        }"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.media_type, MediaType::Photo);
        assert_eq!(item.dimensions(), Some((4032, 3024)));
        assert_eq!(item.size(), 2048);
        assert_eq!(item.album_id(), "camera-roll");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let item: MediaItem = serde_json::from_str(r#"{"id": "x", "mediaType": "audio"}"#).unwrap();
        assert_eq!(item.media_type, MediaType::Unknown);
        assert_eq!(item.filename(), "");
        assert_eq!(item.uri(), "");
        assert_eq!(item.size(), 0);
        assert_eq!(item.created(), 0.0);
        assert_eq!(item.dimensions(), None);
        assert!(!item.is_video());
    }

    #[test]
    fn null_id_and_media_type_use_defaults() {
        let item: MediaItem =
            serde_json::from_str(r#"{"id": null, "mediaType": null, "fileSize": null}"#).unwrap();
        assert_eq!(item.id, "");
        assert_eq!(item.media_type, MediaType::Photo);
        assert_eq!(item.size(), 0);
    }
}
