use crate::{
    metadata::{Category, MediaSignals},
    patterns::{any_match, DOWNLOAD_FILENAMES, DOWNLOAD_MARKER},
    registry::CategoryClassifier,
};

/// Saved or downloaded images with generic names.
pub struct DownloadsClassifier;

impl CategoryClassifier for DownloadsClassifier {
    fn name(&self) -> &'static str {
        "DownloadsClassifier"
    }

    fn category(&self) -> Category {
        Category::Downloads
    }

    fn matches(&self, signals: &MediaSignals<'_>) -> bool {
        signals.mentions(DOWNLOAD_MARKER) || any_match(&DOWNLOAD_FILENAMES, &signals.filename)
    }
}
