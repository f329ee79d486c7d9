use crate::{
    metadata::{Category, MediaSignals},
    registry::CategoryClassifier,
};

/// Videos win over every filename heuristic.
pub struct VideoClassifier;

impl CategoryClassifier for VideoClassifier {
    fn name(&self) -> &'static str {
        "VideoClassifier"
    }

    fn category(&self) -> Category {
        Category::Video
    }

    fn matches(&self, signals: &MediaSignals<'_>) -> bool {
        signals.item.is_video()
    }
}
