use crate::{
    metadata::{Category, MediaSignals},
    patterns::{any_match, CAMERA_FILENAMES},
    registry::CategoryClassifier,
};

pub struct CameraClassifier;

impl CategoryClassifier for CameraClassifier {
    fn name(&self) -> &'static str {
        "CameraClassifier"
    }

    fn category(&self) -> Category {
        Category::Camera
    }

    fn matches(&self, signals: &MediaSignals<'_>) -> bool {
        any_match(&CAMERA_FILENAMES, &signals.filename)
    }
}
