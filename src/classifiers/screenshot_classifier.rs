use crate::{
    metadata::{Category, MediaSignals},
    patterns::{any_match, SCREENSHOT_FILENAMES, SCREEN_RESOLUTIONS},
    registry::CategoryClassifier,
};

/// Screen captures, recognised by name or by an exact phone screen size.
pub struct ScreenshotClassifier {
    resolutions: Vec<(u32, u32)>,
}

impl Default for ScreenshotClassifier {
    fn default() -> Self {
        Self {
            resolutions: SCREEN_RESOLUTIONS.to_vec(),
        }
    }
}

impl ScreenshotClassifier {
    /// Built-in resolution table extended with `extra`.
    pub fn with_resolutions(extra: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let mut classifier = Self::default();
        for resolution in extra {
            if !classifier.resolutions.contains(&resolution) {
                classifier.resolutions.push(resolution);
            }
        }
        classifier
    }

    pub fn resolutions(&self) -> &[(u32, u32)] {
        &self.resolutions
    }

    fn is_screen_sized(&self, signals: &MediaSignals<'_>) -> bool {
        signals
            .item
            .dimensions()
            .is_some_and(|dims| self.resolutions.contains(&dims))
    }
}

impl CategoryClassifier for ScreenshotClassifier {
    fn name(&self) -> &'static str {
        "ScreenshotClassifier"
    }

    fn category(&self) -> Category {
        Category::Screenshot
    }

    fn matches(&self, signals: &MediaSignals<'_>) -> bool {
        let filename = signals.filename.as_str();

        filename.contains("screenshot")
            || filename.contains("screen shot")
            || any_match(&SCREENSHOT_FILENAMES, filename)
            || self.is_screen_sized(signals)
    }
}
