use crate::{
    metadata::{Category, MediaSignals},
    patterns::{any_match, SocialApp, SOCIAL_APPS},
    registry::CategoryClassifier,
};

/// Media saved from social apps. Filed under downloads.
pub struct SocialClassifier {
    apps: &'static [SocialApp],
}

impl Default for SocialClassifier {
    fn default() -> Self {
        Self { apps: SOCIAL_APPS }
    }
}

impl SocialClassifier {
    /// Name of the first app whose marker or filename shape matches.
    pub fn detect_app(&self, signals: &MediaSignals<'_>) -> Option<&'static str> {
        self.apps
            .iter()
            .find(|app| {
                signals.mentions(app.marker) || any_match(app.filename_patterns, &signals.filename)
            })
            .map(|app| app.name)
    }
}

impl CategoryClassifier for SocialClassifier {
    fn name(&self) -> &'static str {
        "SocialClassifier"
    }

    fn category(&self) -> Category {
        Category::Downloads
    }

    fn matches(&self, signals: &MediaSignals<'_>) -> bool {
        self.detect_app(signals).is_some()
    }
}
