use crate::{
    metadata::{Category, MediaSignals},
    registry::CategoryClassifier,
};

/// Catch-all, registered last.
pub struct GenericClassifier;

impl CategoryClassifier for GenericClassifier {
    fn name(&self) -> &'static str {
        "GenericClassifier"
    }

    fn category(&self) -> Category {
        Category::Other
    }

    fn matches(&self, _: &MediaSignals<'_>) -> bool {
        true
    }
}
