use crate::{
    metadata::{Category, MediaSignals},
    patterns::{any_match, WHATSAPP_FILENAMES, WHATSAPP_MARKER},
    registry::CategoryClassifier,
};

/// Media received through WhatsApp. The app marker also covers its shared
/// group container (`group.net.whatsapp`).
pub struct WhatsappClassifier;

impl CategoryClassifier for WhatsappClassifier {
    fn name(&self) -> &'static str {
        "WhatsappClassifier"
    }

    fn category(&self) -> Category {
        Category::Whatsapp
    }

    fn matches(&self, signals: &MediaSignals<'_>) -> bool {
        signals.mentions(WHATSAPP_MARKER) || any_match(&WHATSAPP_FILENAMES, &signals.filename)
    }
}
