use std::{path::PathBuf, sync::Arc};

use dirs::config_dir;
use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    camera_classifier::CameraClassifier,
    config::SweepConfig,
    downloads_classifier::DownloadsClassifier,
    errors::SweepError,
    generic::GenericClassifier,
    metadata::{Category, MediaItem},
    registry::{CategorizedMedia, ClassifierRegistry},
    screenshot_classifier::ScreenshotClassifier,
    social_classifier::SocialClassifier,
    video_classifier::VideoClassifier,
    whatsapp_classifier::WhatsappClassifier,
};

static DEFAULT_REGISTRY: Lazy<ClassifierRegistry> =
    Lazy::new(|| create_classifier_registry(&SweepConfig::default()));

pub fn init_tracing() {
    // Example: export RUST_LOG="info,sweep=debug"
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false) // hide target module path
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::LocalTime::rfc_3339()) // timestamp
        .compact()
        .init();
}

pub fn default_config_path() -> PathBuf {
    let mut path = config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sweep");
    path.push("config.json");

    path
}

/// Creates the categorization rule table, highest priority first
pub fn create_classifier_registry(config: &SweepConfig) -> ClassifierRegistry {
    let mut registry = ClassifierRegistry::new();

    // Media type beats every filename heuristic
    registry.register_with_priority(100, Arc::new(VideoClassifier));

    // Screenshots before the looser download/camera name patterns
    registry.register_with_priority(
        90,
        Arc::new(ScreenshotClassifier::with_resolutions(config.screen_resolutions())),
    );

    // Messaging apps often store media under download-like paths
    registry.register_with_priority(80, Arc::new(WhatsappClassifier));

    registry.register_with_priority(70, Arc::new(SocialClassifier::default()));
    registry.register_with_priority(60, Arc::new(DownloadsClassifier));
    registry.register_with_priority(50, Arc::new(CameraClassifier));

    // Fallback
    registry.register_with_priority(10, Arc::new(GenericClassifier));

    for marker in &config.extra_temp_markers {
        registry.add_temp_marker(marker.clone());
    }

    registry
}

/// Bucket `items` with the built-in rules.
pub fn categorize(items: &[MediaItem]) -> CategorizedMedia<'_> {
    DEFAULT_REGISTRY.categorize(items)
}

pub fn classify(item: &MediaItem) -> Category {
    DEFAULT_REGISTRY.classify(item)
}

pub fn humanize(e: &SweepError) -> String {
    match e {
        SweepError::InvalidPath(path) => format!("No media list at {}", path.display()),
        SweepError::Json { path, source } => {
            format!("Could not parse {}: {}", path.display(), source)
        }
        other => other.to_string(), // fall back to #[error(..)]
    }
}
