mod classifiers;
mod engine;
mod interface;

pub mod errors;

pub use classifiers::{
    camera_classifier, downloads_classifier, generic, metadata, patterns, registry,
    screenshot_classifier, social_classifier, video_classifier, whatsapp_classifier,
};
pub use engine::{config, duplicates, folders, loader, stats, utils};
pub use interface::cli;

pub use classifiers::metadata::{Category, MediaItem, MediaType};
pub use classifiers::registry::{CategorizedMedia, ClassifierRegistry};
pub use engine::duplicates::{DuplicateReport, find_duplicate_groups, fingerprint};
pub use engine::stats::format_file_size;
pub use engine::utils::{categorize, classify};
