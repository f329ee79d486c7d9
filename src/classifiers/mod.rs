pub mod camera_classifier;
pub mod downloads_classifier;
pub mod generic;
pub mod metadata;
pub mod patterns;
pub mod registry;
pub mod screenshot_classifier;
pub mod social_classifier;
pub mod video_classifier;
pub mod whatsapp_classifier;
