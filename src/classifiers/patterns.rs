use once_cell::sync::Lazy;
use regex::Regex;

/// Exact pixel sizes of phone screens whose captures are saved as-is.
pub const SCREEN_RESOLUTIONS: &[(u32, u32)] = &[
    (1170, 2532), // iPhone 12/13/14 Pro
    (1179, 2556), // iPhone 14 Pro / 15
    (1290, 2796), // iPhone 15 Pro Max
    (1125, 2436), // iPhone X/XS/11 Pro
    (828, 1792),  // iPhone XR/11
];

/// Uri fragments of OS-generated scratch files. Matched case-sensitively
/// against the raw uri.
pub const TEMP_MARKERS: &[&str] = &["/T/TemporaryItems/", "NSIRD_screencaptureui", "/var/folders/"];

pub const WHATSAPP_MARKER: &str = "whatsapp";

pub const DOWNLOAD_MARKER: &str = "download";

/// Social apps whose saved media lands in the gallery, with the filename
/// shapes each one produces.
pub struct SocialApp {
    pub name: &'static str,
    pub marker: &'static str,
    pub filename_patterns: &'static Lazy<Vec<Regex>>,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("built-in media pattern must compile"))
        .collect()
}

pub static SCREENSHOT_FILENAMES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^screenshot\s",
        r"^img_[0-9]{4,5}\.png$",
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}.*\.png$",
        // Android
        r"^screenshot[-_][0-9]",
        r"^screen[-_][0-9]",
    ])
});

pub static WHATSAPP_FILENAMES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^img-[0-9]{8}-wa[0-9]{4}",
        r"^whatsapp[-_]",
        r"^wa[0-9]{4}",
        r"^ptt-[0-9]", // voice notes
    ])
});

static INSTAGRAM_FILENAMES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}",
        r"^[0-9]{13,}_[0-9]",
        r"^img_[0-9]{4}_[0-9]{6}_[0-9]{3}",
    ])
});

static SNAPCHAT_FILENAMES: Lazy<Vec<Regex>> = Lazy::new(Vec::new);

static TIKTOK_FILENAMES: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[r"^[0-9]{19}"]));

pub static SOCIAL_APPS: &[SocialApp] = &[
    SocialApp {
        name: "instagram",
        marker: "instagram",
        filename_patterns: &INSTAGRAM_FILENAMES,
    },
    SocialApp {
        name: "snapchat",
        marker: "snapchat",
        filename_patterns: &SNAPCHAT_FILENAMES,
    },
    SocialApp {
        name: "tiktok",
        marker: "tiktok",
        filename_patterns: &TIKTOK_FILENAMES,
    },
];

pub static DOWNLOAD_FILENAMES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^image[0-9]+\.(jpg|jpeg|png)$",
        r"^[0-9a-f]{32}\.(jpg|jpeg|png)$", // content hashes
    ])
});

pub static CAMERA_FILENAMES: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^img_[0-9]{4,}\.jpg$",
        r"^dsc[0-9]{4,}",
        r"^[0-9]{8}_[0-9]{6}\.jpg$",
        r"^photo_[0-9]",
        r"^cam[0-9]",
    ])
});

/// Image extensions dropped before taking the filename suffix of a fingerprint.
pub static IMAGE_EXTENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(jpg|jpeg|png|heic)$").expect("built-in media pattern must compile")
});

pub fn any_match(patterns: &[Regex], haystack: &str) -> bool {
    patterns.iter().any(|re| re.is_match(haystack))
}
