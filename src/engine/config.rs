use serde::Deserialize;
use std::{fs, path::Path};

use crate::errors::{Result, SweepError};

pub const DEFAULT_LARGE_FILE_THRESHOLD: u64 = 50 * 1024 * 1024; // 50MB

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// User tweaks layered on top of the built-in rule tables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Screen sizes treated as screenshots in addition to the built-in ones.
    pub extra_screen_resolutions: Vec<Resolution>,

    /// Uri fragments, matched case-sensitively, whose items are skipped.
    pub extra_temp_markers: Vec<String>,

    pub large_file_threshold: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            extra_screen_resolutions: Vec::new(),
            extra_temp_markers: Vec::new(),
            large_file_threshold: DEFAULT_LARGE_FILE_THRESHOLD,
        }
    }
}

impl SweepConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(&path)?;

        let config: SweepConfig = serde_json::from_str(&data).map_err(|e| SweepError::Json {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (idx, res) in self.extra_screen_resolutions.iter().enumerate() {
            if res.width == 0 || res.height == 0 {
                return Err(SweepError::InvalidConfig(format!(
                    "Screen resolution {} ({}x{}) must have non-zero width and height",
                    idx + 1,
                    res.width,
                    res.height
                )));
            }
        }

        if let Some(idx) = self.extra_temp_markers.iter().position(|m| m.trim().is_empty()) {
            return Err(SweepError::InvalidConfig(format!(
                "Temp marker {} is empty and would match every item",
                idx + 1
            )));
        }

        if self.large_file_threshold == 0 {
            return Err(SweepError::InvalidConfig(
                "large_file_threshold must be greater than zero".into(),
            ));
        }

        Ok(())
    }

    pub fn screen_resolutions(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.extra_screen_resolutions.iter().map(|r| (r.width, r.height))
    }
}
