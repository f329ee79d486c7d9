use colored::*;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    config::SweepConfig,
    metadata::{Category, MediaItem},
    registry::ClassifierRegistry,
};

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size in base 1024, at most two decimals, trailing zeros
/// dropped (`1536` → `"1.5 KB"`). Anything past GB stays in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    while unit + 1 < UNITS.len() && bytes >= 1u64 << (10 * (unit + 1)) {
        unit += 1;
    }

    // Ties round away from zero, not to even as `{:.2}` does
    let scaled = bytes as f64 / (1u64 << (10 * unit)) as f64;
    let rounded = (scaled * 100.0).round() / 100.0;
    let rendered = format!("{rounded:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');

    format!("{} {}", rendered, UNITS[unit])
}

#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct CategoryStats {
    pub count: usize,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LargeFile<'a> {
    pub item: &'a MediaItem,
    pub readable_size: String,
}

/// Library-wide storage breakdown.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats<'a> {
    pub total_size: u64,
    pub readable_total_size: String,
    pub photo_count: usize,
    pub video_count: usize,
    #[serde(serialize_with = "serialize_by_category")]
    pub by_category: [CategoryStats; Category::VARIANTS.len()],
    pub large_files: Vec<LargeFile<'a>>,
}

impl StorageStats<'_> {
    pub fn category(&self, category: Category) -> CategoryStats {
        self.by_category[category.as_index()]
    }
}

/// Totals and counts cover every item; the per-category figures only cover
/// what survives temp-file filtering.
pub fn storage_stats<'a>(
    items: &'a [MediaItem],
    registry: &ClassifierRegistry,
    config: &SweepConfig,
) -> StorageStats<'a> {
    let mut stats = StorageStats::default();

    for item in items {
        let size = item.size();
        stats.total_size = stats.total_size.saturating_add(size);

        if item.is_video() {
            stats.video_count += 1;
        } else {
            stats.photo_count += 1;
        }

        if size > config.large_file_threshold {
            stats.large_files.push(LargeFile {
                item,
                readable_size: format_file_size(size),
            });
        }
    }

    let categorized = registry.categorize(items);
    for (category, bucket) in categorized.iter() {
        stats.by_category[category.as_index()] = CategoryStats {
            count: bucket.len(),
            size: categorized.bucket_size(category),
        };
    }

    stats.readable_total_size = format_file_size(stats.total_size);
    stats
}

fn serialize_by_category<S>(
    by_category: &[CategoryStats; Category::VARIANTS.len()],
    s: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Entry {
        count: usize,
        size: u64,
        readable_size: String,
    }

    let mut map = s.serialize_map(Some(by_category.len()))?;
    for category in Category::VARIANTS {
        let stats = by_category[category.as_index()];
        map.serialize_entry(
            category.as_ref(),
            &Entry {
                count: stats.count,
                size: stats.size,
                readable_size: format_file_size(stats.size),
            },
        )?;
    }
    map.end()
}

impl std::fmt::Display for StorageStats<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "Storage".bold().blue())?;
        writeln!(f, "  Total:   {}", self.readable_total_size.yellow())?;
        writeln!(f, "  Photos:  {}", self.photo_count.to_string().green())?;
        writeln!(f, "  Videos:  {}", self.video_count.to_string().green())?;

        writeln!(f, "\n{}", "By category:".bold().blue())?;
        for category in Category::VARIANTS {
            let stats = self.category(category);
            writeln!(
                f,
                "  {:<10} {:<6} items ({})",
                category.as_ref().cyan(),
                stats.count.to_string().green(),
                format_file_size(stats.size).magenta()
            )?;
        }

        if !self.large_files.is_empty() {
            writeln!(f, "\n{}", "Large files:".bold().blue())?;
            for large in &self.large_files {
                writeln!(f, "  - {:<32} {}", large.item.filename(), large.readable_size.yellow())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_boundaries() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_file_size(134_692_381), "128.45 MB");
        assert_eq!(format_file_size(1100), "1.07 KB");
    }

    #[test]
    fn rounds_exact_ties_up() {
        assert_eq!(format_file_size(1152), "1.13 KB");
        assert_eq!(format_file_size(1664), "1.63 KB");
        assert_eq!(format_file_size(1_179_648), "1.13 MB");
    }

    #[test]
    fn caps_at_gigabytes() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }
}
