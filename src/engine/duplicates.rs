use std::collections::{BTreeMap, HashMap};

use chrono::DateTime;
use colored::*;
use serde::Serialize;

use crate::{metadata::MediaItem, patterns::IMAGE_EXTENSION, stats::format_file_size};

const SUFFIX_LEN: usize = 10;

/// Cheap structural key for spotting probable copies:
/// `{size}_{width}_{height}_{last 10 chars of the filename stem}`.
///
/// Missing fields collapse to `0` / empty, so sparse records tend to share
/// a key with each other.
pub fn fingerprint(item: &MediaItem) -> String {
    let stem = IMAGE_EXTENSION.replace(item.filename(), "");

    format!(
        "{}_{}_{}_{}",
        item.size(),
        item.width.unwrap_or(0),
        item.height.unwrap_or(0),
        tail_chars(&stem, SUFFIX_LEN)
    )
}

fn tail_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    let start = s
        .char_indices()
        .nth(count - n)
        .map_or(0, |(idx, _)| idx);
    &s[start..]
}

#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateReport<'a> {
    /// Fingerprint → items sharing it, earliest first. Only groups of two or more.
    pub fingerprint_groups: BTreeMap<String, Vec<&'a MediaItem>>,
    /// Items that could go if one copy per group were kept.
    pub total_extra_copies: usize,
}

impl<'a> DuplicateReport<'a> {
    pub fn group_count(&self) -> usize {
        self.fingerprint_groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprint_groups.is_empty()
    }

    /// Bytes freed by keeping only the first (earliest) item of every group.
    pub fn reclaimable_bytes(&self) -> u64 {
        self.fingerprint_groups
            .values()
            .flat_map(|group| group.iter().skip(1))
            .fold(0u64, |total, item| total.saturating_add(item.size()))
    }
}

pub fn find_duplicate_groups(items: &[MediaItem]) -> DuplicateReport<'_> {
    let mut by_fingerprint: HashMap<String, Vec<&MediaItem>> = HashMap::new();

    for item in items.iter().filter(|item| !item.is_video()) {
        by_fingerprint.entry(fingerprint(item)).or_default().push(item);
    }

    let mut report = DuplicateReport::default();
    for (key, mut group) in by_fingerprint {
        if group.len() < 2 {
            continue;
        }
        // Stable: equal timestamps keep input order
        group.sort_by(|a, b| a.created().total_cmp(&b.created()));
        report.total_extra_copies += group.len() - 1;
        report.fingerprint_groups.insert(key, group);
    }

    tracing::debug!(
        "Scanned {} items: {} duplicate groups, {} extra copies",
        items.len(),
        report.group_count(),
        report.total_extra_copies
    );

    report
}

impl std::fmt::Display for DuplicateReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "Duplicates".bold().blue())?;

        if self.is_empty() {
            return writeln!(f, "  {}", "No duplicates found".green());
        }

        for (key, group) in &self.fingerprint_groups {
            writeln!(f, "\n  {} ({} items)", key.cyan(), group.len())?;
            for (i, item) in group.iter().enumerate() {
                let marker = if i == 0 { "keep".green() } else { "copy".yellow() };
                writeln!(
                    f,
                    "    [{}] {:<32} {:>10}  {}",
                    marker,
                    item.filename(),
                    format_file_size(item.size()),
                    format_created(item.created())
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "  Groups:       {}", self.group_count().to_string().yellow())?;
        writeln!(f, "  Extra copies: {}", self.total_extra_copies.to_string().yellow())?;
        writeln!(f, "  Reclaimable:  {}", format_file_size(self.reclaimable_bytes()).magenta())
    }
}

fn format_created(millis: f64) -> String {
    DateTime::from_timestamp_millis(millis as i64)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
