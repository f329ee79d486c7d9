use std::sync::Arc;

use crate::{
    metadata::{Category, MediaItem, MediaSignals},
    patterns::TEMP_MARKERS,
};

/// One rule of the categorization table.
pub trait CategoryClassifier: Send + Sync {
    fn name(&self) -> &'static str;
    fn category(&self) -> Category;
    fn matches(&self, signals: &MediaSignals<'_>) -> bool;
}

/// Ordered rule table. The highest-priority classifier that matches decides
/// the bucket; nothing matching means [`Category::Other`].
#[derive(Clone)]
pub struct ClassifierRegistry {
    pub classifiers: Vec<(u8, Arc<dyn CategoryClassifier>)>, // (priority, classifier)
    pub temp_markers: Vec<String>,
}

impl Default for ClassifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierRegistry {
    pub fn new() -> Self {
        Self {
            classifiers: Vec::new(),
            temp_markers: TEMP_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn register_with_priority(
        &mut self,
        priority: u8,
        classifier: Arc<dyn CategoryClassifier>,
    ) {
        self.classifiers.push((priority, classifier));

        // Highest first; stable, so equal priorities keep registration order
        self.classifiers.sort_by(|a, b| b.0.cmp(&a.0));
    }

    pub fn register(&mut self, classifier: Arc<dyn CategoryClassifier>) {
        self.register_with_priority(50, classifier);
    }

    pub fn add_temp_marker(&mut self, marker: impl Into<String>) {
        self.temp_markers.push(marker.into());
    }

    /// Whether the item is an OS scratch artifact that must never be shown.
    pub fn is_temporary(&self, item: &MediaItem) -> bool {
        let uri = item.uri();
        self.temp_markers.iter().any(|marker| uri.contains(marker.as_str()))
    }

    pub fn classify(&self, item: &MediaItem) -> Category {
        let signals = MediaSignals::new(item);

        for (priority, classifier) in &self.classifiers {
            if classifier.matches(&signals) {
                tracing::trace!(
                    "{} (priority {}) put {:?} in {}",
                    classifier.name(),
                    priority,
                    item.id,
                    classifier.category()
                );
                return classifier.category();
            }
        }

        Category::Other
    }

    /// Buckets every non-temporary item. Each bucket keeps input order.
    pub fn categorize<'a>(&self, items: &'a [MediaItem]) -> CategorizedMedia<'a> {
        let mut categorized = CategorizedMedia::default();

        for item in items {
            if self.is_temporary(item) {
                categorized.skipped_temporary += 1;
                continue;
            }
            let category = self.classify(item);
            categorized.buckets[category.as_index()].push(item);
        }

        tracing::debug!(
            "Categorized {} items ({} temporary skipped): {}",
            categorized.total(),
            categorized.skipped_temporary,
            categorized
                .iter()
                .map(|(c, items)| format!("{c}={}", items.len()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        categorized
    }
}

/// Six-bucket result of a categorization run. Every bucket is always present.
#[derive(Debug, Default, Clone)]
pub struct CategorizedMedia<'a> {
    buckets: [Vec<&'a MediaItem>; Category::VARIANTS.len()],
    pub skipped_temporary: usize,
}

impl<'a> CategorizedMedia<'a> {
    pub fn get(&self, category: Category) -> &[&'a MediaItem] {
        &self.buckets[category.as_index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[&'a MediaItem])> + '_ {
        Category::VARIANTS
            .iter()
            .map(move |c| (*c, self.buckets[c.as_index()].as_slice()))
    }

    /// Number of items that landed in some bucket.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn bucket_size(&self, category: Category) -> u64 {
        self.get(category)
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.size()))
    }
}

impl serde::Serialize for CategorizedMedia<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(Category::VARIANTS.len()))?;
        for (category, items) in self.iter() {
            map.serialize_entry(category.as_ref(), items)?;
        }
        map.end()
    }
}

impl std::fmt::Display for CategorizedMedia<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use colored::*;

        writeln!(f, "{}", "Categories".bold().blue())?;
        for (category, items) in self.iter() {
            writeln!(
                f,
                "  {:<10} {:<6} items ({})",
                category.as_ref().cyan(),
                items.len().to_string().green(),
                crate::stats::format_file_size(self.bucket_size(category)).magenta()
            )?;
        }

        if self.skipped_temporary > 0 {
            writeln!(
                f,
                "\n  {} {} temporary items",
                "⚠ Skipped".yellow().bold(),
                self.skipped_temporary
            )?;
        }

        Ok(())
    }
}
