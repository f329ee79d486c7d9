
#[cfg(test)]
mod tests {
    use sweep::{
        config::SweepConfig,
        format_file_size,
        metadata::{Category, MediaItem},
        stats::storage_stats,
        utils::create_classifier_registry,
    };

    use crate::test_utils::{photo, sized, video, with_uri};

    const MB: u64 = 1024 * 1024;

    fn with_size(mut item: MediaItem, size: u64) -> MediaItem {
        item.file_size = Some(size);
        item
    }

    fn library() -> Vec<MediaItem> {
        vec![
            with_size(video("v", "trip.mov"), 60 * MB),
            with_size(sized(photo("s", "holiday.jpg"), 1170, 2532), 1024),
            with_size(photo("c", "IMG_0001.jpg"), 2048),
            with_size(
                with_uri(photo("t", "Screenshot.png"), "file:///var/folders/ab/Screenshot.png"),
                100,
            ),
        ]
    }

    #[test]
    fn test_formatter_boundaries() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(5 * MB / 2), "2.5 MB");
    }

    #[test]
    fn test_totals_cover_every_item() {
        let items = library();
        let config = SweepConfig::default();
        let stats = storage_stats(&items, &create_classifier_registry(&config), &config);

        assert_eq!(stats.total_size, 60 * MB + 1024 + 2048 + 100);
        assert_eq!(stats.photo_count, 3);
        assert_eq!(stats.video_count, 1);
        assert_eq!(stats.readable_total_size, format_file_size(stats.total_size));
    }

    #[test]
    fn test_categories_skip_temporary_items() {
        let items = library();
        let config = SweepConfig::default();
        let stats = storage_stats(&items, &create_classifier_registry(&config), &config);

        assert_eq!(stats.category(Category::Screenshot).count, 1);
        assert_eq!(stats.category(Category::Screenshot).size, 1024);
        assert_eq!(stats.category(Category::Camera).size, 2048);
        assert_eq!(stats.category(Category::Video).size, 60 * MB);
        assert_eq!(stats.category(Category::Other).count, 0);

        let bucketed: usize = Category::VARIANTS.iter().map(|c| stats.category(*c).count).sum();
        assert_eq!(bucketed, 3);
    }

    #[test]
    fn test_large_files_use_threshold() {
        let items = library();
        let config = SweepConfig::default();
        let stats = storage_stats(&items, &create_classifier_registry(&config), &config);

        assert_eq!(stats.large_files.len(), 1);
        assert_eq!(stats.large_files[0].item.id, "v");
        assert_eq!(stats.large_files[0].readable_size, "60 MB");

        let strict = SweepConfig {
            large_file_threshold: 1500,
            ..Default::default()
        };
        let stats = storage_stats(&items, &create_classifier_registry(&strict), &strict);
        let large: Vec<_> = stats.large_files.iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(large, vec!["v", "c"]);
    }

    #[test]
    fn test_json_shape() {
        let items = library();
        let config = SweepConfig::default();
        let stats = storage_stats(&items, &create_classifier_registry(&config), &config);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["photoCount"], 3);
        assert_eq!(json["byCategory"]["camera"]["size"], 2048);
        assert_eq!(json["byCategory"]["camera"]["readableSize"], "2 KB");
        assert_eq!(json["byCategory"].as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_formatter_rounds_ties_up() {
        assert_eq!(format_file_size(1152), "1.13 KB");
        assert_eq!(format_file_size(1664), "1.63 KB");
    }

    #[test]
    fn test_huge_sizes_saturate() {
        let items = vec![
            with_size(photo("a", "IMG_0001.jpg"), u64::MAX),
            with_size(photo("b", "IMG_0002.jpg"), u64::MAX),
        ];
        let config = SweepConfig::default();
        let stats = storage_stats(&items, &create_classifier_registry(&config), &config);

        assert_eq!(stats.total_size, u64::MAX);
        assert_eq!(stats.category(Category::Camera).size, u64::MAX);
        assert_eq!(stats.large_files.len(), 2);
    }
}
