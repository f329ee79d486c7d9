#[cfg(test)]
mod tests {
    use std::io::Write;

    use sweep::{
        config::{DEFAULT_LARGE_FILE_THRESHOLD, Resolution, SweepConfig},
        errors::SweepError,
        utils::humanize,
    };
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(content.as_bytes()).unwrap();
        tmp.flush().unwrap();
        tmp
    }

    #[test]
    fn test_load_full_config() {
        let tmp = write_config(
            r#"{
                "extra_screen_resolutions": [{ "width": 1080, "height": 2400 }],
                "extra_temp_markers": ["/.Trash/"],
                "large_file_threshold": 1048576
            }"#,
        );

        let config = SweepConfig::load_from_file(tmp.path()).unwrap();

        assert_eq!(config.extra_screen_resolutions, vec![Resolution { width: 1080, height: 2400 }]);
        assert_eq!(config.extra_temp_markers, vec!["/.Trash/".to_string()]);
        assert_eq!(config.large_file_threshold, 1048576);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let tmp = write_config("{}");
        let config = SweepConfig::load_from_file(tmp.path()).unwrap();

        assert!(config.extra_screen_resolutions.is_empty());
        assert!(config.extra_temp_markers.is_empty());
        assert_eq!(config.large_file_threshold, DEFAULT_LARGE_FILE_THRESHOLD);
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let tmp = write_config(r#"{ "extra_screen_resolutions": [{ "width": 0, "height": 2400 }] }"#);
        let err = SweepConfig::load_from_file(tmp.path()).unwrap_err();
        assert!(matches!(err, SweepError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_temp_marker_rejected() {
        let tmp = write_config(r#"{ "extra_temp_markers": ["  "] }"#);
        let err = SweepConfig::load_from_file(tmp.path()).unwrap_err();
        assert!(matches!(err, SweepError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let tmp = write_config(r#"{ "large_file_threshold": 0 }"#);
        assert!(SweepConfig::load_from_file(tmp.path()).is_err());
    }

    #[test]
    fn test_malformed_json_names_the_file() {
        let tmp = write_config("{ not json");
        let err = SweepConfig::load_from_file(tmp.path()).unwrap_err();

        match &err {
            SweepError::Json { path, .. } => assert_eq!(path, tmp.path()),
            other => panic!("expected JSON error, got {other:?}"),
        }
        assert!(humanize(&err).contains(&tmp.path().display().to_string()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SweepConfig::load_from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SweepError::Io(_)));
    }
}
