//! Property tests for settings serialization.

use projscan_settings::{AnalyzeSettings, ScanConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn empty_scan_table_leaves_settings_untouched(
        prune in prop::collection::vec("[a-z_.]{1,10}", 0..4),
        skip in any::<bool>(),
        mb in 0u64..10_000,
    ) {
        let settings = AnalyzeSettings {
            prune,
            skip_large_files: skip,
            large_file_threshold_mb: mb,
            ..Default::default()
        };
        let mut overlaid = settings.clone();
        overlaid.apply_config(&ScanConfig::default());
        prop_assert_eq!(overlaid, settings);
    }

    #[test]
    fn max_file_bytes_never_panics(mb in any::<u64>()) {
        let settings = AnalyzeSettings {
            skip_large_files: true,
            large_file_threshold_mb: mb,
            ..Default::default()
        };
        prop_assert!(settings.max_file_bytes().is_some());
    }
}
