use linkscrub::*;
use std::fs;
use tempfile::tempdir;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestUrls;
    impl TestUrls {
        const INJECTED: &'static str = "https://www.youtube.com/results?app=desktop&search_query=COVID&ase_injection_interface=mobile_iphone12pro&ase_injection_wipe=true";
        const INJECTED_CLEANED: &'static str =
            "https://www.youtube.com/results?search_query=COVID";
        const UTM_HEAVY: &'static str =
            "https://example.com/page?utm_source=google&utm_medium=cpc&utm_campaign=summer&content=article";
        const UTM_HEAVY_CLEANED: &'static str = "https://example.com/page?content=article";
        const FBCLID: &'static str = "https://example.com/page?fbclid=abc123&product=shoes";
        const FBCLID_CLEANED: &'static str = "https://example.com/page?product=shoes";
        const CLEAN: &'static str = "https://example.com/search?q=test&page=1&sort=date";
        const WITH_FRAGMENT: &'static str =
            "https://example.com/page?utm_source=test&section=intro#heading";
        const WITH_FRAGMENT_CLEANED: &'static str =
            "https://example.com/page?section=intro#heading";
        const UPPERCASE_UTM: &'static str =
            "https://example.com/page?UTM_SOURCE=test&content=article";
        const UPPERCASE_UTM_CLEANED: &'static str = "https://example.com/page?content=article";
        const INVALID_NOT_URL: &'static str = "not-a-valid-url";
    }

    #[test]
    fn test_strip_injected_params() {
        assert_eq!(
            strip_tracking_params(TestUrls::INJECTED),
            TestUrls::INJECTED_CLEANED
        );
    }

    #[test]
    fn test_strip_utm_params() {
        assert_eq!(
            strip_tracking_params(TestUrls::UTM_HEAVY),
            TestUrls::UTM_HEAVY_CLEANED
        );
    }

    #[test]
    fn test_strip_click_id() {
        assert_eq!(
            strip_tracking_params(TestUrls::FBCLID),
            TestUrls::FBCLID_CLEANED
        );
    }

    #[test]
    fn test_clean_url_unchanged() {
        assert_eq!(strip_tracking_params(TestUrls::CLEAN), TestUrls::CLEAN);
    }

    #[test]
    fn test_fragment_preserved() {
        assert_eq!(
            strip_tracking_params(TestUrls::WITH_FRAGMENT),
            TestUrls::WITH_FRAGMENT_CLEANED
        );
    }

    #[test]
    fn test_case_insensitive_strip() {
        assert_eq!(
            strip_tracking_params(TestUrls::UPPERCASE_UTM),
            TestUrls::UPPERCASE_UTM_CLEANED
        );
    }

    #[test]
    fn test_invalid_url_fail_soft() {
        assert_eq!(
            strip_tracking_params(TestUrls::INVALID_NOT_URL),
            TestUrls::INVALID_NOT_URL
        );
        assert!(tracking_params_present(TestUrls::INVALID_NOT_URL).is_empty());
        assert!(!has_tracking_params(TestUrls::INVALID_NOT_URL));
    }

    #[test]
    fn test_inspector_reports_names() {
        assert_eq!(
            tracking_params_present(
                "https://example.com/page?utm_source=google&utm_medium=cpc&content=article"
            ),
            vec!["utm_source", "utm_medium"]
        );
        assert!(!has_tracking_params("https://example.com/page?q=test&page=1"));
    }

    #[test]
    fn test_strip_is_idempotent() {
        for url in [
            TestUrls::INJECTED,
            TestUrls::UTM_HEAVY,
            TestUrls::WITH_FRAGMENT,
            TestUrls::CLEAN,
            TestUrls::INVALID_NOT_URL,
        ] {
            let once = strip_tracking_params(url);
            assert_eq!(strip_tracking_params(&once), once);
        }
    }

    #[test]
    fn test_stripped_output_carries_no_tracking_params() {
        for url in [TestUrls::INJECTED, TestUrls::UTM_HEAVY, TestUrls::FBCLID] {
            let cleaned = strip_tracking_params(url);
            assert!(!has_tracking_params(&cleaned), "leftover in {}", cleaned);
        }
    }

    #[test]
    fn test_registry_is_inspectable() {
        assert!(TRACKING_PARAM_NAMES.contains(&"utm_source"));
        assert!(TRACKING_PARAM_NAMES.contains(&"fbclid"));
        assert!(TRACKING_PARAM_NAMES.contains(&"gclid"));
        assert!(TRACKING_PARAM_NAMES.contains(&"ase_injection_interface"));
        assert!(!TRACKING_PARAM_NAMES.contains(&"q"));
        assert!(!TRACKING_PARAM_NAMES.contains(&"search_query"));
    }

    #[test]
    fn test_report_round_trip() {
        let report = UrlReport::for_url(TestUrls::UTM_HEAVY);
        assert_eq!(report.original, TestUrls::UTM_HEAVY);
        assert_eq!(report.cleaned, TestUrls::UTM_HEAVY_CLEANED);
        assert_eq!(
            report.tracking_params,
            vec!["utm_source", "utm_medium", "utm_campaign"]
        );
    }

    #[test]
    fn test_urls_from_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("urls.csv");
        fs::write(
            &file_path,
            format!("{},{}\n{}\n", TestUrls::UTM_HEAVY, TestUrls::CLEAN, TestUrls::FBCLID),
        )
        .unwrap();

        let urls = sources::urls_from_file(file_path.to_str().unwrap()).unwrap();
        assert_eq!(
            urls,
            vec![TestUrls::UTM_HEAVY, TestUrls::CLEAN, TestUrls::FBCLID]
        );
    }
}
