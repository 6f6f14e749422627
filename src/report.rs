use serde::Serialize;

use crate::sanitizer::{strip_tracking_params, tracking_params_present};

/// Per-URL result of a sanitization pass, shaped for `--json` output.
#[derive(Debug, Serialize)]
pub struct UrlReport {
    pub original: String,
    pub cleaned: String,
    pub tracking_params: Vec<String>,
}

impl UrlReport {
    pub fn for_url(url: &str) -> Self {
        UrlReport {
            original: url.to_string(),
            cleaned: strip_tracking_params(url),
            tracking_params: tracking_params_present(url),
        }
    }

    pub fn was_cleaned(&self) -> bool {
        !self.tracking_params.is_empty()
    }
}
