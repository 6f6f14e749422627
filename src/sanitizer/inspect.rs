use url::Url;

use super::registry::raw_name_matches;

/// Names of the tracking parameters carried by `url`, in order of appearance
/// and with their original casing. Empty when none match or when the input
/// does not parse as a URL.
pub fn tracking_params_present(url: &str) -> Vec<String> {
    match Url::parse(url) {
        Ok(parsed) => tracking_params_present_url(&parsed),
        Err(_) => Vec::new(),
    }
}

/// Parsed-value form of [`tracking_params_present`].
pub fn tracking_params_present_url(url: &Url) -> Vec<String> {
    let Some(query) = url.query() else {
        return Vec::new();
    };

    query
        .split('&')
        .filter_map(|pair| {
            let name = pair.split('=').next().unwrap_or(pair);
            if raw_name_matches(name) {
                Some(name.to_string())
            } else {
                None
            }
        })
        .collect()
}

/// True iff `url` carries at least one registered tracking parameter.
pub fn has_tracking_params(url: &str) -> bool {
    !tracking_params_present(url).is_empty()
}
