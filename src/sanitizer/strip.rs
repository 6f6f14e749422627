use url::Url;

use super::registry::raw_name_matches;

/// Returns a copy of `url` with all registered tracking parameters removed.
///
/// Surviving parameters keep their original order, casing, and encoding.
/// Input that does not parse as an absolute URL is returned unchanged, as is
/// any URL from which nothing needed to be removed.
pub fn strip_tracking_params(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(p) => p,
        Err(_) => return url.to_string(),
    };

    match strip_parsed_query(&parsed) {
        Some(stripped) => stripped.to_string(),
        None => url.to_string(),
    }
}

/// Parsed-value form of [`strip_tracking_params`]. Cannot fail: the input is
/// already a valid URL, so the worst case is returning a clone.
pub fn strip_tracking_params_url(url: &Url) -> Url {
    strip_parsed_query(url).unwrap_or_else(|| url.clone())
}

/// Core pass over the raw query string. Returns `None` when no parameter was
/// removed, so string callers can hand back their input byte-for-byte.
fn strip_parsed_query(url: &Url) -> Option<Url> {
    let query = url.query()?;

    let mut kept: Vec<&str> = Vec::new();
    let mut removed = 0usize;
    for pair in query.split('&') {
        let name = pair.split('=').next().unwrap_or(pair);
        if raw_name_matches(name) {
            removed += 1;
        } else {
            kept.push(pair);
        }
    }

    if removed == 0 {
        return None;
    }

    let mut stripped = url.clone();
    if kept.is_empty() {
        // No survivors: drop the query component entirely, no dangling '?'.
        stripped.set_query(None);
    } else {
        stripped.set_query(Some(kept.join("&").as_str()));
    }
    Some(stripped)
}
