use std::collections::HashSet;
use std::sync::OnceLock;
use urlencoding::decode;

/// Canonical (lower-case) names of known tracking query parameters.
///
/// Grouped by origin. Membership here is a configuration decision, not an
/// algorithmic one; the list is public so callers and tests can inspect it.
pub const TRACKING_PARAM_NAMES: &[&str] = &[
    // Google Analytics / UTM campaign parameters
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "utm_id",
    "utm_name",
    // Ad and social platform click identifiers
    "fbclid",
    "gclid",
    "gclsrc",
    "dclid",
    "wbraid",
    "gbraid",
    "msclkid",
    "twclid",
    "ttclid",
    "igshid",
    "igsh",
    "yclid",
    "srsltid",
    // Email and marketing automation identifiers
    "mc_cid",
    "mc_eid",
    "mkt_tok",
    "_hsenc",
    "_hsmi",
    "vero_id",
    "oly_anon_id",
    "oly_enc_id",
    // Generic referrer/session attribution and client-interface hints
    "app",
    "ref",
    "ref_src",
    "ref_url",
    "source",
    "session_id",
    // Parameters injected into outbound result links by archive search pages
    "ase_injection_interface",
    "ase_injection_wipe",
];

static TRACKING_PARAM_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn tracking_param_set() -> &'static HashSet<&'static str> {
    TRACKING_PARAM_SET.get_or_init(|| TRACKING_PARAM_NAMES.iter().copied().collect())
}

/// Case-insensitive membership test against the registry.
///
/// Total over all inputs: empty or arbitrary strings simply return false.
pub fn is_tracking_param(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    tracking_param_set().contains(name.to_ascii_lowercase().as_str())
}

/// Registry test for a name taken directly from a raw query string.
///
/// Percent-escapes in the name are decoded before the test, so an encoded
/// spelling such as `utm%5Fsource` cannot slip past the registry. Names that
/// do not decode as UTF-8 are matched as-is.
pub(crate) fn raw_name_matches(name: &str) -> bool {
    match decode(name) {
        Ok(decoded) => is_tracking_param(&decoded),
        Err(_) => is_tracking_param(name),
    }
}
