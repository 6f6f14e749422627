pub mod cli_args;
pub mod report;
pub mod sanitizer;
pub mod sources;

pub use report::UrlReport;
pub use sanitizer::{
    has_tracking_params, is_tracking_param, strip_tracking_params, strip_tracking_params_url,
    tracking_params_present, tracking_params_present_url, TRACKING_PARAM_NAMES,
};
