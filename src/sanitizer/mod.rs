mod inspect;
mod registry;
mod strip;

pub use inspect::{has_tracking_params, tracking_params_present, tracking_params_present_url};
pub use registry::{is_tracking_param, TRACKING_PARAM_NAMES};
pub use strip::{strip_tracking_params, strip_tracking_params_url};
