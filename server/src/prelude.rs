pub use crate::core::app::App;
pub use manager_types::error::{Error, MgrResult};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
