use std::fmt;

use tracing::warn;

/// Non-fatal notice attached to uses of a deprecated driver-construction
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    pub parameter: &'static str,
    pub message: String,
}

impl DeprecationNotice {
    pub fn parameter(parameter: &'static str, advice: &str) -> Self {
        Self {
            parameter,
            message: format!("the '{parameter}' argument is deprecated; {advice}"),
        }
    }
}

impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Where deprecation notices go. Injectable so callers and tests can observe
/// them directly instead of scraping log output.
pub trait DeprecationSink: Send + Sync {
    fn notify(&self, notice: &DeprecationNotice);
}

/// Default sink: structured warning on the crate's tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DeprecationSink for TracingSink {
    fn notify(&self, notice: &DeprecationNotice) {
        warn!(parameter = notice.parameter, "{}", notice.message);
    }
}
