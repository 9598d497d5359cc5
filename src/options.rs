use std::any::Any;

use serde_json::{Map, Value};

use crate::contributor::{CapabilityContributor, DriverOptions, WireMap};
use crate::profile::BROWSER_NAME;

pub(crate) const SAFARI: &str = "safari";
pub(crate) const TECH_PREVIEW: &str = "Safari Technology Preview";
pub(crate) const AUTOMATIC_INSPECTION: &str = "safari:automaticInspection";
pub(crate) const AUTOMATIC_PROFILING: &str = "safari:automaticProfiling";

/// Typed options bag for the Safari driver kind. Flags left at their default
/// are omitted from the wire map; the browser name is always present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SafariOptions {
    pub automatic_inspection: bool,
    pub automatic_profiling: bool,
    pub technology_preview: bool,
    extra: Map<String, Value>,
}

impl SafariOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra vendor or custom capability carried alongside the typed flags.
    pub fn set_capability(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.extra.insert(key.into(), value.into());
    }

    pub fn browser_name(&self) -> &'static str {
        if self.technology_preview {
            TECH_PREVIEW
        } else {
            SAFARI
        }
    }
}

impl CapabilityContributor for SafariOptions {
    fn to_wire_map(&self) -> WireMap {
        let mut map = Map::new();
        map.insert(BROWSER_NAME.to_string(), Value::from(self.browser_name()));
        if self.automatic_inspection {
            map.insert(AUTOMATIC_INSPECTION.to_string(), Value::from(true));
        }
        if self.automatic_profiling {
            map.insert(AUTOMATIC_PROFILING.to_string(), Value::from(true));
        }
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        map
    }
}

impl DriverOptions for SafariOptions {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        "SafariOptions"
    }
}
