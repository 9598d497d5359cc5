use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::capabilities::{CapabilitiesMap, CapabilityDocument};
use crate::contributor::{CapabilityContributor, DriverOptions, WireMap};
use crate::deprecation::{DeprecationNotice, DeprecationSink, TracingSink};
use crate::errors::{CapabilityError, CapabilityResult};
use crate::options::SafariOptions;
use crate::profile::{self, DriverProfile, BROWSER_NAME};

/// Legacy combined-capabilities input: a single contributor or an ordered
/// list merged last-write-wins.
pub enum LegacyCapabilities {
    Single(Box<dyn CapabilityContributor>),
    List(Vec<Box<dyn CapabilityContributor>>),
}

impl LegacyCapabilities {
    fn is_empty(&self) -> bool {
        match self {
            Self::Single(contributor) => contributor.to_wire_map().is_empty(),
            Self::List(contributors) => contributors.is_empty(),
        }
    }
}

impl From<CapabilitiesMap> for LegacyCapabilities {
    fn from(map: CapabilitiesMap) -> Self {
        Self::Single(Box::new(map))
    }
}

impl From<SafariOptions> for LegacyCapabilities {
    fn from(options: SafariOptions) -> Self {
        Self::Single(Box::new(options))
    }
}

impl From<Vec<Box<dyn CapabilityContributor>>> for LegacyCapabilities {
    fn from(contributors: Vec<Box<dyn CapabilityContributor>>) -> Self {
        Self::List(contributors)
    }
}

/// Merges the capability sources of a driver-construction call into the one
/// document embedded as `alwaysMatch` in the session-creation request.
///
/// Pure and synchronous: a fresh document per call, inputs never mutated, no
/// I/O. The mutual-exclusion check runs before any merging so a conflicting
/// call never produces a request body.
pub struct CapabilityResolver {
    profile: &'static DriverProfile,
    sink: Arc<dyn DeprecationSink>,
}

impl CapabilityResolver {
    pub fn new(profile: &'static DriverProfile) -> Self {
        Self {
            profile,
            sink: Arc::new(TracingSink),
        }
    }

    pub fn safari() -> Self {
        Self::new(profile::safari())
    }

    pub fn with_sink(mut self, sink: Arc<dyn DeprecationSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn resolve(
        &self,
        options: Option<&dyn DriverOptions>,
        capabilities: Option<&LegacyCapabilities>,
    ) -> CapabilityResult<CapabilityDocument> {
        // An empty legacy input counts as absent: no conflict, no notice.
        let legacy = capabilities.filter(|caps| !caps.is_empty());

        if options.is_some() && legacy.is_some() {
            return Err(CapabilityError::Conflict);
        }

        if let Some(options) = options {
            if !self.profile.accepts(options) {
                return Err(CapabilityError::OptionsType {
                    expected: self.profile.options_type,
                    found: options.type_name(),
                });
            }
            let mut accumulator = Map::new();
            self.merge(&mut accumulator, options.to_wire_map());
            let mut document = CapabilityDocument::from(accumulator);
            document.insert_default(BROWSER_NAME, self.profile.browser_name);
            debug!(keys = document.len(), "resolved capabilities from options");
            return Ok(document);
        }

        if let Some(legacy) = legacy {
            let mut accumulator = Map::new();
            match legacy {
                LegacyCapabilities::Single(contributor) => {
                    self.merge(&mut accumulator, contributor.to_wire_map());
                }
                LegacyCapabilities::List(contributors) => {
                    for contributor in contributors {
                        self.merge(&mut accumulator, contributor.to_wire_map());
                    }
                }
            }
            self.sink.notify(&DeprecationNotice::parameter(
                "capabilities",
                "use 'options' instead",
            ));
            let document = CapabilityDocument::from(accumulator);
            debug!(
                keys = document.len(),
                "resolved capabilities from deprecated input"
            );
            return Ok(document);
        }

        let mut defaults = Map::new();
        defaults.insert(
            BROWSER_NAME.to_string(),
            Value::from(self.profile.browser_name),
        );
        Ok(CapabilityDocument::from(defaults))
    }

    fn merge(&self, accumulator: &mut Map<String, Value>, contribution: WireMap) {
        for (key, value) in contribution {
            let wire_key = self.profile.normalize_key(&key).to_string();
            accumulator.insert(wire_key, value);
        }
    }
}
