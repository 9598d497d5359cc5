pub mod capabilities;
pub mod contributor;
pub mod deprecation;
pub mod errors;
pub mod model;
pub mod options;
pub mod profile;
pub mod resolver;

pub use capabilities::{CapabilitiesMap, CapabilityDocument};
pub use contributor::{CapabilityContributor, DriverOptions, WireMap};
pub use deprecation::{DeprecationNotice, DeprecationSink, TracingSink};
pub use errors::{CapabilityError, CapabilityResult};
pub use model::{NewSessionRequest, SessionCreated};
pub use options::SafariOptions;
pub use profile::DriverProfile;
pub use resolver::{CapabilityResolver, LegacyCapabilities};
