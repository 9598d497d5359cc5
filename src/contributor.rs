use std::any::Any;

use serde_json::{Map, Value};

pub type WireMap = Map<String, Value>;

/// Anything that can contribute capabilities to a session request: typed
/// options, a raw capabilities map, or a caller-supplied custom object.
pub trait CapabilityContributor {
    fn to_wire_map(&self) -> WireMap;
}

/// Typed per-driver options. The resolver downcasts through `as_any` to
/// check the concrete type matches its driver kind.
pub trait DriverOptions: CapabilityContributor + Any {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}
