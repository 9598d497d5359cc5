use serde::Serialize;
use serde_json::{Map, Value};

use crate::contributor::{CapabilityContributor, WireMap};

/// Untyped capability map. Keys may be camelCase wire names, snake_case
/// aliases, or arbitrary vendor/custom keys; alias resolution happens in the
/// resolver, not here. Insertion order is kept so that when an alias pair
/// names the same capability, the value set last wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CapabilitiesMap(Map<String, Value>);

impl CapabilitiesMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl CapabilityContributor for CapabilitiesMap {
    fn to_wire_map(&self) -> WireMap {
        self.0.clone()
    }
}

impl From<Map<String, Value>> for CapabilitiesMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for CapabilitiesMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The resolver's output: one flattened wire-key mapping, serialized verbatim
/// as the `alwaysMatch` object of a session-creation request. Built fresh per
/// resolution and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CapabilityDocument(Map<String, Value>);

impl CapabilityDocument {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub(crate) fn insert_default(&mut self, key: &str, value: impl Into<Value>) {
        if !self.0.contains_key(key) {
            self.0.insert(key.to_string(), value.into());
        }
    }
}

impl From<Map<String, Value>> for CapabilityDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_replaces_existing_value() {
        let mut caps = CapabilitiesMap::new();
        caps.set("browserName", "safari");
        caps.set("browserName", "Safari Technology Preview");
        assert_eq!(caps.len(), 1);
        assert_eq!(
            caps.get("browserName"),
            Some(&json!("Safari Technology Preview"))
        );
    }

    #[test]
    fn map_serializes_as_json_object() {
        let mut caps = CapabilitiesMap::new();
        caps.set("browserName", "safari");
        caps.set("company:key", "value");
        assert_eq!(
            serde_json::to_value(&caps).unwrap(),
            json!({"browserName": "safari", "company:key": "value"})
        );
    }

    #[test]
    fn document_insert_default_keeps_existing() {
        let mut map = Map::new();
        map.insert("browserName".to_string(), json!("Safari Technology Preview"));
        let mut document = CapabilityDocument::from(map);
        document.insert_default("browserName", "safari");
        assert_eq!(
            document.get("browserName"),
            Some(&json!("Safari Technology Preview"))
        );
    }
}
