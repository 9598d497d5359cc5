use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capabilities::CapabilityDocument;

/// Body of `POST /session`. The resolved document is embedded verbatim as
/// `alwaysMatch`.
#[derive(Debug, Clone, Serialize)]
pub struct NewSessionRequest {
    pub capabilities: RequestedCapabilities,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestedCapabilities {
    #[serde(rename = "alwaysMatch")]
    pub always_match: CapabilityDocument,
}

impl NewSessionRequest {
    pub fn new(document: CapabilityDocument) -> Self {
        Self {
            capabilities: RequestedCapabilities {
                always_match: document,
            },
        }
    }
}

/// Success body of `POST /session`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionCreated {
    pub value: SessionValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionValue {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub capabilities: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn request_body_wraps_document_in_always_match() {
        let mut map = Map::new();
        map.insert("browserName".to_string(), json!("safari"));
        let request = NewSessionRequest::new(CapabilityDocument::from(map));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "capabilities": {
                    "alwaysMatch": {"browserName": "safari"}
                }
            })
        );
    }

    #[test]
    fn session_created_parses_wire_response() {
        let body = json!({
            "value": {
                "sessionId": "0ea859a8-d2h3-40d2-b29c-f0e2a44e58a2",
                "capabilities": {"browserName": "safari"}
            }
        });
        let created: SessionCreated = serde_json::from_value(body).unwrap();
        assert_eq!(
            created.value.session_id,
            "0ea859a8-d2h3-40d2-b29c-f0e2a44e58a2"
        );
        assert_eq!(
            created.value.capabilities["browserName"].as_str(),
            Some("safari")
        );
    }
}
