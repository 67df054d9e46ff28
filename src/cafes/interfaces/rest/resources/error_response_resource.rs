use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lookup and authorization failures use the `error` envelope keyed by a
/// status phrase; rejected submissions reuse the `response` envelope.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorResponseResource {
    Error { error: BTreeMap<String, String> },
    Response { response: BTreeMap<String, String> },
}

impl ErrorResponseResource {
    pub fn error(kind: &str, message: impl Into<String>) -> Self {
        Self::Error {
            error: BTreeMap::from([(kind.to_string(), message.into())]),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Response {
            response: BTreeMap::from([("error".to_string(), message.into())]),
        }
    }
}
