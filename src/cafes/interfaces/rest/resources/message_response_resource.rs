use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"response": {"success": "..."}}`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct ResponseEnvelopeResource {
    pub response: BTreeMap<String, String>,
}

impl ResponseEnvelopeResource {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            response: BTreeMap::from([("success".to_string(), message.into())]),
        }
    }
}

/// `{"success": "..."}`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct SuccessMessageResource {
    pub success: String,
}
