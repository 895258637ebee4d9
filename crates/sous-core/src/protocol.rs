//! Wire types for the recipe backend's `POST /ask` endpoint.

use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;

/// Request body: the user's message and the client session identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
    pub session_id: String,
}

impl AskRequest {
    pub fn new(message: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_id: session_id.into(),
        }
    }
}

/// Response body: assistant text plus an optional recipe card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub reply: String,
    #[serde(default)]
    pub recipe: Option<Recipe>,
}

/// Join the API base URL and an endpoint path with exactly one slash.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
