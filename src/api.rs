//! HTTP client for the recipe backend.

use sous_core::config::ASK_PATH;
use sous_core::protocol::endpoint_url;
use sous_core::{AskRequest, AskResponse, FetchError, RecipeBackend};

use crate::config::API_BASE_URL;
use crate::utils::post_json;

/// [`RecipeBackend`] that talks to the backend over the Fetch API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL of the `/ask` endpoint.
    pub fn ask_url(&self) -> String {
        endpoint_url(&self.base_url, ASK_PATH)
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl RecipeBackend for HttpBackend {
    async fn ask(&self, request: AskRequest) -> Result<AskResponse, FetchError> {
        post_json(&self.ask_url(), &request).await
    }
}
