//! Application configuration.
//!
//! Centralizes the constants of the browser app. Storage keys and chat text
//! shared with the core live in `sous_core::config`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Sous Duckling";

/// Tagline displayed under the header.
pub const APP_TAGLINE: &str = "Ask away, chef! I've got recipes to share, ingredients to adjust, \
     and culinary magic to help you make something delicious.";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the recipe backend.
///
/// Set `SOUS_API_BASE` at build time to point at another deployment.
pub const API_BASE_URL: &str = match option_env!("SOUS_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 30_000;

// =============================================================================
// Chat Configuration
// =============================================================================

/// Placeholder text of the chat input.
pub const INPUT_PLACEHOLDER: &str =
    "Type a message (e.g., recipe for pancakes, I don't like mushrooms)";
