//! Shared constants for storage keys and chat text.

// =============================================================================
// Storage Keys
// =============================================================================

/// sessionStorage key holding the per-tab session identifier.
pub const SESSION_ID_KEY: &str = "sous.session_id";

/// localStorage key holding the saved recipes as a JSON array.
pub const SAVED_RECIPES_KEY: &str = "sous.saved_recipes";

// =============================================================================
// Session Identifiers
// =============================================================================

/// Prefix of identifiers built when no secure RNG is available.
pub const FALLBACK_SESSION_PREFIX: &str = "sess-";

/// Number of base36 digits in the fallback random suffix.
pub const FALLBACK_SUFFIX_LEN: usize = 6;

// =============================================================================
// Chat Text
// =============================================================================

/// First assistant message of every conversation.
pub const GREETING: &str = "Hi! Ask me for a recipe, e.g., 'recipe for lasagna'.";

/// Assistant message shown when the backend cannot be reached.
pub const BACKEND_ERROR_REPLY: &str = "Error contacting backend.";

/// Path of the conversational endpoint, relative to the API base.
pub const ASK_PATH: &str = "/ask";
