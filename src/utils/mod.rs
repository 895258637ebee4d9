//! Utility modules for browser APIs.
//!
//! Provides:
//! - [`WebStorage`] - localStorage/sessionStorage behind the core storage trait
//! - [`post_json`] - JSON POST with timeout
//! - [`format_date_iso`] - Date display for saved recipes

pub mod dom;
mod fetch;
mod format;
mod storage;

pub use fetch::post_json;
pub use format::format_date_iso;
pub use storage::WebStorage;
