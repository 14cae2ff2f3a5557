//! Environment variable handling.

use std::env;

// Helper for boolean environment variables that accept "1", "true", "yes"
fn is_enabled(var: &str) -> bool {
    env::var(var).ok().is_some_and(|s| {
        let s = s.to_lowercase();
        s == "1" || s == "true" || s == "yes"
    })
}

/// Get the download mirror base URL from `MONGODL_MIRROR`.
pub fn mirror() -> Option<String> {
    env::var("MONGODL_MIRROR").ok().filter(|url| !url.is_empty())
}

/// Whether debug output is requested via `MONGODL_DEBUG`.
pub fn debug() -> bool {
    is_enabled("MONGODL_DEBUG")
}
