// src/templates/mod.rs
pub mod accessibility;
pub mod home;

mod layout;

pub use layout::render_page;

use crate::content::ContentMap;

// Helper function for HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Look up a content key, falling back to a literal default when the key is
/// absent. Second defaulting layer after the fetcher's own merge: the page
/// renders sensible copy even for keys the defaults never carried.
pub fn text(content: &ContentMap, key: &str, fallback: &str) -> String {
    html_escape(content.get(key).map(String::as_str).unwrap_or(fallback))
}
