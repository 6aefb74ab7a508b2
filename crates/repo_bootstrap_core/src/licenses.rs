//! Static license catalog.
//!
//! A fixed mapping from short license keys to license text, loaded into the
//! binary at compile time. A lookup miss is not an error: the caller skips
//! the LICENSE file and warns, the run continues.

#[cfg(test)]
#[path = "licenses_tests.rs"]
mod tests;

/// License keys recognized by the catalog.
pub const RECOGNIZED_KEYS: [&str; 3] = ["mit", "apache2", "gpl3"];

const MIT_TEXT: &str = "MIT License\n\nCopyright (c) 2025 YOUR NAME\n...";
const APACHE2_TEXT: &str = "Apache License 2.0\n...";
const GPL3_TEXT: &str = "GPLv3\n...";

/// Looks up the license text for a short key.
///
/// Returns `None` for unrecognized keys. Keys are matched exactly; callers
/// are expected to lowercase user input first.
pub fn license_text(key: &str) -> Option<&'static str> {
    match key {
        "mit" => Some(MIT_TEXT),
        "apache2" => Some(APACHE2_TEXT),
        "gpl3" => Some(GPL3_TEXT),
        _ => None,
    }
}
