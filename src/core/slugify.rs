use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;
use crate::Result;

/// Printed when the component name is missing.
pub const USAGE: &str = "Please provide a component name!";

// A lowercase letter or digit directly followed by an uppercase letter.
static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Convert a capitalized identifier into the hyphenated lowercase form used
/// for the component's directory and file names.
///
/// Only lowercase/digit-to-uppercase transitions split, so runs of capitals
/// stay together: `HTMLParser` becomes `htmlparser`, `MyWidget` becomes
/// `my-widget`.
pub fn slug(name: &str) -> String {
    CASE_BOUNDARY
        .replace_all(name, "$1-$2")
        .to_lowercase()
}

/// Check a component name before anything touches the filesystem.
///
/// Returns the trimmed name. Empty input is a missing argument; path
/// separators and control characters are rejected so the component
/// directory is always a direct child of the base path.
pub fn validate_component_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::validation_missing_argument(
            vec!["componentName".to_string()],
            USAGE,
        ));
    }

    if trimmed == "." || trimmed == ".." {
        return Err(Error::validation_invalid_argument(
            "componentName",
            "Component name cannot be a relative path",
            Some(trimmed.to_string()),
        ));
    }

    if trimmed
        .chars()
        .any(|c| c.is_control() || c == '/' || c == '\\')
    {
        return Err(Error::validation_invalid_argument(
            "componentName",
            "Component name contains invalid characters",
            Some(trimmed.to_string()),
        )
        .with_hint("Use a capitalized identifier such as 'UserCard'"));
    }

    Ok(trimmed)
}
