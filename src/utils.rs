//! Common utility functions shared across the codebase.

use std::path::Path;

/// Converts a mixed-case name to lower `snake_case`.
///
/// Word boundaries are lower→upper transitions, the last capital of an
/// acronym followed by a lowercase letter, and any non-alphanumeric run.
///
/// # Examples
///
/// ```
/// use glossa::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("LoginScreen"), "login_screen");
/// assert_eq!(to_snake_case("userProfile"), "user_profile");
/// assert_eq!(to_snake_case("HTTPStatus"), "http_status");
/// assert_eq!(to_snake_case("order-details"), "order_details");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out.trim_end_matches('_').to_string()
}

/// Path of `path` relative to `root`, with `/` separators.
///
/// Falls back to the path itself when it is not under `root`.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let Ok(rel) = path.strip_prefix(root) else {
        return path.to_string_lossy().replace('\\', "/");
    };
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .filter(|s| s != ".")
        .collect::<Vec<_>>()
        .join("/")
}
