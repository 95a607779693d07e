//! # Environment Variable Utilities
//!
//! Provides helpers for reading environment variables with common type conversions.
//! Includes parsing for boolean flags, numbers and strings with fallback defaults.
//!
//! Every reader has a `*_from` twin that takes a provider function, so
//! configuration parsing can be tested without touching the process env.
//!
//! # Examples
//! ```rust,no_run
//! use randpic_web::config::env::{read_flag, read_string, read_u32};
//!
//! let relaxed = read_flag("IMAGE_EXT_CASE_INSENSITIVE", false);
//! let max_width = read_u32("MAX_WIDTH", 1920);
//! let dir = read_string("IMAGE_DIR", "./images");
//! ```

/// Reads a boolean flag from an environment variable.
///
/// Returns `true` for any of the following case-insensitive values:
/// `"1"`, `"true"`, `"yes"`, `"on"`.
pub fn read_flag(name: &str, default: bool) -> bool {
    read_flag_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a boolean flag using a custom provider function.
///
/// # Example
/// ```rust
/// use randpic_web::config::env::read_flag_from;
///
/// let val = read_flag_from(|_| Some("true".into()), "VALIDATE_RESOLVED", false);
/// assert!(val);
/// ```
pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => {
            let s = v.trim().trim_matches(|c| c == '"' || c == '\'');
            matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
        }
        None => default,
    }
}

/// Reads an unsigned integer (`u32`) from an environment variable,
/// returning the provided default if parsing fails.
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_u32_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a `u32` using a custom provider function.
///
/// # Example
/// ```rust
/// use randpic_web::config::env::read_u32_from;
///
/// assert_eq!(read_u32_from(|_| Some(" 640 ".into()), "MAX_WIDTH", 1920), 640);
/// assert_eq!(read_u32_from(|_| Some("wide".into()), "MAX_WIDTH", 1920), 1920);
/// ```
pub fn read_u32_from<F>(provider: F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Reads a trimmed string, falling back to `default` when unset or blank.
pub fn read_string(name: &str, default: &str) -> String {
    read_string_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a string using a custom provider function.
pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}
