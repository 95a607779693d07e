//! File extension policy for catalog eligibility.

use std::path::Path;

/// Extensions admitted by default.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Decides which files the catalog walk keeps.
///
/// Matching is case-sensitive unless `case_insensitive` is set, so by
/// default `photo.JPG` is skipped.
///
/// # Example
/// ```
/// use std::path::Path;
/// use randpic_web::catalog::extension::ExtensionPolicy;
///
/// let strict = ExtensionPolicy::default();
/// assert!(strict.matches(Path::new("a/b.jpeg")));
/// assert!(!strict.matches(Path::new("a/b.JPEG")));
///
/// let relaxed = ExtensionPolicy::default().case_insensitive(true);
/// assert!(relaxed.matches(Path::new("a/b.JPEG")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionPolicy {
    allowed: Vec<String>,
    case_insensitive: bool,
}

impl Default for ExtensionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

impl ExtensionPolicy {
    /// Builds a case-sensitive policy. Leading dots are ignored.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: allowed
                .into_iter()
                .map(|s| s.as_ref().trim_start_matches('.').to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            case_insensitive: false,
        }
    }

    pub fn case_insensitive(mut self, on: bool) -> Self {
        self.case_insensitive = on;
        self
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.allowed.iter().any(|a| {
            if self.case_insensitive {
                a.eq_ignore_ascii_case(ext)
            } else {
                a == ext
            }
        })
    }
}
