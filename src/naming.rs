//! URL-safe identifier rules shared by language codes and article slugs.
//!
//! Both end up as path segments in the generated tree:
//!
//! ```text
//! dist/
//! └── en/                         ← language code
//!     └── blog/
//!         └── first-game-night.html  ← article slug
//! ```
//!
//! An identifier is accepted when it is non-empty, consists only of ASCII
//! letters, digits, `-` and `_`, and does not start with `-`. That keeps the
//! value usable verbatim in a URL and as a file stem on every platform, with
//! no escaping and no way to climb out of the output directory.

/// Why an identifier was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugProblem {
    Empty,
    LeadingDash,
    InvalidChar(char),
}

impl std::fmt::Display for SlugProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlugProblem::Empty => write!(f, "identifier is empty"),
            SlugProblem::LeadingDash => write!(f, "identifier starts with '-'"),
            SlugProblem::InvalidChar(c) => write!(f, "identifier contains {c:?}"),
        }
    }
}

/// Check that `ident` is usable as a path segment and URL component.
///
/// - `"first-game-night"` → ok
/// - `"pt_BR"` → ok
/// - `""` → `Empty`
/// - `"-draft"` → `LeadingDash`
/// - `"../etc"` → `InvalidChar('.')`
/// - `"tips & tricks"` → `InvalidChar(' ')`
pub fn check_slug(ident: &str) -> Result<(), SlugProblem> {
    if ident.is_empty() {
        return Err(SlugProblem::Empty);
    }
    if ident.starts_with('-') {
        return Err(SlugProblem::LeadingDash);
    }
    match ident
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        Some(c) => Err(SlugProblem::InvalidChar(c)),
        None => Ok(()),
    }
}
