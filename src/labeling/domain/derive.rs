//! Canonical label derivation from card titles and column names.

use super::LabelPrefix;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Longest label name, in characters, a derivation may produce.
pub const MAX_LABEL_CHARS: usize = 50;

/// Display form of a derivation that produced no usable name.
pub const INVALID_LABEL: &str = "Invalid";

/// Tokens carrying no meaning in a label: articles, conjunctions and a bare
/// ampersand.
const NOISE_WORDS: [&str; 8] = ["a", "an", "the", "and", "or", "nor", "but", "&"];

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()]*\)").expect("parenthesized pattern is valid"));

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\[[^\]]*\]").expect("bracketed pattern is valid"));

/// Outcome of deriving a label name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum DerivedLabel {
    /// A name of at most [`MAX_LABEL_CHARS`] characters.
    Canonical(String),
    /// No token survived; displayed as [`INVALID_LABEL`].
    Invalid,
}

impl DerivedLabel {
    /// Returns the canonical name, or `None` for an invalid derivation.
    #[must_use]
    pub fn canonical(&self) -> Option<&str> {
        match self {
            Self::Canonical(name) => Some(name),
            Self::Invalid => None,
        }
    }

    /// Returns the derivation in display form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.canonical().unwrap_or(INVALID_LABEL)
    }
}

impl fmt::Display for DerivedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<DerivedLabel> for String {
    fn from(value: DerivedLabel) -> Self {
        value.as_str().to_owned()
    }
}

/// Derives the canonical label for `title` under `prefix`.
///
/// Parenthesized and bracketed annotations are dropped, the remainder is
/// split into runs of alphanumerics and `&`, noise words are removed, and
/// trailing tokens are shed until `"{prefix} {tokens}"` fits within
/// [`MAX_LABEL_CHARS`].
///
/// ```
/// use boardsync::labeling::domain::{LabelPrefix, LabelRole, derive_label};
///
/// let prefix = LabelPrefix::new(LabelRole::Column, "> ").unwrap();
/// assert_eq!(derive_label(&prefix, "Fix the Login (v2) [urgent]").as_str(), "> Fix Login");
/// assert_eq!(derive_label(&prefix, "").as_str(), "Invalid");
/// ```
#[must_use]
pub fn derive_label(prefix: &LabelPrefix, title: &str) -> DerivedLabel {
    let stripped = strip_annotations(title);
    let tokens: Vec<&str> = tokenize(&stripped)
        .filter(|token| !is_noise(token))
        .collect();
    fit_tokens(prefix.trimmed(), &tokens)
}

fn strip_annotations(title: &str) -> String {
    let mut current = title.to_owned();
    // Innermost groups first so nested parentheses disappear entirely.
    loop {
        let next = PARENTHESIZED.replace_all(&current, "").into_owned();
        if next == current {
            break;
        }
        current = next;
    }
    BRACKETED.replace_all(&current, "").into_owned()
}

fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|ch: char| !(ch.is_alphanumeric() || ch == '&'))
        .filter(|token| !token.is_empty())
}

fn is_noise(token: &str) -> bool {
    NOISE_WORDS
        .iter()
        .any(|noise| noise.eq_ignore_ascii_case(token))
}

fn fit_tokens(prefix: &str, tokens: &[&str]) -> DerivedLabel {
    let mut kept = tokens;
    while let Some((_, shorter)) = kept.split_last() {
        let candidate = format!("{prefix} {}", kept.join(" "));
        if candidate.chars().count() <= MAX_LABEL_CHARS {
            return DerivedLabel::Canonical(candidate);
        }
        kept = shorter;
    }
    DerivedLabel::Invalid
}
