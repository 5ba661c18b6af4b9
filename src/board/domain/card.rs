//! Card value objects as captured in a board snapshot.

use super::{BoardDomainError, Label, LabelKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Validated `http(s)` URL identifying a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardUrl(Url);

impl CardUrl {
    /// Parses and validates a card URL.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidCardUrl`] when the value is not a
    /// well-formed URL and [`BoardDomainError::UnsupportedScheme`] when the
    /// scheme is neither `http` nor `https`.
    pub fn parse(value: &str) -> Result<Self, BoardDomainError> {
        let url = Url::parse(value.trim()).map_err(|err| BoardDomainError::InvalidCardUrl {
            value: value.to_owned(),
            reason: err.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(BoardDomainError::UnsupportedScheme(other.to_owned())),
        }
    }

    /// Returns the URL as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the wrapped URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl TryFrom<String> for CardUrl {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CardUrl> for String {
    fn from(value: CardUrl) -> Self {
        value.0.into()
    }
}

impl fmt::Display for CardUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user a card is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// Account login.
    pub login: String,
    /// Profile page, when the tracker exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// A unit of tracked work on the board.
///
/// Deserialization goes through [`Card::new`], so snapshot cards hold the
/// same invariants as cards built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CardRecord")]
pub struct Card {
    url: CardUrl,
    title: String,
    body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<String>,
    labels: Vec<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee: Option<Assignee>,
}

#[derive(Deserialize)]
struct CardRecord {
    url: CardUrl,
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    column: Option<String>,
    #[serde(default)]
    labels: Vec<Label>,
    #[serde(default)]
    assignee: Option<Assignee>,
}

impl TryFrom<CardRecord> for Card {
    type Error = BoardDomainError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let mut card = Self::new(record.url, record.title)?
            .with_body(record.body)
            .with_column(record.column.unwrap_or_default())
            .with_labels(record.labels);
        card.assignee = record.assignee;
        Ok(card)
    }
}

impl Card {
    /// Creates a card with a required title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyCardTitle`] if the title is empty.
    pub fn new(url: CardUrl, title: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(BoardDomainError::EmptyCardTitle);
        }

        Ok(Self {
            url,
            title: normalized_title.to_owned(),
            body: String::new(),
            column: None,
            labels: Vec::new(),
            assignee: None,
        })
    }

    /// Sets the free-text body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the board column the card sits in.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        let value = column.into();
        let normalized = value.trim();
        self.column = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Sets the card labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: Assignee) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns the card URL.
    #[must_use]
    pub const fn url(&self) -> &CardUrl {
        &self.url
    }

    /// Returns the card title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the card body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the board column name.
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Returns the card labels in board order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Assignee> {
        self.assignee.as_ref()
    }

    /// Reports whether the card carries a label matching `name` after
    /// trimming and case folding.
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        let key = LabelKey::new(name);
        self.labels.iter().any(|label| label.key() == key)
    }

    /// Removes every label whose name equals `name` exactly.
    ///
    /// Returns `true` when a label was removed.
    pub(crate) fn remove_label_named(&mut self, name: &str) -> bool {
        let before = self.labels.len();
        self.labels.retain(|label| label.name() != name);
        self.labels.len() != before
    }

    /// Appends `label` unless a label with the exact same name is present.
    ///
    /// Returns `true` when the label was added.
    pub(crate) fn ensure_label(&mut self, label: &Label) -> bool {
        if self.labels.iter().any(|existing| existing.name() == label.name()) {
            return false;
        }
        self.labels.push(label.clone());
        true
    }
}
