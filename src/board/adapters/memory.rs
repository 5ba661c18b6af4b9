//! In-memory board client backed by a snapshot.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Card, CardUrl, Label},
    ports::{BoardClient, BoardClientError, BoardClientResult},
};
use serde::Serialize;

/// Label mutation applied to the in-memory board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LabelMutation {
    /// A label was removed from a card.
    Removed {
        /// Card that lost the label.
        card: CardUrl,
        /// Removed label name.
        label: String,
    },
    /// A label was added to a card.
    Added {
        /// Card that gained the label.
        card: CardUrl,
        /// Added label name.
        label: String,
    },
}

/// Thread-safe board client serving cards from memory.
///
/// Only effective changes are recorded as [`LabelMutation`]s; idempotent
/// no-op calls leave the log untouched.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardClient {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    cards: HashMap<CardUrl, Card>,
    order: Vec<CardUrl>,
    mutations: Vec<LabelMutation>,
}

impl InMemoryBoardClient {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board holding `cards`. Later duplicates of a URL replace
    /// earlier ones.
    #[must_use]
    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut state = InMemoryBoardState::default();
        for card in cards {
            insert_card(&mut state, card);
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Adds or replaces a card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardClientError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn insert(&self, card: Card) -> BoardClientResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        insert_card(&mut state, card);
        Ok(())
    }

    /// Returns the current card for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardClientError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn card(&self, url: &CardUrl) -> BoardClientResult<Option<Card>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.cards.get(url).cloned())
    }

    /// Returns every card in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardClientError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn cards(&self) -> BoardClientResult<Vec<Card>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .order
            .iter()
            .filter_map(|url| state.cards.get(url).cloned())
            .collect())
    }

    /// Returns the mutations applied so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardClientError::Unavailable`] when the state lock is
    /// poisoned.
    pub fn mutations(&self) -> BoardClientResult<Vec<LabelMutation>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.mutations.clone())
    }
}

fn insert_card(state: &mut InMemoryBoardState, card: Card) {
    let url = card.url().clone();
    if state.cards.insert(url.clone(), card).is_none() {
        state.order.push(url);
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> BoardClientError {
    BoardClientError::unavailable(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardClient for InMemoryBoardClient {
    async fn resolve_issue(&self, reference: &CardUrl) -> BoardClientResult<Card> {
        let state = self.state.read().map_err(poisoned)?;
        state
            .cards
            .get(reference)
            .cloned()
            .ok_or_else(|| BoardClientError::NotFound(reference.clone()))
    }

    async fn remove_label(&self, card: &CardUrl, name: &str) -> BoardClientResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let entry = state
            .cards
            .get_mut(card)
            .ok_or_else(|| BoardClientError::NotFound(card.clone()))?;
        if entry.remove_label_named(name) {
            state.mutations.push(LabelMutation::Removed {
                card: card.clone(),
                label: name.to_owned(),
            });
        }
        Ok(())
    }

    async fn ensure_label(&self, card: &CardUrl, label: &Label) -> BoardClientResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let entry = state
            .cards
            .get_mut(card)
            .ok_or_else(|| BoardClientError::NotFound(card.clone()))?;
        if entry.ensure_label(label) {
            state.mutations.push(LabelMutation::Added {
                card: card.clone(),
                label: label.name().to_owned(),
            });
        }
        Ok(())
    }
}
