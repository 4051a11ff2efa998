//! Card filtering
//!
//! Three predicates over the card store: by status, by label, and by
//! subject substring. Status and label values are membership-checked
//! (case-insensitively) before use; matching itself is case-sensitive
//! against the stored text.

use crate::card::{Card, Label, Status};
use crate::error::Result;

/// Which card field a filter inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Status,
    Label,
    Subject,
}

impl FilterKind {
    /// Parse the `filter-by` kind token; unknown kinds yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "status" => Some(Self::Status),
            "label" => Some(Self::Label),
            "subject" => Some(Self::Subject),
            _ => None,
        }
    }
}

/// A single filter over the card store
#[derive(Debug, Clone)]
pub struct CardFilter {
    pub kind: FilterKind,
    pub value: String,
}

impl CardFilter {
    /// Create a filter for the given field and value
    pub fn new(kind: FilterKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Membership-check the value where the kind requires it
    ///
    /// The check lower-cases the value, while `matches` does not: a value
    /// of `Todo` validates here and then matches nothing, since statuses
    /// are stored lower-case once changed.
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            FilterKind::Status => self.value.parse::<Status>().map(|_| ()),
            FilterKind::Label => self.value.parse::<Label>().map(|_| ()),
            FilterKind::Subject => Ok(()),
        }
    }

    /// Check whether a card matches this filter
    pub fn matches(&self, card: &Card) -> bool {
        match self.kind {
            FilterKind::Status => card.status == self.value,
            FilterKind::Label => card.labels.iter().any(|l| *l == self.value),
            FilterKind::Subject => card.subject.contains(&self.value),
        }
    }

    /// Apply to cards, preserving their order
    pub fn apply<'a>(&self, cards: impl Iterator<Item = &'a Card>) -> Vec<&'a Card> {
        cards.filter(|card| self.matches(card)).collect()
    }
}
