//! Card domain model
//!
//! Pure domain logic for the card tracker with no I/O operations.
//!
//! A card stores its labels and status as the user typed them. The `Label`
//! and `Status` enums are the membership authority for edit operations;
//! creation bypasses them entirely, so a card built with an out-of-set
//! status renders that text verbatim.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::{format_card_date, format_card_timestamp};
use crate::error::{CoreError, Result};

/// Characters of the subject shown in the one-line summary
const SUBJECT_ABSTRACT_LEN: usize = 10;

/// The fixed set of card labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Yellow,
    Green,
    Blue,
    Red,
}

impl Label {
    pub const ALL: [Label; 4] = [Label::Yellow, Label::Green, Label::Blue, Label::Red];

    /// Canonical lower-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Yellow => "yellow",
            Label::Green => "green",
            Label::Blue => "blue",
            Label::Red => "red",
        }
    }
}

impl FromStr for Label {
    type Err = CoreError;

    /// Case-insensitive membership check against the fixed set
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "yellow" => Ok(Label::Yellow),
            "green" => Ok(Label::Green),
            "blue" => Ok(Label::Blue),
            "red" => Ok(Label::Red),
            _ => Err(CoreError::InvalidLabel(s.to_string())),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed set of card lifecycle stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Todo,
    Doing,
    Done,
}

impl Status {
    /// Canonical lower-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::Doing => "doing",
            Status::Done => "done",
        }
    }
}

impl FromStr for Status {
    type Err = CoreError;

    /// Case-insensitive membership check against the fixed set
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Status::Todo),
            "doing" => Ok(Status::Doing),
            "done" => Ok(Status::Done),
            _ => Err(CoreError::InvalidStatus(s.to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single tracked card
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Card {
    /// Set at creation, immutable afterwards
    pub subject: String,
    pub deadline: Option<NaiveDate>,
    /// Labels as the user typed them; membership is checked on edit only
    pub labels: Vec<String>,
    /// Lower-cased on every status change, verbatim from creation
    pub status: String,
    /// Present exactly while the status is `doing`
    pub started: Option<DateTime<Local>>,
    /// Present exactly while the status is `done`
    pub finished: Option<DateTime<Local>>,
}

/// Start/finish stamps implied by a status string
fn stamps_for(status: &str) -> (Option<DateTime<Local>>, Option<DateTime<Local>>) {
    let lower = status.to_lowercase();
    let started = (lower == Status::Doing.as_str()).then(Local::now);
    let finished = (lower == Status::Done.as_str()).then(Local::now);
    (started, finished)
}

impl Card {
    /// Create a new card
    ///
    /// A first label token of `"null"` encodes an empty label list (that is
    /// how absent labels arrive from the command line). The status defaults
    /// to `todo` and is stored without a membership check.
    pub fn new(
        subject: impl Into<String>,
        deadline: Option<NaiveDate>,
        labels: Vec<String>,
        status: Option<String>,
    ) -> Self {
        let labels = if labels.first().is_some_and(|l| l == "null") {
            Vec::new()
        } else {
            labels
        };
        let status = status.unwrap_or_else(|| Status::Todo.as_str().to_string());
        let (started, finished) = stamps_for(&status);

        Self {
            subject: subject.into(),
            deadline,
            labels,
            status,
            started,
            finished,
        }
    }

    /// One-line summary, optionally prefixed with a display position
    ///
    /// The subject is cut to its first 10 characters with a `...` marker
    /// when longer; a missing deadline prints as `No-Deadline`.
    pub fn abstract_line(&self, position: Option<usize>) -> String {
        let mut line = match position {
            Some(n) => format!("{n}-   "),
            None => String::new(),
        };

        let shown: String = self.subject.chars().take(SUBJECT_ABSTRACT_LEN).collect();
        line.push_str(&shown);
        line.push(' ');
        if self.subject.chars().count() > SUBJECT_ABSTRACT_LEN {
            line.push_str("...   ");
        }

        match self.deadline {
            Some(date) => {
                line.push_str(&format_card_date(date));
                line.push_str("   ");
            }
            None => line.push_str("No-Deadline   "),
        }

        line.push_str(&self.status);
        line
    }

    /// Multi-line field block; absent values render `-`
    pub fn detail_block(&self) -> String {
        let deadline = self
            .deadline
            .map(format_card_date)
            .unwrap_or_else(|| "-".to_string());
        let labels = if self.labels.is_empty() {
            "-".to_string()
        } else {
            self.labels.join(", ")
        };
        let started = self
            .started
            .map(format_card_timestamp)
            .unwrap_or_else(|| "-".to_string());
        let finished = self
            .finished
            .map(format_card_timestamp)
            .unwrap_or_else(|| "-".to_string());

        format!(
            "Subject:    {}\n\
             Deadline:   {}\n\
             Labels:     {}\n\
             Status:     {}\n\
             Start Date: {}\n\
             End Date:   {}",
            self.subject, deadline, labels, self.status, started, finished
        )
    }

    /// Append a label, stored as typed
    ///
    /// The name must pass the case-insensitive membership check and must
    /// not already be present as the exact same string.
    pub fn add_label(&mut self, name: &str) -> Result<()> {
        name.parse::<Label>()?;
        if self.labels.iter().any(|l| l == name) {
            return Err(CoreError::DuplicateLabel(name.to_string()));
        }
        self.labels.push(name.to_string());
        Ok(())
    }

    /// Remove a label
    ///
    /// The presence check is an exact string match, while removal targets
    /// the lower-cased form, so a mixed-case stored label can survive its
    /// own removal attempt.
    pub fn remove_label(&mut self, name: &str) -> Result<()> {
        name.parse::<Label>()?;
        if !self.labels.iter().any(|l| l == name) {
            return Err(CoreError::LabelNotPresent(name.to_string()));
        }
        let target = name.to_lowercase();
        self.labels.retain(|l| *l != target);
        Ok(())
    }

    /// Change the status, restamping the start/finish dates
    ///
    /// Stores the lower-cased form; rejects a no-op change.
    pub fn change_status(&mut self, name: &str) -> Result<()> {
        name.parse::<Status>()?;
        let lower = name.to_lowercase();
        if self.status == lower {
            return Err(CoreError::StatusUnchanged(name.to_string()));
        }
        self.status = lower;
        let (started, finished) = stamps_for(&self.status);
        self.started = started;
        self.finished = finished;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn card(status: Option<&str>) -> Card {
        Card::new("Test card", None, Vec::new(), status.map(str::to_string))
    }

    #[test]
    fn test_label_parse_case_insensitive() {
        assert_eq!("Yellow".parse::<Label>().unwrap(), Label::Yellow);
        assert_eq!("RED".parse::<Label>().unwrap(), Label::Red);
        assert!("purple".parse::<Label>().is_err());
    }

    #[test]
    fn test_label_names_round_trip() {
        for label in Label::ALL {
            assert_eq!(label.as_str().parse::<Label>().unwrap(), label);
        }
    }

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!("Doing".parse::<Status>().unwrap(), Status::Doing);
        assert!("paused".parse::<Status>().is_err());
    }

    #[test]
    fn test_new_defaults_to_todo() {
        let card = card(None);
        assert_eq!(card.status, "todo");
        assert!(card.started.is_none());
        assert!(card.finished.is_none());
    }

    #[test]
    fn test_new_null_label_token_means_no_labels() {
        let card = Card::new("x", None, vec!["null".to_string()], None);
        assert!(card.labels.is_empty());
    }

    #[test]
    fn test_new_does_not_validate_status() {
        let card = card(Some("null"));
        assert_eq!(card.status, "null");
        assert!(card.started.is_none());
        assert!(card.finished.is_none());
    }

    #[test]
    fn test_new_doing_stamps_start_date() {
        let card = card(Some("doing"));
        assert!(card.started.is_some());
        assert!(card.finished.is_none());
    }

    #[test]
    fn test_add_label_rejects_unknown_and_duplicate() {
        let mut card = card(None);
        assert_eq!(
            card.add_label("purple"),
            Err(CoreError::InvalidLabel("purple".to_string()))
        );

        card.add_label("yellow").unwrap();
        assert_eq!(
            card.add_label("yellow"),
            Err(CoreError::DuplicateLabel("yellow".to_string()))
        );
        assert_eq!(card.labels, vec!["yellow"]);
    }

    #[test]
    fn test_add_label_stores_verbatim_case() {
        let mut card = card(None);
        card.add_label("Yellow").unwrap();
        assert_eq!(card.labels, vec!["Yellow"]);
        // "yellow" and "Yellow" are distinct stored strings
        card.add_label("yellow").unwrap();
        assert_eq!(card.labels, vec!["Yellow", "yellow"]);
    }

    #[test]
    fn test_remove_label_requires_exact_presence() {
        let mut card = card(None);
        card.add_label("yellow").unwrap();
        assert_eq!(
            card.remove_label("red"),
            Err(CoreError::LabelNotPresent("red".to_string()))
        );
        card.remove_label("yellow").unwrap();
        assert!(card.labels.is_empty());
    }

    #[test]
    fn test_remove_label_misses_mixed_case_entry() {
        let mut card = card(None);
        card.add_label("Yellow").unwrap();
        // Both guard checks pass, but removal targets "yellow" and the
        // stored "Yellow" survives.
        card.remove_label("Yellow").unwrap();
        assert_eq!(card.labels, vec!["Yellow"]);
    }

    #[test]
    fn test_change_status_stamps_follow_status() {
        let mut card = card(None);

        card.change_status("doing").unwrap();
        assert_eq!(card.status, "doing");
        assert!(card.started.is_some());
        assert!(card.finished.is_none());

        card.change_status("done").unwrap();
        assert_eq!(card.status, "done");
        assert!(card.started.is_none());
        assert!(card.finished.is_some());

        card.change_status("todo").unwrap();
        assert!(card.started.is_none());
        assert!(card.finished.is_none());
    }

    #[test]
    fn test_change_status_lowercases_and_rejects_noop() {
        let mut card = card(None);
        card.change_status("DOING").unwrap();
        assert_eq!(card.status, "doing");
        assert_eq!(
            card.change_status("Doing"),
            Err(CoreError::StatusUnchanged("Doing".to_string()))
        );
        assert_eq!(
            card.change_status("paused"),
            Err(CoreError::InvalidStatus("paused".to_string()))
        );
    }

    #[test]
    fn test_abstract_line_truncates_long_subject() {
        let card = Card::new("a very long subject", None, Vec::new(), None);
        let line = card.abstract_line(Some(3));
        assert!(line.starts_with("3-   a very lon ...   "));
        assert!(line.contains("No-Deadline"));
        assert!(line.ends_with("todo"));
    }

    #[test]
    fn test_abstract_line_short_subject() {
        let deadline = NaiveDate::from_ymd_opt(1999, 7, 10);
        let card = Card::new("Buy-milk", deadline, Vec::new(), None);
        let line = card.abstract_line(None);
        assert_eq!(line, "Buy-milk 10/07/1999   todo");
    }

    #[test]
    fn test_detail_block_fields() {
        let deadline = NaiveDate::from_ymd_opt(1999, 7, 10);
        let card = Card::new(
            "Buy-milk",
            deadline,
            vec!["yellow".to_string(), "red".to_string()],
            Some("doing".to_string()),
        );
        let block = card.detail_block();
        assert!(block.contains("Subject:    Buy-milk"));
        assert!(block.contains("Deadline:   10/07/1999"));
        assert!(block.contains("Labels:     yellow, red"));
        assert!(block.contains("Status:     doing"));
        assert!(block.contains("End Date:   -"));
        assert!(!block.contains("Start Date: -"));
    }
}
