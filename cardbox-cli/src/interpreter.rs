//! The command interpreter state machine
//!
//! One [`App`] owns the card store, the active edit selection, and the
//! current input mode. [`App::handle_line`] consumes a single line of
//! input and returns the text to print; [`App::prompt`] yields the
//! instruction/prompt text for the current mode. The binary's read loop
//! is the only place stdin is touched, so every transition here can be
//! driven directly from tests.

use cardbox_core::date::parse_deadline;
use cardbox_core::{Card, CardFilter, CardStore, CoreError, FilterKind};

use crate::display::{format_err, format_ok};
use crate::error::{CliError, Result};

/// Input mode of the interpreter
///
/// The edit modes carry no data of their own; the active card index lives
/// on the [`App`] and is reassigned on each `edit-task`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Main,
    FieldSelect,
    LabelEdit,
    StatusEdit,
}

/// The interpreter: card store, active selection, and current mode
pub struct App {
    store: CardStore,
    active: Option<usize>,
    mode: Mode,
    use_color: bool,
}

impl App {
    /// Create an interpreter over an empty store
    pub fn new(use_color: bool) -> Self {
        Self {
            store: CardStore::new(),
            active: None,
            mode: Mode::Main,
            use_color,
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CardStore {
        &mut self.store
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Instruction and input prompt for the current mode
    ///
    /// Edit modes restate their options before every line, the way a
    /// modal prompt keeps its menu on screen.
    pub fn prompt(&self) -> String {
        let text = match self.mode {
            Mode::Main => "\nEnter your command: ",
            Mode::FieldSelect => {
                "\nWhich one do you want to edit? 'labels' or 'status'. \
                 Type 'exit' to go back to the main page.\n\nYour command: "
            }
            Mode::LabelEdit => {
                "\nYou can use 'add [color]' or 'remove [color]' to customize labels. \
                 Type 'exit' to stop editing labels.\n\nYour command: "
            }
            Mode::StatusEdit => {
                "\nYou can use 'changeto [status]' to change the status. \
                 Type 'exit' to stop editing the status.\n\nYour command: "
            }
        };
        text.to_string()
    }

    /// Consume one line of input and return the text to print
    ///
    /// Failures never escape: they are rendered as `!!!!`-marked messages
    /// and the interpreter stays in (or re-enters) a consistent mode.
    pub fn handle_line(&mut self, line: &str) -> String {
        let result = match self.mode {
            Mode::Main => self.handle_main(line),
            Mode::FieldSelect => self.handle_field_select(line),
            Mode::LabelEdit => self.handle_label_edit(line),
            Mode::StatusEdit => self.handle_status_edit(line),
        };

        match result {
            Ok(output) => output,
            Err(err) => format_err(&err.to_string(), self.use_color),
        }
    }

    fn handle_main(&mut self, line: &str) -> Result<String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first().copied().unwrap_or("") {
            "create-task" => self.create_card(&tokens),
            "show-all-tasks" => Ok(self.show_all()),
            "edit-task" => self.enter_edit(arg(&tokens)),
            "delete-task" => self.delete_card(arg(&tokens)),
            "show-detail" => self.show_detail(arg(&tokens)),
            "filter-by" => self.filter_by(&tokens),
            _ => Err(CliError::UnrecognizedCommand),
        }
    }

    fn create_card(&mut self, tokens: &[&str]) -> Result<String> {
        if tokens.len() <= 1 {
            return Err(CliError::missing_argument("create-task", 1));
        }

        let subject = tokens[1];
        let deadline = match tokens.get(2) {
            Some(token) => parse_deadline(token)?,
            None => None,
        };
        let labels: Vec<String> = tokens
            .get(3)
            .map(|t| t.split(',').map(str::to_string).collect())
            .unwrap_or_default();
        let status = tokens.get(4).map(|t| t.to_string());

        self.store.push(Card::new(subject, deadline, labels, status));
        Ok(format_ok("Card added.", self.use_color))
    }

    fn show_all(&self) -> String {
        self.store
            .iter_numbered()
            .map(|(position, card)| card.abstract_line(Some(position)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn enter_edit(&mut self, position: &str) -> Result<String> {
        let index = self.store.resolve_position(position)?;
        let card = self.store.get_or_err(index)?;
        let header = format_ok(
            &format!("You are now editing card '{}'.", card.subject),
            self.use_color,
        );
        let details = card.detail_block();

        self.active = Some(index);
        self.mode = Mode::FieldSelect;
        Ok(format!("{header}\n\nDetails:\n{details}"))
    }

    fn delete_card(&mut self, position: &str) -> Result<String> {
        let index = self.store.resolve_position(position)?;
        let card = self
            .store
            .remove_at(index)
            .ok_or(CoreError::PositionOutOfRange(index as i64 + 1))?;
        Ok(format_ok(
            &format!("Card deleted: {}", card.subject),
            self.use_color,
        ))
    }

    fn show_detail(&self, position: &str) -> Result<String> {
        let index = self.store.resolve_position(position)?;
        Ok(self.store.get_or_err(index)?.detail_block())
    }

    fn filter_by(&self, tokens: &[&str]) -> Result<String> {
        let (Some(kind_token), Some(value)) = (tokens.get(1), tokens.get(2)) else {
            return Err(CliError::missing_argument("filter-by", 2));
        };
        let kind = FilterKind::parse(kind_token)
            .ok_or_else(|| CliError::UnknownFilter(kind_token.to_string()))?;

        let filter = CardFilter::new(kind, *value);
        filter.validate()?;

        let matches = filter.apply(self.store.iter());
        if matches.is_empty() {
            return Ok("No card matched your filter.".to_string());
        }
        Ok(matches
            .iter()
            .map(|card| card.detail_block())
            .collect::<Vec<_>>()
            .join("\n\n"))
    }

    fn handle_field_select(&mut self, line: &str) -> Result<String> {
        match line.split_whitespace().next().unwrap_or("") {
            "labels" => {
                self.mode = Mode::LabelEdit;
                Ok(String::new())
            }
            "status" => {
                self.mode = Mode::StatusEdit;
                Ok(String::new())
            }
            "exit" => {
                self.mode = Mode::Main;
                Ok(format_ok("Stopped editing.", self.use_color))
            }
            other => Err(CliError::UnknownField(other.to_string())),
        }
    }

    fn handle_label_edit(&mut self, line: &str) -> Result<String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first().copied().unwrap_or("") {
            "exit" => {
                self.mode = Mode::FieldSelect;
                Ok(format_ok("Stopped editing labels.", self.use_color))
            }
            "add" => {
                let name = arg(&tokens).to_string();
                self.active_card_mut()?.add_label(&name)?;
                Ok(format_ok(
                    &format!("'{name}' successfully added!"),
                    self.use_color,
                ))
            }
            "remove" => {
                let name = arg(&tokens).to_string();
                self.active_card_mut()?.remove_label(&name)?;
                Ok(format_ok(
                    &format!("'{name}' successfully removed!"),
                    self.use_color,
                ))
            }
            other => Err(CliError::UnknownEditInput(other.to_string())),
        }
    }

    fn handle_status_edit(&mut self, line: &str) -> Result<String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first().copied().unwrap_or("") {
            "exit" => {
                self.mode = Mode::FieldSelect;
                Ok(format_ok("Stopped editing the status.", self.use_color))
            }
            "changeto" => {
                let name = arg(&tokens).to_string();
                self.active_card_mut()?.change_status(&name)?;
                Ok(format_ok(
                    &format!("Status successfully changed to '{name}'!"),
                    self.use_color,
                ))
            }
            other => Err(CliError::UnknownEditInput(other.to_string())),
        }
    }

    fn active_card_mut(&mut self) -> Result<&mut Card> {
        let index = self.active.ok_or(CliError::NoActiveCard)?;
        Ok(self.store.get_mut_or_err(index)?)
    }
}

/// First argument after the command token, or `""` when absent
fn arg<'a>(tokens: &[&'a str]) -> &'a str {
    tokens.get(1).copied().unwrap_or("")
}
