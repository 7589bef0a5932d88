use std::str::FromStr;

use crate::domain::board::{Group, build_board};
use crate::domain::options::{BoardOptions, Grouping, Sorting};
use crate::domain::ticket::Ticket;
use crate::error::AppError;
use crate::services::TicketSource;

/// Holds the fetched tickets and the current selection, and keeps the
/// rendered board in step with both.
pub struct BoardSession {
    tickets: Vec<Ticket>,
    options: BoardOptions,
    board: Vec<Group>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Group(Grouping),
    Sort(Sorting),
    Show,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default().to_lowercase();
        let argument = words.next();

        let parsed = match (command.as_str(), argument) {
            ("group", Some(value)) => SessionCommand::Group(value.parse()?),
            ("sort", Some(value)) => SessionCommand::Sort(value.parse()?),
            ("group", None) | ("sort", None) => {
                return Err(AppError::InvalidOption {
                    option: "command",
                    value: format!("{command} requires a value"),
                });
            }
            ("show", _) => SessionCommand::Show,
            ("help", _) => SessionCommand::Help,
            ("quit", _) | ("exit", _) => SessionCommand::Quit,
            _ => {
                return Err(AppError::InvalidOption {
                    option: "command",
                    value: line.trim().to_string(),
                });
            }
        };

        if words.next().is_some() {
            return Err(AppError::InvalidOption {
                option: "command",
                value: line.trim().to_string(),
            });
        }
        Ok(parsed)
    }
}

pub enum SessionOutcome {
    Render,
    Help,
    Quit,
}

impl BoardSession {
    pub fn new(options: BoardOptions) -> Self {
        Self {
            tickets: Vec::new(),
            options,
            board: Vec::new(),
        }
    }

    /// Fetches tickets once. A failed fetch is logged and the previous tickets stay.
    pub async fn load(&mut self, source: &dyn TicketSource) -> bool {
        match source.fetch_tickets().await {
            Ok(tickets) => {
                self.set_tickets(tickets);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "error fetching tickets");
                false
            }
        }
    }

    pub fn set_tickets(&mut self, tickets: Vec<Ticket>) {
        self.tickets = tickets;
        self.recompute();
    }

    pub fn set_grouping(&mut self, grouping: Grouping) {
        self.options.grouping = grouping;
        self.recompute();
    }

    pub fn set_sorting(&mut self, sorting: Sorting) {
        self.options.sorting = sorting;
        self.recompute();
    }

    pub fn apply(&mut self, command: SessionCommand) -> SessionOutcome {
        match command {
            SessionCommand::Group(grouping) => self.set_grouping(grouping),
            SessionCommand::Sort(sorting) => self.set_sorting(sorting),
            SessionCommand::Show => {}
            SessionCommand::Help => return SessionOutcome::Help,
            SessionCommand::Quit => return SessionOutcome::Quit,
        }
        SessionOutcome::Render
    }

    pub fn options(&self) -> BoardOptions {
        self.options
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn board(&self) -> &[Group] {
        &self.board
    }

    fn recompute(&mut self) {
        self.board = build_board(&self.tickets, &self.options);
    }
}
