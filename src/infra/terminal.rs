use std::io::Write;

use clap::ValueEnum;

use crate::domain::board::Group;
use crate::error::{AppError, AppResult};
use crate::services::BoardDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct TerminalDisplay<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    fn render_text(&mut self, groups: &[Group]) -> AppResult<()> {
        if groups.is_empty() {
            writeln!(self.writer, "No tickets to display.")?;
            return Ok(());
        }

        for (index, group) in groups.iter().enumerate() {
            if index > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "{} ({})", group.key, group.tickets.len())?;
            for ticket in &group.tickets {
                writeln!(self.writer, "  - [{}] {}", ticket.id, ticket.title)?;
            }
        }
        Ok(())
    }

    fn render_json(&mut self, groups: &[Group]) -> AppResult<()> {
        let data = serde_json::to_string_pretty(groups)
            .map_err(|err| AppError::Render(format!("failed to encode board: {err}")))?;
        writeln!(self.writer, "{data}")?;
        Ok(())
    }
}

impl<W: Write> BoardDisplay for TerminalDisplay<W> {
    fn render(&mut self, groups: &[Group]) -> AppResult<()> {
        match self.format {
            OutputFormat::Text => self.render_text(groups)?,
            OutputFormat::Json => self.render_json(groups)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::build_board;
    use crate::domain::options::{BoardOptions, Grouping, Sorting};
    use crate::domain::ticket::sample_tickets;

    fn render(groups: &[Group], format: OutputFormat) -> String {
        let mut output = Vec::new();
        TerminalDisplay::new(&mut output, format)
            .render(groups)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn renders_text_board() {
        let board = build_board(&sample_tickets(), &BoardOptions::default());
        assert_eq!(
            render(&board, OutputFormat::Text),
            "open (2)\n  - [2] A\n  - [1] B\n\ndone (1)\n  - [3] C\n"
        );
    }

    #[test]
    fn renders_empty_board() {
        assert_eq!(
            render(&[], OutputFormat::Text),
            "No tickets to display.\n"
        );
    }

    #[test]
    fn renders_json_board() {
        let board = build_board(
            &sample_tickets(),
            &BoardOptions::new(Grouping::Priority, Sorting::Title),
        );
        let output = render(&board, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[0]["key"], 5);
        assert_eq!(value[0]["tickets"][0]["title"], "A");
    }
}
