use std::io::{self, BufRead, Write};

use crate::context::AppContext;
use crate::domain::options::{BoardOptions, Grouping, Sorting};
use crate::error::AppResult;
use crate::infra::terminal::{OutputFormat, TerminalDisplay};
use crate::services::BoardDisplay;
use crate::workflow::board::{BoardSession, SessionCommand, SessionOutcome};

#[derive(Debug, Clone)]
pub struct BoardCommandArgs {
    pub options: BoardOptions,
    pub format: OutputFormat,
    pub interactive: bool,
}

pub async fn run(ctx: &AppContext, args: BoardCommandArgs) -> AppResult<()> {
    let mut session = BoardSession::new(args.options);
    if session.load(ctx.ticket_source.as_ref()).await {
        tracing::info!(
            source = %ctx.config.source,
            count = session.tickets().len(),
            "tickets loaded"
        );
    }

    let stdout = io::stdout();
    let mut display = TerminalDisplay::new(stdout.lock(), args.format);
    display.render(session.board())?;

    if args.interactive {
        let stdin = io::stdin();
        control_loop(&mut session, &mut display, stdin.lock(), io::stderr())?;
    }
    Ok(())
}

/// Reads grouping/sorting commands line by line and re-renders after each change.
fn control_loop<D, R, W>(
    session: &mut BoardSession,
    display: &mut D,
    input: R,
    mut prompt: W,
) -> AppResult<()>
where
    D: BoardDisplay,
    R: BufRead,
    W: Write,
{
    write_help(&mut prompt, session.options())?;

    let mut lines = input.lines();
    loop {
        write!(prompt, "> ")?;
        prompt.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(err) => {
                tracing::debug!(input = %line.trim(), "ignoring command");
                writeln!(prompt, "Error: {err}")?;
                continue;
            }
        };

        match session.apply(command) {
            SessionOutcome::Render => display.render(session.board())?,
            SessionOutcome::Help => write_help(&mut prompt, session.options())?,
            SessionOutcome::Quit => break,
        }
    }
    Ok(())
}

fn write_help<W: Write>(out: &mut W, options: BoardOptions) -> AppResult<()> {
    let groupings = Grouping::ALL.map(|g| g.as_str()).join("|");
    let sortings = Sorting::ALL.map(|s| s.as_str()).join("|");

    writeln!(
        out,
        "Grouping: {}, sorting: {}.",
        options.grouping, options.sorting
    )?;
    writeln!(out, "Commands: group <{groupings}>, sort <{sortings}>, show, help, quit")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::domain::board::Group;
    use crate::domain::ticket::sample_tickets;

    #[derive(Default)]
    struct RecordingDisplay {
        renders: Vec<Vec<String>>,
    }

    impl BoardDisplay for RecordingDisplay {
        fn render(&mut self, groups: &[Group]) -> AppResult<()> {
            self.renders
                .push(groups.iter().map(|g| g.key.to_string()).collect());
            Ok(())
        }
    }

    fn session() -> BoardSession {
        let mut session = BoardSession::new(BoardOptions::default());
        session.set_tickets(sample_tickets());
        session
    }

    fn drive(script: &str) -> (BoardSession, RecordingDisplay, String) {
        let mut session = session();
        let mut display = RecordingDisplay::default();
        let mut prompt = Vec::new();
        control_loop(
            &mut session,
            &mut display,
            Cursor::new(script.to_string()),
            &mut prompt,
        )
        .unwrap();
        (session, display, String::from_utf8(prompt).unwrap())
    }

    #[test]
    fn rerenders_on_option_change() {
        let (session, display, _) = drive("group priority\nsort title\nshow\nquit\n");

        assert_eq!(display.renders.len(), 3);
        assert_eq!(display.renders[0], vec!["5", "2", "1"]);
        assert_eq!(
            session.options(),
            BoardOptions::new(Grouping::Priority, Sorting::Title)
        );
    }

    #[test]
    fn reports_invalid_input_and_keeps_going() {
        let (session, display, prompt) = drive("group team\nfrobnicate\ngroup user\n");

        assert!(prompt.contains("Error: invalid grouping option 'team'"));
        assert!(prompt.contains("Error: invalid command option 'frobnicate'"));
        assert_eq!(display.renders.len(), 1);
        assert_eq!(session.options().grouping, Grouping::User);
    }

    #[test]
    fn stops_at_quit() {
        let (_, display, _) = drive("quit\ngroup user\n");
        assert!(display.renders.is_empty());
    }

    #[test]
    fn prints_help() {
        let (_, display, prompt) = drive("help\n");

        assert!(display.renders.is_empty());
        assert_eq!(
            prompt
                .matches("Commands: group <status|user|priority>, sort <priority|title>")
                .count(),
            2
        );
    }
}
