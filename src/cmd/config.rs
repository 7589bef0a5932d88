use std::io::{self, BufRead, Write};

use clap::{Args, Subcommand};

use crate::config::{DEFAULT_SOURCE_URL, StoredConfig, config_file_path};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Run the interactive configuration wizard.
    Init,
    /// Show the stored configuration.
    Show,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(),
        ConfigCommand::Show => run_show(),
    }
}

fn run_init() -> AppResult<()> {
    let mut cfg = StoredConfig::load()?;

    println!("Configuring kanban CLI.");
    println!("Press Enter to keep the current value, '-' to clear it.");
    println!();

    let stdin = io::stdin();
    apply_prompt(
        "Ticket source (URL or path to a JSON file)",
        &mut cfg.source_url,
        &mut stdin.lock(),
        &mut io::stdout(),
    )?;

    cfg.save()?;

    let path = config_file_path()?;
    println!("\nConfiguration saved to {}", path.display());
    Ok(())
}

fn run_show() -> AppResult<()> {
    let cfg = StoredConfig::load()?;
    let path = config_file_path()?;

    println!("Configuration file: {}", path.display());
    println!("Ticket source: {}", display_value(&cfg.source_url));

    Ok(())
}

fn apply_prompt<R: BufRead, W: Write>(
    field: &str,
    target: &mut Option<String>,
    input: &mut R,
    output: &mut W,
) -> AppResult<()> {
    match prompt(field, target.as_deref(), input, output)? {
        PromptAction::Keep => {}
        PromptAction::Clear => *target = None,
        PromptAction::Set(value) => *target = Some(value),
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    field: &str,
    current: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> AppResult<PromptAction> {
    match current {
        Some(value) => write!(output, "{field} [{value}] (Enter to keep, '-' to clear): ")?,
        None => write!(output, "{field} (Enter to skip): ")?,
    }
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim();

    if trimmed.is_empty() {
        Ok(PromptAction::Keep)
    } else if trimmed == "-" {
        Ok(PromptAction::Clear)
    } else {
        Ok(PromptAction::Set(trimmed.to_string()))
    }
}

fn display_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| format!("<not set, using {DEFAULT_SOURCE_URL}>"))
}

enum PromptAction {
    Keep,
    Clear,
    Set(String),
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn answer(current: Option<&str>, reply: &str) -> (Option<String>, String) {
        let mut target = current.map(str::to_string);
        let mut output = Vec::new();
        apply_prompt(
            "Ticket source",
            &mut target,
            &mut Cursor::new(reply.to_string()),
            &mut output,
        )
        .unwrap();
        (target, String::from_utf8(output).unwrap())
    }

    #[test]
    fn keeps_value_on_enter() {
        let (target, output) = answer(Some("https://a.example"), "\n");
        assert_eq!(target.as_deref(), Some("https://a.example"));
        assert!(output.contains("[https://a.example]"));
    }

    #[test]
    fn clears_value_on_dash() {
        let (target, _) = answer(Some("https://a.example"), "-\n");
        assert_eq!(target, None);
    }

    #[test]
    fn sets_trimmed_value() {
        let (target, output) = answer(None, "  tickets.json \n");
        assert_eq!(target.as_deref(), Some("tickets.json"));
        assert!(output.contains("(Enter to skip)"));
    }

    #[test]
    fn shows_default_when_unset() {
        assert!(display_value(&None).contains(DEFAULT_SOURCE_URL));
        assert_eq!(display_value(&Some("x.json".to_string())), "x.json");
    }
}
