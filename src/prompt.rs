//! Prompt layer. By default prompts take over the terminal (ratatui);
//! accessible mode renders them as plain lines on stdout and reads replies
//! from stdin, so screen readers and dumb terminals keep working.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};

use crate::app::{ConfirmApp, ConfirmOutcome, SelectApp, SelectOutcome};
use crate::tui;

/// Reads the ACCESSIBLE environment variable. Truthy spellings are `1`, `t`
/// and `true` (case-insensitive); anything else, including unset, is false.
pub fn accessible_mode_from_env() -> bool {
    parse_accessible_toggle(std::env::var("ACCESSIBLE").ok().as_deref())
}

fn parse_accessible_toggle(value: Option<&str>) -> bool {
    match value {
        Some(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "t" | "true"),
        None => false,
    }
}

/// Ask the user which of `options` to pick; returns the chosen subset,
/// possibly empty. Aborting the prompt is an error.
pub fn multi_select(title: &str, options: &[String], accessible: bool) -> Result<Vec<String>> {
    if accessible {
        let stdin = io::stdin();
        return accessible_multi_select(title, options, &mut stdin.lock(), &mut io::stdout());
    }

    let mut app = SelectApp::new(title, options.to_vec());
    tui::run_select(&mut app)?;
    match app.outcome() {
        Some(SelectOutcome::Accepted) => Ok(app.selected_names()),
        _ => bail!("user aborted"),
    }
}

/// Ask a yes/no question, with optional detail lines shown under it.
/// Aborting the prompt is an error; answering No is not.
pub fn confirm(title: &str, details: &[String], accessible: bool) -> Result<bool> {
    if accessible {
        let stdin = io::stdin();
        return accessible_confirm(title, details, &mut stdin.lock(), &mut io::stdout());
    }

    let mut app = ConfirmApp::new(title, details.to_vec());
    tui::run_confirm(&mut app)?;
    match app.outcome() {
        Some(ConfirmOutcome::Answered(answer)) => Ok(answer),
        _ => bail!("user aborted"),
    }
}

fn accessible_multi_select<R: BufRead, W: Write>(
    title: &str,
    options: &[String],
    reader: &mut R,
    writer: &mut W,
) -> Result<Vec<String>> {
    writeln!(writer, "{title}")?;
    for (idx, option) in options.iter().enumerate() {
        writeln!(writer, "  {}. {option}", idx + 1)?;
    }

    loop {
        write!(
            writer,
            "Numbers to delete, separated by commas (blank for none): "
        )?;
        writer.flush()?;

        let line = read_reply(reader)?;
        match parse_selection(&line, options.len()) {
            Ok(indices) => {
                return Ok(indices.into_iter().map(|i| options[i].clone()).collect());
            }
            Err(message) => writeln!(writer, "{message}")?,
        }
    }
}

fn accessible_confirm<R: BufRead, W: Write>(
    title: &str,
    details: &[String],
    reader: &mut R,
    writer: &mut W,
) -> Result<bool> {
    writeln!(writer, "{title}")?;
    for detail in details {
        writeln!(writer, "  {detail}")?;
    }

    loop {
        write!(writer, "Yes or no? [y/n]: ")?;
        writer.flush()?;

        let line = read_reply(reader)?;
        match parse_yes_no(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(writer, "Please answer yes or no.")?,
        }
    }
}

/// One reply line from the user; EOF counts as aborting the prompt.
fn read_reply<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let bytes = reader
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if bytes == 0 {
        bail!("user aborted");
    }
    Ok(line)
}

/// Parse a comma-separated list of 1-based option numbers into 0-based
/// indices, deduplicated, in the order given. Blank input means "none".
fn parse_selection(input: &str, count: usize) -> Result<Vec<usize>, String> {
    let mut picked = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => {
                if !picked.contains(&(n - 1)) {
                    picked.push(n - 1);
                }
            }
            _ => return Err(format!("'{token}' is not a number between 1 and {count}.")),
        }
    }
    Ok(picked)
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
