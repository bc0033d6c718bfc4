//! Shared prompt helpers for interactive CLI commands.
//!
//! This module provides TTY detection and the prompt renderer seam. Flows
//! receive the renderer by injection so tests can script answers; the
//! dialoguer-backed implementation is the only one used in production.

use std::io::IsTerminal;

use dialoguer::{FuzzySelect, Input, Select};

use crate::error::{CliError, CliResult};
use crate::interactive::fuzzy::Choice;

/// Checks if both stdin and stdout are connected to a terminal.
///
/// Returns `true` if running in an interactive TTY environment,
/// `false` if running in a pipe or CI environment.
pub fn is_interactive_terminal() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Requires an interactive terminal, returning an error if not available.
///
/// Use this at the start of interactive command handlers to fail early
/// with a helpful error message suggesting explicit flags for scripting.
pub fn require_interactive() -> CliResult<()> {
    if !is_interactive_terminal() {
        return Err(CliError::Validation(
            "Interactive mode requires a terminal.\n\
             Use explicit flags for scripting.\n\
             Run with --help for all options."
                .into(),
        ));
    }
    Ok(())
}

/// Renderer for the prompt shapes the flows need
pub trait PromptRenderer {
    /// Single selection from a fixed list; returns the selected index
    fn select(&self, message: &str, items: &[String], default: Option<usize>) -> CliResult<usize>;

    /// Autocomplete-style selection over a choice set; returns the
    /// selected index
    fn fuzzy_select(
        &self,
        message: &str,
        choices: &[Choice],
        default: Option<usize>,
    ) -> CliResult<usize>;

    /// Free text input with an optional prefilled default
    fn input(&self, message: &str, default: Option<&str>) -> CliResult<String>;
}

/// Terminal renderer backed by dialoguer
pub struct DialoguerPrompter;

impl PromptRenderer for DialoguerPrompter {
    fn select(&self, message: &str, items: &[String], default: Option<usize>) -> CliResult<usize> {
        let mut select = Select::new().with_prompt(message).items(items);
        if let Some(index) = default {
            select = select.default(index);
        }

        select
            .interact()
            .map_err(|e| CliError::InputError(format!("Selection failed: {}", e)))
    }

    fn fuzzy_select(
        &self,
        message: &str,
        choices: &[Choice],
        default: Option<usize>,
    ) -> CliResult<usize> {
        let items: Vec<&str> = choices.iter().map(|c| c.title.as_str()).collect();

        let mut select = FuzzySelect::new().with_prompt(message).items(&items);
        if let Some(index) = default {
            select = select.default(index);
        }

        select
            .interact()
            .map_err(|e| CliError::InputError(format!("Selection failed: {}", e)))
    }

    fn input(&self, message: &str, default: Option<&str>) -> CliResult<String> {
        let mut input = Input::<String>::new().with_prompt(message);
        if let Some(value) = default {
            input = input.default(value.to_string());
        }

        input
            .interact_text()
            .map_err(|e| CliError::InputError(format!("Input failed: {}", e)))
    }
}
