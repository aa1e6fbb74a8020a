//! Interactive prompts for the pull/push flows
//!
//! Uses dialoguer for terminal-based selection and input.

use acquia_core::{Error, Prompter, Result};
use acquia_meta::Choice;
use dialoguer::{Input, Password, Select};

fn prompt_error(err: dialoguer::Error) -> Error {
    Error::Prompt(err.to_string())
}

/// [`Prompter`] backed by the terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, choices: &[Choice], default: Option<usize>) -> Result<String> {
        if choices.is_empty() {
            return Err(Error::Prompt(format!("Nothing to choose for \"{message}\"")));
        }
        let names: Vec<&str> = choices.iter().map(|c| c.name.as_str()).collect();

        let idx = Select::new()
            .with_prompt(message)
            .items(&names)
            .default(default.unwrap_or(0))
            .interact()
            .map_err(prompt_error)?;

        Ok(choices[idx].value.clone())
    }

    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(message);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }

    fn password(&mut self, message: &str) -> Result<String> {
        Password::new()
            .with_prompt(message)
            .interact()
            .map_err(prompt_error)
    }
}
