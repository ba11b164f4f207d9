//! User input for interactive samples.
//!
//! [`TerminalPrompter`] asks on the terminal with `dialoguer`;
//! [`ScriptedPrompter`] replays answers given up front, which lets the
//! interactive samples run unattended (`-p answers=0,1,true`) and under test.

use std::collections::VecDeque;

use dialoguer::{Input, Select};

use crate::error::{AppError, Result};

/// Source of answers for a decision tree.
pub trait Prompter: Send {
    /// Pick one of `labels`; returns its index.
    fn choose(&mut self, item: &str, labels: &[String]) -> Result<usize>;

    /// Ask for free text.
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Ask the user to confirm by entering `true`.
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.text(prompt)?.trim().eq_ignore_ascii_case("true"))
    }
}

fn prompt_error(err: dialoguer::Error) -> AppError {
    AppError::Io(std::io::Error::other(err.to_string()))
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn choose(&mut self, item: &str, labels: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(format!("Select the {}", item))
            .items(labels)
            .default(0)
            .interact()
            .map_err(prompt_error)
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }
}

/// Answers replayed in order.
///
/// Selections are given as indices. Like a person at the keyboard, an
/// out-of-range or non-numeric selection is reported and the next answer is
/// tried.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma separated answer list (`0,1,true,some text`).
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(',').map(str::trim))
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
        self.answers.pop_front().ok_or_else(|| {
            AppError::InvalidRequest(format!("no scripted answer left for '{}'", prompt))
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn choose(&mut self, item: &str, labels: &[String]) -> Result<usize> {
        let max = labels.len().saturating_sub(1);
        loop {
            let answer = self.next(item)?;
            match answer.parse::<usize>() {
                Ok(value) if value < labels.len() => return Ok(value),
                Ok(_) => println!("Invalid input. Enter a number from <0-{}>.", max),
                Err(_) => println!("Invalid input. Please enter a valid number."),
            }
        }
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        self.next(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    #[test]
    fn invalid_selections_are_skipped() {
        let mut prompter = ScriptedPrompter::from_list("x, 7, 1");
        assert_eq!(prompter.choose("issue", &labels(2)).unwrap(), 1);
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn confirm_accepts_true_in_any_case() {
        let mut prompter = ScriptedPrompter::new(["TRUE", "yes"]);
        assert!(prompter.confirm("confirm").unwrap());
        assert!(!prompter.confirm("confirm").unwrap());
    }

    #[test]
    fn running_out_of_answers_is_an_error() {
        let mut prompter = ScriptedPrompter::default();
        assert!(matches!(
            prompter.text("reason"),
            Err(AppError::InvalidRequest(_))
        ));
    }
}
