//! Test fixtures shared across modules

use crate::interaction::Prompter;
use crate::product::ProductConfig;
use crate::templates::FileType;
use anyhow::{bail, Result};
use std::collections::VecDeque;

/// Product limited to React and Vue, without directory browsing
#[derive(Clone)]
pub struct Minimal;

impl ProductConfig for Minimal {
    fn name(&self) -> &'static str {
        "ncomp"
    }

    fn display_name(&self) -> &'static str {
        "ncomp"
    }

    fn file_types(&self) -> &'static [FileType] {
        &[FileType::Jsx, FileType::Tsx, FileType::Vue]
    }

    fn browse_directories(&self) -> bool {
        false
    }

    fn allow_digits(&self) -> bool {
        true
    }

    fn template_dir_env(&self) -> &'static str {
        "NCOMP_TEST_TEMPLATE_DIR"
    }
}

/// Product with every file type, directory browsing and strict names
#[derive(Clone)]
pub struct Extended;

impl ProductConfig for Extended {
    fn name(&self) -> &'static str {
        "supercomp"
    }

    fn display_name(&self) -> &'static str {
        "supercomp"
    }

    fn file_types(&self) -> &'static [FileType] {
        FileType::ALL
    }

    fn browse_directories(&self) -> bool {
        true
    }

    fn allow_digits(&self) -> bool {
        false
    }

    fn template_dir_env(&self) -> &'static str {
        "SUPERCOMP_TEST_TEMPLATE_DIR"
    }
}

/// A canned answer for [`ScriptedPrompter`]
#[derive(Debug, Clone)]
pub enum Answer {
    Text(String),
    /// Selects the item with this label
    Choice(String),
    Confirm(bool),
}

/// Prompter replaying canned answers and recording what was asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub prompts: Vec<String>,
    pub errors: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Self::default()
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn next(&mut self, prompt: &str) -> Result<Answer> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("no scripted answer for '{}'", prompt),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text),
            other => bail!("expected text for '{}', got {:?}", prompt, other),
        }
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        match self.next(prompt)? {
            Answer::Choice(label) => match items.iter().position(|i| *i == label) {
                Some(idx) => Ok(idx),
                None => bail!("'{}' is not one of {:?} for '{}'", label, items, prompt),
            },
            other => bail!("expected a choice for '{}', got {:?}", prompt, other),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            other => bail!("expected a confirmation for '{}', got {:?}", prompt, other),
        }
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.errors.push(message.to_string());
        Ok(())
    }
}
