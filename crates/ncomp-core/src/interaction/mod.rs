//! Input gathering for a component request
//!
//! Answers come either from positional arguments (direct mode) or from a
//! sequence of questions (interactive mode). The prompt widgets themselves
//! sit behind the [`Prompter`] trait so the sequencing rules can run against
//! any front-end.

mod navigate;
mod questions;

use crate::browse;
use crate::component::ComponentRequest;
use crate::config::Settings;
use crate::error::ScaffoldError;
use crate::naming::NameRules;
use crate::product::ProductConfig;
use crate::templates::{FileType, Variant};
use anyhow::Result;
use std::path::PathBuf;

pub use navigate::{navigate, PARENT_CHOICE};
pub use questions::{Answers, Question, QUESTIONS};

/// Front-end capable of asking the user questions
pub trait Prompter {
    /// Free text input
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Pick one of `items`, returning its index
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Report a validation problem before asking again
    fn error(&mut self, message: &str) -> Result<()>;
}

/// How the request is gathered, decided by the number of positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Interactive,
    Direct {
        name: String,
        file_type: String,
        extra: Option<String>,
    },
}

impl InputMode {
    pub fn from_args(args: &[String]) -> std::result::Result<Self, ScaffoldError> {
        match args {
            [] => Ok(Self::Interactive),
            [_] => Err(ScaffoldError::invalid(
                "Run without arguments to use the interactive prompts, or pass both a component name and a file type",
            )),
            [name, file_type, rest @ ..] => Ok(Self::Direct {
                name: name.clone(),
                file_type: file_type.clone(),
                extra: rest.first().cloned(),
            }),
        }
    }
}

/// Gathers a [`ComponentRequest`] according to a product's capabilities
pub struct InteractionController<'a, C: ProductConfig> {
    config: &'a C,
    settings: &'a Settings,
    root: PathBuf,
}

impl<'a, C: ProductConfig> InteractionController<'a, C> {
    /// `root` is the invocation directory every relative location hangs off
    pub fn new(config: &'a C, settings: &'a Settings, root: PathBuf) -> Self {
        Self {
            config,
            settings,
            root,
        }
    }

    pub fn user_templates_dir(&self) -> PathBuf {
        self.settings.user_templates_dir(&self.root)
    }

    pub fn gather<P: Prompter>(&self, prompter: &mut P, mode: InputMode) -> Result<ComponentRequest> {
        match mode {
            InputMode::Interactive => self.gather_interactive(prompter),
            InputMode::Direct {
                name,
                file_type,
                extra,
            } => Ok(self.gather_direct(&name, &file_type, extra.as_deref())?),
        }
    }

    /// Build a request from positional arguments, targeting the source directory
    pub fn gather_direct(
        &self,
        name: &str,
        file_type: &str,
        extra: Option<&str>,
    ) -> std::result::Result<ComponentRequest, ScaffoldError> {
        let file_type: FileType = file_type.parse()?;
        if !self.config.supports(file_type) {
            return Err(ScaffoldError::invalid(format!(
                "Unsupported file type '{}'",
                file_type
            )));
        }
        if name.trim().is_empty() {
            return Err(ScaffoldError::invalid("Please enter a component name."));
        }

        let mut request =
            ComponentRequest::new(name, file_type, self.settings.source_dir(&self.root));

        match file_type {
            FileType::Dart => {
                let variant = match extra {
                    Some(v) => v.parse()?,
                    None => Variant::Stateless,
                };
                request = request.with_variant(variant);
            }
            FileType::Custom => {
                let template = extra.ok_or_else(|| {
                    ScaffoldError::invalid(
                        "Pass the name of a file in the user templates folder after 'custom'",
                    )
                })?;
                request = request.with_custom_template(self.user_templates_dir().join(template));
            }
            _ => {}
        }

        Ok(request)
    }

    fn gather_interactive<P: Prompter>(&self, prompter: &mut P) -> Result<ComponentRequest> {
        if self.config.supports(FileType::Custom) {
            self.offer_user_templates_dir(prompter)?;
        }

        let mut answers = Answers::default();
        for (question, visible) in QUESTIONS {
            if visible(&answers) {
                self.ask(*question, prompter, &mut answers)?;
            }
        }

        let target_dir = if self.config.browse_directories() {
            navigate(prompter, &self.root)?.unwrap_or_else(|| self.settings.source_dir(&self.root))
        } else {
            self.settings.source_dir(&self.root)
        };

        answers
            .into_request(target_dir)
            .ok_or_else(|| anyhow::anyhow!("Prompt sequence ended without a complete answer"))
    }

    /// Offer to create the user templates folder when it is missing
    fn offer_user_templates_dir<P: Prompter>(&self, prompter: &mut P) -> Result<()> {
        let dir = self.user_templates_dir();
        if dir.is_dir() {
            return Ok(());
        }

        let create = prompter.confirm(
            &format!(
                "No {} folder found. Create it for your custom templates?",
                self.settings.user_templates_dir.display()
            ),
            true,
        )?;
        if create {
            std::fs::create_dir_all(&dir)
                .map_err(|e| ScaffoldError::io(format!("Failed to create {}", dir.display()), e))?;
        }
        Ok(())
    }

    fn ask<P: Prompter>(
        &self,
        question: Question,
        prompter: &mut P,
        answers: &mut Answers,
    ) -> Result<()> {
        match question {
            Question::ComponentName => {
                let rules = NameRules {
                    allow_digits: self.config.allow_digits(),
                };
                loop {
                    let value = prompter.input(question.prompt())?;
                    match rules.check(&value) {
                        Ok(()) => {
                            answers.name = Some(value);
                            break;
                        }
                        Err(message) => prompter.error(&message)?,
                    }
                }
            }
            Question::FileType => {
                let types = self.config.file_types();
                let items: Vec<String> = types
                    .iter()
                    .map(|t| t.as_str().to_uppercase())
                    .collect();
                let idx = prompter.select(question.prompt(), &items)?;
                answers.file_type = Some(types[idx]);
            }
            Question::Variant => {
                let items: Vec<String> = Variant::ALL.iter().map(|v| v.to_string()).collect();
                let idx = prompter.select(question.prompt(), &items)?;
                answers.variant = Some(Variant::ALL[idx]);
            }
            Question::CustomTemplate => {
                let dir = self.user_templates_dir();
                let templates = browse::list_user_templates(&dir)?;
                if templates.is_empty() {
                    return Err(ScaffoldError::TemplateNotFound(format!(
                        "no templates in {}",
                        dir.display()
                    ))
                    .into());
                }
                let idx = prompter.select(question.prompt(), &templates)?;
                answers.custom_template = Some(dir.join(&templates[idx]));
            }
        }
        Ok(())
    }
}
