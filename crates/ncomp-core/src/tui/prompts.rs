//! Charm-style CLI prompts using cliclack

use crate::component::{ComponentArtifact, ComponentRequest, ComponentWriter};
use crate::config::Settings;
use crate::error::ScaffoldError;
use crate::interaction::{InputMode, InteractionController, Prompter};
use crate::product::ProductConfig;
use crate::templates::{FileType, TemplateResolver, TemplateSource};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Positional arguments: component name, file type, optional extra
    pub positional: Vec<String>,

    /// Local directory to use instead of the embedded templates
    pub template_dir: Option<PathBuf>,
}

/// Prompter backed by cliclack widgets
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        let value: String = cliclack::input(prompt).required(false).interact()?;
        Ok(value)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        let mut select = cliclack::select(prompt);
        for (idx, item) in items.iter().enumerate() {
            select = select.item(idx, item, "");
        }
        Ok(select.interact()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(cliclack::confirm(prompt).initial_value(default).interact()?)
    }

    fn error(&mut self, message: &str) -> Result<()> {
        cliclack::log::error(message)?;
        Ok(())
    }
}

/// Run the CLI, prompting for anything not given on the command line
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    let mode = match InputMode::from_args(&args.positional) {
        Ok(mode) => mode,
        Err(e) => return Err(report_usage(config, e)),
    };

    cliclack::intro(config.display_name())?;

    // Step 1: Load project settings
    let root = std::env::current_dir().context("Failed to determine the current directory")?;
    let settings = Settings::load(&root)?;

    // Step 2: Gather the request
    let controller = InteractionController::new(config, &settings, root.clone());
    let request = match controller.gather(&mut CliclackPrompter, mode) {
        Ok(request) => request,
        Err(e) => {
            return Err(match e.downcast::<ScaffoldError>() {
                Ok(scaffold) => report_usage(config, scaffold),
                Err(other) => other,
            })
        }
    };

    print_summary(config, &request)?;

    // Step 3: Setup template resolver
    let source = TemplateSource::from_config(config, args.template_dir, settings.template_dir(&root));
    if let TemplateSource::Local(dir) = &source {
        cliclack::log::info(format!("Using local templates from {}", dir.display()))?;
    }
    let writer = ComponentWriter::from_config(config, TemplateResolver::new(source));

    // Step 4: Create the component
    let artifact = create_component(config, &writer, &request).await?;

    cliclack::outro(format!(
        "Your component named {} has been successfully created",
        artifact.name.bold()
    ))?;

    Ok(())
}

/// Show usage help when the input was at fault; the error itself is reported by the caller
fn report_usage<C: ProductConfig>(config: &C, err: ScaffoldError) -> anyhow::Error {
    if err.is_usage_error() {
        let _ = cliclack::log::info(config.usage());
    }
    err.into()
}

/// Language line with the selected type highlighted
fn language_line(types: &[FileType], selected: FileType) -> String {
    types
        .iter()
        .map(|t| {
            if *t == selected {
                t.display_name().blue().bold().to_string()
            } else {
                t.display_name().dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn print_summary<C: ProductConfig>(config: &C, request: &ComponentRequest) -> Result<()> {
    cliclack::log::info(format!(
        "Directory:  {}\nLanguage:   {}",
        request.target_dir.display().to_string().blue().bold(),
        language_line(config.file_types(), request.file_type)
    ))?;
    Ok(())
}

async fn create_component<C: ProductConfig>(
    config: &C,
    writer: &ComponentWriter,
    request: &ComponentRequest,
) -> Result<ComponentArtifact> {
    let spinner = cliclack::spinner();
    spinner.start("Creating the component...");

    match writer.write(request).await {
        Ok(artifact) => {
            let created = if artifact.index_file.is_some() { 2 } else { 1 };
            spinner.stop(format!(
                "Created {} file(s) in {}",
                created,
                artifact.directory.display()
            ));
            Ok(artifact)
        }
        Err(e) => {
            spinner.error("Failed to create the component");
            Err(report_usage(config, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_line_lists_every_type() {
        colored::control::set_override(false);
        let line = language_line(&[FileType::Jsx, FileType::Tsx], FileType::Tsx);
        assert_eq!(line, "JavaScript  TypeScript");
    }
}
