//! ncomp CLI - Scaffold React and Vue components

use anyhow::Result;
use clap::Parser;
use ncomp_core::tui::CreateArgs;
use ncomp_core::{FileType, ProductConfig};
use std::path::PathBuf;

/// ncomp product configuration
#[derive(Clone)]
pub struct NcompConfig;

impl ProductConfig for NcompConfig {
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
        "NCOMP_TEMPLATE_DIR"
    }
}

#[derive(Parser, Debug)]
#[command(name = "ncomp")]
#[command(about = "CLI for scaffolding React and Vue components")]
#[command(version)]
pub struct Args {
    /// Component name and file type (jsx, tsx, vue). Omit both for interactive mode
    #[arg(value_name = "ARGS")]
    pub positional: Vec<String>,

    /// Local directory to use for templates instead of the built-in ones
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            positional: args.positional,
            template_dir: args.template_dir,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = ncomp_core::run(&NcompConfig, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
