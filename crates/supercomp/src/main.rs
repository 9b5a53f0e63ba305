//! supercomp CLI - Scaffold components for React, Vue, Rust, Flutter or your own templates

use anyhow::Result;
use clap::Parser;
use ncomp_core::tui::CreateArgs;
use ncomp_core::{FileType, ProductConfig};
use std::path::PathBuf;

/// supercomp product configuration
#[derive(Clone)]
pub struct SupercompConfig;

impl ProductConfig for SupercompConfig {
    fn name(&self) -> &'static str {
        "supercomp"
    }

    fn display_name(&self) -> &'static str {
        "SUPER COMPONENTS!"
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
        "SUPERCOMP_TEMPLATE_DIR"
    }
}

#[derive(Parser, Debug)]
#[command(name = "supercomp")]
#[command(about = "CLI for scaffolding components from built-in or user templates")]
#[command(version)]
pub struct Args {
    /// Component name, file type and, for dart or custom, the variant or
    /// user template file. Omit for interactive mode
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
    let result = ncomp_core::run(&SupercompConfig, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
