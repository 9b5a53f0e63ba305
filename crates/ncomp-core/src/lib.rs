//! ncomp Core - Shared library for component scaffolding CLIs
//!
//! This library creates UI component folders from templates. It is designed
//! to be used by multiple CLI binaries (e.g., `ncomp`, `supercomp`) that share
//! the same underlying logic but offer different capability sets.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name canonicalization, directory listing,
//!   template resolution, collision detection, component writing
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and
//!   `InteractionController` driving any `Prompter` front-end
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use ncomp_core::{ComponentRequest, ComponentWriter, FileType};
//! use ncomp_core::templates::{TemplateResolver, TemplateSource};
//!
//! let writer = ComponentWriter::new(TemplateResolver::new(TemplateSource::Embedded), FileType::ALL);
//! let request = ComponentRequest::new("nav bar", FileType::Tsx, "src".into());
//! let artifact = writer.write(&request).await?;
//! ```

pub mod browse;
pub mod component;
pub mod config;
pub mod error;
pub mod interaction;
pub mod naming;
pub mod product;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use component::{ComponentArtifact, ComponentRequest, ComponentWriter};
pub use error::ScaffoldError;
pub use naming::{to_canonical, CanonicalName};
pub use product::ProductConfig;
pub use templates::{FileType, Variant};

#[cfg(feature = "tui")]
pub use tui::run;
