//! Component templates
//!
//! This module provides:
//! - The supported file types and dart widget variants
//! - Built-in templates embedded in the binary
//! - Template resolution (built-in, on-disk override, or user custom template)
//! - Placeholder substitution

pub mod builtin;
pub mod resolver;

use crate::error::{Result, ScaffoldError};
use std::fmt;
use std::str::FromStr;

pub use resolver::{TemplateHandle, TemplateResolver, TemplateSource};

/// Literal token replaced with the component name
pub const PLACEHOLDER: &str = "COMPONENT_NAME";

/// Kind of component file to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Jsx,
    Tsx,
    Vue,
    Rust,
    Dart,
    Custom,
}

impl FileType {
    pub const ALL: &'static [FileType] = &[
        FileType::Jsx,
        FileType::Tsx,
        FileType::Vue,
        FileType::Rust,
        FileType::Dart,
        FileType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Jsx => "jsx",
            FileType::Tsx => "tsx",
            FileType::Vue => "vue",
            FileType::Rust => "rust",
            FileType::Dart => "dart",
            FileType::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FileType::Jsx => "JavaScript",
            FileType::Tsx => "TypeScript",
            FileType::Vue => "Vue",
            FileType::Rust => "Rust",
            FileType::Dart => "Dart",
            FileType::Custom => "Custom",
        }
    }

    /// Only React components get an `index.<ext>` re-export
    pub fn wants_index_file(&self) -> bool {
        matches!(self, FileType::Jsx | FileType::Tsx)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        FileType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScaffoldError::invalid(format!("Unsupported file type '{}'", s)))
    }
}

/// Flutter widget flavour for dart components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Stateful,
    Stateless,
}

impl Variant {
    pub const ALL: &'static [Variant] = &[Variant::Stateful, Variant::Stateless];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Stateful => "stateful",
            Variant::Stateless => "stateless",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScaffoldError::invalid(format!("Unknown widget variant '{}'", s)))
    }
}

/// Replace every occurrence of the placeholder with the component name
pub fn render(template: &str, name: &str) -> String {
    template.replace(PLACEHOLDER, name)
}
