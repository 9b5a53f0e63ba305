//! Product configuration trait for CLI binaries
//!
//! Each binary (ncomp, supercomp) implements this trait to pick its
//! capability set while sharing one scaffolding flow.

use crate::templates::FileType;

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Supported file types
/// - Whether target directory browsing is offered
/// - How strict the interactive name rules are
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// File types this product can generate
    fn file_types(&self) -> &'static [FileType];

    /// Whether interactive mode lets the user pick a target directory
    fn browse_directories(&self) -> bool;

    /// Whether digits are accepted in names typed at the prompt
    fn allow_digits(&self) -> bool;

    /// Environment variable name for overriding the built-in template directory
    fn template_dir_env(&self) -> &'static str;

    fn supports(&self, file_type: FileType) -> bool {
        self.file_types().contains(&file_type)
    }

    /// One-line usage shown after invalid input
    fn usage(&self) -> String {
        let types: Vec<&str> = self.file_types().iter().map(|t| t.as_str()).collect();
        format!("Usage: {} <ComponentName> <{}>", self.name(), types.join("|"))
    }
}
