//! Component requests and the files they produce

pub mod collision;
pub mod writer;

use crate::templates::{FileType, Variant};
use std::path::PathBuf;

pub use writer::ComponentWriter;

/// Everything needed to create one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    pub raw_name: String,
    pub file_type: FileType,
    /// Widget flavour, only for dart
    pub variant: Option<Variant>,
    /// User template file, only for custom
    pub custom_template: Option<PathBuf>,
    /// Directory the component folder is created in
    pub target_dir: PathBuf,
}

impl ComponentRequest {
    pub fn new(raw_name: impl Into<String>, file_type: FileType, target_dir: PathBuf) -> Self {
        Self {
            raw_name: raw_name.into(),
            file_type,
            variant: None,
            custom_template: None,
            target_dir,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn with_custom_template(mut self, path: PathBuf) -> Self {
        self.custom_template = Some(path);
        self
    }
}

/// Files written for a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentArtifact {
    pub name: String,
    pub directory: PathBuf,
    pub main_file: PathBuf,
    pub index_file: Option<PathBuf>,
}
