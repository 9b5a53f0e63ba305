//! Project settings loaded from `.ncomp.yaml`
//!
//! The file is optional. Every field falls back to a default, so a project
//! without it behaves exactly like one with an empty file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings file name, looked up in the invocation directory
pub const SETTINGS_FILE: &str = ".ncomp.yaml";

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_user_templates_dir() -> PathBuf {
    PathBuf::from("user_templates")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory components are created in when no directory is browsed to
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Folder holding user-authored custom templates
    #[serde(default = "default_user_templates_dir")]
    pub user_templates_dir: PathBuf,

    /// Directory overriding the built-in templates
    #[serde(default)]
    pub template_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            user_templates_dir: default_user_templates_dir(),
            template_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from `root`, falling back to defaults when the file is absent
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(SETTINGS_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Default target directory for new components
    pub fn source_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir)
    }

    pub fn user_templates_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.user_templates_dir)
    }

    pub fn template_dir(&self, root: &Path) -> Option<PathBuf> {
        self.template_dir.as_ref().map(|dir| root.join(dir))
    }
}
