//! Template resolution from the embedded set or a local template directory
//!
//! Built-in templates are embedded in the binary. A local directory that
//! mirrors the same layout (`jsx.tmpl`, `dart/stateful.tmpl`, ...) can
//! replace them, which is handy while editing templates.

use super::{builtin, FileType, Variant};
use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Where built-in templates are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded,
    Local(PathBuf),
}

impl TemplateSource {
    /// Pick the template source: explicit directory, then the product env var,
    /// then the project settings, then embedded
    pub fn from_config<C: ProductConfig>(
        config: &C,
        template_dir: Option<PathBuf>,
        configured: Option<PathBuf>,
    ) -> Self {
        template_dir
            .or_else(|| std::env::var_os(config.template_dir_env()).map(PathBuf::from))
            .or(configured)
            .map(Self::Local)
            .unwrap_or(Self::Embedded)
    }
}

/// A located template, ready to be read
#[derive(Debug, Clone)]
pub struct TemplateHandle {
    pub source_path: PathBuf,
    pub extension: String,
    embedded: Option<&'static str>,
}

impl TemplateHandle {
    /// Read the raw template text
    pub async fn read(&self) -> Result<String> {
        if let Some(content) = self.embedded {
            return Ok(content.to_string());
        }
        fs::read_to_string(&self.source_path).await.map_err(|e| {
            ScaffoldError::io(
                format!("Failed to read template {}", self.source_path.display()),
                e,
            )
        })
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded.is_some()
    }
}

/// Maps a requested file type to a concrete template
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    source: TemplateSource,
}

impl TemplateResolver {
    pub fn new(source: TemplateSource) -> Self {
        Self { source }
    }

    pub fn resolve(
        &self,
        file_type: FileType,
        variant: Option<Variant>,
        custom_path: Option<&Path>,
    ) -> Result<TemplateHandle> {
        if file_type == FileType::Custom {
            let path = custom_path.ok_or_else(|| {
                ScaffoldError::invalid("A custom template must be chosen for the custom file type")
            })?;
            return Self::resolve_custom(path);
        }

        let template = builtin::lookup(file_type, variant).ok_or_else(|| {
            ScaffoldError::TemplateNotFound(match variant {
                Some(v) => format!("no built-in template for {} ({})", file_type, v),
                None => format!("no built-in template for {}", file_type),
            })
        })?;

        let extension = file_type.as_str().to_string();

        match &self.source {
            TemplateSource::Embedded => Ok(TemplateHandle {
                source_path: PathBuf::from(template.path),
                extension,
                embedded: Some(template.content),
            }),
            TemplateSource::Local(dir) => {
                let source_path = dir.join(template.path);
                if !source_path.is_file() {
                    return Err(ScaffoldError::TemplateNotFound(
                        source_path.display().to_string(),
                    ));
                }
                Ok(TemplateHandle {
                    source_path,
                    extension,
                    embedded: None,
                })
            }
        }
    }

    fn resolve_custom(path: &Path) -> Result<TemplateHandle> {
        if !path.is_file() {
            return Err(ScaffoldError::TemplateNotFound(path.display().to_string()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| {
                ScaffoldError::invalid(format!(
                    "Custom template {} has no file extension",
                    path.display()
                ))
            })?;

        Ok(TemplateHandle {
            source_path: path.to_path_buf(),
            extension: extension.to_string(),
            embedded: None,
        })
    }
}
