//! Component file generation

use super::{collision, ComponentArtifact, ComponentRequest};
use crate::error::{Result, ScaffoldError};
use crate::naming::CanonicalName;
use crate::product::ProductConfig;
use crate::templates::{self, FileType, TemplateResolver};
use std::path::Path;
use tokio::fs;

/// Writes a component directory from a request
#[derive(Debug, Clone)]
pub struct ComponentWriter {
    resolver: TemplateResolver,
    file_types: &'static [FileType],
}

impl ComponentWriter {
    pub fn new(resolver: TemplateResolver, file_types: &'static [FileType]) -> Self {
        Self {
            resolver,
            file_types,
        }
    }

    /// Create a writer limited to the file types a product supports
    pub fn from_config<C: ProductConfig>(config: &C, resolver: TemplateResolver) -> Self {
        Self::new(resolver, config.file_types())
    }

    /// Create `<target>/<Name>/<Name>.<ext>` and, for React, `index.<ext>`
    ///
    /// Nothing is written when validation or the collision check fails. A
    /// failed index write leaves the main file in place.
    pub async fn write(&self, request: &ComponentRequest) -> Result<ComponentArtifact> {
        self.validate(request)?;

        let name = CanonicalName::parse(&request.raw_name)?;
        let component_dir = request.target_dir.join(name.as_str());

        if let Some(path) = collision::find_conflict(&component_dir, name.as_str()) {
            let file = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| name.to_string());
            return Err(ScaffoldError::NameCollision { file, path });
        }

        fs::create_dir_all(&component_dir).await.map_err(|e| {
            ScaffoldError::io(
                format!("Failed to create directory {}", component_dir.display()),
                e,
            )
        })?;

        let handle = self.resolver.resolve(
            request.file_type,
            request.variant,
            request.custom_template.as_deref(),
        )?;
        let content = templates::render(&handle.read().await?, name.as_str());

        let main_file = component_dir.join(format!("{}.{}", name, handle.extension));
        write_file(&main_file, &content).await?;

        let index_file = if request.file_type.wants_index_file() {
            let path = component_dir.join(format!("index.{}", handle.extension));
            write_file(&path, &index_content(name.as_str())).await?;
            Some(path)
        } else {
            None
        };

        Ok(ComponentArtifact {
            name: name.to_string(),
            directory: component_dir,
            main_file,
            index_file,
        })
    }

    fn validate(&self, request: &ComponentRequest) -> Result<()> {
        let file_type = request.file_type;

        if !self.file_types.contains(&file_type) {
            return Err(ScaffoldError::invalid(format!(
                "Unsupported file type '{}'",
                file_type
            )));
        }
        if (file_type == FileType::Dart) != request.variant.is_some() {
            return Err(ScaffoldError::invalid(
                "A widget variant is required for dart components and only for them",
            ));
        }
        if (file_type == FileType::Custom) != request.custom_template.is_some() {
            return Err(ScaffoldError::invalid(
                "A custom template is required for custom components and only for them",
            ));
        }
        Ok(())
    }
}

/// Re-export of the component's default export
pub fn index_content(name: &str) -> String {
    format!("export {{ default }} from './{}';\n", name)
}

async fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .await
        .map_err(|e| ScaffoldError::io(format!("Failed to write file: {}", path.display()), e))
}
