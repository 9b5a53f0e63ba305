//! Step-by-step selection of the directory a component is created in

use super::Prompter;
use crate::browse;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Choice that stops descending and keeps the current directory
pub const PARENT_CHOICE: &str = "..";

fn label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Let the user pick a directory under `root`, descending until they stop
/// or there are no deeper directories.
///
/// Returns `None` when `root` has no directories to choose from.
pub fn navigate<P: Prompter>(prompter: &mut P, root: &Path) -> Result<Option<PathBuf>> {
    let top_level = browse::list_directories(root)?;
    if top_level.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = top_level.iter().map(|p| label(p)).collect();
    let idx = prompter.select("Select the target directory:", &items)?;
    let mut current = top_level[idx].clone();

    while let Some(subdirs) = browse::list_subdirectories(&current)? {
        let mut items = vec![PARENT_CHOICE.to_string()];
        items.extend(subdirs.iter().map(|p| label(p)));

        let prompt = format!(
            "Select a subdirectory of {} ({} to use it):",
            label(&current),
            PARENT_CHOICE
        );
        match prompter.select(&prompt, &items)? {
            0 => break,
            idx => current = subdirs[idx - 1].clone(),
        }
    }

    Ok(Some(current))
}
