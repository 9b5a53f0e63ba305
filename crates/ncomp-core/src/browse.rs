//! Directory listing for target navigation and user templates

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Immediate child directories of `root`, in filesystem enumeration order
pub fn list_directories(root: &Path) -> Result<Vec<PathBuf>> {
    let mut directories = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            ScaffoldError::io(format!("Failed to list {}", root.display()), e.into())
        })?;
        if entry.file_type().is_dir() {
            directories.push(entry.into_path());
        }
    }

    Ok(directories)
}

/// Child directories of `dir`, or `None` when there is nowhere deeper to go
pub fn list_subdirectories(dir: &Path) -> Result<Option<Vec<PathBuf>>> {
    let subdirs = list_directories(dir)?;
    Ok(if subdirs.is_empty() { None } else { Some(subdirs) })
}

/// File names inside the user templates folder
///
/// Fails with a `NotFound` I/O error when the folder does not exist.
pub fn list_user_templates(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| ScaffoldError::io(format!("Failed to read {}", dir.display()), e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| ScaffoldError::io(format!("Failed to read {}", dir.display()), e))?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_directories_skips_files_and_nested() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("components/buttons")).unwrap();
        fs::create_dir(temp.path().join("pages")).unwrap();
        fs::write(temp.path().join("README.md"), "").unwrap();

        let mut dirs = list_directories(temp.path()).unwrap();
        dirs.sort();

        assert_eq!(
            dirs,
            vec![temp.path().join("components"), temp.path().join("pages")]
        );
    }

    #[test]
    fn test_list_subdirectories_none_when_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("only-a-file.txt"), "").unwrap();

        assert!(list_subdirectories(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_list_subdirectories_some() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();

        let subdirs = list_subdirectories(temp.path()).unwrap().unwrap();
        assert_eq!(subdirs, vec![temp.path().join("nested")]);
    }

    #[test]
    fn test_list_directories_missing_root_errors() {
        let temp = TempDir::new().unwrap();
        assert!(list_directories(&temp.path().join("nope")).is_err());
    }

    #[test]
    fn test_list_user_templates() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("user_templates");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("card.svelte"), "<div>COMPONENT_NAME</div>").unwrap();
        fs::create_dir(dir.join("drafts")).unwrap();

        assert_eq!(list_user_templates(&dir).unwrap(), vec!["card.svelte"]);
    }

    #[test]
    fn test_list_user_templates_missing_folder() {
        let temp = TempDir::new().unwrap();
        let err = list_user_templates(&temp.path().join("user_templates")).unwrap_err();

        match err {
            ScaffoldError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
