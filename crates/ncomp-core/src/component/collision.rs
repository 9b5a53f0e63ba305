//! Detection of components that already exist

use std::path::{Path, PathBuf};

/// Extensions checked for an existing component, in order
///
/// Narrower than the full set of file types: rust, dart and custom
/// components with the same name are not detected.
pub const CHECKED_EXTENSIONS: &[&str] = &["jsx", "tsx", "vue"];

/// First existing `<name>.<ext>` in `component_dir`, if any
pub fn find_conflict(component_dir: &Path, name: &str) -> Option<PathBuf> {
    CHECKED_EXTENSIONS
        .iter()
        .map(|ext| component_dir.join(format!("{}.{}", name, ext)))
        .find(|path| path.exists())
}

pub fn exists(component_dir: &Path, name: &str) -> bool {
    find_conflict(component_dir, name).is_some()
}
