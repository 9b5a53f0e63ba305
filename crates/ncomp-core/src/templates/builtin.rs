//! Templates shipped with the tool

use super::{FileType, Variant};

/// A built-in template and the relative path it lives at in a template directory
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTemplate {
    pub file_type: FileType,
    pub variant: Option<Variant>,
    pub path: &'static str,
    pub content: &'static str,
}

pub const BUILTIN_TEMPLATES: &[BuiltinTemplate] = &[
    BuiltinTemplate {
        file_type: FileType::Jsx,
        variant: None,
        path: "jsx.tmpl",
        content: include_str!("../../templates/jsx.tmpl"),
    },
    BuiltinTemplate {
        file_type: FileType::Tsx,
        variant: None,
        path: "tsx.tmpl",
        content: include_str!("../../templates/tsx.tmpl"),
    },
    BuiltinTemplate {
        file_type: FileType::Vue,
        variant: None,
        path: "vue.tmpl",
        content: include_str!("../../templates/vue.tmpl"),
    },
    BuiltinTemplate {
        file_type: FileType::Rust,
        variant: None,
        path: "rust.tmpl",
        content: include_str!("../../templates/rust.tmpl"),
    },
    BuiltinTemplate {
        file_type: FileType::Dart,
        variant: Some(Variant::Stateful),
        path: "dart/stateful.tmpl",
        content: include_str!("../../templates/dart/stateful.tmpl"),
    },
    BuiltinTemplate {
        file_type: FileType::Dart,
        variant: Some(Variant::Stateless),
        path: "dart/stateless.tmpl",
        content: include_str!("../../templates/dart/stateless.tmpl"),
    },
];

/// Look up the built-in template registered for a file type and variant
pub fn lookup(file_type: FileType, variant: Option<Variant>) -> Option<&'static BuiltinTemplate> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|t| t.file_type == file_type && t.variant == variant)
}
