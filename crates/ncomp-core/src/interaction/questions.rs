//! Interactive questions and the rules deciding when each is asked

use crate::component::ComponentRequest;
use crate::templates::{FileType, Variant};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    ComponentName,
    FileType,
    Variant,
    CustomTemplate,
}

impl Question {
    pub fn prompt(&self) -> &'static str {
        match self {
            Question::ComponentName => "Enter the component name:",
            Question::FileType => "Choose the component type:",
            Question::Variant => "Choose the widget type:",
            Question::CustomTemplate => "Choose a custom template:",
        }
    }
}

/// Answers collected so far
#[derive(Debug, Clone, Default)]
pub struct Answers {
    pub name: Option<String>,
    pub file_type: Option<FileType>,
    pub variant: Option<Variant>,
    pub custom_template: Option<PathBuf>,
}

impl Answers {
    /// Complete request, or `None` if a required answer is missing
    pub fn into_request(self, target_dir: PathBuf) -> Option<ComponentRequest> {
        let mut request = ComponentRequest::new(self.name?, self.file_type?, target_dir);
        request.variant = self.variant;
        request.custom_template = self.custom_template;
        Some(request)
    }
}

/// Predicate over earlier answers deciding whether a question is shown
pub type Visibility = fn(&Answers) -> bool;

fn always(_: &Answers) -> bool {
    true
}

fn is_dart(answers: &Answers) -> bool {
    answers.file_type == Some(FileType::Dart)
}

fn is_custom(answers: &Answers) -> bool {
    answers.file_type == Some(FileType::Custom)
}

/// Questions in the order they are asked
pub const QUESTIONS: &[(Question, Visibility)] = &[
    (Question::ComponentName, always),
    (Question::FileType, always),
    (Question::Variant, is_dart),
    (Question::CustomTemplate, is_custom),
];
