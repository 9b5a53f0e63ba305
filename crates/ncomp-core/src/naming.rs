//! Component name canonicalization and validation

use crate::error::{Result, ScaffoldError};
use std::fmt;

/// Characters rejected by the interactive name prompt
pub const DISALLOWED_CHARS: &str = "~@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Convert raw input into a Pascal-cased identifier
///
/// Words are split on whitespace, hyphens and underscores. Only the first
/// character of each word is uppercased; the rest keeps its casing so
/// acronyms like `HTTPClient` survive.
pub fn to_canonical(raw: &str) -> String {
    raw.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// A validated, Pascal-cased component name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalName(String);

impl CanonicalName {
    /// Canonicalize raw input, rejecting names that cannot be used as a file name
    pub fn parse(raw: &str) -> Result<Self> {
        let name = to_canonical(raw);
        if name.is_empty() {
            return Err(ScaffoldError::invalid("Please enter a component name."));
        }
        if let Some(c) = name.chars().find(|c| !c.is_alphanumeric()) {
            return Err(ScaffoldError::invalid(format!(
                "Component name '{}' contains an invalid character '{}'",
                raw, c
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation rules applied to names typed at the interactive prompt
#[derive(Debug, Clone, Copy)]
pub struct NameRules {
    pub allow_digits: bool,
}

impl NameRules {
    pub fn check(&self, value: &str) -> std::result::Result<(), String> {
        if value.chars().any(|c| DISALLOWED_CHARS.contains(c)) {
            return Err("Component names cannot contain special characters.".to_string());
        }
        if !self.allow_digits && value.chars().any(|c| c.is_ascii_digit()) {
            return Err("Component names cannot contain numbers.".to_string());
        }
        if value.trim().is_empty() {
            return Err("Please enter a component name.".to_string());
        }
        CanonicalName::parse(value).map_err(|e| e.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_and_underscore_split() {
        assert_eq!(to_canonical("my-component"), "MyComponent");
        assert_eq!(to_canonical("my_component_name"), "MyComponentName");
        assert_eq!(to_canonical("foo bar"), "FooBar");
    }

    #[test]
    fn test_single_lowercase_word() {
        assert_eq!(to_canonical("button"), "Button");
    }

    #[test]
    fn test_inner_casing_preserved() {
        assert_eq!(to_canonical("HTTPClient"), "HTTPClient");
        assert_eq!(to_canonical("user-ID card"), "UserIDCard");
    }

    #[test]
    fn test_repeated_and_edge_separators() {
        assert_eq!(to_canonical("  --nav__bar  "), "NavBar");
        assert_eq!(to_canonical("- _ "), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["my-component", "foo bar", "HTTPClient", "a1 b2"] {
            let once = to_canonical(raw);
            assert_eq!(to_canonical(&once), once);
        }
    }

    #[test]
    fn test_output_has_no_separators_and_starts_uppercase() {
        for raw in ["side nav-item_x", "z", "card9 list", "x-Y_z w"] {
            let name = to_canonical(raw);
            assert!(!name.contains([' ', '-', '_']));
            assert!(name.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn test_canonical_name_rejects_empty_and_paths() {
        assert!(CanonicalName::parse("   ").is_err());
        assert!(CanonicalName::parse("../evil").is_err());
        assert!(CanonicalName::parse("a/b").is_err());
        assert_eq!(CanonicalName::parse("nav bar").unwrap().as_str(), "NavBar");
    }

    #[test]
    fn test_name_rules() {
        let lenient = NameRules { allow_digits: true };
        let strict = NameRules {
            allow_digits: false,
        };

        assert!(lenient.check("foo bar").is_ok());
        assert!(lenient.check("card2").is_ok());
        assert!(strict.check("card2").is_err());
        assert!(lenient.check("   ").is_err());
        assert!(lenient.check("my-component").is_err());
        assert!(lenient.check("user@home").is_err());
        assert!(lenient.check("card!").is_err());
        assert!(lenient.check("tab`s").is_err());
    }
}
