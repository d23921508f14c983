// src/model/tag.rs

use std::fmt;

use super::{ConstraintError, FieldValue};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl FieldValue for Tag {
    const MESSAGE_CONSTRAINTS: &'static str = "Las etiquetas deben ser alfanuméricas.";
    const ERROR: ConstraintError = ConstraintError::Tag;

    fn is_valid(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
    }

    fn from_valid(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_rules() {
        assert!(Tag::parse("friend").is_ok());
        assert!(Tag::parse("team2").is_ok());
        assert_eq!(Tag::parse("hubby*"), Err(ConstraintError::Tag));
        assert_eq!(Tag::parse(""), Err(ConstraintError::Tag));
        assert_eq!(Tag::parse("best friend"), Err(ConstraintError::Tag));
    }
}
