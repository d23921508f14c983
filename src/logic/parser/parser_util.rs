// src/logic/parser/parser_util.rs

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use super::ParseError;
use crate::model::{ConstraintError, FieldValue, Tag};

/// Lee un índice de la lista (base 1). Acepta espacios alrededor.
pub fn parse_index(raw: &str) -> Result<NonZeroUsize, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<NonZeroUsize>()
        .map_err(|_| ParseError::InvalidIndex)
}

/// Valida un campo obligatorio ya resuelto.
pub fn parse_required<T: FieldValue>(raw: &str) -> Result<T, ConstraintError> {
    T::parse(raw)
}

/// Valida un campo opcional. Ausente o vacío significan lo mismo: sin valor.
pub fn parse_optional<T: FieldValue>(raw: Option<&str>) -> Result<Option<T>, ConstraintError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => T::parse(value).map(Some),
    }
}

/// Valida cada etiqueta en orden de aparición; la primera inválida corta.
pub fn parse_tags<S: AsRef<str>>(raw_tags: &[S]) -> Result<BTreeSet<Tag>, ConstraintError> {
    raw_tags.iter().map(|raw| Tag::parse(raw.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Phone;

    #[test]
    fn index_must_be_a_non_zero_unsigned_integer() {
        assert_eq!(parse_index(" 1 ").unwrap().get(), 1);
        assert_eq!(parse_index("42").unwrap().get(), 42);
        for invalid in ["", "0", "-1", "+1", "1 2", "a", "10000000000000000000000"] {
            assert_eq!(parse_index(invalid), Err(ParseError::InvalidIndex), "{}", invalid);
        }
    }

    #[test]
    fn optional_empty_is_absent() {
        assert_eq!(parse_optional::<Phone>(None), Ok(None));
        assert_eq!(parse_optional::<Phone>(Some("")), Ok(None));
        assert_eq!(parse_optional::<Phone>(Some("   ")), Ok(None));
        assert!(parse_optional::<Phone>(Some("123")).unwrap().is_some());
        assert_eq!(
            parse_optional::<Phone>(Some("12a")),
            Err(ConstraintError::Phone)
        );
    }

    #[test]
    fn tags_collapse_duplicates() {
        let tags = parse_tags(&["friend", "friend", "owes"]).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(parse_tags(&["ok", "not ok"]), Err(ConstraintError::Tag));
        assert!(parse_tags::<&str>(&[]).unwrap().is_empty());
    }
}
