// src/logic/parser/edit.rs

use std::collections::BTreeSet;

use super::cli_syntax::{
    ADDRESS_FIELD, EMAIL_FIELD, MAJOR_FIELD, NAME_FIELD, PHONE_FIELD, TAG_FIELD, person_prefixes,
};
use super::parser_util::{parse_index, parse_optional, parse_required, parse_tags};
use super::tokenizer::{ArgumentMultimap, tokenize};
use super::{ParseError, ParseResult, single_value};
use crate::logic::commands::{Command, EDIT_USAGE, EditPersonDescriptor};
use crate::model::{ConstraintError, Tag};

/// Parsea `edit ÍNDICE [n/...] [p/...] [e/...] [a/...] [m/...] [t/...]...`.
///
/// `p/` o `e/` vacíos borran el campo; un único `t/` vacío borra todas las etiquetas.
pub fn parse(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &person_prefixes());

    let index = parse_index(map.preamble()).map_err(|_| ParseError::invalid_format(EDIT_USAGE))?;

    let mut descriptor = EditPersonDescriptor::default();
    if let Some(raw) = single_value(&map, &NAME_FIELD) {
        descriptor.name = Some(parse_required(raw)?);
    }
    if map.contains(&PHONE_FIELD.prefix) {
        descriptor.phone = Some(parse_optional(single_value(&map, &PHONE_FIELD))?);
    }
    if map.contains(&EMAIL_FIELD.prefix) {
        descriptor.email = Some(parse_optional(single_value(&map, &EMAIL_FIELD))?);
    }
    if let Some(raw) = single_value(&map, &ADDRESS_FIELD) {
        descriptor.address = Some(parse_required(raw)?);
    }
    if let Some(raw) = single_value(&map, &MAJOR_FIELD) {
        descriptor.major = Some(parse_required(raw)?);
    }
    descriptor.tags = parse_tags_for_edit(&map)?;

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldToEdit);
    }

    Ok(Command::Edit { index, descriptor })
}

fn parse_tags_for_edit(map: &ArgumentMultimap) -> Result<Option<BTreeSet<Tag>>, ConstraintError> {
    let values = map.resolve(&TAG_FIELD);
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(values).map(Some),
    }
}
