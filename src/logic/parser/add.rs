// src/logic/parser/add.rs

use super::cli_syntax::{
    ADDRESS_FIELD, EMAIL_FIELD, MAJOR_FIELD, NAME_FIELD, PERSON_FIELDS, PHONE_FIELD, TAG_FIELD,
    person_prefixes,
};
use super::parser_util::{parse_optional, parse_required, parse_tags};
use super::tokenizer::tokenize;
use super::{ParseError, ParseResult, single_value};
use crate::logic::commands::{ADD_USAGE, Command};
use crate::model::{Address, Email, Major, Name, Person, Phone};

/// Parsea los argumentos de `add`.
///
/// Orden de comprobación, el primer fallo gana:
/// 1. El preámbulo debe estar vacío.
/// 2. Deben aparecer los prefijos obligatorios (`n/`, `a/`, `m/`).
/// 3. Nombre, teléfono, email, dirección, carrera y etiquetas, en ese orden.
pub fn parse(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &person_prefixes());

    if !map.preamble().is_empty() {
        log::debug!("add: preámbulo no vacío '{}'", map.preamble());
        return Err(ParseError::invalid_format(ADD_USAGE));
    }

    let missing_required = PERSON_FIELDS
        .iter()
        .any(|rule| rule.required && !map.contains(&rule.prefix));
    if missing_required {
        return Err(ParseError::invalid_format(ADD_USAGE));
    }

    let name: Name = parse_required(single_value(&map, &NAME_FIELD).unwrap_or_default())?;
    let phone: Option<Phone> = parse_optional(single_value(&map, &PHONE_FIELD))?;
    let email: Option<Email> = parse_optional(single_value(&map, &EMAIL_FIELD))?;
    let address: Address = parse_required(single_value(&map, &ADDRESS_FIELD).unwrap_or_default())?;
    let major: Major = parse_required(single_value(&map, &MAJOR_FIELD).unwrap_or_default())?;
    let tags = parse_tags(map.resolve(&TAG_FIELD))?;

    Ok(Command::Add(Person::new(name, phone, email, address, major, tags)))
}
