// src/logic/parser/find.rs

use super::{ParseError, ParseResult};
use crate::logic::commands::{Command, FIND_USAGE};
use crate::model::NameContainsKeywords;

pub fn parse(args: &str) -> ParseResult<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(FIND_USAGE));
    }
    Ok(Command::Find(NameContainsKeywords::new(keywords)))
}
