// src/logic/parser/delete.rs

use super::parser_util::parse_index;
use super::{ParseError, ParseResult};
use crate::logic::commands::{Command, DELETE_USAGE};

pub fn parse(args: &str) -> ParseResult<Command> {
    parse_index(args)
        .map(Command::Delete)
        .map_err(|_| ParseError::invalid_format(DELETE_USAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    #[test]
    fn valid_index() {
        assert_eq!(parse(" 1"), Ok(Command::Delete(NonZeroUsize::MIN)));
    }

    #[test]
    fn invalid_index() {
        assert_eq!(parse(" a"), Err(ParseError::invalid_format(DELETE_USAGE)));
        assert_eq!(parse(""), Err(ParseError::invalid_format(DELETE_USAGE)));
    }
}
