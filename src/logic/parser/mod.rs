// src/logic/parser/mod.rs

pub mod add;
pub mod cli_syntax;
pub mod delete;
pub mod edit;
pub mod find;
pub mod parser_util;
pub mod tokenizer;

use thiserror::Error;

use crate::logic::commands::{self, Command};
use crate::model::ConstraintError;
use cli_syntax::FieldRule;
use tokenizer::ArgumentMultimap;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Formato de comando inválido.\n{usage}")]
    InvalidCommandFormat { usage: &'static str },
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
    #[error("Comando desconocido.")]
    UnknownCommand,
    #[error("El índice debe ser un entero positivo distinto de cero.")]
    InvalidIndex,
    #[error("Se debe indicar al menos un campo a editar.")]
    NoFieldToEdit,
}

impl ParseError {
    pub fn invalid_format(usage: &'static str) -> Self {
        ParseError::InvalidCommandFormat { usage }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Convierte una línea escrita por el usuario en un comando listo para ejecutar.
///
/// La primera palabra elige el comando; el resto de la línea, con su espacio
/// inicial, se entrega tal cual al parser de ese comando.
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::invalid_format(commands::HELP_USAGE));
    }

    let (command_word, arguments) = match trimmed.find(char::is_whitespace) {
        Some(pos) => trimmed.split_at(pos),
        None => (trimmed, ""),
    };
    log::debug!("Comando '{}' con argumentos '{}'", command_word, arguments);

    match command_word {
        commands::ADD_WORD => add::parse(arguments),
        commands::EDIT_WORD => edit::parse(arguments),
        commands::DELETE_WORD => delete::parse(arguments),
        commands::FIND_WORD => find::parse(arguments),
        commands::LIST_WORD => Ok(Command::List),
        commands::CLEAR_WORD => Ok(Command::Clear),
        commands::HELP_WORD => Ok(Command::Help),
        commands::EXIT_WORD => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand),
    }
}

/// El valor resuelto de un campo de un solo valor, si su prefijo apareció.
fn single_value<'a>(map: &'a ArgumentMultimap, rule: &FieldRule) -> Option<&'a str> {
    map.resolve(rule).first().map(String::as_str)
}
