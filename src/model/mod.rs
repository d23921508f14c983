// src/model/mod.rs

pub mod person;
pub mod sample;
pub mod tag;
pub mod team_builder;

pub use person::{Address, Email, Major, Name, Person, Phone};
pub use tag::Tag;
pub use team_builder::{Model, NameContainsKeywords, TeamBuilder};

use thiserror::Error;

/// Error de validación de un campo. Cada variante muestra el mensaje
/// de restricciones del tipo de valor que la produjo.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("{}", Name::MESSAGE_CONSTRAINTS)]
    Name,
    #[error("{}", Phone::MESSAGE_CONSTRAINTS)]
    Phone,
    #[error("{}", Email::MESSAGE_CONSTRAINTS)]
    Email,
    #[error("{}", Address::MESSAGE_CONSTRAINTS)]
    Address,
    #[error("{}", Major::MESSAGE_CONSTRAINTS)]
    Major,
    #[error("{}", Tag::MESSAGE_CONSTRAINTS)]
    Tag,
}

/// Un tipo de valor que sabe validarse a partir de texto libre.
pub trait FieldValue: Sized {
    /// Descripción del formato aceptado, mostrada tal cual al usuario.
    const MESSAGE_CONSTRAINTS: &'static str;
    /// El error que se devuelve cuando el valor no cumple su regla.
    const ERROR: ConstraintError;

    /// Comprueba la regla de formato sobre un valor ya recortado.
    fn is_valid(value: &str) -> bool;

    /// Construye el valor sin volver a validar. Solo se llama tras `is_valid`.
    fn from_valid(value: String) -> Self;

    /// Recorta los espacios y valida. El resultado es inmutable.
    fn parse(raw: &str) -> Result<Self, ConstraintError> {
        let trimmed = raw.trim();
        if Self::is_valid(trimmed) {
            Ok(Self::from_valid(trimmed.to_string()))
        } else {
            Err(Self::ERROR)
        }
    }
}
