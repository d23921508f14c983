// src/model/person.rs

use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use super::tag::Tag;
use super::{ConstraintError, FieldValue};

/// Nombre de una persona. También es su identidad dentro de la lista.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl FieldValue for Name {
    const MESSAGE_CONSTRAINTS: &'static str =
        "Los nombres solo pueden contener letras sin acentos (A-Z), dígitos y espacios, y no pueden estar vacíos.";
    const ERROR: ConstraintError = ConstraintError::Name;

    fn is_valid(value: &str) -> bool {
        static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = NAME_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").unwrap());
        re.is_match(value)
    }

    fn from_valid(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl FieldValue for Phone {
    const MESSAGE_CONSTRAINTS: &'static str =
        "Los teléfonos solo pueden contener dígitos y deben tener al menos 3 dígitos.";
    const ERROR: ConstraintError = ConstraintError::Phone;

    fn is_valid(value: &str) -> bool {
        value.len() >= 3 && value.bytes().all(|b| b.is_ascii_digit())
    }

    fn from_valid(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl FieldValue for Email {
    const MESSAGE_CONSTRAINTS: &'static str = "Los emails deben tener el formato parte-local@dominio y cumplir lo siguiente:\n\
        1. La parte local solo puede contener caracteres alfanuméricos y estos caracteres especiales (+_.-). \
        No puede empezar ni terminar con un carácter especial.\n\
        2. Le sigue una '@' y un nombre de dominio, formado por etiquetas separadas por puntos.\n\
        El nombre de dominio debe:\n    \
        - terminar en una etiqueta de al menos 2 caracteres\n    \
        - empezar y terminar cada etiqueta con un carácter alfanumérico\n    \
        - formar cada etiqueta con caracteres alfanuméricos, separados solo por guiones si los hay.";
    const ERROR: ConstraintError = ConstraintError::Email;

    fn is_valid(value: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = EMAIL_REGEX.get_or_init(|| {
            let label = r"[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*";
            let pattern = format!(
                r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:{label}\.)*(?:{label}){{2,}}$"
            );
            Regex::new(&pattern).unwrap()
        });
        re.is_match(value)
    }

    fn from_valid(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl FieldValue for Address {
    const MESSAGE_CONSTRAINTS: &'static str =
        "Las direcciones pueden tener cualquier valor, pero no pueden estar vacías.";
    const ERROR: ConstraintError = ConstraintError::Address;

    fn is_valid(value: &str) -> bool {
        value.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    fn from_valid(value: String) -> Self {
        Self(value)
    }
}

/// Carrera o especialidad de la persona (ej: "Computer Science").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Major(String);

impl FieldValue for Major {
    const MESSAGE_CONSTRAINTS: &'static str =
        "Las carreras solo pueden contener letras sin acentos (A-Z) y espacios, y no pueden estar vacías.";
    const ERROR: ConstraintError = ConstraintError::Major;

    fn is_valid(value: &str) -> bool {
        static MAJOR_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = MAJOR_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z ]*$").unwrap());
        re.is_match(value)
    }

    fn from_valid(value: String) -> Self {
        Self(value)
    }
}

// Todos los tipos de valor se muestran y se leen como su texto interno.
macro_rules! impl_text_value {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl AsRef<str> for $ty {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }
        )*
    };
}

impl_text_value!(Name, Phone, Email, Address, Major);

/// Una persona de la lista. Inmutable: editar significa reemplazarla por otra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Address,
    pub major: Major,
    pub tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Option<Phone>,
        email: Option<Email>,
        address: Address,
        major: Major,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            major,
            tags,
        }
    }

    /// Dos personas son la misma si comparten nombre, aunque difieran en el resto.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(phone) = &self.phone {
            write!(f, "; Teléfono: {}", phone)?;
        }
        if let Some(email) = &self.email {
            write!(f, "; Email: {}", email)?;
        }
        write!(f, "; Dirección: {}; Carrera: {}", self.address, self.major)?;
        if !self.tags.is_empty() {
            let tags: Vec<String> = self.tags.iter().map(|t| format!("[{}]", t)).collect();
            write!(f, "; Etiquetas: {}", tags.join(""))?;
        }
        Ok(())
    }
}
