// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::BTreeSet;

use teambuilder::logic::ParseError;
use teambuilder::logic::commands::Command;
use teambuilder::model::{Address, Email, FieldValue, Major, Name, Person, Phone, Tag};

pub const VALID_NAME_AMY: &str = "Amy Bee";
pub const VALID_NAME_BOB: &str = "Bob Choo";
pub const VALID_PHONE_AMY: &str = "11111111";
pub const VALID_PHONE_BOB: &str = "22222222";
pub const VALID_EMAIL_AMY: &str = "amy@example.com";
pub const VALID_EMAIL_BOB: &str = "bob@example.com";
pub const VALID_ADDRESS_AMY: &str = "Block 312, Amy Street 1";
pub const VALID_ADDRESS_BOB: &str = "Block 123, Bobby Street 3";
pub const VALID_MAJOR_AMY: &str = "Business Analytics";
pub const VALID_MAJOR_BOB: &str = "Computer Science";
pub const VALID_TAG_HUSBAND: &str = "husband";
pub const VALID_TAG_FRIEND: &str = "friend";

pub const NAME_DESC_AMY: &str = " n/Amy Bee";
pub const NAME_DESC_BOB: &str = " n/Bob Choo";
pub const PHONE_DESC_AMY: &str = " p/11111111";
pub const PHONE_DESC_BOB: &str = " p/22222222";
pub const EMAIL_DESC_AMY: &str = " e/amy@example.com";
pub const EMAIL_DESC_BOB: &str = " e/bob@example.com";
pub const ADDRESS_DESC_AMY: &str = " a/Block 312, Amy Street 1";
pub const ADDRESS_DESC_BOB: &str = " a/Block 123, Bobby Street 3";
pub const MAJOR_DESC_AMY: &str = " m/Business Analytics";
pub const MAJOR_DESC_BOB: &str = " m/Computer Science";
pub const TAG_DESC_FRIEND: &str = " t/friend";
pub const TAG_DESC_HUSBAND: &str = " t/husband";

pub const INVALID_NAME_DESC: &str = " n/James&"; // '&' no está permitido en nombres
pub const INVALID_PHONE_DESC: &str = " p/911a"; // 'a' no está permitido en teléfonos
pub const INVALID_EMAIL_DESC: &str = " e/bob!yahoo"; // falta la '@'
pub const INVALID_ADDRESS_DESC: &str = " a/"; // la dirección no puede estar vacía
pub const INVALID_MAJOR_DESC: &str = " m/CS2103"; // dígitos no permitidos en carreras
pub const INVALID_TAG_DESC: &str = " t/hubby*"; // '*' no está permitido en etiquetas

pub const PREAMBLE_WHITESPACE: &str = "\t  \r  \n";
pub const PREAMBLE_NON_EMPTY: &str = "NonEmptyPreamble";

/// Construye personas de prueba a partir de texto, validando cada campo.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: String,
    phone: Option<String>,
    email: Option<String>,
    address: String,
    major: String,
    tags: Vec<String>,
}

impl PersonBuilder {
    pub fn amy() -> Self {
        Self {
            name: VALID_NAME_AMY.to_string(),
            phone: Some(VALID_PHONE_AMY.to_string()),
            email: Some(VALID_EMAIL_AMY.to_string()),
            address: VALID_ADDRESS_AMY.to_string(),
            major: VALID_MAJOR_AMY.to_string(),
            tags: vec![VALID_TAG_FRIEND.to_string()],
        }
    }

    pub fn bob() -> Self {
        Self {
            name: VALID_NAME_BOB.to_string(),
            phone: Some(VALID_PHONE_BOB.to_string()),
            email: Some(VALID_EMAIL_BOB.to_string()),
            address: VALID_ADDRESS_BOB.to_string(),
            major: VALID_MAJOR_BOB.to_string(),
            tags: vec![VALID_TAG_HUSBAND.to_string(), VALID_TAG_FRIEND.to_string()],
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    pub fn without_phone(mut self) -> Self {
        self.phone = None;
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn with_major(mut self, major: &str) -> Self {
        self.major = major.to_string();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Person {
        Person::new(
            Name::parse(&self.name).unwrap(),
            self.phone.map(|p| Phone::parse(&p).unwrap()),
            self.email.map(|e| Email::parse(&e).unwrap()),
            Address::parse(&self.address).unwrap(),
            Major::parse(&self.major).unwrap(),
            self.tags
                .iter()
                .map(|t| Tag::parse(t).unwrap())
                .collect::<BTreeSet<_>>(),
        )
    }
}

pub fn assert_parse_success(
    parser: fn(&str) -> Result<Command, ParseError>,
    input: &str,
    expected: Command,
) {
    match parser(input) {
        Ok(command) => pretty_assertions::assert_eq!(command, expected, "entrada: {:?}", input),
        Err(e) => panic!("se esperaba éxito para {:?}, se obtuvo: {}", input, e),
    }
}

pub fn assert_parse_failure(
    parser: fn(&str) -> Result<Command, ParseError>,
    input: &str,
    expected_message: &str,
) {
    match parser(input) {
        Ok(command) => panic!("se esperaba un error para {:?}, se obtuvo: {:?}", input, command),
        Err(e) => pretty_assertions::assert_eq!(e.to_string(), expected_message, "entrada: {:?}", input),
    }
}
