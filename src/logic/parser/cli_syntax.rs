// src/logic/parser/cli_syntax.rs

/// Marcador de dos caracteres que abre el valor de un campo (ej: `n/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_MAJOR: Prefix = Prefix::new("m/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

/// Cómo se resuelven las apariciones repetidas de un mismo prefijo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Gana la última aparición, aunque esté vacía.
    Last,
    /// Se conservan todas, en orden de aparición.
    CollectAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub prefix: Prefix,
    pub resolution: Resolution,
    pub required: bool,
}

impl FieldRule {
    const fn new(prefix: Prefix, resolution: Resolution, required: bool) -> Self {
        Self {
            prefix,
            resolution,
            required,
        }
    }
}

pub const NAME_FIELD: FieldRule = FieldRule::new(PREFIX_NAME, Resolution::Last, true);
pub const PHONE_FIELD: FieldRule = FieldRule::new(PREFIX_PHONE, Resolution::Last, false);
pub const EMAIL_FIELD: FieldRule = FieldRule::new(PREFIX_EMAIL, Resolution::Last, false);
pub const ADDRESS_FIELD: FieldRule = FieldRule::new(PREFIX_ADDRESS, Resolution::Last, true);
pub const MAJOR_FIELD: FieldRule = FieldRule::new(PREFIX_MAJOR, Resolution::Last, true);
pub const TAG_FIELD: FieldRule = FieldRule::new(PREFIX_TAG, Resolution::CollectAll, false);

/// Campos de una persona, en el orden en que se validan.
pub const PERSON_FIELDS: [FieldRule; 6] = [
    NAME_FIELD,
    PHONE_FIELD,
    EMAIL_FIELD,
    ADDRESS_FIELD,
    MAJOR_FIELD,
    TAG_FIELD,
];

/// Los prefijos que reconoce el tokenizador para comandos sobre personas.
pub fn person_prefixes() -> Vec<Prefix> {
    PERSON_FIELDS.iter().map(|rule| rule.prefix).collect()
}
