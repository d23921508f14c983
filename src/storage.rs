// src/storage.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::logic::parser::parser_util::{parse_optional, parse_required, parse_tags};
use crate::model::sample::sample_team_builder;
use crate::model::team_builder::ModelError;
use crate::model::{ConstraintError, Person, TeamBuilder};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Error de Ficheros: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error al parsear TOML en '{path}': {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Error al serializar a formato TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Valor inválido en la persona #{position}: {source}")]
    IllegalValue {
        position: usize,
        #[source]
        source: ConstraintError,
    },
    #[error("El archivo de datos contiene personas duplicadas: {0}")]
    Duplicate(#[from] ModelError),
}

type StorageResult<T> = Result<T, StorageError>;

/// Una persona tal como se escribe en el archivo TOML: solo texto, sin validar.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
struct StoredPerson {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    address: String,
    major: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
struct StoredTeamBuilder {
    #[serde(default)]
    persons: Vec<StoredPerson>,
}

impl From<&Person> for StoredPerson {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.to_string(),
            phone: person.phone.as_ref().map(ToString::to_string),
            email: person.email.as_ref().map(ToString::to_string),
            address: person.address.to_string(),
            major: person.major.to_string(),
            tags: person.tags.iter().map(ToString::to_string).collect(),
        }
    }
}

impl StoredPerson {
    /// Vuelve a pasar cada campo por su tipo de valor: el archivo puede haberse editado a mano.
    fn to_model(&self) -> Result<Person, ConstraintError> {
        Ok(Person::new(
            parse_required(&self.name)?,
            parse_optional(self.phone.as_deref())?,
            parse_optional(self.email.as_deref())?,
            parse_required(&self.address)?,
            parse_required(&self.major)?,
            parse_tags(self.tags.as_slice())?,
        ))
    }
}

/// Lee la lista de `path`. Si el archivo no existe todavía, devuelve `None`.
pub fn read_team_builder(path: &Path) -> StorageResult<Option<TeamBuilder>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let stored: StoredTeamBuilder =
        toml::from_str(&content).map_err(|e| StorageError::TomlParse {
            path: path.display().to_string(),
            source: e,
        })?;

    let persons = stored
        .persons
        .iter()
        .enumerate()
        .map(|(i, p)| {
            p.to_model().map_err(|source| StorageError::IllegalValue {
                position: i + 1,
                source,
            })
        })
        .collect::<StorageResult<Vec<_>>>()?;

    log::info!("Cargadas {} personas desde {:?}", persons.len(), path);
    Ok(Some(TeamBuilder::with_persons(persons)?))
}

/// Como `read_team_builder`, pero con datos de ejemplo si el archivo no existe.
pub fn read_or_sample(path: &Path) -> StorageResult<TeamBuilder> {
    match read_team_builder(path)? {
        Some(team_builder) => Ok(team_builder),
        None => {
            log::warn!(
                "No se encontró el archivo de datos {:?}. Se usarán datos de ejemplo.",
                path
            );
            Ok(sample_team_builder())
        }
    }
}

/// Guarda la lista en `path`, creando los directorios que falten.
pub fn save_team_builder(team_builder: &TeamBuilder, path: &Path) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let stored = StoredTeamBuilder {
        persons: team_builder.persons().iter().map(StoredPerson::from).collect(),
    };
    let toml_string = toml::to_string_pretty(&stored)?;
    fs::write(path, toml_string)?;
    log::info!("Guardadas {} personas en {:?}", team_builder.len(), path);
    Ok(())
}
