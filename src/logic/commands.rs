// src/logic/commands.rs

use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use thiserror::Error;

use crate::model::team_builder::ModelError;
use crate::model::{Address, Email, Major, Model, Name, NameContainsKeywords, Person, Phone, Tag};

pub const ADD_WORD: &str = "add";
pub const EDIT_WORD: &str = "edit";
pub const DELETE_WORD: &str = "delete";
pub const FIND_WORD: &str = "find";
pub const LIST_WORD: &str = "list";
pub const CLEAR_WORD: &str = "clear";
pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const ADD_USAGE: &str = "add: Añade una persona a la lista.\n\
    Parámetros: n/NOMBRE [p/TELÉFONO] [e/EMAIL] a/DIRECCIÓN m/CARRERA [t/ETIQUETA]...\n\
    Ejemplo: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 m/Computer Science t/friends t/owesMoney";

pub const EDIT_USAGE: &str = "edit: Edita los datos de la persona en la posición indicada de la lista mostrada.\n\
    Los valores indicados reemplazan a los existentes; p/ o e/ vacíos los borran.\n\
    Parámetros: ÍNDICE (entero positivo) [n/NOMBRE] [p/TELÉFONO] [e/EMAIL] [a/DIRECCIÓN] [m/CARRERA] [t/ETIQUETA]...\n\
    Ejemplo: edit 1 p/91234567 e/johndoe@example.com";

pub const DELETE_USAGE: &str = "delete: Elimina a la persona en la posición indicada de la lista mostrada.\n\
    Parámetros: ÍNDICE (entero positivo)\n\
    Ejemplo: delete 1";

pub const FIND_USAGE: &str = "find: Muestra las personas cuyo nombre contiene alguna de las palabras clave \
    (sin distinguir mayúsculas).\n\
    Parámetros: PALABRA [MÁS_PALABRAS]...\n\
    Ejemplo: find alice bob charlie";

pub const HELP_USAGE: &str = "help: Muestra el uso de todos los comandos.\n\
    Ejemplo: help";

const LIST_USAGE: &str = "list: Muestra todas las personas.";
const CLEAR_USAGE: &str = "clear: Vacía la lista de personas.";
const EXIT_USAGE: &str = "exit: Sale de la aplicación.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("El índice {0} no corresponde a ninguna persona de la lista mostrada.")]
    InvalidPersonIndex(NonZeroUsize),
    #[error(transparent)]
    Model(#[from] ModelError),
}

type CommandOutcome = Result<CommandResult, CommandError>;

/// Lo que la interfaz necesita saber tras ejecutar un comando.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub exit: bool,
}

impl CommandResult {
    fn feedback(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }
}

/// Campos a reemplazar en `edit`. En teléfono y email, `Some(None)` borra el valor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Option<Phone>>,
    pub email: Option<Option<Email>>,
    pub address: Option<Address>,
    pub major: Option<Major>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.major.is_some()
            || self.tags.is_some()
    }

    /// Aplica los cambios sobre una copia de `person`.
    pub fn apply(&self, person: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name.clone()),
            self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            self.email.clone().unwrap_or_else(|| person.email.clone()),
            self.address.clone().unwrap_or_else(|| person.address.clone()),
            self.major.clone().unwrap_or_else(|| person.major.clone()),
            self.tags.clone().unwrap_or_else(|| person.tags.clone()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Person),
    Edit {
        index: NonZeroUsize,
        descriptor: EditPersonDescriptor,
    },
    Delete(NonZeroUsize),
    Find(NameContainsKeywords),
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    /// Indica si el comando puede modificar la lista (y por tanto hay que guardarla).
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Edit { .. } | Command::Delete(_) | Command::Clear
        )
    }

    pub fn execute(self, model: &mut Model) -> CommandOutcome {
        log::info!("Ejecutando comando: {:?}", self);
        match self {
            Command::Add(person) => execute_add(model, person),
            Command::Edit { index, descriptor } => execute_edit(model, index, &descriptor),
            Command::Delete(index) => execute_delete(model, index),
            Command::Find(filter) => {
                model.update_filter(Some(filter));
                let count = model.filtered_persons().len();
                Ok(CommandResult::feedback(format!(
                    "{} persona(s) encontradas.",
                    count
                )))
            }
            Command::List => {
                model.update_filter(None);
                Ok(CommandResult::feedback("Mostrando todas las personas."))
            }
            Command::Clear => {
                model.team_builder_mut().clear();
                Ok(CommandResult::feedback("La lista de personas ha sido vaciada."))
            }
            Command::Help => Ok(CommandResult::feedback(
                [
                    ADD_USAGE,
                    EDIT_USAGE,
                    DELETE_USAGE,
                    FIND_USAGE,
                    LIST_USAGE,
                    CLEAR_USAGE,
                    HELP_USAGE,
                    EXIT_USAGE,
                ]
                .join("\n\n"),
            )),
            Command::Exit => Ok(CommandResult {
                feedback: "Saliendo...".to_string(),
                exit: true,
            }),
        }
    }
}

fn execute_add(model: &mut Model, person: Person) -> CommandOutcome {
    let feedback = format!("Nueva persona añadida: {}", person);
    model.team_builder_mut().add_person(person)?;
    Ok(CommandResult::feedback(feedback))
}

fn execute_edit(
    model: &mut Model,
    index: NonZeroUsize,
    descriptor: &EditPersonDescriptor,
) -> CommandOutcome {
    let target = model
        .displayed_person(index)
        .cloned()
        .ok_or(CommandError::InvalidPersonIndex(index))?;
    let edited = descriptor.apply(&target);
    let feedback = format!("Persona editada: {}", edited);
    model.team_builder_mut().set_person(&target, edited)?;
    Ok(CommandResult::feedback(feedback))
}

fn execute_delete(model: &mut Model, index: NonZeroUsize) -> CommandOutcome {
    let target = model
        .displayed_person(index)
        .cloned()
        .ok_or(CommandError::InvalidPersonIndex(index))?;
    let removed = model.team_builder_mut().remove_person(&target)?;
    Ok(CommandResult::feedback(format!(
        "Persona eliminada: {}",
        removed
    )))
}
