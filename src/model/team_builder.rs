// src/model/team_builder.rs

use std::num::NonZeroUsize;
use thiserror::Error;

use super::person::Person;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("La persona '{0}' ya existe en la lista.")]
    DuplicatePerson(String),
    #[error("La persona '{0}' no está en la lista.")]
    PersonNotFound(String),
}

type ModelResult<T> = Result<T, ModelError>;

/// La lista de personas. No admite dos personas con el mismo nombre.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamBuilder {
    persons: Vec<Person>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construye la lista validando que no haya duplicados.
    pub fn with_persons(persons: Vec<Person>) -> ModelResult<Self> {
        let mut team_builder = Self::new();
        for person in persons {
            team_builder.add_person(person)?;
        }
        Ok(team_builder)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) -> ModelResult<()> {
        if self.has_person(&person) {
            return Err(ModelError::DuplicatePerson(person.name.to_string()));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Reemplaza `target` por `edited`, manteniendo su posición.
    /// `edited` puede conservar el nombre de `target`, pero no el de otra persona.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| ModelError::PersonNotFound(target.name.to_string()))?;

        if !target.is_same_person(&edited) && self.has_person(&edited) {
            return Err(ModelError::DuplicatePerson(edited.name.to_string()));
        }
        self.persons[position] = edited;
        Ok(())
    }

    pub fn remove_person(&mut self, target: &Person) -> ModelResult<Person> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| ModelError::PersonNotFound(target.name.to_string()))?;
        Ok(self.persons.remove(position))
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }
}

/// Filtro de `find`: el nombre contiene alguna de las palabras clave como palabra completa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn matches(&self, person: &Person) -> bool {
        let name = person.name.as_ref();
        self.keywords.iter().any(|keyword| {
            name.split_whitespace()
                .any(|word| word.eq_ignore_ascii_case(keyword))
        })
    }
}

/// Estado en memoria de la aplicación: la lista y la vista filtrada que ve el usuario.
#[derive(Debug, Clone, Default)]
pub struct Model {
    team_builder: TeamBuilder,
    filter: Option<NameContainsKeywords>,
}

impl Model {
    pub fn new(team_builder: TeamBuilder) -> Self {
        Self {
            team_builder,
            filter: None,
        }
    }

    pub fn team_builder(&self) -> &TeamBuilder {
        &self.team_builder
    }

    pub fn team_builder_mut(&mut self) -> &mut TeamBuilder {
        &mut self.team_builder
    }

    /// Las personas visibles tras aplicar el filtro actual, en orden de inserción.
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.team_builder
            .persons()
            .iter()
            .filter(|p| self.filter.as_ref().is_none_or(|f| f.matches(p)))
            .collect()
    }

    /// Persona en la posición `index` (base 1) de la lista visible.
    pub fn displayed_person(&self, index: NonZeroUsize) -> Option<&Person> {
        self.filtered_persons().get(index.get() - 1).copied()
    }

    pub fn update_filter(&mut self, filter: Option<NameContainsKeywords>) {
        log::debug!("Filtro actualizado: {:?}", filter);
        self.filter = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::sample_persons;

    #[test]
    fn rejects_duplicate_names() {
        let persons = sample_persons();
        let mut team_builder = TeamBuilder::with_persons(persons.clone()).unwrap();
        let err = team_builder.add_person(persons[0].clone()).unwrap_err();
        assert!(matches!(err, ModelError::DuplicatePerson(_)));
    }

    #[test]
    fn set_person_keeps_position() {
        let persons = sample_persons();
        let mut team_builder = TeamBuilder::with_persons(persons.clone()).unwrap();
        let mut edited = persons[1].clone();
        edited.tags.clear();
        team_builder.set_person(&persons[1], edited.clone()).unwrap();
        assert_eq!(team_builder.persons()[1], edited);
    }

    #[test]
    fn set_person_rejects_taking_another_name() {
        let persons = sample_persons();
        let mut team_builder = TeamBuilder::with_persons(persons.clone()).unwrap();
        let mut edited = persons[1].clone();
        edited.name = persons[0].name.clone();
        assert!(team_builder.set_person(&persons[1], edited).is_err());
    }

    #[test]
    fn filter_matches_whole_words_ignoring_case() {
        let persons = sample_persons();
        let mut model = Model::new(TeamBuilder::with_persons(persons.clone()).unwrap());
        let first_word = persons[0].name.as_ref().split_whitespace().next().unwrap();

        model.update_filter(Some(NameContainsKeywords::new(vec![
            first_word.to_uppercase(),
        ])));
        assert_eq!(model.filtered_persons(), vec![&persons[0]]);

        let partial = &first_word[..first_word.len() - 1];
        model.update_filter(Some(NameContainsKeywords::new(vec![partial.to_string()])));
        assert!(model.filtered_persons().is_empty());

        model.update_filter(None);
        assert_eq!(model.filtered_persons().len(), persons.len());
    }

    #[test]
    fn displayed_person_is_one_based() {
        let persons = sample_persons();
        let model = Model::new(TeamBuilder::with_persons(persons.clone()).unwrap());
        assert_eq!(model.displayed_person(NonZeroUsize::MIN), Some(&persons[0]));
        let past_end = NonZeroUsize::new(persons.len() + 1).unwrap();
        assert_eq!(model.displayed_person(past_end), None);
    }
}
