// src/model/sample.rs

use std::collections::BTreeSet;

use super::person::{Address, Email, Major, Name, Person, Phone};
use super::tag::Tag;
use super::{FieldValue, TeamBuilder};

/// (nombre, teléfono, email, dirección, carrera, etiquetas)
const SAMPLE_DATA: &[(&str, &str, &str, &str, &str, &[&str])] = &[
    (
        "Alex Yeoh",
        "87438807",
        "alexyeoh@example.com",
        "Blk 30 Geylang Street 29, #06-40",
        "Computer Science",
        &["friends"],
    ),
    (
        "Bernice Yu",
        "99272758",
        "berniceyu@example.com",
        "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        "Business Analytics",
        &["colleagues", "friends"],
    ),
    (
        "Charlotte Oliveiro",
        "93210283",
        "charlotte@example.com",
        "Blk 11 Ang Mo Kio Street 74, #11-04",
        "Information Systems",
        &["neighbours"],
    ),
    (
        "David Li",
        "91031282",
        "lidavid@example.com",
        "Blk 436 Serangoon Gardens Street 26, #16-43",
        "Computer Engineering",
        &["family"],
    ),
    (
        "Irfan Ibrahim",
        "92492021",
        "irfan@example.com",
        "Blk 47 Tampines Street 20, #17-35",
        "Mathematics",
        &["classmates"],
    ),
];

/// Personas de ejemplo para el primer arranque, cuando aún no hay fichero de datos.
pub fn sample_persons() -> Vec<Person> {
    SAMPLE_DATA
        .iter()
        .map(|(name, phone, email, address, major, tags)| {
            Person::new(
                Name::from_valid(name.to_string()),
                Some(Phone::from_valid(phone.to_string())),
                Some(Email::from_valid(email.to_string())),
                Address::from_valid(address.to_string()),
                Major::from_valid(major.to_string()),
                tags.iter()
                    .map(|t| Tag::from_valid(t.to_string()))
                    .collect::<BTreeSet<_>>(),
            )
        })
        .collect()
}

pub fn sample_team_builder() -> TeamBuilder {
    // Los nombres de ejemplo son distintos entre sí.
    TeamBuilder::with_persons(sample_persons()).unwrap_or_default()
}
