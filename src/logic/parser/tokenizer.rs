// src/logic/parser/tokenizer.rs

use std::collections::HashMap;

use super::cli_syntax::{FieldRule, Prefix, Resolution};

/// Resultado de tokenizar una línea: el preámbulo y los valores de cada prefijo.
#[derive(Debug, Clone, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Texto anterior al primer prefijo, ya recortado.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Si el prefijo apareció al menos una vez, aunque sea sin valor.
    pub fn contains(&self, prefix: &Prefix) -> bool {
        self.values.contains_key(prefix)
    }

    /// Todos los valores del prefijo, en orden de aparición.
    pub fn get_all_values(&self, prefix: &Prefix) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// El último valor del prefijo.
    #[cfg(test)]
    pub fn get_value(&self, prefix: &Prefix) -> Option<&str> {
        self.get_all_values(prefix).last().map(String::as_str)
    }

    /// Aplica la política de resolución del campo: la última aparición o todas.
    pub fn resolve(&self, rule: &FieldRule) -> &[String] {
        let all = self.get_all_values(&rule.prefix);
        match rule.resolution {
            Resolution::Last => all.last().map(std::slice::from_ref).unwrap_or(&[]),
            Resolution::CollectAll => all,
        }
    }

    fn push(&mut self, prefix: Prefix, value: &str) {
        self.values
            .entry(prefix)
            .or_default()
            .push(value.trim().to_string());
    }
}

/// Divide `args` en preámbulo y valores por prefijo. No valida nada.
///
/// Un prefijo solo se reconoce al inicio de la cadena o tras un espacio en blanco,
/// así `a/Calle n/3` abre un nombre, pero `a/Callen/3` no.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let positions = find_prefix_positions(args, prefixes);
    log::debug!("Prefijos encontrados en '{}': {:?}", args, positions);

    let mut multimap = ArgumentMultimap::default();
    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    multimap.preamble = args[..preamble_end].trim().to_string();

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        multimap.push(*prefix, &args[value_start..value_end]);
    }

    multimap
}

/// Posiciones (en bytes) de cada prefijo reconocido, en orden creciente.
fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions = Vec::new();
    let mut at_boundary = true;

    for (index, c) in args.char_indices() {
        if at_boundary {
            if let Some(prefix) = prefixes.iter().find(|p| args[index..].starts_with(p.as_str())) {
                positions.push((index, *prefix));
            }
        }
        at_boundary = c.is_whitespace();
    }

    positions
}
