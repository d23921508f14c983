// src/config.rs

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{APP_DIR, CONFIG_FILENAME, DATA_FILENAME};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No se pudo encontrar el directorio de {0} del sistema.")]
    SystemDirNotFound(&'static str),
    #[error("Error de Ficheros: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error al parsear TOML en '{path}': {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

type ConfigResult<T> = Result<T, ConfigError>;

/// Contenido de `config.toml`. Todas las claves son opcionales.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Ruta del archivo de datos. Si falta, se usa la ruta por defecto.
    pub data_file: Option<PathBuf>,
    /// Nivel de log (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Decide qué archivo de datos usar: el de la CLI, el configurado o el por defecto.
    pub fn resolve_data_path(&self, cli_override: Option<PathBuf>) -> ConfigResult<PathBuf> {
        match cli_override.or_else(|| self.data_file.clone()) {
            Some(path) => Ok(path),
            None => get_default_data_path(),
        }
    }
}

/// Devuelve la ruta al directorio de configuración de TeamBuilder.
pub fn get_config_dir() -> ConfigResult<PathBuf> {
    let config_path = dirs::config_dir()
        .ok_or(ConfigError::SystemDirNotFound("configuración"))?
        .join(APP_DIR);
    Ok(config_path)
}

/// Devuelve la ruta por defecto al archivo de datos.
pub fn get_default_data_path() -> ConfigResult<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or(ConfigError::SystemDirNotFound("datos"))?
        .join(APP_DIR);
    Ok(data_dir.join(DATA_FILENAME))
}

/// Carga `config.toml` desde el directorio de configuración del sistema.
pub fn load_config() -> ConfigResult<AppConfig> {
    load_config_from(&get_config_dir()?.join(CONFIG_FILENAME))
}

/// Carga la configuración de `path`. Si el archivo no existe, devuelve la configuración por defecto.
pub fn load_config_from(path: &Path) -> ConfigResult<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        assert_eq!(load_config_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_keys_and_rejects_bad_toml() {
        let dir = tempdir().expect("tempdir");

        let good = dir.path().join("good.toml");
        fs::write(&good, "data_file = \"/tmp/personas.toml\"\nlog_level = \"debug\"\n").unwrap();
        let config = load_config_from(&good).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/personas.toml")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "data_file = [").unwrap();
        assert!(matches!(
            load_config_from(&bad),
            Err(ConfigError::TomlParse { .. })
        ));
    }

    #[test]
    fn cli_override_wins() {
        let config = AppConfig {
            data_file: Some(PathBuf::from("configurado.toml")),
            log_level: None,
        };
        let chosen = config
            .resolve_data_path(Some(PathBuf::from("cli.toml")))
            .unwrap();
        assert_eq!(chosen, PathBuf::from("cli.toml"));
        assert_eq!(
            config.resolve_data_path(None).unwrap(),
            PathBuf::from("configurado.toml")
        );
    }
}
