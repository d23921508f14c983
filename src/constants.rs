// src/constants.rs

/// El nombre del directorio de la aplicación (dentro de los directorios de datos y de configuración del sistema).
pub const APP_DIR: &str = "teambuilder";

/// El nombre del archivo donde se guarda la lista de personas.
pub const DATA_FILENAME: &str = "teambuilder.toml";

/// El nombre del archivo de configuración opcional.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Nivel de log cuando ni `RUST_LOG` ni la configuración indican otro.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// El texto que se muestra al pedir un comando en modo interactivo.
pub const PROMPT: &str = "> ";
