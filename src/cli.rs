// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "TeamBuilder: Una libreta de contactos para formar equipos.", long_about = None)]
pub struct Cli {
    /// Archivo de datos a usar en lugar del configurado.
    #[arg(long, value_name = "RUTA")]
    pub data: Option<PathBuf>,

    /// Un comando a ejecutar sin entrar en modo interactivo (ej: `add n/Bob a/Calle 1 m/CS`).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
