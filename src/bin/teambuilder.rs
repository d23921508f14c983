// src/bin/teambuilder.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use teambuilder::cli::Cli;
use teambuilder::config::{self, AppConfig};
use teambuilder::constants::{DEFAULT_LOG_LEVEL, PROMPT};
use teambuilder::logic::{self, Command, CommandResult};
use teambuilder::model::Model;
use teambuilder::storage;
use teambuilder::system::io;

/// El punto de entrada principal de la aplicación.
fn main() {
    // Parsear los argumentos de la línea de comandos.
    let cli = Cli::parse();

    // La configuración se lee antes del logger porque puede fijar su nivel.
    let app_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Aviso: se ignora la configuración ({}).", e);
        AppConfig::default()
    });
    init_logger(&app_config);

    if let Err(e) = run_cli(cli, app_config) {
        eprintln!("\nError: {:#}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` tiene prioridad sobre el `log_level` de `config.toml`.
fn init_logger(app_config: &AppConfig) {
    let level = app_config
        .log_level
        .as_deref()
        .unwrap_or(DEFAULT_LOG_LEVEL);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run_cli(cli: Cli, app_config: AppConfig) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let data_path = app_config
        .resolve_data_path(cli.data)
        .context("No se pudo determinar la ruta del archivo de datos.")?;
    let team_builder = storage::read_or_sample(&data_path)
        .with_context(|| format!("No se pudo cargar el archivo de datos {}", data_path.display()))?;
    let mut model = Model::new(team_builder);

    if cli.command.is_empty() {
        run_interactive(&mut model, &data_path)
    } else {
        // Modo de un solo comando: `teambuilder add n/Bob ...`
        let line = cli.command.join(" ");
        handle_line(&mut model, &data_path, &line)?;
        Ok(())
    }
}

/// Bucle interactivo: lee comandos hasta `exit` o el final de la entrada.
fn run_interactive(model: &mut Model, data_path: &Path) -> Result<()> {
    println!("Bienvenido a TeamBuilder. Escribe 'help' para ver los comandos disponibles.");

    while let Some(line) = io::prompt(PROMPT)? {
        match handle_line(model, data_path, &line) {
            Ok(CommandResult { exit: true, .. }) => break,
            Ok(_) => {}
            // Los errores de usuario se muestran tal cual y el bucle continúa.
            Err(e) => println!("{:#}", e),
        }
    }

    Ok(())
}

/// Parsea y ejecuta una línea, y muestra su resultado.
/// Guarda la lista si el comando la modificó.
fn handle_line(model: &mut Model, data_path: &Path, line: &str) -> Result<CommandResult> {
    let command = logic::parse_command(line)?;
    let mutates = command.mutates();
    let shows_list = matches!(command, Command::List | Command::Find(_));

    let result = command.execute(model)?;

    if mutates {
        storage::save_team_builder(model.team_builder(), data_path)
            .with_context(|| format!("No se pudo guardar en {}", data_path.display()))?;
    }
    println!("{}", result.feedback);
    if shows_list {
        display_persons(model);
    }

    Ok(result)
}

/// Muestra la lista visible, numerada desde 1 como la esperan `edit` y `delete`.
fn display_persons(model: &Model) {
    let persons = model.filtered_persons();
    if persons.is_empty() {
        println!("  (lista vacía)");
        return;
    }
    for (i, person) in persons.iter().enumerate() {
        println!("  {}. {}", i + 1, person);
    }
}
