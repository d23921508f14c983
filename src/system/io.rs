// src/system/io.rs

use std::io::{self, BufRead, Write};

/// Muestra `message` y lee una línea de la consola.
/// Devuelve `None` al llegar al final de la entrada (Ctrl-D).
pub fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?; // Asegurarse de que el mensaje se muestre antes de leer.

    let mut buffer = String::new();
    let read = io::stdin().lock().read_line(&mut buffer)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(buffer.trim_end_matches(['\n', '\r']).to_string()))
}
