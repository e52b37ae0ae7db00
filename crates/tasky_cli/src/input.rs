use std::io::BufRead;
use tasky_core::error::AppError;

/// Joins the description words, or reads a single line from `reader` when
/// none were given.
pub fn read_description<R: BufRead>(words: &[String], mut reader: R) -> Result<String, AppError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|err| AppError::io(err.to_string()))?;

    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Err(AppError::EmptyDescription);
    }

    Ok(line.to_string())
}
