use crate::error::{CliError, CliResult};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Where the tokenURI text comes from.
pub enum InputSource {
    /// From the positional argument.
    Arg(String),
    /// From a file on disk.
    File(PathBuf),
    /// From stdin (one line, piped or typed).
    Stdin,
}

/// Resolve the input source with priority: positional arg > `-f` file > stdin.
pub fn resolve_input(uri: Option<&str>, file: Option<&Path>) -> InputSource {
    if let Some(u) = uri {
        return InputSource::Arg(u.to_string());
    }
    if let Some(f) = file {
        return InputSource::File(f.to_path_buf());
    }
    InputSource::Stdin
}

/// Read the tokenURI text from the resolved source.
///
/// Stdin reads a single line; a file read takes the whole content.
/// Empty input terminates with `No input provided.` and exit code 1.
pub fn read_token_uri(source: &InputSource) -> CliResult<String> {
    let raw = match source {
        InputSource::Arg(s) => s.clone(),
        InputSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::Input(format!("failed to read {}: {e}", path.display())))?,
        InputSource::Stdin => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };

    let uri = strip_quotes(raw.trim());
    if uri.is_empty() {
        return Err(CliError::Plain("No input provided.".to_string()));
    }
    Ok(uri.to_string())
}

/// Strip one pair of surrounding double quotes, if present.
///
/// tokenURIs are often pasted straight out of JSON-RPC output where they
/// arrive quote-wrapped.
pub fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        s[1..s.len() - 1].trim()
    } else {
        s
    }
}
