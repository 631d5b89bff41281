use colored::Colorize;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
#[allow(dead_code)]
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Bad tokenURI text, unreadable input, decode/parse failure.
    Input(String),
    /// Metadata encoding failure.
    Encode(String),
    /// Resolution produced no metadata.
    NoMetadata(String),
    /// Message printed without the `error:` prefix, verbatim.
    ///
    /// The inspection flow emits fixed stderr lines
    /// ("No input provided." and friends) that carry no prefix.
    Plain(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Encode(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::NoMetadata(uri) => write!(
                f,
                "{} no metadata could be resolved from '{uri}'",
                "error:".red().bold(),
            ),
            CliError::Plain(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Input(format!("JSON parse error: {e}"))
    }
}

impl From<inscribe_codec::CodecError> for CliError {
    fn from(e: inscribe_codec::CodecError) -> Self {
        CliError::Input(e.to_string())
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    process::exit(EXIT_ERROR)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
