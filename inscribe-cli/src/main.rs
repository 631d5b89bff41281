mod cli;
mod commands;
mod error;
mod input;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use error::exit_with_error;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet  → always "off" (no logs, no matter what)
    //   --verbose → "info" level (useful diagnostics, RUST_LOG honoured)
    //   default  → "off" (clean terminal; decoded output only)
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli).await {
        exit_with_error(e);
    }
}

async fn run(cli: Cli) -> error::CliResult<()> {
    match cli.command {
        Commands::Inspect { uri, file } => commands::inspect::run(uri.as_deref(), file.as_deref()),

        Commands::Encode {
            name,
            description,
            image,
            image_file,
            external_url,
            created_by,
        } => commands::encode::run(commands::encode::EncodeOpts {
            name,
            description,
            image,
            image_file,
            external_url,
            created_by,
        }),

        Commands::Resolve { uri, gateway } => commands::resolve::run(&uri, &gateway).await,
    }
}
