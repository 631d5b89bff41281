//! Resolve any tokenURI to metadata and pretty-print it.

use crate::error::{CliError, CliResult};
use crate::output;
use inscribe_resolver::Resolver;

pub async fn run(uri: &str, gateway: &str) -> CliResult<()> {
    let resolver = Resolver::new(gateway);
    match resolver.resolve(uri).await {
        Some(metadata) => {
            println!("{}", output::pretty_json(&metadata));
            Ok(())
        }
        None => Err(CliError::NoMetadata(uri.to_string())),
    }
}
