use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inscribe", about = "On-chain inscription tokenURI tool", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode and pretty-print an embedded tokenURI (and its SVG image)
    Inspect {
        /// tokenURI text; reads one line from stdin when omitted
        uri: Option<String>,

        /// Read the tokenURI from a file instead
        #[arg(short = 'f', long = "file", conflicts_with = "uri")]
        file: Option<PathBuf>,
    },

    /// Build a data:application/json;base64 tokenURI from metadata fields
    Encode {
        /// Human title
        #[arg(long)]
        name: String,

        /// Description text
        #[arg(long)]
        description: String,

        /// Image URL or data URI to reference as-is
        #[arg(long, conflicts_with = "image_file")]
        image: Option<String>,

        /// Image file to embed as a base64 data URI
        #[arg(long)]
        image_file: Option<PathBuf>,

        /// External link
        #[arg(long)]
        external_url: Option<String>,

        /// Minting wallet address recorded as created_by
        #[arg(long)]
        created_by: Option<String>,
    },

    /// Resolve any tokenURI (embedded, ipfs://, or https://) to metadata
    Resolve {
        /// tokenURI text
        uri: String,

        /// IPFS gateway base used for ipfs:// rewrites
        #[arg(long, default_value = inscribe_resolver::DEFAULT_IPFS_GATEWAY)]
        gateway: String,
    },
}
