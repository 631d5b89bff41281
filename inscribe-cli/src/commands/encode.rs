//! Build a mintable tokenURI from metadata fields.
//!
//! The CLI counterpart of the web mint helper: assemble the metadata
//! record, embed an image file if asked, stamp the creation time, and
//! print the `data:application/json;base64,...` string ready to pass to
//! `safeMint(to, tokenURI)`.

use crate::error::{CliError, CliResult};
use inscribe_codec::image::{encode_image_to_data_uri, mime_for_path};
use inscribe_codec::Metadata;
use std::path::PathBuf;

pub struct EncodeOpts {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub image_file: Option<PathBuf>,
    pub external_url: Option<String>,
    pub created_by: Option<String>,
}

pub fn run(opts: EncodeOpts) -> CliResult<()> {
    let image = match (&opts.image_file, &opts.image) {
        (Some(path), _) => {
            let mime = mime_for_path(path).ok_or_else(|| {
                CliError::Encode(format!(
                    "unrecognized image file extension for {}",
                    path.display()
                ))
            })?;
            let bytes = std::fs::read(path).map_err(|e| {
                CliError::Encode(format!("failed to read {}: {e}", path.display()))
            })?;
            Some(encode_image_to_data_uri(mime, &bytes))
        }
        (None, Some(url)) if !url.trim().is_empty() => Some(url.trim().to_string()),
        _ => None,
    };

    let mut metadata = Metadata::new(opts.name, opts.description).stamp_now();
    metadata.image = image;
    metadata.external_url = opts.external_url.filter(|u| !u.trim().is_empty());
    metadata.created_by = opts.created_by;

    let token_uri = metadata
        .to_token_uri()
        .map_err(|e| CliError::Encode(e.to_string()))?;
    println!("{token_uri}");
    Ok(())
}
