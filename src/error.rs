use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error performing IO")]
    Io(#[from] std::io::Error),
    #[error("Error reading optimized image descriptor {path}")]
    Descriptor {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid attribute {input:?}, expected name=value")]
    InvalidAttribute { input: String },
    #[error("Invalid art direction {input:?}, expected media=path")]
    InvalidArtDirection { input: String },
    #[error("Unknown tag kind {input:?}, expected picture, img or link-preload")]
    UnknownTagKind { input: String },
}
