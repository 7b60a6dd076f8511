use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Element with id=\"{0}\" not found in page template")]
    MissingMount(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid color specification: {0}")]
    InvalidColor(String),

    #[error("Invalid card slot: {0} (expected <suit>:<rank> or joker:JOKER-1/2)")]
    InvalidSlot(String),

    #[error("Unknown suit: {0}")]
    InvalidSuit(String),

    #[error("Invalid setting: {0}")]
    InvalidValue(String),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unrecognized image format: {0}")]
    UnknownFormat(PathBuf),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Rasterizer is not available")]
    RasterizerUnavailable,

    #[error("Rasterization failed for {sheet} sheet: {source}")]
    Rasterize {
        sheet: &'static str,
        #[source]
        source: RasterError,
    },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Failed to save {filename}: {source}")]
    Download {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Failed to parse sheet SVG: {0}")]
    Svg(String),

    #[error("Failed to allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },
}
