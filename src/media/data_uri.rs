//! Base64 data URIs for loaded images
//!
//! The preview holds the uploaded file as `data:<mime>;base64,<payload>`.
//! No validation is done on the bytes: unrecognised content is still
//! encoded, just with a generic MIME type.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// MIME type used when neither the content nor the extension is recognised
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Encoded copy of a file's bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mime: String,
    payload: String,
}

impl DataUri {
    /// Encode `bytes` under an explicit MIME type
    pub fn new(mime: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime: mime.into(),
            payload: STANDARD.encode(bytes),
        }
    }

    /// Encode `bytes`, detecting the MIME type from the content first and
    /// the file extension of `path_hint` second
    pub fn from_bytes(bytes: &[u8], path_hint: Option<&Path>) -> Self {
        Self::new(sniff_mime(bytes, path_hint), bytes)
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Recover the original bytes
    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.payload)
            .map_err(|e| Error::InvalidDataUri(e.to_string()))
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, self.payload)
    }
}

fn sniff_mime(bytes: &[u8], path_hint: Option<&Path>) -> &'static str {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type();
    }

    path_hint
        .and_then(|path| ImageFormat::from_path(path).ok())
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}
