/// State management module
///
/// This module holds all session state:
/// - The static phone model catalog (catalog.rs)
/// - The uploaded image and selected model (upload.rs)
///
/// Nothing here persists beyond the running window.

pub mod catalog;
pub mod upload;

pub use catalog::ModelId;
pub use upload::{ReadOutcome, ReadTicket, UploadController, UploadState};
