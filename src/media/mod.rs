/// Image ingestion module
///
/// This module handles:
/// - Showing the native file picker and tracking its selection (picker.rs)
/// - Reading picked files into base64 data URIs (data_uri.rs)

pub mod data_uri;
pub mod picker;

pub use data_uri::DataUri;
