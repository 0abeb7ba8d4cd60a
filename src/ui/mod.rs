/// User interface building blocks
///
/// - `panels.rs` - upload, model and preview cards
/// - `phone_frame.rs` - canvas overlay that draws the phone outline

pub mod panels;
pub mod phone_frame;

pub use phone_frame::PhoneFrame;
