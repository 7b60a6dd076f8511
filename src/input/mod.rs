//! Input bindings: control changes and artwork uploads

pub mod bindings;
pub mod upload;

pub use bindings::{apply_setting, apply_upload, Control, UploadTarget};
pub use upload::read_image;
