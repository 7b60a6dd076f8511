pub mod defaults;
pub mod profile;
pub mod settings;

pub use profile::Profile;
pub use settings::{FaceFrame, FontSelection, FontSizes, SheetConfig, ViewMode};
