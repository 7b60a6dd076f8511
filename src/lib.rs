pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod model;
pub mod render;
pub mod sheet;

pub use config::{Profile, SheetConfig, ViewMode};
pub use error::{ConfigError, ExportError, RasterError, StartupError, UploadError};
pub use export::{ExportCoordinator, ExportReport, Rasterizer, SvgRasterizer};
pub use input::{apply_setting, apply_upload, Control, UploadTarget};
pub use model::{Action, CardIdentity, SheetState};
pub use render::PageTemplate;
pub use sheet::Sheet;

/// High-level API for rendering the preview page.
///
/// Builds the sheet from `state` and injects it into `template`, which
/// must contain an element with `id="sheet"`.
///
/// # Example
///
/// ```no_run
/// use uncut_sheet::{render_preview, Action, SheetState, ViewMode};
///
/// let state = SheetState::default()
///     .apply(Action::SetCardDpi(300))
///     .apply(Action::SetView(ViewMode::Back));
/// let template = std::fs::read_to_string("page.html").unwrap();
///
/// let html = render_preview(state, &template).unwrap();
/// std::fs::write("preview.html", html).unwrap();
/// ```
pub fn render_preview(state: SheetState, template: &str) -> Result<String, StartupError> {
    let template = PageTemplate::parse(template)?;
    let sheet = Sheet::new(state);
    Ok(template.render(&sheet))
}
