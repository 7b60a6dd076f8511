//! Two-pass PNG export of the sheet
//!
//! The sheet is forced into a 6x9 grid with no gap, rasterized once per
//! view and handed to a [`DownloadSink`]. The prior view and layout are
//! restored on every exit path by [`RestoreGuard`].

pub mod download;
pub mod notice;
pub mod raster;

use std::ops::{Deref, DerefMut};

pub use download::{DirectorySink, DownloadSink};
pub use notice::{ConsoleNotifier, Notifier, RecordingNotifier};
pub use raster::{RasterOptions, Rasterizer, SvgRasterizer};

use crate::config::ViewMode;
use crate::error::ExportError;
use crate::sheet::{LayoutStyle, ScrollOffset, Sheet};

pub const FRONT_FILENAME: &str = "deck-front-6x9.png";
pub const BACK_FILENAME: &str = "deck-back-6x9.png";

pub const UNAVAILABLE_NOTICE: &str =
    "Rasterizer is not loaded. Check the font setup or drop --no-rasterizer.";
pub const FAILURE_NOTICE: &str = "Export failed. Check the log for details.";

/// Files handed to the sink, in download order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub files: Vec<String>,
}

/// Captures view and layout on creation and puts them back on drop
pub struct RestoreGuard<'a> {
    sheet: &'a mut Sheet,
    view: ViewMode,
    layout: LayoutStyle,
}

impl<'a> RestoreGuard<'a> {
    pub fn new(sheet: &'a mut Sheet) -> Self {
        let view = sheet.view();
        let layout = sheet.layout();
        Self { sheet, view, layout }
    }
}

impl Deref for RestoreGuard<'_> {
    type Target = Sheet;

    fn deref(&self) -> &Sheet {
        &*self.sheet
    }
}

impl DerefMut for RestoreGuard<'_> {
    fn deref_mut(&mut self) -> &mut Sheet {
        &mut *self.sheet
    }
}

impl Drop for RestoreGuard<'_> {
    fn drop(&mut self) {
        // set_view re-renders even when the view is unchanged
        self.sheet.set_view(self.view);
        self.sheet.set_layout(self.layout);
        log::debug!(
            "[export] Restored {} view and {} layout",
            self.view.as_str(),
            self.layout.css()
        );
    }
}

/// Drives the front and back export passes
pub struct ExportCoordinator<'r> {
    rasterizer: Option<&'r dyn Rasterizer>,
    options: RasterOptions,
}

impl<'r> ExportCoordinator<'r> {
    /// `None` means no rasterizer is loaded; every export then aborts
    pub fn new(rasterizer: Option<&'r dyn Rasterizer>) -> Self {
        Self {
            rasterizer,
            options: RasterOptions::export(),
        }
    }

    pub fn options(&self) -> RasterOptions {
        self.options
    }

    pub fn export(
        &self,
        sheet: &mut Sheet,
        sink: &mut dyn DownloadSink,
        notifier: &mut dyn Notifier,
    ) -> Result<ExportReport, ExportError> {
        let Some(rasterizer) = self.rasterizer else {
            log::warn!("[export] No rasterizer loaded; export aborted");
            notifier.notify(UNAVAILABLE_NOTICE);
            return Err(ExportError::RasterizerUnavailable);
        };

        let result = {
            let mut guard = RestoreGuard::new(sheet);
            guard.set_scroll(ScrollOffset::default());
            guard.set_layout(LayoutStyle::export_grid());
            run_passes(rasterizer, &self.options, &mut guard, sink)
        };

        match result {
            Ok(report) => {
                log::info!("[export] Exported {}", report.files.join(", "));
                Ok(report)
            }
            Err(e) => {
                log::error!("[export] Error during export: {}", e);
                notifier.notify(FAILURE_NOTICE);
                Err(e)
            }
        }
    }
}

/// Front then back; the back pass starts only after the front file is saved
fn run_passes(
    rasterizer: &dyn Rasterizer,
    options: &RasterOptions,
    sheet: &mut Sheet,
    sink: &mut dyn DownloadSink,
) -> Result<ExportReport, ExportError> {
    let mut files = Vec::with_capacity(2);

    for (view, filename) in [
        (ViewMode::Front, FRONT_FILENAME),
        (ViewMode::Back, BACK_FILENAME),
    ] {
        sheet.set_view(view);

        let pixmap = rasterizer
            .rasterize(sheet, options)
            .map_err(|source| ExportError::Rasterize {
                sheet: view.as_str(),
                source,
            })?;
        let png = pixmap
            .encode_png()
            .map_err(|e| ExportError::Encode(e.to_string()))?;

        sink.save(filename, &png)
            .map_err(|source| ExportError::Download {
                filename: filename.to_string(),
                source,
            })?;
        files.push(filename.to_string());
    }

    Ok(ExportReport { files })
}
