use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use uncut_sheet::cli::Args;
use uncut_sheet::config::Profile;
use uncut_sheet::export::{ConsoleNotifier, DirectorySink, ExportCoordinator, Rasterizer, SvgRasterizer};
use uncut_sheet::input::{apply_setting, apply_upload, Control, UploadTarget};
use uncut_sheet::model::SheetState;
use uncut_sheet::render::html::DEFAULT_TEMPLATE;
use uncut_sheet::render::PageTemplate;
use uncut_sheet::sheet::Sheet;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Locate the mount point before anything else
    let template_source = match &args.template {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };
    let template = match PageTemplate::parse(&template_source) {
        Ok(template) => template,
        Err(e) => {
            log::error!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let state = match &args.profile {
        Some(path) => load_profile(path)?,
        None => SheetState::default(),
    };
    let mut sheet = Sheet::new(state);

    apply_inputs(&args, &mut sheet)?;

    if let Some(view) = args.view {
        sheet.set_view(view.into());
    }

    if let Some(ref preview_path) = args.preview {
        fs::write(preview_path, template.render(&sheet))
            .with_context(|| format!("Failed to write preview: {}", preview_path.display()))?;
        println!("Wrote preview to {}", preview_path.display());
    }

    if args.export_enabled() {
        let rasterizer = if args.no_rasterizer {
            None
        } else {
            SvgRasterizer::load(&args.fonts_dirs)
        };
        let coordinator = ExportCoordinator::new(rasterizer.as_ref().map(|r| r as &dyn Rasterizer));
        let mut sink = DirectorySink::new(&args.output_dir);

        let report = coordinator
            .export(&mut sheet, &mut sink, &mut ConsoleNotifier)
            .with_context(|| "Failed to export sheet")?;

        println!(
            "Successfully wrote {} to {}",
            report.files.join(" and "),
            args.output_dir.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn load_profile(path: &Path) -> Result<SheetState> {
    let profile = Profile::load(path)?;
    let state = profile
        .to_state()
        .with_context(|| format!("Failed to apply profile: {}", path.display()))?;
    Ok(state)
}

/// Feed `--set`, `--icon` and `--face` through the input bindings
fn apply_inputs(args: &Args, sheet: &mut Sheet) -> Result<()> {
    for (id, value) in &args.settings {
        let control: Control = id.parse()?;
        apply_setting(sheet, control, value);
    }

    for (slot, path) in &args.icons {
        let target = UploadTarget::suit_icon(slot)?;
        if let Err(e) = apply_upload(sheet, target, Path::new(path)) {
            log::warn!("Skipping --icon {}={}: {}", slot, path, e);
        }
    }

    for (slot, path) in &args.faces {
        let target = UploadTarget::face_art(slot)?;
        if let Err(e) = apply_upload(sheet, target, Path::new(path)) {
            log::warn!("Skipping --face {}={}: {}", slot, path, e);
        }
    }

    Ok(())
}
