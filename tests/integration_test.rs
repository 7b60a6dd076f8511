use std::cell::Cell;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;
use tiny_skia::Pixmap;

use uncut_sheet::config::{Profile, ViewMode};
use uncut_sheet::error::{ExportError, RasterError};
use uncut_sheet::export::{
    DirectorySink, DownloadSink, ExportCoordinator, RasterOptions, Rasterizer, RecordingNotifier,
    BACK_FILENAME, FAILURE_NOTICE, FRONT_FILENAME,
};
use uncut_sheet::input::{apply_setting, apply_upload, Control, UploadTarget};
use uncut_sheet::model::{CardIdentity, Rank, SheetState, Suit};
use uncut_sheet::render::element::{CardFace, CenterContent, FrameContent};
use uncut_sheet::render::html::DEFAULT_TEMPLATE;
use uncut_sheet::render::PageTemplate;
use uncut_sheet::sheet::{LayoutStyle, Sheet};
use uncut_sheet::{render_preview, StartupError};

const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><circle cx="5" cy="5" r="4" fill="#c00"/></svg>"##;

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_uncut-sheet"))
}

/// Blank 4x4 surface; optionally fails on the nth call
struct BlankRasterizer {
    calls: Cell<usize>,
    fail_at: Option<usize>,
}

impl BlankRasterizer {
    fn new(fail_at: Option<usize>) -> Self {
        Self {
            calls: Cell::new(0),
            fail_at,
        }
    }
}

impl Rasterizer for BlankRasterizer {
    fn rasterize(&self, _sheet: &Sheet, _options: &RasterOptions) -> Result<Pixmap, RasterError> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if self.fail_at == Some(call) {
            return Err(RasterError::Svg("unsupported element".to_string()));
        }
        Pixmap::new(4, 4).ok_or(RasterError::Surface {
            width: 4,
            height: 4,
        })
    }
}

#[test]
fn test_profile_drives_initial_sheet() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("art")).unwrap();
    fs::write(temp.path().join("art/club.svg"), ICON_SVG).unwrap();
    fs::write(temp.path().join("art/king.svg"), ICON_SVG).unwrap();

    let profile_path = temp.path().join("deck.json");
    fs::write(
        &profile_path,
        r##"{
            "card_dpi": 300,
            "back_card_color": "#112233",
            "suit_colors": { "hearts": "#ff0000" },
            "suit_icons": { "clubs": "art/club.svg" },
            "faces": { "spades:K": "art/king.svg" }
        }"##,
    )
    .unwrap();

    let state = Profile::load(&profile_path).unwrap().to_state().unwrap();
    let sheet = Sheet::new(state);

    assert_eq!(sheet.slots().len(), 54);
    assert_eq!(sheet.state().config.card_dpi, 300);
    assert_eq!(sheet.style().card_back_bg.to_hex(), "#112233");
    assert_eq!(sheet.style().suit_color(Suit::Hearts).to_hex(), "#ff0000");

    let king = sheet
        .card(CardIdentity::standard(Suit::Spades, Rank::King))
        .unwrap();
    let CardFace::Front {
        center: CenterContent::Frame(frame),
        ..
    } = &king.face
    else {
        panic!("king should have a face frame");
    };
    assert!(matches!(frame.content, FrameContent::Artwork { .. }));

    let two_of_clubs = sheet
        .card(CardIdentity::standard(Suit::Clubs, Rank::Two))
        .unwrap();
    assert_eq!(two_of_clubs.images().len(), 4);
}

#[test]
fn test_bindings_then_export_to_directory() {
    let temp = TempDir::new().unwrap();
    let icon = temp.path().join("heart.svg");
    fs::write(&icon, ICON_SVG).unwrap();

    let mut sheet = Sheet::new(SheetState::default());
    apply_setting(&mut sheet, Control::CardDpi, "96");
    apply_setting(&mut sheet, Control::BackCardColor, "#abc");
    apply_setting(&mut sheet, Control::CardWidthMm, "not a number");
    apply_upload(&mut sheet, UploadTarget::SuitIcon(Suit::Hearts), &icon).unwrap();
    assert_eq!(sheet.render_passes(), 4);

    let rasterizer = BlankRasterizer::new(None);
    let coordinator = ExportCoordinator::new(Some(&rasterizer));
    let out = temp.path().join("out");
    let mut sink = DirectorySink::new(&out);
    let mut notifier = RecordingNotifier::default();

    let report = coordinator
        .export(&mut sheet, &mut sink, &mut notifier)
        .unwrap();

    assert_eq!(report.files, vec![FRONT_FILENAME, BACK_FILENAME]);
    for name in [FRONT_FILENAME, BACK_FILENAME] {
        let bytes = fs::read(out.join(name)).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }
    assert_eq!(sheet.view(), ViewMode::Front);
    assert_eq!(sheet.layout(), LayoutStyle::default());
    assert_eq!(sheet.state().config.card_width_mm, 63.0);
}

#[test]
fn test_failed_front_pass_restores_back_view() {
    struct NullSink;
    impl DownloadSink for NullSink {
        fn save(&mut self, _filename: &str, _png: &[u8]) -> io::Result<()> {
            Ok(())
        }
    }

    let mut sheet = Sheet::new(SheetState::default());
    sheet.set_view(ViewMode::Back);
    let rasterizer = BlankRasterizer::new(Some(0));
    let mut notifier = RecordingNotifier::default();

    let err = ExportCoordinator::new(Some(&rasterizer))
        .export(&mut sheet, &mut NullSink, &mut notifier)
        .unwrap_err();

    assert!(matches!(err, ExportError::Rasterize { sheet: "front", .. }));
    assert_eq!(rasterizer.calls.get(), 1);
    assert_eq!(notifier.messages, vec![FAILURE_NOTICE]);
    assert_eq!(sheet.view(), ViewMode::Back);
    assert!(sheet.cards().all(|c| c.is_back()));
    assert_eq!(sheet.layout(), LayoutStyle::default());
}

#[test]
fn test_preview_page() {
    let state = SheetState::default();
    let html = render_preview(state.clone(), DEFAULT_TEMPLATE).unwrap();
    assert_eq!(html.matches(r#"<div class="card" data-suit"#).count(), 54);
    assert!(html.contains("--suit-color-hearts: #d32f2f;"));

    let err = render_preview(state, "<html><body></body></html>").unwrap_err();
    assert!(matches!(err, StartupError::MissingMount(_)));
    assert!(PageTemplate::parse("<main id=\"sheet\"></main>").is_ok());
}

#[test]
fn test_cli_writes_preview_and_skips_export() {
    let temp = TempDir::new().unwrap();
    let preview = temp.path().join("preview.html");

    let status = Command::new(binary())
        .args([
            "--set",
            "backCardColor=#123456",
            "--view",
            "back",
            "--no-export",
            "--preview",
            preview.to_str().unwrap(),
        ])
        .status()
        .expect("Failed to run uncut-sheet");
    assert!(status.success());

    let html = fs::read_to_string(&preview).unwrap();
    assert!(html.contains("--card-back-bg: #123456;"));
    assert_eq!(html.matches(r#"<div class="card-back"></div>"#).count(), 54);
    assert!(!temp.path().join(FRONT_FILENAME).exists());
}

#[test]
fn test_cli_missing_mount_is_fatal() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("page.html");
    fs::write(
        &template,
        "<html><body><div data-id=\"sheet\"></div><!-- id=\"sheet\" --></body></html>",
    )
    .unwrap();
    let preview = temp.path().join("preview.html");

    let output = Command::new(binary())
        .args([
            "--template",
            template.to_str().unwrap(),
            "--preview",
            preview.to_str().unwrap(),
            "-o",
            temp.path().to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run uncut-sheet");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!preview.exists());
    assert!(!temp.path().join(FRONT_FILENAME).exists());
}

#[test]
fn test_cli_without_rasterizer_reports_unavailable() {
    let temp = TempDir::new().unwrap();

    let output = Command::new(binary())
        .args(["--no-rasterizer", "-o", temp.path().to_str().unwrap()])
        .output()
        .expect("Failed to run uncut-sheet");

    assert!(!output.status.success());
    assert!(!temp.path().join(FRONT_FILENAME).exists());
    assert!(!temp.path().join(BACK_FILENAME).exists());
}

#[test]
fn test_cli_skips_unreadable_upload_with_warning() {
    let temp = TempDir::new().unwrap();
    let preview = temp.path().join("preview.html");
    let missing = temp.path().join("missing.svg");
    let icon_arg = format!("hearts={}", missing.display());

    let output = Command::new(binary())
        .args([
            "--icon",
            icon_arg.as_str(),
            "--no-export",
            "--preview",
            preview.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run uncut-sheet");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skipping --icon hearts="), "{}", stderr);

    let html = fs::read_to_string(&preview).unwrap();
    assert!(!html.contains("<img"));
}
