use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::ViewMode;

#[derive(Parser, Debug)]
#[command(name = "uncut-sheet")]
#[command(
    author,
    version,
    about = "Render a 54-card uncut playing-card sheet and export front/back PNGs"
)]
pub struct Args {
    /// JSON profile with initial settings
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Set a control value, e.g. cardDpi=300 or color-hearts=#c00 (repeatable)
    #[arg(long = "set", value_name = "ID=VALUE", value_parser = parse_assignment)]
    pub settings: Vec<(String, String)>,

    /// Suit icon upload, e.g. hearts=heart.svg (repeatable)
    #[arg(long = "icon", value_name = "SUIT=PATH", value_parser = parse_assignment)]
    pub icons: Vec<(String, String)>,

    /// Face artwork upload, e.g. spades:K=king.png or joker:JOKER-1=joker.png (repeatable)
    #[arg(long = "face", value_name = "SLOT=PATH", value_parser = parse_assignment)]
    pub faces: Vec<(String, String)>,

    /// View shown in the preview
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// HTML page template; must contain an element with id="sheet"
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Write the HTML preview page to this path
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Directory receiving the exported PNGs
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip the PNG export
    #[arg(long)]
    pub no_export: bool,

    /// Run without a rasterizer (export reports it as unavailable)
    #[arg(long)]
    pub no_rasterizer: bool,

    /// Additional font directory for rasterization (repeatable)
    #[arg(long = "fonts-dir")]
    pub fonts_dirs: Vec<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Front,
    Back,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Front => ViewMode::Front,
            ViewArg::Back => ViewMode::Back,
        }
    }
}

impl Args {
    /// Check if the PNG export should run
    pub fn export_enabled(&self) -> bool {
        !self.no_export
    }
}

/// Parse a `key=value` argument; only the first `=` splits
pub fn parse_assignment(spec: &str) -> Result<(String, String), String> {
    let (key, value) = spec
        .split_once('=')
        .ok_or_else(|| format!("Expected KEY=VALUE: {}", spec))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Missing key: {}", spec));
    }

    Ok((key.to_string(), value.to_string()))
}
