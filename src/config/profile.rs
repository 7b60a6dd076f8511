//! JSON deck profiles: initial settings read once at startup

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::input::upload::read_image;
use crate::model::{Action, CardIdentity, Color, SheetState, Suit};

use super::settings::SheetConfig;

/// Deck profile as stored on disk
///
/// ```json
/// {
///   "card_dpi": 300,
///   "back_card_color": "#112233",
///   "suit_colors": { "hearts": "#ff0000" },
///   "suit_icons": { "clubs": "icons/club.png" },
///   "faces": { "hearts:K": "art/king-hearts.png" }
/// }
/// ```
///
/// Image paths are relative to the profile file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(flatten)]
    pub sheet: SheetConfig,
    pub suit_colors: BTreeMap<String, Color>,
    pub suit_icons: BTreeMap<String, PathBuf>,
    pub faces: BTreeMap<String, PathBuf>,
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut profile: Profile =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        profile.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        if !profile.sheet.is_valid() {
            return Err(ConfigError::InvalidValue(format!(
                "{}: sizes, DPI and font scales must be positive and the center inset below 50%",
                path.display()
            )));
        }

        log::info!("Loaded profile {}", path.display());
        Ok(profile)
    }

    /// Build the initial state, reading every referenced image
    pub fn to_state(&self) -> Result<SheetState, ConfigError> {
        let mut state = SheetState::new(self.sheet.clone());

        for (suit, color) in &self.suit_colors {
            state = state.apply(Action::SetSuitColor(parse_suit(suit)?, *color));
        }

        for (suit, path) in &self.suit_icons {
            let icon = read_image(&self.base_dir.join(path))?;
            state = state.apply(Action::SetSuitIcon(parse_suit(suit)?, icon));
        }

        for (slot, path) in &self.faces {
            let identity: CardIdentity = slot.parse()?;
            let image = read_image(&self.base_dir.join(path))?;
            state = state.apply(Action::SetFaceArtwork(identity, image));
        }

        Ok(state)
    }
}

fn parse_suit(id: &str) -> Result<Suit, ConfigError> {
    Suit::from_id(id).ok_or_else(|| ConfigError::InvalidSuit(id.to_string()))
}
