use serde::{Deserialize, Serialize};

use crate::model::Color;

use super::defaults::*;

/// Which side of the deck the sheet shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Front,
    Back,
}

impl ViewMode {
    /// View-tab semantics: `back` selects the back, anything else the front
    pub fn from_tab(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("back") {
            ViewMode::Back
        } else {
            ViewMode::Front
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Front => "front",
            ViewMode::Back => "back",
        }
    }
}

/// Preset family plus an optional free-text override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSelection {
    pub preset: String,
    pub custom: String,
}

impl Default for FontSelection {
    fn default() -> Self {
        Self {
            preset: DEFAULT_FONT_FAMILY.to_string(),
            custom: String::new(),
        }
    }
}

impl FontSelection {
    /// Effective family: trimmed custom text when present, else the preset
    pub fn family(&self) -> &str {
        let custom = self.custom.trim();
        if custom.is_empty() {
            &self.preset
        } else {
            custom
        }
    }
}

/// Font scales (multiplied by the card scale when rendered)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub corner_rank: f32,
    pub center_ace: f32,
    pub pip: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            corner_rank: DEFAULT_CORNER_RANK_SIZE,
            center_ace: DEFAULT_CENTER_ACE_SIZE,
            pip: DEFAULT_PIP_SIZE,
        }
    }
}

/// Frame drawn around face-card and joker artwork, in px
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceFrame {
    pub margin_px: u32,
    pub radius_px: u32,
}

/// Global scalar settings for the sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub font: FontSelection,
    pub front_card_color: Color,
    pub back_card_color: Color,
    pub face_frame: FaceFrame,
    pub card_width_mm: f32,
    pub card_dpi: u32,
    pub font_sizes: FontSizes,
    pub center_inset_percent: f32,
    pub view: ViewMode,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            font: FontSelection::default(),
            front_card_color: DEFAULT_FRONT_CARD_COLOR,
            back_card_color: DEFAULT_BACK_CARD_COLOR,
            face_frame: FaceFrame::default(),
            card_width_mm: DEFAULT_CARD_WIDTH_MM,
            card_dpi: DEFAULT_CARD_DPI,
            font_sizes: FontSizes::default(),
            center_inset_percent: DEFAULT_CENTER_INSET_PERCENT,
            view: ViewMode::Front,
        }
    }
}

impl SheetConfig {
    /// Card width in px: `mm / 25.4 * dpi`
    pub fn card_width_px(&self) -> f32 {
        (self.card_width_mm / 25.4) * self.card_dpi as f32
    }

    /// True when every numeric field is in the range the controls accept
    pub fn is_valid(&self) -> bool {
        self.card_width_mm.is_finite()
            && self.card_width_mm > 0.0
            && self.card_dpi > 0
            && [
                self.font_sizes.corner_rank,
                self.font_sizes.center_ace,
                self.font_sizes.pip,
            ]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
            && (0.0..50.0).contains(&self.center_inset_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SheetConfig::default();
        assert_eq!(config.card_width_mm, 63.0);
        assert_eq!(config.card_dpi, 72);
        assert_eq!(config.view, ViewMode::Front);
        assert_eq!(config.back_card_color.to_hex(), "#0044aa");
        assert!(config.is_valid());
    }

    #[test]
    fn test_custom_font_overrides_preset() {
        let mut font = FontSelection::default();
        assert_eq!(font.family(), DEFAULT_FONT_FAMILY);

        font.custom = "  Georgia, serif ".to_string();
        assert_eq!(font.family(), "Georgia, serif");

        font.custom = "   ".to_string();
        assert_eq!(font.family(), DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn test_view_tab_values() {
        assert_eq!(ViewMode::from_tab("back"), ViewMode::Back);
        assert_eq!(ViewMode::from_tab("front"), ViewMode::Front);
        assert_eq!(ViewMode::from_tab("sideways"), ViewMode::Front);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SheetConfig =
            serde_json::from_str(r##"{"card_dpi": 300, "back_card_color": "#112233"}"##).unwrap();
        assert_eq!(config.card_dpi, 300);
        assert_eq!(config.back_card_color.to_hex(), "#112233");
        assert_eq!(config.card_width_mm, 63.0);
        assert_eq!(config.font_sizes.pip, 10.0);
    }
}
