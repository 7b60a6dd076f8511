//! Global style variables derived from the sheet state

use crate::config::defaults::{
    CARD_ASPECT_RATIO, FONT_UNIT_PX, JOKER_COLOR, MAX_CARD_SCALE, MIN_CARD_SCALE, REFERENCE_DPI,
    REFERENCE_WIDTH_MM,
};
use crate::model::{Color, SheetState, Suit};

use super::element::Tint;

/// Values shared by every card in one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct StyleVars {
    pub label_font: String,
    pub card_front_bg: Color,
    pub card_back_bg: Color,
    pub suit_colors: [(Suit, Color); 4],
    pub face_frame_margin_px: u32,
    pub face_frame_radius_px: u32,
    pub card_width_px: f32,
    /// Clamped to [0.3, 4.0]
    pub card_scale: f32,
    pub corner_rank_font: f32,
    pub center_ace_font: f32,
    pub pip_font: f32,
    pub center_inset_percent: f32,
}

/// Width of the reference card (63mm at 300 DPI) in px
pub fn reference_width_px() -> f32 {
    (REFERENCE_WIDTH_MM / 25.4) * REFERENCE_DPI
}

/// Scale of a card width relative to the reference, clamped to keep labels legible
pub fn card_scale(width_px: f32) -> f32 {
    (width_px / reference_width_px()).clamp(MIN_CARD_SCALE, MAX_CARD_SCALE)
}

impl StyleVars {
    pub fn project(state: &SheetState) -> Self {
        let config = &state.config;
        let card_width_px = config.card_width_px();

        Self {
            label_font: config.font.family().to_string(),
            card_front_bg: config.front_card_color,
            card_back_bg: config.back_card_color,
            suit_colors: Suit::all().map(|suit| (suit, state.suits.for_suit(suit).color)),
            face_frame_margin_px: config.face_frame.margin_px,
            face_frame_radius_px: config.face_frame.radius_px,
            card_width_px,
            card_scale: card_scale(card_width_px),
            corner_rank_font: config.font_sizes.corner_rank,
            center_ace_font: config.font_sizes.center_ace,
            pip_font: config.font_sizes.pip,
            center_inset_percent: config.center_inset_percent,
        }
    }

    pub fn card_height_px(&self) -> f32 {
        self.card_width_px * CARD_ASPECT_RATIO
    }

    pub fn suit_color(&self, suit: Suit) -> Color {
        self.suit_colors
            .iter()
            .find(|(s, _)| *s == suit)
            .map(|(_, c)| *c)
            .unwrap_or(JOKER_COLOR)
    }

    pub fn tint_color(&self, tint: Tint) -> Color {
        match tint {
            Tint::Suit(suit) => self.suit_color(suit),
            Tint::Joker => JOKER_COLOR,
        }
    }

    /// Font scale to px at the current card scale
    pub fn font_px(&self, value: f32) -> f32 {
        value * FONT_UNIT_PX * self.card_scale
    }

    pub fn corner_rank_px(&self) -> f32 {
        self.font_px(self.corner_rank_font)
    }

    pub fn center_ace_px(&self) -> f32 {
        self.font_px(self.center_ace_font)
    }

    pub fn pip_px(&self) -> f32 {
        self.font_px(self.pip_font)
    }

    /// CSS custom properties in application order
    pub fn css_properties(&self) -> Vec<(String, String)> {
        let mut props = vec![
            ("--label-font".to_string(), self.label_font.clone()),
            ("--card-front-bg".to_string(), self.card_front_bg.to_hex()),
            ("--card-back-bg".to_string(), self.card_back_bg.to_hex()),
        ];

        for (suit, color) in &self.suit_colors {
            props.push((format!("--suit-color-{}", suit.id()), color.to_hex()));
        }

        props.extend([
            (
                "--face-frame-margin".to_string(),
                format!("{}px", self.face_frame_margin_px),
            ),
            (
                "--face-frame-radius".to_string(),
                format!("{}px", self.face_frame_radius_px),
            ),
            ("--card-width".to_string(), format!("{}px", self.card_width_px)),
            ("--card-scale".to_string(), self.card_scale.to_string()),
            (
                "--corner-rank-font-rem".to_string(),
                self.corner_rank_font.to_string(),
            ),
            (
                "--center-ace-font-rem".to_string(),
                self.center_ace_font.to_string(),
            ),
            ("--pip-font-rem".to_string(), self.pip_font.to_string()),
            (
                "--center-inset-percent".to_string(),
                format!("{}%", self.center_inset_percent),
            ),
        ]);

        props
    }
}
