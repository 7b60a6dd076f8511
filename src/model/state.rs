//! Immutable sheet state and its single update function

use crate::config::{SheetConfig, ViewMode};

use super::artwork::{FaceArtwork, ImageData, SuitStyles};
use super::card::{CardIdentity, Suit};
use super::color::Color;

/// One snapshot of every customization parameter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetState {
    pub config: SheetConfig,
    pub suits: SuitStyles,
    pub faces: FaceArtwork,
}

/// A validated state mutation
///
/// Values arrive here already parsed; invalid control input never becomes
/// an `Action`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetFontPreset(String),
    SetFontCustom(String),
    SetFrontCardColor(Color),
    SetBackCardColor(Color),
    SetSuitColor(Suit, Color),
    SetSuitIcon(Suit, ImageData),
    SetFaceArtwork(CardIdentity, ImageData),
    SetFaceMargin(u32),
    SetFaceRadius(u32),
    SetCardWidthMm(f32),
    SetCardDpi(u32),
    SetCornerRankSize(f32),
    SetCenterAceSize(f32),
    SetPipSize(f32),
    SetCenterInset(f32),
    SetView(ViewMode),
}

impl SheetState {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn view(&self) -> ViewMode {
        self.config.view
    }

    /// Produce the next snapshot; `self` is left untouched
    pub fn apply(&self, action: Action) -> SheetState {
        let mut next = self.clone();
        let config = &mut next.config;

        match action {
            Action::SetFontPreset(family) => config.font.preset = family,
            Action::SetFontCustom(family) => config.font.custom = family,
            Action::SetFrontCardColor(color) => config.front_card_color = color,
            Action::SetBackCardColor(color) => config.back_card_color = color,
            Action::SetSuitColor(suit, color) => next.suits.for_suit_mut(suit).color = color,
            Action::SetSuitIcon(suit, icon) => next.suits.for_suit_mut(suit).icon = Some(icon),
            Action::SetFaceArtwork(identity, image) => {
                next.faces = next.faces.with(identity, image);
            }
            Action::SetFaceMargin(px) => config.face_frame.margin_px = px,
            Action::SetFaceRadius(px) => config.face_frame.radius_px = px,
            Action::SetCardWidthMm(mm) => config.card_width_mm = mm,
            Action::SetCardDpi(dpi) => config.card_dpi = dpi,
            Action::SetCornerRankSize(size) => config.font_sizes.corner_rank = size,
            Action::SetCenterAceSize(size) => config.font_sizes.center_ace = size,
            Action::SetPipSize(size) => config.font_sizes.pip = size,
            Action::SetCenterInset(percent) => config.center_inset_percent = percent,
            Action::SetView(view) => config.view = view,
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::card::Rank;

    #[test]
    fn test_apply_returns_new_snapshot() {
        let before = SheetState::default();
        let after = before.apply(Action::SetCardDpi(300));

        assert_eq!(before.config.card_dpi, 72);
        assert_eq!(after.config.card_dpi, 300);
    }

    #[test]
    fn test_apply_changes_only_target_field() {
        let before = SheetState::default();
        let after = before.apply(Action::SetBackCardColor(Color::rgb(0x11, 0x22, 0x33)));

        let mut expected = before.clone();
        expected.config.back_card_color = Color::rgb(0x11, 0x22, 0x33);
        assert_eq!(after, expected);
    }

    #[test]
    fn test_suit_icon_and_face_art() {
        let icon = ImageData::from_bytes("image/png", b"icon");
        let king = CardIdentity::standard(Suit::Hearts, Rank::King);

        let state = SheetState::default()
            .apply(Action::SetSuitIcon(Suit::Clubs, icon.clone()))
            .apply(Action::SetFaceArtwork(king, icon.clone()));

        assert_eq!(state.suits.clubs.icon.as_ref(), Some(&icon));
        assert!(state.suits.hearts.icon.is_none());
        assert_eq!(state.faces.get(&king), Some(&icon));
    }

    #[test]
    fn test_view_switch() {
        let state = SheetState::default().apply(Action::SetView(ViewMode::Back));
        assert_eq!(state.view(), ViewMode::Back);
    }
}
