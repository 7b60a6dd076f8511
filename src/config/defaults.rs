use crate::model::{Color, Suit};

/// Default label font stack
pub const DEFAULT_FONT_FAMILY: &str =
    "system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif";

/// Default front background
pub const DEFAULT_FRONT_CARD_COLOR: Color = Color::rgb(0xff, 0xff, 0xff);

/// Default back background
pub const DEFAULT_BACK_CARD_COLOR: Color = Color::rgb(0x00, 0x44, 0xaa);

/// Default physical card width in mm (poker size)
pub const DEFAULT_CARD_WIDTH_MM: f32 = 63.0;

/// Default preview DPI
pub const DEFAULT_CARD_DPI: u32 = 72;

/// Default corner rank font scale
pub const DEFAULT_CORNER_RANK_SIZE: f32 = 6.0;

/// Default ace center font scale
pub const DEFAULT_CENTER_ACE_SIZE: f32 = 35.0;

/// Default pip font scale
pub const DEFAULT_PIP_SIZE: f32 = 10.0;

/// Default center area inset (% from each edge)
pub const DEFAULT_CENTER_INSET_PERCENT: f32 = 18.0;

/// Reference card width in mm; `card-scale` is 1.0 at this width and DPI
pub const REFERENCE_WIDTH_MM: f32 = 63.0;

/// Reference DPI
pub const REFERENCE_DPI: f32 = 300.0;

/// Clamp range for `card-scale`
pub const MIN_CARD_SCALE: f32 = 0.3;
pub const MAX_CARD_SCALE: f32 = 4.0;

/// Rendered font size in px per font-scale unit at `card-scale` 1.0
pub const FONT_UNIT_PX: f32 = 10.0;

/// Card height / width (63mm x 88mm)
pub const CARD_ASPECT_RATIO: f32 = 88.0 / 63.0;

/// Default suit display colors
pub fn default_suit_color(suit: Suit) -> Color {
    match suit {
        Suit::Hearts => Color::rgb(0xd3, 0x2f, 0x2f),
        Suit::Diamonds => Color::rgb(0xe5, 0x39, 0x35),
        Suit::Clubs => Color::rgb(0x1a, 0x23, 0x7e),
        Suit::Spades => Color::rgb(0x00, 0x00, 0x00),
    }
}

/// Joker labels and frames
pub const JOKER_COLOR: Color = Color::rgb(0x00, 0x00, 0x00);
