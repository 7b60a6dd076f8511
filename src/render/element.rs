//! Rendered card content
//!
//! A card face is a small typed tree. Colors and sizes are not stored in
//! the tree; they are resolved from [`StyleVars`](super::style::StyleVars)
//! when the tree is emitted as HTML or SVG.

use crate::model::{CardIdentity, ImageData, PipPosition, Suit};

/// Which style color a glyph uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Suit(Suit),
    Joker,
}

/// A suit mark: text glyph or uploaded icon
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Glyph { ch: char, tint: Tint },
    Icon { image: ImageData, alt: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerPosition {
    Top,
    Bottom,
}

impl CornerPosition {
    pub fn class(&self) -> &'static str {
        match self {
            CornerPosition::Top => "corner corner-top",
            CornerPosition::Bottom => "corner corner-bottom",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Corner {
    pub position: CornerPosition,
    pub label: String,
    pub tint: Tint,
    pub symbol: Symbol,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pip {
    pub position: PipPosition,
    pub symbol: Symbol,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameContent {
    Empty,
    Artwork { image: ImageData, alt: String },
    Label(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaceFrameContent {
    pub tint: Tint,
    pub content: FrameContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CenterContent {
    /// Face cards and jokers
    Frame(FaceFrameContent),
    /// One enlarged symbol
    Ace(Symbol),
    Pips(Vec<Pip>),
    /// Single centered symbol for ranks without a pip template
    Single(Symbol),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardFace {
    Front {
        corners: [Corner; 2],
        center: CenterContent,
    },
    /// Pattern only; colored by the back background
    Back,
}

/// Content of one slot after a render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub identity: CardIdentity,
    pub face: CardFace,
}

impl RenderedCard {
    pub fn is_back(&self) -> bool {
        matches!(self.face, CardFace::Back)
    }

    /// Number of pips drawn in the center area
    pub fn pip_count(&self) -> usize {
        match &self.face {
            CardFace::Front {
                center: CenterContent::Pips(pips),
                ..
            } => pips.len(),
            _ => 0,
        }
    }

    /// Every image referenced by this card
    pub fn images(&self) -> Vec<&ImageData> {
        let CardFace::Front { corners, center } = &self.face else {
            return Vec::new();
        };

        let mut symbols: Vec<&Symbol> = corners.iter().map(|c| &c.symbol).collect();
        let mut images = Vec::new();
        match center {
            CenterContent::Frame(frame) => {
                if let FrameContent::Artwork { image, .. } = &frame.content {
                    images.push(image);
                }
            }
            CenterContent::Ace(symbol) | CenterContent::Single(symbol) => symbols.push(symbol),
            CenterContent::Pips(pips) => symbols.extend(pips.iter().map(|p| &p.symbol)),
        }

        images.extend(symbols.into_iter().filter_map(|symbol| match symbol {
            Symbol::Icon { image, .. } => Some(image),
            Symbol::Glyph { .. } => None,
        }));
        images
    }

    /// Text labels visible on the card (corner labels, frame labels, glyphs)
    pub fn text_content(&self) -> Vec<String> {
        let mut text = Vec::new();
        let CardFace::Front { corners, center } = &self.face else {
            return text;
        };

        let glyph = |symbol: &Symbol| match symbol {
            Symbol::Glyph { ch, .. } => Some(ch.to_string()),
            Symbol::Icon { .. } => None,
        };

        for corner in corners {
            text.push(corner.label.clone());
            text.extend(glyph(&corner.symbol));
        }
        match center {
            CenterContent::Frame(frame) => {
                if let FrameContent::Label(label) = &frame.content {
                    text.push(label.clone());
                }
            }
            CenterContent::Ace(symbol) | CenterContent::Single(symbol) => {
                text.extend(glyph(symbol));
            }
            CenterContent::Pips(pips) => {
                text.extend(pips.iter().filter_map(|p| glyph(&p.symbol)));
            }
        }
        text
    }
}
