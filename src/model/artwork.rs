//! Suit styles and uploaded artwork shared by every slot

use std::collections::HashMap;
use std::sync::Arc;

use base64::Engine;

use super::card::{CardIdentity, Suit};
use super::color::Color;
use crate::config::defaults::default_suit_color;

/// An uploaded image held as an embeddable `data:` URL
///
/// Cloning is cheap; snapshots share the encoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    mime: &'static str,
    data_url: Arc<str>,
}

impl ImageData {
    pub fn from_bytes(mime: &'static str, bytes: &[u8]) -> Self {
        let mut data_url = format!("data:{};base64,", mime);
        base64::prelude::BASE64_STANDARD.encode_string(bytes, &mut data_url);
        Self {
            mime,
            data_url: Arc::from(data_url),
        }
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

/// Display color and optional icon for one suit
#[derive(Debug, Clone, PartialEq)]
pub struct SuitStyle {
    pub color: Color,
    /// Replaces the text glyph in corners, pips and the ace center
    pub icon: Option<ImageData>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuitStyles {
    pub hearts: SuitStyle,
    pub diamonds: SuitStyle,
    pub clubs: SuitStyle,
    pub spades: SuitStyle,
}

impl Default for SuitStyles {
    fn default() -> Self {
        let style = |suit| SuitStyle {
            color: default_suit_color(suit),
            icon: None,
        };
        Self {
            hearts: style(Suit::Hearts),
            diamonds: style(Suit::Diamonds),
            clubs: style(Suit::Clubs),
            spades: style(Suit::Spades),
        }
    }
}

impl SuitStyles {
    pub fn for_suit(&self, suit: Suit) -> &SuitStyle {
        match suit {
            Suit::Hearts => &self.hearts,
            Suit::Diamonds => &self.diamonds,
            Suit::Clubs => &self.clubs,
            Suit::Spades => &self.spades,
        }
    }

    pub fn for_suit_mut(&mut self, suit: Suit) -> &mut SuitStyle {
        match suit {
            Suit::Hearts => &mut self.hearts,
            Suit::Diamonds => &mut self.diamonds,
            Suit::Clubs => &mut self.clubs,
            Suit::Spades => &mut self.spades,
        }
    }
}

/// Uploaded face artwork keyed by card identity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceArtwork {
    images: HashMap<CardIdentity, ImageData>,
}

impl FaceArtwork {
    pub fn get(&self, identity: &CardIdentity) -> Option<&ImageData> {
        self.images.get(identity)
    }

    pub fn with(&self, identity: CardIdentity, image: ImageData) -> Self {
        let mut images = self.images.clone();
        images.insert(identity, image);
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
