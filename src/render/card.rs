//! Card renderer: (identity, state, view) -> card face

use crate::config::ViewMode;
use crate::model::{pip_layout, Card, CardIdentity, JokerVariant, Rank, SheetState, Suit};

use super::element::{
    CardFace, CenterContent, Corner, CornerPosition, FaceFrameContent, FrameContent, Pip,
    RenderedCard, Symbol, Tint,
};

const JOKER_LABEL: &str = "JOKER";
const JOKER_STAR: char = '\u{2605}'; // ★

/// Render one slot. Pure: identical inputs give identical output.
pub fn render_card(identity: CardIdentity, state: &SheetState, view: ViewMode) -> RenderedCard {
    let face = match (view, identity) {
        (ViewMode::Back, _) => CardFace::Back,
        (ViewMode::Front, CardIdentity::Joker(variant)) => render_joker(variant, state),
        (ViewMode::Front, CardIdentity::Standard(card)) => render_standard(card, state),
    };
    RenderedCard { identity, face }
}

fn render_joker(variant: JokerVariant, state: &SheetState) -> CardFace {
    let corner = |position| Corner {
        position,
        label: JOKER_LABEL.to_string(),
        tint: Tint::Joker,
        symbol: Symbol::Glyph {
            ch: JOKER_STAR,
            tint: Tint::Joker,
        },
    };

    let content = match state.faces.get(&CardIdentity::Joker(variant)) {
        Some(image) => FrameContent::Artwork {
            image: image.clone(),
            alt: "Joker".to_string(),
        },
        None => FrameContent::Label(JOKER_LABEL.to_string()),
    };

    CardFace::Front {
        corners: [corner(CornerPosition::Top), corner(CornerPosition::Bottom)],
        center: CenterContent::Frame(FaceFrameContent {
            tint: Tint::Joker,
            content,
        }),
    }
}

fn render_standard(card: Card, state: &SheetState) -> CardFace {
    let symbol = suit_symbol(card.suit, state);
    let corner = |position| Corner {
        position,
        label: card.rank.label().to_string(),
        tint: Tint::Suit(card.suit),
        symbol: symbol.clone(),
    };
    let corners = [corner(CornerPosition::Top), corner(CornerPosition::Bottom)];

    let center = if card.rank.is_face() {
        let content = match state.faces.get(&CardIdentity::Standard(card)) {
            Some(image) => FrameContent::Artwork {
                image: image.clone(),
                alt: format!("{} of {}", card.rank.label(), card.suit.name()),
            },
            None => FrameContent::Empty,
        };
        CenterContent::Frame(FaceFrameContent {
            tint: Tint::Suit(card.suit),
            content,
        })
    } else if card.rank == Rank::Ace {
        CenterContent::Ace(symbol.clone())
    } else {
        number_center(card.rank, symbol.clone())
    };

    CardFace::Front { corners, center }
}

fn number_center(rank: Rank, symbol: Symbol) -> CenterContent {
    match rank.number().and_then(pip_layout) {
        Some(template) if !template.is_empty() => CenterContent::Pips(
            template
                .iter()
                .map(|position| Pip {
                    position: *position,
                    symbol: symbol.clone(),
                })
                .collect(),
        ),
        _ => {
            log::debug!("No pip template for rank {}, using a single symbol", rank);
            CenterContent::Single(symbol)
        }
    }
}

/// Suit icon when one is uploaded, else the text glyph
fn suit_symbol(suit: Suit, state: &SheetState) -> Symbol {
    match &state.suits.for_suit(suit).icon {
        Some(image) => Symbol::Icon {
            image: image.clone(),
            alt: format!("{} icon", suit.name()),
        },
        None => Symbol::Glyph {
            ch: suit.symbol(),
            tint: Tint::Suit(suit),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{deck, Action, ImageData};

    fn front(identity: CardIdentity, state: &SheetState) -> RenderedCard {
        render_card(identity, state, ViewMode::Front)
    }

    #[test]
    fn test_number_cards_have_rank_pips() {
        let state = SheetState::default();
        for suit in Suit::all() {
            for rank in Rank::all() {
                let card = front(CardIdentity::standard(suit, rank), &state);
                let expected = rank.number().map(usize::from).unwrap_or(0);
                assert_eq!(card.pip_count(), expected, "{}", card.identity);
            }
        }
    }

    #[test]
    fn test_ace_has_single_center_symbol() {
        let card = front(
            CardIdentity::standard(Suit::Spades, Rank::Ace),
            &SheetState::default(),
        );
        let CardFace::Front { corners, center } = &card.face else {
            panic!("expected front");
        };
        assert_eq!(corners[0].label, "A");
        assert_eq!(
            center,
            &CenterContent::Ace(Symbol::Glyph {
                ch: '♠',
                tint: Tint::Suit(Suit::Spades)
            })
        );
    }

    #[test]
    fn test_face_card_without_art_has_empty_frame() {
        let card = front(
            CardIdentity::standard(Suit::Clubs, Rank::Queen),
            &SheetState::default(),
        );
        let CardFace::Front { center, .. } = &card.face else {
            panic!("expected front");
        };
        assert!(matches!(
            center,
            CenterContent::Frame(FaceFrameContent {
                content: FrameContent::Empty,
                ..
            })
        ));
    }

    #[test]
    fn test_face_art_only_on_its_own_card() {
        let king_hearts = CardIdentity::standard(Suit::Hearts, Rank::King);
        let art = ImageData::from_bytes("image/png", b"king");
        let state = SheetState::default().apply(Action::SetFaceArtwork(king_hearts, art.clone()));

        let card = front(king_hearts, &state);
        assert_eq!(card.images(), vec![&art]);
        let CardFace::Front { center, .. } = &card.face else {
            panic!("expected front");
        };
        assert!(matches!(
            center,
            CenterContent::Frame(FaceFrameContent {
                content: FrameContent::Artwork { alt, .. },
                ..
            }) if alt == "K of Hearts"
        ));

        for suit in [Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            let other = front(CardIdentity::standard(suit, Rank::King), &state);
            assert!(other.images().is_empty());
        }
    }

    #[test]
    fn test_joker_placeholder_and_art() {
        let first = CardIdentity::Joker(JokerVariant::First);
        let second = CardIdentity::Joker(JokerVariant::Second);
        let art = ImageData::from_bytes("image/png", b"joker");
        let state = SheetState::default().apply(Action::SetFaceArtwork(first, art.clone()));

        let with_art = front(first, &state);
        assert_eq!(with_art.images(), vec![&art]);
        assert_eq!(with_art.text_content(), vec!["JOKER", "★", "JOKER", "★"]);

        let placeholder = front(second, &state);
        assert!(placeholder.images().is_empty());
        assert_eq!(
            placeholder.text_content(),
            vec!["JOKER", "★", "JOKER", "★", "JOKER"]
        );
    }

    #[test]
    fn test_suit_icon_replaces_every_glyph() {
        let icon = ImageData::from_bytes("image/png", b"heart");
        let state = SheetState::default().apply(Action::SetSuitIcon(Suit::Hearts, icon));

        let seven = front(CardIdentity::standard(Suit::Hearts, Rank::Seven), &state);
        // 2 corners + 7 pips
        assert_eq!(seven.images().len(), 9);
        assert_eq!(seven.text_content(), vec!["7", "7"]);

        let ace = front(CardIdentity::standard(Suit::Hearts, Rank::Ace), &state);
        assert_eq!(ace.images().len(), 3);

        let spade = front(CardIdentity::standard(Suit::Spades, Rank::Seven), &state);
        assert!(spade.images().is_empty());
    }

    #[test]
    fn test_back_view_has_no_content() {
        let state = SheetState::default();
        for identity in deck() {
            let card = render_card(identity, &state, ViewMode::Back);
            assert!(card.is_back());
            assert!(card.text_content().is_empty());
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let state = SheetState::default();
        for identity in deck() {
            assert_eq!(front(identity, &state), front(identity, &state));
        }
    }

    #[test]
    fn test_missing_template_falls_back_to_single_symbol() {
        let symbol = Symbol::Glyph {
            ch: '♣',
            tint: Tint::Suit(Suit::Clubs),
        };
        assert_eq!(
            number_center(Rank::Ace, symbol.clone()),
            CenterContent::Single(symbol)
        );
    }
}
