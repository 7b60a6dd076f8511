use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '\u{2665}',   // ♥
            Suit::Diamonds => '\u{2666}', // ♦
            Suit::Clubs => '\u{2663}',    // ♣
            Suit::Spades => '\u{2660}',   // ♠
        }
    }

    /// Lowercase identifier used by control ids and style variables
    pub fn id(&self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "hearts" => Some(Suit::Hearts),
            "diamonds" => Some(Suit::Diamonds),
            "clubs" => Some(Suit::Clubs),
            "spades" => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Sheet order: hearts, diamonds, clubs, spades
    pub fn all() -> [Suit; 4] {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Rank::Ace),
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Numeric value for number cards (2-10), None for A/J/Q/K
    pub fn number(&self) -> Option<u8> {
        match self {
            Rank::Two => Some(2),
            Rank::Three => Some(3),
            Rank::Four => Some(4),
            Rank::Five => Some(5),
            Rank::Six => Some(6),
            Rank::Seven => Some(7),
            Rank::Eight => Some(8),
            Rank::Nine => Some(9),
            Rank::Ten => Some(10),
            _ => None,
        }
    }

    pub fn is_face(&self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Sheet order: A, 2..10, J, Q, K
    pub fn all() -> [Rank; 13] {
        [
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
        ]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JokerVariant {
    First,
    Second,
}

impl JokerVariant {
    pub fn tag(&self) -> &'static str {
        match self {
            JokerVariant::First => "JOKER-1",
            JokerVariant::Second => "JOKER-2",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "JOKER-1" => Some(JokerVariant::First),
            "JOKER-2" => Some(JokerVariant::Second),
            _ => None,
        }
    }

    pub fn all() -> [JokerVariant; 2] {
        [JokerVariant::First, JokerVariant::Second]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Identity of one sheet slot. Fixed for the lifetime of the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardIdentity {
    Standard(Card),
    Joker(JokerVariant),
}

impl CardIdentity {
    pub fn standard(suit: Suit, rank: Rank) -> Self {
        CardIdentity::Standard(Card::new(suit, rank))
    }

    /// Slot key used by face-art controls, e.g. `hearts:K` or `joker:JOKER-1`
    pub fn slot_key(&self) -> String {
        match self {
            CardIdentity::Standard(card) => format!("{}:{}", card.suit.id(), card.rank.label()),
            CardIdentity::Joker(variant) => format!("joker:{}", variant.tag()),
        }
    }
}

impl fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardIdentity::Standard(card) => write!(f, "{}", card),
            CardIdentity::Joker(variant) => write!(f, "{}", variant.tag()),
        }
    }
}

impl FromStr for CardIdentity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank) = s
            .split_once(':')
            .ok_or_else(|| ConfigError::InvalidSlot(s.to_string()))?;

        if suit.trim().eq_ignore_ascii_case("joker") {
            return JokerVariant::from_tag(rank)
                .map(CardIdentity::Joker)
                .ok_or_else(|| ConfigError::InvalidSlot(s.to_string()));
        }

        match (Suit::from_id(suit), Rank::from_label(rank)) {
            (Some(suit), Some(rank)) => Ok(CardIdentity::standard(suit, rank)),
            _ => Err(ConfigError::InvalidSlot(s.to_string())),
        }
    }
}

/// All 54 identities in sheet order: 52 standard cards then the two jokers
pub fn deck() -> Vec<CardIdentity> {
    let mut cards = Vec::with_capacity(54);
    for suit in Suit::all() {
        for rank in Rank::all() {
            cards.push(CardIdentity::standard(suit, rank));
        }
    }
    cards.extend(JokerVariant::all().into_iter().map(CardIdentity::Joker));
    cards
}
