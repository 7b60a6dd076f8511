pub mod artwork;
pub mod card;
pub mod color;
pub mod pips;
pub mod state;

pub use artwork::{FaceArtwork, ImageData, SuitStyle, SuitStyles};
pub use card::{deck, Card, CardIdentity, JokerVariant, Rank, Suit};
pub use color::Color;
pub use pips::{pip_layout, PipPosition};
pub use state::{Action, SheetState};
