//! Card rendering: style projection, card faces, HTML and SVG emission

pub mod card;
pub mod element;
pub mod escape;
pub mod html;
pub mod style;
pub mod svg;

pub use card::render_card;
pub use element::{CardFace, RenderedCard};
pub use html::PageTemplate;
pub use style::StyleVars;
pub use svg::sheet_svg;
