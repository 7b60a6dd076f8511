//! HTML preview page
//!
//! The sheet is injected into a page template at the element with
//! `id="sheet"`. Style variables are applied once at the page root.

use crate::config::ViewMode;
use crate::error::StartupError;
use crate::sheet::{LayoutStyle, Sheet};

use super::element::{CardFace, CenterContent, Corner, FrameContent, RenderedCard, Symbol, Tint};
use super::escape::{escape_xml, sanitize_css_value};
use super::style::StyleVars;

/// Id of the mount element
pub const MOUNT_ID: &str = "sheet";

pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Uncut Sheet</title>
</head>
<body>
<div id="sheet"></div>
</body>
</html>
"#;

const BASE_CSS: &str = r#"
.view-tabs { margin: 8px 0; font-family: var(--label-font); }
.view-tab { display: inline-block; padding: 4px 12px; border: 1px solid #999; }
.view-tab.active { background: #333; color: #fff; }
.card { position: relative; width: var(--card-width); aspect-ratio: 63 / 88; background: var(--card-front-bg); border-radius: 4.5%; overflow: hidden; font-family: var(--label-font); }
.card.back-view { background: var(--card-back-bg); }
.card-inner { position: absolute; inset: 0; }
.corner { position: absolute; display: flex; flex-direction: column; align-items: center; line-height: 1; font-weight: bold; font-size: calc(var(--corner-rank-font-rem) * var(--card-scale) * 10px); }
.corner-top { top: 6%; left: 6%; }
.corner-bottom { bottom: 6%; right: 6%; transform: rotate(180deg); }
.corner .suit-symbol img { width: 0.8em; height: 0.8em; }
.card-center { position: absolute; inset: var(--center-inset-percent); display: flex; align-items: center; justify-content: center; }
.center-suit { font-size: calc(var(--pip-font-rem) * var(--card-scale) * 10px); }
.center-ace { font-size: calc(var(--center-ace-font-rem) * var(--card-scale) * 10px); }
img.center-ace { width: 1em; height: 1em; }
.pip-layout { position: absolute; inset: 0; }
.pip { position: absolute; transform: translate(-50%, -50%); line-height: 1; font-size: calc(var(--pip-font-rem) * var(--card-scale) * 10px); }
.pip img { width: 1em; height: 1em; }
.face-frame { position: absolute; inset: var(--face-frame-margin); border: 1.5px solid currentColor; border-radius: var(--face-frame-radius); overflow: hidden; display: flex; align-items: center; justify-content: center; }
.face-frame img { width: 100%; height: 100%; object-fit: cover; }
.card-back { position: absolute; inset: 0; background-image: repeating-linear-gradient(45deg, rgba(255,255,255,0.14) 0 7px, transparent 7px 14px); }
"#;

/// A page template with a located mount element
#[derive(Debug, Clone)]
pub struct PageTemplate {
    source: String,
    /// Byte offset just past the mount element's opening tag
    insert_at: usize,
}

impl PageTemplate {
    /// Locate the mount element; a template without one cannot host the sheet
    pub fn parse(source: &str) -> Result<Self, StartupError> {
        let insert_at =
            find_mount(source).ok_or_else(|| StartupError::MissingMount(MOUNT_ID.to_string()))?;

        Ok(Self {
            source: source.to_string(),
            insert_at,
        })
    }

    /// Render the full page with the sheet injected into the mount element
    pub fn render(&self, sheet: &Sheet) -> String {
        let mut page = String::with_capacity(self.source.len() + 64 * 1024);
        page.push_str(&self.source[..self.insert_at]);
        page.push_str(&sheet_html(sheet));
        page.push_str(&self.source[self.insert_at..]);
        page
    }
}

/// Byte offset just past the opening tag whose `id` attribute is the mount id
///
/// Comments are skipped. Attribute values may be double-quoted,
/// single-quoted or bare.
fn find_mount(source: &str) -> Option<usize> {
    let mut pos = 0;
    while let Some(offset) = source[pos..].find('<') {
        let start = pos + offset;
        let rest = &source[start..];
        if rest.starts_with("<!--") {
            pos = start + rest.find("-->")? + 3;
            continue;
        }

        let end = start + rest.find('>')?;
        if has_mount_id(&source[start + 1..end]) {
            return Some(end + 1);
        }
        pos = end + 1;
    }
    None
}

/// True when the tag body (name plus attributes) carries `id="sheet"`
fn has_mount_id(tag: &str) -> bool {
    // Skip the tag name
    let mut rest = tag.trim_start_matches(|c: char| !c.is_whitespace());

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '/');
        if rest.is_empty() {
            return false;
        }

        let name_end = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '/')
            .unwrap_or(rest.len());
        let name = &rest[..name_end];
        rest = rest[name_end..].trim_start();

        let mut value = "";
        if let Some(after) = rest.strip_prefix('=') {
            let after = after.trim_start();
            match after.chars().next() {
                Some(quote @ ('"' | '\'')) => {
                    let body = &after[1..];
                    let close = body.find(quote).unwrap_or(body.len());
                    value = &body[..close];
                    rest = body.get(close + 1..).unwrap_or("");
                }
                _ => {
                    let end = after.find(char::is_whitespace).unwrap_or(after.len());
                    value = &after[..end];
                    rest = &after[end..];
                }
            }
        }

        if name.eq_ignore_ascii_case("id") && value == MOUNT_ID {
            return true;
        }
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE).unwrap_or_else(|_| Self {
            source: DEFAULT_TEMPLATE.to_string(),
            insert_at: 0,
        })
    }
}

/// Style block, view tabs and the slot grid
pub fn sheet_html(sheet: &Sheet) -> String {
    let mut out = String::new();
    out.push_str("<style>\n:root {\n");
    for (name, value) in sheet.style().css_properties() {
        out.push_str(&format!("  {}: {};\n", name, sanitize_css_value(&value)));
    }
    out.push_str("}\n");
    out.push_str(BASE_CSS);
    out.push_str("</style>\n");

    out.push_str(&view_tabs_html(sheet.view()));
    out.push_str(&sheet_inner_html(sheet.cards(), sheet.style(), &sheet.layout()));
    out
}

fn view_tabs_html(view: ViewMode) -> String {
    let tab = |mode: ViewMode, label: &str| {
        let active = if mode == view { " active" } else { "" };
        format!(
            r#"<button class="view-tab{}" data-view="{}">{}</button>"#,
            active,
            mode.as_str(),
            label
        )
    };
    format!(
        r#"<div class="view-tabs">{}{}</div>"#,
        tab(ViewMode::Front, "Front"),
        tab(ViewMode::Back, "Back")
    ) + "\n"
}

fn sheet_inner_html<'a>(
    cards: impl Iterator<Item = &'a RenderedCard>,
    style: &StyleVars,
    layout: &LayoutStyle,
) -> String {
    let mut out = format!(r#"<div class="sheet-inner" style="{}">"#, layout.css());
    out.push('\n');
    for card in cards {
        card_html(&mut out, card, style);
        out.push('\n');
    }
    out.push_str("</div>\n");
    out
}

/// Markup for one slot
pub fn card_html(out: &mut String, card: &RenderedCard, style: &StyleVars) {
    let (suit, rank) = match card.identity.slot_key().split_once(':') {
        Some((suit, rank)) => (suit.to_string(), rank.to_string()),
        None => (String::new(), String::new()),
    };
    let back = if card.is_back() { " back-view" } else { "" };
    out.push_str(&format!(
        r#"<div class="card{}" data-suit="{}" data-rank="{}"><div class="card-inner">"#,
        back, suit, rank
    ));

    match &card.face {
        CardFace::Back => out.push_str(r#"<div class="card-back"></div>"#),
        CardFace::Front { corners, center } => {
            for corner in corners {
                corner_html(out, corner, style);
            }
            out.push_str(r#"<div class="card-center">"#);
            center_html(out, center, style);
            out.push_str("</div>");
        }
    }

    out.push_str("</div></div>");
}

fn color_style(style: &StyleVars, tint: Tint) -> String {
    match tint {
        Tint::Suit(suit) => format!("color: var(--suit-color-{})", suit.id()),
        Tint::Joker => format!("color: {}", style.tint_color(tint)),
    }
}

fn corner_html(out: &mut String, corner: &Corner, style: &StyleVars) {
    out.push_str(&format!(
        r#"<div class="{}" style="{}"><div class="rank">{}</div><div class="suit-symbol">{}</div></div>"#,
        corner.position.class(),
        color_style(style, corner.tint),
        escape_xml(&corner.label),
        symbol_inner_html(&corner.symbol, None)
    ));
}

fn center_html(out: &mut String, center: &CenterContent, style: &StyleVars) {
    match center {
        CenterContent::Frame(frame) => {
            out.push_str(&format!(
                r#"<div class="face-frame" style="{}">"#,
                color_style(style, frame.tint)
            ));
            match &frame.content {
                FrameContent::Artwork { image, alt } => out.push_str(&format!(
                    r#"<img src="{}" alt="{}">"#,
                    image.data_url(),
                    escape_xml(alt)
                )),
                FrameContent::Label(label) => out.push_str(&format!(
                    r#"<div class="center-suit">{}</div>"#,
                    escape_xml(label)
                )),
                FrameContent::Empty => {}
            }
            out.push_str("</div>");
        }
        CenterContent::Ace(symbol) => {
            standalone_symbol_html(out, symbol, "center-suit center-ace", style)
        }
        CenterContent::Single(symbol) => {
            standalone_symbol_html(out, symbol, "center-suit", style)
        }
        CenterContent::Pips(pips) => {
            out.push_str(r#"<div class="pip-layout">"#);
            for pip in pips {
                let tint = match &pip.symbol {
                    Symbol::Glyph { tint, .. } => format!("; {}", color_style(style, *tint)),
                    Symbol::Icon { .. } => String::new(),
                };
                out.push_str(&format!(
                    r#"<span class="pip" style="left: {}%; top: {}%{}">{}</span>"#,
                    pip.position.x,
                    pip.position.y,
                    tint,
                    symbol_inner_html(&pip.symbol, None)
                ));
            }
            out.push_str("</div>");
        }
    }
}

fn standalone_symbol_html(out: &mut String, symbol: &Symbol, class: &str, style: &StyleVars) {
    match symbol {
        Symbol::Glyph { tint, .. } => out.push_str(&format!(
            r#"<span class="{}" style="{}">{}</span>"#,
            class,
            color_style(style, *tint),
            symbol_inner_html(symbol, None)
        )),
        Symbol::Icon { .. } => out.push_str(&symbol_inner_html(symbol, Some(class))),
    }
}

fn symbol_inner_html(symbol: &Symbol, class: Option<&str>) -> String {
    match symbol {
        Symbol::Glyph { ch, .. } => escape_xml(&ch.to_string()),
        Symbol::Icon { image, alt } => {
            let class = class
                .map(|c| format!(r#" class="{}""#, c))
                .unwrap_or_default();
            format!(
                r#"<img{} src="{}" alt="{}">"#,
                class,
                image.data_url(),
                escape_xml(alt)
            )
        }
    }
}
