//! SVG emission of a laid-out sheet (input to rasterization)

use crate::sheet::LayoutStyle;

use super::element::{
    CardFace, CenterContent, Corner, CornerPosition, FaceFrameContent, FrameContent, RenderedCard,
    Symbol,
};
use super::escape::escape_xml;
use super::style::StyleVars;

/// Corner radius as a fraction of card width
const CARD_RADIUS_RATIO: f32 = 0.045;

/// Corner padding as a fraction of card width
const CORNER_PAD_RATIO: f32 = 0.06;

/// Corner suit mark relative to the rank label
const CORNER_SYMBOL_RATIO: f32 = 0.8;

/// Labels longer than this shrink to fit the corner
const SHORT_LABEL_CHARS: usize = 2;
const LONG_LABEL_RATIO: f32 = 0.5;

const CARD_OUTLINE: &str = "#cccccc";
const BACK_LINE: &str = "#ffffff";

/// Pixel size of the laid-out sheet
pub fn sheet_size(card_count: usize, style: &StyleVars, layout: &LayoutStyle) -> (f32, f32) {
    let columns = layout.column_count() as f32;
    let rows = layout.row_count(card_count) as f32;
    let width = columns * style.card_width_px + (columns - 1.0).max(0.0) * layout.gap_px;
    let height = rows * style.card_height_px() + (rows - 1.0).max(0.0) * layout.gap_px;
    (width, height)
}

/// Emit the whole sheet as a standalone SVG document
pub fn sheet_svg<'a>(
    cards: impl IntoIterator<Item = &'a RenderedCard>,
    style: &StyleVars,
    layout: &LayoutStyle,
) -> String {
    let cards: Vec<&RenderedCard> = cards.into_iter().collect();
    let (width, height) = sheet_size(cards.len(), style, layout);
    let columns = layout.column_count() as usize;
    let pattern = 14.0 * style.card_scale;

    let mut out = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" "#,
            r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ),
        w = num(width),
        h = num(height)
    );
    out.push_str(&format!(
        concat!(
            r#"<defs><pattern id="back-pattern" width="{p}" height="{p}" patternUnits="userSpaceOnUse" patternTransform="rotate(45)">"#,
            r#"<rect width="{half}" height="{p}" fill="{line}" fill-opacity="0.14"/></pattern></defs>"#
        ),
        p = num(pattern),
        half = num(pattern / 2.0),
        line = BACK_LINE
    ));

    for (index, card) in cards.iter().enumerate() {
        let col = (index % columns) as f32;
        let row = (index / columns) as f32;
        let x = col * (style.card_width_px + layout.gap_px);
        let y = row * (style.card_height_px() + layout.gap_px);
        card_svg(&mut out, index, card, style, x, y);
    }

    out.push_str("</svg>");
    out
}

fn card_svg(out: &mut String, index: usize, card: &RenderedCard, style: &StyleVars, x: f32, y: f32) {
    let w = style.card_width_px;
    let h = style.card_height_px();
    let radius = w * CARD_RADIUS_RATIO;

    out.push_str(&format!(
        r#"<g transform="translate({} {})">"#,
        num(x),
        num(y)
    ));

    match &card.face {
        CardFace::Back => {
            let inset = w * CORNER_PAD_RATIO;
            out.push_str(&format!(
                r#"<rect width="{w}" height="{h}" rx="{r}" fill="{bg}"/><rect width="{w}" height="{h}" rx="{r}" fill="url(#back-pattern)"/>"#,
                w = num(w),
                h = num(h),
                r = num(radius),
                bg = style.card_back_bg
            ));
            out.push_str(&format!(
                r#"<rect x="{i}" y="{i}" width="{iw}" height="{ih}" rx="{r}" fill="none" stroke="{line}" stroke-opacity="0.7" stroke-width="{sw}"/>"#,
                i = num(inset),
                iw = num(w - 2.0 * inset),
                ih = num(h - 2.0 * inset),
                r = num(radius / 2.0),
                line = BACK_LINE,
                sw = num((2.0 * style.card_scale).max(1.0))
            ));
        }
        CardFace::Front { corners, center } => {
            out.push_str(&format!(
                r#"<rect width="{w}" height="{h}" rx="{r}" fill="{bg}" stroke="{outline}" stroke-width="1"/>"#,
                w = num(w),
                h = num(h),
                r = num(radius),
                bg = style.card_front_bg,
                outline = CARD_OUTLINE
            ));
            for corner in corners {
                corner_svg(out, corner, style, w, h);
            }
            center_svg(out, index, center, style, w, h);
        }
    }

    out.push_str("</g>");
}

fn corner_svg(out: &mut String, corner: &Corner, style: &StyleVars, w: f32, h: f32) {
    let pad = w * CORNER_PAD_RATIO;
    let font = if corner.label.chars().count() > SHORT_LABEL_CHARS {
        style.corner_rank_px() * LONG_LABEL_RATIO
    } else {
        style.corner_rank_px()
    };
    let symbol_size = style.corner_rank_px() * CORNER_SYMBOL_RATIO;
    let baseline = pad + font * 0.8;

    if corner.position == CornerPosition::Bottom {
        out.push_str(&format!(
            r#"<g transform="rotate(180 {} {})">"#,
            num(w / 2.0),
            num(h / 2.0)
        ));
    }

    out.push_str(&format!(
        r#"<text x="{x}" y="{y}" font-family="{font_family}" font-size="{size}" font-weight="bold" fill="{fill}">{label}</text>"#,
        x = num(pad),
        y = num(baseline),
        font_family = escape_xml(&style.label_font),
        size = num(font),
        fill = style.tint_color(corner.tint),
        label = escape_xml(&corner.label)
    ));
    symbol_svg(
        out,
        &corner.symbol,
        pad + symbol_size / 2.0,
        baseline + font * 0.2 + symbol_size / 2.0,
        symbol_size,
        style,
    );

    if corner.position == CornerPosition::Bottom {
        out.push_str("</g>");
    }
}

fn center_svg(
    out: &mut String,
    index: usize,
    center: &CenterContent,
    style: &StyleVars,
    w: f32,
    h: f32,
) {
    let inset = style.center_inset_percent / 100.0;
    let (cx, cy) = (w * inset, h * inset);
    let (cw, ch) = (w - 2.0 * cx, h - 2.0 * cy);

    match center {
        CenterContent::Ace(symbol) => {
            symbol_svg(out, symbol, cx + cw / 2.0, cy + ch / 2.0, style.center_ace_px(), style);
        }
        CenterContent::Single(symbol) => {
            symbol_svg(out, symbol, cx + cw / 2.0, cy + ch / 2.0, style.pip_px(), style);
        }
        CenterContent::Pips(pips) => {
            for pip in pips {
                symbol_svg(
                    out,
                    &pip.symbol,
                    cx + cw * pip.position.x / 100.0,
                    cy + ch * pip.position.y / 100.0,
                    style.pip_px(),
                    style,
                );
            }
        }
        CenterContent::Frame(frame) => frame_svg(out, index, frame, style, (cx, cy, cw, ch)),
    }
}

fn frame_svg(
    out: &mut String,
    index: usize,
    frame: &FaceFrameContent,
    style: &StyleVars,
    (cx, cy, cw, ch): (f32, f32, f32, f32),
) {
    let margin = style.face_frame_margin_px as f32;
    let fx = cx + margin;
    let fy = cy + margin;
    let fw = (cw - 2.0 * margin).max(0.0);
    let fh = (ch - 2.0 * margin).max(0.0);
    let radius = (style.face_frame_radius_px as f32).min(fw / 2.0).min(fh / 2.0);
    let color = style.tint_color(frame.tint);

    match &frame.content {
        FrameContent::Artwork { image, alt } => {
            out.push_str(&format!(
                r#"<clipPath id="frame-clip-{index}"><rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{r}"/></clipPath>"#,
                x = num(fx),
                y = num(fy),
                w = num(fw),
                h = num(fh),
                r = num(radius)
            ));
            out.push_str(&format!(
                r#"<image x="{x}" y="{y}" width="{w}" height="{h}" preserveAspectRatio="xMidYMid slice" clip-path="url(#frame-clip-{index})" aria-label="{alt}" xlink:href="{href}"/>"#,
                x = num(fx),
                y = num(fy),
                w = num(fw),
                h = num(fh),
                alt = escape_xml(alt),
                href = image.data_url()
            ));
        }
        FrameContent::Label(label) => {
            let size = style.corner_rank_px() * LONG_LABEL_RATIO * 1.5;
            out.push_str(&format!(
                r#"<text x="{x}" y="{y}" text-anchor="middle" font-family="{font_family}" font-size="{size}" font-weight="bold" fill="{fill}">{label}</text>"#,
                x = num(fx + fw / 2.0),
                y = num(fy + fh / 2.0 + size * 0.35),
                font_family = escape_xml(&style.label_font),
                size = num(size),
                fill = color,
                label = escape_xml(label)
            ));
        }
        FrameContent::Empty => {}
    }

    out.push_str(&format!(
        r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{r}" fill="none" stroke="{stroke}" stroke-width="{sw}"/>"#,
        x = num(fx),
        y = num(fy),
        w = num(fw),
        h = num(fh),
        r = num(radius),
        stroke = color,
        sw = num((1.5 * style.card_scale).max(1.0))
    ));
}

/// Draw a glyph or icon centered on (x, y)
fn symbol_svg(out: &mut String, symbol: &Symbol, x: f32, y: f32, size: f32, style: &StyleVars) {
    match symbol {
        Symbol::Glyph { ch, tint } => {
            out.push_str(&format!(
                r#"<text x="{x}" y="{y}" text-anchor="middle" font-family="{font_family}" font-size="{size}" fill="{fill}">{ch}</text>"#,
                x = num(x),
                y = num(y + size * 0.35),
                font_family = escape_xml(&style.label_font),
                size = num(size),
                fill = style.tint_color(*tint),
                ch = ch
            ));
        }
        Symbol::Icon { image, alt } => {
            out.push_str(&format!(
                r#"<image x="{x}" y="{y}" width="{s}" height="{s}" aria-label="{alt}" xlink:href="{href}"/>"#,
                x = num(x - size / 2.0),
                y = num(y - size / 2.0),
                s = num(size),
                alt = escape_xml(alt),
                href = image.data_url()
            ));
        }
    }
}

fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
