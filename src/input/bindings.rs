//! Input bindings: control ids and raw values to state actions
//!
//! Each successful change is dispatched to the sheet, which re-renders.
//! Unparseable values are dropped and the previous value is kept, except
//! for the face-frame margin and radius which fall back to 0.

use std::path::Path;
use std::str::FromStr;

use crate::config::ViewMode;
use crate::error::{ConfigError, UploadError};
use crate::model::{Action, CardIdentity, Color, ImageData, Suit};
use crate::sheet::Sheet;

use super::upload::read_image;

/// A settings control, addressed by its form id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    FontSelect,
    FontCustom,
    FrontCardColor,
    BackCardColor,
    SuitColor(Suit),
    FaceMargin,
    FaceRadius,
    CardWidthMm,
    CardDpi,
    CornerRankSize,
    CenterAceSize,
    PipSize,
    CenterInset,
    View,
}

impl Control {
    pub fn from_id(id: &str) -> Option<Self> {
        let control = match id {
            "fontSelect" => Control::FontSelect,
            "fontCustom" => Control::FontCustom,
            "frontCardColor" => Control::FrontCardColor,
            "backCardColor" => Control::BackCardColor,
            "faceMargin" => Control::FaceMargin,
            "faceRadius" => Control::FaceRadius,
            "cardWidthMm" => Control::CardWidthMm,
            "cardDpi" => Control::CardDpi,
            "fontCornerRankSize" => Control::CornerRankSize,
            "fontAceCenterSize" => Control::CenterAceSize,
            "fontPipSize" => Control::PipSize,
            "centerInsetPercent" => Control::CenterInset,
            "view" => Control::View,
            other => {
                let suit = other.strip_prefix("color-")?;
                Control::SuitColor(Suit::from_id(suit)?)
            }
        };
        Some(control)
    }

    pub fn id(&self) -> String {
        match self {
            Control::FontSelect => "fontSelect".to_string(),
            Control::FontCustom => "fontCustom".to_string(),
            Control::FrontCardColor => "frontCardColor".to_string(),
            Control::BackCardColor => "backCardColor".to_string(),
            Control::SuitColor(suit) => format!("color-{}", suit.id()),
            Control::FaceMargin => "faceMargin".to_string(),
            Control::FaceRadius => "faceRadius".to_string(),
            Control::CardWidthMm => "cardWidthMm".to_string(),
            Control::CardDpi => "cardDpi".to_string(),
            Control::CornerRankSize => "fontCornerRankSize".to_string(),
            Control::CenterAceSize => "fontAceCenterSize".to_string(),
            Control::PipSize => "fontPipSize".to_string(),
            Control::CenterInset => "centerInsetPercent".to_string(),
            Control::View => "view".to_string(),
        }
    }

    /// Convert a raw control value to an action, or None if it is ignored
    pub fn parse(&self, raw: &str) -> Option<Action> {
        let action = match self {
            Control::FontSelect => Action::SetFontPreset(raw.to_string()),
            Control::FontCustom => Action::SetFontCustom(raw.to_string()),
            Control::FrontCardColor => Action::SetFrontCardColor(parse_color(raw)?),
            Control::BackCardColor => Action::SetBackCardColor(parse_color(raw)?),
            Control::SuitColor(suit) => Action::SetSuitColor(*suit, parse_color(raw)?),
            Control::FaceMargin => Action::SetFaceMargin(parse_px_or_zero(raw)),
            Control::FaceRadius => Action::SetFaceRadius(parse_px_or_zero(raw)),
            Control::CardWidthMm => Action::SetCardWidthMm(parse_positive(raw)?),
            Control::CardDpi => {
                let dpi = int_prefix(raw)
                    .and_then(|d| u32::try_from(d).ok())
                    .filter(|d| *d > 0)?;
                Action::SetCardDpi(dpi)
            }
            Control::CornerRankSize => Action::SetCornerRankSize(parse_positive(raw)?),
            Control::CenterAceSize => Action::SetCenterAceSize(parse_positive(raw)?),
            Control::PipSize => Action::SetPipSize(parse_positive(raw)?),
            Control::CenterInset => {
                let percent = float_prefix(raw).filter(|p| (0.0..50.0).contains(p))?;
                Action::SetCenterInset(percent)
            }
            Control::View => Action::SetView(ViewMode::from_tab(raw)),
        };
        Some(action)
    }
}

impl FromStr for Control {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Control::from_id(s).ok_or_else(|| ConfigError::InvalidValue(format!("unknown control {}", s)))
    }
}

fn parse_color(raw: &str) -> Option<Color> {
    raw.trim().parse().ok()
}

fn parse_positive(raw: &str) -> Option<f32> {
    float_prefix(raw).filter(|v| v.is_finite() && *v > 0.0)
}

fn parse_px_or_zero(raw: &str) -> u32 {
    int_prefix(raw)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

/// Leading integer of a form value: `"300.5"` reads as 300, `"12px"` as 12
fn int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign = usize::from(s.starts_with(['+', '-']));
    let end = sign + digit_run(&s[sign..]);
    if end == sign {
        return None;
    }
    s[..end].parse().ok()
}

/// Leading decimal number of a form value: `"63mm"` reads as 63
fn float_prefix(raw: &str) -> Option<f32> {
    let s = raw.trim_start();
    let sign = usize::from(s.starts_with(['+', '-']));
    let whole = digit_run(&s[sign..]);
    let mut end = sign + whole;

    let mut fraction = 0;
    if s[end..].starts_with('.') {
        fraction = digit_run(&s[end + 1..]);
        if whole > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole == 0 && fraction == 0 {
        return None;
    }

    if s[end..].starts_with(['e', 'E']) {
        let exp_sign = usize::from(s[end + 1..].starts_with(['+', '-']));
        let exp_digits = digit_run(&s[end + 1 + exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Where an uploaded image lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadTarget {
    SuitIcon(Suit),
    FaceArt(CardIdentity),
}

impl UploadTarget {
    pub fn action(self, image: ImageData) -> Action {
        match self {
            UploadTarget::SuitIcon(suit) => Action::SetSuitIcon(suit, image),
            UploadTarget::FaceArt(identity) => Action::SetFaceArtwork(identity, image),
        }
    }

    /// Parse a suit-icon slot (`hearts`)
    pub fn suit_icon(slot: &str) -> Result<Self, ConfigError> {
        Suit::from_id(slot.trim())
            .map(UploadTarget::SuitIcon)
            .ok_or_else(|| ConfigError::InvalidSuit(slot.to_string()))
    }

    /// Parse a face-art slot (`hearts:K`, `joker:JOKER-1`)
    pub fn face_art(slot: &str) -> Result<Self, ConfigError> {
        slot.trim().parse().map(UploadTarget::FaceArt)
    }
}

/// Apply one control change; returns whether the sheet changed
pub fn apply_setting(sheet: &mut Sheet, control: Control, raw: &str) -> bool {
    match control.parse(raw) {
        Some(action) => {
            sheet.dispatch(action);
            true
        }
        None => {
            log::debug!("Ignoring invalid value {:?} for {}", raw, control.id());
            false
        }
    }
}

/// Read an image and store it in the target slot
///
/// A failed read leaves the sheet untouched.
pub fn apply_upload(sheet: &mut Sheet, target: UploadTarget, path: &Path) -> Result<(), UploadError> {
    let image = read_image(path)?;
    sheet.dispatch(target.action(image));
    Ok(())
}
