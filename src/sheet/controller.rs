use crate::config::ViewMode;
use crate::model::{deck, Action, CardIdentity, SheetState};
use crate::render::card::render_card;
use crate::render::element::RenderedCard;
use crate::render::style::StyleVars;

use super::layout::{LayoutStyle, ScrollOffset};

/// One fixed position on the sheet
#[derive(Debug, Clone)]
pub struct Slot {
    identity: CardIdentity,
    content: Option<RenderedCard>,
}

impl Slot {
    fn new(identity: CardIdentity) -> Self {
        Self {
            identity,
            content: None,
        }
    }

    pub fn identity(&self) -> CardIdentity {
        self.identity
    }

    pub fn content(&self) -> Option<&RenderedCard> {
        self.content.as_ref()
    }
}

/// Owns the 54 slots and the current state snapshot
///
/// Every state change re-renders every slot; there is no diffing.
#[derive(Debug, Clone)]
pub struct Sheet {
    state: SheetState,
    style: StyleVars,
    slots: Vec<Slot>,
    layout: LayoutStyle,
    scroll: ScrollOffset,
    render_passes: u64,
}

impl Sheet {
    /// Create the slots once and perform the initial render
    pub fn new(state: SheetState) -> Self {
        let style = StyleVars::project(&state);
        let mut sheet = Self {
            state,
            style,
            slots: deck().into_iter().map(Slot::new).collect(),
            layout: LayoutStyle::default(),
            scroll: ScrollOffset::default(),
            render_passes: 0,
        };
        sheet.render();
        sheet
    }

    pub fn state(&self) -> &SheetState {
        &self.state
    }

    pub fn style(&self) -> &StyleVars {
        &self.style
    }

    pub fn view(&self) -> ViewMode {
        self.state.view()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn cards(&self) -> impl Iterator<Item = &RenderedCard> {
        self.slots.iter().filter_map(Slot::content)
    }

    pub fn card(&self, identity: CardIdentity) -> Option<&RenderedCard> {
        self.slots
            .iter()
            .find(|slot| slot.identity == identity)
            .and_then(Slot::content)
    }

    pub fn layout(&self) -> LayoutStyle {
        self.layout
    }

    pub fn set_layout(&mut self, layout: LayoutStyle) {
        self.layout = layout;
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    pub fn set_scroll(&mut self, scroll: ScrollOffset) {
        self.scroll = scroll;
    }

    pub fn render_passes(&self) -> u64 {
        self.render_passes
    }

    /// Apply one mutation and re-render the whole sheet
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("Dispatch {:?}", ActionName(&action));
        self.state = self.state.apply(action);
        self.render();
    }

    /// View-tab selection
    pub fn set_view(&mut self, view: ViewMode) {
        self.dispatch(Action::SetView(view));
    }

    /// Full render pass: project styles, then clear and rebuild every slot
    pub fn render(&mut self) {
        self.style = StyleVars::project(&self.state);
        let view = self.state.view();

        for slot in &mut self.slots {
            slot.content.take();
            slot.content = Some(render_card(slot.identity, &self.state, view));
        }

        self.render_passes += 1;
        log::debug!(
            "Render pass {} ({} view, {} slots)",
            self.render_passes,
            view.as_str(),
            self.slots.len()
        );
    }
}

/// Action name without image payloads, for logs
struct ActionName<'a>(&'a Action);

impl std::fmt::Debug for ActionName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::SetSuitIcon(suit, _) => write!(f, "SetSuitIcon({})", suit.id()),
            Action::SetFaceArtwork(identity, _) => {
                write!(f, "SetFaceArtwork({})", identity.slot_key())
            }
            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, ImageData, Rank, Suit};
    use crate::render::element::{CardFace, CenterContent, FrameContent};

    #[test]
    fn test_sheet_has_54_rendered_slots() {
        let sheet = Sheet::new(SheetState::default());
        assert_eq!(sheet.slots().len(), 54);
        assert_eq!(sheet.cards().count(), 54);
        assert_eq!(sheet.render_passes(), 1);
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let mut sheet = Sheet::new(SheetState::default());
        let before: Vec<RenderedCard> = sheet.cards().cloned().collect();

        sheet.render();
        sheet.render();

        let after: Vec<RenderedCard> = sheet.cards().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(sheet.slots().len(), 54);
    }

    #[test]
    fn test_every_change_rerenders_all_slots() {
        let mut sheet = Sheet::new(SheetState::default());
        sheet.dispatch(Action::SetSuitColor(Suit::Clubs, Color::rgb(1, 2, 3)));
        sheet.dispatch(Action::SetPipSize(12.0));
        assert_eq!(sheet.render_passes(), 3);
        assert_eq!(sheet.style().suit_color(Suit::Clubs), Color::rgb(1, 2, 3));
        assert_eq!(sheet.style().pip_font, 12.0);
    }

    #[test]
    fn test_back_view_with_custom_color() {
        let mut sheet = Sheet::new(SheetState::default());
        sheet.dispatch(Action::SetBackCardColor("#112233".parse().unwrap()));
        sheet.set_view(ViewMode::Back);

        assert_eq!(sheet.view(), ViewMode::Back);
        assert_eq!(sheet.style().card_back_bg.to_hex(), "#112233");
        for card in sheet.cards() {
            assert_eq!(card.face, CardFace::Back);
            assert!(card.text_content().is_empty());
        }
    }

    #[test]
    fn test_change_is_isolated_to_its_effect() {
        type Expect = fn(&mut StyleVars);
        let cases: [(Action, Expect); 6] = [
            (Action::SetBackCardColor(Color::rgb(9, 9, 9)), |s| {
                s.card_back_bg = Color::rgb(9, 9, 9)
            }),
            (Action::SetFrontCardColor(Color::rgb(1, 1, 1)), |s| {
                s.card_front_bg = Color::rgb(1, 1, 1)
            }),
            (Action::SetPipSize(14.0), |s| s.pip_font = 14.0),
            (Action::SetFaceMargin(7), |s| s.face_frame_margin_px = 7),
            (Action::SetCenterInset(25.0), |s| s.center_inset_percent = 25.0),
            (Action::SetSuitColor(Suit::Diamonds, Color::rgb(2, 3, 4)), |s| {
                s.suit_colors[1] = (Suit::Diamonds, Color::rgb(2, 3, 4))
            }),
        ];

        for (action, expect) in cases {
            let mut sheet = Sheet::new(SheetState::default());
            let mut expected = sheet.style().clone();
            expect(&mut expected);
            let label = format!("{:?}", action);

            sheet.dispatch(action);
            assert_eq!(sheet.style(), &expected, "{}", label);
        }
    }

    #[test]
    fn test_back_color_leaves_front_faces_unchanged() {
        let mut sheet = Sheet::new(SheetState::default());
        let front_before: Vec<RenderedCard> = sheet.cards().cloned().collect();

        sheet.dispatch(Action::SetBackCardColor(Color::rgb(9, 9, 9)));

        let front_after: Vec<RenderedCard> = sheet.cards().cloned().collect();
        assert_eq!(front_before, front_after);
    }

    #[test]
    fn test_face_art_lands_on_one_king() {
        let mut sheet = Sheet::new(SheetState::default());
        let king = CardIdentity::standard(Suit::Hearts, Rank::King);
        sheet.dispatch(Action::SetFaceArtwork(
            king,
            ImageData::from_bytes("image/png", b"art"),
        ));

        for suit in Suit::all() {
            let card = sheet.card(CardIdentity::standard(suit, Rank::King)).unwrap();
            let CardFace::Front {
                center: CenterContent::Frame(frame),
                ..
            } = &card.face
            else {
                panic!("king should have a frame");
            };
            if suit == Suit::Hearts {
                assert!(matches!(frame.content, FrameContent::Artwork { .. }));
            } else {
                assert_eq!(frame.content, FrameContent::Empty);
            }
        }
    }
}
