//! Sheet container layout (display mode, columns, gap, scroll)

/// Column count used for the on-screen flowing layout (one suit per row)
pub const FLOW_COLUMNS: u32 = 13;

/// Export grid: 6 columns x 9 rows for 54 cards
pub const EXPORT_COLUMNS: u32 = 6;

/// Default on-screen gap between cards in px
pub const DEFAULT_GAP_PX: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// Wrapping flow; the column count follows the viewport
    #[default]
    Flow,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnTemplate {
    #[default]
    Auto,
    /// `repeat(n, auto)`
    Repeat(u32),
}

/// Layout style of the sheet container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStyle {
    pub display: Display,
    pub columns: ColumnTemplate,
    pub gap_px: f32,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            display: Display::Flow,
            columns: ColumnTemplate::Auto,
            gap_px: DEFAULT_GAP_PX,
        }
    }
}

impl LayoutStyle {
    /// Fixed 6-column grid with no gap, used while exporting
    pub fn export_grid() -> Self {
        Self {
            display: Display::Grid,
            columns: ColumnTemplate::Repeat(EXPORT_COLUMNS),
            gap_px: 0.0,
        }
    }

    pub fn column_count(&self) -> u32 {
        match (self.display, self.columns) {
            (Display::Grid, ColumnTemplate::Repeat(n)) if n > 0 => n,
            _ => FLOW_COLUMNS,
        }
    }

    pub fn row_count(&self, cards: usize) -> u32 {
        let columns = self.column_count() as usize;
        cards.div_ceil(columns) as u32
    }

    /// CSS declarations for the container
    pub fn css(&self) -> String {
        let display = match self.display {
            Display::Flow => "display: flex; flex-wrap: wrap;".to_string(),
            Display::Grid => match self.columns {
                ColumnTemplate::Repeat(n) => {
                    format!("display: grid; grid-template-columns: repeat({}, auto);", n)
                }
                ColumnTemplate::Auto => "display: grid;".to_string(),
            },
        };
        format!("{} gap: {}px;", display, self.gap_px)
    }
}

/// Scroll position of the sheet viewport in px
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub top: f32,
    pub left: f32,
}
