//! Responsive layout helpers.
//!
//! [`LayoutContext`] holds the terminal dimensions and answers the few sizing
//! questions the screen needs: how big the cards are, whether the header
//! gets a spacer line, where the flight anchor sits.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Terminal size breakpoints
pub mod breakpoints {
    /// Narrow terminal (< 60 columns)
    pub const NARROW_WIDTH: u16 = 60;
    /// Short terminal (< 28 rows)
    pub const SHORT_HEIGHT: u16 = 28;
}

/// Full-size card dimensions
pub const CARD_WIDTH: u16 = 18;
pub const CARD_HEIGHT: u16 = 9;

/// Card dimensions for cramped terminals
pub const COMPACT_CARD_WIDTH: u16 = 14;
pub const COMPACT_CARD_HEIGHT: u16 = 6;

/// Flight anchor as a percentage of the screen (from the top, from the left)
pub const FLIGHT_ANCHOR_TOP_PERCENT: u16 = 60;
pub const FLIGHT_ANCHOR_LEFT_PERCENT: u16 = 45;

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Calculate a width as a percentage of terminal width.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100) as u16
    }

    /// Calculate a height as a percentage of terminal height.
    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage as u32) / 100) as u16
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::NARROW_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SHORT_HEIGHT
    }

    /// Check if the terminal is narrow or short.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// (width, height) of one card.
    pub fn card_size(&self) -> (u16, u16) {
        if self.is_compact() {
            (COMPACT_CARD_WIDTH, COMPACT_CARD_HEIGHT)
        } else {
            (CARD_WIDTH, CARD_HEIGHT)
        }
    }

    /// Gap between cards.
    pub fn card_spacing(&self) -> u16 {
        if self.is_narrow() {
            1
        } else {
            3
        }
    }

    /// Header rows: title, subtitle and a spacer when there is room.
    pub fn header_height(&self) -> u16 {
        if self.is_short() {
            2
        } else {
            3
        }
    }

    /// Top-left cell of the flight anchor.
    pub fn flight_anchor(&self) -> (u16, u16) {
        (
            self.percent_width(FLIGHT_ANCHOR_LEFT_PERCENT),
            self.percent_height(FLIGHT_ANCHOR_TOP_PERCENT),
        )
    }
}

/// Center a `width` x `height` rect inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Number of terminal rows `text` takes when wrapped at `width` columns.
///
/// A rough estimate that ignores word boundaries; good enough to size a
/// panel row.
pub fn wrapped_line_count(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let columns = text.width() as u32;
    columns.div_ceil(width as u32).clamp(1, u16::MAX as u32) as u16
}
