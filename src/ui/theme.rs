//! Color theme constants for the planetarium.
//!
//! A night-sky palette: deep navy background, pale blue text, white for
//! anything the user should look at.

use ratatui::style::Color;

// ============================================================================
// Sky
// ============================================================================

/// Background of the whole screen
pub const COLOR_SKY: Color = Color::Rgb(8, 12, 32);

/// Title text - pale blue
pub const COLOR_TITLE: Color = Color::Rgb(219, 234, 254);

/// Secondary text (subtitle, headings)
pub const COLOR_SUBTITLE: Color = Color::Rgb(147, 180, 230);

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::Rgb(70, 80, 110);

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

// ============================================================================
// Cards
// ============================================================================

/// Border of a card that can still be picked
pub const COLOR_CARD_BORDER: Color = Color::Rgb(110, 130, 170);

/// Border of the card under the keyboard cursor
pub const COLOR_CARD_CURSOR: Color = Color::Rgb(191, 219, 254);

/// Border and glyph of the chosen card
pub const COLOR_CARD_SELECTED: Color = Color::White;

/// Star glyph on a card
pub const COLOR_STAR: Color = Color::Rgb(253, 230, 138);

// ============================================================================
// Panel
// ============================================================================

/// Border of the question panel
pub const COLOR_PANEL_BORDER: Color = Color::Rgb(45, 55, 90);

/// Template prefix/suffix around the draft
pub const COLOR_TEMPLATE: Color = Color::Rgb(120, 150, 200);

/// Enabled button
pub const COLOR_BUTTON: Color = Color::Rgb(23, 37, 84);

/// Flight text
pub const COLOR_FLIGHT: Color = Color::White;
