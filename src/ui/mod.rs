//! UI rendering for the planetarium screen.
//!
//! Top to bottom:
//! - Header: title and subtitle
//! - Heading: changes once a card is chosen
//! - Card row: three star cards
//! - Question panel: prompt plus compose box or reply (after a pick)
//! - Footer: keybind hints
//!
//! Flights are drawn last, over everything, at a fixed anchor.
//!
//! Rendering is a pure function of the [`App`] apart from the hit-area
//! registry, which is rebuilt every frame.

mod cards;
mod flights;
mod header;
pub mod interaction;
pub mod layout;
mod panel;
mod theme;

pub use cards::{card_label, CardLook};
pub use flights::flight_rect;
pub use header::{heading_text, HEADING_CHOSEN, HEADING_IDLE, SUBTITLE, TITLE};
pub use layout::LayoutContext;
pub use panel::{compose_line, BADGE, NEXT_LABEL, SEND_LABEL};
pub use theme::*;

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;
use cards::render_cards;
use flights::render_flights;
use header::{render_footer, render_header, render_heading};
use panel::{render_panel, PanelConfig};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();

    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(COLOR_SKY)), area);

    let ctx = LayoutContext::from_rect(area);
    let (_, card_height) = ctx.card_size();
    let [header_area, heading_area, cards_area, panel_area, footer_area] = Layout::vertical([
        Constraint::Length(ctx.header_height()),
        Constraint::Length(2),
        Constraint::Length(card_height + 1),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);

    let session = app.controller.session();
    let phase = session.phase();

    render_header(frame, header_area);
    render_heading(frame, heading_area, phase);
    render_cards(frame, cards_area, session, app.card_cursor, &mut app.hit_areas);

    if session.selected_card().is_some() {
        let config = PanelConfig {
            session,
            template: &app.controller.pools().template,
            show_cursor: app.tick_count % 60 < 30,
        };
        render_panel(frame, panel_area, &config, &mut app.hit_areas);
    }

    render_footer(frame, footer_area, phase);
    render_flights(frame, area, session.active_flights(), &app.flights);
}
