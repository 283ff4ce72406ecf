//! Header, section heading and footer.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_DIM, COLOR_SUBTITLE, COLOR_TITLE};
use crate::input::hints_for;
use crate::state::Phase;

pub const TITLE: &str = "Planetarium Sakuseikan";
pub const SUBTITLE: &str = "Pick one card and let your thoughts travel";
pub const HEADING_IDLE: &str = "Which star's question will you hear?";
pub const HEADING_CHOSEN: &str = "A question from the star you chose";

/// Title and subtitle.
pub fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(COLOR_SUBTITLE))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// The line above the cards; changes once a card is chosen.
pub fn heading_text(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => HEADING_IDLE,
        Phase::Prompted | Phase::Replied => HEADING_CHOSEN,
    }
}

pub fn render_heading(frame: &mut Frame, area: Rect, phase: Phase) {
    let heading = Paragraph::new(Line::from(Span::styled(
        heading_text(phase),
        Style::default().fg(COLOR_TITLE),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}

/// Keybind hints and the spaced-out title.
pub fn render_footer(frame: &mut Frame, area: Rect, phase: Phase) {
    let dim = Style::default().fg(COLOR_DIM);
    let mut hints: Vec<Span> = Vec::new();
    for (i, hint) in hints_for(phase).iter().enumerate() {
        if i > 0 {
            hints.push(Span::styled("  ·  ", dim));
        }
        hints.push(Span::styled(hint.key, Style::default().fg(COLOR_SUBTITLE)));
        hints.push(Span::styled(format!(" {}", hint.description), dim));
    }

    let spaced_title: String = TITLE
        .to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let lines = vec![Line::from(hints), Line::from(Span::styled(spaced_title, dim))];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
