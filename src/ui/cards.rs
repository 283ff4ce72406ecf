//! The row of three star cards.

use std::path::Path;

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::{
    COLOR_CARD_BORDER, COLOR_CARD_CURSOR, COLOR_CARD_SELECTED, COLOR_DIM, COLOR_STAR,
    COLOR_SUBTITLE,
};
use crate::state::SessionState;

/// How a card should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLook {
    /// Nothing chosen yet, not under the cursor
    Open,
    /// Nothing chosen yet, under the keyboard cursor
    Focused,
    /// The chosen card
    Chosen,
    /// Another card was chosen
    Faded,
}

impl CardLook {
    pub fn for_card(index: usize, selected: Option<usize>, cursor: usize) -> Self {
        match selected {
            Some(chosen) if chosen == index => CardLook::Chosen,
            Some(_) => CardLook::Faded,
            None if cursor == index => CardLook::Focused,
            None => CardLook::Open,
        }
    }

    fn border_style(self) -> Style {
        match self {
            CardLook::Open => Style::default().fg(COLOR_CARD_BORDER),
            CardLook::Focused => Style::default().fg(COLOR_CARD_CURSOR),
            CardLook::Chosen => Style::default()
                .fg(COLOR_CARD_SELECTED)
                .add_modifier(Modifier::BOLD),
            CardLook::Faded => Style::default().fg(COLOR_DIM).add_modifier(Modifier::DIM),
        }
    }

    fn star_style(self) -> Style {
        match self {
            CardLook::Faded => Style::default().fg(COLOR_DIM),
            CardLook::Chosen => Style::default().fg(COLOR_STAR).add_modifier(Modifier::BOLD),
            _ => Style::default().fg(COLOR_STAR),
        }
    }
}

/// Display name for a card image identifier: the capitalized file stem.
///
/// `"stars/vega.png"` becomes `"Vega"`.
pub fn card_label(image: &str) -> String {
    let stem = Path::new(image)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| image.to_string());
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => stem,
    }
}

/// Render the card row and register a hit area for each pickable card.
pub fn render_cards(
    frame: &mut Frame,
    area: Rect,
    session: &SessionState,
    cursor: usize,
    hit_areas: &mut HitAreaRegistry,
) {
    let ctx = LayoutContext::new(frame.area().width, frame.area().height);
    let (card_width, card_height) = ctx.card_size();
    let cards = session.displayed_cards();

    let [row] = Layout::vertical([Constraint::Length(card_height)])
        .flex(Flex::Center)
        .areas(area);
    let slots = Layout::horizontal(cards.iter().map(|_| Constraint::Length(card_width)))
        .flex(Flex::Center)
        .spacing(ctx.card_spacing())
        .split(row);

    let selected = session.selected_card();
    for (index, (image, slot)) in cards.iter().zip(slots.iter()).enumerate() {
        let look = CardLook::for_card(index, selected, cursor);
        let hover = Style::default().fg(COLOR_CARD_CURSOR);
        let border_style = if look == CardLook::Open && hit_areas.is_pointer_over(*slot) {
            hover
        } else {
            look.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(format!(" {} ", index + 1)).alignment(Alignment::Center));

        let inner_height = slot.height.saturating_sub(2);
        let mut lines = Vec::new();
        let padding = inner_height.saturating_sub(2) / 2;
        for _ in 0..padding {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled("✦", look.star_style())));
        let label_style = if look == CardLook::Faded {
            Style::default().fg(COLOR_DIM)
        } else {
            Style::default().fg(COLOR_SUBTITLE)
        };
        lines.push(Line::from(Span::styled(card_label(image), label_style)));

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            *slot,
        );

        // Once a card is chosen the row is no longer interactive
        if selected.is_none() {
            hit_areas.register(*slot, ClickAction::SelectCard(index));
        }
    }
}
