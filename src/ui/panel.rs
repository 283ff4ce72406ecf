//! The question panel: prompt, compose box, reply.
//!
//! Only drawn once a card has been chosen.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::{centered_rect, wrapped_line_count};
use super::theme::{
    COLOR_ACCENT, COLOR_BUTTON, COLOR_DIM, COLOR_PANEL_BORDER, COLOR_SKY, COLOR_SUBTITLE,
    COLOR_TEMPLATE, COLOR_TITLE,
};
use crate::config::AnswerTemplate;
use crate::state::SessionState;

pub const BADGE: &str = "QUESTION FROM THE STARS";
pub const SEND_LABEL: &str = "Travel with this answer";
pub const NEXT_LABEL: &str = "Go to the next star →";

/// Everything the panel needs to draw itself.
pub struct PanelConfig<'a> {
    pub session: &'a SessionState,
    pub template: &'a AnswerTemplate,
    /// Whether the text cursor is drawn after the draft
    pub show_cursor: bool,
}

pub fn render_panel(frame: &mut Frame, area: Rect, config: &PanelConfig, hit_areas: &mut HitAreaRegistry) {
    let session = config.session;
    let Some(prompt) = session.current_prompt() else {
        return;
    };

    let width = area.width.min(72);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_PANEL_BORDER));
    let inner = block.inner(panel);
    frame.render_widget(Clear, panel);
    frame.render_widget(block.style(Style::default().bg(COLOR_SKY)), panel);

    let prompt_height = wrapped_line_count(prompt, inner.width);
    let body_height = match session.reply_message() {
        Some(reply) if session.is_answer_sent() => wrapped_line_count(reply, inner.width),
        _ => 3,
    };
    let [badge_area, prompt_area, _, body_area, _, button_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(prompt_height),
        Constraint::Length(1),
        Constraint::Length(body_height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            BADGE,
            Style::default().fg(COLOR_SUBTITLE).add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center),
        badge_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            prompt,
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        prompt_area,
    );

    if session.is_answer_sent() {
        if let Some(reply) = session.reply_message() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    reply,
                    Style::default().fg(COLOR_TITLE).add_modifier(Modifier::ITALIC),
                ))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
                body_area,
            );
        }
        render_button(frame, button_area, NEXT_LABEL, ClickAction::NextStar, true, hit_areas);
    } else {
        render_compose(frame, body_area, config);
        render_button(
            frame,
            button_area,
            SEND_LABEL,
            ClickAction::SendAnswer,
            session.can_send(),
            hit_areas,
        );
    }
}

const CURSOR: &str = "▏";
const ELLIPSIS: &str = "…";

/// The compose line, e.g. `I think it is freedom▏`.
///
/// A draft wider than `width` columns is scrolled so that its tail and the
/// cursor stay in view.
pub fn compose_line<'a>(
    template: &'a AnswerTemplate,
    draft: &'a str,
    show_cursor: bool,
    width: u16,
) -> Line<'a> {
    let template_style = Style::default().fg(COLOR_TEMPLATE).add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled(template.prefix.as_str(), template_style)];
    if draft.is_empty() {
        spans.push(Span::styled("...", Style::default().fg(COLOR_DIM)));
    } else {
        // The cursor column is reserved even while it blinks off
        let fixed = template.prefix.width() + template.suffix.width() + CURSOR.width();
        let visible = draft_tail(draft, (width as usize).saturating_sub(fixed));
        if visible.len() < draft.len() {
            spans.push(Span::styled(ELLIPSIS, Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(visible, Style::default().fg(COLOR_ACCENT)));
    }
    if show_cursor {
        spans.push(Span::styled(CURSOR, Style::default().fg(COLOR_ACCENT)));
    }
    if !template.suffix.is_empty() {
        spans.push(Span::styled(template.suffix.as_str(), template_style));
    }
    Line::from(spans)
}

/// Longest tail of `draft` that fits in `budget` columns, leaving one column
/// for the ellipsis when the draft has to be cut.
fn draft_tail(draft: &str, budget: usize) -> &str {
    if draft.width() <= budget {
        return draft;
    }
    let room = budget.saturating_sub(ELLIPSIS.width());
    let mut used = 0;
    let mut start = draft.len();
    for (index, c) in draft.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > room {
            break;
        }
        start = index;
    }
    &draft[start..]
}

fn render_compose(frame: &mut Frame, area: Rect, config: &PanelConfig) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_DIM));
    let line = compose_line(
        config.template,
        config.session.draft_answer(),
        config.show_cursor,
        area.width.saturating_sub(2),
    );
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        area,
    );
}

fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    action: ClickAction,
    enabled: bool,
    hit_areas: &mut HitAreaRegistry,
) {
    let text = format!("[ {} ]", label);
    let rect = centered_rect(area, text.width() as u16, 1);
    let hover = Style::default()
        .fg(COLOR_BUTTON)
        .bg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);
    let style = if !enabled {
        Style::default().fg(COLOR_DIM)
    } else if hit_areas.is_pointer_over(rect) {
        hover
    } else {
        Style::default()
            .fg(COLOR_ACCENT)
            .bg(COLOR_BUTTON)
            .add_modifier(Modifier::BOLD)
    };
    frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);

    if enabled {
        hit_areas.register(rect, action);
    }
}
