//! Flight overlay: each sent answer drawn at the fixed anchor until it lands.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::layout::LayoutContext;
use super::theme::{COLOR_FLIGHT, COLOR_STAR, COLOR_SKY};
use crate::app::FlightScheduler;
use crate::state::FlightToken;

const TRAIL: &str = "✦ ";

/// Rect a flight's text occupies, clamped to the screen.
pub fn flight_rect(area: Rect, text: &str) -> Rect {
    let ctx = LayoutContext::from_rect(area);
    let (x, y) = ctx.flight_anchor();
    let wanted = u16::try_from(TRAIL.width() + text.width()).unwrap_or(u16::MAX);
    Rect {
        x: area.x + x,
        y: area.y + y,
        width: wanted.min(area.width.saturating_sub(x)),
        height: 1.min(area.height.saturating_sub(y)),
    }
}

/// Draw every flight in send order; later flights sit on top.
pub fn render_flights(
    frame: &mut Frame,
    area: Rect,
    flights: &[FlightToken],
    scheduler: &FlightScheduler,
) {
    for flight in flights {
        let rect = flight_rect(area, &flight.text);
        if rect.width == 0 || rect.height == 0 {
            continue;
        }

        // Fade out over the last third of the lifetime
        let fading = scheduler.progress(flight.id).unwrap_or(1.0) > 0.66;
        let mut text_style = Style::default().fg(COLOR_FLIGHT).bg(COLOR_SKY);
        text_style = if fading {
            text_style.add_modifier(Modifier::DIM)
        } else {
            text_style.add_modifier(Modifier::BOLD)
        };

        let line = Line::from(vec![
            Span::styled(TRAIL, Style::default().fg(COLOR_STAR).bg(COLOR_SKY)),
            Span::styled(flight.text.as_str(), text_style),
        ]);
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(line), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_rect_at_anchor() {
        let rect = flight_rect(Rect::new(0, 0, 100, 50), "I think it is hope");
        assert_eq!((rect.x, rect.y), (45, 30));
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 1);
    }

    #[test]
    fn test_flight_rect_clamped_to_screen() {
        let rect = flight_rect(Rect::new(0, 0, 40, 20), &"long ".repeat(20));
        assert_eq!(rect.x, 18);
        assert_eq!(rect.x + rect.width, 40);
    }

    #[test]
    fn test_flight_rect_huge_answer_fills_to_edge() {
        // 2 + 65_534 columns overflows u16
        let rect = flight_rect(Rect::new(0, 0, 100, 50), &"x".repeat(65_534));
        assert_eq!(rect.x, 45);
        assert_eq!(rect.width, 55);
    }
}
