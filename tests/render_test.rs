//! Rendering tests against ratatui's TestBackend.

mod common;

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use sakuseikan::app::App;
use sakuseikan::events::UiEvent;
use sakuseikan::ui::interaction::ClickAction;
use sakuseikan::ui::{
    self, card_label, BADGE, HEADING_CHOSEN, HEADING_IDLE, NEXT_LABEL, SEND_LABEL, SUBTITLE, TITLE,
};

use common::short_app;

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    terminal.draw(|f| ui::render(f, app)).unwrap();
}

fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen_contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
    rows(terminal).iter().any(|row| row.contains(needle))
}

fn find_action(app: &App, width: u16, height: u16, action: ClickAction) -> Option<(u16, u16)> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .find(|&(x, y)| app.hit_areas.hit_test(x, y) == Some(action))
}

fn click(app: &mut App, (column, row): (u16, u16)) {
    app.handle_terminal_event(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

#[test]
fn test_idle_screen_shows_title_heading_and_cards() {
    let mut app = short_app(1);
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    draw(&mut terminal, &mut app);

    assert!(screen_contains(&terminal, TITLE));
    assert!(screen_contains(&terminal, SUBTITLE));
    assert!(screen_contains(&terminal, HEADING_IDLE));
    for image in app.session().displayed_cards() {
        assert!(screen_contains(&terminal, &card_label(image)), "missing card {}", image);
    }
    assert!(!screen_contains(&terminal, BADGE));
    assert_eq!(app.hit_areas.len(), 3);
}

#[test]
fn test_clicking_a_card_shows_the_prompt() {
    let mut app = short_app(2);
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    draw(&mut terminal, &mut app);

    let target = find_action(&app, 100, 40, ClickAction::SelectCard(1)).unwrap();
    click(&mut app, target);
    assert_eq!(app.session().selected_card(), Some(1));

    draw(&mut terminal, &mut app);
    assert!(screen_contains(&terminal, HEADING_CHOSEN));
    assert!(screen_contains(&terminal, BADGE));
    assert!(screen_contains(&terminal, "What is time?"));
    assert!(screen_contains(&terminal, "I think it is ..."));
    assert!(screen_contains(&terminal, SEND_LABEL));

    // Cards are locked and the blank draft keeps the send button disabled
    assert!(app.hit_areas.is_empty());
}

#[test]
fn test_send_button_enables_with_text() {
    let mut app = short_app(3);
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    app.dispatch(UiEvent::CardClicked(0));
    app.dispatch(UiEvent::TextChanged("  ".to_string()));
    draw(&mut terminal, &mut app);
    assert!(find_action(&app, 100, 40, ClickAction::SendAnswer).is_none());

    app.dispatch(UiEvent::TextChanged("a long journey".to_string()));
    draw(&mut terminal, &mut app);
    assert!(screen_contains(&terminal, "I think it is a long journey"));
    assert!(find_action(&app, 100, 40, ClickAction::SendAnswer).is_some());
}

#[tokio::test]
async fn test_reply_and_flight_after_send() {
    let mut app = short_app(4);
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    app.dispatch(UiEvent::CardClicked(2));
    app.dispatch(UiEvent::TextChanged("hope".to_string()));
    draw(&mut terminal, &mut app);

    let send = find_action(&app, 100, 40, ClickAction::SendAnswer).unwrap();
    click(&mut app, send);
    draw(&mut terminal, &mut app);

    assert!(screen_contains(&terminal, "The stars are listening."));
    assert!(screen_contains(&terminal, NEXT_LABEL));
    assert!(!screen_contains(&terminal, SEND_LABEL));

    // The flight sits at the anchor: 60% down, 45% across
    let screen = rows(&terminal);
    let flight_row = &screen[24];
    let column = flight_row.find("I think it is hope").unwrap();
    assert!(flight_row[..column].chars().count() >= 45);

    let next = find_action(&app, 100, 40, ClickAction::NextStar).unwrap();
    click(&mut app, next);
    assert!(app.session().selected_card().is_none());

    // Back to idle, the flight is still drawn until it lands
    draw(&mut terminal, &mut app);
    assert!(screen_contains(&terminal, HEADING_IDLE));
    assert!(screen_contains(&terminal, "I think it is hope"));
}

#[test]
fn test_long_draft_keeps_tail_and_cursor_visible() {
    let mut app = short_app(6);
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    app.dispatch(UiEvent::CardClicked(0));
    app.dispatch(UiEvent::TextChanged(format!("{}END", "x".repeat(120))));
    draw(&mut terminal, &mut app);

    assert!(screen_contains(&terminal, "I think it is …"));
    assert!(screen_contains(&terminal, "xxxEND▏"));
}

#[test]
fn test_small_terminals_do_not_panic() {
    for (width, height) in [(50, 20), (20, 8), (1, 1)] {
        let mut app = short_app(5);
        app.dispatch(UiEvent::CardClicked(0));
        app.dispatch(UiEvent::TextChanged("resilience".to_string()));
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        draw(&mut terminal, &mut app);
    }
}
