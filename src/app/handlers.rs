//! Event and message handlers for the App.

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::{debug, info};

use super::{App, AppMessage};
use crate::events::UiEvent;
use crate::input::{command_for_key, command_for_paste, InputCommand};
use crate::ui::interaction::ClickAction;

impl App {
    /// Apply a user event to the controller and start any side effects.
    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::CardClicked(index) => {
                if self.controller.select_card(index) {
                    self.card_cursor = index;
                    info!("Star {} chosen", index + 1);
                    self.mark_dirty();
                }
            }
            UiEvent::TextChanged(text) => {
                if self.controller.update_draft(text) {
                    self.mark_dirty();
                }
            }
            UiEvent::SendClicked => {
                if let Some(id) = self.controller.send_answer() {
                    self.flights.schedule(id);
                    info!("Answer sent");
                    self.mark_dirty();
                } else {
                    debug!("Send ignored in {:?}", self.controller.phase());
                }
            }
            UiEvent::ResetClicked => {
                self.controller.reset();
                self.card_cursor = 0;
                info!("Moved on to the next stars");
                self.mark_dirty();
            }
        }
    }

    /// Handle a message from a background task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::FlightLanded { id } => {
                self.flights.landed(id);
                if self.controller.remove_flight(id) {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Apply a keyboard command.
    pub fn handle_command(&mut self, command: InputCommand) {
        match command {
            InputCommand::Ui(event) => self.dispatch(event),
            InputCommand::CursorLeft => self.move_card_cursor(false),
            InputCommand::CursorRight => self.move_card_cursor(true),
            InputCommand::Quit => self.quit(),
        }
    }

    /// Handle a raw terminal event.
    pub fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Resize(width, height) => self.update_terminal_dimensions(width, height),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(command) = command_for_key(&key, self.session(), self.card_cursor) {
                    self.handle_command(command);
                }
            }
            Event::Paste(text) => {
                if let Some(command) = command_for_paste(&text, self.session()) {
                    self.handle_command(command);
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                        debug!("Click: {:?}", action);
                        self.dispatch(action.to_event());
                    }
                }
                MouseEventKind::Moved => {
                    if self.hit_areas.update_hover(mouse.column, mouse.row) {
                        if let Some(ClickAction::SelectCard(index)) = self.hit_areas.hovered_action() {
                            self.card_cursor = index;
                        }
                        self.mark_dirty();
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PoolConfig, StartupConfig};
    use crate::state::Phase;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;

    fn app() -> App {
        App::from_config(&StartupConfig::default().with_seed(5), PoolConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_terminal_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_digit_selects_card() {
        let mut app = app();
        app.needs_redraw = false;
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session().selected_card(), Some(2));
        assert_eq!(app.card_cursor, 2);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.card_cursor, 2);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.card_cursor, 0);
    }

    #[test]
    fn test_noop_does_not_mark_dirty() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        app.needs_redraw = false;
        app.dispatch(UiEvent::CardClicked(2));
        assert!(!app.needs_redraw);
        assert_eq!(app.session().selected_card(), Some(0));
    }

    #[tokio::test]
    async fn test_typing_and_enter_sends() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        type_text(&mut app, "wonder");
        assert_eq!(app.session().draft_answer(), "wonder");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.phase(), Phase::Replied);
        assert_eq!(app.flights.pending_count(), 1);
        assert_eq!(app.session().active_flights()[0].text, "I think it is wonder");
    }

    #[tokio::test]
    async fn test_landed_message_removes_flight() {
        let mut app = app();
        app.dispatch(UiEvent::CardClicked(0));
        app.dispatch(UiEvent::TextChanged("hope".into()));
        app.dispatch(UiEvent::SendClicked);
        let id = app.session().active_flights()[0].id;

        app.needs_redraw = false;
        app.handle_message(AppMessage::FlightLanded { id });
        assert!(app.session().active_flights().is_empty());
        assert_eq!(app.flights.pending_count(), 0);
        assert!(app.needs_redraw);

        // A second landing for the same id changes nothing
        app.needs_redraw = false;
        app.handle_message(AppMessage::FlightLanded { id });
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_mouse_click_uses_hit_areas() {
        let mut app = app();
        app.hit_areas.register(Rect::new(10, 10, 5, 5), ClickAction::SelectCard(1));
        app.handle_terminal_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 11,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.session().selected_card(), Some(1));
    }

    #[test]
    fn test_hover_moves_cursor() {
        let mut app = app();
        app.hit_areas.register(Rect::new(0, 0, 5, 5), ClickAction::SelectCard(2));
        app.handle_terminal_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.card_cursor, 2);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_resize_marks_dirty_once() {
        let mut app = app();
        app.needs_redraw = false;
        app.handle_terminal_event(Event::Resize(120, 40));
        assert!(app.needs_redraw);
        assert_eq!(app.terminal_width(), 120);

        app.needs_redraw = false;
        app.handle_terminal_event(Event::Resize(120, 40));
        assert!(!app.needs_redraw);
    }
}
