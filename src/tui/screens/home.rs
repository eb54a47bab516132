//! # Home Screen
//!
//! Root of the demo app: a menu of ways to leave the root. The first entry
//! pushes a typed destination; the next two go through the untyped escape
//! hatch, one with a value the view map renders and one without, so both
//! sides of that hatch are visible in the running app.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::opaque::OpaqueValue;
use crate::tui::event::TuiEvent;
use crate::tui::screen::{NavRequest, Screen};
use crate::tui::screens::Destination;

const MENU_LABELS: [&str; 4] = [
    "View ticket details",
    "Venue notes (raw string push)",
    "Push a value with no registered view",
    "Quit",
];

const VENUE_NOTES: &str = "Doors open 18:30.\n\
    Talks start 19:00 sharp.\n\
    The stream link goes live ten minutes before the first talk.";

pub struct HomeScreen {
    event_name: String,
    selected: usize,
    list_state: ListState,
}

impl HomeScreen {
    pub fn new(event_name: String) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            event_name,
            selected: 0,
            list_state,
        }
    }

    #[cfg(test)]
    pub fn selected(&self) -> usize {
        self.selected
    }

    fn request_for_selection(&self) -> NavRequest<Destination> {
        match self.selected {
            0 => NavRequest::Push(Destination::Detail),
            1 => NavRequest::PushValue(OpaqueValue::new(VENUE_NOTES.to_string())),
            // Deliberately unmapped: CheckoutViews only claims Strings.
            2 => NavRequest::PushValue(OpaqueValue::new(0xBAD_C0DEu32)),
            _ => NavRequest::Quit,
        }
    }
}

impl Screen<Destination> for HomeScreen {
    fn title(&self) -> &'static str {
        "Home"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, menu_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let header = Paragraph::new(self.event_name.as_str())
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, header_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Tickets ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Move  Enter Select ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = MENU_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(*label, style))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, menu_area, &mut self.list_state);
    }

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavRequest<Destination>> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(MENU_LABELS.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Some(self.request_for_selection()),
            _ => None,
        }
    }

    fn help_line(&self) -> &'static str {
        " ↑↓ Move  Enter Select  q Quit "
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut home = HomeScreen::new("Meetup".to_string());

        home.handle_event(&TuiEvent::CursorUp);
        assert_eq!(home.selected(), 0);

        for _ in 0..10 {
            home.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(home.selected(), MENU_LABELS.len() - 1);
    }

    #[test]
    fn test_submit_on_first_entry_pushes_detail() {
        let mut home = HomeScreen::new("Meetup".to_string());
        match home.handle_event(&TuiEvent::Submit) {
            Some(NavRequest::Push(Destination::Detail)) => {}
            other => panic!("expected Push(Detail), got {other:?}"),
        }
    }

    #[test]
    fn test_submit_on_notes_entry_pushes_a_string_value() {
        let mut home = HomeScreen::new("Meetup".to_string());
        home.handle_event(&TuiEvent::CursorDown);
        match home.handle_event(&TuiEvent::Submit) {
            Some(NavRequest::PushValue(value)) => {
                assert!(value.is::<String>());
            }
            other => panic!("expected PushValue(String), got {other:?}"),
        }
    }

    #[test]
    fn test_submit_on_last_entry_quits() {
        let mut home = HomeScreen::new("Meetup".to_string());
        for _ in 0..MENU_LABELS.len() {
            home.handle_event(&TuiEvent::CursorDown);
        }
        assert!(matches!(
            home.handle_event(&TuiEvent::Submit),
            Some(NavRequest::Quit)
        ));
    }
}
