//! # Detail Screen
//!
//! Ticket detail for the configured event. Paying generates a fresh payment
//! ID and pushes the success screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use uuid::Uuid;

use crate::tui::event::TuiEvent;
use crate::tui::screen::{NavRequest, Screen};
use crate::tui::screens::Destination;

pub struct DetailScreen {
    event_name: String,
    ticket_price_cents: u32,
}

impl DetailScreen {
    pub fn new(event_name: String, ticket_price_cents: u32) -> Self {
        Self {
            event_name,
            ticket_price_cents,
        }
    }
}

impl Screen<Destination> for DetailScreen {
    fn title(&self) -> &'static str {
        "Detail"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Ticket Detail ")
            .padding(Padding::uniform(1));

        let lines = vec![
            Line::from(Span::styled(
                self.event_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("General admission, one seat."),
            Line::from(""),
            Line::from(format!("Price: {}", format_price(self.ticket_price_cents))),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to pay",
                Style::default().fg(Color::Green),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavRequest<Destination>> {
        match event {
            TuiEvent::Submit | TuiEvent::InputChar('p') => {
                Some(NavRequest::Push(Destination::Success {
                    payment_id: Uuid::new_v4().to_string(),
                }))
            }
            _ => None,
        }
    }

    fn help_line(&self) -> &'static str {
        " Enter Pay  Esc Back  q Quit "
    }
}

/// Formats a cent amount as dollars, e.g. `1950` -> `$19.50`.
fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1950), "$19.50");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(10000), "$100.00");
    }

    #[test]
    fn test_pay_pushes_success_with_a_payment_id() {
        let mut detail = DetailScreen::new("Meetup".to_string(), 1950);
        match detail.handle_event(&TuiEvent::Submit) {
            Some(NavRequest::Push(Destination::Success { payment_id })) => {
                assert!(!payment_id.is_empty());
            }
            other => panic!("expected Push(Success), got {other:?}"),
        }
    }

    #[test]
    fn test_each_payment_gets_a_distinct_id() {
        let mut detail = DetailScreen::new("Meetup".to_string(), 1950);
        let first = match detail.handle_event(&TuiEvent::Submit) {
            Some(NavRequest::Push(Destination::Success { payment_id })) => payment_id,
            other => panic!("expected Push(Success), got {other:?}"),
        };
        let second = match detail.handle_event(&TuiEvent::InputChar('p')) {
            Some(NavRequest::Push(Destination::Success { payment_id })) => payment_id,
            other => panic!("expected Push(Success), got {other:?}"),
        };
        assert_ne!(first, second);
    }
}
