//! # Success Screen
//!
//! Shown after a (pretend) payment goes through. Offers both ways down the
//! stack: one level back, or straight to the root.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::tui::event::TuiEvent;
use crate::tui::screen::{NavRequest, Screen};
use crate::tui::screens::Destination;

pub struct SuccessScreen {
    payment_id: String,
    paid_at: DateTime<Local>,
}

impl SuccessScreen {
    pub fn new(payment_id: String) -> Self {
        Self {
            payment_id,
            paid_at: Local::now(),
        }
    }
}

impl Screen<Destination> for SuccessScreen {
    fn title(&self) -> &'static str {
        "Success"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Payment Complete ")
            .padding(Padding::uniform(1));

        let lines = vec![
            Line::from(Span::styled(
                "✔ You're in!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Payment ID: {}", self.payment_id)),
            Line::from(format!("Paid {}", self.paid_at.format("%b %d, %H:%M"))),
            Line::from(""),
            Line::from(Span::styled(
                "b Back    r Home",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavRequest<Destination>> {
        match event {
            TuiEvent::InputChar('b') => Some(NavRequest::Pop),
            TuiEvent::InputChar('r') => Some(NavRequest::PopToRoot),
            _ => None,
        }
    }

    fn help_line(&self) -> &'static str {
        " b Back  r Home  Esc Back  q Quit "
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_and_root_requests() {
        let mut success = SuccessScreen::new("123".to_string());
        assert!(matches!(
            success.handle_event(&TuiEvent::InputChar('b')),
            Some(NavRequest::Pop)
        ));
        assert!(matches!(
            success.handle_event(&TuiEvent::InputChar('r')),
            Some(NavRequest::PopToRoot)
        ));
        assert!(success.handle_event(&TuiEvent::Submit).is_none());
    }
}
