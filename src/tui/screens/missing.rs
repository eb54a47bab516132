//! # Missing Screen
//!
//! Fallback for an opaque value the app's view map declined to render. The
//! untyped push escape hatch makes this reachable at runtime, so the failure
//! is shown instead of being swallowed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::tui::event::TuiEvent;
use crate::tui::screen::{NavRequest, Screen};

pub struct MissingScreen {
    type_name: String,
}

impl MissingScreen {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

// Generic over the destination type: the container needs this fallback for
// any app, and the screen itself never pushes.
impl<D> Screen<D> for MissingScreen {
    fn title(&self) -> &'static str {
        "Unknown"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" No View Registered ")
            .padding(Padding::uniform(1));

        let lines = vec![
            Line::from(Span::styled(
                "Nothing is registered to render this value.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Pushed value type: {}", self.type_name)),
            Line::from(""),
            Line::from(Span::styled(
                "Handle it in your ViewMap::view_for_value, or don't push it.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn handle_event(&mut self, _event: &TuiEvent) -> Option<NavRequest<D>> {
        None
    }

    fn help_line(&self) -> &'static str {
        " Esc Back  q Quit "
    }
}
