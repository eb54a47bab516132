//! # Note Screen
//!
//! Renders a raw string that was pushed through the untyped escape hatch.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::tui::event::TuiEvent;
use crate::tui::screen::{NavRequest, Screen};
use crate::tui::screens::Destination;

pub struct NoteScreen {
    text: String,
}

impl NoteScreen {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

impl Screen<Destination> for NoteScreen {
    fn title(&self) -> &'static str {
        "Note"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Note ")
            .padding(Padding::uniform(1));

        let paragraph = Paragraph::new(self.text.as_str())
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn handle_event(&mut self, _event: &TuiEvent) -> Option<NavRequest<Destination>> {
        None
    }

    fn help_line(&self) -> &'static str {
        " Esc Back  q Quit "
    }
}
