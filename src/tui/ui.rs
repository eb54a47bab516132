use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::container::ScreenStack;
use crate::tui::screens::CheckoutViews;

/// Top-level frame layout: breadcrumb title bar, screen body, help line.
pub fn draw_ui(frame: &mut Frame, stack: &mut ScreenStack<CheckoutViews>) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, body_area, help_area] = layout.areas(frame.area());

    // Title bar: where the user is in the stack, root-first.
    let title = Line::from(vec![
        Span::styled("Waypost", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(stack.breadcrumb(), Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(title, title_area);

    let top = stack.top();
    let help = top.help_line();
    top.render(frame, body_area);

    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::core::router::Router;
    use crate::tui::screens::{Destination, HomeScreen};

    fn demo_stack() -> (Router<CheckoutViews>, ScreenStack<CheckoutViews>) {
        let views = CheckoutViews::new("Meetup".to_string(), 1950);
        let router = Router::new(views);
        let stack = ScreenStack::new(Box::new(HomeScreen::new("Meetup".to_string())));
        (router, stack)
    }

    fn rendered_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = *buffer.area();
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_draw_ui_on_the_root_screen() {
        let (_, mut stack) = demo_stack();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| draw_ui(f, &mut stack)).unwrap();

        let text = rendered_text(&terminal);
        assert!(text.contains("Waypost"));
        assert!(text.contains("Home"));
        assert!(text.contains("View ticket details"));
    }

    #[test]
    fn test_title_bar_shows_the_full_breadcrumb() {
        let (mut router, mut stack) = demo_stack();
        router.push(Destination::Detail);
        router.push(Destination::Success {
            payment_id: "123".to_string(),
        });
        stack.sync(&router);

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &mut stack)).unwrap();

        let text = rendered_text(&terminal);
        assert!(text.contains("Home › Detail › Success"));
        assert!(text.contains("Payment ID: 123"));
    }
}
