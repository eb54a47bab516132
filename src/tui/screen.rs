use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::opaque::OpaqueValue;
use crate::tui::event::TuiEvent;

/// What a screen wants the router to do next.
///
/// Screens never touch the router directly; they return one of these from
/// `handle_event` and the event loop applies it. Keeps screens testable
/// without a router or a terminal.
#[derive(Debug)]
pub enum NavRequest<D> {
    /// Push a typed destination.
    Push(D),
    /// Push an arbitrary value through the untyped escape hatch.
    PushValue(OpaqueValue),
    Pop,
    PopToRoot,
    Quit,
}

/// A screen in the navigation stack.
///
/// `render` takes `&mut self` so screens can manage presentation state
/// (list selections, cached layout) during the render pass, in line with
/// Ratatui's `StatefulWidget` pattern. `handle_event` receives low-level
/// `TuiEvent`s and may answer with a [`NavRequest`]; events it returns
/// `None` for fall through to the event loop's global bindings.
pub trait Screen<D> {
    /// Short name shown in the breadcrumb title bar.
    fn title(&self) -> &'static str;

    /// Render the screen into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Handle an input event, optionally requesting navigation.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavRequest<D>>;

    /// Key hints for the bottom help line.
    fn help_line(&self) -> &'static str;
}
