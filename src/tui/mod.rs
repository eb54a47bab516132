//! # TUI Adapter
//!
//! The ratatui-specific layer: terminal I/O, the event loop, and the demo
//! screens. This is the only module that knows about ratatui and crossterm;
//! the navigation core underneath is UI-agnostic.
//!
//! ## Redraw Strategy
//!
//! The loop redraws only when something happened: an input event arrived,
//! the terminal resized, or the router reported a path change through its
//! subscription (a dirty flag set by the listener). Between events it
//! sleeps in `poll_event_timeout`, so an idle app costs nothing.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ─▶ TuiEvent ─▶ top screen ─▶ NavRequest ─▶ Router
//!                                                        │ notify
//!                              ScreenStack::sync ◀── dirty flag
//! ```
//!
//! Events the top screen declines fall through to global bindings:
//! Esc pops (quits at the root), `q` quits, Ctrl+C always quits.

pub mod container;
pub mod event;
pub mod screen;
pub mod screens;
pub mod ui;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, info};

use crate::core::config::ResolvedConfig;
use crate::core::router::{Router, ViewMap};
use crate::tui::container::ScreenStack;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screen::NavRequest;
use crate::tui::screens::{CheckoutViews, HomeScreen};

/// Applies a screen's navigation request to the router.
///
/// Returns `false` when the request asks the app to quit.
pub fn apply_request<M: ViewMap>(router: &mut Router<M>, request: NavRequest<M::Destination>) -> bool {
    match request {
        NavRequest::Push(destination) => router.push(destination),
        NavRequest::PushValue(value) => router.push_opaque(value),
        NavRequest::Pop => router.pop(),
        NavRequest::PopToRoot => router.pop_to_root(),
        NavRequest::Quit => return false,
    }
    true
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let views = CheckoutViews::new(config.event_name.clone(), config.ticket_price_cents);
    let mut router = Router::new(views);
    let mut stack: ScreenStack<CheckoutViews> =
        ScreenStack::new(Box::new(HomeScreen::new(config.event_name.clone())));

    // The UI layer subscribes once; every path mutation flips this flag and
    // the loop re-derives the screen stack before the next draw.
    let dirty = Rc::new(Cell::new(true));
    let path_changed = dirty.clone();
    let _subscription = router.subscribe(move |event| {
        debug!("path changed: {:?}", event);
        path_changed.set(true);
    });

    let mut terminal = ratatui::init();
    let poll_timeout = Duration::from_millis(config.poll_timeout_ms);
    let mut needs_redraw = true;
    let mut should_quit = false;

    while !should_quit {
        if dirty.replace(false) {
            stack.sync(&router);
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &mut stack))?;
            needs_redraw = false;
        }

        // Process first event + drain all pending events before next draw.
        let first_event = poll_event_timeout(poll_timeout);
        if first_event.is_none() {
            continue;
        }
        needs_redraw = true;

        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // Keep the visible screen current within the batch: an earlier
            // event may already have changed the path.
            if dirty.replace(false) {
                stack.sync(&router);
            }

            if let Some(request) = stack.top().handle_event(&event) {
                if !apply_request(&mut router, request) {
                    should_quit = true;
                }
                continue;
            }

            // Global bindings for events the screen ignored
            match event {
                TuiEvent::Escape => {
                    if router.can_go_back() {
                        router.pop();
                    } else {
                        should_quit = true;
                    }
                }
                TuiEvent::InputChar('q') => should_quit = true,
                _ => {}
            }
        }
    }

    info!("Exiting at depth {}", router.depth());
    ratatui::restore();
    Ok(())
}
