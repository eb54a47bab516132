//! # Demo Screens
//!
//! The example app: a small ticket-checkout flow that exercises the router.
//!
//! ```text
//! Home (root) ──push──▶ Detail ──pay──▶ Success(payment_id)
//!      │
//!      └─push_value──▶ Note (raw String, mapped by view_for_value)
//!      └─push_value──▶ Missing (unmapped type, container fallback)
//! ```
//!
//! `Destination` is the closed set of typed screens; `CheckoutViews` is the
//! app's `ViewMap` implementation, with the exhaustive `match` the compiler
//! checks for totality.

mod detail;
mod home;
mod missing;
mod note;
mod success;

pub use detail::DetailScreen;
pub use home::HomeScreen;
pub use missing::MissingScreen;
pub use note::NoteScreen;
pub use success::SuccessScreen;

use crate::core::opaque::OpaqueValue;
use crate::core::router::ViewMap;
use crate::tui::screen::Screen;

/// Typed destinations the demo app can navigate to.
///
/// `Home` is not listed: the root screen lives outside the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    Detail,
    Success { payment_id: String },
}

/// Destination-to-screen mapping for the demo app.
pub struct CheckoutViews {
    event_name: String,
    ticket_price_cents: u32,
}

impl CheckoutViews {
    pub fn new(event_name: String, ticket_price_cents: u32) -> Self {
        Self {
            event_name,
            ticket_price_cents,
        }
    }
}

impl ViewMap for CheckoutViews {
    type Destination = Destination;
    type View = Box<dyn Screen<Destination>>;

    fn view_for(&self, destination: &Destination) -> Self::View {
        match destination {
            Destination::Detail => Box::new(DetailScreen::new(
                self.event_name.clone(),
                self.ticket_price_cents,
            )),
            Destination::Success { payment_id } => {
                Box::new(SuccessScreen::new(payment_id.clone()))
            }
        }
    }

    fn view_for_value(&self, value: &OpaqueValue) -> Option<Self::View> {
        // Raw strings are the one escape-hatch type this app renders.
        value
            .downcast_ref::<String>()
            .map(|text| Box::new(NoteScreen::new(text.clone())) as Self::View)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_for_covers_both_destinations() {
        let views = CheckoutViews::new("Meetup".to_string(), 1000);

        let detail = views.view_for(&Destination::Detail);
        assert_eq!(detail.title(), "Detail");

        let success = views.view_for(&Destination::Success {
            payment_id: "abc".to_string(),
        });
        assert_eq!(success.title(), "Success");
    }

    #[test]
    fn test_view_for_value_maps_strings_only() {
        let views = CheckoutViews::new("Meetup".to_string(), 1000);

        let note = views.view_for_value(&OpaqueValue::new("hi".to_string()));
        assert_eq!(note.map(|screen| screen.title()), Some("Note"));

        assert!(views.view_for_value(&OpaqueValue::new(42u32)).is_none());
    }
}
