//! # Waypost
//!
//! A stack-navigation router for component-based terminal UIs, plus the demo
//! app that exercises it (see `src/main.rs`).
//!
//! The [`core`] module is the library proper: a [`NavigationPath`]
//! back-stack, a [`Router`] owning it together with the app's
//! destination-to-view mapping ([`ViewMap`]), and an explicit subscription
//! mechanism ([`Router::subscribe`]) so a UI layer can re-derive its screen
//! stack whenever the path changes. The [`tui`] module is the ratatui
//! adapter and the example screens.

pub mod core;
pub mod tui;

pub use crate::core::observe::{PathEvent, SubscriptionId};
pub use crate::core::opaque::OpaqueValue;
pub use crate::core::path::{NavigationPath, PathElement};
pub use crate::core::router::{Router, ViewMap};
