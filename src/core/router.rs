//! # Router
//!
//! Single source of truth for what is currently on screen. The router owns
//! the navigation path, the observer set, and the app's destination-to-view
//! mapping, and it is the only place mutations and notifications meet:
//!
//! ```text
//! push / pop / pop_to_root  →  NavigationPath  →  notify observers
//!                  view_for  →  ViewMap (pure, &self)
//! ```
//!
//! All operations are infallible. The one edge case, popping an empty path,
//! is a defined no-op rather than an error, and no-ops do not notify.

use std::fmt;
use std::hash::Hash;

use log::debug;

use crate::core::observe::{Observers, PathEvent, SubscriptionId};
use crate::core::opaque::OpaqueValue;
use crate::core::path::{NavigationPath, PathElement};

/// The app's destination-to-view mapping.
///
/// Implemented once per app with an exhaustive `match` over the destination
/// enum, so totality over the closed set is checked by the compiler. The
/// view type is fully generic; the core never learns what a "view" is.
pub trait ViewMap {
    type Destination: Clone + Eq + Hash + fmt::Debug + 'static;
    type View;

    /// Builds the view for a typed destination. Pure and total.
    fn view_for(&self, destination: &Self::Destination) -> Self::View;

    /// Builds the view for an opaque pushed value, if this app knows how.
    ///
    /// Values pushed through the untyped escape hatch are outside the closed
    /// destination set, so the mapping is allowed to decline. The container
    /// decides what an unmapped value looks like on screen.
    fn view_for_value(&self, value: &OpaqueValue) -> Option<Self::View> {
        let _ = value;
        None
    }
}

/// Owner of the navigation path and the view mapping.
pub struct Router<M: ViewMap> {
    path: NavigationPath<M::Destination>,
    map: M,
    observers: Observers,
}

impl<M: ViewMap> Router<M> {
    /// Creates a router with an empty path (root screen showing).
    pub fn new(map: M) -> Self {
        Self {
            path: NavigationPath::new(),
            map,
            observers: Observers::new(),
        }
    }

    /// The current back-stack, root-first.
    pub fn path(&self) -> &NavigationPath<M::Destination> {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether a pop would leave the root screen showing something else.
    pub fn can_go_back(&self) -> bool {
        !self.path.is_empty()
    }

    /// Pushes a typed destination and notifies observers.
    pub fn push(&mut self, destination: M::Destination) {
        debug!("push {destination:?}");
        self.path.push(destination);
        self.observers.notify(&PathEvent::Pushed {
            depth: self.path.len(),
        });
    }

    /// Pushes an arbitrary equality-comparable value (untyped escape hatch).
    pub fn push_value<V>(&mut self, value: V)
    where
        V: std::any::Any + Eq + Hash + Clone + fmt::Debug,
    {
        self.push_opaque(OpaqueValue::new(value));
    }

    /// Pushes an already-erased value and notifies observers.
    pub fn push_opaque(&mut self, value: OpaqueValue) {
        debug!("push opaque value of type {}", value.type_name());
        self.path.push_opaque(value);
        self.observers.notify(&PathEvent::Pushed {
            depth: self.path.len(),
        });
    }

    /// Removes the top of the stack. Silent no-op on an empty path, and a
    /// no-op notifies nobody.
    pub fn pop(&mut self) {
        if let Some(element) = self.path.pop() {
            debug!("pop {element:?}; depth now {}", self.path.len());
            self.observers.notify(&PathEvent::Popped {
                depth: self.path.len(),
            });
        }
    }

    /// Clears the stack back to the root screen. Idempotent; notifies only
    /// when something was actually removed.
    pub fn pop_to_root(&mut self) {
        if self.path.is_empty() {
            return;
        }
        debug!("pop to root from depth {}", self.path.len());
        self.path.clear();
        self.observers.notify(&PathEvent::PoppedToRoot);
    }

    /// Maps a destination to its view. Pure: `&self`, no path mutation.
    pub fn view_for(&self, destination: &M::Destination) -> M::View {
        self.map.view_for(destination)
    }

    /// Maps any path element to its view. Typed destinations always map;
    /// opaque values map only if the app's `ViewMap` claims them.
    pub fn view_for_element(&self, element: &PathElement<M::Destination>) -> Option<M::View> {
        match element {
            PathElement::Screen(destination) => Some(self.map.view_for(destination)),
            PathElement::Value(value) => self.map.view_for_value(value),
        }
    }

    /// Registers a listener called after every observable path change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PathEvent) + 'static,
    {
        self.observers.subscribe(Box::new(listener))
    }

    /// Removes a listener. Returns whether it was still registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
