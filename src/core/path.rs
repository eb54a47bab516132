//! # Navigation Path
//!
//! The back-stack itself: an ordered sequence of path elements, root-first.
//! Index 0 (if present) is the screen closest to the root; the last element
//! is the currently visible screen. An empty path means the root screen is
//! showing.
//!
//! `NavigationPath` is a plain value type with no observer wiring. The
//! [`Router`](crate::core::router::Router) owns one and layers change
//! notification on top.

use std::fmt;

use crate::core::opaque::OpaqueValue;

/// One entry in the navigation path.
///
/// Most entries are typed destinations from the app's closed enum. `Value`
/// is the escape hatch for pushing anything equality-comparable that lives
/// outside that enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElement<D> {
    /// A destination from the app's own enum.
    Screen(D),
    /// An arbitrary pushed value (see [`OpaqueValue`]).
    Value(OpaqueValue),
}

/// Ordered back-stack of destinations, root-first.
#[derive(Debug, Clone)]
pub struct NavigationPath<D> {
    elements: Vec<PathElement<D>>,
}

impl<D> Default for NavigationPath<D> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<D> NavigationPath<D>
where
    D: Clone + Eq + std::hash::Hash + fmt::Debug + 'static,
{
    /// Creates an empty path (root screen showing).
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Appends a typed destination. Always succeeds.
    pub fn push(&mut self, destination: D) {
        self.elements.push(PathElement::Screen(destination));
    }

    /// Appends an arbitrary equality-comparable value.
    ///
    /// Whether the app's view mapping can render it is only known at
    /// derivation time; see `ViewMap::view_for_value`.
    pub fn push_value<V>(&mut self, value: V)
    where
        V: std::any::Any + Eq + std::hash::Hash + Clone + fmt::Debug,
    {
        self.push_opaque(OpaqueValue::new(value));
    }

    /// Appends an already-erased value.
    pub fn push_opaque(&mut self, value: OpaqueValue) {
        self.elements.push(PathElement::Value(value));
    }

    /// Removes and returns the last element, or `None` if the path is
    /// already empty. Popping past the root is not an error.
    pub fn pop(&mut self) -> Option<PathElement<D>> {
        self.elements.pop()
    }

    /// Empties the path unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element for the currently visible screen, if any.
    pub fn last(&self) -> Option<&PathElement<D>> {
        self.elements.last()
    }

    /// All elements, root-first.
    pub fn elements(&self) -> &[PathElement<D>] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathElement<D>> {
        self.elements.iter()
    }
}
