//! # Screen Stack Container
//!
//! The glue between a [`Router`] and ratatui: derives a stack of live
//! screens from the navigation path and keeps it in step as the path
//! changes. The root screen sits below the path and is shown whenever the
//! path is empty.
//!
//! Reconciliation is by longest common prefix on element equality, so a
//! push re-derives only the new top and a pop never touches the screens
//! that survive. Screens therefore keep their widget state (list
//! selections and the like) for as long as their element stays on the path.

use log::warn;

use crate::core::path::PathElement;
use crate::core::router::{Router, ViewMap};
use crate::tui::screen::Screen;
use crate::tui::screens::MissingScreen;

struct DerivedScreen<D> {
    element: PathElement<D>,
    screen: Box<dyn Screen<D>>,
}

/// A [`ViewMap`] whose view is a boxed [`Screen`] over its own destination.
///
/// Equivalent to writing `M: ViewMap<View = Box<dyn Screen<M::Destination>>>`
/// directly, but split into a supertrait plus a blanket impl: spelling the
/// bound inline on `ScreenStack` makes rustc's bound computation for `M`
/// depend on itself (E0391), since `M::Destination` appears while computing
/// `M`'s own bounds.
pub trait ScreenViewMap: ViewMap<View = Box<dyn Screen<<Self as ViewMap>::Destination>>> {}

impl<M: ViewMap<View = Box<dyn Screen<<M as ViewMap>::Destination>>>> ScreenViewMap for M {}

/// Live screens for the current path, root-first.
pub struct ScreenStack<M>
where
    M: ScreenViewMap,
{
    root: Box<dyn Screen<M::Destination>>,
    derived: Vec<DerivedScreen<M::Destination>>,
}

impl<M> ScreenStack<M>
where
    M: ScreenViewMap,
{
    pub fn new(root: Box<dyn Screen<M::Destination>>) -> Self {
        Self {
            root,
            derived: Vec::new(),
        }
    }

    /// Re-derives the screen stack from the router's current path.
    ///
    /// Call after a change notification. Elements already represented by a
    /// screen (matched by value, from the root) are left alone; everything
    /// past the first divergence is dropped and re-derived.
    pub fn sync(&mut self, router: &Router<M>) {
        let elements = router.path().elements();

        let keep = self
            .derived
            .iter()
            .zip(elements.iter())
            .take_while(|(derived, element)| derived.element == **element)
            .count();
        self.derived.truncate(keep);

        for element in &elements[keep..] {
            let screen = match router.view_for_element(element) {
                Some(screen) => screen,
                None => {
                    let type_name = match element {
                        PathElement::Value(value) => value.type_name(),
                        PathElement::Screen(_) => "unknown destination",
                    };
                    warn!("no view registered for pushed value of type {type_name}");
                    let fallback: Box<dyn Screen<M::Destination>> =
                        Box::new(MissingScreen::new(type_name));
                    fallback
                }
            };
            self.derived.push(DerivedScreen {
                element: element.clone(),
                screen,
            });
        }
    }

    /// The visible screen: top of the stack, or the root when the path is
    /// empty.
    pub fn top(&mut self) -> &mut dyn Screen<M::Destination> {
        match self.derived.last_mut() {
            Some(derived) => derived.screen.as_mut(),
            None => self.root.as_mut(),
        }
    }

    /// Number of derived screens (excludes the root).
    pub fn depth(&self) -> usize {
        self.derived.len()
    }

    /// Breadcrumb of screen titles, root-first.
    pub fn breadcrumb(&self) -> String {
        let mut crumb = self.root.title().to_string();
        for derived in &self.derived {
            crumb.push_str(" › ");
            crumb.push_str(derived.screen.title());
        }
        crumb
    }
}
