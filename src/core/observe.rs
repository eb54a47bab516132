//! # Change Notification
//!
//! Explicit observer mechanism for path mutations. The router notifies every
//! registered listener synchronously, in registration order, right after a
//! mutation actually changes the path. The UI layer subscribes once and
//! re-derives its screen stack on notification.
//!
//! Single-threaded on purpose: listeners are plain `FnMut` closures and run
//! on whatever thread mutated the router.

/// What changed, delivered to listeners after the mutation.
///
/// `depth` is the path length after the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathEvent {
    Pushed { depth: usize },
    Popped { depth: usize },
    PoppedToRoot,
}

/// Handle for removing a listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&PathEvent)>;

/// Registry of path listeners. Owned by the router.
pub(crate) struct Observers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns whether the id was still registered.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub(crate) fn notify(&mut self, event: &PathEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}
