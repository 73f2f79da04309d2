#![forbid(unsafe_code)]

//! Change-event emission.
//!
//! A small publish/subscribe primitive composed into the controller by
//! delegation (no mixin inheritance): handlers register with
//! [`ChangeEmitter::on`], receive every [`ChangeEvent`] via
//! [`ChangeEmitter::fire`], and detach with [`ChangeEmitter::off`].
//! Events are delivered on every fire with no deduplication; callers who
//! only care about transitions compare against the previous event
//! themselves.

use std::fmt;

/// Payload of the `change` event: the resolved panel index and whether
/// the panel group currently intersects the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeEvent {
    /// Index of the panel the nav should highlight.
    pub active: usize,
    /// Whether any part of the panel group is inside the viewport.
    pub visible: bool,
}

/// Handle identifying one registered handler.
///
/// Ids are assigned monotonically and never reused, so a stale handle
/// can never detach a later registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Registered `change` listeners for one controller instance.
#[derive(Default)]
pub struct ChangeEmitter {
    handlers: Vec<(HandlerId, Box<dyn FnMut(&ChangeEvent)>)>,
    next_id: u64,
}

impl ChangeEmitter {
    /// Create an emitter with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; returns the handle used to detach it.
    pub fn on(&mut self, handler: impl FnMut(&ChangeEvent) + 'static) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Detach a handler. Returns `false` if the handle was unknown
    /// (already detached, or from another emitter).
    pub fn off(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Deliver an event to every registered handler, in registration
    /// order.
    pub fn fire(&mut self, event: ChangeEvent) {
        for (_, handler) in &mut self.handlers {
            handler(&event);
        }
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for ChangeEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeEmitter")
            .field("handlers", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event(active: usize) -> ChangeEvent {
        ChangeEvent {
            active,
            visible: true,
        }
    }

    #[test]
    fn fire_reaches_every_handler_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = ChangeEmitter::new();

        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            emitter.on(move |e| seen.borrow_mut().push((tag, e.active)));
        }
        emitter.fire(event(3));

        assert_eq!(*seen.borrow(), vec![("a", 3), ("b", 3)]);
    }

    #[test]
    fn fire_repeats_unchanged_events() {
        let count = Rc::new(RefCell::new(0));
        let mut emitter = ChangeEmitter::new();
        {
            let count = Rc::clone(&count);
            emitter.on(move |_| *count.borrow_mut() += 1);
        }

        emitter.fire(event(0));
        emitter.fire(event(0));
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn off_detaches_only_the_named_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = ChangeEmitter::new();

        let first = {
            let seen = Rc::clone(&seen);
            emitter.on(move |_| seen.borrow_mut().push("first"))
        };
        {
            let seen = Rc::clone(&seen);
            emitter.on(move |_| seen.borrow_mut().push("second"));
        }

        assert!(emitter.off(first));
        assert!(!emitter.off(first), "second detach of the same id");
        emitter.fire(event(0));

        assert_eq!(*seen.borrow(), vec!["second"]);
        assert_eq!(emitter.len(), 1);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut emitter = ChangeEmitter::new();
        let first = emitter.on(|_| {});
        emitter.off(first);
        let second = emitter.on(|_| {});
        assert_ne!(first, second);
    }

    #[test]
    fn empty_emitter_fires_into_the_void() {
        let mut emitter = ChangeEmitter::new();
        assert!(emitter.is_empty());
        emitter.fire(event(7)); // must not panic
    }
}
