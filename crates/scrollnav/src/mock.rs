#![forbid(unsafe_code)]

//! Recording host fixture for tests.
//!
//! [`MockHost`] implements [`Host`] over an in-memory selector table and
//! records every side effect the controller requests (click bindings,
//! scroll subscription, scroll commands) so tests can assert on them.
//! Handles are cheap `Rc` clones over shared state, so a test can keep
//! one handle while the controller owns another.
//!
//! Single-threaded by design, like the controller itself.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::host::{Host, NavBinding};

/// Opaque element handle handed out by [`MockHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MockElement {
    id: u32,
}

impl MockElement {
    /// Stable id for assertions.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.id
    }
}

#[derive(Debug, Default)]
struct MockState {
    next_id: u32,
    root: Option<(String, MockElement)>,
    selectors: HashMap<String, Vec<MockElement>>,
    geometry: HashMap<u32, (f64, f64)>,
    scroll_y: f64,
    viewport_height: f64,
    bindings: HashMap<u32, NavBinding>,
    unbind_count: u32,
    subscribed: bool,
    subscribe_count: u32,
    unsubscribe_count: u32,
    scroll_commands: Vec<(f64, f64)>,
}

/// In-memory [`Host`] that records controller side effects.
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    state: Rc<RefCell<MockState>>,
}

impl MockHost {
    /// Empty host: no root, no selectors, viewport height 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Fixture setup --

    /// Register the root scope; `query_root` matches this selector only.
    pub fn set_root(&self, selector: impl Into<String>) {
        let root = self.element(0.0, 0.0);
        self.state.borrow_mut().root = Some((selector.into(), root));
    }

    /// Mint an element with the given geometry.
    pub fn element(&self, top: f64, height: f64) -> MockElement {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.geometry.insert(id, (top, height));
        MockElement { id }
    }

    /// Map a selector to the elements it resolves to (any scope).
    pub fn map_selector(&self, selector: impl Into<String>, elements: Vec<MockElement>) {
        self.state.borrow_mut().selectors.insert(selector.into(), elements);
    }

    /// Change an element's geometry, as a host reflow would.
    pub fn move_element(&self, element: MockElement, top: f64, height: f64) {
        self.state.borrow_mut().geometry.insert(element.id, (top, height));
    }

    /// Set the current scroll offset reported to the controller.
    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.state.borrow_mut().scroll_y = scroll_y;
    }

    /// Set the viewport height reported to the controller.
    pub fn set_viewport_height(&self, height: f64) {
        self.state.borrow_mut().viewport_height = height;
    }

    // -- Recorded effects --

    /// Binding currently attached to an element, if any.
    #[must_use]
    pub fn binding_for(&self, element: MockElement) -> Option<NavBinding> {
        self.state.borrow().bindings.get(&element.id).copied()
    }

    /// Number of elements with a live click binding.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.state.borrow().bindings.len()
    }

    /// Number of unbind calls seen.
    #[must_use]
    pub fn unbind_count(&self) -> u32 {
        self.state.borrow().unbind_count
    }

    /// Whether a scroll subscription is currently live.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.state.borrow().subscribed
    }

    /// Subscribe/unsubscribe call counts.
    #[must_use]
    pub fn subscription_counts(&self) -> (u32, u32) {
        let state = self.state.borrow();
        (state.subscribe_count, state.unsubscribe_count)
    }

    /// Every `scroll_to` command issued, in order.
    #[must_use]
    pub fn scroll_commands(&self) -> Vec<(f64, f64)> {
        self.state.borrow().scroll_commands.clone()
    }
}

impl Host for MockHost {
    type Element = MockElement;

    fn query_root(&self, selector: &str) -> Option<MockElement> {
        let state = self.state.borrow();
        match &state.root {
            Some((root_selector, root)) if root_selector.as_str() == selector => Some(*root),
            _ => None,
        }
    }

    fn query(&self, _scope: &MockElement, selector: &str) -> Vec<MockElement> {
        self.state
            .borrow()
            .selectors
            .get(selector)
            .cloned()
            .unwrap_or_default()
    }

    fn offset_top(&self, element: &MockElement) -> f64 {
        self.state.borrow().geometry[&element.id].0
    }

    fn height(&self, element: &MockElement) -> f64 {
        self.state.borrow().geometry[&element.id].1
    }

    fn bind_click(&mut self, element: &MockElement, binding: NavBinding) {
        self.state.borrow_mut().bindings.insert(element.id, binding);
    }

    fn unbind_click(&mut self, element: &MockElement) {
        let mut state = self.state.borrow_mut();
        state.bindings.remove(&element.id);
        state.unbind_count += 1;
    }

    fn subscribe_scroll(&mut self) {
        let mut state = self.state.borrow_mut();
        state.subscribed = true;
        state.subscribe_count += 1;
    }

    fn unsubscribe_scroll(&mut self) {
        let mut state = self.state.borrow_mut();
        state.subscribed = false;
        state.unsubscribe_count += 1;
    }

    fn scroll_y(&self) -> f64 {
        self.state.borrow().scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.state.borrow().viewport_height
    }

    fn scroll_to(&mut self, x: f64, y: f64) {
        self.state.borrow_mut().scroll_commands.push((x, y));
    }
}
