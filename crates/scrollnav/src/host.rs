#![forbid(unsafe_code)]

//! Collaborator interface to the embedding environment.
//!
//! The controller never touches a real document. Everything
//! environment-specific — selector resolution, element measurement, click
//! listeners, scroll events, and the scroll command — sits behind [`Host`].
//! The host owns event dispatch: while subscribed it calls
//! [`ScrollNav::handle_scroll`](crate::ScrollNav::handle_scroll) once per
//! (already rate-limited) scroll tick, and reports activation of a bound
//! nav element by calling
//! [`ScrollNav::handle_nav_click`](crate::ScrollNav::handle_nav_click)
//! with the binding's index.
//!
//! Single-threaded by contract: ticks and clicks are dispatched on the
//! host's one execution thread and never overlap.

/// Identity of a navigation trigger binding.
///
/// Wraps the index of the panel record the trigger scrolls to. Registry
/// index positions are the panel identity for the controller's lifetime,
/// so the host can route a click with nothing but this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavBinding(pub usize);

impl NavBinding {
    /// Index of the panel record this binding targets.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Capabilities the embedding environment provides to the controller.
pub trait Host {
    /// Opaque element handle. Cloned freely; equality is the host's
    /// concern.
    type Element: Clone;

    // -- Element lookup --

    /// Resolve the root scope selector. `None` disables the controller.
    fn query_root(&self, selector: &str) -> Option<Self::Element>;

    /// Resolve a selector to zero or more elements within `scope`.
    fn query(&self, scope: &Self::Element, selector: &str) -> Vec<Self::Element>;

    /// Document-relative vertical offset of an element.
    fn offset_top(&self, element: &Self::Element) -> f64;

    /// Rendered height of an element.
    fn height(&self, element: &Self::Element) -> f64;

    // -- Click binding --

    /// Attach a click binding to a nav element. The host reports later
    /// activations through `handle_nav_click(binding.index())`.
    fn bind_click(&mut self, element: &Self::Element, binding: NavBinding);

    /// Detach the click binding from a nav element.
    fn unbind_click(&mut self, element: &Self::Element);

    // -- Scroll ticks --

    /// Start delivering scroll ticks. Rate limiting is the host's job.
    fn subscribe_scroll(&mut self);

    /// Stop delivering scroll ticks.
    fn unsubscribe_scroll(&mut self);

    // -- Scroll surface --

    /// Current vertical scroll offset of the viewport.
    fn scroll_y(&self) -> f64;

    /// Current viewport height.
    fn viewport_height(&self) -> f64;

    /// Move the viewport so the given document coordinate is at the
    /// top-left corner. No animation.
    fn scroll_to(&mut self, x: f64, y: f64);
}
