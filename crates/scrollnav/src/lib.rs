#![forbid(unsafe_code)]

//! Scroll-synced navigation over host-provided panels.
//!
//! As the page scrolls, [`ScrollNav`] resolves which content panel is
//! current and notifies listeners so the matching nav item can be
//! highlighted; clicking a nav item scrolls the page to its panel.
//!
//! # Key Components
//!
//! - [`ScrollNav`] - The controller: owns the registry, the emitter, and
//!   the host handle; one instance per panel group.
//! - [`Host`] - Collaborator trait the embedding environment implements:
//!   element lookup/measurement, click binding, scroll-tick subscription,
//!   and the scroll surface.
//! - [`ScrollNavOptions`] - Construction options (root scope, nav → panel
//!   map, threshold, proportion).
//! - [`ChangeEmitter`] - Delegation-based publish/subscribe for the
//!   `change` event; the emitted [`ChangeEvent`] is the sole data output.
//!
//! # How it fits together
//!
//! Construction builds and sorts the panel registry through the host's
//! element lookup. The host then drives the controller: it calls
//! [`ScrollNav::handle_scroll`] on every (externally rate-limited) scroll
//! tick and [`ScrollNav::handle_nav_click`] when a bound nav element is
//! activated. The actual resolution arithmetic lives in
//! [`scrollnav_core`].

pub mod controller;
pub mod emitter;
pub mod host;
pub mod options;
pub mod registry;

#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;

pub use controller::ScrollNav;
pub use emitter::{ChangeEmitter, ChangeEvent, HandlerId};
pub use host::{Host, NavBinding};
pub use options::ScrollNavOptions;
pub use scrollnav_core::{PanelRecord, Resolution};
