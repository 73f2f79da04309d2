#![forbid(unsafe_code)]

//! The controller owning one panel group.
//!
//! [`ScrollNav`] ties the pieces together: it builds the registry at
//! construction, binds one click identity per record, subscribes to the
//! host's scroll ticks, and from then on is driven entirely by the host
//! calling [`ScrollNav::handle_scroll`] and
//! [`ScrollNav::handle_nav_click`]. Each scroll tick runs the resolver
//! and fires a `change` event; each nav click issues one absolute scroll
//! command.
//!
//! # Lifecycle
//!
//! - A registry that resolves to zero pairs leaves the controller
//!   **inert**: nothing is bound, no event ever fires, disposal is a
//!   no-op. Silent by design — callers detect it by `change` never
//!   firing (or via [`ScrollNav::is_inert`]).
//! - [`ScrollNav::dispose`] detaches the click bindings and the scroll
//!   subscription; afterwards ticks and clicks that still arrive do
//!   nothing. Idempotent.
//! - Geometry is stale by default: a host reflow is only picked up by an
//!   explicit [`ScrollNav::remeasure`].

use crate::emitter::{ChangeEmitter, ChangeEvent, HandlerId};
use crate::host::{Host, NavBinding};
use crate::options::ScrollNavOptions;
use crate::registry;
use scrollnav_core::{PanelRecord, Resolution, resolve, sort_panels};

/// Scroll-synced navigation controller for one panel group.
pub struct ScrollNav<H: Host> {
    host: H,
    options: ScrollNavOptions,
    records: Vec<PanelRecord<H::Element>>,
    emitter: ChangeEmitter,
    last: Option<Resolution>,
    disposed: bool,
}

impl<H: Host> ScrollNav<H> {
    /// Build the registry and wire the controller to the host.
    ///
    /// When no map entry resolves on both sides the controller comes up
    /// inert: no bindings, no subscription, no events.
    pub fn new(host: H, options: ScrollNavOptions) -> Self {
        let records = registry::build(&host, &options);
        let mut nav = Self {
            host,
            options,
            records,
            emitter: ChangeEmitter::new(),
            last: None,
            disposed: false,
        };
        if nav.records.is_empty() {
            tracing::debug!("no panel pairs resolved; controller is inert");
        } else {
            nav.bind_all();
        }
        nav
    }

    fn bind_all(&mut self) {
        for (index, record) in self.records.iter().enumerate() {
            for element in &record.nav {
                self.host.bind_click(element, NavBinding(index));
            }
        }
        self.host.subscribe_scroll();
    }

    fn unbind_all(&mut self) {
        for record in &self.records {
            for element in &record.nav {
                self.host.unbind_click(element);
            }
        }
        self.host.unsubscribe_scroll();
    }

    /// Register a `change` listener; events carry the active panel index
    /// and the group's viewport visibility.
    pub fn on_change(&mut self, handler: impl FnMut(&ChangeEvent) + 'static) -> HandlerId {
        self.emitter.on(handler)
    }

    /// Detach a previously registered `change` listener.
    pub fn off_change(&mut self, id: HandlerId) -> bool {
        self.emitter.off(id)
    }

    /// One scroll tick: resolve the current position and fire `change`.
    ///
    /// Fires on every invocation, unchanged results included; the host is
    /// expected to rate-limit ticks. No-op when inert or disposed.
    pub fn handle_scroll(&mut self) {
        if self.disposed || self.records.is_empty() {
            return;
        }
        let resolution = resolve(
            self.host.scroll_y(),
            self.host.viewport_height(),
            &self.records,
            self.options.threshold,
            self.options.proportion,
        );
        self.last = Some(resolution);
        self.emitter.fire(ChangeEvent {
            active: resolution.active,
            visible: resolution.visible,
        });
    }

    /// Activation of the nav trigger bound to `index`: scroll the page to
    /// the panel's adjusted top, horizontal position reset to the origin.
    ///
    /// No-op when inert, disposed, or out of range.
    pub fn handle_nav_click(&mut self, index: usize) {
        if self.disposed {
            return;
        }
        let Some(record) = self.records.get(index) else {
            return;
        };
        let target = record.top + self.options.threshold;
        tracing::debug!(index, target, "nav click; issuing scroll command");
        self.host.scroll_to(0.0, target);
    }

    /// Re-query geometry for the existing records and re-sort.
    ///
    /// Never called automatically — stale-on-resize is the default
    /// behavior. Re-sorting can change index identities, so click
    /// bindings are re-issued to match.
    pub fn remeasure(&mut self) {
        if self.disposed || self.records.is_empty() {
            return;
        }
        for record in &mut self.records {
            record.top = self.host.offset_top(&record.panel);
            record.height = self.host.height(&record.panel);
        }
        for record in &self.records {
            for element in &record.nav {
                self.host.unbind_click(element);
            }
        }
        sort_panels(&mut self.records);
        for (index, record) in self.records.iter().enumerate() {
            for element in &record.nav {
                self.host.bind_click(element, NavBinding(index));
            }
        }
        tracing::debug!(panels = self.records.len(), "registry re-measured");
    }

    /// Detach all listeners. Safe to call on an inert controller and
    /// idempotent; the controller stays inert afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if self.records.is_empty() {
            return; // inert: nothing was ever bound
        }
        self.unbind_all();
        tracing::debug!("controller disposed");
    }

    // -- Accessors --

    /// The sorted panel records.
    #[must_use]
    pub fn records(&self) -> &[PanelRecord<H::Element>] {
        &self.records
    }

    /// The options this controller was constructed with.
    #[must_use]
    pub fn options(&self) -> &ScrollNavOptions {
        &self.options
    }

    /// Most recent resolver output, if a tick has run.
    #[must_use]
    pub fn last_resolution(&self) -> Option<Resolution> {
        self.last
    }

    /// Whether the registry resolved to zero pairs at construction.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Borrow the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: Host> Drop for ScrollNav<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
