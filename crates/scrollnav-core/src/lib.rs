#![forbid(unsafe_code)]

//! Core resolution logic for scrollnav.
//!
//! This crate is host-free: it knows nothing about selectors, listeners, or
//! how scroll positions are obtained. It owns the two pieces of real logic
//! in the system:
//!
//! - [`panel`] — the ordered panel registry: [`PanelRecord`] geometry and
//!   the ascending-by-top sort whose index positions are the panel identity
//!   used everywhere else.
//! - [`resolve`](crate::resolve()) — the scroll-position → active-panel
//!   resolution, producing an immutable [`Resolution`] snapshot per tick.
//!
//! The controller crate (`scrollnav`) builds records through its host
//! traits, then calls into this crate on every scroll tick.

pub mod panel;
pub mod resolve;

pub use panel::{PanelRecord, sort_panels};
pub use resolve::{Resolution, panel_span_visible, resolve, resolve_active};
