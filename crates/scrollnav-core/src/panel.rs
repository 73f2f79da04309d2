#![forbid(unsafe_code)]

//! Panel records and the registry sort.
//!
//! A [`PanelRecord`] pairs the navigation trigger element(s) with their
//! content panel and the panel's geometry as measured at build time. The
//! registry is a `Vec<PanelRecord<E>>` sorted ascending by `top`; the index
//! position in that sequence is the panel's identity for click routing and
//! resolver output, so the sort must be deterministic.
//!
//! # Invariants
//!
//! 1. After [`sort_panels`], `top` values are non-decreasing.
//! 2. Records with equal `top` keep their original relative order
//!    (stable sort), so ties resolve by map-iteration order.
//! 3. Geometry is captured once and never refreshed by this crate;
//!    re-measurement is an explicit controller operation.

/// One navigation/panel pairing with its measured geometry.
///
/// `E` is the host's opaque element handle. A nav selector may match
/// several trigger elements; they all scroll to the same panel. Only the
/// first element matched by the panel selector is measured.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRecord<E> {
    /// All elements matched by the nav selector. Never empty.
    pub nav: Vec<E>,
    /// First element matched by the panel selector.
    pub panel: E,
    /// Panel top, document-relative, measured at build time.
    pub top: f64,
    /// Panel rendered height, measured at build time.
    pub height: f64,
}

impl<E> PanelRecord<E> {
    /// Create a record from resolved elements and measured geometry.
    #[must_use]
    pub fn new(nav: Vec<E>, panel: E, top: f64, height: f64) -> Self {
        Self {
            nav,
            panel,
            top,
            height,
        }
    }

    /// Document-relative bottom edge of the panel.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Sort records ascending by `top`.
///
/// Stable, so records with equal `top` stay in insertion order. Uses
/// `f64::total_cmp`, which gives a deterministic order even for the
/// degenerate geometry values a host could report.
pub fn sort_panels<E>(panels: &mut [PanelRecord<E>]) {
    panels.sort_by(|a, b| a.top.total_cmp(&b.top));
    #[cfg(feature = "tracing")]
    tracing::trace!(panels = panels.len(), "panel registry sorted");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
