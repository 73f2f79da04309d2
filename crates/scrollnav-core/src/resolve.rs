#![forbid(unsafe_code)]

//! Scroll-position → active-panel resolution.
//!
//! Given the sorted registry and the current scroll offset, [`resolve`]
//! decides in O(panels) which single panel is "current" and whether any
//! part of the panel group is inside the viewport. The result is an
//! immutable [`Resolution`] snapshot; the caller emits it on every tick
//! with no deduplication.
//!
//! # Design
//!
//! The scan walks panels in ascending-`top` order and tracks the panel
//! whose adjusted top (`top + threshold`) the scroll position has most
//! recently passed — the one with the smallest non-negative
//! `diff = scroll_y - top - threshold`. Once the scroll position is more
//! than `height * proportion` into that panel, the *next* panel is
//! reported instead (early-switch heuristic), clamped to the last index.
//!
//! # Invariants
//!
//! 1. `active` is always a valid index into the registry.
//! 2. Above the first panel's adjusted top, `active` is `0`.
//! 3. The candidate update uses a **non-strict** comparison
//!    (`diff <= min`): on exact ties the later-indexed panel's decision
//!    wins. This is a deliberate tie-break; do not tighten it to `<`.
//! 4. Resolution is pure: equal inputs produce equal outputs.
//!
//! # Failure Modes
//!
//! Calling with an empty registry is a caller bug — the controller goes
//! inert before ever reaching this code. Debug builds assert; release
//! builds return the `active = 0, visible = false` snapshot.

use crate::panel::PanelRecord;

/// Immutable result of one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Index of the panel the nav should highlight.
    pub active: usize,
    /// Whether any part of the panel group intersects the viewport.
    pub visible: bool,
}

/// Resolve the active panel index for the current scroll offset.
///
/// `panels` must be sorted ascending by `top` (see
/// [`sort_panels`](crate::panel::sort_panels)) and non-empty.
#[must_use]
pub fn resolve_active<E>(
    scroll_y: f64,
    panels: &[PanelRecord<E>],
    threshold: f64,
    proportion: f64,
) -> usize {
    debug_assert!(!panels.is_empty(), "resolver requires a non-empty registry");
    let len = panels.len();
    let mut min = f64::INFINITY;
    let mut active = 0;

    for (index, panel) in panels.iter().enumerate() {
        let diff = scroll_y - panel.top - threshold;
        // Non-strict: equal diffs hand the decision to the later panel.
        if diff < 0.0 || diff > min {
            continue;
        }
        min = diff;
        active = if diff >= panel.height * proportion {
            // Past the early-switch point inside this panel.
            (index + 1).min(len.saturating_sub(1))
        } else {
            index
        };
    }

    active
}

/// Whether any part of the panel group is inside the viewport.
///
/// True when the group's adjusted start is above the viewport bottom and
/// its adjusted end is below the viewport top; both comparisons are
/// strict, so a group exactly flush with a viewport edge counts as out.
#[must_use]
pub fn panel_span_visible<E>(
    scroll_y: f64,
    viewport_height: f64,
    panels: &[PanelRecord<E>],
    threshold: f64,
) -> bool {
    debug_assert!(!panels.is_empty(), "resolver requires a non-empty registry");
    let Some(first) = panels.first() else {
        return false;
    };
    let Some(last) = panels.last() else {
        return false;
    };

    let span_start = first.top + threshold;
    let span_end = last.bottom() + threshold;

    span_start < scroll_y + viewport_height && span_end > scroll_y
}

/// One full resolution pass: active index plus group visibility.
#[must_use]
pub fn resolve<E>(
    scroll_y: f64,
    viewport_height: f64,
    panels: &[PanelRecord<E>],
    threshold: f64,
    proportion: f64,
) -> Resolution {
    let resolution = Resolution {
        active: resolve_active(scroll_y, panels, threshold, proportion),
        visible: panel_span_visible(scroll_y, viewport_height, panels, threshold),
    };
    #[cfg(feature = "tracing")]
    tracing::trace!(
        scroll_y,
        active = resolution.active,
        visible = resolution.visible,
        "resolved scroll position"
    );
    resolution
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
