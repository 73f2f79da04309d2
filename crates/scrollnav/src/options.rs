#![forbid(unsafe_code)]

//! Construction options for [`ScrollNav`](crate::ScrollNav).
//!
//! Options are read once at construction and never mutated afterward.
//! Unmatched map entries are dropped silently; a map that resolves no
//! pairs at all leaves the controller inert rather than failing.

/// Tuning and wiring options for one controller instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollNavOptions {
    /// Selector for the root scope all other selectors resolve against.
    pub main: String,

    /// Nav-selector → panel-selector pairs defining panel membership.
    /// Order is the tie-break for panels measured at the same offset.
    pub map: Vec<(String, String)>,

    /// Signed pixel offset applied to every boundary comparison; shifts
    /// the effective trigger point earlier or later (fixed headers).
    pub threshold: f64,

    /// Fraction in (0, 1] of a panel's height; once the scroll position
    /// is past this fraction of the panel, the next panel is reported as
    /// current (early-switch heuristic).
    pub proportion: f64,
}

impl Default for ScrollNavOptions {
    fn default() -> Self {
        Self {
            main: String::new(),
            map: Vec::new(),
            threshold: 0.0,
            proportion: 0.8,
        }
    }
}

impl ScrollNavOptions {
    /// Options scoped to the given root selector.
    #[must_use]
    pub fn new(main: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            ..Self::default()
        }
    }

    /// Add one nav-selector → panel-selector pair.
    #[must_use]
    pub fn pair(mut self, nav: impl Into<String>, panel: impl Into<String>) -> Self {
        self.map.push((nav.into(), panel.into()));
        self
    }

    /// Set the boundary threshold in pixels.
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the early-switch proportion.
    #[must_use]
    pub fn proportion(mut self, proportion: f64) -> Self {
        self.proportion = proportion;
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
