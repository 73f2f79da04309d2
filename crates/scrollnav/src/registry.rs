#![forbid(unsafe_code)]

//! Builds the ordered panel registry from the options map.
//!
//! Each map entry resolves its nav selector and panel selector against
//! the root scope; a pair is kept only when both sides match at least one
//! element. Geometry (`top`, `height`) is captured here, once — the
//! records never track later reflows unless the controller explicitly
//! re-measures. The result is sorted ascending by `top`, and its index
//! positions become the panel identity.

use crate::host::Host;
use crate::options::ScrollNavOptions;
use scrollnav_core::{PanelRecord, sort_panels};

/// Resolve and measure the panel records for `options`.
///
/// Returns an empty vec (controller goes inert) when the root scope does
/// not resolve or no map entry matches on both sides. Both are silent
/// degenerate cases, not errors.
#[must_use]
pub fn build<H: Host>(host: &H, options: &ScrollNavOptions) -> Vec<PanelRecord<H::Element>> {
    let Some(root) = host.query_root(&options.main) else {
        tracing::debug!(main = %options.main, "root scope did not resolve");
        return Vec::new();
    };

    let mut records = Vec::with_capacity(options.map.len());
    for (nav_selector, panel_selector) in &options.map {
        let nav = host.query(&root, nav_selector);
        if nav.is_empty() {
            tracing::trace!(selector = %nav_selector, "nav selector matched nothing; pair dropped");
            continue;
        }
        let Some(panel) = host.query(&root, panel_selector).into_iter().next() else {
            tracing::trace!(selector = %panel_selector, "panel selector matched nothing; pair dropped");
            continue;
        };

        let top = host.offset_top(&panel);
        let height = host.height(&panel);
        records.push(PanelRecord::new(nav, panel, top, height));
    }

    sort_panels(&mut records);
    tracing::debug!(
        panels = records.len(),
        entries = options.map.len(),
        "panel registry built"
    );
    records
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockHost;

    #[test]
    fn unmatched_pairs_are_dropped() {
        let host = MockHost::new();
        host.set_root("#main");
        let section = host.element(100.0, 400.0);
        host.map_selector(".nav-a", vec![host.element(0.0, 20.0)]);
        host.map_selector("#sec-a", vec![section]);
        // ".nav-b" and "#sec-b" resolve to nothing.

        let options = ScrollNavOptions::new("#main")
            .pair(".nav-a", "#sec-a")
            .pair(".nav-b", "#sec-b")
            .pair(".nav-a", "#sec-missing");

        let records = build(&host, &options);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].top, 100.0);
        assert_eq!(records[0].height, 400.0);
    }

    #[test]
    fn records_come_out_sorted_by_top() {
        let host = MockHost::new();
        host.set_root("#main");
        host.map_selector(".nav-late", vec![host.element(0.0, 10.0)]);
        host.map_selector(".nav-early", vec![host.element(0.0, 10.0)]);
        host.map_selector("#late", vec![host.element(900.0, 100.0)]);
        host.map_selector("#early", vec![host.element(50.0, 100.0)]);

        // Map order is late-first; document order must win.
        let options = ScrollNavOptions::new("#main")
            .pair(".nav-late", "#late")
            .pair(".nav-early", "#early");

        let records = build(&host, &options);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].top, 50.0);
        assert_eq!(records[1].top, 900.0);
    }

    #[test]
    fn only_the_first_panel_match_is_measured() {
        let host = MockHost::new();
        host.set_root("#main");
        host.map_selector(".nav", vec![host.element(0.0, 10.0)]);
        host.map_selector(
            ".section",
            vec![host.element(200.0, 300.0), host.element(700.0, 50.0)],
        );

        let options = ScrollNavOptions::new("#main").pair(".nav", ".section");
        let records = build(&host, &options);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].top, 200.0);
        assert_eq!(records[0].height, 300.0);
    }

    #[test]
    fn all_nav_matches_are_kept() {
        let host = MockHost::new();
        host.set_root("#main");
        host.map_selector(
            ".nav",
            vec![host.element(0.0, 10.0), host.element(0.0, 10.0)],
        );
        host.map_selector("#sec", vec![host.element(100.0, 100.0)]);

        let options = ScrollNavOptions::new("#main").pair(".nav", "#sec");
        let records = build(&host, &options);
        assert_eq!(records[0].nav.len(), 2);
    }

    #[test]
    fn unresolved_root_scope_yields_no_records() {
        let host = MockHost::new();
        // No root configured: query_root returns None.
        host.map_selector(".nav", vec![host.element(0.0, 10.0)]);
        host.map_selector("#sec", vec![host.element(100.0, 100.0)]);

        let options = ScrollNavOptions::new("#missing").pair(".nav", "#sec");
        assert!(build(&host, &options).is_empty());
    }
}
