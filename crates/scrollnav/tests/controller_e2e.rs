//! End-to-end walk of one controller lifecycle against the recording
//! host: construction, a scroll sweep across every boundary, nav clicks,
//! and disposal. Run with `--features test-helpers`.

use std::cell::RefCell;
use std::rc::Rc;

use scrollnav::mock::MockHost;
use scrollnav::{ChangeEvent, ScrollNav, ScrollNavOptions};

/// Three stacked sections with a gap before the last one:
/// intro 0..400, usage 400..1000, faq 1200..1600. Viewport 800px.
fn docs_page() -> MockHost {
    let host = MockHost::new();
    host.set_root("#docs");
    host.set_viewport_height(800.0);
    for (nav_selector, panel_selector, top, height) in [
        (".nav-intro", "#intro", 0.0, 400.0),
        (".nav-usage", "#usage", 400.0, 600.0),
        (".nav-faq", "#faq", 1_200.0, 400.0),
    ] {
        host.map_selector(nav_selector, vec![host.element(0.0, 24.0)]);
        host.map_selector(panel_selector, vec![host.element(top, height)]);
    }
    host
}

fn docs_options() -> ScrollNavOptions {
    ScrollNavOptions::new("#docs")
        .pair(".nav-intro", "#intro")
        .pair(".nav-usage", "#usage")
        .pair(".nav-faq", "#faq")
}

#[test]
fn full_lifecycle_sweep() {
    let host = docs_page();
    let events: Rc<RefCell<Vec<ChangeEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let mut nav = ScrollNav::new(host.clone(), docs_options().proportion(1.0));
    {
        let events = Rc::clone(&events);
        nav.on_change(move |e| events.borrow_mut().push(*e));
    }
    assert_eq!(nav.records().len(), 3);
    assert!(host.is_subscribed());

    // Scroll from the top of the page to past the last section.
    let mut actives = Vec::new();
    let mut y = 0.0;
    while y <= 2_400.0 {
        host.set_scroll_y(y);
        nav.handle_scroll();
        actives.push(nav.last_resolution().expect("tick ran").active);
        y += 50.0;
    }

    // Active index sweeps 0 → 2 without regressing and ends clamped.
    assert_eq!(actives.first(), Some(&0));
    assert_eq!(actives.last(), Some(&2));
    assert!(actives.windows(2).all(|w| w[0] <= w[1]));

    // One event per tick, none deduplicated.
    assert_eq!(events.borrow().len(), actives.len());

    // Scrolled past the group the panels are out of the viewport.
    let last = events.borrow().last().copied().expect("events recorded");
    assert!(!last.visible);

    // Click routing: the middle nav scrolls to its section's top.
    nav.handle_nav_click(1);
    assert_eq!(host.scroll_commands(), vec![(0.0, 400.0)]);

    nav.dispose();
    assert!(!host.is_subscribed());
    assert_eq!(host.bound_count(), 0);

    // Late ticks and clicks do nothing.
    let fired_before = events.borrow().len();
    host.set_scroll_y(0.0);
    nav.handle_scroll();
    nav.handle_nav_click(0);
    assert_eq!(events.borrow().len(), fired_before);
    assert_eq!(host.scroll_commands().len(), 1);
}

#[test]
fn threshold_compensates_for_a_fixed_header() {
    let host = docs_page();
    let header = 64.0;
    let mut nav = ScrollNav::new(host.clone(), docs_options().threshold(-header).proportion(1.0));

    // With a 64px fixed header, a panel becomes current when its top is
    // still 64px below the scroll origin.
    host.set_scroll_y(400.0 - header);
    nav.handle_scroll();
    assert_eq!(nav.last_resolution().map(|r| r.active), Some(1));

    // And clicking navigates to the shifted target.
    nav.handle_nav_click(2);
    assert_eq!(host.scroll_commands(), vec![(0.0, 1_200.0 - header)]);
}

#[test]
fn two_controllers_share_one_host() {
    // Instance-scoped state: a second group on the same page resolves
    // independently of the first.
    let host = docs_page();
    host.set_root("#docs");
    host.map_selector(".nav-appendix", vec![host.element(0.0, 24.0)]);
    host.map_selector("#appendix", vec![host.element(3_000.0, 500.0)]);

    let mut first = ScrollNav::new(host.clone(), docs_options());
    let mut second = ScrollNav::new(
        host.clone(),
        ScrollNavOptions::new("#docs").pair(".nav-appendix", "#appendix"),
    );

    host.set_scroll_y(3_100.0);
    first.handle_scroll();
    second.handle_scroll();

    assert_eq!(first.last_resolution().map(|r| r.active), Some(2));
    assert_eq!(second.last_resolution().map(|r| r.active), Some(0));
    assert_eq!(first.last_resolution().map(|r| r.visible), Some(false));
    assert_eq!(second.last_resolution().map(|r| r.visible), Some(true));
}
