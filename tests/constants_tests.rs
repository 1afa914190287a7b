// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod content {
        include!("../src/core/content.rs");
    }
}

use constants::*;
use crate::core::content::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn region_bounds_are_ordered() {
    assert!(TRANSITION_START < TRANSITION_END);
    assert!(HEADING_DESKTOP.0 < HEADING_DESKTOP.1);
    assert!(HEADING_MOBILE.0 < HEADING_MOBILE.1);
    assert!(CONTACT_DESKTOP.0 < CONTACT_DESKTOP.1);
    assert!(CONTACT_MOBILE.0 < CONTACT_MOBILE.1);
    assert!(TROPHY_START < TROPHY_MIDPOINT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mobile_choreography_runs_earlier_than_desktop() {
    assert!(HEADING_MOBILE.0 < HEADING_DESKTOP.0);
    assert!(CONTACT_MOBILE.0 < CONTACT_DESKTOP.0);
    for stat in STATS.iter() {
        assert!(
            stat.reveal.mobile < stat.reveal.desktop,
            "{} reveals later on mobile",
            stat.label
        );
    }
}

#[test]
fn stats_reveal_in_page_order() {
    for pair in STATS.windows(2) {
        assert!(pair[0].reveal.desktop < pair[1].reveal.desktop);
        assert!(pair[0].reveal.mobile < pair[1].reveal.mobile);
    }
    // The heading is fully in before the first counter can start on desktop.
    assert!(HEADING_DESKTOP.1 <= STATS[0].reveal.desktop);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trophy_entry_ends_at_peak_scale() {
    let settled = TROPHY_ENTRY_SCALE + TROPHY_ENTRY_SCALE_GAIN;
    assert!((settled - TROPHY_PEAK_SCALE).abs() < 1e-9);
    assert!(TROPHY_PEAK_SCALE - TROPHY_EXIT_SCALE_LOSS > 0.0);
    assert!(TROPHY_HIDDEN_SCALE > 0.0);
    // Final tilt of 23 degrees.
    assert!((TROPHY_BASE_ROTATE_DEG - TROPHY_ENTRY_ROTATE_DEG - 23.0).abs() < 1e-9);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(COUNT_UP_DURATION_MS > 0.0);
    assert!(FINAL_TEXT_HOLD_MS > 0.0);
    assert!(NAV_COPY_FEEDBACK_MS > 0);
    assert!(CARD_COPY_FEEDBACK_MS > NAV_COPY_FEEDBACK_MS);
    assert!(BANNER_REPEATS > 0);
}

#[test]
fn content_is_consistent() {
    assert_eq!(STATS.len(), 3);
    for stat in STATS.iter() {
        assert!(stat.target > 0);
        assert!(stat.final_text.ends_with(stat.suffix));
    }
    assert!(CONTACT_CARDS.iter().any(|c| c.email == BUSINESS_EMAIL));
    assert!(SOCIAL_LINKS.iter().all(|l| l.url.starts_with("https://")));
    assert!(LEFT_TROPHY.webm.ends_with(".webm") && LEFT_TROPHY.mp4.ends_with(".mp4"));
    assert!(RIGHT_TROPHY.webm.ends_with(".webm") && RIGHT_TROPHY.mp4.ends_with(".mp4"));
}
