// Host-side tests for scroll regions and the per-frame scene computation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod content {
        include!("../src/core/content.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod trophy {
        include!("../src/core/trophy.rs");
    }
}

use crate::core::easing::{clamp01, ease_out_quart};
use crate::core::scene::SceneState;
use crate::core::scroll::{sanitize_scroll, ScrollRegion, Viewport};

fn desktop() -> Viewport {
    Viewport::new(1024.0, 800.0)
}

fn mobile() -> Viewport {
    Viewport::new(375.0, 700.0)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn region_progress_is_zero_before_start_and_one_after_end() {
    let r = ScrollRegion::new(100.0, 300.0);
    for s in [-50.0, 0.0, 50.0, 99.999] {
        assert_eq!(r.progress(s), 0.0, "scroll {s}");
    }
    assert_eq!(r.progress(100.0), 0.0);
    assert!(approx(r.progress(200.0), 0.5));
    for s in [300.0, 301.0, 10_000.0] {
        assert_eq!(r.progress(s), 1.0, "scroll {s}");
    }
}

#[test]
fn region_progress_is_monotonic() {
    let r = ScrollRegion::with_span(216.0, 56.0);
    let mut prev = 0.0;
    for step in 0..=2000 {
        let p = r.progress(step as f64 * 0.25);
        assert!(p >= prev, "progress dropped at {}", step as f64 * 0.25);
        assert!((0.0..=1.0).contains(&p));
        prev = p;
    }
}

#[test]
fn degenerate_region_is_a_step() {
    let r = ScrollRegion::new(200.0, 200.0);
    assert_eq!(r.progress(199.0), 0.0);
    assert_eq!(r.progress(200.0), 1.0);
    let inverted = ScrollRegion::new(300.0, 100.0);
    assert_eq!(inverted.progress(250.0), 0.0);
    assert_eq!(inverted.progress(300.0), 1.0);
}

#[test]
fn non_finite_inputs_are_clamped() {
    let r = ScrollRegion::new(0.0, 100.0);
    assert_eq!(r.progress(f64::NAN), 0.0);
    assert_eq!(r.progress(f64::INFINITY), 1.0);
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(sanitize_scroll(-40.0), 0.0);
    assert_eq!(sanitize_scroll(f64::NAN), 0.0);
    assert_eq!(sanitize_scroll(120.5), 120.5);
}

#[test]
fn viewport_falls_back_to_defaults() {
    let v = Viewport::new(0.0, f64::NAN);
    assert_eq!(v, Viewport::default());
    assert_eq!(v.width, 1024.0);
    assert_eq!(v.height, 800.0);
    assert!(!v.is_mobile());
    assert!(Viewport::new(767.0, 600.0).is_mobile());
    assert!(!Viewport::new(768.0, 600.0).is_mobile());
}

#[test]
fn ease_out_quart_endpoints_and_shape() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    assert!(approx(ease_out_quart(0.5), 0.9375));
    assert_eq!(ease_out_quart(-1.0), 0.0);
    assert_eq!(ease_out_quart(2.0), 1.0);
    let mut prev = 0.0;
    for i in 0..=100 {
        let v = ease_out_quart(i as f64 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn scene_at_top_of_page() {
    let s = SceneState::compute(0.0, desktop());
    assert_eq!(s.transition, 0.0);
    assert_eq!(s.hero_bg_opacity, 1.0);
    assert_eq!(s.sky_opacity, 0.0);
    assert!(!s.pink_visible());
    assert_eq!(s.hero_shift, 0.0);
    assert_eq!(s.hero_content_opacity, 1.0);
    assert_eq!(s.balloon_scale, 1.0);
    assert_eq!(s.heading.opacity, 0.0);
    assert_eq!(s.heading.translate_y, 50.0);
    assert_eq!(s.stat_opacity, [0.0; 3]);
    assert_eq!(s.contact.opacity, 0.0);
    assert!(!s.contact.settled);
}

#[test]
fn scene_hero_transition_values() {
    let v = desktop();
    // Transition runs over [88, 400]; halfway is 244.
    let s = SceneState::compute(244.0, v);
    assert!(approx(s.transition, 0.5));
    assert!(approx(s.hero_bg_opacity, 0.25));
    assert!(approx(s.sky_opacity, 0.6));
    assert!(approx(s.hero_content_opacity, 0.4));
    assert!(approx(s.hero_shift, 244.0 - 96.0));
    assert!(approx(s.pink_alphas[3], 0.225));
    assert!(s.pink_visible());

    let end = SceneState::compute(400.0, v);
    assert_eq!(end.hero_bg_opacity, 0.0);
    assert_eq!(end.sky_opacity, 1.0);
    assert!(approx(end.hero_content_opacity, 0.2));
}

#[test]
fn balloons_shrink_at_most_by_half() {
    let s = SceneState::compute(300.0, desktop());
    assert!(approx(s.balloon_shift, 240.0));
    assert!(approx(s.balloon_scale, 0.7));
    let far = SceneState::compute(5000.0, desktop());
    assert!(approx(far.balloon_scale, 0.5));
}

#[test]
fn sky_scrub_spans_one_and_a_half_viewports() {
    let v = desktop();
    assert_eq!(SceneState::compute(100.0, v).sky_scrub, 0.0);
    assert!(approx(SceneState::compute(144.0 + 600.0, v).sky_scrub, 0.5));
    assert_eq!(SceneState::compute(1400.0, v).sky_scrub, 1.0);
}

#[test]
fn slide_in_regions_are_zero_before_and_one_after() {
    let v = desktop();
    // Heading [216, 272], contact [464, 520].
    for scroll in (0..216).step_by(8) {
        assert_eq!(SceneState::compute(scroll as f64, v).heading.opacity, 0.0);
    }
    let heading = SceneState::compute(273.0, v).heading;
    assert_eq!(heading.opacity, 1.0);
    assert_eq!(heading.translate_y, 0.0);
    assert!(heading.settled);
    assert_eq!(heading.transition_css(), "none");

    assert_eq!(SceneState::compute(463.0, v).contact.opacity, 0.0);
    assert_eq!(SceneState::compute(521.0, v).contact.opacity, 1.0);
    assert_eq!(SceneState::compute(3000.0, v).contact.opacity, 1.0);
}

#[test]
fn scene_opacities_are_monotonic_in_scroll() {
    for v in [desktop(), mobile()] {
        let mut prev = SceneState::compute(0.0, v);
        for step in 1..=600 {
            let s = SceneState::compute(step as f64 * 4.0, v);
            assert!(s.heading.opacity >= prev.heading.opacity);
            assert!(s.contact.opacity >= prev.contact.opacity);
            assert!(s.sky_opacity >= prev.sky_opacity);
            assert!(s.hero_bg_opacity <= prev.hero_bg_opacity);
            for i in 0..3 {
                assert!(s.stat_opacity[i] >= prev.stat_opacity[i]);
            }
            prev = s;
        }
    }
}

#[test]
fn stat_rows_fade_in_from_their_thresholds() {
    let v = desktop();
    let s = SceneState::compute(0.0, v);
    assert!(approx(s.stat_thresholds[0], 280.0));
    assert!(approx(s.stat_thresholds[1], 320.0));
    assert!(approx(s.stat_thresholds[2], 360.0));

    // Fade span is 0.08 * 800 = 64.
    let s = SceneState::compute(312.0, v);
    assert!(approx(s.stat_opacity[0], 0.5));
    assert_eq!(s.stat_opacity[1], 0.0);
    assert_eq!(s.stat_opacity[2], 0.0);
}

#[test]
fn mobile_layout_uses_its_own_thresholds_and_hides_trophies() {
    let v = mobile();
    let s = SceneState::compute(0.0, v);
    assert!(s.mobile);
    assert!(s.trophies.is_none());
    assert!(approx(s.stat_thresholds[0], 175.0));
    assert!(approx(s.heading_top, 616.0));
    // Mobile heading region is [126, 175].
    assert_eq!(SceneState::compute(175.0, v).heading.opacity, 1.0);
    for scroll in [0.0, 500.0, 5000.0] {
        assert!(SceneState::compute(scroll, v).trophies.is_none());
    }
}

#[test]
fn desktop_layout_has_both_trophies() {
    let s = SceneState::compute(0.0, desktop());
    assert!(!s.mobile);
    assert!(approx(s.heading_top, 616.0));
    let trophies = s.trophies.expect("trophies on desktop");
    assert_eq!(trophies.len(), 2);
}

#[test]
fn negative_scroll_behaves_like_top_of_page() {
    assert_eq!(
        SceneState::compute(-120.0, desktop()),
        SceneState::compute(0.0, desktop())
    );
}

#[test]
fn pink_gradient_carries_alphas() {
    let s = SceneState::compute(400.0, desktop());
    let css = s.pink_gradient_css();
    assert!(css.starts_with("linear-gradient(to bottom"));
    assert!(css.contains("rgba(157, 23, 77, 0.450) 100%"));
}
