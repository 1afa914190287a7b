// Host-side tests for the desktop trophy choreography and video playback edges.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod trophy {
        include!("../src/core/trophy.rs");
    }
}

use crate::core::scroll::Viewport;
use crate::core::trophy::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn desktop() -> Viewport {
    Viewport::new(1024.0, 800.0)
}

fn both(scroll: f64) -> [TrophyState; 2] {
    [
        TrophyState::compute(Side::Left, scroll, desktop()),
        TrophyState::compute(Side::Right, scroll, desktop()),
    ]
}

#[test]
fn hidden_before_entry() {
    for t in both(0.0) {
        assert_eq!(t.phase, TrophyPhase::Hidden);
        assert!(!t.loops());
        let tf = t.transform();
        assert!(approx(tf.translate_x, t.side.sign() * 500.0));
        assert!(approx(tf.rotate_deg, t.side.sign() * 75.0));
        assert!(approx(tf.scale, 0.7018));
        assert_eq!(tf.opacity, 0.0);
    }
}

#[test]
fn sides_mirror_each_other() {
    for scroll in [0.0, 380.0, 420.0, 600.0, 860.0, 1000.0] {
        let [l, r] = both(scroll);
        let (lt, rt) = (l.transform(), r.transform());
        assert!(approx(lt.translate_x, -rt.translate_x), "scroll {scroll}");
        assert!(approx(lt.rotate_deg, -rt.rotate_deg), "scroll {scroll}");
        assert!(approx(lt.scale, rt.scale));
        assert!(approx(lt.opacity, rt.opacity));
    }
}

#[test]
fn entering_starts_off_to_the_side() {
    let right = TrophyState::compute(Side::Right, 362.0, desktop());
    assert_eq!(right.phase, TrophyPhase::Entering);
    assert!(right.loops());
    let tf = right.transform();
    assert!(tf.translate_x > 395.0 && tf.translate_x <= 400.0);
    assert!(tf.opacity < 0.05);
}

#[test]
fn entry_halfway() {
    let tf = TrophyState::compute(Side::Right, 420.0, desktop()).transform();
    assert!(approx(tf.translate_x, 275.0));
    assert!(approx(tf.rotate_deg, 41.5));
    assert!(approx(tf.scale, 1.12288));
    assert!(approx(tf.opacity, 0.5));
}

#[test]
fn fully_entered_holds_until_midpoint() {
    for scroll in [480.0, 600.0, 790.0] {
        let left = TrophyState::compute(Side::Left, scroll, desktop());
        assert_eq!(left.phase, TrophyPhase::Entering);
        let tf = left.transform();
        assert!(approx(tf.translate_x, -150.0));
        assert!(approx(tf.rotate_deg, -23.0));
        assert!(approx(tf.scale, 1.4036));
        assert!(approx(tf.opacity, 1.0));
    }
}

#[test]
fn exit_continues_from_base_pose() {
    let right = TrophyState::compute(Side::Right, 800.0, desktop());
    assert_eq!(right.phase, TrophyPhase::Exiting);
    assert!(!right.loops());
    let tf = right.transform();
    assert!(approx(tf.translate_x, 400.0));
    assert!(approx(tf.rotate_deg, 60.0));
    assert!(approx(tf.scale, 1.4036));
    assert!(approx(tf.opacity, 1.0));
}

#[test]
fn fully_exited() {
    for scroll in [920.0, 5000.0] {
        let tf = TrophyState::compute(Side::Left, scroll, desktop()).transform();
        assert!(approx(tf.translate_x, -800.0));
        assert!(approx(tf.rotate_deg, -80.0));
        assert!(approx(tf.scale, 0.98252));
        assert!(approx(tf.opacity, 0.0));
    }
}

#[test]
fn timing_scales_with_viewport_height() {
    let tall = Viewport::new(1440.0, 1000.0);
    assert_eq!(
        TrophyState::compute(Side::Left, 400.0, tall).phase,
        TrophyPhase::Hidden
    );
    assert_eq!(
        TrophyState::compute(Side::Left, 460.0, tall).phase,
        TrophyPhase::Entering
    );
}

#[test]
fn css_keeps_vertical_centring() {
    let css = TrophyState::compute(Side::Left, 0.0, desktop())
        .transform()
        .css();
    assert!(css.starts_with("translateY(-50%) translateX(-500.00px)"));
    assert!(css.contains("rotate(-75.00deg)"));
    assert!(css.ends_with("scale(0.70180)"));
}

#[test]
fn playback_waits_for_load() {
    let mut pb = TrophyPlayback::default();
    assert!(pb.shows_loading());
    assert_eq!(pb.update(TrophyPhase::Entering), None);

    pb.mark_loaded();
    assert!(!pb.shows_loading());
    assert_eq!(pb.update(TrophyPhase::Entering), Some(PlaybackCommand::Restart));
    // Edge-triggered: staying on stage does not restart.
    assert_eq!(pb.update(TrophyPhase::Entering), None);
    assert_eq!(pb.update(TrophyPhase::Exiting), Some(PlaybackCommand::Pause));
    assert_eq!(pb.update(TrophyPhase::Hidden), None);
    assert_eq!(pb.update(TrophyPhase::Entering), Some(PlaybackCommand::Restart));
}

#[test]
fn failed_video_never_plays() {
    let mut pb = TrophyPlayback::default();
    pb.mark_failed();
    assert!(pb.has_failed());
    assert!(!pb.shows_loading());
    assert_eq!(pb.update(TrophyPhase::Entering), None);
    assert!(!pb.is_loaded());
}
