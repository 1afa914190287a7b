// Mutable page state advanced once per rendered frame.

use crate::core::content::{BUSINESS_EMAIL, CONTACT_CARDS, STATS};
use crate::core::copy::CopyFeedback;
use crate::core::counter::CountUp;
use crate::core::scene::SceneState;
use crate::core::scroll::{sanitize_scroll, Viewport};
use crate::core::throttle::FrameThrottle;
use crate::core::trophy::{PlaybackCommand, TrophyPhase, TrophyPlayback};
use std::time::Duration;

/// Which click-to-copy element an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyTarget {
    Nav,
    Card(usize),
}

/// What a frame needs to push to the DOM.
#[derive(Clone, Debug)]
pub struct FrameOutcome {
    pub scene: SceneState,
    /// Counters whose rendered glyphs changed this frame.
    pub counters_changed: [bool; 3],
    /// Newly triggered counters, for logging.
    pub counters_started: [bool; 3],
    pub playback: [Option<PlaybackCommand>; 2],
    /// True while another frame is needed without further input.
    pub animating: bool,
}

#[derive(Clone, Debug)]
pub struct PageState {
    pub viewport: Viewport,
    pub scroll: f64,
    pub counters: [CountUp; 3],
    pub nav_copy: CopyFeedback,
    pub card_copies: [CopyFeedback; 2],
    pub trophies: [TrophyPlayback; 2],
    pub throttle: FrameThrottle,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl PageState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scroll: 0.0,
            counters: STATS.map(|s| CountUp::new(s.target)),
            nav_copy: CopyFeedback::nav(BUSINESS_EMAIL),
            card_copies: CONTACT_CARDS.map(|c| CopyFeedback::card(c.email)),
            trophies: [TrophyPlayback::default(); 2],
            throttle: FrameThrottle::default(),
        }
    }

    pub fn set_scroll(&mut self, scroll: f64) {
        self.scroll = sanitize_scroll(scroll);
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn copy(&self, target: CopyTarget) -> Option<&CopyFeedback> {
        match target {
            CopyTarget::Nav => Some(&self.nav_copy),
            CopyTarget::Card(i) => self.card_copies.get(i),
        }
    }

    pub fn copy_mut(&mut self, target: CopyTarget) -> Option<&mut CopyFeedback> {
        match target {
            CopyTarget::Nav => Some(&mut self.nav_copy),
            CopyTarget::Card(i) => self.card_copies.get_mut(i),
        }
    }

    /// Recomputes the scene for the current scroll/viewport and steps every
    /// time-driven animation to `now`.
    pub fn advance(&mut self, now: Duration) -> FrameOutcome {
        let scene = SceneState::compute(self.scroll, self.viewport);

        let mut counters_changed = [false; 3];
        let mut counters_started = [false; 3];
        for (i, counter) in self.counters.iter_mut().enumerate() {
            counters_started[i] =
                counter.observe_scroll(scene.scroll, scene.stat_thresholds[i], now);
            let ticked = counter.tick(now);
            counters_changed[i] = counters_started[i] || ticked;
        }

        let mut playback = [None, None];
        for (i, pb) in self.trophies.iter_mut().enumerate() {
            playback[i] = match &scene.trophies {
                Some(states) => pb.update(states[i].phase),
                // Trophies are unmounted on mobile; make sure nothing keeps playing.
                None => pb.update(TrophyPhase::Hidden),
            };
        }

        let animating = self.counters.iter().any(CountUp::is_animating);
        FrameOutcome {
            scene,
            counters_changed,
            counters_started,
            playback,
            animating,
        }
    }
}
