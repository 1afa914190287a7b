use crate::constants::*;
use crate::core::scroll::{ScrollRegion, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal direction away from the page centre.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrophyPhase {
    Hidden,
    Entering,
    Exiting,
}

/// Style parameters for one trophy, on top of its vertical centring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrophyTransform {
    pub translate_x: f64,
    pub rotate_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl TrophyTransform {
    pub fn css(&self) -> String {
        format!(
            "translateY(-50%) translateX({:.2}px) rotate({:.2}deg) scale({:.5})",
            self.translate_x, self.rotate_deg, self.scale
        )
    }
}

/// Scroll-derived state of one trophy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrophyState {
    pub side: Side,
    pub phase: TrophyPhase,
    pub entry: f64,
    pub exit: f64,
}

impl TrophyState {
    /// Trophies enter at `start`, begin leaving at `midpoint`, and each ramp
    /// takes `TROPHY_RAMP` viewport heights.
    pub fn compute(side: Side, scroll: f64, viewport: Viewport) -> Self {
        let start = viewport.at(TROPHY_START);
        let midpoint = viewport.at(TROPHY_MIDPOINT);
        let ramp = viewport.at(TROPHY_RAMP);
        let entry = ScrollRegion::with_span(start, ramp).progress(scroll);
        let exit = ScrollRegion::with_span(midpoint, ramp).progress(scroll);
        let phase = if scroll >= midpoint {
            TrophyPhase::Exiting
        } else if ScrollRegion::new(start, midpoint).contains(scroll) {
            TrophyPhase::Entering
        } else {
            TrophyPhase::Hidden
        };
        Self {
            side,
            phase,
            entry,
            exit,
        }
    }

    pub fn transform(&self) -> TrophyTransform {
        let s = self.side.sign();
        match self.phase {
            TrophyPhase::Hidden => TrophyTransform {
                translate_x: s * TROPHY_HIDDEN_X,
                rotate_deg: s * TROPHY_HIDDEN_ROTATE_DEG,
                scale: TROPHY_HIDDEN_SCALE,
                opacity: 0.0,
            },
            TrophyPhase::Entering => TrophyTransform {
                translate_x: s * (TROPHY_BASE_X - self.entry * TROPHY_ENTRY_TRAVEL_X),
                rotate_deg: s * (TROPHY_BASE_ROTATE_DEG - self.entry * TROPHY_ENTRY_ROTATE_DEG),
                scale: TROPHY_ENTRY_SCALE + self.entry * TROPHY_ENTRY_SCALE_GAIN,
                opacity: self.entry,
            },
            TrophyPhase::Exiting => TrophyTransform {
                translate_x: s * (TROPHY_BASE_X + self.exit * TROPHY_EXIT_TRAVEL_X),
                rotate_deg: s * (TROPHY_BASE_ROTATE_DEG + self.exit * TROPHY_EXIT_ROTATE_DEG),
                scale: TROPHY_PEAK_SCALE - self.exit * TROPHY_EXIT_SCALE_LOSS,
                opacity: 1.0 - self.exit,
            },
        }
    }

    /// The idle loop animation only runs while the trophy is on stage.
    #[inline]
    pub fn loops(&self) -> bool {
        self.phase == TrophyPhase::Entering
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Rewind to the start and play.
    Restart,
    Pause,
}

/// Load status of a trophy video plus the playback edge detector.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrophyPlayback {
    loaded: bool,
    failed: bool,
    playing: bool,
}

impl TrophyPlayback {
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
        self.failed = false;
    }

    pub fn mark_failed(&mut self) {
        self.failed = true;
        self.playing = false;
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[inline]
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Loading indicator shows until the video either loads or fails.
    #[inline]
    pub fn shows_loading(&self) -> bool {
        !self.loaded && !self.failed
    }

    /// Returns the command needed to move the video into the state implied by
    /// `phase`, or `None` if it is already there.
    pub fn update(&mut self, phase: TrophyPhase) -> Option<PlaybackCommand> {
        if self.failed {
            return None;
        }
        let want = self.loaded && phase == TrophyPhase::Entering;
        if want == self.playing {
            return None;
        }
        self.playing = want;
        Some(if want {
            PlaybackCommand::Restart
        } else {
            PlaybackCommand::Pause
        })
    }
}
