use crate::constants::{
    COUNT_UP_DURATION_MS, DIGIT_COLLAPSE_STAGGER_MS, FINAL_TEXT_EXTRA_DELAY_MS,
    FINAL_TEXT_HOLD_MS,
};
use crate::core::easing::ease_out_quart;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountPhase {
    /// Waiting for the scroll threshold.
    Idle,
    /// Interpolating towards the target.
    Counting { started: Duration },
    /// Target reached; the final text appears once the hold elapses.
    Holding { finished: Duration },
    /// Final text showing. Terminal.
    Settled,
}

/// Latched count-up from 0 to `target` over a fixed duration.
///
/// Time is supplied by the caller as an offset from any fixed origin, so the
/// state machine stays independent of the platform clock.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: u64,
    value: u64,
    phase: CountPhase,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            value: 0,
            phase: CountPhase::Idle,
        }
    }

    /// Starts the animation the first time `scroll` reaches `threshold`.
    /// Returns true only for the call that triggered it.
    pub fn observe_scroll(&mut self, scroll: f64, threshold: f64, now: Duration) -> bool {
        if self.phase != CountPhase::Idle || !(scroll >= threshold) {
            return false;
        }
        self.phase = CountPhase::Counting { started: now };
        self.value = 0;
        true
    }

    /// Advances the animation. Returns true when the rendered output changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        match self.phase {
            CountPhase::Idle | CountPhase::Settled => false,
            CountPhase::Counting { started } => {
                let elapsed_ms = now.saturating_sub(started).as_secs_f64() * 1000.0;
                let t = (elapsed_ms / COUNT_UP_DURATION_MS).min(1.0);
                let next = ((self.target as f64) * ease_out_quart(t)).floor() as u64;
                let next = next.clamp(self.value, self.target);
                let changed = next != self.value;
                self.value = next;
                if t >= 1.0 {
                    self.value = self.target;
                    self.phase = CountPhase::Holding { finished: now };
                    return true;
                }
                changed
            }
            CountPhase::Holding { finished } => {
                let held_ms = now.saturating_sub(finished).as_secs_f64() * 1000.0;
                if held_ms >= FINAL_TEXT_HOLD_MS {
                    self.phase = CountPhase::Settled;
                    true
                } else {
                    false
                }
            }
        }
    }

    #[inline]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[inline]
    pub fn display_value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub fn phase(&self) -> CountPhase {
        self.phase
    }

    /// True while the caller needs to keep sampling frames.
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            CountPhase::Counting { .. } | CountPhase::Holding { .. }
        )
    }

    #[inline]
    pub fn shows_final_text(&self) -> bool {
        self.phase == CountPhase::Settled
    }
}

/// Formats with comma thousands separators, e.g. `12,000,000`.
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Glyphs rendered for a counter value: grouped digits followed by the suffix.
pub fn digit_glyphs(value: u64, suffix: &str) -> SmallVec<[char; 16]> {
    format_grouped(value).chars().chain(suffix.chars()).collect()
}

/// Transition delay before glyph `index` collapses.
#[inline]
pub fn collapse_delay_ms(index: usize) -> u32 {
    index as u32 * DIGIT_COLLAPSE_STAGGER_MS
}

/// Transition delay before the final text slides in, after every glyph
/// has collapsed.
#[inline]
pub fn final_text_delay_ms(glyph_count: usize) -> u32 {
    glyph_count as u32 * DIGIT_COLLAPSE_STAGGER_MS + FINAL_TEXT_EXTRA_DELAY_MS
}
