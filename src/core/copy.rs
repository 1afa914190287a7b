use crate::constants::{CARD_COPY_FEEDBACK_MS, NAV_COPY_FEEDBACK_MS};

/// Text shown on a copy affordance in each of its states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyLabels {
    pub hovering: &'static str,
    pub copied: &'static str,
}

pub const NAV_LABELS: CopyLabels = CopyLabels {
    hovering: "Copy Email?",
    copied: "Copied",
};

pub const CARD_LABELS: CopyLabels = CopyLabels {
    hovering: "Click to copy",
    copied: "Copied!",
};

/// Transient "copied" feedback for a click-to-copy element.
///
/// Each successful copy hands out a token; the timer that later calls
/// [`CopyFeedback::expire`] only clears the flag if no newer copy happened.
#[derive(Clone, Debug)]
pub struct CopyFeedback {
    text: &'static str,
    labels: CopyLabels,
    timeout_ms: i32,
    hovering: bool,
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    pub fn new(text: &'static str, labels: CopyLabels, timeout_ms: i32) -> Self {
        Self {
            text,
            labels,
            timeout_ms,
            hovering: false,
            copied: false,
            generation: 0,
        }
    }

    /// Navigation button variant.
    pub fn nav(text: &'static str) -> Self {
        Self::new(text, NAV_LABELS, NAV_COPY_FEEDBACK_MS)
    }

    /// Contact card variant.
    pub fn card(text: &'static str) -> Self {
        Self::new(text, CARD_LABELS, CARD_COPY_FEEDBACK_MS)
    }

    #[inline]
    pub fn text(&self) -> &'static str {
        self.text
    }

    #[inline]
    pub fn timeout_ms(&self) -> i32 {
        self.timeout_ms
    }

    #[inline]
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Records a successful clipboard write and returns the token to expire it with.
    pub fn mark_copied(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        self.generation
    }

    /// Clears the flag if `token` belongs to the latest copy. Returns whether
    /// anything changed.
    pub fn expire(&mut self, token: u64) -> bool {
        if self.copied && token == self.generation {
            self.copied = false;
            true
        } else {
            false
        }
    }

    /// Copied beats hovering beats the plain text.
    pub fn label(&self) -> &'static str {
        if self.copied {
            self.labels.copied
        } else if self.hovering {
            self.labels.hovering
        } else {
            self.text
        }
    }
}
