/// In-flight flag that coalesces bursts of scroll/resize events into at most
/// one pending animation frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns true if the caller should schedule a frame now.
    #[inline]
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called at the top of the frame callback so the next event can schedule again.
    #[inline]
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
