use crate::constants::*;
use crate::core::content::STATS;
use crate::core::easing::clamp01;
use crate::core::scroll::{sanitize_scroll, ScrollRegion, Viewport};
use crate::core::trophy::{Side, TrophyState};

/// Fade-and-rise entrance used by the heading and the contact section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideIn {
    pub opacity: f64,
    pub translate_y: f64,
    /// Once fully revealed the CSS transition is dropped so the element
    /// tracks the scroll exactly.
    pub settled: bool,
}

impl SlideIn {
    pub fn from_progress(progress: f64) -> Self {
        Self {
            opacity: progress,
            translate_y: (1.0 - progress) * SLIDE_IN_DISTANCE_PX,
            settled: progress >= 1.0,
        }
    }

    pub fn transition_css(&self) -> &'static str {
        if self.settled {
            "none"
        } else {
            "opacity 0.3s ease-out, transform 0.3s ease-out"
        }
    }
}

/// Every scroll-derived style parameter on the page for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneState {
    pub scroll: f64,
    pub viewport: Viewport,
    pub mobile: bool,

    /// Hero -> sky transition progress.
    pub transition: f64,
    pub hero_shift: f64,
    pub hero_bg_opacity: f64,
    pub sky_opacity: f64,
    pub sky_scrub: f64,
    pub pink_alphas: [f64; 4],

    pub hero_content_shift: f64,
    pub hero_content_opacity: f64,
    pub balloon_shift: f64,
    pub balloon_scale: f64,

    pub heading: SlideIn,
    pub heading_top: f64,

    /// Absolute reveal thresholds, one per entry in `content::STATS`.
    pub stat_thresholds: [f64; 3],
    pub stat_opacity: [f64; 3],

    pub contact: SlideIn,

    /// `None` on mobile, where the trophies are not rendered.
    pub trophies: Option<[TrophyState; 2]>,
}

impl SceneState {
    pub fn compute(scroll: f64, viewport: Viewport) -> Self {
        let scroll = sanitize_scroll(scroll);
        let mobile = viewport.is_mobile();

        let transition =
            ScrollRegion::new(viewport.at(TRANSITION_START), viewport.at(TRANSITION_END))
                .progress(scroll);
        let sky_scrub =
            ScrollRegion::with_span(viewport.at(SKY_VIDEO_START), viewport.at(SKY_VIDEO_SPAN))
                .progress(scroll);

        let heading_region = viewport.region(if mobile {
            HEADING_MOBILE
        } else {
            HEADING_DESKTOP
        });
        let contact_region = viewport.region(if mobile {
            CONTACT_MOBILE
        } else {
            CONTACT_DESKTOP
        });

        let stat_thresholds = STATS.map(|s| viewport.at(s.reveal.fraction(mobile)));
        let stat_opacity = stat_thresholds.map(|t| {
            ScrollRegion::with_span(t, viewport.at(STAT_FADE_SPAN)).progress(scroll)
        });

        let trophies = (!mobile).then(|| {
            [
                TrophyState::compute(Side::Left, scroll, viewport),
                TrophyState::compute(Side::Right, scroll, viewport),
            ]
        });

        Self {
            scroll,
            viewport,
            mobile,
            transition,
            hero_shift: (scroll - viewport.at(HERO_SHIFT_START)).max(0.0),
            hero_bg_opacity: clamp01(1.0 - transition * HERO_BG_FADE_RATE),
            sky_opacity: clamp01(transition * SKY_FADE_RATE),
            sky_scrub,
            pink_alphas: PINK_OVERLAY_ALPHAS.map(|a| a * transition),
            hero_content_shift: scroll * HERO_CONTENT_PARALLAX,
            hero_content_opacity: (1.0 - transition * HERO_CONTENT_FADE_RATE)
                .max(HERO_CONTENT_MIN_OPACITY),
            balloon_shift: scroll * BALLOON_PARALLAX,
            balloon_scale: 1.0 - (scroll / BALLOON_SHRINK_DISTANCE_PX).min(BALLOON_MAX_SHRINK),
            heading: SlideIn::from_progress(heading_region.progress(scroll)),
            heading_top: viewport.at(if mobile {
                HEADING_TOP_MOBILE
            } else {
                HEADING_TOP_DESKTOP
            }),
            stat_thresholds,
            stat_opacity,
            contact: SlideIn::from_progress(contact_region.progress(scroll)),
            trophies,
        }
    }

    /// The pink fade at the bottom of the hero only exists mid-transition.
    #[inline]
    pub fn pink_visible(&self) -> bool {
        self.transition > 0.0
    }

    pub fn pink_gradient_css(&self) -> String {
        let [a, b, c, d] = self.pink_alphas;
        format!(
            "linear-gradient(to bottom, transparent 0%, transparent 70%, \
             rgba(236, 72, 153, {a:.3}) 80%, rgba(219, 39, 119, {b:.3}) 90%, \
             rgba(190, 24, 93, {c:.3}) 95%, rgba(157, 23, 77, {d:.3}) 100%)"
        )
    }
}
