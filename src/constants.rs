/// Scroll thresholds and animation tuning constants.
///
/// Thresholds are fractions of the viewport height so the choreography scales
/// with the window; everything else is in pixels, degrees or milliseconds.
// Layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // widths below this use the mobile layout
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

// Hero -> sky transition
pub const HERO_SHIFT_START: f64 = 0.12; // background starts sliding up here
pub const TRANSITION_START: f64 = 0.11;
pub const TRANSITION_END: f64 = 0.50;
pub const HERO_BG_FADE_RATE: f64 = 1.5; // hero background fades faster than the transition
pub const SKY_FADE_RATE: f64 = 1.2;
pub const HERO_CONTENT_FADE_RATE: f64 = 1.2;
pub const HERO_CONTENT_MIN_OPACITY: f64 = 0.2;
pub const HERO_CONTENT_PARALLAX: f64 = 0.3;
pub const PINK_OVERLAY_ALPHAS: [f64; 4] = [0.15, 0.25, 0.35, 0.45];

// Sky video scrubbing
pub const SKY_VIDEO_START: f64 = 0.18;
pub const SKY_VIDEO_SPAN: f64 = 1.5;

// Social balloons
pub const BALLOON_PARALLAX: f64 = 0.8;
pub const BALLOON_SHRINK_DISTANCE_PX: f64 = 1000.0;
pub const BALLOON_MAX_SHRINK: f64 = 0.5;

// "View Count" heading
pub const HEADING_DESKTOP: (f64, f64) = (0.27, 0.34);
pub const HEADING_MOBILE: (f64, f64) = (0.18, 0.25);
pub const HEADING_TOP_DESKTOP: f64 = 0.77;
pub const HEADING_TOP_MOBILE: f64 = 0.88;
pub const SLIDE_IN_DISTANCE_PX: f64 = 50.0; // shared by heading and contact section

// Stat rows fade in over this span once their reveal threshold is crossed
pub const STAT_FADE_SPAN: f64 = 0.08;

// Contact section
pub const CONTACT_DESKTOP: (f64, f64) = (0.58, 0.65);
pub const CONTACT_MOBILE: (f64, f64) = (0.38, 0.45);

// Trophies (desktop only)
pub const TROPHY_START: f64 = 0.45;
pub const TROPHY_MIDPOINT: f64 = 1.0;
pub const TROPHY_RAMP: f64 = 0.15; // entry and exit both ramp over this span

pub const TROPHY_HIDDEN_X: f64 = 500.0;
pub const TROPHY_HIDDEN_ROTATE_DEG: f64 = 75.0;
pub const TROPHY_HIDDEN_SCALE: f64 = 0.7018;

pub const TROPHY_BASE_X: f64 = 400.0;
pub const TROPHY_ENTRY_TRAVEL_X: f64 = 250.0;
pub const TROPHY_EXIT_TRAVEL_X: f64 = 400.0;
pub const TROPHY_BASE_ROTATE_DEG: f64 = 60.0;
pub const TROPHY_ENTRY_ROTATE_DEG: f64 = 37.0; // settles at a 23 degree tilt
pub const TROPHY_EXIT_ROTATE_DEG: f64 = 20.0;
pub const TROPHY_ENTRY_SCALE: f64 = 0.84216;
pub const TROPHY_ENTRY_SCALE_GAIN: f64 = 0.56144;
pub const TROPHY_PEAK_SCALE: f64 = 1.4036;
pub const TROPHY_EXIT_SCALE_LOSS: f64 = 0.42108;

// Counters
pub const COUNT_UP_DURATION_MS: f64 = 3000.0;
pub const FINAL_TEXT_HOLD_MS: f64 = 1000.0;
pub const DIGIT_COLLAPSE_STAGGER_MS: u32 = 100;
pub const FINAL_TEXT_EXTRA_DELAY_MS: u32 = 500;

// Copy feedback
pub const NAV_COPY_FEEDBACK_MS: i32 = 1500;
pub const CARD_COPY_FEEDBACK_MS: i32 = 2000;

// Banner
pub const BANNER_REPEATS: usize = 22;
