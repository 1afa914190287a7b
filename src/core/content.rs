// Static page content: brand copy, links, stats and asset locations.

pub const BRAND_NAME: &str = "Clutch Time Clips";
pub const TAGLINE: &str = "Showcasing the Best Basketball Content";
pub const BANNER_TEXT: &str = "Edits ~ Top 5 Moments ~ Custom Mixtapes";
pub const BUSINESS_EMAIL: &str = "contact@clutchtimeclips.com";

pub const HERO_BACKGROUND: &str = "/background-ctc.webp";
pub const BANNER_IMAGE: &str = "/rodman-player.png";
pub const SKY_VIDEO_URL: &str = "https://cdn.jsdelivr.net/gh/27ruiyan/v0-assets/20250615_2225_Serene Sky Animation_simple_compose_01jxv8xcqsfbja93a4cvkpchmn.mp4";
pub const TROPHY_GLYPH: &str = "\u{1F3C6}";

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    /// Gradient class applied to the balloon.
    pub css_class: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "Instagram",
        url: "https://www.instagram.com/clutch_time_clips",
        css_class: "balloon-instagram",
    },
    SocialLink {
        name: "TikTok",
        url: "https://www.tiktok.com/@clutch_time_clips",
        css_class: "balloon-tiktok",
    },
    SocialLink {
        name: "YouTube",
        url: "https://www.youtube.com/@clutch_time_clips",
        css_class: "balloon-youtube",
    },
];

/// Scroll threshold for a reveal, as viewport-height fractions per layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub desktop: f64,
    pub mobile: f64,
}

impl Reveal {
    #[inline]
    pub fn fraction(&self, mobile: bool) -> f64 {
        if mobile {
            self.mobile
        } else {
            self.desktop
        }
    }
}

/// One view-count statistic. Constant for the page's lifetime.
#[derive(Clone, Copy, Debug)]
pub struct StatConfig {
    pub label: &'static str,
    pub target: u64,
    pub suffix: &'static str,
    pub final_text: &'static str,
    pub reveal: Reveal,
}

pub const STATS: [StatConfig; 3] = [
    StatConfig {
        label: "TikTok",
        target: 5_000_000,
        suffix: "+",
        final_text: "5 Million+",
        reveal: Reveal {
            desktop: 0.35,
            mobile: 0.25,
        },
    },
    StatConfig {
        label: "YouTube",
        target: 12_000_000,
        suffix: "+",
        final_text: "12 Million+",
        reveal: Reveal {
            desktop: 0.40,
            mobile: 0.28,
        },
    },
    StatConfig {
        label: "Instagram",
        target: 25_000_000,
        suffix: "+",
        final_text: "25 Million+",
        reveal: Reveal {
            desktop: 0.45,
            mobile: 0.31,
        },
    },
];

#[derive(Clone, Copy, Debug)]
pub struct ContactCard {
    pub label: &'static str,
    pub email: &'static str,
}

pub const CONTACT_CARDS: [ContactCard; 2] = [
    ContactCard {
        label: "Want to work with us?",
        email: "contact@clutchtimeclips.com",
    },
    ContactCard {
        label: "Have questions?",
        email: "support@clutchtimeclips.com",
    },
];

/// Video sources for a trophy, in preference order.
#[derive(Clone, Copy, Debug)]
pub struct TrophyMedia {
    pub webm: &'static str,
    pub mp4: &'static str,
}

pub const LEFT_TROPHY: TrophyMedia = TrophyMedia {
    webm: "/wreath-trophy.webm",
    mp4: "/wreath-trophy.mp4",
};

pub const RIGHT_TROPHY: TrophyMedia = TrophyMedia {
    webm: "/nba-trophy.webm",
    mp4: "/nba-trophy.mp4",
};
