// Builds the content-driven parts of the page and collects element handles.

use crate::constants::BANNER_REPEATS;
use crate::core::content::{
    TrophyMedia, BANNER_IMAGE, BANNER_TEXT, BRAND_NAME, BUSINESS_EMAIL, CONTACT_CARDS,
    HERO_BACKGROUND, LEFT_TROPHY, RIGHT_TROPHY, SKY_VIDEO_URL, SOCIAL_LINKS, STATS, TAGLINE,
    TROPHY_GLYPH,
};
use crate::core::Side;
use crate::dom;
use crate::error::Result;
use web_sys as web;

/// A counter row: label plus the glyph strip and the final text overlay.
pub struct CounterView {
    pub row: web::HtmlElement,
    pub glyphs: web::HtmlElement,
    pub final_text: web::HtmlElement,
    /// Glyph string last written, to skip identical rewrites.
    pub rendered: String,
}

pub struct CopyView {
    pub root: web::HtmlElement,
    pub label: web::HtmlElement,
}

pub struct TrophyView {
    pub side: Side,
    pub root: web::HtmlElement,
    pub media: web::HtmlElement,
    pub video: web::HtmlVideoElement,
    /// Last `<source>`; its `error` event means every source failed.
    pub last_source: web::HtmlElement,
    pub loading: web::HtmlElement,
}

pub struct PageElements {
    pub hero_bg: web::HtmlElement,
    pub pink_overlay: web::HtmlElement,
    pub sky_layer: web::HtmlElement,
    pub sky_video: web::HtmlVideoElement,
    pub hero_content: web::HtmlElement,
    pub balloons: Vec<web::HtmlElement>,
    pub heading: web::HtmlElement,
    pub counters: Vec<CounterView>,
    pub contact: web::HtmlElement,
    pub nav_copy: CopyView,
    pub cards: Vec<CopyView>,
    pub trophies: Vec<TrophyView>,
}

impl PageElements {
    pub fn build(document: &web::Document) -> Result<Self> {
        let hero_bg: web::HtmlElement = dom::element_by_id(document, "hero-bg")?;
        dom::set_style(
            &hero_bg,
            "background-image",
            &format!("url({})", HERO_BACKGROUND),
        );

        let sky_video: web::HtmlVideoElement = dom::element_by_id(document, "sky-video")?;
        sky_video.set_muted(true);
        sky_video.set_preload("metadata");
        _ = sky_video.set_attribute("playsinline", "");
        sky_video.set_src(SKY_VIDEO_URL);

        let brand: web::HtmlElement = dom::element_by_id(document, "brand")?;
        brand.set_text_content(Some(BRAND_NAME));
        let tagline: web::HtmlElement = dom::element_by_id(document, "tagline")?;
        tagline.set_text_content(Some(TAGLINE));

        build_banner(document)?;
        let balloons = build_social_links(document)?;

        let nav_root: web::HtmlElement = dom::element_by_id(document, "nav-copy")?;
        let nav_label: web::HtmlElement = dom::element_by_id(document, "nav-copy-label")?;
        nav_label.set_text_content(Some(BUSINESS_EMAIL));

        Ok(Self {
            hero_bg,
            pink_overlay: dom::element_by_id(document, "pink-overlay")?,
            sky_layer: dom::element_by_id(document, "sky-layer")?,
            sky_video,
            hero_content: dom::element_by_id(document, "hero-content")?,
            balloons,
            heading: dom::element_by_id(document, "view-count")?,
            counters: build_counters(document)?,
            contact: dom::element_by_id(document, "contact-section")?,
            nav_copy: CopyView {
                root: nav_root,
                label: nav_label,
            },
            cards: build_contact_cards(document)?,
            trophies: build_trophies(document)?,
        })
    }
}

fn build_banner(document: &web::Document) -> Result<()> {
    let track: web::HtmlElement = dom::element_by_id(document, "banner-track")?;
    for _ in 0..BANNER_REPEATS {
        let text: web::HtmlElement = dom::create(document, "span", "banner-text")?;
        text.set_text_content(Some(BANNER_TEXT));
        track.append_child(&text)?;
        let img: web::HtmlElement = dom::create(document, "img", "banner-image")?;
        img.set_attribute("src", BANNER_IMAGE)?;
        img.set_attribute("alt", "Basketball player")?;
        track.append_child(&img)?;
    }
    Ok(())
}

fn build_social_links(document: &web::Document) -> Result<Vec<web::HtmlElement>> {
    let container: web::HtmlElement = dom::element_by_id(document, "social-links")?;
    let mut balloons = Vec::with_capacity(SOCIAL_LINKS.len());
    for (i, link) in SOCIAL_LINKS.iter().enumerate() {
        let anchor: web::HtmlElement = dom::create(document, "a", "social-link")?;
        anchor.set_attribute("href", link.url)?;
        anchor.set_attribute("target", "_blank")?;
        anchor.set_attribute("rel", "noopener noreferrer")?;
        anchor.set_attribute("aria-label", link.name)?;

        // The float animation sits on the icon; the balloon's own transform
        // belongs to the scroll parallax.
        let balloon: web::HtmlElement =
            dom::create(document, "div", &format!("balloon {}", link.css_class))?;
        let icon: web::HtmlElement = dom::create(document, "span", "balloon-icon animate-float")?;
        dom::set_style(&icon, "animation-delay", &format!("{}s", i as f64 * 0.5));
        icon.set_text_content(Some(&link.name[..1]));
        balloon.append_child(&icon)?;

        let caption: web::HtmlElement = dom::create(document, "p", "social-caption")?;
        caption.set_text_content(Some(link.name));

        anchor.append_child(&balloon)?;
        anchor.append_child(&caption)?;
        container.append_child(&anchor)?;
        balloons.push(balloon);
    }
    Ok(balloons)
}

fn build_counters(document: &web::Document) -> Result<Vec<CounterView>> {
    let list: web::HtmlElement = dom::element_by_id(document, "stats-list")?;
    let mut views = Vec::with_capacity(STATS.len());
    for stat in STATS.iter() {
        let row: web::HtmlElement = dom::create(document, "div", "stat-row")?;
        dom::set_opacity(&row, 0.0);

        let label: web::HtmlElement = dom::create(document, "h3", "stat-label")?;
        label.set_text_content(Some(stat.label));

        let value: web::HtmlElement = dom::create(document, "div", "stat-value")?;
        let glyphs: web::HtmlElement = dom::create(document, "div", "stat-glyphs")?;
        let final_text: web::HtmlElement = dom::create(document, "div", "stat-final")?;
        final_text.set_text_content(Some(stat.final_text));

        value.append_child(&glyphs)?;
        value.append_child(&final_text)?;
        row.append_child(&label)?;
        row.append_child(&value)?;
        list.append_child(&row)?;

        views.push(CounterView {
            row,
            glyphs,
            final_text,
            rendered: String::new(),
        });
    }
    Ok(views)
}

fn build_contact_cards(document: &web::Document) -> Result<Vec<CopyView>> {
    let grid: web::HtmlElement = dom::element_by_id(document, "contact-grid")?;
    let mut views = Vec::with_capacity(CONTACT_CARDS.len());
    for card in CONTACT_CARDS.iter() {
        let wrapper: web::HtmlElement = dom::create(document, "div", "contact-card")?;
        let heading: web::HtmlElement = dom::create(document, "h3", "contact-heading")?;
        heading.set_text_content(Some(card.label));

        let root: web::HtmlElement = dom::create(document, "div", "copy-target")?;
        root.set_attribute("role", "button")?;
        root.set_attribute("tabindex", "0")?;
        let label: web::HtmlElement = dom::create(document, "span", "copy-label")?;
        label.set_text_content(Some(card.email));
        root.append_child(&label)?;

        wrapper.append_child(&heading)?;
        wrapper.append_child(&root)?;
        grid.append_child(&wrapper)?;
        views.push(CopyView { root, label });
    }
    Ok(views)
}

fn build_trophies(document: &web::Document) -> Result<Vec<TrophyView>> {
    let container: web::HtmlElement = dom::element_by_id(document, "trophies")?;
    [(Side::Left, LEFT_TROPHY), (Side::Right, RIGHT_TROPHY)]
        .into_iter()
        .map(|(side, media)| -> Result<TrophyView> {
            let view = build_trophy(document, side, media)?;
            container.append_child(&view.root)?;
            Ok(view)
        })
        .collect()
}

fn build_trophy(document: &web::Document, side: Side, media: TrophyMedia) -> Result<TrophyView> {
    let root: web::HtmlElement =
        dom::create(document, "div", &format!("trophy trophy-{}", side.as_str()))?;

    let video: web::HtmlVideoElement = dom::create(document, "video", "trophy-media")?;
    video.set_muted(true);
    video.set_loop(true);
    video.set_preload("metadata");
    video.set_attribute("playsinline", "")?;

    let webm: web::HtmlElement = dom::create(document, "source", "")?;
    webm.set_attribute("src", media.webm)?;
    webm.set_attribute("type", "video/webm")?;
    let mp4: web::HtmlElement = dom::create(document, "source", "")?;
    mp4.set_attribute("src", media.mp4)?;
    mp4.set_attribute("type", "video/mp4")?;
    video.append_child(&webm)?;
    video.append_child(&mp4)?;

    let loading: web::HtmlElement = dom::create(document, "div", "trophy-loading")?;
    loading.set_text_content(Some(TROPHY_GLYPH));

    root.append_child(&video)?;
    root.append_child(&loading)?;

    Ok(TrophyView {
        side,
        root,
        media: video.clone().into(),
        video,
        last_source: mp4,
        loading,
    })
}

/// Replaces a trophy's video with the static glyph after a load failure.
pub fn swap_in_trophy_fallback(document: &web::Document, view: &mut TrophyView) -> Result<()> {
    let fallback: web::HtmlElement = dom::create(document, "div", "trophy-media trophy-fallback")?;
    let glyph: web::HtmlElement = dom::create(document, "div", "trophy-glyph")?;
    glyph.set_text_content(Some(TROPHY_GLYPH));
    fallback.append_child(&glyph)?;
    view.root.replace_child(&fallback, &view.media)?;
    view.media = fallback;
    dom::set_style(&view.loading, "display", "none");
    Ok(())
}
