// Pushes computed scene parameters into element styles.

use crate::core::counter::{collapse_delay_ms, digit_glyphs, final_text_delay_ms};
use crate::core::{CopyFeedback, CountUp, SceneState};
use crate::dom::{self, set_class, set_opacity, set_style};
use crate::error::Result;
use crate::page::{CopyView, CounterView, PageElements};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn apply_scene(el: &PageElements, scene: &SceneState) {
    set_style(
        &el.hero_bg,
        "transform",
        &format!("translateY(-{:.2}px)", scene.hero_shift),
    );
    set_opacity(&el.hero_bg, scene.hero_bg_opacity);

    set_style(&el.pink_overlay, "background", &scene.pink_gradient_css());
    set_opacity(&el.pink_overlay, if scene.pink_visible() { 1.0 } else { 0.0 });

    set_opacity(&el.sky_layer, scene.sky_opacity);

    set_style(
        &el.hero_content,
        "transform",
        &format!("translateY(-{:.2}px)", scene.hero_content_shift),
    );
    set_opacity(&el.hero_content, scene.hero_content_opacity);

    let balloon_transform = format!(
        "translateY(-{:.2}px) scale({:.4})",
        scene.balloon_shift, scene.balloon_scale
    );
    for balloon in &el.balloons {
        set_style(balloon, "transform", &balloon_transform);
    }

    set_style(&el.heading, "top", &format!("{:.2}px", scene.heading_top));
    set_class(&el.heading, "mobile", scene.mobile);
    set_opacity(&el.heading, scene.heading.opacity);
    set_style(
        &el.heading,
        "transform",
        &format!("translateY({:.2}px)", scene.heading.translate_y),
    );
    set_style(&el.heading, "transition", scene.heading.transition_css());

    for (view, opacity) in el.counters.iter().zip(scene.stat_opacity) {
        set_opacity(&view.row, opacity);
    }

    set_opacity(&el.contact, scene.contact.opacity);
    set_style(
        &el.contact,
        "transform",
        &format!("translateY({:.2}px)", scene.contact.translate_y),
    );
    set_style(&el.contact, "transition", scene.contact.transition_css());

    match &scene.trophies {
        Some(states) => {
            for (view, state) in el.trophies.iter().zip(states.iter()) {
                let t = state.transform();
                set_style(&view.root, "display", "");
                set_style(&view.root, "transform", &t.css());
                set_opacity(&view.root, t.opacity);
                set_class(&view.media, "animate-trophy-loop", state.loops());
            }
        }
        None => {
            for view in &el.trophies {
                set_style(&view.root, "display", "none");
            }
        }
    }
}

/// Redraws a counter's glyph strip, or collapses it into the final text once
/// the count has settled.
pub fn render_counter(
    document: &web::Document,
    view: &mut CounterView,
    counter: &CountUp,
    suffix: &str,
) -> Result<()> {
    let glyphs = digit_glyphs(counter.display_value(), suffix);
    let text: String = glyphs.iter().collect();
    if text != view.rendered {
        view.glyphs.set_text_content(None);
        for ch in glyphs.iter() {
            let span: web::HtmlElement = dom::create(document, "span", "glyph")?;
            let mut buf = [0u8; 4];
            span.set_text_content(Some(ch.encode_utf8(&mut buf)));
            view.glyphs.append_child(&span)?;
        }
        view.rendered = text;
    }

    let settled = counter.shows_final_text();
    let children = view.glyphs.children();
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            set_class(&child, "collapsed", settled);
            if let Ok(span) = child.dyn_into::<web::HtmlElement>() {
                let delay = if settled { collapse_delay_ms(i as usize) } else { 0 };
                set_style(&span, "transition-delay", &format!("{}ms", delay));
            }
        }
    }
    set_class(&view.final_text, "shown", settled);
    let delay = if settled {
        final_text_delay_ms(glyphs.len())
    } else {
        0
    };
    set_style(&view.final_text, "transition-delay", &format!("{}ms", delay));
    Ok(())
}

pub fn render_copy(view: &CopyView, feedback: &CopyFeedback) {
    view.label.set_text_content(Some(feedback.label()));
    set_class(&view.root, "copied", feedback.is_copied());
}
