use crate::core::{PageState, PlaybackCommand};
use crate::dom::{self, Listener};
use crate::error::Result;
use crate::frame::Scheduler;
use crate::page::{self, PageElements, TrophyView};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Seeks the sky video to `fraction` of its length once metadata is known.
pub fn scrub_sky(video: &web::HtmlVideoElement, fraction: f64) {
    let duration = video.duration();
    if !duration.is_finite() || duration <= 0.0 {
        return;
    }
    let target = fraction * duration;
    if (video.current_time() - target).abs() > f64::EPSILON {
        video.set_current_time(target);
    }
}

pub fn apply_playback(view: &TrophyView, cmd: PlaybackCommand) {
    match cmd {
        PlaybackCommand::Restart => {
            view.video.set_current_time(0.0);
            match view.video.play() {
                Ok(promise) => {
                    let side = view.side.as_str();
                    spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            log::info!("[trophy] {} autoplay failed: {:?}", side, e);
                        }
                    });
                }
                Err(e) => log::info!("[trophy] {} autoplay failed: {:?}", view.side.as_str(), e),
            }
        }
        PlaybackCommand::Pause => {
            _ = view.video.pause();
        }
    }
}

/// Hooks load/error events for both trophy videos.
pub fn wire_trophies(
    document: &web::Document,
    state: &Rc<RefCell<PageState>>,
    elements: &Rc<RefCell<PageElements>>,
    scheduler: &Scheduler,
) -> Result<Vec<Listener>> {
    let mut listeners = Vec::new();
    let count = elements.borrow().trophies.len();
    for i in 0..count {
        let (video, last_source) = {
            let el = elements.borrow();
            (el.trophies[i].video.clone(), el.trophies[i].last_source.clone())
        };

        let state_loaded = state.clone();
        let elements_loaded = elements.clone();
        let scheduler_loaded = scheduler.clone();
        listeners.push(Listener::new(&video, "loadeddata", move |_| {
            log::info!("[trophy] video {} loaded", i);
            state_loaded.borrow_mut().trophies[i].mark_loaded();
            if let Some(view) = elements_loaded.borrow().trophies.get(i) {
                dom::set_style(&view.loading, "display", "none");
            }
            scheduler_loaded.request();
        })?);

        for target in [web::EventTarget::from(video.clone()), last_source.into()] {
            let document = document.clone();
            let state_failed = state.clone();
            let elements_failed = elements.clone();
            listeners.push(Listener::new(&target, "error", move |_| {
                let mut st = state_failed.borrow_mut();
                if st.trophies[i].has_failed() {
                    return;
                }
                st.trophies[i].mark_failed();
                log::error!("[trophy] video {} failed to load, showing fallback", i);
                if let Some(view) = elements_failed.borrow_mut().trophies.get_mut(i) {
                    if let Err(e) = page::swap_in_trophy_fallback(&document, view) {
                        log::error!("[trophy] fallback error: {}", e);
                    }
                }
            })?);
        }
    }
    Ok(listeners)
}
