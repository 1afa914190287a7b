use crate::core::content::STATS;
use crate::core::PageState;
use crate::media;
use crate::page::PageElements;
use crate::view;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub window: web::Window,
    pub document: web::Document,
    pub state: Rc<RefCell<PageState>>,
    pub elements: Rc<RefCell<PageElements>>,
    /// Origin for counter timing.
    pub origin: Instant,
}

impl FrameContext {
    /// Samples scroll, advances the page and writes styles. Returns true while
    /// another frame is needed without further input.
    pub fn frame(&mut self) -> bool {
        let scroll = self.window.scroll_y().unwrap_or(0.0);
        let now = self.origin.elapsed();
        let outcome = {
            let mut st = self.state.borrow_mut();
            st.set_scroll(scroll);
            st.advance(now)
        };

        let mut el = self.elements.borrow_mut();
        view::apply_scene(&el, &outcome.scene);
        media::scrub_sky(&el.sky_video, outcome.scene.sky_scrub);

        for (view, cmd) in el.trophies.iter().zip(outcome.playback) {
            if let Some(cmd) = cmd {
                media::apply_playback(view, cmd);
            }
        }

        let st = self.state.borrow();
        for (i, stat) in STATS.iter().enumerate() {
            if outcome.counters_started[i] {
                log::info!("[counter] {} started at scroll {:.0}", stat.label, outcome.scene.scroll);
            }
            if !outcome.counters_changed[i] {
                continue;
            }
            if let Err(e) =
                view::render_counter(&self.document, &mut el.counters[i], &st.counters[i], stat.suffix)
            {
                log::error!("[counter] render error: {}", e);
            }
        }

        outcome.animating
    }
}

/// Coalesces frame requests into a single pending `requestAnimationFrame`.
#[derive(Clone)]
pub struct Scheduler {
    state: Rc<RefCell<PageState>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl Scheduler {
    pub fn new(mut ctx: FrameContext) -> Self {
        let scheduler = Scheduler {
            state: ctx.state.clone(),
            tick: Rc::new(RefCell::new(None)),
            raf_id: Rc::new(Cell::new(None)),
        };
        let inner = scheduler.clone();
        *scheduler.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            inner.raf_id.set(None);
            inner.state.borrow_mut().throttle.complete();
            if ctx.frame() {
                inner.request();
            }
        }) as Box<dyn FnMut()>));
        scheduler
    }

    /// Schedules a frame unless one is already pending.
    pub fn request(&self) {
        if !self.state.borrow_mut().throttle.request() {
            return;
        }
        let id = match (web::window(), self.tick.borrow().as_ref()) {
            (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
            _ => None,
        };
        match id {
            Some(id) => self.raf_id.set(Some(id)),
            // Nothing was scheduled; let the next event try again.
            None => self.state.borrow_mut().throttle.complete(),
        }
    }

    /// Cancels any pending frame and releases the frame closure.
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}
