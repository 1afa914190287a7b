use crate::core::PageState;
use crate::dom::{self, Listener};
use crate::error::Result;
use crate::frame::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Scroll only requests a frame; the offset is read inside the frame so a
/// burst of events costs one style pass.
pub fn wire_scroll(window: &web::Window, scheduler: &Scheduler) -> Result<Listener> {
    let scheduler = scheduler.clone();
    Listener::passive(window, "scroll", move |_| scheduler.request())
}

pub fn wire_resize(
    window: &web::Window,
    state: &Rc<RefCell<PageState>>,
    scheduler: &Scheduler,
) -> Result<Listener> {
    let state = state.clone();
    let scheduler = scheduler.clone();
    let window_for_size = window.clone();
    Listener::new(window, "resize", move |_| {
        let (w, h) = dom::viewport_size(&window_for_size);
        let mut st = state.borrow_mut();
        let was_mobile = st.viewport.is_mobile();
        st.set_viewport(w, h);
        if st.viewport.is_mobile() != was_mobile {
            log::info!(
                "[layout] switched to {} layout at {:.0}x{:.0}",
                if st.viewport.is_mobile() { "mobile" } else { "desktop" },
                st.viewport.width,
                st.viewport.height
            );
        }
        drop(st);
        scheduler.request();
    })
}
