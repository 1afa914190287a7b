#![cfg(target_arch = "wasm32")]
use crate::core::{PageState, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod clipboard;
mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod media;
mod page;
mod view;

/// Everything that must stay alive while the page is mounted. Dropping it
/// removes the listeners and stops the frame loop.
struct App {
    scheduler: frame::Scheduler,
    _listeners: Vec<dom::Listener>,
}

impl Drop for App {
    fn drop(&mut self) {
        self.scheduler.stop();
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ctc-web starting");

    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        STARTED.store(false, Ordering::SeqCst);
    }
    Ok(())
}

/// Tears the page down: pending frames are cancelled and every listener removed.
#[wasm_bindgen]
pub fn shutdown() {
    let app = APP.with(|app| app.borrow_mut().take());
    if app.is_some() {
        drop(app);
        STARTED.store(false, Ordering::SeqCst);
        log::info!("ctc-web stopped");
    }
}

fn init() -> anyhow::Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    let elements = Rc::new(RefCell::new(page::PageElements::build(&document)?));
    let (width, height) = dom::viewport_size(&window);
    let viewport = Viewport::new(width, height);
    log::info!(
        "[layout] {:.0}x{:.0} ({})",
        viewport.width,
        viewport.height,
        if viewport.is_mobile() { "mobile" } else { "desktop" }
    );
    let state = Rc::new(RefCell::new(PageState::new(viewport)));

    let scheduler = frame::Scheduler::new(frame::FrameContext {
        window: window.clone(),
        document: document.clone(),
        state: state.clone(),
        elements: elements.clone(),
        origin: Instant::now(),
    });

    let mut listeners = vec![
        events::wire_scroll(&window, &scheduler)?,
        events::wire_resize(&window, &state, &scheduler)?,
    ];
    listeners.extend(events::wire_copy_targets(&state, &elements)?);
    listeners.extend(media::wire_trophies(&document, &state, &elements, &scheduler)?);

    // First paint at the restored scroll position.
    scheduler.request();

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            scheduler,
            _listeners: listeners,
        })
    });
    Ok(())
}
