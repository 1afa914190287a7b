use crate::clipboard;
use crate::core::{CopyTarget, PageState};
use crate::dom::Listener;
use crate::error::Result;
use crate::page::PageElements;
use crate::view;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
struct CopyWiring {
    target: CopyTarget,
    state: Rc<RefCell<PageState>>,
    elements: Rc<RefCell<PageElements>>,
}

impl CopyWiring {
    fn refresh(&self) {
        let st = self.state.borrow();
        let el = self.elements.borrow();
        let view = match self.target {
            CopyTarget::Nav => Some(&el.nav_copy),
            CopyTarget::Card(i) => el.cards.get(i),
        };
        if let (Some(view), Some(feedback)) = (view, st.copy(self.target)) {
            view::render_copy(view, feedback);
        }
    }

    fn set_hovering(&self, hovering: bool) {
        if let Some(feedback) = self.state.borrow_mut().copy_mut(self.target) {
            feedback.set_hovering(hovering);
        }
        self.refresh();
    }

    fn copy(&self) {
        let text = match self.state.borrow().copy(self.target) {
            Some(feedback) => feedback.text(),
            None => return,
        };
        let w = self.clone();
        spawn_local(async move {
            match clipboard::write_text(text).await {
                Ok(()) => w.copied(),
                Err(e) => log::error!("[clipboard] failed to copy email: {}", e),
            }
        });
    }

    fn copied(&self) {
        let (token, timeout_ms) = match self.state.borrow_mut().copy_mut(self.target) {
            Some(feedback) => (feedback.mark_copied(), feedback.timeout_ms()),
            None => return,
        };
        log::info!("[clipboard] copied {:?}", self.target);
        self.refresh();

        let w = self.clone();
        let expire = Closure::once_into_js(move || {
            let changed = w
                .state
                .borrow_mut()
                .copy_mut(w.target)
                .map(|feedback| feedback.expire(token))
                .unwrap_or(false);
            if changed {
                w.refresh();
            }
        });
        if let Some(window) = web::window() {
            if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                expire.unchecked_ref(),
                timeout_ms,
            ) {
                log::error!("[clipboard] setTimeout error: {:?}", e);
            }
        }
    }
}

/// Hover and click handlers for the nav button and every contact card.
pub fn wire_copy_targets(
    state: &Rc<RefCell<PageState>>,
    elements: &Rc<RefCell<PageElements>>,
) -> Result<Vec<Listener>> {
    let mut targets = vec![(CopyTarget::Nav, elements.borrow().nav_copy.root.clone())];
    for (i, card) in elements.borrow().cards.iter().enumerate() {
        targets.push((CopyTarget::Card(i), card.root.clone()));
    }

    let mut listeners = Vec::new();
    for (target, root) in targets {
        let wiring = CopyWiring {
            target,
            state: state.clone(),
            elements: elements.clone(),
        };
        let mut hover_events = vec![("mouseenter", true), ("mouseleave", false)];
        if target == CopyTarget::Nav {
            hover_events.extend([("touchstart", true), ("touchend", false)]);
        }
        for (event, hovering) in hover_events {
            let w = wiring.clone();
            listeners.push(Listener::new(&root, event, move |_| w.set_hovering(hovering))?);
        }
        let w = wiring.clone();
        listeners.push(Listener::new(&root, "click", move |_| w.copy())?);
    }
    Ok(listeners)
}
