use crate::error::{PageError, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window() -> Result<web::Window> {
    web::window().ok_or(PageError::NoWindow)
}

#[inline]
pub fn document() -> Result<web::Document> {
    window()?.document().ok_or(PageError::NoDocument)
}

/// Looks up `#id` and casts it to the requested element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType {
            id: id.to_string(),
            expected: std::any::type_name::<T>(),
        })
}

/// Creates `<tag class="...">` cast to `T`.
pub fn create<T: JsCast>(document: &web::Document, tag: &str, class: &str) -> Result<T> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<T>().map_err(|_| PageError::WrongElementType {
        id: tag.to_string(),
        expected: std::any::type_name::<T>(),
    })
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_opacity(el: &web::HtmlElement, opacity: f64) {
    set_style(el, "opacity", &format!("{:.3}", opacity));
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// `window.innerWidth` / `innerHeight`, or NaN when unreadable. `Viewport::new`
/// replaces NaN with its defaults.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let read = |v: std::result::Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(f64::NAN)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Registers with `{ passive: true }`, for scroll listeners.
    pub fn passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
