use crate::constants::STAGE_ELEMENT_ID;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn stage_element(document: &web::Document) -> Option<web::Element> {
    document.get_element_by_id(STAGE_ELEMENT_ID)
}

/// Attach a no-argument listener for `event` and keep it alive for the
/// lifetime of the page.
#[inline]
pub fn listen(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
