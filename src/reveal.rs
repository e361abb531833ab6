use crate::constants::*;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Add `animate-in` to cards and takeaways the first time they scroll into view.
pub fn wire_scroll_reveal(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    _ = entry.target().class_list().add_1(REVEAL_CLASS);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let targets = dom::query_all(document, REVEAL_SELECTOR);
    log::debug!("[reveal] observing {} elements", targets.len());
    for el in targets {
        observer.observe(&el);
    }
    Ok(())
}
