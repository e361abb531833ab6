use deck_core::Rect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Collect the `HtmlElement`s of a node list, skipping anything else.
pub fn html_elements(list: web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    document
        .query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

#[inline]
pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    root.query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Attach a listener that lives for the rest of the page.
pub fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Append a `<style>` block to `<head>`.
pub fn inject_styles(document: &web::Document, css: &str) {
    let Some(head) = document.head() else {
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_text_content(Some(css));
        _ = head.append_child(&style);
    }
}
