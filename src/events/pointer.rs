use crate::app::App;
use crate::constants::*;
use crate::dom;
use deck_core::{tilt_transform, tooltip_text, Ripple, TILT_RESET};
use std::rc::Rc;
use web_sys as web;

fn spawn_ripple(app: &Rc<App>, button: &web::HtmlElement, ev: &web::MouseEvent) {
    let document = app.document();
    let ripple = Ripple::at(
        dom::client_rect(button),
        ev.client_x() as f64,
        ev.client_y() as f64,
    );
    let Ok(span) = document.create_element("span") else {
        return;
    };
    _ = span.set_attribute("style", &ripple.css_text());
    if button.append_child(&span).is_ok() {
        let lifetime = app.with_deck(|deck, _, _| deck.config().ripple_lifetime);
        app.track_node(span, lifetime);
    }
}

pub fn wire_ripples(document: &web::Document, app: &Rc<App>) {
    for button in dom::query_all(document, RIPPLE_SELECTOR) {
        let app = app.clone();
        let target = button.clone();
        dom::listen(&button, "click", move |ev: web::MouseEvent| {
            spawn_ripple(&app, &target, &ev);
        });
    }
}

pub fn wire_tooltips(document: &web::Document) {
    for el in dom::query_all(document, TOOLTIP_SELECTOR) {
        {
            let host = el.clone();
            let doc = document.clone();
            dom::listen(&el, "mouseenter", move |_: web::MouseEvent| {
                let attr = host.get_attribute(TOOLTIP_ATTR);
                let shown = host
                    .query_selector(&format!(".{TOOLTIP_CLASS}"))
                    .ok()
                    .flatten()
                    .is_some();
                let Some(text) = tooltip_text(attr.as_deref(), shown) else {
                    return;
                };
                if let Ok(tip) = doc.create_element("div") {
                    tip.set_class_name(TOOLTIP_CLASS);
                    tip.set_text_content(Some(text));
                    _ = host.append_child(&tip);
                }
            });
        }
        {
            let host = el.clone();
            dom::listen(&el, "mouseleave", move |_: web::MouseEvent| {
                if let Ok(Some(tip)) = host.query_selector(&format!(".{TOOLTIP_CLASS}")) {
                    tip.remove();
                }
            });
        }
    }
}

pub fn wire_card_tilt(document: &web::Document) {
    for card in dom::query_all(document, TILT_CARD_SELECTOR) {
        {
            let target = card.clone();
            dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
                let transform = tilt_transform(
                    dom::client_rect(&target),
                    ev.client_x() as f64,
                    ev.client_y() as f64,
                );
                dom::set_style(&target, "transform", &transform);
            });
        }
        {
            let target = card.clone();
            dom::listen(&card, "mouseleave", move |_: web::MouseEvent| {
                dom::set_style(&target, "transform", TILT_RESET);
            });
        }
    }
}
