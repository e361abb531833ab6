use crate::app::App;
use crate::constants::*;
use crate::dom;
use deck_core::{sparkle_css_text, AccordionToggle};
use std::rc::Rc;
use web_sys as web;

/// Drop a ✨ at a random point over `element`; it floats away and is removed.
pub fn create_sparkle(app: &Rc<App>, element: &web::Element) {
    let document = app.document();
    let rect = dom::client_rect(element);
    let (left, top, lifetime) = app.with_deck(|deck, _, _| {
        let (left, top) = deck.sparkle_position(rect);
        (left, top, deck.config().sparkle_lifetime)
    });
    let Ok(sparkle) = document.create_element("div") else {
        return;
    };
    sparkle.set_text_content(Some(SPARKLE_GLYPH));
    _ = sparkle.set_attribute("style", &sparkle_css_text(left, top));
    let Some(body) = document.body() else {
        return;
    };
    if body.append_child(&sparkle).is_ok() {
        app.track_node(sparkle, lifetime);
    }
}

/// Accordion: close every item, then open the clicked one unless it was open.
pub fn toggle_faq(document: &web::Document, question: &web::Element) {
    let Some(item) = question.parent_element() else {
        return;
    };
    let was_open = item.class_list().contains(ACTIVE_CLASS);
    for other in dom::query_all(document, FAQ_ITEM_SELECTOR) {
        _ = other.class_list().remove_1(ACTIVE_CLASS);
    }
    if AccordionToggle::for_click(was_open) == AccordionToggle::Expand {
        _ = item.class_list().add_1(ACTIVE_CLASS);
    }
}

#[inline]
pub fn toggle_menu(element: &web::Element) {
    _ = element.class_list().toggle(ACTIVE_CLASS);
}
