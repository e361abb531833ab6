use crate::constants::*;
use crate::dom;
use deck_core::{
    AnimatedGroup, ConfettiPiece, DeckView, EffectId, NavButton, NthRule, SlideId, SlideView,
    CELEBRATION_ANIMATION, CELEBRATION_FILTER, HIGHLIGHT_ANIMATION,
};
use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `DeckView` over the live document. Missing elements are skipped.
pub struct DomView {
    document: web::Document,
    effects: FnvHashMap<EffectId, web::Element>,
}

impl DomView {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            effects: FnvHashMap::default(),
        }
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    /// Keep `node` so a later `remove_effect(id)` can detach it.
    pub fn attach_effect(&mut self, id: EffectId, node: web::Element) {
        self.effects.insert(id, node);
    }

    fn slide_element(&self, slide: SlideId) -> Option<web::Element> {
        self.document.get_element_by_id(&slide.element_id())
    }

    fn append_to_body(&self, node: &web::Element) -> bool {
        match self.document.body() {
            Some(body) => body.append_child(node).is_ok(),
            None => false,
        }
    }
}

impl SlideView for DomView {
    fn set_slide_active(&mut self, slide: SlideId, active: bool) {
        if let Some(el) = self.slide_element(slide) {
            let cl = el.class_list();
            if active {
                _ = cl.add_1(ACTIVE_CLASS);
            } else {
                _ = cl.remove_1(ACTIVE_CLASS);
            }
        }
    }

    fn set_counter_text(&mut self, text: &str) {
        if let Some(counter) = dom::query(&self.document, SLIDE_COUNTER_SELECTOR) {
            counter.set_text_content(Some(text));
        }
    }

    fn set_button_disabled(&mut self, button: NavButton, disabled: bool) {
        let selector = match button {
            NavButton::Previous => PREV_BUTTON_SELECTOR,
            NavButton::Next => NEXT_BUTTON_SELECTOR,
        };
        let Some(el) = dom::query(&self.document, selector) else {
            return;
        };
        if let Some(btn) = el.dyn_ref::<web::HtmlButtonElement>() {
            btn.set_disabled(disabled);
        } else if disabled {
            _ = el.set_attribute("disabled", "");
        } else {
            _ = el.remove_attribute("disabled");
        }
    }

    fn suspend_animation(&mut self, slide: SlideId, group: &AnimatedGroup) {
        if let Some(root) = self.slide_element(slide) {
            for el in dom::query_all_in(&root, group.selector) {
                dom::set_style(&el, "animation", "none");
            }
        }
    }

    fn resume_animation(&mut self, slide: SlideId, group: &AnimatedGroup) {
        if let Some(root) = self.slide_element(slide) {
            for (i, el) in dom::query_all_in(&root, group.selector).iter().enumerate() {
                dom::set_style(el, "animation", group.animation);
                if let Some(delay) = group.delay_for(i) {
                    dom::set_style(el, "animation-delay", &delay);
                }
            }
        }
    }
}

impl DeckView for DomView {
    fn set_page_celebration(&mut self, on: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        if on {
            _ = style.set_property("filter", CELEBRATION_FILTER);
            _ = style.set_property("animation", CELEBRATION_ANIMATION);
        } else {
            _ = style.remove_property("filter");
            _ = style.remove_property("animation");
        }
    }

    fn show_banner(&mut self, id: EffectId, text: &str) {
        let Ok(banner) = self.document.create_element("div") else {
            return;
        };
        banner.set_text_content(Some(text));
        _ = banner.set_attribute("style", BANNER_CSS);
        if self.append_to_body(&banner) {
            self.attach_effect(id, banner);
        }
    }

    fn spawn_confetti(&mut self, id: EffectId, piece: &ConfettiPiece) {
        let Ok(confetti) = self.document.create_element("div") else {
            return;
        };
        _ = confetti.set_attribute("style", &piece.css_text());
        if self.append_to_body(&confetti) {
            self.attach_effect(id, confetti);
        }
    }

    fn remove_effect(&mut self, id: EffectId) {
        if let Some(node) = self.effects.remove(&id) {
            node.remove();
        }
    }

    fn clear_highlights(&mut self) {
        for item in dom::query_all(&self.document, NTH_ITEM_SELECTOR) {
            _ = item.class_list().remove_1(HIGHLIGHT_CLASS);
        }
    }

    fn highlight_nth(&mut self, rule: NthRule) {
        for item in dom::query_all(&self.document, rule.selector()) {
            _ = item.class_list().add_1(HIGHLIGHT_CLASS);
            dom::set_style(&item, "animation", "none");
        }
    }

    fn replay_highlight(&mut self, rule: NthRule) {
        for item in dom::query_all(&self.document, rule.selector()) {
            dom::set_style(&item, "animation", HIGHLIGHT_ANIMATION);
        }
    }
}
