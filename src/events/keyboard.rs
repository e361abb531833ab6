use crate::app::App;
use crate::dom;
use std::rc::Rc;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &Rc<App>) {
    let key = ev.key();
    let code = ev.code();
    let response = app.with_deck(|deck, view, sched| deck.handle_key(&key, &code, view, sched));
    if response.prevent_default {
        ev.prevent_default();
    }
    if response.celebrated {
        log::info!("[keys] easter egg unlocked");
    }
}

// Navigation keys and the easter-egg detector share one document listener
pub fn wire_global_keydown(document: &web::Document, app: Rc<App>) {
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &app);
    });
}
