#![cfg(target_arch = "wasm32")]
use deck_core::{is_document_loading, slide_number_from_js, Deck, DeckConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod app;
mod constants;
mod dom;
mod effects;
mod events;
mod reveal;
mod scheduler;
mod view;

use app::App;
use constants::{CELEBRATION_STYLES, EFFECT_STYLES, STARTUP_MESSAGES, TOTAL_SLIDES_ATTR};
use view::DomView;

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

// Exported functions are callable from inline handlers before start-up has
// finished; they do nothing until the app exists.
fn with_app(f: impl FnOnce(&Rc<App>)) {
    let app = APP.with(|slot| slot.borrow().clone());
    if let Some(app) = app {
        f(&app);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slide-deck-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Resolve once the document has been parsed.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if !is_document_loading(&document.ready_state()) {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let options = web::AddEventListenerOptions::new();
        options.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &options,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}

fn load_config(document: &web::Document) -> DeckConfig {
    let attr = document
        .body()
        .and_then(|body| body.get_attribute(TOTAL_SLIDES_ATTR));
    match DeckConfig::default().with_total_slides_attr(attr.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            DeckConfig::default()
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::inject_styles(&document, EFFECT_STYLES);
    dom::inject_styles(&document, CELEBRATION_STYLES);

    dom_ready(&document).await?;

    let config = load_config(&document);
    log::info!("[deck] {} slides", config.total_slides);
    let app = App::new(Deck::new(config), DomView::new(document.clone()));
    app.mount();

    events::wire_global_keydown(&document, app.clone());
    events::wire_ripples(&document, &app);
    events::wire_tooltips(&document);
    events::wire_card_tilt(&document);
    if let Err(e) = reveal::wire_scroll_reveal(&document) {
        log::warn!("[reveal] scroll animations disabled: {:?}", e);
    }

    APP.with(|slot| *slot.borrow_mut() = Some(app));

    for line in STARTUP_MESSAGES {
        log::info!("{}", line);
    }
    Ok(())
}

// ---------------- Entry points for inline handlers in the markup ----------------

#[wasm_bindgen(js_name = nextSlide)]
pub fn next_slide() {
    with_app(|app| {
        app.with_deck(|deck, view, sched| deck.advance(view, sched));
    });
}

#[wasm_bindgen(js_name = previousSlide)]
pub fn previous_slide() {
    with_app(|app| {
        app.with_deck(|deck, view, sched| deck.retreat(view, sched));
    });
}

/// Non-integral or negative input is ignored like any other out-of-range jump.
#[wasm_bindgen(js_name = goToSlide)]
pub fn go_to_slide(slide_number: f64) {
    let Some(n) = slide_number_from_js(slide_number) else {
        return;
    };
    with_app(|app| {
        app.with_deck(|deck, view, sched| deck.jump_to(n, view, sched));
    });
}

#[wasm_bindgen(js_name = applyNthRule)]
pub fn apply_nth_rule(rule: &str) {
    with_app(|app| {
        app.with_deck(|deck, view, sched| deck.apply_nth_rule(rule, view, sched));
    });
}

#[wasm_bindgen(js_name = toggleFAQ)]
pub fn toggle_faq(element: web::Element) {
    if let Some(document) = web::window().and_then(|w| w.document()) {
        effects::toggle_faq(&document, &element);
    }
}

#[wasm_bindgen(js_name = toggleMenu)]
pub fn toggle_menu(element: web::Element) {
    effects::toggle_menu(&element);
}

#[wasm_bindgen(js_name = createSparkleEffect)]
pub fn create_sparkle_effect(element: web::Element) {
    with_app(|app| effects::create_sparkle(app, &element));
}
