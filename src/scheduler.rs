use crate::app::App;
use deck_core::{Deferred, Scheduler};
use std::rc::Weak;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Scheduler` backed by `window.setTimeout`. Each task is handed back to the
/// app when its timer fires; timers are never cancelled.
pub struct TimeoutScheduler {
    app: Weak<App>,
}

impl TimeoutScheduler {
    pub fn new(app: Weak<App>) -> Self {
        Self { app }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay: Duration, task: Deferred) {
        let Some(window) = web::window() else {
            return;
        };
        let app = self.app.clone();
        let callback = Closure::once_into_js(move || {
            if let Some(app) = app.upgrade() {
                app.run_deferred(task);
            }
        });
        let delay_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
        {
            log::warn!("[timer] setTimeout failed: {:?}", e);
        }
    }
}
