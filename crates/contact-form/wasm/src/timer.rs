// File: contact-form/wasm/src/timer.rs
// Purpose: setTimeout/setInterval scheduler and the JS wall clock

use std::time::Duration;

use contact_form_core::{Clock, Scheduler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

fn millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

/// Schedules callbacks on the window's timers. Callbacks live as long as the
/// page; nothing is ever cleared.
#[derive(Debug, Clone)]
pub struct WindowScheduler {
    window: Window,
}

impl WindowScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for WindowScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || task());
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis(delay),
            )
        {
            web_sys::console::error_1(&err);
        }
    }

    fn schedule_repeating(&self, every: Duration, mut task: Box<dyn FnMut()>) {
        let callback = Closure::<dyn FnMut()>::new(move || task());
        if let Err(err) = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(every),
            )
        {
            web_sys::console::error_1(&err);
        }
        callback.forget();
    }
}

/// `Date.now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}
