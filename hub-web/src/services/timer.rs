//! One-shot browser timeout owned by a component
//!
//! [`ScheduledTask`] clears its `setTimeout` when dropped, so a component
//! that keeps the task alive until `on_cleanup` never sees the callback fire
//! after teardown.

use shared::{LandingError, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Debug)]
pub struct ScheduledTask {
    handle: i32,
}

impl ScheduledTask {
    /// Run `callback` once after `delay_ms`.
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| LandingError::Browser("no window".to_string()))?;

        let callback = Closure::once_into_js(callback);
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);

        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                timeout,
            )
            .map_err(|e| LandingError::Browser(format!("setTimeout failed: {:?}", e)))?;

        Ok(Self { handle })
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        // Clearing an already-fired timeout is a no-op in the browser
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}
