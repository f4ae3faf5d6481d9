//! Full page navigation
//!
//! The auth route lives outside this app, so the router is bypassed and the
//! browser location is replaced outright.

use shared::{LandingError, Result};

pub fn navigate_to(path: &str) -> Result<()> {
    let window = web_sys::window()
        .ok_or_else(|| LandingError::Browser("no window".to_string()))?;

    log::info!("Navigating to {}", path);
    window
        .location()
        .set_href(path)
        .map_err(|e| LandingError::Browser(format!("navigation to {} failed: {:?}", path, e)))
}
