//! Landing configuration injected by the host page
//!
//! The host may embed
//! `<script id="hub-config" type="application/json">{ ... }</script>`;
//! missing fields fall back to [`LandingConfig::default`].

use shared::{LandingConfig, LandingError, Result};

use crate::utils::constants::CONFIG_ELEMENT_ID;

/// Load the configuration, falling back to defaults on any problem.
pub fn load_config() -> LandingConfig {
    match read_config_block() {
        Ok(Some(config)) => {
            log::info!("Loaded landing config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Ok(None) => LandingConfig::default(),
        Err(e) => {
            log::warn!("Ignoring landing config: {}", e);
            LandingConfig::default()
        }
    }
}

fn read_config_block() -> Result<Option<LandingConfig>> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| LandingError::Browser("no document".to_string()))?;

    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };

    let json = element.text_content().unwrap_or_default();
    if json.trim().is_empty() {
        return Ok(None);
    }

    LandingConfig::from_json(&json).map(Some)
}
