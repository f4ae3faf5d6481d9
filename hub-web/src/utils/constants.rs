//! Application constants

/// Static placeholder shown by index.html until the WASM bundle starts
pub const BOOT_LOADER_ID: &str = "boot-loading";

/// JSON block the host page may use to override [`shared::LandingConfig`]
pub const CONFIG_ELEMENT_ID: &str = "hub-config";

pub const APP_TITLE: &str = "Welcome to LEAD Hub";

pub const ESCAPE_KEY: &str = "Escape";
