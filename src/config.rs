use crate::constants::config_attr;
use banner_core::{BannerConfig, OVERRIDE_KEYS};
use web_sys as web;

/// Defaults, overridden by any `data-*` attributes present on the mount element.
pub fn read_config(mount: &web::Element) -> BannerConfig {
    let mut config = BannerConfig::default();
    for key in OVERRIDE_KEYS {
        if let Some(value) = mount.get_attribute(&config_attr(key)) {
            if let Err(e) = config.apply_override(key, &value) {
                log::warn!("[config] ignoring {}: {}", config_attr(key), e);
            }
        }
    }
    config
}
