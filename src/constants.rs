// DOM wiring and asset locations for the web front-end.

pub const MOUNT_ELEMENT_ID: &str = "brake-banner"; // canvas is appended here
pub const IMAGE_BASE_PATH: &str = "images/";
pub const BACKGROUND_COLOR: &str = "#ffffff";
pub const CONFIG_ATTR_PREFIX: &str = "data-"; // e.g. data-pulse-repeat="yoyo"

// Longest frame step fed to tweens (s); a backgrounded tab resumes smoothly
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

#[inline]
pub fn asset_url(file_name: &str) -> String {
    format!("{}{}", IMAGE_BASE_PATH, file_name)
}

#[inline]
pub fn config_attr(key: &str) -> String {
    format!("{}{}", CONFIG_ATTR_PREFIX, key)
}

/// 0xRRGGBB -> "#rrggbb"
#[inline]
pub fn css_color(rgb: u32) -> String {
    format!("#{:06x}", rgb & 0x00ff_ffff)
}

/// A persisted pagehide enters the back/forward cache and comes back live;
/// only a real unload tears the banner down.
#[inline]
pub fn dispose_on_pagehide(persisted: bool) -> bool {
    !persisted
}
