// Host-side tests for the web front-end's pure helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn css_color_pads_and_masks() {
    assert_eq!(css_color(0xf1cf54), "#f1cf54");
    assert_eq!(css_color(0x000000), "#000000");
    assert_eq!(css_color(0x0000ff), "#0000ff");
    assert_eq!(css_color(0xff12_3456), "#123456");
}

#[test]
fn asset_urls_live_under_images() {
    assert_eq!(asset_url("btn.png"), "images/btn.png");
    assert!(asset_url("brake_bike.png").starts_with(IMAGE_BASE_PATH));
}

#[test]
fn config_attributes_are_data_prefixed() {
    assert_eq!(config_attr("pulse-repeat"), "data-pulse-repeat");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_clamp_is_a_fraction_of_a_second() {
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);
    assert!(BACKGROUND_COLOR.starts_with('#'));
}

#[test]
fn only_a_real_unload_disposes() {
    assert!(dispose_on_pagehide(false));
    assert!(!dispose_on_pagehide(true));
}
