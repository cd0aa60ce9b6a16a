//! Banner configuration: defaults come from `constants`, a handful of keys can
//! be overridden from strings (the web front-end reads them from `data-*`
//! attributes on the mount element).

use crate::constants::*;
use crate::error::{BannerError, Result};
use crate::flow::FlowParams;
use crate::lever::{CancelPolicy, LeverParams};
use crate::pulse::PulseParams;
use crate::tween::RepeatMode;
use glam::Vec2;

/// Keys accepted by [`BannerConfig::apply_override`].
pub const OVERRIDE_KEYS: [&str; 5] = [
    "seed",
    "particles",
    "max-speed",
    "pulse-repeat",
    "cancel-policy",
];

#[derive(Clone, Debug, PartialEq)]
pub struct BannerConfig {
    pub particle_count: usize,
    pub palette: Vec<u32>,
    /// Fixed seed for particle placement; `None` draws from entropy.
    pub seed: Option<u64>,
    pub flow: FlowParams,
    pub lever: LeverParams,
    pub pulse: PulseParams,
    pub flow_rotation_deg: f32,
    pub bike_scale: f32,
    pub button_position: Vec2,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            palette: PARTICLE_PALETTE.to_vec(),
            seed: None,
            flow: FlowParams::default(),
            lever: LeverParams::default(),
            pulse: PulseParams::default(),
            flow_rotation_deg: FLOW_ROTATION_DEG,
            bike_scale: BIKE_SCALE,
            button_position: BUTTON_POSITION,
        }
    }
}

impl BannerConfig {
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let invalid = || BannerError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "seed" => self.seed = Some(value.parse().map_err(|_| invalid())?),
            "particles" => {
                let n: usize = value.parse().map_err(|_| invalid())?;
                if n > MAX_PARTICLE_COUNT {
                    return Err(invalid());
                }
                self.particle_count = n;
            }
            "max-speed" => {
                let v: f32 = value.parse().map_err(|_| invalid())?;
                if !(v.is_finite() && v > 0.0) {
                    return Err(invalid());
                }
                self.flow.max_speed = v;
            }
            "pulse-repeat" => {
                self.pulse.repeat_mode = match value.to_ascii_lowercase().as_str() {
                    "restart" => RepeatMode::Restart,
                    "yoyo" => RepeatMode::Yoyo,
                    _ => return Err(invalid()),
                }
            }
            "cancel-policy" => {
                self.lever.cancel_policy = match value.to_ascii_lowercase().as_str() {
                    "ignore" => CancelPolicy::Ignore,
                    "release" => CancelPolicy::Release,
                    _ => return Err(invalid()),
                }
            }
            _ => return Err(BannerError::UnknownConfigKey(key.to_string())),
        }
        log::debug!("[config] {} = {}", key, value);
        Ok(())
    }
}
