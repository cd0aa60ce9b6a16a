use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BannerError {
    #[error("unknown config key: {0}")]
    UnknownConfigKey(String),

    #[error("invalid value {value:?} for config key {key}")]
    InvalidConfigValue { key: String, value: String },

    #[error("missing asset: {0}")]
    MissingAsset(String),

    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, BannerError>;
