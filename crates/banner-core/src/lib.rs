pub mod banner;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod flow;
pub mod lever;
pub mod pulse;
pub mod scene;
pub mod tween;

pub use banner::*;
pub use config::*;
pub use easing::*;
pub use error::*;
pub use flow::*;
pub use lever::*;
pub use pulse::*;
pub use scene::*;
pub use tween::*;
