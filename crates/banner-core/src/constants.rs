use glam::Vec2;

// Shared tuning constants for the banner. Web front-end and tests read these
// through `BannerConfig::default()`.

// Particle flow
pub const PARTICLE_COUNT: usize = 15;
pub const MAX_PARTICLE_COUNT: usize = 1000; // upper bound for the `particles` override
pub const PARTICLE_RADIUS: f32 = 6.0; // dot radius in px before streaking
pub const PARTICLE_PALETTE: [u32; 5] = [0xf1cf54, 0xb5cea8, 0xf1cf54, 0x818181, 0x000000];
pub const FLOW_SPEED_INCREMENT: f32 = 0.5; // px/tick added every tick
pub const FLOW_MAX_SPEED: f32 = 20.0; // reached after 40 ticks
pub const STREAK_SCALE_X: f32 = 0.03; // thin
pub const STREAK_SCALE_Y: f32 = 24.0; // tall
pub const FLOW_ROTATION_DEG: f32 = 35.0; // speed lines run diagonally

// Elastic return after pause
pub const RETURN_DURATION_SEC: f32 = 0.6;

// Lever
pub const LEVER_PRESSED_DEG: f32 = -30.0;
pub const LEVER_PRESS_SEC: f32 = 0.8;
pub const LEVER_RELEASE_SEC: f32 = 0.5; // faster than the press, reads as a snap back
pub const LEVER_PIVOT: Vec2 = Vec2::new(455.0, 455.0); // hinge, lever-image space
pub const LEVER_POSITION: Vec2 = Vec2::new(722.0, 900.0); // bike-image space

// Bike assembly
pub const BIKE_SCALE: f32 = 0.3;
pub const BIKE_RECOIL_PX: f32 = 20.0;
pub const BIKE_RECOIL_SEC: f32 = 0.8;

// Action control
pub const BUTTON_POSITION: Vec2 = Vec2::new(500.0, 500.0);
pub const PULSE_SCALE_FROM: f32 = 0.8;
pub const PULSE_SCALE_TO: f32 = 1.3;
pub const PULSE_ALPHA_FROM: f32 = 1.0;
pub const PULSE_ALPHA_TO: f32 = 0.0;
pub const PULSE_CYCLE_SEC: f32 = 1.0;

// Elastic-out curve shape (amplitude 1, period 0.3)
pub const ELASTIC_PERIOD: f32 = 0.3;
