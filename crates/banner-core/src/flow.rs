//! Particle flow: a fixed set of dots that stream downward as speed lines while
//! running, and spring back to where they started when paused.

use crate::constants::*;
use crate::easing::Easing;
use crate::scene::Bounds;
use crate::tween::{Axis, Scheduler, TickId, TweenSpec, TweenTarget};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct FlowParams {
    pub speed_increment: f32,
    pub max_speed: f32,
    /// Visual stretch while moving; fixed, not a function of speed.
    pub streak_scale: Vec2,
    pub return_duration_sec: f32,
    pub particle_radius: f32,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            speed_increment: FLOW_SPEED_INCREMENT,
            max_speed: FLOW_MAX_SPEED,
            streak_scale: Vec2::new(STREAK_SCALE_X, STREAK_SCALE_Y),
            return_duration_sec: RETURN_DURATION_SEC,
            particle_radius: PARTICLE_RADIUS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Fixed at creation; the elastic return aims here.
    pub origin: Vec2,
    pub position: Vec2,
    pub scale: Vec2,
    pub color: u32,
}

pub struct ParticleFlow {
    particles: Vec<Particle>,
    speed: f32,
    running: bool,
    viewport_height: f32,
    params: FlowParams,
}

impl ParticleFlow {
    /// Scatter `count` particles uniformly inside `bounds`, colours drawn from
    /// `palette`. Wrapping uses `bounds.max.y` until the viewport changes.
    pub fn initialize<R: Rng + ?Sized>(
        count: usize,
        palette: &[u32],
        bounds: Bounds,
        params: FlowParams,
        rng: &mut R,
    ) -> Self {
        let size = bounds.size();
        let particles = (0..count)
            .map(|_| {
                let origin = bounds.min + Vec2::new(sample(rng, size.x), sample(rng, size.y));
                Particle {
                    origin,
                    position: origin,
                    scale: Vec2::ONE,
                    color: palette.choose(rng).copied().unwrap_or(0x000000),
                }
            })
            .collect::<Vec<_>>();
        log::debug!("[flow] initialized {} particles", particles.len());
        Self {
            particles,
            speed: 0.0,
            running: false,
            viewport_height: bounds.max.y,
            params,
        }
    }

    /// Reset speed and register the per-frame advance. Safe to call while
    /// already running: the tick is only ever registered once.
    ///
    /// A return cut short can leave particles mid-overshoot outside the
    /// viewport; they are pulled back inside so every tick keeps
    /// `0 <= y <= viewport_height`.
    pub fn start(&mut self, scheduler: &mut Scheduler) {
        let killed = scheduler.kill_where(|t| matches!(t, TweenTarget::Particle(..)));
        let height = self.viewport_height.max(0.0);
        for p in &mut self.particles {
            p.position.y = p.position.y.clamp(0.0, height);
        }
        self.speed = 0.0;
        self.running = true;
        if scheduler.add_ticker(TickId::ParticleFlow) {
            log::info!("[flow] start (cancelled {} return tweens)", killed);
        } else {
            log::trace!("[flow] start while running; tick already registered");
        }
    }

    /// Unregister the advance, undo the streak and spring every particle back
    /// to its origin.
    pub fn pause(&mut self, scheduler: &mut Scheduler) {
        self.running = false;
        if scheduler.remove_ticker(TickId::ParticleFlow) {
            log::info!("[flow] pause");
        }
        let duration = self.params.return_duration_sec;
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.scale = Vec2::ONE;
            for (axis, from, to) in [
                (Axis::X, p.position.x, p.origin.x),
                (Axis::Y, p.position.y, p.origin.y),
            ] {
                scheduler.from_to(
                    from,
                    TweenSpec::new(TweenTarget::Particle(i, axis), to, duration)
                        .with_easing(Easing::ElasticOut),
                );
            }
        }
    }

    /// One tick of motion.
    pub fn advance(&mut self) {
        if !self.running {
            return;
        }
        self.speed = (self.speed + self.params.speed_increment).min(self.params.max_speed);
        let height = self.viewport_height;
        for p in &mut self.particles {
            p.position.y += self.speed;
            p.scale = self.params.streak_scale;
            if p.position.y > height {
                p.position.y = 0.0;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn params(&self) -> &FlowParams {
        &self.params
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    pub fn particle_value(&self, index: usize, axis: Axis) -> f32 {
        self.particles
            .get(index)
            .map(|p| match axis {
                Axis::X => p.position.x,
                Axis::Y => p.position.y,
            })
            .unwrap_or(0.0)
    }

    pub fn set_particle_value(&mut self, index: usize, axis: Axis, value: f32) {
        if let Some(p) = self.particles.get_mut(index) {
            match axis {
                Axis::X => p.position.x = value,
                Axis::Y => p.position.y = value,
            }
        }
    }
}

#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::TweenSink;
    use rand::rngs::StdRng;

    struct FlowSink<'a>(&'a mut ParticleFlow);

    impl TweenSink for FlowSink<'_> {
        fn value(&self, target: TweenTarget) -> f32 {
            match target {
                TweenTarget::Particle(i, axis) => self.0.particle_value(i, axis),
                _ => 0.0,
            }
        }
        fn apply(&mut self, target: TweenTarget, value: f32) {
            if let TweenTarget::Particle(i, axis) = target {
                self.0.set_particle_value(i, axis, value);
            }
        }
    }

    fn flow(seed: u64) -> ParticleFlow {
        let bounds = Bounds {
            min: Vec2::ZERO,
            max: Vec2::new(800.0, 600.0),
        };
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleFlow::initialize(15, &PARTICLE_PALETTE, bounds, FlowParams::default(), &mut rng)
    }

    #[test]
    fn initialize_places_particles_inside_bounds() {
        let f = flow(7);
        assert_eq!(f.particles().len(), 15);
        for p in f.particles() {
            assert!(p.origin.x >= 0.0 && p.origin.x < 800.0);
            assert!(p.origin.y >= 0.0 && p.origin.y < 600.0);
            assert_eq!(p.position, p.origin);
            assert!(PARTICLE_PALETTE.contains(&p.color));
        }
        assert!(!f.is_running());
    }

    #[test]
    fn empty_palette_and_zero_bounds_do_not_panic() {
        let bounds = Bounds {
            min: Vec2::ZERO,
            max: Vec2::ZERO,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let f = ParticleFlow::initialize(3, &[], bounds, FlowParams::default(), &mut rng);
        assert!(f.particles().iter().all(|p| p.origin == Vec2::ZERO && p.color == 0));
    }

    #[test]
    fn speed_ramps_and_caps() {
        let mut s = Scheduler::new();
        let mut f = flow(1);
        f.start(&mut s);
        let mut prev = 0.0;
        for _ in 0..100 {
            f.advance();
            assert!(f.speed() >= prev);
            assert!(f.speed() <= 20.0);
            prev = f.speed();
        }
        assert_eq!(f.speed(), 20.0);
    }

    #[test]
    fn advance_streaks_and_wraps() {
        let mut s = Scheduler::new();
        let mut f = flow(2);
        f.start(&mut s);
        for _ in 0..500 {
            f.advance();
            for p in f.particles() {
                assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
                assert_eq!(p.scale, Vec2::new(STREAK_SCALE_X, STREAK_SCALE_Y));
            }
        }
    }

    #[test]
    fn advance_is_inert_while_paused() {
        let mut s = Scheduler::new();
        let mut f = flow(3);
        let before = f.particles().to_vec();
        f.advance();
        assert_eq!(f.particles(), &before[..]);
        assert_eq!(f.speed(), 0.0);
        f.start(&mut s);
        f.pause(&mut s);
        f.advance();
        assert_eq!(f.speed(), 0.0);
    }

    #[test]
    fn pause_unstreaks_and_springs_back_to_origin() {
        let mut s = Scheduler::new();
        let mut f = flow(4);
        f.start(&mut s);
        for _ in 0..25 {
            f.advance();
        }
        f.pause(&mut s);
        assert!(!s.is_ticking(TickId::ParticleFlow));
        assert!(f.particles().iter().all(|p| p.scale == Vec2::ONE));
        assert_eq!(s.active_count(), 30);

        for _ in 0..40 {
            s.update(1.0 / 60.0, &mut FlowSink(&mut f));
        }
        assert_eq!(s.active_count(), 0);
        for p in f.particles() {
            assert_eq!(p.position, p.origin);
        }
    }

    #[test]
    fn double_start_registers_once() {
        let mut s = Scheduler::new();
        let mut f = flow(5);
        f.start(&mut s);
        f.start(&mut s);
        assert_eq!(s.tickers(), &[TickId::ParticleFlow]);
        f.pause(&mut s);
        f.pause(&mut s);
        assert!(s.tickers().is_empty());
    }

    #[test]
    fn start_cancels_pending_return() {
        let mut s = Scheduler::new();
        let mut f = flow(6);
        f.start(&mut s);
        f.advance();
        f.pause(&mut s);
        f.start(&mut s);
        assert_eq!(s.active_count(), 0);
        assert_eq!(f.speed(), 0.0);
    }

    #[test]
    fn start_pulls_overshooting_particles_back_inside() {
        let mut s = Scheduler::new();
        let mut f = flow(7);
        f.set_particle_value(0, Axis::Y, -130.0);
        f.set_particle_value(1, Axis::Y, 750.0);
        f.start(&mut s);
        assert_eq!(f.particles()[0].position.y, 0.0);
        assert_eq!(f.particles()[1].position.y, 600.0);
        for _ in 0..200 {
            f.advance();
            for p in f.particles() {
                assert!(p.position.y >= 0.0 && p.position.y <= 600.0, "y={}", p.position.y);
            }
        }
    }
}
