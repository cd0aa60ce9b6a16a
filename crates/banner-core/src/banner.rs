//! Owned state of one running banner: scene, particle flow, lever and the
//! tween scheduler that animates them. The web front-end forwards frames,
//! pointer events and resizes here and draws whatever the scene holds.

use crate::config::BannerConfig;
use crate::flow::ParticleFlow;
use crate::lever::{transition, LeverEffect, LeverInput, LeverState};
use crate::pulse::PulseEffect;
use crate::scene::{AssetSizes, NodeKey, Scene, Viewport};
use crate::tween::{NodeProp, Scheduler, TickId, TweenSink, TweenSpec, TweenTarget};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

const LEVER_ROTATION: TweenTarget = TweenTarget::Node(NodeKey::Lever, NodeProp::Rotation);

/// Everything tweens can write into.
pub struct Stage {
    pub scene: Scene,
    pub flow: ParticleFlow,
}

impl TweenSink for Stage {
    fn value(&self, target: TweenTarget) -> f32 {
        match target {
            TweenTarget::Node(key, prop) => self.scene.node(key).get(prop),
            TweenTarget::Particle(i, axis) => self.flow.particle_value(i, axis),
            TweenTarget::BikeRecoil => self.scene.bike_recoil(),
        }
    }

    fn apply(&mut self, target: TweenTarget, value: f32) {
        match target {
            TweenTarget::Node(key, prop) => self.scene.node_mut(key).set(prop, value),
            TweenTarget::Particle(i, axis) => self.flow.set_particle_value(i, axis, value),
            TweenTarget::BikeRecoil => self.scene.set_bike_recoil(value),
        }
    }
}

pub struct Banner {
    config: BannerConfig,
    scheduler: Scheduler,
    stage: Stage,
    lever: LeverState,
    pulse: PulseEffect,
}

impl Banner {
    /// Assemble the scene and start the flow and the pulse. `assets` can only
    /// be built once every image has a size, so this runs after loading.
    pub fn new(config: BannerConfig, assets: AssetSizes, viewport: Viewport) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let flow = ParticleFlow::initialize(
            config.particle_count,
            &config.palette,
            viewport.bounds(),
            config.flow.clone(),
            &mut rng,
        );
        let scene = Scene::build(assets, &config, viewport);
        let pulse = PulseEffect::new(config.pulse.clone());

        let mut banner = Self {
            config,
            scheduler: Scheduler::new(),
            stage: Stage { scene, flow },
            lever: LeverState::default(),
            pulse,
        };
        banner
            .pulse
            .start(&mut banner.stage.scene, &mut banner.scheduler);
        banner.stage.flow.start(&mut banner.scheduler);
        log::info!(
            "[banner] built {}x{} particles={}",
            viewport.width,
            viewport.height,
            banner.stage.flow.particles().len()
        );
        banner
    }

    /// One display refresh: tweens first, then tick subscribers.
    pub fn frame(&mut self, dt_sec: f32) {
        self.scheduler.update(dt_sec, &mut self.stage);
        let ticks: SmallVec<[TickId; 2]> = self.scheduler.tickers().iter().copied().collect();
        for id in ticks {
            match id {
                TickId::ParticleFlow => self.stage.flow.advance(),
            }
        }
    }

    /// Feed an input to the lever and perform the resulting effects.
    pub fn handle(&mut self, input: LeverInput) -> LeverState {
        let (next, effects) = transition(self.lever, input, &self.config.lever);
        self.lever = next;
        for effect in effects {
            self.perform(effect);
        }
        next
    }

    fn perform(&mut self, effect: LeverEffect) {
        match effect {
            LeverEffect::RotateLever { to, duration_sec } => self
                .scheduler
                .to(&self.stage, TweenSpec::new(LEVER_ROTATION, to, duration_sec)),
            LeverEffect::PauseFlow => self.stage.flow.pause(&mut self.scheduler),
            LeverEffect::ResumeFlow => self.stage.flow.start(&mut self.scheduler),
            LeverEffect::ShiftBike { to, duration_sec } => self.scheduler.to(
                &self.stage,
                TweenSpec::new(TweenTarget::BikeRecoil, to, duration_sec),
            ),
        }
    }

    /// Returns true if the press landed on the action control.
    pub fn pointer_down(&mut self, point: Vec2) -> bool {
        if !self.stage.scene.hits_button(point) {
            return false;
        }
        self.handle(LeverInput::PointerDown);
        true
    }

    pub fn pointer_up(&mut self, point: Vec2) -> bool {
        if !self.stage.scene.hits_button(point) {
            return false;
        }
        self.handle(LeverInput::PointerUp);
        true
    }

    pub fn pointer_cancel(&mut self) {
        self.handle(LeverInput::PointerCancel);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.stage.scene.layout(viewport);
        self.stage.flow.set_viewport_height(viewport.height);
        log::debug!("[banner] resize {}x{}", viewport.width, viewport.height);
    }

    /// Stop every animation and unregister the flow tick.
    pub fn dispose(&mut self) {
        self.pulse.stop(&mut self.scheduler);
        self.scheduler.remove_ticker(TickId::ParticleFlow);
        let killed = self.scheduler.kill_where(|_| true);
        log::info!("[banner] disposed ({} tweens dropped)", killed);
    }

    pub fn scene(&self) -> &Scene {
        &self.stage.scene
    }

    pub fn flow(&self) -> &ParticleFlow {
        &self.stage.flow
    }

    pub fn lever(&self) -> LeverState {
        self.lever
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn config(&self) -> &BannerConfig {
        &self.config
    }
}
