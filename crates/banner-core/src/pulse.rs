use crate::constants::*;
use crate::scene::{NodeKey, Scene};
use crate::tween::{NodeProp, Repeat, RepeatMode, Scheduler, TweenSpec, TweenTarget};

const SCALE: TweenTarget = TweenTarget::Node(NodeKey::PulseRing, NodeProp::Scale);
const ALPHA: TweenTarget = TweenTarget::Node(NodeKey::PulseRing, NodeProp::Alpha);

#[derive(Clone, Debug, PartialEq)]
pub struct PulseParams {
    pub scale_from: f32,
    pub scale_to: f32,
    pub alpha_from: f32,
    pub alpha_to: f32,
    pub cycle_sec: f32,
    pub repeat_mode: RepeatMode,
}

impl Default for PulseParams {
    fn default() -> Self {
        Self {
            scale_from: PULSE_SCALE_FROM,
            scale_to: PULSE_SCALE_TO,
            alpha_from: PULSE_ALPHA_FROM,
            alpha_to: PULSE_ALPHA_TO,
            cycle_sec: PULSE_CYCLE_SEC,
            repeat_mode: RepeatMode::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseState {
    pub scale: f32,
    pub alpha: f32,
}

/// Ring around the action control that grows and fades forever.
pub struct PulseEffect {
    params: PulseParams,
}

impl PulseEffect {
    pub fn new(params: PulseParams) -> Self {
        Self { params }
    }

    /// Launch both loops. Calling again restarts them from the start values.
    pub fn start(&self, scene: &mut Scene, scheduler: &mut Scheduler) {
        let p = &self.params;
        let repeat = Repeat::Forever(p.repeat_mode);
        let ring = scene.node_mut(NodeKey::PulseRing);
        ring.set(NodeProp::Scale, p.scale_from);
        ring.set(NodeProp::Alpha, p.alpha_from);
        scheduler.from_to(
            p.scale_from,
            TweenSpec::new(SCALE, p.scale_to, p.cycle_sec).with_repeat(repeat),
        );
        scheduler.from_to(
            p.alpha_from,
            TweenSpec::new(ALPHA, p.alpha_to, p.cycle_sec).with_repeat(repeat),
        );
        log::debug!("[pulse] start ({:?})", p.repeat_mode);
    }

    pub fn stop(&self, scheduler: &mut Scheduler) {
        scheduler.kill(SCALE);
        scheduler.kill(ALPHA);
    }

    pub fn state(scene: &Scene) -> PulseState {
        let ring = scene.node(NodeKey::PulseRing);
        PulseState {
            scale: ring.get(NodeProp::Scale),
            alpha: ring.get(NodeProp::Alpha),
        }
    }
}
