//! Time-based tweens and the per-frame tick list.
//!
//! The scheduler keeps at most one live tween per [`TweenTarget`]; starting a
//! new tween on a target replaces the running one and continues from the
//! target's current value. Tick subscribers are plain ids, dispatched by the
//! owner after tweens have been applied for the frame.

use crate::easing::Easing;
use crate::scene::NodeKey;
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeProp {
    X,
    Y,
    Rotation,
    /// Uniform scale, writes both axes.
    Scale,
    Alpha,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Anything a tween can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    Node(NodeKey, NodeProp),
    Particle(usize, Axis),
    /// Vertical offset of the bike assembly on top of its laid-out position.
    BikeRecoil,
}

/// Read/write access to tweened values.
pub trait TweenSink {
    fn value(&self, target: TweenTarget) -> f32;
    fn apply(&mut self, target: TweenTarget, value: f32);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatMode {
    /// Jump back to the start value every cycle (sawtooth).
    #[default]
    Restart,
    /// Alternate direction every cycle (ping-pong).
    Yoyo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever(RepeatMode),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub target: TweenTarget,
    pub to: f32,
    pub duration_sec: f32,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl TweenSpec {
    pub fn new(target: TweenTarget, to: f32, duration_sec: f32) -> Self {
        Self {
            target,
            to,
            duration_sec,
            easing: Easing::default(),
            repeat: Repeat::Once,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }
}

#[derive(Clone, Debug)]
struct Tween {
    spec: TweenSpec,
    from: f32,
    elapsed: f32,
}

impl Tween {
    fn lerp(&self, progress: f32) -> f32 {
        self.from + (self.spec.to - self.from) * self.spec.easing.apply(progress)
    }

    fn value(&self) -> f32 {
        let d = self.spec.duration_sec;
        match self.spec.repeat {
            Repeat::Once => {
                if d <= 0.0 || self.elapsed >= d {
                    self.spec.to
                } else {
                    self.lerp(self.elapsed / d)
                }
            }
            Repeat::Forever(mode) => {
                if d <= 0.0 {
                    return self.spec.to;
                }
                let cycle = (self.elapsed / d).floor();
                let t = (self.elapsed - cycle * d) / d;
                let reversed = mode == RepeatMode::Yoyo && (cycle as u32) % 2 == 1;
                if reversed {
                    self.lerp(1.0 - t)
                } else {
                    self.lerp(t)
                }
            }
        }
    }

    /// Returns true once a one-shot tween has reached its end.
    fn step(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        match self.spec.repeat {
            Repeat::Once => self.elapsed >= self.spec.duration_sec,
            Repeat::Forever(_) => {
                // keep elapsed bounded; two cycles preserves yoyo parity
                let span = self.spec.duration_sec * 2.0;
                if span > 0.0 {
                    self.elapsed %= span;
                }
                false
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickId {
    ParticleFlow,
}

#[derive(Default)]
pub struct Scheduler {
    tweens: FnvHashMap<TweenTarget, Tween>,
    tickers: SmallVec<[TickId; 2]>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tween `spec.target` from its current value to `spec.to`.
    pub fn to(&mut self, sink: &impl TweenSink, spec: TweenSpec) {
        let from = sink.value(spec.target);
        self.from_to(from, spec);
    }

    pub fn from_to(&mut self, from: f32, spec: TweenSpec) {
        let replaced = self
            .tweens
            .insert(
                spec.target,
                Tween {
                    spec,
                    from,
                    elapsed: 0.0,
                },
            )
            .is_some();
        if replaced {
            log::trace!("[tween] replaced running tween on {:?}", spec.target);
        }
    }

    pub fn kill(&mut self, target: TweenTarget) -> bool {
        self.tweens.remove(&target).is_some()
    }

    pub fn kill_where(&mut self, mut pred: impl FnMut(&TweenTarget) -> bool) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|t, _| !pred(t));
        before - self.tweens.len()
    }

    pub fn is_active(&self, target: TweenTarget) -> bool {
        self.tweens.contains_key(&target)
    }

    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    /// Advance every tween by `dt_sec` and write the results into `sink`.
    pub fn update(&mut self, dt_sec: f32, sink: &mut impl TweenSink) {
        let dt = dt_sec.max(0.0);
        self.tweens.retain(|target, tween| {
            let finished = tween.step(dt);
            sink.apply(*target, tween.value());
            !finished
        });
    }

    /// Register a per-frame subscriber. Returns false if it was already registered.
    pub fn add_ticker(&mut self, id: TickId) -> bool {
        if self.tickers.contains(&id) {
            return false;
        }
        self.tickers.push(id);
        true
    }

    /// Returns false if `id` was not registered.
    pub fn remove_ticker(&mut self, id: TickId) -> bool {
        match self.tickers.iter().position(|t| *t == id) {
            Some(i) => {
                self.tickers.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn tickers(&self) -> &[TickId] {
        &self.tickers
    }

    pub fn is_ticking(&self, id: TickId) -> bool {
        self.tickers.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Values(FnvHashMap<TweenTarget, f32>);

    impl TweenSink for Values {
        fn value(&self, target: TweenTarget) -> f32 {
            self.0.get(&target).copied().unwrap_or(0.0)
        }
        fn apply(&mut self, target: TweenTarget, value: f32) {
            self.0.insert(target, value);
        }
    }

    const T: TweenTarget = TweenTarget::BikeRecoil;

    #[test]
    fn one_shot_lands_exactly_and_is_dropped() {
        let mut sink = Values::default();
        let mut s = Scheduler::new();
        s.to(&sink, TweenSpec::new(T, 20.0, 0.8));
        for _ in 0..10 {
            s.update(0.1, &mut sink);
        }
        assert_eq!(sink.value(T), 20.0);
        assert!(!s.is_active(T));
    }

    #[test]
    fn new_tween_replaces_and_continues_from_current_value() {
        let mut sink = Values::default();
        let mut s = Scheduler::new();
        s.to(&sink, TweenSpec::new(T, 10.0, 1.0).with_easing(Easing::Linear));
        s.update(0.5, &mut sink);
        assert!((sink.value(T) - 5.0).abs() < 1e-4);

        s.to(&sink, TweenSpec::new(T, 0.0, 1.0).with_easing(Easing::Linear));
        assert_eq!(s.active_count(), 1);
        s.update(0.5, &mut sink);
        assert!((sink.value(T) - 2.5).abs() < 1e-4);
    }

    #[test]
    fn restart_repeat_is_sawtooth() {
        let mut sink = Values::default();
        let mut s = Scheduler::new();
        let spec = TweenSpec::new(T, 1.0, 1.0)
            .with_easing(Easing::Linear)
            .with_repeat(Repeat::Forever(RepeatMode::Restart));
        s.from_to(0.0, spec);
        s.update(0.75, &mut sink);
        assert!((sink.value(T) - 0.75).abs() < 1e-4);
        s.update(0.5, &mut sink);
        assert!((sink.value(T) - 0.25).abs() < 1e-4);
        assert!(s.is_active(T));
    }

    #[test]
    fn yoyo_repeat_reverses_on_odd_cycles() {
        let mut sink = Values::default();
        let mut s = Scheduler::new();
        let spec = TweenSpec::new(T, 1.0, 1.0)
            .with_easing(Easing::Linear)
            .with_repeat(Repeat::Forever(RepeatMode::Yoyo));
        s.from_to(0.0, spec);
        s.update(1.25, &mut sink);
        assert!((sink.value(T) - 0.75).abs() < 1e-4);
        s.update(1.0, &mut sink);
        assert!((sink.value(T) - 0.25).abs() < 1e-4);
    }

    #[test]
    fn ticker_registration_is_idempotent() {
        let mut s = Scheduler::new();
        assert!(s.add_ticker(TickId::ParticleFlow));
        assert!(!s.add_ticker(TickId::ParticleFlow));
        assert_eq!(s.tickers().len(), 1);
        assert!(s.remove_ticker(TickId::ParticleFlow));
        assert!(!s.remove_ticker(TickId::ParticleFlow));
        assert!(s.tickers().is_empty());
    }

    #[test]
    fn kill_where_only_removes_matching() {
        let mut s = Scheduler::new();
        s.from_to(0.0, TweenSpec::new(TweenTarget::Particle(0, Axis::X), 1.0, 1.0));
        s.from_to(0.0, TweenSpec::new(TweenTarget::Particle(0, Axis::Y), 1.0, 1.0));
        s.from_to(0.0, TweenSpec::new(T, 1.0, 1.0));
        let killed = s.kill_where(|t| matches!(t, TweenTarget::Particle(..)));
        assert_eq!(killed, 2);
        assert!(s.is_active(T));
    }
}
