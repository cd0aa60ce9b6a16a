//! Brake lever press/release machine.
//!
//! [`transition`] is pure: it returns the next state and the effects the
//! caller should perform, in order. Nothing here animates anything.

use crate::constants::*;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeverState {
    #[default]
    Released,
    Pressed,
}

impl LeverState {
    /// Resting lever angle (radians) once all tweens for this state complete.
    pub fn angle(self, params: &LeverParams) -> f32 {
        match self {
            LeverState::Released => 0.0,
            LeverState::Pressed => params.pressed_angle,
        }
    }

    /// Resting vertical offset of the bike assembly.
    pub fn recoil(self, params: &LeverParams) -> f32 {
        match self {
            LeverState::Released => 0.0,
            LeverState::Pressed => params.recoil_px,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeverInput {
    PointerDown,
    PointerUp,
    PointerCancel,
}

/// What a pointer-cancel does while pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CancelPolicy {
    /// Stay pressed until a real pointer-up arrives.
    #[default]
    Ignore,
    /// Treat cancel as pointer-up.
    Release,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeverParams {
    pub pressed_angle: f32,
    pub press_sec: f32,
    pub release_sec: f32,
    /// Hinge point in lever-image space.
    pub pivot: Vec2,
    /// Hinge location in bike-image space.
    pub position: Vec2,
    pub recoil_px: f32,
    pub recoil_sec: f32,
    pub cancel_policy: CancelPolicy,
}

impl Default for LeverParams {
    fn default() -> Self {
        Self {
            pressed_angle: LEVER_PRESSED_DEG.to_radians(),
            press_sec: LEVER_PRESS_SEC,
            release_sec: LEVER_RELEASE_SEC,
            pivot: LEVER_PIVOT,
            position: LEVER_POSITION,
            recoil_px: BIKE_RECOIL_PX,
            recoil_sec: BIKE_RECOIL_SEC,
            cancel_policy: CancelPolicy::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LeverEffect {
    RotateLever { to: f32, duration_sec: f32 },
    PauseFlow,
    ResumeFlow,
    ShiftBike { to: f32, duration_sec: f32 },
}

pub type Effects = SmallVec<[LeverEffect; 3]>;

pub fn transition(
    state: LeverState,
    input: LeverInput,
    params: &LeverParams,
) -> (LeverState, Effects) {
    let release = match input {
        LeverInput::PointerDown => false,
        LeverInput::PointerUp => true,
        LeverInput::PointerCancel => match params.cancel_policy {
            CancelPolicy::Release => true,
            CancelPolicy::Ignore => {
                log::trace!("[lever] pointer-cancel ignored in {:?}", state);
                return (state, SmallVec::new());
            }
        },
    };

    match (state, release) {
        (LeverState::Released, false) => {
            log::debug!("[lever] Released -> Pressed");
            let effects = smallvec![
                LeverEffect::RotateLever {
                    to: params.pressed_angle,
                    duration_sec: params.press_sec,
                },
                LeverEffect::PauseFlow,
                LeverEffect::ShiftBike {
                    to: params.recoil_px,
                    duration_sec: params.recoil_sec,
                },
            ];
            (LeverState::Pressed, effects)
        }
        (LeverState::Pressed, true) => {
            log::debug!("[lever] Pressed -> Released ({:?})", input);
            let effects = smallvec![
                LeverEffect::RotateLever {
                    to: 0.0,
                    duration_sec: params.release_sec,
                },
                LeverEffect::ResumeFlow,
                LeverEffect::ShiftBike {
                    to: 0.0,
                    duration_sec: params.recoil_sec,
                },
            ];
            (LeverState::Released, effects)
        }
        _ => {
            log::trace!("[lever] {:?} ignored in {:?}", input, state);
            (state, SmallVec::new())
        }
    }
}
