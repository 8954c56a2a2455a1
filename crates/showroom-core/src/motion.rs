//! Per-tick eased exponential-decay interpolation toward a section pose.
//!
//! The rig holds the values last handed to the renderer. Every tick each
//! channel moves a fraction `speed` of its remaining distance, where `speed`
//! grows with the eased animation progress. Rotations decay along the shorter
//! arc.

use crate::constants::*;
use crate::easing::Easing;
use crate::sections::{CameraPose, ModelPose, PoseMode, SectionPose};
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[inline]
pub fn decay(current: f32, target: f32, speed: f32) -> f32 {
    current + (target - current) * speed
}

#[inline]
pub fn decay_vec3(current: Vec3, target: Vec3, speed: f32) -> Vec3 {
    current + (target - current) * speed
}

/// Wrap an angular difference into (-PI, PI].
#[inline]
pub fn shortest_angle(delta: f32) -> f32 {
    let d = (delta + PI).rem_euclid(TAU) - PI;
    if d <= -PI {
        PI
    } else {
        d
    }
}

#[inline]
pub fn decay_angle(current: f32, target: f32, speed: f32) -> f32 {
    current + shortest_angle(target - current) * speed
}

/// Speed and easing tuning for the rig.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionTuning {
    pub easing: Easing,
    pub progress_step: f32,

    pub camera_position_speed: f32,
    pub camera_look_at_factor: f32,
    pub camera_fov_factor: f32,

    pub model_position_speed: f32,
    pub model_rotation_speed: f32,
    pub model_scale_speed: f32,

    /// Unordered section index pairs that glide slower when moving between them.
    pub slow_pairs: Vec<(usize, usize)>,
    pub slow_position_factor: f32,
    pub slow_rotation_factor: f32,
    pub slow_scale_factor: f32,

    pub float_amplitude: f32,
    pub float_frequency_hz: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            easing: Easing::InOutCubic,
            progress_step: PROGRESS_STEP_PER_TICK,
            camera_position_speed: CAMERA_POSITION_SPEED,
            camera_look_at_factor: CAMERA_LOOK_AT_FACTOR,
            camera_fov_factor: CAMERA_FOV_FACTOR,
            model_position_speed: MODEL_POSITION_SPEED,
            model_rotation_speed: MODEL_ROTATION_SPEED,
            model_scale_speed: MODEL_SCALE_SPEED,
            slow_pairs: Vec::new(),
            slow_position_factor: SLOW_PAIR_POSITION_FACTOR,
            slow_rotation_factor: SLOW_PAIR_ROTATION_FACTOR,
            slow_scale_factor: SLOW_PAIR_SCALE_FACTOR,
            float_amplitude: FLOAT_AMPLITUDE,
            float_frequency_hz: FLOAT_FREQUENCY_HZ,
        }
    }
}

impl MotionTuning {
    /// Tuning used by model-moves decks: quartic easing.
    pub fn model() -> Self {
        Self {
            easing: Easing::InOutQuart,
            ..Self::default()
        }
    }

    pub fn for_mode(mode: PoseMode) -> Self {
        match mode {
            PoseMode::CameraMoves => Self::default(),
            PoseMode::ModelMoves => Self::model(),
        }
    }

    pub fn is_slow_pair(&self, a: usize, b: usize) -> bool {
        self.slow_pairs
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }
}

/// Values handed to the renderer for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutput {
    Camera {
        position: Vec3,
        look_at: Vec3,
        fov_degrees: f32,
    },
    Model {
        position: Vec3,
        rotation_y: f32,
        rotation_x: f32,
        scale: f32,
    },
}

/// Flat layout of a `FrameOutput` for crossing into JS.
///
/// Camera: `[0, px, py, pz, tx, ty, tz, fov]`.
/// Model:  `[1, px, py, pz, rot_y, rot_x, scale, 0]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PackedFrame {
    pub mode: f32,
    pub position: [f32; 3],
    pub extra: [f32; 3],
    pub tail: f32,
}

pub const PACKED_FRAME_LEN: usize = 8;

impl FrameOutput {
    pub fn packed(&self) -> PackedFrame {
        match *self {
            FrameOutput::Camera {
                position,
                look_at,
                fov_degrees,
            } => PackedFrame {
                mode: 0.0,
                position: position.to_array(),
                extra: look_at.to_array(),
                tail: fov_degrees,
            },
            FrameOutput::Model {
                position,
                rotation_y,
                rotation_x,
                scale,
            } => PackedFrame {
                mode: 1.0,
                position: position.to_array(),
                extra: [rotation_y, rotation_x, scale],
                tail: 0.0,
            },
        }
    }

    pub fn to_array(&self) -> [f32; PACKED_FRAME_LEN] {
        bytemuck::cast(self.packed())
    }

    pub fn position(&self) -> Vec3 {
        match *self {
            FrameOutput::Camera { position, .. } | FrameOutput::Model { position, .. } => position,
        }
    }
}

/// Per-channel speeds for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSpeeds {
    pub position: f32,
    pub rotation: f32,
    pub scale: f32,
}

impl StepSpeeds {
    pub fn compute(tuning: &MotionTuning, mode: PoseMode, eased: f32, slow: bool) -> Self {
        let mut speeds = match mode {
            PoseMode::CameraMoves => {
                let base = tuning.camera_position_speed * eased;
                StepSpeeds {
                    position: base,
                    rotation: base * tuning.camera_look_at_factor,
                    scale: base * tuning.camera_fov_factor,
                }
            }
            PoseMode::ModelMoves => StepSpeeds {
                position: tuning.model_position_speed * eased,
                rotation: tuning.model_rotation_speed * eased,
                scale: tuning.model_scale_speed * eased,
            },
        };
        if slow {
            speeds.position *= tuning.slow_position_factor;
            speeds.rotation *= tuning.slow_rotation_factor;
            speeds.scale *= tuning.slow_scale_factor;
        }
        speeds
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov_degrees: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelRig {
    pub position: Vec3,
    pub rotation_y: f32,
    pub rotation_x: f32,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rig {
    Camera(CameraRig),
    Model(ModelRig),
}

impl From<CameraPose> for CameraRig {
    fn from(p: CameraPose) -> Self {
        CameraRig {
            position: p.position,
            look_at: p.target,
            fov_degrees: p.fov_degrees,
        }
    }
}

impl From<ModelPose> for ModelRig {
    fn from(p: ModelPose) -> Self {
        ModelRig {
            position: p.position,
            rotation_y: p.rotation_y,
            rotation_x: p.rotation_x,
            scale: p.scale,
        }
    }
}

impl Rig {
    pub fn from_pose(pose: &SectionPose) -> Self {
        match *pose {
            SectionPose::Camera(c) => Rig::Camera(c.into()),
            SectionPose::Model(m) => Rig::Model(m.into()),
        }
    }

    pub fn mode(&self) -> PoseMode {
        match self {
            Rig::Camera(_) => PoseMode::CameraMoves,
            Rig::Model(_) => PoseMode::ModelMoves,
        }
    }

    /// Move every channel toward `target`. A target of the other mode leaves
    /// the rig untouched.
    pub fn step(&mut self, target: &SectionPose, speeds: StepSpeeds) {
        match (self, target) {
            (Rig::Camera(rig), SectionPose::Camera(t)) => {
                rig.position = decay_vec3(rig.position, t.position, speeds.position);
                rig.look_at = decay_vec3(rig.look_at, t.target, speeds.rotation);
                rig.fov_degrees = decay(rig.fov_degrees, t.fov_degrees, speeds.scale);
            }
            (Rig::Model(rig), SectionPose::Model(t)) => {
                rig.position = decay_vec3(rig.position, t.position, speeds.position);
                rig.rotation_y = decay_angle(rig.rotation_y, t.rotation_y, speeds.rotation);
                rig.rotation_x = decay_angle(rig.rotation_x, t.rotation_x, speeds.rotation);
                rig.scale = decay(rig.scale, t.scale, speeds.scale);
            }
            (rig, t) => {
                log::warn!(
                    "[motion] ignoring {:?} target for {:?} rig",
                    t.mode(),
                    rig.mode()
                );
            }
        }
    }

    /// Output for this frame; `lift` is added to the vertical position only.
    pub fn output(&self, lift: f32) -> FrameOutput {
        match *self {
            Rig::Camera(c) => FrameOutput::Camera {
                position: c.position + Vec3::Y * lift,
                look_at: c.look_at,
                fov_degrees: c.fov_degrees,
            },
            Rig::Model(m) => FrameOutput::Model {
                position: m.position + Vec3::Y * lift,
                rotation_y: m.rotation_y,
                rotation_x: m.rotation_x,
                scale: m.scale,
            },
        }
    }
}

/// Idle vertical oscillation at `elapsed_sec`.
#[inline]
pub fn float_offset(tuning: &MotionTuning, elapsed_sec: f32) -> f32 {
    tuning.float_amplitude * (elapsed_sec * tuning.float_frequency_hz * TAU).sin()
}
