//! Ordered, immutable registry of showroom sections.
//!
//! Each section pairs presentation metadata with a target pose. A registry
//! holds a single pose mode: either the camera moves around a static model,
//! or the model moves under a static camera.

use glam::Vec3;
use std::ops::Index;
use thiserror::Error;

/// Camera viewpoint for camera-moves decks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_degrees: f32,
}

/// Model transform for model-moves decks.
///
/// `floating` enables the idle vertical bob while this section is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPose {
    pub position: Vec3,
    pub rotation_y: f32,
    pub rotation_x: f32,
    pub scale: f32,
    pub floating: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SectionPose {
    Camera(CameraPose),
    Model(ModelPose),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoseMode {
    CameraMoves,
    ModelMoves,
}

impl SectionPose {
    pub fn mode(&self) -> PoseMode {
        match self {
            SectionPose::Camera(_) => PoseMode::CameraMoves,
            SectionPose::Model(_) => PoseMode::ModelMoves,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// CSS color used as the card accent, e.g. `#3b82f6`.
    pub color: String,
    pub pose: SectionPose,
}

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("section registry must contain at least one section")]
    Empty,
    #[error("section {id} uses {found:?} but the registry is {expected:?}")]
    MixedModes {
        id: u32,
        expected: PoseMode,
        found: PoseMode,
    },
    #[error("duplicate section id {0}")]
    DuplicateId(u32),
    #[error("section {id} has invalid field of view {fov}")]
    InvalidFov { id: u32, fov: f32 },
    #[error("section {id} has invalid scale {scale}")]
    InvalidScale { id: u32, scale: f32 },
    #[error("section index {index} out of range 0..{len}")]
    InvalidIndex { index: isize, len: usize },
}

/// Read-only ordered list of sections; index 0 and `len - 1` are the only
/// boundaries (no wraparound).
#[derive(Clone, Debug)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    mode: PoseMode,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Result<Self, RegistryError> {
        let first = sections.first().ok_or(RegistryError::Empty)?;
        let mode = first.pose.mode();
        for (i, s) in sections.iter().enumerate() {
            if sections[..i].iter().any(|prev| prev.id == s.id) {
                return Err(RegistryError::DuplicateId(s.id));
            }
            let found = s.pose.mode();
            if found != mode {
                return Err(RegistryError::MixedModes {
                    id: s.id,
                    expected: mode,
                    found,
                });
            }
            match s.pose {
                SectionPose::Camera(c) => {
                    if !(c.fov_degrees.is_finite() && c.fov_degrees > 0.0) {
                        return Err(RegistryError::InvalidFov {
                            id: s.id,
                            fov: c.fov_degrees,
                        });
                    }
                }
                SectionPose::Model(m) => {
                    if !(m.scale.is_finite() && m.scale > 0.0) {
                        return Err(RegistryError::InvalidScale {
                            id: s.id,
                            scale: m.scale,
                        });
                    }
                }
            }
        }
        Ok(Self { sections, mode })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false for a constructed registry; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.sections.len() - 1
    }

    #[inline]
    pub fn mode(&self) -> PoseMode {
        self.mode
    }

    #[inline]
    pub fn contains(&self, index: isize) -> bool {
        index >= 0 && (index as usize) < self.sections.len()
    }

    pub fn at(&self, index: isize) -> Result<&Section, RegistryError> {
        if !self.contains(index) {
            return Err(RegistryError::InvalidIndex {
                index,
                len: self.sections.len(),
            });
        }
        Ok(&self.sections[index as usize])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}

impl Index<usize> for SectionRegistry {
    type Output = Section;

    fn index(&self, index: usize) -> &Section {
        &self.sections[index]
    }
}
