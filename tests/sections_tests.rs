// Host-side tests for section registry validation and lookup.

use glam::Vec3;
use showroom_core::showroom;
use showroom_core::{
    CameraPose, ModelPose, PoseMode, RegistryError, Section, SectionPose, SectionRegistry,
};

fn camera_section(id: u32, fov: f32) -> Section {
    Section {
        id,
        title: format!("Camera {id}"),
        description: String::new(),
        icon: "🚗".into(),
        color: "#ffffff".into(),
        pose: SectionPose::Camera(CameraPose {
            position: Vec3::new(0.0, 1.0, 5.0),
            target: Vec3::ZERO,
            fov_degrees: fov,
        }),
    }
}

fn model_section(id: u32, scale: f32) -> Section {
    Section {
        id,
        title: format!("Model {id}"),
        description: String::new(),
        icon: "🔋".into(),
        color: "#000000".into(),
        pose: SectionPose::Model(ModelPose {
            position: Vec3::ZERO,
            rotation_y: 0.0,
            rotation_x: 0.0,
            scale,
            floating: false,
        }),
    }
}

#[test]
fn empty_registry_is_rejected() {
    assert_eq!(SectionRegistry::new(vec![]).unwrap_err(), RegistryError::Empty);
}

#[test]
fn mixed_modes_are_rejected() {
    let err = SectionRegistry::new(vec![camera_section(1, 50.0), model_section(2, 1.0)])
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::MixedModes {
            id: 2,
            expected: PoseMode::CameraMoves,
            found: PoseMode::ModelMoves,
        }
    );
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = SectionRegistry::new(vec![camera_section(7, 50.0), camera_section(7, 40.0)])
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateId(7));
}

#[test]
fn non_positive_or_non_finite_fov_is_rejected() {
    for fov in [0.0, -10.0, f32::NAN, f32::INFINITY] {
        let err = SectionRegistry::new(vec![camera_section(1, fov)]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidFov { id: 1, .. }), "fov {fov}");
    }
}

#[test]
fn non_positive_scale_is_rejected() {
    for scale in [0.0, -1.0, f32::NAN] {
        let err = SectionRegistry::new(vec![model_section(1, scale)]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidScale { id: 1, .. }), "scale {scale}");
    }
}

#[test]
fn lookup_respects_bounds() {
    let reg = SectionRegistry::new(vec![camera_section(1, 50.0), camera_section(2, 55.0)]).unwrap();
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.last_index(), 1);
    assert_eq!(reg.at(0).unwrap().id, 1);
    assert_eq!(reg.at(1).unwrap().id, 2);
    assert_eq!(
        reg.at(-1).unwrap_err(),
        RegistryError::InvalidIndex { index: -1, len: 2 }
    );
    assert_eq!(
        reg.at(2).unwrap_err(),
        RegistryError::InvalidIndex { index: 2, len: 2 }
    );
}

#[test]
fn stock_tours_have_four_sections_in_one_mode() {
    for mode in [PoseMode::CameraMoves, PoseMode::ModelMoves] {
        let reg = showroom::registry(mode).unwrap();
        assert_eq!(reg.len(), 4);
        assert_eq!(reg.mode(), mode);
        assert!(reg.iter().all(|s| s.pose.mode() == mode));
        assert!(reg.iter().all(|s| s.color.starts_with('#')));
    }
}

#[test]
fn straight_down_model_section_does_not_float() {
    let reg = showroom::registry(PoseMode::ModelMoves).unwrap();
    match reg.at(3).unwrap().pose {
        SectionPose::Model(m) => assert!(!m.floating),
        other => panic!("unexpected pose {other:?}"),
    }
}
