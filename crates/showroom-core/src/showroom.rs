//! The stock four-section showroom tour, in both pose modes.

use crate::controller::ControllerConfig;
use crate::sections::{
    CameraPose, ModelPose, PoseMode, RegistryError, Section, SectionPose, SectionRegistry,
};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

struct Card {
    id: u32,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
}

const CARDS: [Card; 4] = [
    Card {
        id: 1,
        title: "BYD ATTO 3",
        description: "The electric SUV of the future. Clean technology meets premium design.",
        icon: "🚗",
        color: "#3b82f6",
    },
    Card {
        id: 2,
        title: "Aerodynamic Wheels",
        description: "18\" aluminium alloy wheels on 235/55 R18 premium tyres for confident grip.",
        icon: "⚡",
        color: "#ef4444",
    },
    Card {
        id: 3,
        title: "Cargo Space",
        description: "440 litres of boot space, growing to 1340 litres with the rear seats folded.",
        icon: "⚙️",
        color: "#f59e0b",
    },
    Card {
        id: 4,
        title: "Battery Technology",
        description: "60.5 kWh LFP battery. 11 kW AC and 70 kW DC fast charging, 8-year warranty.",
        icon: "🔋",
        color: "#10b981",
    },
];

fn section(card: &Card, pose: SectionPose) -> Section {
    Section {
        id: card.id,
        title: card.title.to_string(),
        description: card.description.to_string(),
        icon: card.icon.to_string(),
        color: card.color.to_string(),
        pose,
    }
}

fn camera(position: [f32; 3], target: [f32; 3], fov_degrees: f32) -> SectionPose {
    SectionPose::Camera(CameraPose {
        position: Vec3::from_array(position),
        target: Vec3::from_array(target),
        fov_degrees,
    })
}

fn model(
    position: [f32; 3],
    rotation_y: f32,
    rotation_x: f32,
    scale: f32,
    floating: bool,
) -> SectionPose {
    SectionPose::Model(ModelPose {
        position: Vec3::from_array(position),
        rotation_y,
        rotation_x,
        scale,
        floating,
    })
}

/// Camera orbits a parked car: front, wheel close-up, rear, underbody.
pub fn camera_sections() -> Vec<Section> {
    let poses = [
        camera([3.5, 0.5, 7.0], [0.0, -0.3, 2.0], 50.0),
        camera([4.0, -1.0, 3.2], [-8.0, -1.5, 2.0], 55.0),
        camera([3.0, 0.0, -7.5], [0.0, 0.0, 0.0], 52.0),
        camera([1.0, 5.8, -1.5], [-4.0, -30.0, -1.4], 60.0),
    ];
    CARDS
        .iter()
        .zip(poses)
        .map(|(card, pose)| section(card, pose))
        .collect()
}

/// Car turns under a fixed camera. The battery view tips the car toward a
/// straight-down angle, so it does not float.
pub fn model_sections() -> Vec<Section> {
    let poses = [
        model([0.0, -2.0, 0.0], -FRAC_PI_4, 0.0, 1.0, true),
        model([1.2, -1.6, 1.5], FRAC_PI_2, 0.0, 1.35, true),
        model([0.0, -2.0, -0.5], PI, 0.1, 1.1, true),
        model([0.0, -1.0, 0.0], 0.0, FRAC_PI_2 * 0.9, 0.9, false),
    ];
    CARDS
        .iter()
        .zip(poses)
        .map(|(card, pose)| section(card, pose))
        .collect()
}

pub fn registry(mode: PoseMode) -> Result<SectionRegistry, RegistryError> {
    match mode {
        PoseMode::CameraMoves => SectionRegistry::new(camera_sections()),
        PoseMode::ModelMoves => SectionRegistry::new(model_sections()),
    }
}

/// Controller defaults for the stock tour. The model tour glides slowly
/// between the cargo and battery views.
pub fn controller_config(mode: PoseMode) -> ControllerConfig {
    let mut config = ControllerConfig::for_mode(mode);
    if mode == PoseMode::ModelMoves {
        config.motion.slow_pairs = vec![(2, 3)];
    }
    config
}
