pub mod constants;
pub mod controller;
pub mod driver;
pub mod easing;
pub mod input;
pub mod motion;
pub mod overlay;
pub mod sections;
pub mod showroom;
pub mod timers;

pub use controller::*;
pub use driver::*;
pub use easing::*;
pub use input::*;
pub use motion::*;
pub use overlay::*;
pub use sections::*;
pub use timers::*;

/// Consumer of per-frame output. The controller never draws; a renderer owns
/// the scene, assets and lighting and applies whatever values it is handed.
pub trait Renderer {
    fn apply(&mut self, frame: &FrameOutput);
}
