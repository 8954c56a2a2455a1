/// Transition and motion tuning constants.
///
/// These express intended behavior (delays, per-tick steps, speed ratios) and
/// keep magic numbers out of the controller.
// Transition schedule (milliseconds from the accepted intent)
pub const SECTION_SWAP_DELAY_MS: u64 = 100;
pub const CARD_SHOW_DELAY_MS: u64 = 200;
pub const TRANSITION_LOCK_MS: u64 = 1200;

// Animation progress added per rendered frame
pub const PROGRESS_STEP_PER_TICK: f32 = 0.012;

// Camera rig decay speeds (fraction of remaining distance per tick at full ease)
pub const CAMERA_POSITION_SPEED: f32 = 0.05;
pub const CAMERA_LOOK_AT_FACTOR: f32 = 0.8; // look-at trails the eye slightly
pub const CAMERA_FOV_FACTOR: f32 = 0.6;

// Model rig decay speeds; rotation and scale settle slower than position
pub const MODEL_POSITION_SPEED: f32 = 0.05;
pub const MODEL_ROTATION_SPEED: f32 = 0.035;
pub const MODEL_SCALE_SPEED: f32 = 0.04;

// Slow-pair multipliers
pub const SLOW_PAIR_POSITION_FACTOR: f32 = 0.6;
pub const SLOW_PAIR_ROTATION_FACTOR: f32 = 0.5;
pub const SLOW_PAIR_SCALE_FACTOR: f32 = 0.7;

// Idle floating bob for model sections
pub const FLOAT_AMPLITUDE: f32 = 0.05;
pub const FLOAT_FREQUENCY_HZ: f32 = 0.5;

// Input
pub const WHEEL_DEBOUNCE_MS: u64 = 50;
pub const MIN_SWIPE_DISTANCE_PX: f32 = 50.0;

// Overlay
pub const HINT_TIMEOUT_MS: u64 = 4000;
pub const CARD_FADE_MS: u64 = 800;

// Initial camera before the first glide (matches the canvas default)
pub const INITIAL_CAMERA_POSITION: [f32; 3] = [0.0, 0.5, 4.0];
pub const INITIAL_CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const INITIAL_CAMERA_FOV: f32 = 50.0;
