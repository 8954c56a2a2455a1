use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use showroom_core::{showroom, FrameOutput, Intent, PoseMode, Renderer, TransitionController};

const FRAME: Duration = Duration::from_micros(16_667); // 60 Hz

/// Logs every `every`-th frame it is handed.
struct LogRenderer {
    frame: u64,
    every: u64,
}

impl Renderer for LogRenderer {
    fn apply(&mut self, frame: &FrameOutput) {
        self.frame += 1;
        if self.frame % self.every != 0 {
            return;
        }
        match *frame {
            FrameOutput::Camera {
                position,
                look_at,
                fov_degrees,
            } => log::info!(
                "[frame {:>5}] eye=({:.3},{:.3},{:.3}) look=({:.3},{:.3},{:.3}) fov={:.2}",
                self.frame,
                position.x,
                position.y,
                position.z,
                look_at.x,
                look_at.y,
                look_at.z,
                fov_degrees
            ),
            FrameOutput::Model {
                position,
                rotation_y,
                rotation_x,
                scale,
            } => log::info!(
                "[frame {:>5}] pos=({:.3},{:.3},{:.3}) rot=({:.3},{:.3}) scale={:.3}",
                self.frame,
                position.x,
                position.y,
                position.z,
                rotation_y,
                rotation_x,
                scale
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Step {
    Send(Intent),
    Wait(Duration),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Camera flies between fixed viewpoints
    Camera,
    /// Camera stays put, the car moves
    Model,
}

impl From<Mode> for PoseMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Camera => PoseMode::CameraMoves,
            Mode::Model => PoseMode::ModelMoves,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "showroom-replay")]
#[command(about = "Replay showroom intents at a simulated 60 Hz and log frames", long_about = None)]
struct Cli {
    /// Which tour to drive
    #[arg(long, value_enum, default_value_t = Mode::Camera)]
    mode: Mode,

    /// Frames to run after the last step
    #[arg(long = "frames", default_value_t = 180)]
    tail_frames: u64,

    /// Log every Nth frame
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,

    /// Steps: advance|next, retreat|prev, home, end, jump:N, wait:MS
    #[arg(value_parser = parse_step)]
    steps: Vec<Step>,
}

fn parse_step(token: &str) -> anyhow::Result<Step> {
    let step = match token {
        "advance" | "next" => Step::Send(Intent::Advance),
        "retreat" | "prev" => Step::Send(Intent::Retreat),
        "home" => Step::Send(Intent::Home),
        "end" => Step::Send(Intent::End),
        t => {
            if let Some(i) = t.strip_prefix("jump:") {
                let index: isize = i.parse().with_context(|| format!("bad jump index {i:?}"))?;
                Step::Send(Intent::JumpTo(index))
            } else if let Some(ms) = t.strip_prefix("wait:") {
                let ms: u64 = ms.parse().with_context(|| format!("bad wait {ms:?}"))?;
                Step::Wait(Duration::from_millis(ms))
            } else {
                bail!("unknown step {t:?}; expected advance|retreat|home|end|jump:N|wait:MS");
            }
        }
    };
    Ok(step)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();
    let mode = PoseMode::from(args.mode);

    let registry = showroom::registry(mode)?;
    let config = showroom::controller_config(mode);
    let mut controller = TransitionController::new(registry, config)?;
    let mut renderer = LogRenderer {
        frame: 0,
        every: args.every,
    };
    let mut now = Duration::ZERO;

    for step in &args.steps {
        match step {
            Step::Send(intent) => {
                if let Err(e) = controller.handle_intent(*intent, now) {
                    log::warn!("[replay] {:?} rejected: {}", intent, e);
                }
            }
            Step::Wait(d) => {
                let until = now + *d;
                while now < until {
                    now += FRAME;
                    let out = controller.tick(now);
                    renderer.apply(&out);
                }
            }
        }
    }
    for _ in 0..args.tail_frames {
        now += FRAME;
        let out = controller.tick(now);
        renderer.apply(&out);
    }

    controller.teardown();
    let state = controller.state();
    log::info!(
        "[replay] done at {:?}: section={} ({}) locked={} progress={:.3}",
        now,
        state.current_index,
        controller.current_section().title,
        state.is_locked,
        state.progress
    );
    Ok(())
}
