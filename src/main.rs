//! Flappy entry point
//!
//! The web build is driven from JS through `platform::web::WebGame`. Natively
//! there is no window; the binary runs headless autopilot sessions through the
//! same director the web build uses, which is handy for balancing tuning files.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use flappy::consts::FRAME_DT;
    use flappy::platform::{FileStore, KeyValueStore, MemoryStore};
    use flappy::sim::{GameEvent, GameState, TickInput};
    use flappy::ui::{Director, MenuAction};
    use flappy::{Tuning, read_best_score};

    /// Run headless flappy sessions with a simple autopilot
    #[derive(Parser, Debug)]
    #[command(version, about)]
    pub struct Args {
        /// RNG seed for the first session
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Number of sessions to play
        #[arg(long, default_value_t = 5)]
        sessions: u32,
        /// Give up after this many frames
        #[arg(long, default_value_t = 60 * 60 * 10)]
        max_frames: u64,
        /// JSON file holding the best score (in-memory if omitted)
        #[arg(long)]
        store: Option<PathBuf>,
        /// JSON tuning overrides
        #[arg(long)]
        tuning: Option<PathBuf>,
    }

    /// Flap when the actor sinks toward the lower pipe of the next pair
    fn autopilot(state: &GameState) -> TickInput {
        let hitbox = state.actor.body.hitbox();
        let next_gap = state
            .pipes
            .chunks(2)
            .filter(|pair| pair[0].right() > hitbox.left())
            .min_by(|a, b| a[0].pos.x.total_cmp(&b[0].pos.x))
            .map(|pair| (pair[0].pos.y, pair[1].pos.y));

        let floor = match next_gap {
            Some((_, lower)) => lower - 24.0,
            None => state.world_bounds().bottom() - 120.0,
        };
        TickInput {
            flap: hitbox.bottom() > floor && state.actor.body.vel.y >= 0.0,
            pause: false,
        }
    }

    fn run<S: KeyValueStore>(store: S, tuning: Tuning, args: &Args) -> u32 {
        let mut director = Director::new(store, tuning, args.seed);
        director.select(MenuAction::Play);

        let mut finished = 0;
        let mut frames = 0;
        while finished < args.sessions && frames < args.max_frames {
            let input = director
                .play()
                .map(|play| autopilot(play.state()))
                .unwrap_or_default();

            for event in director.update(&input, FRAME_DT) {
                if let GameEvent::GameOver { score } = event {
                    finished += 1;
                    println!("session {finished}: score {score}");
                }
            }
            frames += 1;
        }

        if finished < args.sessions {
            log::warn!("Stopped after {frames} frames with {finished} sessions finished");
        }
        read_best_score(director.store())
    }

    pub fn main() -> anyhow::Result<()> {
        env_logger::init();
        let args = Args::parse();
        log::info!("Flappy (native) starting...");

        let tuning = match &args.tuning {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Tuning::from_json(&json).with_context(|| format!("loading {}", path.display()))?
            }
            None => Tuning::default(),
        };

        let best = match &args.store {
            Some(path) => {
                let store = FileStore::open(path)
                    .with_context(|| format!("opening store {}", path.display()))?;
                run(store, tuning, &args)
            }
            None => run(MemoryStore::new(), tuning, &args),
        };

        println!("best score: {best}");
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
