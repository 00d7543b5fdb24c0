//! Emoji Escape headless runner
//!
//! Plays a seeded autopilot session at a fixed 60 Hz step, logs progress and
//! persists the best score. The browser build drives the same simulation from
//! its own frame callback.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use emoji_escape::consts::FRAME_DT_MS;
    use emoji_escape::persistence::{FileStorage, Storage};
    use emoji_escape::platform::{self, FrameClock};
    use emoji_escape::sim::{
        Difficulty, GameEvent, GameState, SessionPhase, Snapshot, TickInput, Viewport, start, tick,
    };
    use emoji_escape::{BestScore, Settings};

    #[derive(Parser, Debug)]
    #[command(name = "emoji-escape", about = "Headless autopilot run of Emoji Escape")]
    struct Args {
        /// Difficulty (easy, normal, hard); defaults to the saved setting
        #[arg(short, long)]
        difficulty: Option<String>,
        /// RNG seed; defaults to the current time
        #[arg(short, long)]
        seed: Option<u64>,
        /// Stop after this many simulated seconds even if still alive
        #[arg(long, default_value_t = 600)]
        max_secs: u64,
        /// Directory for the best score and settings
        #[arg(long, default_value = ".emoji-escape")]
        data_dir: PathBuf,
        /// Print a JSON snapshot every simulated second
        #[arg(long)]
        snapshots: bool,
        /// Pace ticks against the wall clock instead of a fixed step
        #[arg(long)]
        realtime: bool,
        /// Debug logging
        #[arg(short, long)]
        verbose: bool,
    }

    pub fn run() {
        let args = Args::parse();
        platform::init_logging(args.verbose);
        log::info!("Emoji Escape (headless) starting...");

        let mut storage: Box<dyn Storage> = match FileStorage::open(&args.data_dir) {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("Persistence disabled ({}): {}", args.data_dir.display(), e);
                Box::new(emoji_escape::persistence::MemoryStorage::new())
            }
        };

        let settings = Settings::load(storage.as_ref());
        let difficulty = match args.difficulty.as_deref() {
            Some(name) => Difficulty::from_name(name).unwrap_or_else(|| {
                log::warn!("Unknown difficulty {:?}, using {}", name, settings.difficulty.as_str());
                settings.difficulty
            }),
            None => settings.difficulty,
        };
        let mut best = BestScore::load(storage.as_ref());

        let seed = args.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        let mut state = GameState::new(seed, Viewport::default(), best.score);
        start(&mut state, difficulty);
        log::info!("Avatar {}", settings.avatar);

        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        let max_ms = args.max_secs as f64 * 1000.0;
        let wall_start = platform::now_ms();
        let mut next_snapshot_ms = 1000.0;
        let mut elapsed_ms = 0.0;
        let mut clock = FrameClock::new();
        clock.delta(wall_start);

        while state.phase == SessionPhase::Running && elapsed_ms < max_ms {
            let dt = if args.realtime {
                std::thread::sleep(std::time::Duration::from_secs_f64(FRAME_DT_MS / 1000.0));
                clock.delta(platform::now_ms())
            } else {
                FRAME_DT_MS
            };
            tick(&mut state, &input, dt);
            elapsed_ms += dt;

            for event in &state.events {
                match event {
                    GameEvent::HealthChanged { health, .. } => {
                        log::debug!("Health now {}", health)
                    }
                    GameEvent::GameOver { score, new_best, .. } => {
                        if *new_best && best.record(*score) {
                            if let Err(e) = best.save(storage.as_mut()) {
                                log::error!("Failed to save best score: {}", e);
                            }
                        }
                    }
                    _ => {}
                }
            }

            if args.snapshots && elapsed_ms >= next_snapshot_ms {
                next_snapshot_ms += 1000.0;
                match serde_json::to_string(&Snapshot::capture(&state)) {
                    Ok(json) => println!("{}", json),
                    Err(e) => log::warn!("Snapshot failed: {}", e),
                }
            }
        }

        log::info!(
            "Finished after {:.1}s ({:.0}ms wall): score {}, level {}, health {}, best {}",
            elapsed_ms / 1000.0,
            platform::now_ms() - wall_start,
            state.score,
            state.level,
            state.health,
            best.score
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    emoji_escape::platform::init_logging(false);
    log::info!("Emoji Escape core loaded; the page script drives the simulation");
}
