//! Iso Putt entry point
//!
//! Headless autoplay: plays every level in the catalog by lining up on the
//! hole and dragging back at full power, logging what the UI would show.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;
    use iso_putt::renderer::build_frame;
    use iso_putt::sim::{GamePhase, Vec2};
    use iso_putt::{Game, GameSignal, LevelCatalog, Result, Tuning};

    /// Give up on a level after this many ticks
    const MAX_TICKS_PER_LEVEL: u32 = 3_000;

    /// Iso Putt headless autoplay
    #[derive(Parser)]
    #[command(version, about = "Plays every Iso Putt level with full-power putts")]
    struct Cli {
        /// Tuning JSON; fields left out keep their defaults
        #[arg(long, value_name = "PATH")]
        tuning: Option<PathBuf>,

        /// Level catalog JSON instead of the built-in levels
        #[arg(long, value_name = "PATH")]
        levels: Option<PathBuf>,
    }

    /// Pointer drag that shoots from the ball toward the hole at full power
    fn aim_at_hole(game: &mut Game) -> bool {
        let proj = *game.projection();
        let ball = game.ball().pos;
        let to_hole = (game.level().hole - ball).normalize_or_zero();
        // Full power needs max_power / launch_scale world units of pull
        let pull = game.tuning().max_power / game.tuning().launch_scale;

        let start = proj.world_to_screen(ball);
        if !game.pointer_down(start) {
            return false;
        }
        game.pointer_move(proj.world_to_screen(ball - to_hole * pull));
        game.pointer_up()
    }

    fn report(game: &mut Game) -> bool {
        let mut won = false;
        for signal in game.drain_signals() {
            match signal {
                GameSignal::LevelLoaded { index } => log::info!("HUD: level {}", index + 1),
                GameSignal::AttemptsChanged { remaining } => {
                    log::info!("HUD: {} attempts", remaining)
                }
                GameSignal::Won => {
                    log::info!("Nice!");
                    won = true;
                }
                GameSignal::Exhausted => log::info!("Try Again!"),
                GameSignal::Halted { message } => log::error!("Error: {}", message),
            }
        }
        won
    }

    /// Play the level that is currently loaded
    fn play_level(game: &mut Game) -> Result<bool> {
        report(game);

        let mut peak_vertices = 0;
        let mut sunk = false;
        for _ in 0..MAX_TICKS_PER_LEVEL {
            if game.phase() == GamePhase::Aiming && game.ball().vel == Vec2::ZERO {
                aim_at_hole(game);
            }
            game.frame()?;

            let frame = build_frame(game);
            if frame.vertices.is_empty() {
                log::warn!("Empty draw list at tick {}", game.time_ticks());
            }
            peak_vertices = peak_vertices.max(frame.vertices.len());

            if report(game) {
                sunk = true;
                break;
            }
        }
        log::debug!(
            "Level {} peak draw list: {} vertices",
            game.level().index + 1,
            peak_vertices
        );
        Ok(sunk)
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();

        let cli = Cli::parse();
        let tuning = match cli.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let catalog = match cli.levels {
            Some(path) => LevelCatalog::load(path)?,
            None => LevelCatalog::builtin()?,
        };

        let level_count = catalog.len();
        // Starts on the first level
        let mut game = Game::new(tuning, catalog)?;
        let mut sunk = 0;
        for index in 0..level_count {
            if index > 0 {
                game.load_level(index);
            }
            if play_level(&mut game)? {
                sunk += 1;
            } else {
                log::warn!("Level {} not sunk", index + 1);
            }
        }
        log::info!(
            "Sunk {} of {} levels in {} ticks",
            sunk,
            level_count,
            game.time_ticks()
        );
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = native::run() {
        eprintln!("iso-putt: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
