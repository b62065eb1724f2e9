//! Game phase driver
//!
//! Owns the ball, the live level and the phase machine:
//!
//! ```text
//! Aiming --launch--> Moving --stopped, attempts left--> Aiming
//!                      |  \--stopped, no attempts--> (reset after a delay)
//!                      \--ball in hole--> Won
//! ```
//!
//! One call to [`Game::frame`] is one tick. Anything the UI needs to react to
//! is queued as a [`GameSignal`].

use crate::clouds::CloudLayer;
use crate::error::{GameError, Result};
use crate::input::{AimPreview, DragTracker, LaunchParams};
use crate::level::LevelCatalog;
use crate::particles::Confetti;
use crate::projection::IsoProjection;
use crate::sim::{Ball, GamePhase, Level, Physics, TickEvent, Vec2};
use crate::tuning::Tuning;

/// Notifications for the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum GameSignal {
    LevelLoaded { index: usize },
    AttemptsChanged { remaining: u8 },
    /// Ball sunk; show the win overlay
    Won,
    /// Out of attempts with the ball at rest; the level restarts shortly
    Exhausted,
    /// Simulation stopped for good
    Halted { message: String },
}

/// A running game
#[derive(Debug)]
pub struct Game {
    tuning: Tuning,
    catalog: LevelCatalog,
    projection: IsoProjection,
    launch: LaunchParams,
    physics: Physics,
    ball: Ball,
    level: Level,
    phase: GamePhase,
    attempts: u8,
    drag: DragTracker,
    /// Ticks until the level reloads after running out of attempts
    pending_reset: Option<u32>,
    confetti: Confetti,
    clouds: CloudLayer,
    signals: Vec<GameSignal>,
    time_ticks: u64,
    /// Set once the fail-stop check trips
    halted: Option<String>,
}

impl Game {
    /// Create a game on the first level of `catalog`
    pub fn new(tuning: Tuning, catalog: LevelCatalog) -> Result<Self> {
        tuning.validate()?;

        let level = catalog.get(0).instantiate(0);
        let mut game = Self {
            projection: IsoProjection::from(&tuning),
            launch: LaunchParams::from(&tuning),
            physics: Physics::new(&tuning),
            ball: Ball::new(tuning.ball_radius),
            level,
            phase: GamePhase::Aiming,
            attempts: tuning.max_attempts,
            drag: DragTracker::default(),
            pending_reset: None,
            confetti: Confetti::new(&tuning),
            clouds: CloudLayer::new(&tuning),
            signals: Vec::new(),
            time_ticks: 0,
            halted: None,
            tuning,
            catalog,
        };
        game.load_level(0);
        Ok(game)
    }

    /// Load a level by index (past the end wraps to the first level)
    ///
    /// Cancels a pending reset, so reloading during the delay never
    /// reloads twice.
    pub fn load_level(&mut self, index: usize) {
        let index = self.catalog.wrap_index(index);
        self.level = self.catalog.get(index).instantiate(index);
        self.ball.activate(self.level.start);
        self.attempts = self.tuning.max_attempts;
        self.phase = GamePhase::Aiming;
        self.pending_reset = None;
        self.drag.cancel();
        self.confetti.clear();

        log::info!("Loaded level {} of {}", index + 1, self.catalog.len());
        self.signals.push(GameSignal::LevelLoaded { index });
        self.signals.push(GameSignal::AttemptsChanged {
            remaining: self.attempts,
        });
    }

    pub fn restart_level(&mut self) {
        self.load_level(self.level.index);
    }

    pub fn next_level(&mut self) {
        self.load_level(self.level.index + 1);
    }

    /// Run one tick
    ///
    /// An error here is fatal: it is returned once, reported as
    /// [`GameSignal::Halted`], and every later call does nothing.
    pub fn frame(&mut self) -> Result<()> {
        if self.halted.is_some() {
            return Ok(());
        }

        match self.step() {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("{}", e);
                let message = e.to_string();
                self.halted = Some(message.clone());
                self.signals.push(GameSignal::Halted { message });
                Err(e)
            }
        }
    }

    fn step(&mut self) -> Result<()> {
        self.time_ticks += 1;
        self.clouds.update();
        self.confetti.update();

        if let Some(ticks) = self.pending_reset.as_mut() {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                log::info!("Out of attempts, restarting level {}", self.level.index + 1);
                self.restart_level();
                return Ok(());
            }
        }

        let event = self
            .physics
            .update(&mut self.ball, &mut self.level, self.phase);
        self.check_finite()?;

        if event == Some(TickEvent::Won) && self.phase != GamePhase::Won {
            self.win();
        }

        if event.is_none() && self.ball.is_stopped() && self.phase == GamePhase::Moving {
            if self.attempts > 0 {
                self.phase = GamePhase::Aiming;
            } else if self.pending_reset.is_none() {
                log::info!(
                    "No attempts left, resetting in {} ticks",
                    self.tuning.reset_delay_ticks
                );
                self.pending_reset = Some(self.tuning.reset_delay_ticks);
                self.signals.push(GameSignal::Exhausted);
            }
        }

        Ok(())
    }

    fn win(&mut self) {
        log::info!(
            "Level {} won with {} attempts left",
            self.level.index + 1,
            self.attempts
        );
        self.phase = GamePhase::Won;
        self.pending_reset = None;
        self.drag.cancel();
        let hole_screen = self.projection.world_to_screen(self.level.hole);
        self.confetti.burst(hole_screen);
        self.signals.push(GameSignal::Won);
    }

    fn check_finite(&self) -> Result<()> {
        let reason = if !self.ball.pos.is_finite() {
            "ball position is not finite"
        } else if !self.ball.vel.is_finite() {
            "ball velocity is not finite"
        } else {
            return Ok(());
        };
        Err(GameError::Simulation {
            tick: self.time_ticks,
            reason: reason.to_string(),
        })
    }

    /// Pointer pressed (screen pixels). Only grabs the ball while aiming.
    pub fn pointer_down(&mut self, screen: Vec2) -> bool {
        if self.halted.is_some() || self.phase != GamePhase::Aiming {
            return false;
        }
        let ball_screen = self.projection.world_to_screen(self.ball.pos);
        self.drag.pointer_down(screen, ball_screen, &self.launch)
    }

    pub fn pointer_move(&mut self, screen: Vec2) {
        self.drag.pointer_move(screen);
    }

    /// Pointer released; launches if the drag was long enough
    pub fn pointer_up(&mut self) -> bool {
        match self.drag.pointer_up(&self.projection, &self.launch) {
            Some(velocity) => self.shoot(velocity),
            None => false,
        }
    }

    /// Launch the ball with a world-space velocity
    pub fn shoot(&mut self, velocity: Vec2) -> bool {
        if self.halted.is_some() || self.phase != GamePhase::Aiming {
            return false;
        }
        self.ball.vel = velocity;
        self.phase = GamePhase::Moving;
        self.attempts = self.attempts.saturating_sub(1);
        log::info!(
            "Shot ({:.2}, {:.2}), {} attempts left",
            velocity.x,
            velocity.y,
            self.attempts
        );
        self.signals.push(GameSignal::AttemptsChanged {
            remaining: self.attempts,
        });
        true
    }

    /// Take all queued signals
    pub fn drain_signals(&mut self) -> Vec<GameSignal> {
        std::mem::take(&mut self.signals)
    }

    pub fn aim_preview(&self) -> Option<AimPreview> {
        if self.phase != GamePhase::Aiming {
            return None;
        }
        self.drag.preview(&self.launch)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn projection(&self) -> &IsoProjection {
        &self.projection
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    pub fn clouds(&self) -> &CloudLayer {
        &self.clouds
    }

    pub fn pending_reset(&self) -> Option<u32> {
        self.pending_reset
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    pub fn halt_message(&self) -> Option<&str> {
        self.halted.as_deref()
    }
}
