//! Win confetti
//!
//! Screen-space particles that burst from the hole when the ball drops.
//! Dead particles go to a spare list and are reused by the next burst.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::Vec2;
use crate::tuning::Tuning;

/// Confetti colours (RGBA)
pub const PALETTE: [[f32; 4]; 14] = [
    [0.957, 0.263, 0.212, 1.0],
    [0.914, 0.118, 0.388, 1.0],
    [0.612, 0.153, 0.690, 1.0],
    [0.247, 0.318, 0.710, 1.0],
    [0.129, 0.588, 0.953, 1.0],
    [0.0, 0.737, 0.831, 1.0],
    [0.0, 0.588, 0.533, 1.0],
    [0.298, 0.686, 0.314, 1.0],
    [0.545, 0.765, 0.290, 1.0],
    [0.804, 0.863, 0.224, 1.0],
    [1.0, 0.922, 0.231, 1.0],
    [1.0, 0.757, 0.027, 1.0],
    [1.0, 0.596, 0.0, 1.0],
    [1.0, 0.341, 0.133, 1.0],
];

/// A single confetti square
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f64,
    pub color: [f32; 4],
    /// 1 at spawn, dead at 0
    pub life: f64,
    pub decay: f64,
}

impl Particle {
    fn reset(&mut self, pos: Vec2, rng: &mut Pcg32) {
        self.pos = pos;
        self.vel = Vec2::new(
            (rng.random::<f64>() - 0.5) * 10.0,
            (rng.random::<f64>() - 1.0) * 10.0,
        );
        self.size = rng.random::<f64>() * 6.0 + 2.0;
        self.life = 1.0;
        self.decay = rng.random::<f64>() * 0.01 + 0.005;
        self.color = PALETTE[rng.random_range(0..PALETTE.len())];
    }

    fn step(&mut self, gravity: f64, drag: f64) {
        self.vel.y += gravity;
        self.vel *= drag;
        self.pos += self.vel;
        self.life -= self.decay;
    }
}

/// Pooled confetti system
#[derive(Debug, Clone)]
pub struct Confetti {
    active: Vec<Particle>,
    spare: Vec<Particle>,
    rng: Pcg32,
    count: usize,
    gravity: f64,
    drag: f64,
}

impl Confetti {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            active: Vec::with_capacity(tuning.confetti_count),
            spare: Vec::new(),
            rng: Pcg32::seed_from_u64(tuning.seed),
            count: tuning.confetti_count,
            gravity: tuning.confetti_gravity,
            drag: tuning.confetti_drag,
        }
    }

    /// Emit a burst at a screen position
    pub fn burst(&mut self, at: Vec2) {
        for _ in 0..self.count {
            let mut particle = self.spare.pop().unwrap_or_else(|| Particle {
                pos: at,
                vel: Vec2::ZERO,
                size: 0.0,
                color: PALETTE[0],
                life: 0.0,
                decay: 0.0,
            });
            particle.reset(at, &mut self.rng);
            self.active.push(particle);
        }
    }

    /// Advance every live particle one tick and retire the dead
    pub fn update(&mut self) {
        let mut i = self.active.len();
        while i > 0 {
            i -= 1;
            self.active[i].step(self.gravity, self.drag);
            if self.active[i].life <= 0.0 {
                let dead = self.active.swap_remove(i);
                self.spare.push(dead);
            }
        }
    }

    /// Retire everything (level change)
    pub fn clear(&mut self) {
        self.spare.append(&mut self.active);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Retired particles waiting for reuse
    pub fn spare_len(&self) -> usize {
        self.spare.len()
    }
}
