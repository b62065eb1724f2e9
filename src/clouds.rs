//! Sky layer
//!
//! Puffs of cloud drifting left to right across the canvas in screen space.
//! A cloud that leaves on the right comes back in from the left at a fresh
//! height and speed.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::tuning::Tuning;

const MIN_SPEED: f64 = 0.2;
const SPEED_SPREAD: f64 = 0.2;
const MIN_SIZE: f64 = 30.0;
const SIZE_SPREAD: f64 = 40.0;
const MIN_OPACITY: f64 = 0.4;
const OPACITY_SPREAD: f64 = 0.3;

/// A single cloud (screen pixels)
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    /// Pixels per tick
    pub speed: f64,
    /// Radius of the main puff
    pub size: f64,
    pub opacity: f64,
}

/// All clouds on screen
#[derive(Debug, Clone)]
pub struct CloudLayer {
    clouds: Vec<Cloud>,
    rng: Pcg32,
    width: f64,
    height: f64,
}

impl CloudLayer {
    pub fn new(tuning: &Tuning) -> Self {
        // Separate stream from the confetti
        let mut rng = Pcg32::new(tuning.seed, 0xc10d);
        let (width, height) = (tuning.canvas_width, tuning.canvas_height);

        let clouds = (0..tuning.cloud_count)
            .map(|_| Cloud {
                x: rng.random::<f64>() * width,
                y: rng.random::<f64>() * height,
                speed: MIN_SPEED + rng.random::<f64>() * SPEED_SPREAD,
                size: MIN_SIZE + rng.random::<f64>() * SIZE_SPREAD,
                opacity: MIN_OPACITY + rng.random::<f64>() * OPACITY_SPREAD,
            })
            .collect();

        Self {
            clouds,
            rng,
            width,
            height,
        }
    }

    /// Drift every cloud one tick
    pub fn update(&mut self) {
        for cloud in &mut self.clouds {
            cloud.x += cloud.speed;
            if cloud.x > self.width + cloud.size * 2.0 {
                cloud.x = -cloud.size * 2.0;
                cloud.y = self.rng.random::<f64>() * self.height;
                cloud.speed = MIN_SPEED + self.rng.random::<f64>() * SPEED_SPREAD;
            }
        }
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_clouds_within_ranges() {
        let layer = CloudLayer::new(&Tuning::default());
        assert_eq!(layer.clouds().len(), 8);
        for c in layer.clouds() {
            assert!(c.x >= 0.0 && c.x < 360.0);
            assert!(c.y >= 0.0 && c.y < 640.0);
            assert!(c.speed >= 0.2 && c.speed < 0.4);
            assert!(c.size >= 30.0 && c.size < 70.0);
            assert!(c.opacity >= 0.4 && c.opacity < 0.7);
        }
    }

    #[test]
    fn test_clouds_drift_right() {
        let mut layer = CloudLayer::new(&Tuning::default());
        let before = layer.clouds().to_vec();
        layer.update();
        for (c, b) in layer.clouds().iter().zip(&before) {
            assert!((c.x - (b.x + b.speed)).abs() < 1e-12);
            assert_eq!(c.y, b.y);
        }
    }

    #[test]
    fn test_cloud_wraps_to_left_edge() {
        let mut layer = CloudLayer::new(&Tuning::default());
        let size = layer.clouds[0].size;
        let opacity = layer.clouds[0].opacity;
        // One step short of leaving the canvas
        layer.clouds[0].x = 360.0 + size * 2.0 - 0.1;
        layer.clouds[0].speed = 0.3;

        layer.update();
        let c = &layer.clouds()[0];
        assert_eq!(c.x, -size * 2.0);
        assert!(c.y >= 0.0 && c.y < 640.0);
        assert!(c.speed >= 0.2 && c.speed < 0.4);
        assert_eq!(c.size, size);
        assert_eq!(c.opacity, opacity);
    }

    #[test]
    fn test_same_seed_same_sky() {
        let a = CloudLayer::new(&Tuning::default());
        let b = CloudLayer::new(&Tuning::default());
        assert_eq!(a.clouds(), b.clouds());
    }

    #[test]
    fn test_cloud_count_from_tuning() {
        let tuning = Tuning {
            cloud_count: 0,
            ..Default::default()
        };
        let mut layer = CloudLayer::new(&tuning);
        layer.update();
        assert!(layer.clouds().is_empty());
    }
}
