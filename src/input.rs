//! Drag-to-shoot input
//!
//! The player grabs near the ball and pulls back like a slingshot. The drag
//! arrives in screen pixels; the launch velocity is worked out in world space
//! through the projection so the shot goes where the screen line points.

use crate::projection::IsoProjection;
use crate::sim::Vec2;
use crate::tuning::Tuning;

/// Launch limits, taken from tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParams {
    pub max_power: f64,
    pub power_scale: f64,
    pub launch_scale: f64,
    pub grab_radius: f64,
}

impl From<&Tuning> for LaunchParams {
    fn from(t: &Tuning) -> Self {
        Self {
            max_power: t.max_power,
            power_scale: t.power_scale,
            launch_scale: t.launch_scale,
            grab_radius: t.grab_radius,
        }
    }
}

/// What the renderer needs to draw the aim line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimPreview {
    pub start: Vec2,
    /// Where the pointer actually is
    pub pointer: Vec2,
    /// Current pointer, pulled in so the drag never exceeds full power
    pub current: Vec2,
    /// current - start, clamped
    pub drag: Vec2,
    /// 0 = no power, 1 = full power
    pub power_ratio: f64,
}

/// Pointer state between down and up
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    start: Option<Vec2>,
    current: Option<Vec2>,
}

impl DragTracker {
    /// Start a drag if the pointer lands within the grab radius of the ball
    pub fn pointer_down(&mut self, screen: Vec2, ball_screen: Vec2, params: &LaunchParams) -> bool {
        if screen.distance(ball_screen) < params.grab_radius {
            self.start = Some(screen);
            self.current = Some(screen);
            true
        } else {
            false
        }
    }

    pub fn pointer_move(&mut self, screen: Vec2) {
        if self.start.is_some() {
            self.current = Some(screen);
        }
    }

    /// End the drag; returns the launch velocity if the pull was strong enough
    pub fn pointer_up(
        &mut self,
        projection: &IsoProjection,
        params: &LaunchParams,
    ) -> Option<Vec2> {
        let start = self.start.take()?;
        let current = self.current.take()?;
        launch_velocity(start, current, projection, params)
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.current = None;
    }

    pub fn preview(&self, params: &LaunchParams) -> Option<AimPreview> {
        let (start, current) = (self.start?, self.current?);
        Some(aim_preview(start, current, params))
    }
}

/// World-space launch velocity for a screen drag from `start` to `current`
///
/// The screen pull has to amount to more than one unit of power or the drag
/// is treated as a tap. Speed is the world pull times `launch_scale`, capped
/// at `max_power`, pointing from `current` back toward `start`.
pub fn launch_velocity(
    start: Vec2,
    current: Vec2,
    projection: &IsoProjection,
    params: &LaunchParams,
) -> Option<Vec2> {
    let screen_power = (start - current).length() * params.power_scale;
    if screen_power <= 1.0 {
        log::warn!("Drag too short to launch (power {:.2})", screen_power);
        return None;
    }

    let pull = projection.screen_to_world(start) - projection.screen_to_world(current);
    let power = (pull.length() * params.launch_scale).min(params.max_power);
    Some(pull.normalize_or_zero() * power)
}

/// Aim line data with the drag clamped to full power
pub fn aim_preview(start: Vec2, current: Vec2, params: &LaunchParams) -> AimPreview {
    let max_drag = params.max_power / params.power_scale;
    let mut drag = current - start;
    if drag.length() > max_drag {
        drag = drag.normalize_or_zero() * max_drag;
    }
    let power = drag.length() * params.power_scale;
    AimPreview {
        start,
        pointer: current,
        current: start + drag,
        drag,
        power_ratio: (power / params.max_power).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> LaunchParams {
        LaunchParams::from(&Tuning::default())
    }

    #[test]
    fn test_grab_radius() {
        let mut drag = DragTracker::default();
        let ball = Vec2::new(110.0, 325.0);
        assert!(!drag.pointer_down(Vec2::new(160.0, 325.0), ball, &params()));
        assert!(drag.preview(&params()).is_none());
        assert!(drag.pointer_down(Vec2::new(130.0, 325.0), ball, &params()));
        assert!(drag.preview(&params()).is_some());
    }

    #[test]
    fn test_move_ignored_without_drag() {
        let mut drag = DragTracker::default();
        drag.pointer_move(Vec2::new(1.0, 1.0));
        assert!(drag.preview(&params()).is_none());
        assert!(drag.pointer_up(&IsoProjection::default(), &params()).is_none());
    }

    #[test]
    fn test_short_drag_is_discarded() {
        let proj = IsoProjection::default();
        let mut drag = DragTracker::default();
        let ball = Vec2::new(110.0, 325.0);
        drag.pointer_down(ball, ball, &params());
        // 10 px * 0.08 = 0.8 power, below 1
        drag.pointer_move(ball + Vec2::new(10.0, 0.0));
        assert!(drag.pointer_up(&proj, &params()).is_none());
        assert!(drag.preview(&params()).is_none());
    }

    #[test]
    fn test_pull_back_launches_forward() {
        let proj = IsoProjection::default();
        let ball_world = Vec2::new(100.0, 400.0);
        let start = proj.world_to_screen(ball_world);
        // Drag 40 world units "behind" the ball along +y
        let current = proj.world_to_screen(ball_world + Vec2::new(0.0, 40.0));

        let vel = launch_velocity(start, current, &proj, &params()).unwrap();
        assert!(vel.x.abs() < 1e-9);
        assert!((vel.y - (-6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_power_is_capped() {
        let proj = IsoProjection::default();
        let ball_world = Vec2::new(100.0, 400.0);
        let start = proj.world_to_screen(ball_world);
        let current = proj.world_to_screen(ball_world + Vec2::new(300.0, 0.0));

        let vel = launch_velocity(start, current, &proj, &params()).unwrap();
        assert!((vel.length() - 15.0).abs() < 1e-9);
        assert!(vel.x < 0.0);
    }

    #[test]
    fn test_preview_clamps_drag() {
        let p = params();
        let start = Vec2::new(100.0, 100.0);
        // Max drag is 15 / 0.08 = 187.5 px
        let preview = aim_preview(start, Vec2::new(100.0, 600.0), &p);
        assert!((preview.drag.length() - 187.5).abs() < 1e-9);
        assert!((preview.current.y - 287.5).abs() < 1e-9);
        assert_eq!(preview.pointer, Vec2::new(100.0, 600.0));
        assert!((preview.power_ratio - 1.0).abs() < 1e-12);

        let half = aim_preview(start, Vec2::new(100.0, 100.0 + 93.75), &p);
        assert!((half.power_ratio - 0.5).abs() < 1e-12);
    }
}
