use egui::Vec2;
use egui::emath::easing;

use super::container::ScrollTarget;

/// Post-release "fling": an eased, time-driven scroll from where the drag ended toward
/// `to`. Advanced by the host's animation loop; cancelling it is just dropping it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentumAnimation {
    from: Vec2,
    to: Vec2,
    duration: f32,
    elapsed: f32,
    track_x: bool,
    track_y: bool,
}

impl MomentumAnimation {
    pub fn new(from: Vec2, to: Vec2, duration: f32, track_x: bool, track_y: bool) -> Self {
        debug_assert!(duration > 0.0, "momentum duration must be positive");
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            track_x,
            track_y,
        }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.from
    }

    /// Final offset the animation settles on.
    #[inline]
    pub fn to(&self) -> Vec2 {
        self.to
    }

    /// Linear time progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Eased offset at the current progress.
    pub fn current(&self) -> Vec2 {
        if self.is_finished() {
            return self.to;
        }
        let t = easing::cubic_out(self.progress());
        self.from + (self.to - self.from) * t
    }

    /// Step the animation by `dt` seconds and return the scroll request for this frame.
    ///
    /// Untracked axes are never part of the request.
    pub fn advance(&mut self, dt: f32) -> ScrollTarget {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        ScrollTarget::masked(self.current(), self.track_x, self.track_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin_and_settles_on_target() {
        let mut anim = MomentumAnimation::new(Vec2::new(0.0, 100.0), Vec2::new(0.0, 130.0), 0.3, false, true);
        assert_eq!(anim.current(), Vec2::new(0.0, 100.0));

        let halfway = anim.advance(0.15);
        let top = halfway.top.unwrap();
        assert!(top > 115.0 && top < 130.0, "ease-out should be past the midpoint: {top}");
        assert_eq!(halfway.left, None);

        let end = anim.advance(10.0);
        assert!(anim.is_finished());
        assert_eq!(end.top, Some(130.0));
    }

    #[test]
    fn ignores_bogus_time_steps() {
        let mut anim = MomentumAnimation::new(Vec2::ZERO, Vec2::new(50.0, 50.0), 0.2, true, true);
        anim.advance(-1.0);
        anim.advance(f32::NAN);
        assert_eq!(anim.progress(), 0.0);
        assert!(!anim.is_finished());
    }
}
