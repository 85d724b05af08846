use web_time::Duration;

use crate::Scene;

/// Draws a finished scene: filled (optionally gradient, per-corner rounded)
/// rects, text and icons.
pub trait RenderBackend {
    fn frame(&mut self, scene: &Scene);
}

/// Services a slider needs from the toolkit hosting it.
pub trait SliderHost {
    /// Stop ancestor containers from intercepting the current gesture.
    fn claim_gesture(&mut self);
    /// Call `InkSlider::on_repeat_timer` once `after` has elapsed. Replaces
    /// any timer scheduled earlier.
    fn schedule_repeat(&mut self, after: Duration);
    fn cancel_repeat(&mut self);
    fn request_redraw(&mut self) {}
}

/// Host that ignores every request; for headless use and tests that do not
/// care about timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl SliderHost for NoopHost {
    fn claim_gesture(&mut self) {}
    fn schedule_repeat(&mut self, _after: Duration) {}
    fn cancel_repeat(&mut self) {}
}
