use inkslider_core::{AnimatedValue, AnimationSpec, Instant};

/// Alpha of the colored bar. Opaque until `restart`, which drops it to zero
/// and fades back in.
pub struct TrackFade {
    alpha: AnimatedValue<f32>,
}

impl TrackFade {
    pub fn new() -> Self {
        Self::with_spec(AnimationSpec::fade_in())
    }

    pub fn with_spec(spec: AnimationSpec) -> Self {
        Self {
            alpha: AnimatedValue::new(1.0, spec),
        }
    }

    /// Restarts from transparent.
    pub fn restart(&mut self, now: Instant) {
        self.alpha.snap_to(0.0);
        self.alpha.set_target(1.0, now);
    }

    /// Advances to `now`; returns true while still fading.
    pub fn update(&mut self, now: Instant) -> bool {
        self.alpha.update(now)
    }

    pub fn alpha(&self) -> f32 {
        *self.alpha.get()
    }

    pub fn is_running(&self) -> bool {
        self.alpha.is_animating()
    }
}

impl Default for TrackFade {
    fn default() -> Self {
        Self::new()
    }
}
