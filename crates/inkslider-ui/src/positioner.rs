//! Badge placement along the track.
//!
//! A badge is centered on an anchor coordinate (the current step, or the raw
//! touch while dragging) and shifted by the track's offset within its
//! parent. Nothing can be placed until the host has measured the badges, so
//! requests made before that are queued and replayed by `on_measured`.

use smallvec::SmallVec;

/// Badge sizes along the primary axis, in px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BadgeExtents {
    pub top_left: f32,
    pub bottom_right: f32,
    pub center: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionerMetrics {
    /// Offset of the track's start edge within the parent, along the axis.
    pub spacing: f32,
    pub extents: BadgeExtents,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LayoutState {
    #[default]
    Pending,
    Measured(PositionerMetrics),
}

/// Start offsets of each badge along the axis, in parent px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BadgeOffsets {
    pub top_left: f32,
    pub bottom_right: f32,
    pub center: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Applied,
    /// Queued until the first measurement.
    Deferred,
    /// Anchor outside `1..=axis_length - 1`; offsets unchanged.
    Skipped,
}

#[derive(Debug, Default)]
pub struct DisplayPositioner {
    layout: LayoutState,
    axis_length: f32,
    pending: SmallVec<[f32; 4]>,
    anchor: Option<f32>,
    offsets: BadgeOffsets,
}

impl DisplayPositioner {
    pub fn new(axis_length: f32) -> Self {
        Self {
            axis_length,
            ..Self::default()
        }
    }

    pub fn layout(&self) -> LayoutState {
        self.layout
    }

    pub fn is_measured(&self) -> bool {
        matches!(self.layout, LayoutState::Measured(_))
    }

    pub fn set_axis_length(&mut self, axis_length: f32) {
        self.axis_length = axis_length;
    }

    pub fn axis_length(&self) -> f32 {
        self.axis_length
    }

    pub fn offsets(&self) -> BadgeOffsets {
        self.offsets
    }

    /// Last anchor that was applied.
    pub fn anchor(&self) -> Option<f32> {
        self.anchor
    }

    pub fn pending(&self) -> &[f32] {
        &self.pending
    }

    pub fn request(&mut self, anchor: f32) -> Placement {
        match self.layout {
            LayoutState::Pending => {
                self.pending.push(anchor);
                Placement::Deferred
            }
            LayoutState::Measured(metrics) => self.apply(anchor, metrics),
        }
    }

    /// Records a measurement and replays queued requests in order. Returns how
    /// many of them were applied.
    pub fn on_measured(&mut self, metrics: PositionerMetrics) -> usize {
        self.layout = LayoutState::Measured(metrics);
        let queued = std::mem::take(&mut self.pending);
        queued
            .into_iter()
            .filter(|&anchor| self.apply(anchor, metrics) == Placement::Applied)
            .count()
    }

    /// Back to the start edge with nothing queued; the measurement is kept.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.anchor = None;
        self.offsets = BadgeOffsets::default();
    }

    fn apply(&mut self, anchor: f32, metrics: PositionerMetrics) -> Placement {
        let at = anchor as i32;
        let limit = self.axis_length as i32;
        if at < 1 || at >= limit {
            return Placement::Skipped;
        }
        let spacing = metrics.spacing as i32;
        let place = |extent: f32| (at - extent as i32 / 2 + spacing) as f32;
        self.offsets = BadgeOffsets {
            top_left: place(metrics.extents.top_left),
            bottom_right: place(metrics.extents.bottom_right),
            center: place(metrics.extents.center),
        };
        self.anchor = Some(anchor);
        Placement::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> PositionerMetrics {
        PositionerMetrics {
            spacing: 8.0,
            extents: BadgeExtents {
                top_left: 20.0,
                bottom_right: 30.0,
                center: 11.0,
            },
        }
    }

    #[test]
    fn centers_badges_on_anchor() {
        let mut p = DisplayPositioner::new(100.0);
        p.on_measured(metrics());
        assert_eq!(p.request(50.0), Placement::Applied);
        assert_eq!(
            p.offsets(),
            BadgeOffsets {
                top_left: 48.0,
                bottom_right: 43.0,
                center: 53.0,
            }
        );
        assert_eq!(p.anchor(), Some(50.0));
    }

    #[test]
    fn truncates_fractional_anchor() {
        let mut p = DisplayPositioner::new(100.0);
        p.on_measured(metrics());
        p.request(40.9);
        assert_eq!(p.offsets().top_left, 38.0);
    }

    #[test]
    fn skips_outside_track() {
        let mut p = DisplayPositioner::new(100.0);
        p.on_measured(metrics());
        p.request(30.0);
        let before = p.offsets();

        for anchor in [0.0, 0.5, -3.0, 100.0, 140.0] {
            assert_eq!(p.request(anchor), Placement::Skipped, "anchor {anchor}");
            assert_eq!(p.offsets(), before);
        }
        assert_eq!(p.request(1.0), Placement::Applied);
        assert_eq!(p.request(99.0), Placement::Applied);
    }

    #[test]
    fn defers_until_measured() {
        let mut p = DisplayPositioner::new(100.0);
        assert!(!p.is_measured());
        assert_eq!(p.request(20.0), Placement::Deferred);
        assert_eq!(p.request(0.0), Placement::Deferred);
        assert_eq!(p.request(60.0), Placement::Deferred);
        assert_eq!(p.offsets(), BadgeOffsets::default());
        assert_eq!(p.pending(), &[20.0, 0.0, 60.0]);

        assert_eq!(p.on_measured(metrics()), 2);
        assert!(p.pending().is_empty());
        assert_eq!(p.anchor(), Some(60.0));
        assert_eq!(p.offsets().center, 63.0);
    }

    #[test]
    fn reset_keeps_measurement() {
        let mut p = DisplayPositioner::new(100.0);
        p.on_measured(metrics());
        p.request(50.0);
        p.reset();
        assert_eq!(p.offsets(), BadgeOffsets::default());
        assert_eq!(p.anchor(), None);
        assert!(p.is_measured());
        assert_eq!(p.request(10.0), Placement::Applied);
    }
}
