//! Mapping a coordinate along the track to a value.
//!
//! The track is divided into `item_count` steps of `step_size` px. Value `i`
//! is anchored at `step_size * i` from the start edge, or at
//! `axis_length - step_size * i` when the axis is reversed. A touch at `p`
//! is rounded to the nearest step for clamping and otherwise resolved to the
//! selectable value whose anchor is closest.

use inkslider_core::Item;
use inkslider_core::model::{first_selectable, last_selectable};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepGeometry {
    /// Track length along the primary axis, in px.
    pub axis_length: f32,
    pub item_count: usize,
    pub reversed: bool,
}

impl StepGeometry {
    pub fn step_size(&self) -> f32 {
        if self.item_count == 0 {
            0.0
        } else {
            self.axis_length / self.item_count as f32
        }
    }

    /// Pixel anchor of value `index`.
    pub fn anchor(&self, index: usize) -> f32 {
        let offset = self.step_size() * index as f32;
        if self.reversed {
            self.axis_length - offset
        } else {
            offset
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSelection {
    pub rough_step: f32,
    pub step: i64,
    /// Index into the model's `values`.
    pub index: usize,
}

/// `round` with halves going up, so `-0.5` rounds to `0` and `0.5` to `1`.
pub fn round_half_up(x: f32) -> i64 {
    (x + 0.5).floor() as i64
}

/// Resolves `position` (px from the track's start edge) to a selectable
/// value. `values` must contain at least one selectable item.
pub fn map_position<T>(position: f32, geometry: &StepGeometry, values: &[Item<T>]) -> StepSelection {
    let n = values.len();
    let step_size = geometry.step_size();
    if n == 0 || step_size.is_nan() || step_size <= 0.0 {
        return StepSelection {
            rough_step: 0.0,
            step: 0,
            index: first_selectable(values),
        };
    }

    let exact = position / step_size;
    // Reversed anchors sit one step further along than their list position.
    let rough_step = if geometry.reversed { exact - 1.0 } else { exact };
    let step = round_half_up(exact);

    let index = if step <= 0 {
        if geometry.reversed {
            last_selectable(values)
        } else {
            first_selectable(values)
        }
    } else if step >= n as i64 {
        if geometry.reversed {
            first_selectable(values)
        } else {
            last_selectable(values)
        }
    } else {
        nearest_selectable(values, rough_step, geometry.reversed)
    };

    StepSelection {
        rough_step,
        step,
        index,
    }
}

/// Selectable value whose list position is closest to `rough`; ties go to
/// the lower position. Positions count from the start edge, so a reversed
/// track walks `values` back to front.
pub fn nearest_selectable<T>(values: &[Item<T>], rough: f32, reversed: bool) -> usize {
    let n = values.len();
    let to_index = |pos: usize| if reversed { n - 1 - pos } else { pos };
    (0..n)
        .filter(|&pos| values[to_index(pos)].selectable)
        .min_by(|&a, &b| {
            let da = (a as f32 - rough).abs();
            let db = (b as f32 - rough).abs();
            da.total_cmp(&db).then(a.cmp(&b))
        })
        .map(to_index)
        .unwrap_or(0)
}
