//! The colored bar: one rect per model color.

use inkslider_core::{
    Brush, Color, ColorMode, CornerRadii, LinearGradient, Orientation, Rect, SceneNode, Vec2,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub rect: Rect,
    pub brush: Brush,
    pub radii: CornerRadii,
}

impl From<Segment> for SceneNode {
    fn from(s: Segment) -> Self {
        SceneNode::Rect {
            rect: s.rect,
            brush: s.brush,
            radii: s.radii,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentStyle {
    pub orientation: Orientation,
    pub color_mode: ColorMode,
    /// Lay colors out last-to-first.
    pub reversed: bool,
    /// Run gradients end-to-start.
    pub flip_gradient: bool,
    pub corner_radius: f32,
    pub row_length: f32,
    pub thickness: f32,
}

pub fn build_segments(colors: &[Color], style: &SegmentStyle, origin: Vec2) -> Vec<Segment> {
    let ordered: Vec<Color> = if style.reversed {
        colors.iter().rev().copied().collect()
    } else {
        colors.to_vec()
    };
    let count = ordered.len();
    let (along0, across0) = match style.orientation {
        Orientation::Vertical => (origin.y, origin.x),
        Orientation::Horizontal => (origin.x, origin.y),
    };

    ordered
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let brush = match style.color_mode {
                ColorMode::Normal => Brush::Solid(color),
                ColorMode::GradientContinuous => {
                    let previous = if i > 0 { ordered[i - 1] } else { color };
                    gradient(style, previous, color)
                }
                ColorMode::Gradient => {
                    let next = ordered.get(i + 1).copied().unwrap_or(color);
                    gradient(style, color, next)
                }
            };
            Segment {
                rect: style.orientation.rect(
                    along0 + style.row_length * i as f32,
                    across0,
                    style.row_length,
                    style.thickness,
                ),
                brush,
                radii: corners(style.orientation, i, count, style.corner_radius),
            }
        })
        .collect()
}

fn gradient(style: &SegmentStyle, from: Color, to: Color) -> Brush {
    match (style.orientation, style.flip_gradient) {
        (Orientation::Vertical, false) => LinearGradient::top_bottom(from, to),
        (Orientation::Vertical, true) => LinearGradient::bottom_top(from, to),
        (Orientation::Horizontal, false) => LinearGradient::left_right(from, to),
        (Orientation::Horizontal, true) => LinearGradient::right_left(from, to),
    }
}

/// Outer corners of the end segments; everything in between stays square.
pub fn corners(orientation: Orientation, index: usize, count: usize, radius: f32) -> CornerRadii {
    let first = index == 0;
    let last = index + 1 == count;
    match (first, last) {
        (true, true) => CornerRadii::all(radius),
        (true, false) => match orientation {
            Orientation::Vertical => CornerRadii::top(radius),
            Orientation::Horizontal => CornerRadii::left(radius),
        },
        (false, true) => match orientation {
            Orientation::Vertical => CornerRadii::bottom(radius),
            Orientation::Horizontal => CornerRadii::right(radius),
        },
        (false, false) => CornerRadii::ZERO,
    }
}
