#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Per-corner radii, clockwise from the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub const ZERO: CornerRadii = CornerRadii {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    pub fn all(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    pub fn top(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            ..Self::ZERO
        }
    }

    pub fn bottom(r: f32) -> Self {
        Self {
            bottom_right: r,
            bottom_left: r,
            ..Self::ZERO
        }
    }

    pub fn left(r: f32) -> Self {
        Self {
            top_left: r,
            bottom_left: r,
            ..Self::ZERO
        }
    }

    pub fn right(r: f32) -> Self {
        Self {
            top_right: r,
            bottom_right: r,
            ..Self::ZERO
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Primary axis of a slider track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Component of `p` along the primary axis.
    pub fn along(self, p: Vec2) -> f32 {
        match self {
            Orientation::Vertical => p.y,
            Orientation::Horizontal => p.x,
        }
    }

    /// Extent of `s` along the primary axis.
    pub fn length_of(self, s: Size) -> f32 {
        match self {
            Orientation::Vertical => s.height,
            Orientation::Horizontal => s.width,
        }
    }

    /// Extent of `s` across the primary axis.
    pub fn thickness_of(self, s: Size) -> f32 {
        match self {
            Orientation::Vertical => s.width,
            Orientation::Horizontal => s.height,
        }
    }

    /// Builds a rect from axis-relative coordinates.
    pub fn rect(self, along: f32, across: f32, length: f32, thickness: f32) -> Rect {
        match self {
            Orientation::Vertical => Rect {
                x: across,
                y: along,
                w: thickness,
                h: length,
            },
            Orientation::Horizontal => Rect {
                x: along,
                y: across,
                w: length,
                h: thickness,
            },
        }
    }
}
