use crate::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    /// `#RRGGBB` or `#RRGGBBAA`. Anything else is opaque black.
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        if !s.is_ascii() {
            return Color::BLACK;
        }
        let (r, g, b, a) = match s.len() {
            6 => (
                u8::from_str_radix(&s[0..2], 16).unwrap_or(0),
                u8::from_str_radix(&s[2..4], 16).unwrap_or(0),
                u8::from_str_radix(&s[4..6], 16).unwrap_or(0),
                255,
            ),
            8 => (
                u8::from_str_radix(&s[0..2], 16).unwrap_or(0),
                u8::from_str_radix(&s[2..4], 16).unwrap_or(0),
                u8::from_str_radix(&s[4..6], 16).unwrap_or(0),
                u8::from_str_radix(&s[6..8], 16).unwrap_or(255),
            ),
            _ => (0, 0, 0, 255),
        };
        Color(r, g, b, a)
    }
    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// Scales the alpha channel by `factor` (clamped to 0..=1).
    pub fn mul_alpha(self, factor: f32) -> Self {
        let a = (self.3 as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }
}

/// Brush for filling shapes.
///
/// Segments are either a solid color or a two-stop linear gradient. Gradient
/// endpoints are normalized to the node's rect: (0,0) is its top-left corner
/// and (1,1) its bottom-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Linear {
        start: Vec2,
        end: Vec2,
        start_color: Color,
        end_color: Color,
    },
}

impl From<Color> for Brush {
    fn from(c: Color) -> Self {
        Brush::Solid(c)
    }
}

impl Brush {
    pub fn mul_alpha(self, factor: f32) -> Self {
        match self {
            Brush::Solid(c) => Brush::Solid(c.mul_alpha(factor)),
            Brush::Linear {
                start,
                end,
                start_color,
                end_color,
            } => Brush::Linear {
                start,
                end,
                start_color: start_color.mul_alpha(factor),
                end_color: end_color.mul_alpha(factor),
            },
        }
    }
}

pub struct LinearGradient;

impl LinearGradient {
    pub fn top_bottom(top: Color, bottom: Color) -> Brush {
        Brush::Linear {
            start: Vec2 { x: 0.0, y: 0.0 },
            end: Vec2 { x: 0.0, y: 1.0 },
            start_color: top,
            end_color: bottom,
        }
    }

    pub fn bottom_top(bottom: Color, top: Color) -> Brush {
        Brush::Linear {
            start: Vec2 { x: 0.0, y: 1.0 },
            end: Vec2 { x: 0.0, y: 0.0 },
            start_color: bottom,
            end_color: top,
        }
    }

    pub fn left_right(left: Color, right: Color) -> Brush {
        Brush::Linear {
            start: Vec2 { x: 0.0, y: 0.0 },
            end: Vec2 { x: 1.0, y: 0.0 },
            start_color: left,
            end_color: right,
        }
    }

    pub fn right_left(right: Color, left: Color) -> Brush {
        Brush::Linear {
            start: Vec2 { x: 1.0, y: 0.0 },
            end: Vec2 { x: 0.0, y: 0.0 },
            start_color: right,
            end_color: left,
        }
    }
}
