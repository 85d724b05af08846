use std::fmt;

use crate::{Brush, Color, CornerRadii, IconId, Rect};

/// Renderable scene, in the widget's parent coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        brush: Brush,
        radii: CornerRadii,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
    },
    Icon {
        rect: Rect,
        icon: IconId,
        tint: Option<Color>,
    },
}

impl Scene {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }
}

fn fmt_rect(f: &mut fmt::Formatter<'_>, r: &Rect) -> fmt::Result {
    write!(f, "[{} {} {}x{}]", r.x, r.y, r.w, r.h)
}

fn fmt_color(f: &mut fmt::Formatter<'_>, c: &Color) -> fmt::Result {
    write!(f, "#{:02X}{:02X}{:02X}{:02X}", c.0, c.1, c.2, c.3)
}

/// One node per line; used by logging backends and snapshot tests.
impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            match node {
                SceneNode::Rect { rect, brush, radii } => {
                    write!(f, "rect ")?;
                    fmt_rect(f, rect)?;
                    match brush {
                        Brush::Solid(c) => {
                            write!(f, " solid ")?;
                            fmt_color(f, c)?;
                        }
                        Brush::Linear {
                            start,
                            end,
                            start_color,
                            end_color,
                        } => {
                            write!(f, " linear ({},{})->({},{}) ", start.x, start.y, end.x, end.y)?;
                            fmt_color(f, start_color)?;
                            write!(f, "->")?;
                            fmt_color(f, end_color)?;
                        }
                    }
                    if !radii.is_zero() {
                        write!(
                            f,
                            " radii {} {} {} {}",
                            radii.top_left, radii.top_right, radii.bottom_right, radii.bottom_left
                        )?;
                    }
                }
                SceneNode::Text {
                    rect, text, color, ..
                } => {
                    write!(f, "text ")?;
                    fmt_rect(f, rect)?;
                    write!(f, " {text:?} ")?;
                    fmt_color(f, color)?;
                }
                SceneNode::Icon { rect, icon, tint } => {
                    write!(f, "icon ")?;
                    fmt_rect(f, rect)?;
                    write!(f, " #{}", icon.0)?;
                    if let Some(t) = tint {
                        write!(f, " tint ")?;
                        fmt_color(f, t)?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
