use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
}

#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub event: PointerEventKind,
    /// Position relative to the widget's parent, in px.
    pub position: Vec2,
}

impl PointerEvent {
    pub fn touch(event: PointerEventKind, position: Vec2) -> Self {
        Self {
            event,
            position,
        }
    }

    /// Touch phase of this event, ignoring which button produced it.
    pub fn phase(&self) -> TouchPhase {
        match self.event {
            PointerEventKind::Down(_) => TouchPhase::Down,
            PointerEventKind::Move => TouchPhase::Move,
            PointerEventKind::Up(_) => TouchPhase::Up,
            PointerEventKind::Cancel => TouchPhase::Cancel,
        }
    }
}

/// The four phases a slider reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}
