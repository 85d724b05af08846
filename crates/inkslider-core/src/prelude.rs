pub use crate::animation::{AnimatedValue, AnimationSpec, Clock, Easing, SystemClock, TestClock};
pub use crate::color::{Brush, Color, LinearGradient};
pub use crate::error::{Result, SliderError};
pub use crate::geometry::{CornerRadii, Orientation, Rect, Size, Vec2};
pub use crate::input::{PointerButton, PointerEvent, PointerEventKind, TouchPhase};
pub use crate::model::{ColorMode, Display, DisplayMode, IconId, Item, SliderModel};
pub use crate::render_api::{NoopHost, RenderBackend, SliderHost};
pub use crate::scene::{Scene, SceneNode};
pub use crate::units::{Density, Dp};
pub use web_time::{Duration, Instant};
