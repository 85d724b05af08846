//! # InkSlider core
//!
//! Data and collaborator types shared by the slider widget and its hosts:
//!
//! - `SliderModel<T>`: colors, values, current selection, styling and
//!   callbacks, validated on construction.
//! - `Color`, `Brush`, `Rect`, `CornerRadii`, `Orientation`: the vocabulary
//!   segments and badges are described in.
//! - `PointerEvent`: the touch stream a host feeds in.
//! - `Scene` / `RenderBackend`: what the widget hands back to be drawn.
//! - `SliderHost`: gesture claiming and the button repeat timer.
//! - `AnimatedValue` and `Clock`: time for the fade-in and button repeat.
//!
//! Nothing here touches a window system; a host translates its own events and
//! draw calls to and from these types.

pub mod animation;
pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod model;
pub mod prelude;
pub mod render_api;
pub mod scene;
pub mod tests;
pub mod units;

pub use animation::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use model::*;
pub use render_api::*;
pub use scene::*;
pub use units::*;

pub use web_time::{Duration, Instant};
