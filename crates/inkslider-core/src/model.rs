//! # Slider model
//!
//! `SliderModel<T>` is the plain data a slider renders: the colors of the
//! bar, the values it can select, which one is current, and how badges and
//! segments are styled. `T` is the host's payload for each value; the slider
//! never looks inside it except to compare items for equality.
//!
//! Models are built through `SliderModel::builder`, which rejects anything
//! the widget could not render sensibly:
//!
//! ```rust
//! use inkslider_core::*;
//!
//! let model = SliderModel::builder(
//!     vec![Color::from_hex("#2E7D32"), Color::from_hex("#C62828")],
//!     vec![
//!         Item::new(0, Display::text("low")),
//!         Item::new(1, Display::text("high")),
//!     ],
//! )
//! .color_mode(ColorMode::Normal)
//! .build()
//! .unwrap();
//!
//! assert_eq!(model.current_item().value, 1);
//! assert!(SliderModel::<u8>::builder(vec![], vec![]).build().is_err());
//! ```

use std::fmt;
use std::rc::Rc;

use crate::{Color, Orientation, Result, SliderError};

/// `(item, from_user)`
pub type ValueCallback<T> = Rc<dyn Fn(&Item<T>, bool)>;

/// Host-resolved icon handle (a drawable resource id, an atlas slot, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IconId(pub u32);

/// What a badge shows for an item. Every part is optional; a missing part is
/// hidden.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Display {
    pub string: Option<String>,
    pub icon: Option<IconId>,
    pub text_color: Option<Color>,
    pub icon_tint_color: Option<Color>,
    pub arrow_tint_color: Option<Color>,
}

impl Display {
    pub fn text(s: impl Into<String>) -> Self {
        Self {
            string: Some(s.into()),
            ..Self::default()
        }
    }

    pub fn icon(icon: IconId) -> Self {
        Self {
            icon: Some(icon),
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }
    pub fn with_text_color(mut self, c: Color) -> Self {
        self.text_color = Some(c);
        self
    }
    pub fn with_icon_tint(mut self, c: Color) -> Self {
        self.icon_tint_color = Some(c);
        self
    }
    pub fn with_arrow_tint(mut self, c: Color) -> Self {
        self.arrow_tint_color = Some(c);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item<T> {
    pub value: T,
    pub display: Display,
    pub selectable: bool,
}

impl<T> Item<T> {
    pub fn new(value: T, display: Display) -> Self {
        Self {
            value,
            display,
            selectable: true,
        }
    }

    /// An item that occupies a step but can never become current.
    pub fn unselectable(value: T, display: Display) -> Self {
        Self {
            value,
            display,
            selectable: false,
        }
    }
}

/// Which badge slots are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayMode {
    /// Badge before the track (left of a vertical bar, above a horizontal one).
    LeftTop,
    /// Badge after the track.
    RightBottom,
    /// `LeftTop` and `RightBottom`.
    BothSides,
    /// Badge over the track.
    #[default]
    Center,
    /// Badge over the track, filled with the item's text color.
    CenterSpecial,
    None,
}

impl DisplayMode {
    pub const LEFT: DisplayMode = DisplayMode::LeftTop;
    pub const RIGHT: DisplayMode = DisplayMode::RightBottom;
    pub const BOTH: DisplayMode = DisplayMode::BothSides;
    pub const NONE: DisplayMode = DisplayMode::None;

    pub fn shows_top_left(self) -> bool {
        matches!(self, DisplayMode::LeftTop | DisplayMode::BothSides)
    }

    pub fn shows_bottom_right(self) -> bool {
        matches!(self, DisplayMode::RightBottom | DisplayMode::BothSides)
    }

    pub fn shows_center(self) -> bool {
        matches!(self, DisplayMode::Center | DisplayMode::CenterSpecial)
    }
}

/// How segments are filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorMode {
    Normal,
    Gradient,
    #[default]
    GradientContinuous,
}

pub const DEFAULT_CORNER_RADIUS: f32 = 100.0;

#[derive(Clone)]
pub struct SliderModel<T> {
    colors: Vec<Color>,
    values: Vec<Item<T>>,
    current: usize,
    corner_radius: f32,
    enabled: bool,
    pub display_mode: DisplayMode,
    pub color_mode: ColorMode,
    pub orientation: Orientation,
    /// Flips the direction values are laid out along the axis. Vertical
    /// tracks start at the top and horizontal ones at the right edge.
    pub reverse: bool,
    /// Snap badges to the current step when a drag is released.
    pub hard_steps: bool,
    /// Ignore programmatic selection while the user is touching the slider.
    pub ignore_input_while_user_interaction: bool,
    /// Called once per committed change (button step, drag release,
    /// programmatic set).
    pub on_value_set: Option<ValueCallback<T>>,
    /// Called on every live selection change.
    pub on_value_change: Option<ValueCallback<T>>,
}

impl<T: fmt::Debug> fmt::Debug for SliderModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderModel")
            .field("colors", &self.colors)
            .field("values", &self.values)
            .field("current", &self.current)
            .field("corner_radius", &self.corner_radius)
            .field("enabled", &self.enabled)
            .field("display_mode", &self.display_mode)
            .field("color_mode", &self.color_mode)
            .field("orientation", &self.orientation)
            .field("reverse", &self.reverse)
            .field("hard_steps", &self.hard_steps)
            .finish_non_exhaustive()
    }
}

impl<T> SliderModel<T> {
    pub fn builder(colors: Vec<Color>, values: Vec<Item<T>>) -> SliderModelBuilder<T> {
        SliderModelBuilder::new(colors, values)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn values(&self) -> &[Item<T>] {
        &self.values
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &Item<T> {
        &self.values[self.current]
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_disabled(&self) -> bool {
        !self.enabled
    }

    /// Flips the flag only; `InkSlider::set_enabled` also rebuilds the view.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Makes `index` current. Returns whether the selection changed.
    ///
    /// Non-selectable items are accepted here: programmatic selection may
    /// point anywhere in `values`, only user input is restricted.
    pub fn select_index(&mut self, index: usize) -> Result<bool> {
        if index >= self.values.len() {
            return Err(SliderError::IndexOutOfRange {
                index,
                len: self.values.len(),
            });
        }
        let changed = self.current != index;
        self.current = index;
        Ok(changed)
    }

    pub fn first_selectable(&self) -> usize {
        first_selectable(&self.values)
    }

    pub fn last_selectable(&self) -> usize {
        last_selectable(&self.values)
    }

    /// Next selectable index after `from`, if any.
    pub fn next_selectable(&self, from: usize) -> Option<usize> {
        next_selectable(&self.values, from)
    }

    /// Previous selectable index before `from`, if any.
    pub fn previous_selectable(&self, from: usize) -> Option<usize> {
        previous_selectable(&self.values, from)
    }

    /// Invokes `on_value_set` with the current item.
    pub fn fire_value_set(&self, from_user: bool) {
        if let Some(cb) = &self.on_value_set {
            cb(self.current_item(), from_user);
        }
    }

    /// Invokes `on_value_change` with the current item.
    pub fn fire_value_change(&self, from_user: bool) {
        if let Some(cb) = &self.on_value_change {
            cb(self.current_item(), from_user);
        }
    }
}

impl<T: PartialEq> SliderModel<T> {
    pub fn position_of(&self, item: &Item<T>) -> Option<usize> {
        self.values.iter().position(|it| it == item)
    }
}

/// First selectable index of a non-empty slice with a selectable entry.
pub fn first_selectable<T>(items: &[Item<T>]) -> usize {
    items.iter().position(|it| it.selectable).unwrap_or(0)
}

/// Last selectable index of a non-empty slice with a selectable entry.
pub fn last_selectable<T>(items: &[Item<T>]) -> usize {
    items
        .iter()
        .rposition(|it| it.selectable)
        .unwrap_or(items.len().saturating_sub(1))
}

pub fn next_selectable<T>(items: &[Item<T>], from: usize) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .skip(from + 1)
        .find(|(_, it)| it.selectable)
        .map(|(i, _)| i)
}

pub fn previous_selectable<T>(items: &[Item<T>], from: usize) -> Option<usize> {
    items[..from.min(items.len())]
        .iter()
        .rposition(|it| it.selectable)
}

pub struct SliderModelBuilder<T> {
    colors: Vec<Color>,
    values: Vec<Item<T>>,
    current: Option<Current<T>>,
    display_mode: DisplayMode,
    color_mode: ColorMode,
    orientation: Orientation,
    corner_radius: f32,
    reverse: bool,
    hard_steps: bool,
    enabled: bool,
    ignore_input_while_user_interaction: bool,
    on_value_set: Option<ValueCallback<T>>,
    on_value_change: Option<ValueCallback<T>>,
}

enum Current<T> {
    Index(usize),
    Item(Item<T>),
}

impl<T> SliderModelBuilder<T> {
    pub fn new(colors: Vec<Color>, values: Vec<Item<T>>) -> Self {
        Self {
            colors,
            values,
            current: None,
            display_mode: DisplayMode::default(),
            color_mode: ColorMode::default(),
            orientation: Orientation::default(),
            corner_radius: DEFAULT_CORNER_RADIUS,
            reverse: false,
            hard_steps: true,
            enabled: true,
            ignore_input_while_user_interaction: false,
            on_value_set: None,
            on_value_change: None,
        }
    }

    pub fn current_index(mut self, index: usize) -> Self {
        self.current = Some(Current::Index(index));
        self
    }
    pub fn current_item(mut self, item: Item<T>) -> Self {
        self.current = Some(Current::Item(item));
        self
    }
    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
    pub fn hard_steps(mut self, hard_steps: bool) -> Self {
        self.hard_steps = hard_steps;
        self
    }
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
    pub fn ignore_input_while_user_interaction(mut self, ignore: bool) -> Self {
        self.ignore_input_while_user_interaction = ignore;
        self
    }
    pub fn on_value_set(mut self, f: impl Fn(&Item<T>, bool) + 'static) -> Self {
        self.on_value_set = Some(Rc::new(f));
        self
    }
    pub fn on_value_change(mut self, f: impl Fn(&Item<T>, bool) + 'static) -> Self {
        self.on_value_change = Some(Rc::new(f));
        self
    }
}

impl<T: PartialEq> SliderModelBuilder<T> {
    pub fn build(self) -> Result<SliderModel<T>> {
        self.validate()
            .inspect(|m| {
                log::debug!(
                    "slider model: {} values, {} colors, current {}",
                    m.values.len(),
                    m.colors.len(),
                    m.current
                )
            })
            .inspect_err(|e| log::warn!("rejected slider model: {e}"))
    }

    fn validate(self) -> Result<SliderModel<T>> {
        if self.values.is_empty() {
            return Err(SliderError::EmptyValues);
        }
        if self.colors.is_empty() {
            return Err(SliderError::EmptyColors);
        }
        if !self.values.iter().any(|it| it.selectable) {
            return Err(SliderError::NoSelectableItem(self.values.len()));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(SliderError::InvalidCornerRadius(self.corner_radius));
        }

        let current = match self.current {
            None => last_selectable(&self.values),
            Some(Current::Index(i)) if i < self.values.len() => i,
            Some(Current::Index(i)) => {
                return Err(SliderError::IndexOutOfRange {
                    index: i,
                    len: self.values.len(),
                });
            }
            Some(Current::Item(item)) => self
                .values
                .iter()
                .position(|it| *it == item)
                .ok_or(SliderError::CurrentItemNotFound)?,
        };

        Ok(SliderModel {
            colors: self.colors,
            values: self.values,
            current,
            corner_radius: self.corner_radius,
            enabled: self.enabled,
            display_mode: self.display_mode,
            color_mode: self.color_mode,
            orientation: self.orientation,
            reverse: self.reverse,
            hard_steps: self.hard_steps,
            ignore_input_while_user_interaction: self.ignore_input_while_user_interaction,
            on_value_set: self.on_value_set,
            on_value_change: self.on_value_change,
        })
    }
}
