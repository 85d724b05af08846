//! The InkSlider widget.
//!
//! A vertical or horizontal bar of colored segments mapped onto a list of
//! values. Dragging along the bar selects the nearest selectable value, the
//! +/- buttons step through them (repeating while held), and floating
//! badges show the current value's text and icon next to or on top of the
//! bar.
//!
//! `InkSlider` is the shell: it owns the model and wires the pure pieces
//! together.
//!
//! - [`step`] maps a track coordinate to a value.
//! - [`controller`] turns input into state transitions and effects.
//! - [`positioner`] places badges once the host has measured them.
//! - [`segments`] and [`layout`] compute what gets drawn where.
//!
//! The host feeds pointer events, layout results and timer callbacks in, and
//! draws whatever `scene()` returns.
//!
//! ```no_run
//! use inkslider_core::*;
//! use inkslider_ui::{InkSlider, SliderTarget};
//!
//! let model = SliderModel::builder(
//!     vec![Color::from_hex("#2196F3"), Color::from_hex("#F44336")],
//!     vec![
//!         Item::new(0, Display::text("low")),
//!         Item::new(1, Display::text("high")),
//!     ],
//! )
//! .on_value_set(|item, from_user| println!("{} {from_user}", item.value))
//! .build()?;
//!
//! let mut slider = InkSlider::new(model);
//! let down = PointerEvent::touch(
//!     PointerEventKind::Down(PointerButton::Primary),
//!     Vec2 { x: 10.0, y: 20.0 },
//! );
//! slider.on_pointer(SliderTarget::Track, &down, &mut NoopHost);
//! # Ok::<(), SliderError>(())
//! ```

pub mod anim;
pub mod controller;
pub mod layout;
pub mod positioner;
pub mod segments;
pub mod step;

use std::rc::Rc;

use inkslider_core::*;

pub use anim::TrackFade;
pub use controller::{
    Effect, Effects, InteractionState, SliderEvent, StepButton, TransitionContext, transition,
};
pub use layout::{BadgeSlot, PxDimens, SliderDimens, SliderTheme, TrackMetrics};
pub use positioner::{DisplayPositioner, LayoutState, Placement};
pub use segments::{Segment, SegmentStyle};
pub use step::{StepGeometry, StepSelection, map_position};

/// Which part of the widget a pointer event was delivered to. Hit testing
/// is the host's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderTarget {
    Track,
    Plus,
    Minus,
}

pub struct InkSlider<T> {
    model: SliderModel<T>,
    state: InteractionState,
    positioner: DisplayPositioner,
    dimens: SliderDimens,
    density: Density,
    px: PxDimens,
    theme: SliderTheme,
    clock: Rc<dyn Clock>,
    fade: TrackFade,
    segments: Vec<Segment>,
    metrics: Option<TrackMetrics>,
    badges_visible: bool,
}

impl<T> InkSlider<T> {
    pub fn new(model: SliderModel<T>) -> Self {
        Self::with_clock(model, Rc::new(SystemClock))
    }

    /// Button events are timestamped with `clock`.
    pub fn with_clock(model: SliderModel<T>, clock: Rc<dyn Clock>) -> Self {
        let dimens = SliderDimens::default();
        let density = Density::default();
        let mut slider = Self {
            model,
            state: InteractionState::default(),
            positioner: DisplayPositioner::default(),
            dimens,
            density,
            px: dimens.resolve(density),
            theme: SliderTheme::default(),
            clock,
            fade: TrackFade::new(),
            segments: Vec::new(),
            metrics: None,
            badges_visible: false,
        };
        slider.populate();
        slider
    }

    pub fn model(&self) -> &SliderModel<T> {
        &self.model
    }

    /// Replaces the model and rebuilds everything. Any gesture in progress
    /// is dropped and a pending repeat timer is cancelled on `host`.
    pub fn set_model(&mut self, model: SliderModel<T>, host: &mut dyn SliderHost) {
        log::debug!("set_model");
        self.model = model;
        self.drop_interaction(host);
        self.populate();
    }

    pub fn current_item(&self) -> &Item<T> {
        self.model.current_item()
    }

    pub fn interaction(&self) -> InteractionState {
        self.state
    }

    pub fn dimens(&self) -> SliderDimens {
        self.dimens
    }

    pub fn set_dimens(&mut self, dimens: SliderDimens) {
        self.dimens = dimens;
        self.px = dimens.resolve(self.density);
        self.populate();
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn set_density(&mut self, density: Density) {
        self.density = density;
        self.px = self.dimens.resolve(density);
        self.populate();
    }

    pub fn theme(&self) -> SliderTheme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: SliderTheme) {
        self.theme = theme;
    }

    pub fn positioner(&self) -> &DisplayPositioner {
        &self.positioner
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Track length along the primary axis, in px.
    pub fn axis_length(&self) -> f32 {
        self.model.colors().len() as f32 * self.px.row_length
    }

    pub fn step_geometry(&self) -> StepGeometry {
        StepGeometry {
            axis_length: self.axis_length(),
            item_count: self.model.values().len(),
            reversed: self.axis_reversed(),
        }
    }

    /// Whether values run end-to-start along the axis. Horizontal tracks put
    /// the first value at the right edge unless `reverse` flips them back.
    pub fn axis_reversed(&self) -> bool {
        self.model.reverse ^ (self.model.orientation == Orientation::Horizontal)
    }

    /// Track bounds in parent coordinates.
    pub fn track_rect(&self) -> Rect {
        let origin = self.origin();
        let o = self.model.orientation;
        let across = match o {
            Orientation::Vertical => origin.x,
            Orientation::Horizontal => origin.y,
        };
        o.rect(
            o.along(origin),
            across,
            self.axis_length(),
            self.px.row_thickness,
        )
    }

    /// Natural size of the track, for the host's layout pass.
    pub fn track_size(&self) -> Size {
        let r = self.track_rect();
        Size {
            width: r.w,
            height: r.h,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.model.is_enabled()
    }

    /// Disabling removes the bar, hides the badges and drops any gesture in
    /// progress, cancelling a held button's timer on `host`. Enabling
    /// rebuilds the bar and moves the badges to the current value, once
    /// measured.
    pub fn set_enabled(&mut self, enabled: bool, host: &mut dyn SliderHost) {
        if enabled == self.model.is_enabled() {
            return;
        }
        log::debug!("set_enabled({enabled})");
        self.model.set_enabled(enabled);
        if enabled {
            self.rebuild_segments();
            self.force_update();
        } else {
            self.drop_interaction(host);
            self.segments.clear();
            self.clear_displays();
        }
        host.request_redraw();
    }

    /// Fades the bar in from transparent.
    pub fn in_animation(&mut self, now: Instant) {
        self.fade.restart(now);
    }

    /// Advances animations; returns true while a redraw is still needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.fade.update(now)
    }

    pub fn on_pointer(
        &mut self,
        target: SliderTarget,
        event: &PointerEvent,
        host: &mut dyn SliderHost,
    ) {
        if let PointerEventKind::Down(b) | PointerEventKind::Up(b) = event.event
            && b != PointerButton::Primary
        {
            return;
        }
        let phase = event.phase();
        let ev = match target {
            SliderTarget::Track => SliderEvent::Track {
                phase,
                position: self.track_position(event.position),
            },
            SliderTarget::Plus => SliderEvent::Button {
                button: StepButton::Plus,
                phase,
                now: self.clock.now(),
            },
            SliderTarget::Minus => SliderEvent::Button {
                button: StepButton::Minus,
                phase,
                now: self.clock.now(),
            },
        };
        self.dispatch(ev, host);
    }

    /// The timer requested through `SliderHost::schedule_repeat` fired.
    pub fn on_repeat_timer(&mut self, now: Instant, host: &mut dyn SliderHost) {
        self.dispatch(SliderEvent::RepeatTimer { now }, host);
    }

    /// Host layout result. Replays badge moves requested before the first
    /// measurement.
    pub fn on_layout(&mut self, metrics: TrackMetrics) {
        let first = self.metrics.is_none();
        self.metrics = Some(metrics);
        if self.model.is_enabled() {
            self.rebuild_segments();
        }
        let replayed = self
            .positioner
            .on_measured(metrics.positioner(self.model.orientation));
        if first {
            log::debug!("first layout at {:?}, replayed {replayed} badge moves", metrics.origin);
        }
    }

    /// Feeds one event through the controller and applies its effects.
    pub fn dispatch(&mut self, event: SliderEvent, host: &mut dyn SliderHost) {
        let ctx = TransitionContext {
            values: self.model.values(),
            current: self.model.current_index(),
            geometry: self.step_geometry(),
            hard_steps: self.model.hard_steps,
            enabled: self.model.is_enabled(),
        };
        let (state, effects) = transition(self.state, event, &ctx);
        self.state = state;
        self.apply(&effects, host);
    }

    fn apply(&mut self, effects: &[Effect], host: &mut dyn SliderHost) {
        for effect in effects {
            match *effect {
                Effect::ClaimGesture => host.claim_gesture(),
                Effect::Select(index) => {
                    if let Err(e) = self.model.select_index(index) {
                        log::warn!("dropping selection: {e}");
                    }
                }
                Effect::ValueChanged { from_user } => self.model.fire_value_change(from_user),
                Effect::ValueSet { from_user } => self.model.fire_value_set(from_user),
                Effect::MoveBadges(anchor) => self.move_badges(anchor),
                Effect::ScheduleRepeat(after) => host.schedule_repeat(after),
                Effect::CancelRepeat => host.cancel_repeat(),
            }
        }
        if !effects.is_empty() {
            host.request_redraw();
        }
    }

    /// Renderable scene: the bar, the +/- buttons, then the badges.
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::default();
        let alpha = self.fade.alpha();
        for seg in &self.segments {
            scene.push(SceneNode::Rect {
                rect: seg.rect,
                brush: seg.brush.mul_alpha(alpha),
                radii: seg.radii,
            });
        }
        self.push_buttons(&mut scene);
        self.push_badges(&mut scene);
        scene
    }

    pub fn render(&self, backend: &mut dyn RenderBackend) {
        backend.frame(&self.scene());
    }

    fn drop_interaction(&mut self, host: &mut dyn SliderHost) {
        if self.state.repeat.is_some() {
            host.cancel_repeat();
        }
        self.state = InteractionState::default();
    }

    fn origin(&self) -> Vec2 {
        self.metrics.map(|m| m.origin).unwrap_or_default()
    }

    fn track_position(&self, p: Vec2) -> f32 {
        let o = self.model.orientation;
        o.along(p) - o.along(self.origin())
    }

    fn populate(&mut self) {
        let geometry = self.step_geometry();
        log::debug!(
            "populate: {} values, {} colors, axis {}px, step {}px",
            self.model.values().len(),
            self.model.colors().len(),
            geometry.axis_length,
            geometry.step_size()
        );
        self.positioner.set_axis_length(geometry.axis_length);
        if self.model.is_enabled() {
            self.rebuild_segments();
        } else {
            self.segments.clear();
        }
        self.clear_displays();
    }

    fn rebuild_segments(&mut self) {
        let style = SegmentStyle {
            orientation: self.model.orientation,
            color_mode: self.model.color_mode,
            reversed: self.axis_reversed(),
            flip_gradient: self.model.reverse,
            corner_radius: self.model.corner_radius(),
            row_length: self.px.row_length,
            thickness: self.px.row_thickness,
        };
        self.segments = segments::build_segments(self.model.colors(), &style, self.origin());
    }

    fn clear_displays(&mut self) {
        self.positioner.reset();
        self.badges_visible = false;
    }

    /// Centers the badges on the current value's anchor.
    fn force_update(&mut self) {
        let anchor = self.step_geometry().anchor(self.model.current_index());
        self.move_badges(anchor);
    }

    fn move_badges(&mut self, anchor: f32) {
        if !self.model.is_enabled() {
            return;
        }
        self.badges_visible = true;
        if self.positioner.request(anchor) == Placement::Skipped {
            log::trace!("badge anchor {anchor} outside the track");
        }
    }

    fn push_buttons(&self, scene: &mut Scene) {
        let o = self.model.orientation;
        let mode = self.model.display_mode;
        let extent = layout::button_container_extent(
            o,
            &self.px,
            mode.shows_top_left(),
            mode.shows_bottom_right(),
        );
        let tint = self.current_item().display.arrow_tint_color;
        for (button, icon) in [
            (StepButton::Plus, self.theme.plus_icon),
            (StepButton::Minus, self.theme.minus_icon),
        ] {
            scene.push(SceneNode::Icon {
                rect: layout::button_rect(
                    button,
                    o,
                    self.origin(),
                    self.axis_length(),
                    &self.px,
                    extent,
                ),
                icon,
                tint,
            });
        }
    }

    fn push_badges(&self, scene: &mut Scene) {
        if !self.badges_visible || !self.model.is_enabled() {
            return;
        }
        let Some(metrics) = self.metrics else {
            return;
        };
        if !self.positioner.is_measured() {
            return;
        }

        let o = self.model.orientation;
        let offsets = self.positioner.offsets();
        let display = &self.current_item().display;
        let mode = self.model.display_mode;
        let rect = |slot, offset, size| {
            layout::badge_rect(slot, o, offset, metrics.origin, self.px.row_thickness, size)
        };

        if mode.shows_top_left() {
            let r = rect(BadgeSlot::TopLeft, offsets.top_left, metrics.top_left);
            self.push_arrow(scene, r, display);
            self.push_content(scene, r, display, None);
        }
        if mode.shows_bottom_right() {
            let r = rect(BadgeSlot::BottomRight, offsets.bottom_right, metrics.bottom_right);
            self.push_arrow(scene, r, display);
            self.push_content(scene, r, display, None);
        }
        if mode.shows_center() {
            let r = rect(BadgeSlot::Center, offsets.center, metrics.center);
            if mode == DisplayMode::CenterSpecial {
                scene.push(SceneNode::Rect {
                    rect: r,
                    brush: Brush::Solid(display.text_color.unwrap_or(self.theme.badge_text)),
                    radii: CornerRadii::all(r.w.min(r.h) / 2.0),
                });
                self.push_content(scene, r, display, Some(self.theme.special_text));
            } else {
                self.push_content(scene, r, display, None);
            }
        }
    }

    fn push_arrow(&self, scene: &mut Scene, rect: Rect, display: &Display) {
        scene.push(SceneNode::Icon {
            rect,
            icon: self.theme.arrow_icon,
            tint: display.arrow_tint_color,
        });
    }

    fn push_content(
        &self,
        scene: &mut Scene,
        rect: Rect,
        display: &Display,
        text_color: Option<Color>,
    ) {
        if let Some(icon) = display.icon {
            scene.push(SceneNode::Icon {
                rect,
                icon,
                tint: display.icon_tint_color,
            });
        }
        if let Some(text) = &display.string {
            scene.push(SceneNode::Text {
                rect,
                text: text.clone(),
                color: text_color
                    .or(display.text_color)
                    .unwrap_or(self.theme.badge_text),
                size: self.px.badge_text_size,
            });
        }
    }
}

impl<T: PartialEq> InkSlider<T> {
    /// Selects `item` without touch input. Returns `Ok(false)` when nothing
    /// changed: the item shows the same `Display` as the current one, or the
    /// user is interacting and the model ignores programmatic input then.
    pub fn set_current_item(&mut self, item: &Item<T>, fire_listener: bool) -> Result<bool> {
        let Some(index) = self.model.position_of(item) else {
            log::warn!("set_current_item: item not in values");
            return Err(SliderError::UnknownItem);
        };
        self.set_current_item_by_index(index, fire_listener)
    }
}

impl<T> InkSlider<T> {
    pub fn set_current_item_by_index(&mut self, index: usize, fire_listener: bool) -> Result<bool> {
        let len = self.model.values().len();
        let Some(item) = self.model.values().get(index) else {
            log::warn!("set_current_item_by_index: {index} out of range ({len} values)");
            return Err(SliderError::IndexOutOfRange { index, len });
        };
        if self.model.ignore_input_while_user_interaction && self.state.is_user_interacting() {
            log::warn!("set_current_item_by_index({index}) ignored during user interaction");
            return Ok(false);
        }
        if item.display == self.current_item().display {
            return Ok(false);
        }

        self.model.select_index(index)?;
        self.force_update();
        if fire_listener {
            self.model.fire_value_set(false);
        }
        Ok(true)
    }
}
