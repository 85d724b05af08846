//! Drives a volume slider through a scripted gesture and logs every frame.
//!
//! Run with `RUST_LOG=debug` to see the widget's own logging, or `trace` for
//! every controller transition.

use std::rc::Rc;

use inkslider_core::*;
use inkslider_ui::{InkSlider, SliderTarget, TrackMetrics};

struct LogBackend {
    frames: usize,
}

impl RenderBackend for LogBackend {
    fn frame(&mut self, scene: &Scene) {
        self.frames += 1;
        log::info!("frame {} ({} nodes)\n{scene}", self.frames, scene.nodes.len());
    }
}

/// Host whose repeat timer is fired by the script.
#[derive(Default)]
struct ScriptHost {
    due: Option<Duration>,
}

impl SliderHost for ScriptHost {
    fn claim_gesture(&mut self) {
        log::info!("gesture claimed");
    }
    fn schedule_repeat(&mut self, after: Duration) {
        self.due = Some(after);
    }
    fn cancel_repeat(&mut self) {
        self.due = None;
    }
}

fn touch(kind: PointerEventKind, y: f32) -> PointerEvent {
    PointerEvent::touch(kind, Vec2 { x: 30.0, y })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let levels = ["mute", "low", "mid", "high", "max"];
    let values = levels
        .iter()
        .enumerate()
        .map(|(i, name)| Item::new(i as u8, Display::text(*name).with_arrow_tint(Color::WHITE)))
        .collect();
    let colors = ["#4CAF50", "#CDDC39", "#FFC107", "#FF5722"]
        .into_iter()
        .map(Color::from_hex)
        .collect();

    let model = SliderModel::builder(colors, values)
        .display_mode(DisplayMode::BothSides)
        .on_value_change(|item, from_user| {
            log::info!("changing to {:?} (user: {from_user})", item.display.string)
        })
        .on_value_set(|item, from_user| {
            log::info!("set to {:?} (user: {from_user})", item.display.string)
        })
        .build()?;

    let clock = Rc::new(TestClock::default());
    let mut slider = InkSlider::with_clock(model, clock.clone());
    let mut backend = LogBackend { frames: 0 };
    let mut host = ScriptHost::default();

    let origin = Vec2 { x: 40.0, y: 60.0 };
    slider.on_layout(TrackMetrics {
        origin,
        top_left: Size {
            width: 40.0,
            height: 24.0,
        },
        bottom_right: Size {
            width: 40.0,
            height: 24.0,
        },
        center: Size {
            width: 36.0,
            height: 24.0,
        },
    });
    slider.in_animation(clock.now());
    while slider.tick(clock.now()) {
        clock.advance(Duration::from_millis(125));
    }
    slider.render(&mut backend);

    // Drag from the top of the bar to roughly the middle, then let go.
    let primary = PointerButton::Primary;
    slider.on_pointer(SliderTarget::Track, &touch(PointerEventKind::Down(primary), 65.0), &mut host);
    for y in [90.0, 120.0, 150.0] {
        slider.on_pointer(SliderTarget::Track, &touch(PointerEventKind::Move, y), &mut host);
    }
    slider.on_pointer(SliderTarget::Track, &touch(PointerEventKind::Up(primary), 150.0), &mut host);
    slider.render(&mut backend);

    // Hold minus for a second.
    slider.on_pointer(SliderTarget::Minus, &touch(PointerEventKind::Down(primary), 0.0), &mut host);
    let mut held = Duration::ZERO;
    while let Some(after) = host.due.take() {
        if held + after > Duration::from_secs(1) {
            break;
        }
        held += after;
        clock.advance(after);
        slider.on_repeat_timer(clock.now(), &mut host);
    }
    slider.on_pointer(SliderTarget::Minus, &touch(PointerEventKind::Up(primary), 0.0), &mut host);
    slider.render(&mut backend);

    slider.set_current_item_by_index(levels.len() - 1, true)?;
    slider.render(&mut backend);

    log::info!(
        "done after {} frames, current value {}",
        backend.frames,
        slider.current_item().value
    );
    Ok(())
}
