#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_time::{Duration, Instant};

    fn items(labels: &[&str]) -> Vec<Item<String>> {
        labels
            .iter()
            .map(|l| Item::new(l.to_string(), Display::text(*l)))
            .collect()
    }

    fn red() -> Color {
        Color::from_hex("#FF0000")
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));
    }

    #[test]
    fn test_color_from_hex_rejects_non_ascii() {
        // Six bytes, but the slice boundaries fall inside the euro sign.
        assert_eq!(Color::from_hex("a€bc"), Color(0, 0, 0, 255));
        assert_eq!(Color::from_hex("#ééé"), Color(0, 0, 0, 255));
        assert_eq!(Color::from_hex("#12"), Color(0, 0, 0, 255));
    }

    #[test]
    fn test_color_mul_alpha() {
        let c = Color(200, 100, 50, 255);
        assert_eq!(c.mul_alpha(0.0).3, 0);
        assert_eq!(c.mul_alpha(0.5).3, 128);
        assert_eq!(c.mul_alpha(2.0).3, 255);
    }

    #[test]
    fn test_orientation_rect() {
        let v = Orientation::Vertical.rect(10.0, 2.0, 30.0, 4.0);
        assert_eq!(
            v,
            Rect {
                x: 2.0,
                y: 10.0,
                w: 4.0,
                h: 30.0
            }
        );
        let h = Orientation::Horizontal.rect(10.0, 2.0, 30.0, 4.0);
        assert_eq!(
            h,
            Rect {
                x: 10.0,
                y: 2.0,
                w: 30.0,
                h: 4.0
            }
        );
        assert_eq!(Orientation::Horizontal.along(Vec2 { x: 3.0, y: 7.0 }), 3.0);
    }

    #[test]
    fn test_model_rejects_empty_values() {
        let err = SliderModel::<String>::builder(vec![red()], vec![])
            .build()
            .unwrap_err();
        assert_eq!(err, SliderError::EmptyValues);
    }

    #[test]
    fn test_model_rejects_empty_colors() {
        let err = SliderModel::builder(vec![], items(&["a"]))
            .build()
            .unwrap_err();
        assert_eq!(err, SliderError::EmptyColors);
    }

    #[test]
    fn test_model_rejects_all_unselectable() {
        let values = vec![
            Item::unselectable(1, Display::text("1")),
            Item::unselectable(2, Display::text("2")),
        ];
        let err = SliderModel::builder(vec![red()], values)
            .build()
            .unwrap_err();
        assert_eq!(err, SliderError::NoSelectableItem(2));
    }

    #[test]
    fn test_model_rejects_bad_radius_and_current() {
        let err = SliderModel::builder(vec![red()], items(&["a"]))
            .corner_radius(-1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, SliderError::InvalidCornerRadius(-1.0));

        let err = SliderModel::builder(vec![red()], items(&["a"]))
            .current_index(3)
            .build()
            .unwrap_err();
        assert_eq!(err, SliderError::IndexOutOfRange { index: 3, len: 1 });

        let err = SliderModel::builder(vec![red()], items(&["a"]))
            .current_item(Item::new("zz".to_string(), Display::text("zz")))
            .build()
            .unwrap_err();
        assert_eq!(err, SliderError::CurrentItemNotFound);
    }

    #[test]
    fn test_model_defaults_to_last_selectable() {
        let mut values = items(&["a", "b", "c"]);
        values[2].selectable = false;
        let model = SliderModel::builder(vec![red()], values).build().unwrap();
        assert_eq!(model.current_index(), 1);
        assert!(model.hard_steps);
        assert!(model.is_enabled());
        assert_eq!(model.corner_radius(), DEFAULT_CORNER_RADIUS);
        assert_eq!(model.display_mode, DisplayMode::Center);
        assert_eq!(model.color_mode, ColorMode::GradientContinuous);
    }

    #[test]
    fn test_model_current_item_by_equality() {
        let values = items(&["a", "b", "c"]);
        let b = values[1].clone();
        let model = SliderModel::builder(vec![red()], values)
            .current_item(b.clone())
            .build()
            .unwrap();
        assert_eq!(model.current_item(), &b);
        assert_eq!(model.position_of(&b), Some(1));
    }

    #[test]
    fn test_model_selectable_neighbours() {
        let mut values = items(&["a", "b", "c", "d"]);
        values[1].selectable = false;
        let model = SliderModel::builder(vec![red()], values).build().unwrap();
        assert_eq!(model.next_selectable(0), Some(2));
        assert_eq!(model.next_selectable(3), None);
        assert_eq!(model.previous_selectable(2), Some(0));
        assert_eq!(model.previous_selectable(0), None);
        assert_eq!(model.first_selectable(), 0);
        assert_eq!(model.last_selectable(), 3);
    }

    #[test]
    fn test_model_select_index() {
        let mut model = SliderModel::builder(vec![red()], items(&["a", "b"]))
            .build()
            .unwrap();
        assert_eq!(model.select_index(0), Ok(true));
        assert_eq!(model.select_index(0), Ok(false));
        assert!(model.select_index(2).is_err());
        assert_eq!(model.current_index(), 0);
    }

    #[test]
    fn test_model_callbacks() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let model = SliderModel::builder(vec![red()], items(&["a", "b"]))
            .on_value_set({
                let seen = seen.clone();
                move |it, from_user| seen.borrow_mut().push((it.value.clone(), from_user))
            })
            .build()
            .unwrap();
        model.fire_value_set(true);
        model.fire_value_change(true);
        assert_eq!(*seen.borrow(), vec![("b".to_string(), true)]);
    }

    #[test]
    fn test_display_mode_slots() {
        assert!(DisplayMode::BOTH.shows_top_left());
        assert!(DisplayMode::BOTH.shows_bottom_right());
        assert!(!DisplayMode::LEFT.shows_bottom_right());
        assert!(DisplayMode::CenterSpecial.shows_center());
        assert!(!DisplayMode::NONE.shows_center());
    }

    #[test]
    fn test_animation_deterministic() {
        let t0 = Instant::now();
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0, t0);
        assert!(a.update(t0 + Duration::from_millis(250)));
        assert!((*a.get() - 2.5).abs() < 0.01);

        let cont = a.update(t0 + Duration::from_millis(1000));
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_test_clock_advances() {
        let t0 = Instant::now();
        let clock = TestClock::new(t0);
        clock.advance(Duration::from_millis(40));
        assert_eq!(clock.now(), t0 + Duration::from_millis(40));
    }

    #[test]
    fn test_scene_display() {
        let mut scene = Scene::default();
        scene.push(SceneNode::Rect {
            rect: Rect {
                x: 0.0,
                y: 0.0,
                w: 10.0,
                h: 20.0,
            },
            brush: Brush::Solid(Color(1, 2, 3, 255)),
            radii: CornerRadii::top(4.0),
        });
        scene.push(SceneNode::Text {
            rect: Rect::default(),
            text: "hi".into(),
            color: Color::WHITE,
            size: 14.0,
        });
        assert_eq!(
            scene.to_string(),
            "rect [0 0 10x20] solid #010203FF radii 4 4 0 0\ntext [0 0 0x0] \"hi\" #FFFFFFFF\n"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SliderError::IndexOutOfRange { index: 5, len: 2 }.to_string(),
            "index 5 out of range for 2 values"
        );
    }
}
