use crate::*;

use carousel::{
    CarouselOptions, IndexWindow, SchedulerPhase, SlideStyle, Surface, TimingFunction, VisualState,
};
use std::vec::Vec;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

/// Ticks at a 16ms frame rate until the controller reports idle. Returns the final clock.
fn run_until_idle(c: &mut Controller, mut now_ms: u64) -> u64 {
    for _ in 0..10_000 {
        if !c.tick(now_ms) {
            return now_ms;
        }
        now_ms += 16;
    }
    panic!("controller never settled");
}

#[test]
fn bezier_endpoints_are_exact() {
    for f in [
        TimingFunction::SmoothFade,
        TimingFunction::SmoothSlideIn,
        TimingFunction::AcceleratedSlide,
        TimingFunction::EaseOut,
        TimingFunction::EaseIn,
        TimingFunction::EaseInOut,
    ] {
        let curve = CubicBezier::from(f);
        assert_eq!(curve.sample(0.0), 0.0, "{f}");
        assert_eq!(curve.sample(1.0), 1.0, "{f}");
        assert_eq!(curve.sample(-3.0), 0.0);
        assert_eq!(curve.sample(7.0), 1.0);
    }
}

#[test]
fn bezier_shapes_match_their_names() {
    let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
    for i in 1..10 {
        let x = i as f32 / 10.0;
        assert!(close(linear.sample(x), x), "x={x}");
    }

    assert!(CubicBezier::from(TimingFunction::EaseOut).sample(0.5) > 0.6);
    assert!(CubicBezier::from(TimingFunction::EaseIn).sample(0.5) < 0.4);

    let in_out = Easing::from(TimingFunction::EaseInOut);
    assert!(close(in_out.sample(0.5), 0.5));
    let mut prev = 0.0f32;
    for i in 0..=100 {
        let y = in_out.sample(i as f32 / 100.0);
        assert!(y + 1e-6 >= prev, "not monotonic at {i}");
        prev = y;
    }
}

#[test]
fn bezier_clamps_x_control_points() {
    let c = CubicBezier::new(-1.0, 0.2, 3.0, 0.8);
    assert_eq!(c.x1, 0.0);
    assert_eq!(c.x2, 1.0);
    assert_eq!(c.y1, 0.2);
}

#[test]
fn builtin_easings() {
    assert_eq!(Easing::Linear.sample(0.25), 0.25);
    assert_eq!(Easing::SmoothStep.sample(0.5), 0.5);
    assert_eq!(Easing::EaseInOutCubic.sample(0.0), 0.0);
    assert_eq!(Easing::EaseInOutCubic.sample(1.0), 1.0);
    assert_eq!(Easing::Linear.sample(2.0), 1.0);
}

#[test]
fn style_tween_eases_geometry_and_snaps_stack_order() {
    let to = SlideStyle {
        offset_x: -100.0,
        offset_z: -50.0,
        brightness: 0.5,
        stack_order: Some(3),
    };
    let mut t = StyleTween::new(SlideStyle::NEUTRAL, to, 0, 100, Easing::Linear);

    let mid = t.sample(50);
    assert!(close(mid.offset_x, -50.0));
    assert!(close(mid.offset_z, -25.0));
    assert!(close(mid.brightness, 0.75));
    assert_eq!(mid.stack_order, Some(3));
    assert!(!t.is_done(99));
    assert!(t.is_done(100));
    assert_eq!(t.sample(500), to);

    t.retarget(50, SlideStyle::NEUTRAL, 100);
    assert!(close(t.from.offset_x, -50.0));
    assert_eq!(t.start_ms, 50);
    assert_eq!(t.sample(150), SlideStyle::NEUTRAL);
}

#[test]
fn zero_duration_tween_completes_immediately() {
    let t = StyleTween::new(SlideStyle::NEUTRAL, SlideStyle::NEUTRAL, 10, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert!(t.is_done(11));
}

#[test]
fn controller_mounts_window_onto_board() {
    let c = Controller::new(100, CarouselOptions::new().with_initial_active_index(50)).unwrap();
    let board = c.board();

    assert_eq!(board.slide_count(), 100);
    assert_eq!(board.attached().collect::<Vec<_>>(), (30..=70).collect::<Vec<_>>());
    assert_eq!(board.state(50), VisualState::Active);
    assert_eq!(board.state(10), VisualState::Detached);
    assert_eq!(board.style_at(10, 0), None);

    let container = board.container().unwrap();
    assert_eq!(container.perspective, 1000);
    assert_eq!(container.transition_duration_ms, 200);
}

#[test]
fn controller_rejects_empty_sequence() {
    assert_eq!(
        Controller::new(0, CarouselOptions::default()).unwrap_err(),
        carousel::CarouselError::EmptySequence
    );
}

#[test]
fn board_eases_flank_slide_during_step() {
    let mut c = Controller::new(20, CarouselOptions::new().with_initial_active_index(10)).unwrap();
    c.go_to_index(11, 0);

    for now_ms in (0..=100).step_by(10) {
        c.tick(now_ms);
    }
    let mid = c.board().style_at(10, 100).unwrap();

    let now_ms = run_until_idle(&mut c, 100);
    let target = c.carousel().slide(10).unwrap().style;
    assert!(target.offset_x < 0.0);
    assert!(mid.offset_x < 0.0, "{mid:?}");
    assert!(mid.offset_x > target.offset_x, "{mid:?} vs {target:?}");

    assert_eq!(c.active_index(), 11);
    assert_eq!(c.board().style_at(10, now_ms), Some(target));
    assert_eq!(c.board().style_at(11, now_ms), Some(SlideStyle::NEUTRAL));
    assert_eq!(c.board().state(11), VisualState::Active);
    assert_eq!(c.board().state(10), VisualState::Visible);
    assert!(!c.is_animating(now_ms));
}

#[test]
fn zero_duration_snaps_styles() {
    let options = CarouselOptions::new()
        .with_initial_active_index(10)
        .with_transition_duration_ms(0);
    let mut c = Controller::new(20, options).unwrap();
    assert!(c.board().is_settled(0));

    c.go_to_index(11, 0);
    let target = c.carousel().slide(10).unwrap().style;
    assert_eq!(c.board().style_at(10, 0), Some(target));
}

#[test]
fn board_strip_follows_rebalanced_window() {
    let options = CarouselOptions::new()
        .with_initial_active_index(50)
        .with_visible_count(5);
    let mut c = Controller::new(100, options).unwrap();
    let mut now_ms = run_until_idle(&mut c, 0);

    for _ in 0..18 {
        c.handle_input(carousel::CarouselInput::StepRight, now_ms);
        now_ms = run_until_idle(&mut c, now_ms);
    }

    assert_eq!(c.active_index(), 68);
    let rendered = c.carousel().rendered_window();
    assert_eq!(rendered, IndexWindow::new(42, 82));
    assert_eq!(
        c.board().attached().collect::<Vec<_>>(),
        (rendered.head..=rendered.tail).collect::<Vec<_>>()
    );

    let mut seen = Vec::new();
    c.for_each_slide(now_ms, |s| {
        assert_eq!(s.state, c.board().state(s.index));
        seen.push(s.index);
    });
    assert_eq!(seen.len(), c.board().attached_len());
    assert!(seen.windows(2).all(|w| w[0] + 1 == w[1]));
}

#[test]
fn spin_through_controller_reaches_target() {
    let mut c = Controller::new(20, CarouselOptions::new().with_initial_active_index(10)).unwrap();
    c.go_to_index(15, 0);
    assert_eq!(c.carousel().phase(), SchedulerPhase::MultiStep);

    assert!(!c.on_slide_click(3, 5));
    let now_ms = run_until_idle(&mut c, 5);

    assert_eq!(c.active_index(), 15);
    assert_eq!(c.carousel().phase(), SchedulerPhase::Idle);
    assert!(c.on_slide_click(14, now_ms));
}

#[test]
fn perspective_change_waits_for_idle() {
    let mut c = Controller::new(20, CarouselOptions::new().with_initial_active_index(10)).unwrap();
    c.go_to_index(11, 0);
    assert!(c.set_perspective(500, 1).is_err());

    c.stop(2);
    assert!(c.set_perspective(500, 3).is_ok());
    assert_eq!(c.board().container().unwrap().perspective, 500);
}
