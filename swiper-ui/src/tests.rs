use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::{
    Axis, DefaultAction, Paginator, SwiperArgs, SwiperError, TransitionOrigin,
    px::{Px, PxPosition, PxSize},
    surface::{QUIET_DURATION, RecordingSurface, SurfaceCall, Transition},
};

const VIEWPORT: PxSize = PxSize::new(Px(375), Px(600));

type Swipes = Rc<RefCell<Vec<(usize, usize)>>>;

fn pager(panels: usize, args: SwiperArgs) -> (Paginator<RecordingSurface>, Swipes) {
    let mut pager = Paginator::new(args, RecordingSurface::new(panels, VIEWPORT));
    let swipes = Swipes::default();
    let sink = Rc::clone(&swipes);
    pager
        .on("swiped", move |previous, current| {
            sink.borrow_mut().push((previous, current))
        })
        .expect("first registration");
    (pager, swipes)
}

fn at(x: i32, y: i32) -> PxPosition {
    PxPosition::new(Px(x), Px(y))
}

fn swipe(pager: &mut Paginator<RecordingSurface>, from: PxPosition, to: PxPosition) {
    pager.touch_start(from);
    pager.touch_end(to);
}

fn settle(pager: &mut Paginator<RecordingSurface>) -> bool {
    pager.transition_complete(TransitionOrigin::Container)
}

#[test]
fn construction_clamps_initial_slide_and_marks_one_panel() {
    for panels in 1..=5 {
        for initial in 0..8 {
            let (pager, _) = pager(panels, SwiperArgs::default().initial_slide(initial));
            let expected = initial.min(panels - 1);

            assert_eq!(pager.current(), expected);
            assert_eq!(pager.surface().active(), Some(expected));
            assert_eq!(pager.surface().last_transform(), Some(-600.0 * expected as f32));
            assert_eq!(
                pager.surface().last_transition(),
                Some(Transition::Animated(QUIET_DURATION))
            );
        }
    }
}

#[test]
fn construction_lays_out_content_along_the_axis() {
    let (pager, _) = pager(3, SwiperArgs::default().direction(Axis::Horizontal));
    assert_eq!(
        pager.surface().calls().first(),
        Some(&SurfaceCall::Layout {
            container: PxSize::new(Px(1125), Px(600)),
            panel: VIEWPORT,
        })
    );
}

#[test]
fn construction_does_not_emit_swiped() {
    let (mut pager, swipes) = pager(4, SwiperArgs::default().initial_slide(2));
    assert!(!settle(&mut pager));
    assert!(swipes.borrow().is_empty());
}

#[test]
fn empty_pager_ignores_navigation() {
    let (mut pager, swipes) = pager(0, SwiperArgs::default().initial_slide(3));
    assert!(pager.is_empty());
    assert_eq!(pager.current(), 0);
    assert_eq!(pager.surface().active(), None);

    let before = pager.surface().calls().len();
    pager.go(0, false).next().prev();
    pager.touch_start(at(0, 300));
    assert_eq!(pager.touch_move(at(0, 200)), DefaultAction::Allow);
    pager.touch_end(at(0, 100));
    assert!(!settle(&mut pager));

    assert_eq!(pager.surface().calls().len(), before);
    assert_eq!(pager.current(), 0);
    assert!(swipes.borrow().is_empty());
}

#[test]
fn next_stops_at_the_last_panel() {
    let (mut pager, _) = pager(4, SwiperArgs::default());
    let mut last = pager.current();
    for _ in 0..10 {
        pager.next();
        assert!(pager.current() >= last);
        assert!(pager.current() <= 3);
        last = pager.current();
    }
    assert_eq!(pager.current(), 3);
}

#[test]
fn next_settles_with_previous_and_current() {
    let (mut pager, swipes) = pager(3, SwiperArgs::default());
    pager.next();
    assert_eq!(pager.surface().active(), Some(0));
    assert_eq!(
        pager.surface().last_transition(),
        Some(Transition::Animated(Duration::from_millis(300)))
    );

    assert!(settle(&mut pager));
    assert_eq!(pager.surface().active(), Some(1));
    assert_eq!(*swipes.borrow(), vec![(0, 1)]);
}

#[test]
fn prev_mirrors_next() {
    let (mut pager, swipes) = pager(3, SwiperArgs::default().initial_slide(1));
    pager.prev();
    assert_eq!(pager.current(), 0);
    pager.prev();
    assert_eq!(pager.current(), 0);
    settle(&mut pager);
    assert_eq!(*swipes.borrow(), vec![(1, 0)]);
}

#[test]
fn go_then_settle_emits_exactly_once() {
    for index in 0..4 {
        let (mut pager, swipes) = pager(4, SwiperArgs::default().initial_slide(1));
        pager.go(index, false);
        settle(&mut pager);
        settle(&mut pager);

        if index == 1 {
            assert!(swipes.borrow().is_empty());
        } else {
            assert_eq!(*swipes.borrow(), vec![(1, index)]);
            assert_eq!(pager.surface().active(), Some(index));
        }
        assert_eq!(pager.pending_jump(), None);
    }
}

#[test]
fn go_reports_the_panel_it_left_as_previous() {
    let (mut pager, swipes) = pager(5, SwiperArgs::default());
    pager.go(3, false);
    assert_eq!(pager.previous(), 0);
    assert_eq!(pager.pending_jump(), Some(3));
    settle(&mut pager);
    assert_eq!(*swipes.borrow(), vec![(0, 3)]);
}

#[test]
fn go_to_current_is_a_noop() {
    let (mut pager, swipes) = pager(4, SwiperArgs::default().initial_slide(2));
    let calls = pager.surface().calls().to_vec();
    pager.go(2, false);
    assert_eq!(pager.surface().calls(), calls.as_slice());
    assert_eq!(pager.pending_jump(), None);
    assert!(!settle(&mut pager));
    assert!(swipes.borrow().is_empty());
}

#[test]
fn go_out_of_range_is_a_noop() {
    let (mut pager, _) = pager(4, SwiperArgs::default());
    pager.go(4, false).go(usize::MAX, true);
    assert_eq!(pager.current(), 0);
    assert_eq!(pager.pending_jump(), None);
}

#[test]
fn quiet_go_uses_the_quiet_transition() {
    let (mut pager, swipes) = pager(4, SwiperArgs::default());
    pager.go(2, true);
    assert_eq!(
        pager.surface().last_transition(),
        Some(Transition::Animated(QUIET_DURATION))
    );
    assert_eq!(pager.surface().last_transform(), Some(-1200.0));
    settle(&mut pager);
    assert_eq!(*swipes.borrow(), vec![(0, 2)]);
}

#[test]
fn swipe_up_past_threshold_moves_forward() {
    let (mut pager, swipes) = pager(3, SwiperArgs::default().threshold(50.0));
    swipe(&mut pager, at(100, 300), at(100, 240));
    assert_eq!(pager.current(), 1);
    settle(&mut pager);

    swipe(&mut pager, at(100, 300), at(100, 240));
    settle(&mut pager);
    swipe(&mut pager, at(100, 300), at(100, 240));
    assert_eq!(pager.current(), 2);
    assert!(!settle(&mut pager));
    assert_eq!(*swipes.borrow(), vec![(0, 1), (1, 2)]);
}

#[test]
fn swipe_down_past_threshold_moves_backward() {
    let (mut pager, swipes) = pager(3, SwiperArgs::default().initial_slide(1));
    swipe(&mut pager, at(100, 200), at(100, 280));
    assert_eq!(pager.current(), 0);
    settle(&mut pager);

    swipe(&mut pager, at(100, 200), at(100, 280));
    assert_eq!(pager.current(), 0);
    assert!(!settle(&mut pager));
    assert_eq!(*swipes.borrow(), vec![(1, 0)]);
}

#[test]
fn swipe_across_the_whole_coordinate_range_is_absorbed() {
    let (mut pager, swipes) = pager(3, SwiperArgs::default().initial_slide(1));
    pager.touch_start(at(0, i32::MIN));
    assert_eq!(pager.touch_move(at(0, 0)), DefaultAction::Prevent);
    pager.touch_move(at(0, i32::MAX));
    pager.touch_end(at(0, i32::MAX));
    assert_eq!(pager.current(), 0);
    assert_eq!(pager.surface().last_transform(), Some(0.0));
    assert!(settle(&mut pager));

    pager.touch_start(at(0, i32::MAX));
    pager.touch_end(at(0, i32::MIN));
    assert_eq!(pager.current(), 1);
    assert!(settle(&mut pager));
    assert_eq!(*swipes.borrow(), vec![(1, 0), (0, 1)]);
}

#[test]
fn short_swipe_snaps_back_with_animation() {
    let (mut pager, swipes) = pager(3, SwiperArgs::default().initial_slide(1));
    pager.touch_start(at(100, 300));
    pager.touch_move(at(100, 290));
    pager.touch_move(at(100, 270));
    pager.surface_mut().take_calls();
    pager.touch_end(at(100, 270));

    assert_eq!(pager.current(), 1);
    assert_eq!(
        pager.surface().calls(),
        &[
            SurfaceCall::Transition(Transition::Animated(Duration::from_millis(300))),
            SurfaceCall::Transform(Axis::Vertical, -600.0),
        ]
    );
    assert!(!settle(&mut pager));
    assert!(swipes.borrow().is_empty());
}

#[test]
fn start_drops_the_transition_and_first_move_only_resolves() {
    let (mut pager, _) = pager(3, SwiperArgs::default());
    pager.surface_mut().take_calls();

    pager.touch_start(at(100, 300));
    assert_eq!(pager.touch_move(at(100, 290)), DefaultAction::Prevent);
    assert!(pager.session().is_paging());
    assert_eq!(
        pager.surface().calls(),
        &[SurfaceCall::Transition(Transition::None)]
    );

    assert_eq!(pager.touch_move(at(100, 240)), DefaultAction::Prevent);
    assert_eq!(pager.surface().last_transform(), Some(-60.0));
}

#[test]
fn dragging_before_the_first_panel_is_elastic() {
    let (mut pager, _) = pager(3, SwiperArgs::default());
    pager.touch_start(at(0, 100));
    pager.touch_move(at(0, 110));
    pager.touch_move(at(0, 220));
    let translate = pager.surface().last_transform().expect("drag transform");
    assert!((translate - 30.0).abs() < 0.01, "translate was {translate}");
}

#[test]
fn dragging_without_resistance_stops_hard() {
    let (mut pager, _) = pager(3, SwiperArgs::default().debounce(false).initial_slide(2));
    pager.touch_start(at(0, 300));
    pager.touch_move(at(0, 290));
    pager.touch_move(at(0, 100));
    assert_eq!(pager.surface().last_transform(), Some(-1200.0));
}

#[test]
fn horizontal_gestures_use_the_x_axis() {
    let args = SwiperArgs::default().direction(Axis::Horizontal);
    let (mut pager, swipes) = pager(3, args);
    pager.touch_start(at(300, 100));
    pager.touch_move(at(290, 100));
    pager.touch_move(at(250, 180));
    assert_eq!(
        pager.surface().calls().last(),
        Some(&SurfaceCall::Transform(Axis::Horizontal, -50.0))
    );
    pager.touch_end(at(200, 300));
    assert_eq!(pager.current(), 1);
    settle(&mut pager);
    assert_eq!(*swipes.borrow(), vec![(0, 1)]);
}

#[test]
fn cross_axis_drag_passes_through_to_scrolling() {
    let (mut pager, swipes) = pager(3, SwiperArgs::default().allow_scroll(true));
    pager.touch_start(at(100, 300));
    pager.surface_mut().take_calls();

    assert_eq!(pager.touch_move(at(160, 295)), DefaultAction::Allow);
    assert!(pager.session().is_scrolling());
    assert_eq!(pager.touch_move(at(160, 100)), DefaultAction::Allow);
    assert_eq!(pager.touch_move(at(300, 0)), DefaultAction::Allow);
    pager.touch_end(at(300, 0));

    assert!(pager.surface().calls().is_empty());
    assert_eq!(pager.current(), 0);
    assert!(!pager.session().is_active());
    assert!(!settle(&mut pager));
    assert!(swipes.borrow().is_empty());
}

#[test]
fn cross_axis_drag_pages_when_scrolling_is_not_allowed() {
    let (mut pager, _) = pager(3, SwiperArgs::default());
    pager.touch_start(at(100, 300));
    assert_eq!(pager.touch_move(at(160, 295)), DefaultAction::Prevent);
    assert!(pager.session().is_paging());
}

#[test]
fn moves_without_a_session_are_left_alone() {
    let (mut pager, _) = pager(3, SwiperArgs::default());
    let calls = pager.surface().calls().len();
    assert_eq!(pager.touch_move(at(0, 0)), DefaultAction::Allow);
    pager.touch_end(at(0, 500));
    assert_eq!(pager.surface().calls().len(), calls);
    assert_eq!(pager.current(), 0);
}

#[test]
fn descendant_transitions_are_ignored() {
    let (mut pager, swipes) = pager(3, SwiperArgs::default());
    pager.next();
    assert!(!pager.transition_complete(TransitionOrigin::Descendant));
    assert!(swipes.borrow().is_empty());
    assert!(pager.transition_complete(TransitionOrigin::Container));
    assert_eq!(*swipes.borrow(), vec![(0, 1)]);
}

#[test]
fn duplicate_completion_settles_once() {
    let (mut pager, swipes) = pager(3, SwiperArgs::default());
    pager.next();
    assert!(settle(&mut pager));
    assert!(!settle(&mut pager));
    assert_eq!(swipes.borrow().len(), 1);
}

#[test]
fn remeasure_clamps_and_relays_out() {
    let (mut pager, swipes) = pager(5, SwiperArgs::default().initial_slide(4));
    pager
        .surface_mut()
        .resize(2, PxSize::new(Px(320), Px(500)));
    pager.remeasure();

    assert_eq!(pager.current(), 1);
    assert_eq!(pager.geometry().panel_size, Px(500));
    assert_eq!(pager.surface().active(), Some(1));
    assert_eq!(pager.surface().last_transform(), Some(-500.0));
    assert!(!settle(&mut pager));
    assert!(swipes.borrow().is_empty());
}

#[test]
fn registering_twice_fails_with_duplicate_handler() {
    let (mut pager, _) = pager(3, SwiperArgs::default());
    let err = pager
        .on("swiped", |_, _| {})
        .expect_err("second registration");
    assert_eq!(
        err,
        SwiperError::DuplicateHandler {
            event: "swiped".to_string()
        }
    );
}

#[test]
fn registering_a_missing_handler_fails_with_invalid_handler() {
    let mut pager = Paginator::new(
        SwiperArgs::default(),
        RecordingSurface::new(3, VIEWPORT),
    );
    assert!(matches!(
        pager.bind("swiped", None),
        Err(SwiperError::InvalidHandler { .. })
    ));
    pager
        .on("swiped", |_, _| {})
        .expect("failed registration leaves the slot free");
}
