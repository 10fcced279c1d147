use poker_ranges::hands::{generate, HandSet};
use poker_ranges::selection::{
    DragMode, GestureEvent, GestureState, GridGeometry, HitTest, PointerAdapter, PointerInput,
    SelectionController,
};
use proptest::prelude::*;

fn set(xs: &[&str]) -> HandSet {
    xs.iter().map(|s| s.to_string()).collect()
}

/// Feed events through the controller, keeping the caller-owned selection.
fn run(
    ctl: &mut SelectionController,
    mut sel: HandSet,
    events: Vec<GestureEvent>,
) -> (HandSet, usize) {
    let mut emitted = 0;
    for ev in events {
        if let Some(next) = ctl.handle(&sel, ev) {
            sel = next;
            emitted += 1;
        }
    }
    (sel, emitted)
}

fn over(label: &str) -> GestureEvent {
    GestureEvent::MoveOver(Some(label.to_string()))
}

#[test]
fn select_drag_then_deselect_press() {
    let mut ctl = SelectionController::new();
    let sel = ctl.press(&HandSet::new(), "AA").unwrap();
    assert_eq!(ctl.mode(), Some(DragMode::Select));
    assert!(sel.contains("AA"));

    let events = vec![over("KK"), over("QQ"), over("JJ"), GestureEvent::Release];
    let (sel, _) = run(&mut ctl, sel, events);
    assert_eq!(sel, set(&["AA", "KK", "QQ", "JJ"]));
    assert_eq!(ctl.state(), GestureState::Idle);

    let sel = ctl.press(&sel, "KK").unwrap();
    assert_eq!(ctl.mode(), Some(DragMode::Deselect));
    assert_eq!(sel, set(&["AA", "QQ", "JJ"]));
}

#[test]
fn returning_to_start_cell_does_not_retoggle() {
    let mut ctl = SelectionController::new();
    let events = vec![
        GestureEvent::Press("AKs".into()),
        over("AQs"),
        over("AKs"),
        over("AQs"),
        GestureEvent::Release,
    ];
    let (sel, emitted) = run(&mut ctl, HandSet::new(), events);
    assert_eq!(sel, set(&["AKs", "AQs"]));
    assert_eq!(emitted, 2);
}

#[test]
fn release_outside_grid_ends_gesture() {
    let geo = GridGeometry::new(10, 5, 5, 1);
    let mut ctl = SelectionController::new();
    let down = PointerAdapter::new(&geo, &ctl).translate(PointerInput::Down { x: 10, y: 5 });
    assert_eq!(down, Some(GestureEvent::Press("AA".into())));
    let _ = ctl.handle(&HandSet::new(), down.unwrap());
    assert!(ctl.is_dragging());

    let off = PointerAdapter::new(&geo, &ctl).translate(PointerInput::Drag { x: 200, y: 60 });
    assert_eq!(off, Some(GestureEvent::MoveOver(None)));
    assert!(ctl.handle(&set(&["AA"]), off.unwrap()).is_none());

    let up = PointerAdapter::new(&geo, &ctl).translate(PointerInput::Up);
    let _ = ctl.handle(&set(&["AA"]), up.unwrap());
    assert_eq!(ctl.state(), GestureState::Idle);
}

#[test]
fn press_outside_grid_is_ignored() {
    let geo = GridGeometry::new(10, 5, 5, 1);
    let ctl = SelectionController::new();
    let adapter = PointerAdapter::new(&geo, &ctl);
    assert_eq!(adapter.translate(PointerInput::Down { x: 9, y: 5 }), None);
    assert_eq!(adapter.translate(PointerInput::Down { x: 10 + 65, y: 5 }), None);
    assert_eq!(geo.cell_at(14, 5), Some((0, 0)));
    assert_eq!(geo.cell_at(15, 5), Some((0, 1)));
}

#[test]
fn hover_drag_matches_touch_path() {
    // a touch drag is a press followed by point samples; the same cells are hit
    let geo = GridGeometry::new(0, 0, 5, 1);
    let mut ctl = SelectionController::new();
    let mut sel = HandSet::new();
    for input in [
        PointerInput::Down { x: 0, y: 1 },
        PointerInput::Drag { x: 2, y: 1 },
        PointerInput::Drag { x: 7, y: 1 },
        PointerInput::Drag { x: 6, y: 2 },
        PointerInput::Up,
    ] {
        let Some(ev) = PointerAdapter::new(&geo, &ctl).translate(input) else { continue };
        if let Some(next) = ctl.handle(&sel, ev) {
            sel = next;
        }
    }
    assert_eq!(sel, set(&["AKo", "KK", "KQo"]));
}

fn any_path() -> impl Strategy<Value = Vec<String>> {
    let labels: Vec<String> = generate().into_iter().map(|h| h.label).collect();
    prop::collection::vec(prop::sample::select(labels), 1..30)
}

proptest! {
    #[test]
    fn select_drag_over_selected_run_emits_nothing(path in any_path()) {
        let selected: HandSet = path.iter().cloned().collect();
        let mut ctl = SelectionController::new();
        // start from an unselected cell so the mode is Select
        let start = generate().into_iter().map(|h| h.label).find(|l| !selected.contains(l));
        prop_assume!(start.is_some());
        let start = start.unwrap();
        let sel = ctl.press(&selected, &start).unwrap();
        let moves: Vec<GestureEvent> = path.iter().map(|l| over(l)).collect();
        let (after, emitted) = run(&mut ctl, sel.clone(), moves);
        prop_assert_eq!(emitted, 0);
        prop_assert_eq!(after, sel);
    }

    #[test]
    fn drag_result_follows_mode(initial in any_path(), path in any_path()) {
        let initial: HandSet = initial.into_iter().collect();
        let start = path[0].clone();
        let mut ctl = SelectionController::new();
        let mut events = vec![GestureEvent::Press(start.clone())];
        events.extend(path.iter().skip(1).map(|l| over(l)));
        events.push(GestureEvent::Release);
        let (after, _) = run(&mut ctl, initial.clone(), events);

        let selecting = !initial.contains(&start);
        prop_assert_eq!(after.contains(&start), selecting);
        for label in &path {
            prop_assert_eq!(after.contains(label), selecting);
        }
        for label in initial.iter().filter(|l| !path.contains(l)) {
            prop_assert!(after.contains(label));
        }
        prop_assert_eq!(ctl.state(), GestureState::Idle);
    }

    #[test]
    fn unknown_labels_never_change_anything(junk in "[a-z]{0,4}") {
        let mut ctl = SelectionController::new();
        let sel = set(&["AA"]);
        prop_assert!(ctl.press(&sel, &junk).is_none());
        prop_assert!(!ctl.is_dragging());
        let _ = ctl.press(&sel, "KK");
        prop_assert!(ctl.move_over(&sel, Some(&junk)).is_none());
    }
}
