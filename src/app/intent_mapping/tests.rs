use super::*;
use glam::Vec2;

/// Sitzung mit geradem Zwei-Segment-Pfad von (-1,0) über (1,0) nach (2,0).
fn straight_state() -> PathEditorState {
    let mut state = PathEditorState::default();
    state.spline.add_segment(Vec2::new(2.0, 0.0));
    state
}

#[test]
fn test_pointer_over_segment_sets_hover() {
    let state = straight_state();
    let commands = map_intent_to_commands(
        &state,
        PathIntent::PointerMoved {
            world_pos: Vec2::new(1.5, 0.0),
        },
    );
    assert_eq!(
        commands,
        vec![PathCommand::SetHoveredSegment {
            segment_index: Some(1)
        }]
    );
}

#[test]
fn test_pointer_without_hover_change_emits_nothing() {
    let state = straight_state();
    let commands = map_intent_to_commands(
        &state,
        PathIntent::PointerMoved {
            world_pos: Vec2::new(0.0, 5.0),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn test_add_point_splits_hovered_segment() {
    let mut state = straight_state();
    state.hovered_segment = Some(0);
    let world_pos = Vec2::new(0.0, 0.0);
    let commands = map_intent_to_commands(&state, PathIntent::AddPointRequested { world_pos });
    assert_eq!(
        commands,
        vec![PathCommand::SplitSegment {
            world_pos,
            segment_index: 0
        }]
    );
}

#[test]
fn test_add_point_appends_when_nothing_hovered() {
    let mut state = straight_state();
    // Veralteter Hover-Index wird ignoriert
    state.hovered_segment = Some(7);
    let world_pos = Vec2::new(4.0, 1.0);
    let commands = map_intent_to_commands(&state, PathIntent::AddPointRequested { world_pos });
    assert_eq!(commands, vec![PathCommand::AddSegment { world_pos }]);
}

#[test]
fn test_add_point_on_closed_path_without_hover_is_ignored() {
    let mut state = straight_state();
    state.spline.set_closed(true);
    let commands = map_intent_to_commands(
        &state,
        PathIntent::AddPointRequested {
            world_pos: Vec2::new(4.0, 1.0),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn test_delete_picks_anchor_within_radius() {
    let state = straight_state();
    let hit = map_intent_to_commands(
        &state,
        PathIntent::DeleteAnchorRequested {
            world_pos: Vec2::new(1.02, 0.0),
        },
    );
    assert_eq!(hit, vec![PathCommand::DeleteSegment { anchor_index: 3 }]);

    let miss = map_intent_to_commands(
        &state,
        PathIntent::DeleteAnchorRequested {
            world_pos: Vec2::new(1.2, 0.0),
        },
    );
    assert!(miss.is_empty());
}

#[test]
fn test_drag_control_requires_visible_controls() {
    let mut state = straight_state();
    let intent = PathIntent::PointDragged {
        index: 4,
        world_pos: Vec2::new(1.5, 1.0),
    };
    assert!(map_intent_to_commands(&state, intent.clone()).is_empty());

    state.options.show_control_points = true;
    assert_eq!(
        map_intent_to_commands(&state, intent),
        vec![PathCommand::MovePoint {
            index: 4,
            world_pos: Vec2::new(1.5, 1.0)
        }]
    );
}

#[test]
fn test_drag_out_of_range_or_unmoved_is_ignored() {
    let state = straight_state();
    let out_of_range = PathIntent::PointDragged {
        index: 99,
        world_pos: Vec2::ZERO,
    };
    assert!(map_intent_to_commands(&state, out_of_range).is_empty());

    let unmoved = PathIntent::PointDragged {
        index: 3,
        world_pos: state.spline[3],
    };
    assert!(map_intent_to_commands(&state, unmoved).is_empty());
}

#[test]
fn test_mode_toggles_only_on_change() {
    let state = straight_state();
    assert!(
        map_intent_to_commands(&state, PathIntent::SetClosedRequested { closed: false })
            .is_empty()
    );
    assert_eq!(
        map_intent_to_commands(&state, PathIntent::SetClosedRequested { closed: true }),
        vec![PathCommand::SetClosed { closed: true }]
    );
    assert!(map_intent_to_commands(
        &state,
        PathIntent::SetAutoControlRequested { enabled: true }
    )
    .is_empty());
    assert_eq!(
        map_intent_to_commands(&state, PathIntent::SetAutoControlRequested { enabled: false }),
        vec![PathCommand::SetAutoControl { enabled: false }]
    );
}
