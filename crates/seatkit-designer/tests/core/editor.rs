use seatkit_core::geometry::Point;
use seatkit_designer::elements::{Element, Seat, Section, Stage};
use seatkit_designer::{
    Editor, EditorSignal, InteractionState, KeyCode, KeyPress, Tool, VenueCanvas,
};

#[test]
fn test_pan_tool_drags_viewport() {
    let mut editor = Editor::new("Hall");
    editor.set_tool(Tool::Pan);

    editor.pointer_down(Point::new(100.0, 100.0));
    assert!(matches!(
        editor.interaction(),
        InteractionState::Panning { .. }
    ));

    editor.pointer_move(Point::new(130.0, 80.0));
    assert_eq!(editor.viewport().pan(), Point::new(30.0, -20.0));

    // Pan is start + (current - start), not cumulative per move.
    editor.pointer_move(Point::new(110.0, 110.0));
    assert_eq!(editor.viewport().pan(), Point::new(10.0, 10.0));

    editor.pointer_up();
    assert_eq!(*editor.interaction(), InteractionState::Idle);
}

#[test]
fn test_select_tool_selects_and_moves_topmost() {
    let mut editor = Editor::new("Hall");
    let id = editor
        .canvas_mut()
        .add_element(Element::Seat(Seat::new(100.0, 100.0, "1")));

    editor.set_tool(Tool::Select);
    editor.pointer_down(Point::new(110.0, 110.0));
    assert_eq!(editor.selected_id(), Some(id.as_str()));
    assert!(matches!(
        editor.interaction(),
        InteractionState::MovingElement { .. }
    ));

    editor.pointer_move(Point::new(130.0, 120.0));
    let Element::Seat(seat) = editor.canvas().get(&id).unwrap() else {
        panic!("expected seat");
    };
    assert_eq!((seat.x, seat.y), (120.0, 110.0));

    editor.pointer_up();
    assert_eq!(*editor.interaction(), InteractionState::Idle);
}

#[test]
fn test_move_applies_delta_to_every_polygon_vertex() {
    let mut editor = Editor::new("Hall");
    editor.set_tool(Tool::Polygon);
    for p in [(200.0, 200.0), (300.0, 200.0), (250.0, 300.0)] {
        editor.pointer_down(Point::new(p.0, p.1));
    }
    editor.double_click(Point::new(250.0, 250.0));
    let id = editor.selected_id().unwrap().to_string();

    editor.set_tool(Tool::Select);
    editor.pointer_down(Point::new(250.0, 230.0));
    editor.pointer_move(Point::new(260.0, 245.0));

    let Element::Polygon(polygon) = editor.canvas().get(&id).unwrap() else {
        panic!("expected polygon");
    };
    assert_eq!(polygon.points[0], Point::new(210.0, 215.0));
    assert_eq!(polygon.points[1], Point::new(310.0, 215.0));
    assert_eq!(polygon.points[2], Point::new(260.0, 315.0));
}

#[test]
fn test_click_on_empty_space_clears_selection() {
    let mut editor = Editor::new("Hall");
    editor
        .canvas_mut()
        .add_element(Element::Seat(Seat::new(100.0, 100.0, "1")));

    editor.set_tool(Tool::Select);
    editor.pointer_down(Point::new(110.0, 110.0));
    editor.pointer_up();
    assert!(editor.selected_id().is_some());

    editor.pointer_down(Point::new(500.0, 500.0));
    assert_eq!(editor.selected_id(), None);
}

#[test]
fn test_resize_section_west_handle_moves_left_edge() {
    let mut editor = Editor::new("Hall");
    let id = editor
        .canvas_mut()
        .add_element(Element::Section(Section::new(0.0, 0.0, "Section A")));
    editor.set_tool(Tool::Select);
    editor.select(Some(id.clone()));

    // Default section is 100x80; the W handle sits at world (0, 40).
    editor.pointer_down(Point::new(0.0, 40.0));
    assert!(matches!(
        editor.interaction(),
        InteractionState::ResizingElement { .. }
    ));

    editor.pointer_move(Point::new(-20.0, 40.0));
    let Element::Section(section) = editor.canvas().get(&id).unwrap() else {
        panic!("expected section");
    };
    assert_eq!((section.x, section.width), (-20.0, 120.0));
    assert_eq!((section.y, section.height), (0.0, 80.0));

    editor.pointer_up();
    assert_eq!(*editor.interaction(), InteractionState::Idle);
}

#[test]
fn test_resize_corner_handle_moves_two_edges() {
    let mut editor = Editor::new("Hall");
    let id = editor
        .canvas_mut()
        .add_element(Element::Stage(Stage::new(0.0, 0.0)));
    editor.set_tool(Tool::Select);
    editor.select(Some(id.clone()));

    // Default stage is 200x40; SE corner at (200, 40).
    editor.pointer_down(Point::new(200.0, 40.0));
    editor.pointer_move(Point::new(230.0, 60.0));

    let Element::Stage(stage) = editor.canvas().get(&id).unwrap() else {
        panic!("expected stage");
    };
    assert_eq!((stage.x, stage.y), (0.0, 0.0));
    assert_eq!((stage.width, stage.height), (230.0, 60.0));
}

#[test]
fn test_resize_width_floors_without_moving_far_edge() {
    let mut editor = Editor::new("Hall");
    let id = editor
        .canvas_mut()
        .add_element(Element::Section(Section::new(0.0, 0.0, "Section A")));
    editor.set_tool(Tool::Select);
    editor.select(Some(id.clone()));

    // Drag the W handle far past the right edge: width floors at 20
    // and the right edge (x + width = 100) stays put.
    editor.pointer_down(Point::new(0.0, 40.0));
    editor.pointer_move(Point::new(400.0, 40.0));

    let Element::Section(section) = editor.canvas().get(&id).unwrap() else {
        panic!("expected section");
    };
    assert_eq!(section.width, 20.0);
    assert_eq!(section.x, 80.0);
}

#[test]
fn test_resize_seat_uniform_with_floor() {
    let mut editor = Editor::new("Hall");
    let id = editor
        .canvas_mut()
        .add_element(Element::Seat(Seat::new(100.0, 100.0, "1")));
    editor.set_tool(Tool::Select);
    editor.select(Some(id.clone()));

    // SE corner of the 20-unit seat sits at (120, 120).
    editor.pointer_down(Point::new(120.0, 120.0));
    editor.pointer_move(Point::new(135.0, 128.0));
    {
        let Element::Seat(seat) = editor.canvas().get(&id).unwrap() else {
            panic!("expected seat");
        };
        // Corner handle takes the larger outward component.
        assert_eq!(seat.size, 35.0);
        assert_eq!((seat.x, seat.y), (100.0, 100.0));
    }

    // Dragging far inward floors at the minimum size.
    editor.pointer_move(Point::new(20.0, 20.0));
    let Element::Seat(seat) = editor.canvas().get(&id).unwrap() else {
        panic!("expected seat");
    };
    assert_eq!(seat.size, 10.0);
}

#[test]
fn test_resize_polygon_vertex_moves_only_that_vertex() {
    let mut editor = Editor::new("Hall");
    editor.set_tool(Tool::Polygon);
    for p in [(200.0, 200.0), (300.0, 200.0), (250.0, 300.0)] {
        editor.pointer_down(Point::new(p.0, p.1));
    }
    editor.double_click(Point::new(0.0, 0.0));
    let id = editor.selected_id().unwrap().to_string();

    editor.set_tool(Tool::Select);
    editor.select(Some(id.clone()));
    editor.pointer_down(Point::new(300.0, 200.0)); // vertex 1 handle
    editor.pointer_move(Point::new(320.0, 190.0));

    let Element::Polygon(polygon) = editor.canvas().get(&id).unwrap() else {
        panic!("expected polygon");
    };
    assert_eq!(polygon.points[0], Point::new(200.0, 200.0));
    assert_eq!(polygon.points[1], Point::new(320.0, 190.0));
    assert_eq!(polygon.points[2], Point::new(250.0, 300.0));
}

#[test]
fn test_resize_delta_is_scaled_by_zoom() {
    let mut editor = Editor::new("Hall");
    let id = editor
        .canvas_mut()
        .add_element(Element::Section(Section::new(0.0, 0.0, "Section A")));
    editor.viewport_mut().set_scale(2.0);
    editor.set_tool(Tool::Select);
    editor.select(Some(id.clone()));

    // At 2x, the E handle of the 100-wide section is at screen x=200.
    editor.pointer_down(Point::new(200.0, 80.0));
    assert!(matches!(
        editor.interaction(),
        InteractionState::ResizingElement { .. }
    ));
    editor.pointer_move(Point::new(240.0, 80.0));

    let Element::Section(section) = editor.canvas().get(&id).unwrap() else {
        panic!("expected section");
    };
    // 40 screen px at 2x = 20 world units.
    assert_eq!(section.width, 120.0);
}

#[test]
fn test_paint_category_assigns_active_on_click() {
    let mut editor = Editor::new("Hall");
    editor.canvas_mut().create_category("VIP", "VIP", "#e74c3c").unwrap();
    let seat = editor
        .canvas_mut()
        .add_element(Element::Seat(Seat::new(100.0, 100.0, "1")));
    let stage = editor
        .canvas_mut()
        .add_element(Element::Stage(Stage::new(0.0, 300.0)));

    editor.set_tool(Tool::PaintCategory);
    editor.pointer_down(Point::new(110.0, 110.0));
    assert_eq!(editor.canvas().get(&seat).unwrap().category_id(), Some("VIP"));
    // No drag phase: the state machine stays idle.
    assert_eq!(*editor.interaction(), InteractionState::Idle);

    // Stages are never paintable.
    editor.pointer_down(Point::new(50.0, 310.0));
    assert_eq!(editor.canvas().get(&stage).unwrap().category_id(), None);
}

#[test]
fn test_wheel_zoom_during_any_state() {
    let mut editor = Editor::new("Hall");
    editor.set_tool(Tool::Polygon);
    editor.pointer_down(Point::new(0.0, 0.0));
    editor.pointer_down(Point::new(50.0, 0.0));

    editor.wheel(false);
    assert!((editor.viewport().scale() - 0.9).abs() < 1e-9);

    // Zooming does not disturb the in-progress polygon.
    let InteractionState::ConstructingPolygon { points } = editor.interaction() else {
        panic!("expected construction to survive");
    };
    assert_eq!(points.len(), 2);
}

#[test]
fn test_delete_key_removes_selection() {
    let mut editor = Editor::new("Hall");
    let id = editor
        .canvas_mut()
        .add_element(Element::Seat(Seat::new(0.0, 0.0, "1")));
    editor.select(Some(id));

    editor.key_down(KeyPress::plain(KeyCode::Delete));
    assert!(editor.canvas().is_empty());
    assert_eq!(editor.selected_id(), None);

    // Backspace behaves the same; with nothing selected it is a no-op.
    editor.key_down(KeyPress::plain(KeyCode::Backspace));
    assert!(editor.canvas().is_empty());
}

#[test]
fn test_duplicate_shortcut_selects_copy() {
    let mut editor = Editor::new("Hall");
    let id = editor
        .canvas_mut()
        .add_element(Element::Seat(Seat::new(10.0, 10.0, "1")));
    editor.select(Some(id.clone()));

    editor.key_down(KeyPress::ctrl(KeyCode::Char('d')));
    assert_eq!(editor.canvas().len(), 2);
    let copy_id = editor.selected_id().unwrap();
    assert_ne!(copy_id, id);
    let Element::Seat(copy) = editor.canvas().get(copy_id).unwrap() else {
        panic!("expected seat");
    };
    assert_eq!((copy.x, copy.y), (40.0, 40.0));
}

#[test]
fn test_tool_shortcuts() {
    let mut editor = Editor::new("Hall");
    for (key, tool) in [
        ('s', Tool::Seat),
        ('e', Tool::Section),
        ('p', Tool::Polygon),
        ('t', Tool::Stage),
        ('h', Tool::Pan),
        ('c', Tool::PaintCategory),
        ('v', Tool::Select),
    ] {
        editor.key_down(KeyPress::plain(KeyCode::Char(key)));
        assert_eq!(editor.tool(), tool, "shortcut {key}");
    }

    // A ctrl-modified letter is not a tool shortcut.
    editor.key_down(KeyPress::ctrl(KeyCode::Char('s')));
    assert_eq!(editor.tool(), Tool::Select);
}

#[test]
fn test_paint_shortcut_skipped_without_active_category() {
    let mut editor = Editor::with_canvas("Hall", VenueCanvas::new());
    editor.key_down(KeyPress::plain(KeyCode::Char('c')));
    assert_eq!(editor.tool(), Tool::Select);
}

#[test]
fn test_escape_requests_cancel() {
    let mut editor = Editor::new("Hall");
    assert_eq!(
        editor.key_down(KeyPress::plain(KeyCode::Escape)),
        Some(EditorSignal::CancelRequested)
    );
}

#[test]
fn test_clear_canvas_resets_selection_and_marks_dirty() {
    let mut editor = Editor::new("Hall");
    let id = editor
        .canvas_mut()
        .add_element(Element::Seat(Seat::new(0.0, 0.0, "1")));
    editor.select(Some(id));

    editor.clear_canvas();
    assert!(editor.canvas().is_empty());
    assert_eq!(editor.selected_id(), None);
    assert!(editor.is_dirty());
}

#[test]
fn test_switching_tool_abandons_polygon_construction() {
    let mut editor = Editor::new("Hall");
    editor.set_tool(Tool::Polygon);
    editor.pointer_down(Point::new(0.0, 0.0));
    editor.pointer_down(Point::new(50.0, 0.0));

    editor.set_tool(Tool::Select);
    assert_eq!(*editor.interaction(), InteractionState::Idle);
    assert!(editor.canvas().is_empty());
}
