use proptest::prelude::*;
use serde_json::json;

use seatkit_designer::elements::Element;
use seatkit_designer::{Editor, Tool, VenueLayout, VenueRecord};
use seatkit_core::error::ValidationError;
use seatkit_core::geometry::Point;

#[test]
fn test_roundtrip_is_stable_after_normalization() {
    let mut editor = Editor::new("Main Hall");
    editor.set_tool(Tool::Seat);
    editor.pointer_down(Point::new(100.0, 100.0));
    editor.set_tool(Tool::Section);
    editor.pointer_down(Point::new(300.0, 100.0));
    editor.set_tool(Tool::Stage);
    editor.pointer_down(Point::new(100.0, 400.0));

    let payload = editor.save_payload().unwrap();
    let json = serde_json::to_value(&payload.layout).unwrap();
    let reloaded = VenueLayout::from_value(&json).unwrap();

    assert_eq!(reloaded, payload.layout);
}

#[test]
fn test_migration_fills_legacy_defaults() {
    let raw = json!({
        "categories": {},
        "elements": [
            { "type": "seat", "x": 10.0, "y": 20.0, "number": "12" },
            { "type": "section", "x": 0.0, "y": 0.0, "label": "Floor" }
        ]
    });

    let layout = VenueLayout::from_value(&raw).unwrap();
    let canvas = layout.to_canvas();

    let Element::Seat(seat) = &canvas.elements()[0] else {
        panic!("expected seat");
    };
    assert_eq!(seat.category_id.as_deref(), Some("GENERAL"));
    assert_eq!(seat.size, 20.0);
    assert!(seat.is_bookable);
    assert!(!seat.id.is_empty());

    let Element::Section(section) = &canvas.elements()[1] else {
        panic!("expected section");
    };
    assert_eq!(section.category_id.as_deref(), Some("SECTION"));
    assert_eq!((section.width, section.height), (100.0, 80.0));
    assert_eq!(section.capacity, 1);
    assert!(section.is_bookable);

    // The migrated references resolve: GENERAL/SECTION were added to
    // the category map.
    assert!(layout.categories.contains_key("GENERAL"));
    assert!(layout.categories.contains_key("SECTION"));

    // showGrid defaults on when absent.
    assert!(layout.show_grid);
}

#[test]
fn test_legacy_price_and_status_are_stripped() {
    let raw = json!({
        "categories": { "GENERAL": { "name": "General", "color": "#3498db" } },
        "elements": [
            {
                "type": "seat", "id": "s1", "categoryId": "GENERAL",
                "x": 0.0, "y": 0.0, "size": 20.0, "number": "1",
                "is_bookable": true,
                "price": 42.5, "status": "available"
            }
        ],
        "showGrid": false
    });

    let layout = VenueLayout::from_value(&raw).unwrap();
    let saved = serde_json::to_string(&layout).unwrap();
    assert!(!saved.contains("price"));
    assert!(!saved.contains("status"));
    assert!(!layout.show_grid);
}

#[test]
fn test_migration_is_idempotent() {
    let raw = json!({
        "elements": [
            { "type": "seat", "x": 1.0, "y": 2.0 },
            { "type": "polygon", "points": [
                {"x": 0.0, "y": 0.0}, {"x": 10.0, "y": 0.0}, {"x": 5.0, "y": 8.0}
            ]}
        ]
    });

    let once = VenueLayout::from_value(&raw).unwrap();
    let twice = once.clone().normalize();
    assert_eq!(once, twice);
}

#[test]
fn test_string_encoded_layout_is_accepted() {
    let encoded = serde_json::to_string(&json!({
        "categories": {},
        "elements": [ { "type": "stage", "x": 5.0, "y": 6.0 } ],
        "showGrid": true
    }))
    .unwrap();

    let layout = VenueLayout::from_value(&json!(encoded)).unwrap();
    assert_eq!(layout.elements.len(), 1);
}

#[test]
fn test_unreadable_record_falls_back_to_default_layout() {
    let venue = VenueRecord {
        id: Some("venue-1".to_string()),
        name: "Broken".to_string(),
        geometry_data: Some(json!("{ not json")),
        layout_data: None,
    };

    let layout = VenueLayout::from_venue_record(&venue);
    assert!(layout.elements.is_empty());
    assert!(layout.categories.contains_key("GENERAL"));
    assert!(layout.categories.contains_key("SECTION"));
    assert!(layout.show_grid);
}

#[test]
fn test_geometry_data_preferred_over_legacy_layout_data() {
    let venue = VenueRecord {
        id: None,
        name: "Hall".to_string(),
        geometry_data: Some(json!({
            "categories": {}, "elements": [ { "type": "stage", "x": 0.0, "y": 0.0 } ]
        })),
        layout_data: Some(json!({ "categories": {}, "elements": [] })),
    };

    let layout = VenueLayout::from_venue_record(&venue);
    assert_eq!(layout.elements.len(), 1);
}

#[test]
fn test_degenerate_polygon_is_dropped_on_load() {
    let raw = json!({
        "elements": [
            { "type": "polygon", "points": [ {"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0} ] },
            { "type": "seat", "x": 0.0, "y": 0.0 }
        ]
    });
    let layout = VenueLayout::from_value(&raw).unwrap();
    assert_eq!(layout.elements.len(), 1);
}

#[test]
fn test_dangling_category_reference_is_cleared() {
    let raw = json!({
        "categories": {},
        "elements": [
            { "type": "polygon", "categoryId": "GHOST", "points": [
                {"x": 0.0, "y": 0.0}, {"x": 10.0, "y": 0.0}, {"x": 5.0, "y": 8.0}
            ]}
        ]
    });
    let layout = VenueLayout::from_value(&raw).unwrap();
    assert_eq!(layout.elements[0].category_id(), None);
}

#[test]
fn test_duplicate_ids_are_reassigned() {
    let raw = json!({
        "elements": [
            { "type": "seat", "id": "dup", "x": 0.0, "y": 0.0 },
            { "type": "seat", "id": "dup", "x": 40.0, "y": 0.0 }
        ]
    });
    let layout = VenueLayout::from_value(&raw).unwrap();
    let ids: Vec<_> = layout.elements.iter().map(|e| e.id().unwrap()).collect();
    assert_eq!(ids[0], "dup");
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn test_save_refuses_empty_canvas() {
    let mut editor = Editor::new("Main Hall");
    assert_eq!(editor.save_payload().unwrap_err(), ValidationError::EmptyCanvas);
}

#[test]
fn test_save_refuses_blank_venue_name() {
    let mut editor = Editor::new("   ");
    editor.set_tool(Tool::Seat);
    editor.pointer_down(Point::new(0.0, 0.0));
    assert_eq!(
        editor.save_payload().unwrap_err(),
        ValidationError::BlankVenueName
    );
}

#[test]
fn test_save_clears_dirty_flag() {
    let mut editor = Editor::new("Main Hall");
    editor.set_tool(Tool::Seat);
    editor.pointer_down(Point::new(0.0, 0.0));
    assert!(editor.is_dirty());

    editor.save_payload().unwrap();
    assert!(!editor.is_dirty());
}

#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let mut editor = Editor::new("Main Hall");
    editor.set_tool(Tool::Seat);
    editor.pointer_down(Point::new(100.0, 100.0));
    let payload = editor.save_payload().unwrap();

    payload.layout.save_to_file(&path).unwrap();
    let reloaded = VenueLayout::load_from_file(&path).unwrap();
    assert_eq!(reloaded, payload.layout);
}

#[test]
fn test_editor_from_venue_record_restores_grid_and_is_clean() {
    let venue = VenueRecord {
        id: None,
        name: "Hall".to_string(),
        geometry_data: Some(json!({
            "categories": {},
            "elements": [ { "type": "stage", "x": 0.0, "y": 0.0 } ],
            "showGrid": false
        })),
        layout_data: None,
    };

    let editor = Editor::from_venue_record(&venue);
    assert!(!editor.show_grid());
    assert!(!editor.is_dirty());
    assert_eq!(editor.canvas().len(), 1);
    assert_eq!(editor.venue_name(), "Hall");
}

proptest! {
    /// Migration is idempotent for any combination of missing legacy
    /// fields on a seat record.
    #[test]
    fn migration_idempotent_for_sparse_seats(
        has_id in any::<bool>(),
        has_category in any::<bool>(),
        has_size in any::<bool>(),
        has_bookable in any::<bool>(),
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
    ) {
        let mut seat = serde_json::Map::new();
        seat.insert("type".into(), json!("seat"));
        seat.insert("x".into(), json!(x));
        seat.insert("y".into(), json!(y));
        if has_id { seat.insert("id".into(), json!("seat-1")); }
        if has_category { seat.insert("categoryId".into(), json!("GENERAL")); }
        if has_size { seat.insert("size".into(), json!(24.0)); }
        if has_bookable { seat.insert("is_bookable".into(), json!(false)); }

        let raw = json!({
            "categories": { "GENERAL": { "name": "General", "color": "#3498db" } },
            "elements": [seat]
        });

        let once = VenueLayout::from_value(&raw).unwrap();
        let twice = once.clone().normalize();
        prop_assert_eq!(once, twice);
    }
}
