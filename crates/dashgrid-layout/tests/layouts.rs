//! End-to-end layout scenarios.

use dashgrid_core::{GridOptions, GridRect, LayoutSnapshot, WidgetConfig, WidgetSize};
use dashgrid_layout::{clamp_layout, pack_widgets, resolve_columns, Dashboard};
use glam::DVec2;

fn widget(id: &str, x: u32, y: u32, w: u32, h: u32) -> WidgetConfig {
    WidgetConfig::new(id, "stats", GridRect::new(x, y, w, h))
}

#[test]
fn test_overlapping_request_is_shifted_right() {
    let widgets = vec![
        widget("A", 0, 0, 6, 3),
        widget("B", 4, 0, 6, 3),
        widget("C", 0, 3, 12, 4),
    ];
    let packed = pack_widgets(&widgets, 12);
    let layouts: Vec<GridRect> = packed.iter().map(|w| w.layout).collect();

    insta::assert_json_snapshot!(layouts, @r###"
    [
      {
        "x": 0,
        "y": 0,
        "w": 6,
        "h": 3
      },
      {
        "x": 6,
        "y": 0,
        "w": 6,
        "h": 3
      },
      {
        "x": 0,
        "y": 3,
        "w": 12,
        "h": 4
      }
    ]
    "###);
}

#[test]
fn test_mobile_viewport_clamps_wide_widget() {
    let profile = resolve_columns(500.0, &GridOptions::default());
    assert_eq!(profile.columns, 4);
    assert!((profile.row_height - 120.0).abs() < 0.001);

    let rect = clamp_layout(GridRect::new(0, 0, 6, 2), profile.columns);
    assert_eq!((rect.x, rect.w), (0, 4));
}

#[test]
fn test_drag_two_columns() {
    let mut dashboard = Dashboard::new(GridOptions::default(), 1440.0).unwrap();
    dashboard.load(vec![widget("A", 0, 0, 4, 3)]).unwrap();

    let pitch = dashboard.metrics().column_pitch();
    dashboard.begin_drag("A").unwrap();
    assert!(dashboard.end_drag(DVec2::new(pitch * 2.0, 0.0)).unwrap());
    assert_eq!(dashboard.widgets()[0].layout, GridRect::new(2, 0, 4, 3));
}

#[test]
fn test_session_survives_persistence() {
    let mut dashboard = Dashboard::new(GridOptions::default(), 1440.0).unwrap();
    dashboard
        .load(vec![
            widget("tasks", 0, 0, 6, 3).with_title("My tasks"),
            widget("chat", 6, 0, 6, 3).with_setting("threadId", serde_json::json!(42)),
        ])
        .unwrap();
    dashboard.resize_to_preset("tasks", WidgetSize::Large).unwrap();

    let json = dashboard.snapshot(Some("default".into())).to_json().unwrap();
    let restored = LayoutSnapshot::from_json(&json).unwrap();
    assert_eq!(restored.preset_id.as_deref(), Some("default"));

    let mut reloaded = Dashboard::new(GridOptions::default(), 1440.0).unwrap();
    reloaded.load(restored.widgets).unwrap();
    assert_eq!(reloaded.widgets(), dashboard.widgets());
    assert_eq!(reloaded.widget("tasks").map(|w| w.layout), Some(GridRect::new(0, 0, 12, 4)));
    assert_eq!(reloaded.widget("chat").map(|w| w.layout), Some(GridRect::new(6, 4, 6, 3)));
    assert_eq!(reloaded.widget("chat").map(|w| w.settings["threadId"].clone()), Some(serde_json::json!(42)));
}

#[test]
fn test_breakpoint_round_trip_keeps_sizes_within_band() {
    let mut dashboard = Dashboard::new(GridOptions::default(), 1440.0).unwrap();
    dashboard
        .load(vec![widget("a", 0, 0, 8, 2), widget("b", 8, 0, 4, 2)])
        .unwrap();

    assert!(dashboard.set_viewport_width(900.0));
    assert_eq!(dashboard.columns(), 8);
    assert_eq!(dashboard.widget("a").map(|w| w.layout), Some(GridRect::new(0, 0, 8, 2)));
    assert_eq!(dashboard.widget("b").map(|w| w.layout), Some(GridRect::new(4, 2, 4, 2)));

    assert!(dashboard.set_viewport_width(1440.0));
    assert_eq!(dashboard.widget("b").map(|w| w.layout), Some(GridRect::new(4, 2, 4, 2)));
}
