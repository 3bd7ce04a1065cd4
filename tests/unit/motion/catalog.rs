use super::*;

#[test]
fn standard_catalog_matches_benchmark_set() {
    let catalog = Catalog::standard();
    let labels: Vec<String> = catalog.labels().iter().map(|l| l.to_string()).collect();
    assert_eq!(
        labels,
        [
            "pan_right",
            "pan_left",
            "tilt_up",
            "tilt_down",
            "zoom_in",
            "zoom_out",
            "dolly_in",
            "dolly_out",
            "static"
        ]
    );
    let intensities: Vec<f64> = catalog.entries.iter().map(|e| e.profile.intensity()).collect();
    assert_eq!(intensities, [50.0, 50.0, 30.0, 30.0, 1.5, 1.5, 1.5, 1.5, 0.0]);
    for entry in &catalog.entries {
        assert_eq!(entry.video_id, entry.label().to_string());
    }
    catalog.validate().unwrap();
}

#[test]
fn extended_catalog_adds_tracking() {
    let catalog = Catalog::extended();
    assert_eq!(catalog.entries.len(), 11);
    assert_eq!(catalog.entries[9].video_id, "tracking_right");
    assert_eq!(catalog.entries[10].video_id, "tracking_left");
    assert_eq!(catalog.entries[10].profile.intensity(), 40.0);
}

#[test]
fn catalog_json_defaults_and_overrides() {
    let json = r#"{
        "profiles": [
            { "kind": "pan", "direction": "left", "intensity": 120 },
            { "kind": "zoom", "direction": "in", "video_id": "zoom_fast" },
            { "kind": "static" }
        ]
    }"#;
    let catalog = Catalog::from_reader(json.as_bytes()).unwrap();
    assert_eq!(catalog.entries.len(), 3);
    assert_eq!(catalog.entries[0].video_id, "pan_left");
    assert_eq!(catalog.entries[0].profile.intensity(), 120.0);
    assert_eq!(catalog.entries[1].video_id, "zoom_fast");
    assert_eq!(catalog.entries[1].profile.intensity(), 1.5);
    assert_eq!(catalog.entries[2].profile, MotionProfile::stationary());
}

#[test]
fn catalog_json_round_trips() {
    let catalog = Catalog::extended();
    let json = catalog.to_json_pretty().unwrap();
    let back = Catalog::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, catalog);
}

#[test]
fn catalog_rejects_bad_entries() {
    let bad_dir = r#"{ "profiles": [ { "kind": "tilt", "direction": "left" } ] }"#;
    assert!(Catalog::from_reader(bad_dir.as_bytes()).unwrap_err().is_config());

    let dup = r#"{ "profiles": [ { "kind": "static" }, { "kind": "static" } ] }"#;
    assert!(Catalog::from_reader(dup.as_bytes()).unwrap_err().is_config());

    let empty = r#"{ "profiles": [] }"#;
    assert!(Catalog::from_reader(empty.as_bytes()).unwrap_err().is_config());

    let slash = r#"{ "profiles": [ { "kind": "static", "video_id": "../x" } ] }"#;
    assert!(Catalog::from_reader(slash.as_bytes()).unwrap_err().is_config());

    assert!(Catalog::from_reader("{".as_bytes()).is_err());
}
