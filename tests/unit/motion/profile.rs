use super::*;

#[test]
fn every_valid_label_round_trips() {
    let mut seen = std::collections::BTreeSet::new();
    for kind in MotionKind::ALL {
        let dirs: Vec<Option<Direction>> = if kind.directions().is_empty() {
            vec![None]
        } else {
            kind.directions().iter().copied().map(Some).collect()
        };
        for dir in dirs {
            let label = MotionLabel::new(kind, dir).unwrap();
            let text = label.to_string();
            assert!(seen.insert(text.clone()), "duplicate label {text}");
            let parsed: MotionLabel = text.parse().unwrap();
            assert_eq!(parsed, label);
            assert_eq!(parsed.kind(), kind);
            assert_eq!(parsed.direction(), dir);
        }
    }
    assert_eq!(seen.len(), 11);
}

#[test]
fn label_strings_follow_direction_words() {
    let pan = MotionProfile::pan(Direction::Positive, 50.0).unwrap();
    assert_eq!(pan.label().to_string(), "pan_right");
    let tilt = MotionProfile::tilt(Direction::Negative, 30.0).unwrap();
    assert_eq!(tilt.label().to_string(), "tilt_down");
    let track = MotionProfile::tracking(Direction::Negative, 40.0).unwrap();
    assert_eq!(track.label().to_string(), "tracking_left");
    let dolly = MotionProfile::dolly(Direction::Out, 1.5).unwrap();
    assert_eq!(dolly.label().to_string(), "dolly_out");
    assert_eq!(MotionProfile::stationary().label().to_string(), "static");
}

#[test]
fn invalid_combinations_are_config_errors() {
    assert!(MotionLabel::new(MotionKind::Pan, Some(Direction::In)).unwrap_err().is_config());
    assert!(MotionLabel::new(MotionKind::Zoom, Some(Direction::Positive)).unwrap_err().is_config());
    assert!(MotionLabel::new(MotionKind::Static, Some(Direction::Out)).unwrap_err().is_config());
    assert!(MotionLabel::new(MotionKind::Tilt, None).unwrap_err().is_config());
    assert!("pan_up".parse::<MotionLabel>().is_err());
    assert!("spin_left".parse::<MotionLabel>().is_err());
    assert!("static_none".parse::<MotionLabel>().is_err());
}

#[test]
fn intensity_validation() {
    assert!(MotionProfile::pan(Direction::Positive, 0.0).unwrap_err().is_config());
    assert!(MotionProfile::pan(Direction::Positive, -5.0).unwrap_err().is_config());
    assert!(MotionProfile::tilt(Direction::Positive, f64::NAN).unwrap_err().is_config());
    assert!(MotionProfile::zoom(Direction::In, 0.8).unwrap_err().is_config());
    assert!(MotionProfile::dolly(Direction::In, 0.8).is_ok());
}

#[test]
fn default_intensity_applies_when_absent() {
    let label: MotionLabel = "tracking_right".parse().unwrap();
    let p = MotionProfile::from_label(label, None).unwrap();
    assert_eq!(p.intensity(), 40.0);
    let s = MotionProfile::from_label("static".parse().unwrap(), Some(99.0)).unwrap();
    assert_eq!(s.intensity(), 0.0);
}

#[test]
fn profile_json_uses_direction_words() {
    let p = MotionProfile::zoom(Direction::Out, 2.0).unwrap();
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"{"kind":"zoom","direction":"out","intensity":2.0}"#);
    let back: MotionProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);

    let s: MotionProfile = serde_json::from_str(r#"{"kind":"static"}"#).unwrap();
    assert_eq!(s, MotionProfile::stationary());
    assert!(serde_json::from_str::<MotionProfile>(r#"{"kind":"pan","direction":"in"}"#).is_err());
}
