use super::*;

fn small() -> SceneConfig {
    SceneConfig {
        width: 128,
        height: 72,
        frame_rate: 10,
        total_frames: 4,
    }
}

#[test]
fn yields_declared_frame_count_with_declared_shape() {
    let mut src = SceneSource::new(small()).unwrap();
    let meta = src.metadata();
    assert_eq!((meta.width, meta.height, meta.frame_rate), (128, 72, 10));

    let mut n = 0;
    while let Some(frame) = src.next_frame().unwrap() {
        assert_eq!(frame.dimensions(), (128, 72));
        n += 1;
    }
    assert_eq!(n, 4);
    assert!(src.next_frame().unwrap().is_none());
}

#[test]
fn rendering_is_deterministic() {
    let a = SceneSource::new(small()).unwrap();
    let b = SceneSource::new(small()).unwrap();
    assert_eq!(a.render(2), b.render(2));
}

#[test]
fn progress_bar_grows_with_index() {
    let src = SceneSource::new(SceneConfig::default()).unwrap();
    let white = |f: &Frame| (0..f.width()).filter(|&x| *f.get_pixel(x, 15) == WHITE).count();
    let first = src.render(0);
    let mid = src.render(45);
    let last = src.render(89);
    assert_eq!(white(&first), 0);
    assert!(white(&mid) > 0);
    assert!(white(&last) > white(&mid));
}

#[test]
fn layout_features_land_where_expected_at_full_size() {
    let src = SceneSource::new(SceneConfig::default()).unwrap();
    let f = src.render(0);
    // Sky gradient: top row brighter than a row lower down.
    assert!(f.get_pixel(640, 100).0[2] > f.get_pixel(640, 300).0[2]);
    // Near building body and roof.
    assert_eq!(*f.get_pixel(900, 400), Rgb([140, 140, 140]));
    assert_eq!(*f.get_pixel(900, 210), Rgb([70, 70, 70]));
    // Tree canopy centre and trunk.
    assert_eq!(*f.get_pixel(310, 380), CANOPY);
    assert_eq!(*f.get_pixel(310, 500), TRUNK);
    // Ground and a marker.
    assert_eq!(*f.get_pixel(650, 700), GROUND);
    assert_eq!(*f.get_pixel(600, 610), WHITE);
}

#[test]
fn with_duration_multiplies_rate_by_seconds() {
    let cfg = SceneConfig::with_duration(64, 36, 24, 2);
    assert_eq!(cfg.total_frames, 48);
}

#[test]
fn rejects_degenerate_config() {
    let mut cfg = small();
    cfg.total_frames = 0;
    assert!(SceneSource::new(cfg).unwrap_err().is_config());
}
