use super::*;

#[test]
fn metadata_rejects_zero_fields() {
    assert!(StreamMetadata::new(0, 64, 64, 10).unwrap_err().is_config());
    assert!(StreamMetadata::new(30, 0, 64, 10).unwrap_err().is_config());
    assert!(StreamMetadata::new(30, 64, 0, 10).unwrap_err().is_config());
    assert!(StreamMetadata::new(30, 64, 64, 0).unwrap_err().is_config());
}

#[test]
fn metadata_duration_and_frame_bytes() {
    let meta = StreamMetadata::new(30, 1280, 720, 90).unwrap();
    assert!((meta.duration_secs() - 3.0).abs() < 1e-12);
    assert_eq!(meta.frame_bytes(), 1280 * 720 * 3);
}

#[test]
fn metadata_matches_frame_dimensions() {
    let meta = StreamMetadata::new(24, 8, 4, 1).unwrap();
    assert!(meta.matches(&Frame::new(8, 4)));
    assert!(!meta.matches(&Frame::new(4, 8)));
}

#[test]
fn frame_index_next_saturates() {
    assert_eq!(FrameIndex(3).next(), FrameIndex(4));
    assert_eq!(FrameIndex(u64::MAX).next(), FrameIndex(u64::MAX));
}
