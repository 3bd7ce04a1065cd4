use super::*;
use crate::foundation::core::StreamMetadata;
use crate::source::InMemorySource;

fn numbered(n: u8) -> Vec<Frame> {
    (0..n)
        .map(|i| Frame::from_pixel(2, 2, image::Rgb([i, 0, 0])))
        .collect()
}

fn idx(v: &[u64]) -> Vec<FrameIndex> {
    v.iter().copied().map(FrameIndex).collect()
}

#[test]
fn indices_follow_floor_rule() {
    assert_eq!(uniform_sample_indices(90, 3), idx(&[0, 30, 60]));
    assert_eq!(uniform_sample_indices(100, 8), idx(&[0, 12, 25, 37, 50, 62, 75, 87]));
    assert_eq!(uniform_sample_indices(3, 5), idx(&[0, 0, 1, 1, 2]));
}

#[test]
fn indices_empty_on_zero() {
    assert!(uniform_sample_indices(0, 8).is_empty());
    assert!(uniform_sample_indices(90, 0).is_empty());
}

#[test]
fn sample_frames_returns_matching_frames() {
    let mut src = InMemorySource::from_frames(10, numbered(10)).unwrap();
    let got = sample_frames(&mut src, 4).unwrap();
    let seen: Vec<(u64, u8)> = got.iter().map(|(i, f)| (i.0, f.get_pixel(0, 0).0[0])).collect();
    assert_eq!(seen, vec![(0, 0), (2, 2), (5, 5), (7, 7)]);
    // Frames after the last sample are left unread.
    assert_eq!(src.remaining(), 2);
}

#[test]
fn sample_frames_repeats_frames_when_oversampling() {
    let mut src = InMemorySource::from_frames(10, numbered(2)).unwrap();
    let got = sample_frames(&mut src, 4).unwrap();
    let seen: Vec<u64> = got.iter().map(|(i, _)| i.0).collect();
    assert_eq!(seen, vec![0, 0, 1, 1]);
}

#[test]
fn short_stream_yields_fewer_samples() {
    let meta = StreamMetadata::new(10, 2, 2, 10).unwrap();
    let mut src = InMemorySource::new(meta, numbered(3));
    let got = sample_frames(&mut src, 5).unwrap();
    let seen: Vec<u64> = got.iter().map(|(i, _)| i.0).collect();
    assert_eq!(seen, vec![0, 2]);
}
