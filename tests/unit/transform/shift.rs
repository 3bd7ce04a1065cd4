use super::*;
use image::Rgb;

fn meta(total: u64) -> StreamMetadata {
    StreamMetadata::new(30, 1280, 720, total).unwrap()
}

#[test]
fn positive_pan_starts_at_zero() {
    let p = MotionProfile::pan(Direction::Positive, 50.0).unwrap();
    assert_eq!(stream_shift_offset(FrameIndex(0), &meta(90), &p), 0);
}

#[test]
fn pan_offset_at_one_second_is_speed() {
    let p = MotionProfile::pan(Direction::Positive, 50.0).unwrap();
    assert_eq!(stream_shift_offset(FrameIndex(30), &meta(90), &p), 50);
    assert_eq!(stream_shift_offset(FrameIndex(1), &meta(90), &p), 1);
    assert_eq!(stream_shift_offset(FrameIndex(2), &meta(90), &p), 3);
}

#[test]
fn negative_pan_counts_down_from_total() {
    let p = MotionProfile::pan(Direction::Negative, 50.0).unwrap();
    assert_eq!(stream_shift_offset(FrameIndex(0), &meta(90), &p), 150);
    assert_eq!(stream_shift_offset(FrameIndex(60), &meta(90), &p), 50);
}

#[test]
fn offsets_wrap_by_extent() {
    let p = MotionProfile::tilt(Direction::Positive, 900.0).unwrap();
    let m = meta(300);
    for i in 0..300 {
        let off = stream_shift_offset(FrameIndex(i), &m, &p);
        assert!(off < 720, "frame {i}: {off}");
    }
    // 30 frames at 30 px/frame = 900 px, 900 mod 720 = 180.
    assert_eq!(stream_shift_offset(FrameIndex(30), &m, &p), 180);
}

#[test]
fn tracking_and_tilt_axes() {
    assert_eq!(shift_axis(MotionKind::Tracking), Axis::Horizontal);
    assert_eq!(shift_axis(MotionKind::Pan), Axis::Horizontal);
    assert_eq!(shift_axis(MotionKind::Tilt), Axis::Vertical);
}

#[test]
fn apply_tilt_moves_rows_up() {
    let m = StreamMetadata::new(10, 3, 8, 20).unwrap();
    let f = Frame::from_fn(3, 8, |_, y| Rgb([y as u8, 0, 0]));
    // 20 px/s at 10 fps = 2 px/frame; frame 3 -> 6 px.
    let p = MotionProfile::tilt(Direction::Positive, 20.0).unwrap();
    let out = apply_shift(f, FrameIndex(3), &m, &p);
    assert_eq!(out.dimensions(), (3, 8));
    let col: Vec<u8> = (0..8).map(|y| out.get_pixel(0, y).0[0]).collect();
    assert_eq!(col, vec![6, 7, 0, 1, 2, 3, 4, 5]);
}

#[test]
fn degenerate_metadata_yields_zero_offset() {
    let m = StreamMetadata {
        frame_rate: 0,
        width: 10,
        height: 10,
        total_frames: 0,
    };
    let p = MotionProfile::pan(Direction::Negative, 50.0).unwrap();
    assert_eq!(shift_offset(FrameIndex(5), &m, &p, 10), 0);
    assert_eq!(shift_offset(FrameIndex(5), &meta(10), &p, 0), 0);
}
