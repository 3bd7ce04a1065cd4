use crate::foundation::core::{Frame, FrameIndex, StreamMetadata};
use crate::motion::profile::{Direction, MotionKind, MotionProfile};
use crate::transform::canvas::{Axis, ExtendedCanvas};

/// Axis a shift profile moves along. Pan and tracking are horizontal, tilt vertical.
pub fn shift_axis(kind: MotionKind) -> Axis {
    match kind {
        MotionKind::Tilt => Axis::Vertical,
        _ => Axis::Horizontal,
    }
}

/// Window offset along the motion axis for `index`, in `[0, extent)`.
///
/// `extent` is the frame width for horizontal motion and the height for vertical motion.
/// Positive motion starts at zero and grows by `intensity / frame_rate` per frame; negative motion
/// counts down from `total_frames`. The raw offset is truncated, then wrapped by `extent`.
pub fn shift_offset(
    index: FrameIndex,
    meta: &StreamMetadata,
    profile: &MotionProfile,
    extent: u32,
) -> u32 {
    if extent == 0 || meta.frame_rate == 0 {
        return 0;
    }
    let px_per_frame = profile.intensity() / f64::from(meta.frame_rate);
    let steps = match profile.direction() {
        Some(Direction::Negative) => meta.total_frames.saturating_sub(index.0),
        _ => index.0,
    };
    let raw = (steps as f64 * px_per_frame) as u64;
    (raw % u64::from(extent)) as u32
}

/// Offset for a frame of the stream's own size.
pub fn stream_shift_offset(
    index: FrameIndex,
    meta: &StreamMetadata,
    profile: &MotionProfile,
) -> u32 {
    let extent = match shift_axis(profile.kind()) {
        Axis::Horizontal => meta.width,
        Axis::Vertical => meta.height,
    };
    shift_offset(index, meta, profile, extent)
}

/// Pan, tilt and tracking: slide a frame-sized window across the tiled canvas.
pub(crate) fn apply_shift(
    frame: Frame,
    index: FrameIndex,
    meta: &StreamMetadata,
    profile: &MotionProfile,
) -> Frame {
    let (w, h) = frame.dimensions();
    let axis = shift_axis(profile.kind());
    let (extent, at) = match axis {
        Axis::Horizontal => (w, (1, 0)),
        Axis::Vertical => (h, (0, 1)),
    };
    let offset = shift_offset(index, meta, profile, extent);
    if offset == 0 {
        return frame;
    }
    ExtendedCanvas::tiled(&frame, axis).window(offset * at.0, offset * at.1)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/shift.rs"]
mod tests;
