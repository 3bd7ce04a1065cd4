//! Per-frame geometric transform engine.
//!
//! Every operation here is a pure function of `(frame, index, metadata, profile)`: no I/O, no
//! logging, no shared state. Outputs always have the input frame's dimensions.

pub mod canvas;
pub mod resample;
pub mod scale;
pub mod shift;

use crate::foundation::core::{Frame, FrameIndex, StreamMetadata};
use crate::motion::profile::{MotionKind, MotionProfile};

/// Map one source frame to its output under `profile`.
///
/// `meta` supplies `frame_rate` and `total_frames` for the timing arithmetic; it is expected to
/// have passed [`StreamMetadata::validate`]. Degenerate metadata never panics but produces
/// unmoved output (zero offset, zero progress).
pub fn transform_frame(
    frame: Frame,
    index: FrameIndex,
    meta: &StreamMetadata,
    profile: &MotionProfile,
) -> Frame {
    let (w, h) = frame.dimensions();
    if w == 0 || h == 0 {
        return frame;
    }
    match profile.kind() {
        MotionKind::Pan | MotionKind::Tilt | MotionKind::Tracking => {
            shift::apply_shift(frame, index, meta, profile)
        }
        MotionKind::Zoom => scale::apply_zoom(frame, index, meta, profile),
        MotionKind::Dolly => scale::apply_dolly(frame, index, meta, profile),
        MotionKind::Static => frame,
    }
}
