use crate::foundation::core::{Frame, FrameIndex, StreamMetadata};
use crate::foundation::math::{progress, ramp, trunc_px};
use crate::motion::profile::{Direction, MotionProfile};
use crate::transform::canvas::ExtendedCanvas;
use crate::transform::resample::{resize_bilinear, resize_bilinear_region};
use image::imageops;

/// Axis-aligned pixel rectangle inside a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropWindow {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropWindow {
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Scale factor for zoom or dolly at `index`, ramping between `1` and the profile intensity.
///
/// `In` ramps `1 -> max`, `Out` ramps `max -> 1`, both linear in `index / total_frames`.
pub fn scale_factor(index: FrameIndex, meta: &StreamMetadata, profile: &MotionProfile) -> f64 {
    let p = progress(index.0, meta.total_frames);
    let rising = profile.direction() != Some(Direction::Out);
    ramp(p, profile.intensity(), rising)
}

/// Centred crop a zoom profile samples from, for a `width x height` frame.
pub fn zoom_window(
    index: FrameIndex,
    meta: &StreamMetadata,
    profile: &MotionProfile,
    width: u32,
    height: u32,
) -> CropWindow {
    let factor = scale_factor(index, meta, profile);
    let cw = trunc_px(f64::from(width) / factor).min(width);
    let ch = trunc_px(f64::from(height) / factor).min(height);
    CropWindow {
        x: (width - cw) / 2,
        y: (height - ch) / 2,
        width: cw,
        height: ch,
    }
}

/// Zoom: crop a centred window and resample it back to full size.
///
/// Models a focal length change with no camera displacement.
pub(crate) fn apply_zoom(
    frame: Frame,
    index: FrameIndex,
    meta: &StreamMetadata,
    profile: &MotionProfile,
) -> Frame {
    let (w, h) = frame.dimensions();
    let win = zoom_window(index, meta, profile, w, h);
    if (win.width, win.height) == (w, h) {
        return frame;
    }
    let cropped = imageops::crop_imm(&frame, win.x, win.y, win.width, win.height).to_image();
    resize_bilinear(&cropped, w, h)
}

/// Dolly: rescale the whole frame, then centre-crop (`s >= 1`) or centre-pad (`s < 1`).
///
/// Magnified frames only render the visible `W x H` window of the rescaled image, so memory
/// stays bounded by the frame size however large the scale factor gets.
pub(crate) fn apply_dolly(
    frame: Frame,
    index: FrameIndex,
    meta: &StreamMetadata,
    profile: &MotionProfile,
) -> Frame {
    let (w, h) = frame.dimensions();
    let s = scale_factor(index, meta, profile);
    if s >= 1.0 {
        // Float-to-int casts saturate, so absurd factors clamp instead of wrapping.
        let sw = ((f64::from(w) * s) as u64).max(u64::from(w));
        let sh = ((f64::from(h) * s) as u64).max(u64::from(h));
        if (sw, sh) == (u64::from(w), u64::from(h)) {
            return frame;
        }
        let origin = ((sw - u64::from(w)) / 2, (sh - u64::from(h)) / 2);
        return resize_bilinear_region(&frame, (sw, sh), origin, (w, h));
    }

    let sw = trunc_px(f64::from(w) * s);
    let sh = trunc_px(f64::from(h) * s);
    if (sw, sh) == (w, h) {
        return frame;
    }
    let scaled = resize_bilinear(&frame, sw, sh);
    ExtendedCanvas::padded(&scaled, w, h).into_inner()
}

#[cfg(test)]
#[path = "../../tests/unit/transform/scale.rs"]
mod tests;
