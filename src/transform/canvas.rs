use crate::foundation::core::Frame;
use image::{Rgb, imageops};

/// Fill colour for padded regions.
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Axis along which a tiled canvas is doubled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Working buffer that lets a frame-sized window slide without leaving valid pixels.
///
/// Windows are addressed by an offset plus the original frame size.
#[derive(Clone, Debug)]
pub struct ExtendedCanvas {
    buf: Frame,
    frame_width: u32,
    frame_height: u32,
}

impl ExtendedCanvas {
    /// Place `frame` twice, back to back along `axis`.
    ///
    /// Any offset in `[0, extent]` along the axis then yields a fully populated window. Seams are
    /// copied as-is, not blended.
    pub fn tiled(frame: &Frame, axis: Axis) -> Self {
        let (w, h) = frame.dimensions();
        let (cw, ch, dx, dy) = match axis {
            Axis::Horizontal => (w * 2, h, i64::from(w), 0),
            Axis::Vertical => (w, h * 2, 0, i64::from(h)),
        };
        let mut buf = Frame::new(cw, ch);
        imageops::replace(&mut buf, frame, 0, 0);
        imageops::replace(&mut buf, frame, dx, dy);
        Self {
            buf,
            frame_width: w,
            frame_height: h,
        }
    }

    /// Centre `content` on a `width x height` background-filled canvas.
    ///
    /// `content` is expected to fit; any overhang is clipped.
    pub fn padded(content: &Frame, width: u32, height: u32) -> Self {
        let mut buf = Frame::from_pixel(width, height, BACKGROUND);
        let (cw, ch) = content.dimensions();
        let x = (i64::from(width) - i64::from(cw)) / 2;
        let y = (i64::from(height) - i64::from(ch)) / 2;
        imageops::replace(&mut buf, content, x, y);
        Self {
            buf,
            frame_width: width,
            frame_height: height,
        }
    }

    /// Full extent of the working buffer.
    pub fn dimensions(&self) -> (u32, u32) {
        self.buf.dimensions()
    }

    /// Size of the windows this canvas hands out.
    pub fn frame_dimensions(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    /// Copy the frame-sized window whose top-left corner is `(x, y)`.
    ///
    /// Offsets are clamped so the window stays inside the buffer.
    pub fn window(&self, x: u32, y: u32) -> Frame {
        let (cw, ch) = self.buf.dimensions();
        let x = x.min(cw - self.frame_width);
        let y = y.min(ch - self.frame_height);
        imageops::crop_imm(&self.buf, x, y, self.frame_width, self.frame_height).to_image()
    }

    /// Consume the canvas, returning the working buffer.
    pub fn into_inner(self) -> Frame {
        self.buf
    }
}
