use crate::foundation::core::{Frame, StreamMetadata};
use crate::foundation::error::BenchResult;
use crate::source::FrameSource;
use image::Rgb;

const LAYOUT_W: u32 = 1280;
const LAYOUT_H: u32 = 720;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const GROUND: Rgb<u8> = Rgb([90, 140, 90]);
const TRUNK: Rgb<u8> = Rgb([101, 67, 33]);
const CANOPY: Rgb<u8> = Rgb([34, 139, 34]);

/// Layout rectangle in 1280x720 coordinates: `(x0, y0, x1, y1)`, half-open.
type LayoutRect = (u32, u32, u32, u32);

/// Buildings as `(body, roof, body grey, roof grey)`, far to near.
const BUILDINGS: [(LayoutRect, LayoutRect, u8, u8); 3] = [
    ((100, 400, 200, 600), (100, 400, 200, 420), 100, 50),
    ((400, 300, 550, 600), (400, 300, 550, 330), 120, 60),
    ((800, 200, 1000, 600), (800, 200, 1000, 240), 140, 70),
];

const TREE_TRUNK: LayoutRect = (300, 400, 320, 600);
const TREE_CANOPY: (u32, u32, u32) = (310, 380, 50);

const GROUND_TOP: u32 = 600;
const MARKER_SPACING: u32 = 100;
const MARKER_HEIGHT: u32 = 20;
const MARKER_WIDTH: u32 = 2;

const BAR_MARGIN: u32 = 10;
const BAR_HEIGHT: u32 = 10;

/// Parameters of the synthetic scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub frame_rate: u32,
    pub total_frames: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: LAYOUT_W,
            height: LAYOUT_H,
            frame_rate: 30,
            total_frames: 90,
        }
    }
}

impl SceneConfig {
    /// Config for `seconds` of footage at `frame_rate`.
    pub fn with_duration(width: u32, height: u32, frame_rate: u32, seconds: u32) -> Self {
        Self {
            width,
            height,
            frame_rate,
            total_frames: u64::from(frame_rate) * u64::from(seconds),
        }
    }
}

/// Deterministic synthetic footage with depth cues and a per-frame progress bar.
///
/// The static layers are rendered once; each frame adds the progress bar on a copy.
#[derive(Debug, Clone)]
pub struct SceneSource {
    meta: StreamMetadata,
    backdrop: Frame,
    next: u64,
}

impl SceneSource {
    pub fn new(cfg: SceneConfig) -> BenchResult<Self> {
        let meta = StreamMetadata::new(cfg.frame_rate, cfg.width, cfg.height, cfg.total_frames)?;
        Ok(Self {
            meta,
            backdrop: render_backdrop(cfg.width, cfg.height),
            next: 0,
        })
    }

    /// Render frame `index` without advancing the stream.
    pub fn render(&self, index: u64) -> Frame {
        let mut frame = self.backdrop.clone();
        let (w, h) = frame.dimensions();
        let margin = scale_x(BAR_MARGIN, w);
        let span = w.saturating_sub(2 * margin);
        let filled = (u128::from(span) * u128::from(index.min(self.meta.total_frames))
            / u128::from(self.meta.total_frames.max(1))) as u32;
        let top = scale_y(BAR_MARGIN, h);
        let bottom = top + scale_y(BAR_HEIGHT, h).max(1);
        fill_rect(&mut frame, margin, top, margin + filled, bottom, WHITE);
        frame
    }
}

impl FrameSource for SceneSource {
    fn metadata(&self) -> StreamMetadata {
        self.meta
    }

    fn next_frame(&mut self) -> BenchResult<Option<Frame>> {
        if self.next >= self.meta.total_frames {
            return Ok(None);
        }
        let frame = self.render(self.next);
        self.next += 1;
        Ok(Some(frame))
    }
}

fn scale_x(v: u32, width: u32) -> u32 {
    (u64::from(v) * u64::from(width) / u64::from(LAYOUT_W)) as u32
}

fn scale_y(v: u32, height: u32) -> u32 {
    (u64::from(v) * u64::from(height) / u64::from(LAYOUT_H)) as u32
}

fn fill_rect(frame: &mut Frame, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    let x1 = x1.min(frame.width());
    let y1 = y1.min(frame.height());
    for y in y0..y1 {
        for x in x0..x1 {
            frame.put_pixel(x, y, color);
        }
    }
}

fn fill_layout_rect(frame: &mut Frame, r: LayoutRect, color: Rgb<u8>) {
    let (w, h) = frame.dimensions();
    fill_rect(
        frame,
        scale_x(r.0, w),
        scale_y(r.1, h),
        scale_x(r.2, w),
        scale_y(r.3, h),
        color,
    );
}

fn render_backdrop(width: u32, height: u32) -> Frame {
    let mut frame = Frame::from_fn(width, height, |_, y| {
        let level = (255.0 * (1.0 - f64::from(y) / f64::from(height))) as u8;
        Rgb([0, level / 2, level])
    });

    for (body, roof, body_grey, roof_grey) in BUILDINGS {
        fill_layout_rect(&mut frame, body, Rgb([body_grey; 3]));
        fill_layout_rect(&mut frame, roof, Rgb([roof_grey; 3]));
    }

    fill_layout_rect(&mut frame, TREE_TRUNK, TRUNK);
    let (cx, cy, r) = TREE_CANOPY;
    let (cx, cy) = (
        i64::from(scale_x(cx, width)),
        i64::from(scale_y(cy, height)),
    );
    let r = i64::from(scale_x(r, width).min(scale_y(r, height)));
    for y in (cy - r).max(0)..=(cy + r).min(i64::from(height) - 1) {
        for x in (cx - r).max(0)..=(cx + r).min(i64::from(width) - 1) {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r * r {
                frame.put_pixel(x as u32, y as u32, CANOPY);
            }
        }
    }

    let ground_top = scale_y(GROUND_TOP, height);
    fill_rect(&mut frame, 0, ground_top, width, height, GROUND);

    let marker_w = scale_x(MARKER_WIDTH, width).max(1);
    let marker_bottom = ground_top + scale_y(MARKER_HEIGHT, height).max(1);
    for lx in (0..LAYOUT_W).step_by(MARKER_SPACING as usize) {
        let x = scale_x(lx, width);
        fill_rect(&mut frame, x, ground_top, x + marker_w, marker_bottom, WHITE);
    }

    frame
}

#[cfg(test)]
#[path = "../../tests/unit/source/scene.rs"]
mod tests;
