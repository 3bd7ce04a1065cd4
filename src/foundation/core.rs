use crate::foundation::error::{BenchError, BenchResult};

/// Dense 8-bit RGB pixel buffer, row-major, tightly packed.
pub type Frame = image::RgbImage;

/// Absolute 0-based frame index within a stream.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Index of the next frame.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Shape and timing of a frame stream.
///
/// Derived once when a source is opened and shared read-only by every transform applied to that
/// source. Outputs always carry the same metadata as their source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StreamMetadata {
    /// Integer frames per second.
    pub frame_rate: u32,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Number of frames the stream declares.
    pub total_frames: u64,
}

impl StreamMetadata {
    /// Create metadata and validate it in one step.
    pub fn new(frame_rate: u32, width: u32, height: u32, total_frames: u64) -> BenchResult<Self> {
        let meta = Self {
            frame_rate,
            width,
            height,
            total_frames,
        };
        meta.validate()?;
        Ok(meta)
    }

    /// Reject metadata that would make the timing arithmetic degenerate.
    pub fn validate(&self) -> BenchResult<()> {
        if self.frame_rate == 0 {
            return Err(BenchError::config("frame_rate must be > 0"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(BenchError::config(format!(
                "frame dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.total_frames == 0 {
            return Err(BenchError::config("total_frames must be > 0"));
        }
        Ok(())
    }

    /// Duration of the stream in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.frame_rate == 0 {
            return 0.0;
        }
        self.total_frames as f64 / f64::from(self.frame_rate)
    }

    /// Bytes in one packed RGB frame.
    pub fn frame_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 3
    }

    /// Return `true` when `frame` has this stream's dimensions.
    pub fn matches(&self, frame: &Frame) -> bool {
        frame.dimensions() == (self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
