use crate::foundation::core::{Frame, FrameIndex, StreamMetadata};
use crate::foundation::error::{BenchError, BenchResult};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames per second.
    pub frame_rate: u32,
}

impl From<&StreamMetadata> for SinkConfig {
    fn from(meta: &StreamMetadata) -> Self {
        Self {
            width: meta.width,
            height: meta.height,
            frame_rate: meta.frame_rate,
        }
    }
}

/// Sequential consumer of output frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order between
/// one `begin` and one `end`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> BenchResult<()>;
    /// Push one frame in strictly increasing order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> BenchResult<()>;
    /// Flush and close. Called once after the last frame.
    fn end(&mut self) -> BenchResult<()>;
}

/// In-memory sink for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, Frame)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(FrameIndex, Frame)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn into_frames(self) -> Vec<(FrameIndex, Frame)> {
        self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BenchResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> BenchResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| BenchError::stream("in-memory sink not started"))?;
        if let Some((last, _)) = self.frames.last()
            && idx <= *last
        {
            return Err(BenchError::stream(
                "in-memory sink received out-of-order frame index",
            ));
        }
        if frame.dimensions() != (cfg.width, cfg.height) {
            return Err(BenchError::stream(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                cfg.width,
                cfg.height
            )));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> BenchResult<()> {
        self.finished = true;
        Ok(())
    }
}
