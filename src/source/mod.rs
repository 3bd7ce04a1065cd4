//! Input frame streams.
//!
//! Sources are pulled sequentially; no seeking is required by anything in this crate.

/// `ffprobe`/`ffmpeg`-backed decoding of video files.
pub mod ffmpeg;
/// Uniform frame sampling over a sequential stream.
pub mod sample;
/// Deterministic synthetic test scene.
pub mod scene;

use crate::foundation::core::{Frame, StreamMetadata};
use crate::foundation::error::{BenchError, BenchResult};
use std::collections::VecDeque;

/// Sequential producer of source frames.
pub trait FrameSource: Send {
    /// Shape and timing of the stream, fixed for its lifetime.
    fn metadata(&self) -> StreamMetadata;
    /// Next frame in order, or `None` at end of stream.
    fn next_frame(&mut self) -> BenchResult<Option<Frame>>;
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn metadata(&self) -> StreamMetadata {
        (**self).metadata()
    }

    fn next_frame(&mut self) -> BenchResult<Option<Frame>> {
        (**self).next_frame()
    }
}

/// Source over frames already held in memory.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    meta: StreamMetadata,
    frames: VecDeque<Frame>,
}

impl InMemorySource {
    /// Wrap `frames` with explicit metadata. `meta.total_frames` is taken as declared.
    pub fn new(meta: StreamMetadata, frames: Vec<Frame>) -> Self {
        Self {
            meta,
            frames: frames.into(),
        }
    }

    /// Derive metadata from the frames themselves.
    pub fn from_frames(frame_rate: u32, frames: Vec<Frame>) -> BenchResult<Self> {
        let first = frames
            .first()
            .ok_or_else(|| BenchError::config("in-memory source needs at least one frame"))?;
        let (width, height) = first.dimensions();
        let meta = StreamMetadata::new(frame_rate, width, height, frames.len() as u64)?;
        Ok(Self::new(meta, frames))
    }

    /// Frames not yet pulled.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSource for InMemorySource {
    fn metadata(&self) -> StreamMetadata {
        self.meta
    }

    fn next_frame(&mut self) -> BenchResult<Option<Frame>> {
        Ok(self.frames.pop_front())
    }
}
