use crate::batch::BatchJob;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
use crate::foundation::core::{Frame, FrameIndex, StreamMetadata};
use crate::foundation::error::{BenchError, BenchResult};
use crate::source::ffmpeg::FfmpegSource;
use crate::source::{FrameSource, InMemorySource};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Factory for the independent source and sink handles each job needs.
///
/// Shared across worker threads; every call must hand out fresh handles.
pub trait StreamProvider: Sync {
    /// Open a new read handle on the shared source.
    fn open_source(&self) -> BenchResult<Box<dyn FrameSource>>;
    /// Open the sink that will receive `job`'s output.
    fn open_sink(&self, job: &BatchJob) -> BenchResult<Box<dyn FrameSink>>;
    /// Where `job`'s output ends up once its sink finishes.
    fn output_location(&self, job: &BatchJob) -> String;
    /// Remove whatever partial output `job` left behind. Missing output is not an error.
    fn discard_output(&self, job: &BatchJob) -> BenchResult<()>;
}

/// Decode one video file per job and encode `<out_dir>/<video_id>.mp4`.
#[derive(Clone, Debug)]
pub struct FfmpegStreams {
    source_path: PathBuf,
    out_dir: PathBuf,
    overwrite: bool,
}

impl FfmpegStreams {
    pub fn new(source_path: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            out_dir: out_dir.into(),
            overwrite: true,
        }
    }

    /// Fail jobs whose output file already exists instead of replacing it.
    pub fn keep_existing(mut self) -> Self {
        self.overwrite = false;
        self
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Output path for `job`.
    pub fn output_path(&self, job: &BatchJob) -> PathBuf {
        self.out_dir.join(format!("{}.mp4", job.video_id))
    }
}

impl StreamProvider for FfmpegStreams {
    fn open_source(&self) -> BenchResult<Box<dyn FrameSource>> {
        Ok(Box::new(FfmpegSource::open(&self.source_path)?))
    }

    fn open_sink(&self, job: &BatchJob) -> BenchResult<Box<dyn FrameSink>> {
        let opts = FfmpegSinkOpts {
            out_path: self.output_path(job),
            overwrite: self.overwrite,
        };
        Ok(Box::new(FfmpegSink::new(opts)))
    }

    fn output_location(&self, job: &BatchJob) -> String {
        self.output_path(job).display().to_string()
    }

    fn discard_output(&self, job: &BatchJob) -> BenchResult<()> {
        let path = self.output_path(job);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed partial output");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                use anyhow::Context as _;
                Err(e)
                    .with_context(|| format!("failed to remove partial output '{}'", path.display()))
                    .map_err(BenchError::from)
            }
        }
    }
}

type OutputStore = Arc<Mutex<BTreeMap<String, Vec<Frame>>>>;

/// Serve the same in-memory frames to every job and keep finished outputs by video id.
#[derive(Clone, Debug)]
pub struct InMemoryStreams {
    meta: StreamMetadata,
    frames: Arc<[Frame]>,
    outputs: OutputStore,
}

impl InMemoryStreams {
    pub fn new(meta: StreamMetadata, frames: Vec<Frame>) -> Self {
        Self {
            meta,
            frames: frames.into(),
            outputs: OutputStore::default(),
        }
    }

    /// Drain `source` into memory.
    pub fn from_source(source: &mut dyn FrameSource) -> BenchResult<Self> {
        let meta = source.metadata();
        let mut frames = Vec::new();
        while let Some(frame) = source.next_frame()? {
            frames.push(frame);
        }
        Ok(Self::new(meta, frames))
    }

    pub fn metadata(&self) -> StreamMetadata {
        self.meta
    }

    /// Frames of a finished output, if `video_id` completed.
    pub fn output(&self, video_id: &str) -> BenchResult<Option<Vec<Frame>>> {
        Ok(lock(&self.outputs)?.get(video_id).cloned())
    }

    /// Identifiers of every finished output, sorted.
    pub fn output_ids(&self) -> BenchResult<Vec<String>> {
        Ok(lock(&self.outputs)?.keys().cloned().collect())
    }
}

fn lock(store: &OutputStore) -> BenchResult<std::sync::MutexGuard<'_, BTreeMap<String, Vec<Frame>>>> {
    store
        .lock()
        .map_err(|_| BenchError::stream("in-memory output store lock poisoned"))
}

impl StreamProvider for InMemoryStreams {
    fn open_source(&self) -> BenchResult<Box<dyn FrameSource>> {
        Ok(Box::new(InMemorySource::new(self.meta, self.frames.to_vec())))
    }

    fn open_sink(&self, job: &BatchJob) -> BenchResult<Box<dyn FrameSink>> {
        Ok(Box::new(CollectingSink {
            video_id: job.video_id.clone(),
            inner: InMemorySink::new(),
            store: Arc::clone(&self.outputs),
        }))
    }

    fn output_location(&self, job: &BatchJob) -> String {
        format!("memory://{}", job.video_id)
    }

    fn discard_output(&self, job: &BatchJob) -> BenchResult<()> {
        lock(&self.outputs)?.remove(&job.video_id);
        Ok(())
    }
}

/// [`InMemorySink`] that publishes its frames to the shared store on `end`.
struct CollectingSink {
    video_id: String,
    inner: InMemorySink,
    store: OutputStore,
}

impl FrameSink for CollectingSink {
    fn begin(&mut self, cfg: SinkConfig) -> BenchResult<()> {
        self.inner.begin(cfg)
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> BenchResult<()> {
        self.inner.push_frame(idx, frame)
    }

    fn end(&mut self) -> BenchResult<()> {
        self.inner.end()?;
        let frames = std::mem::take(&mut self.inner)
            .into_frames()
            .into_iter()
            .map(|(_, f)| f)
            .collect();
        lock(&self.store)?.insert(self.video_id.clone(), frames);
        Ok(())
    }
}
