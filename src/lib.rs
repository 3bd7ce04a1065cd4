//! Motionbench generates camera-motion benchmark videos from a single source clip.
//!
//! Each [`MotionProfile`] (pan, tilt, tracking, zoom, dolly, static) is applied frame by frame to
//! the source, producing one output video per profile whose ground-truth label is known exactly.
//!
//! - Pull frames from a [`FrameSource`] (a video file via ffmpeg, memory, or the synthetic scene)
//! - Map each frame with [`transform_frame`]
//! - Push results into a [`FrameSink`]; [`run_batch`] does this for a whole [`Catalog`]
#![forbid(unsafe_code)]

mod foundation;

/// Batch orchestration, reports and the ground-truth manifest.
pub mod batch;
/// Output sinks.
pub mod encode;
/// Motion kinds, labels, profiles and catalogs.
pub mod motion;
/// Input sources and frame sampling.
pub mod source;
/// Per-frame geometric transforms.
pub mod transform;

pub use crate::foundation::core::{Frame, FrameIndex, StreamMetadata};
pub use crate::foundation::error::{BenchError, BenchResult};
pub use crate::foundation::math::{progress, ramp};

pub use crate::batch::{
    BatchJob, BatchObserver, BatchOpts, BatchReport, FfmpegStreams, GroundTruthManifest,
    InMemoryStreams, LabeledOutput, NoopObserver, ProfileReport, StreamProvider, TracingObserver,
    run_batch,
};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path, is_ffprobe_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::motion::catalog::{Catalog, CatalogEntry, extended_catalog, standard_catalog};
pub use crate::motion::profile::{Direction, MotionKind, MotionLabel, MotionProfile};
pub use crate::source::ffmpeg::{FfmpegSource, probe_video};
pub use crate::source::sample::{sample_frames, uniform_sample_indices};
pub use crate::source::scene::{SceneConfig, SceneSource};
pub use crate::source::{FrameSource, InMemorySource};
pub use crate::transform::transform_frame;
