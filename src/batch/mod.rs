//! Batch generation: one output video per motion profile over a shared source.
//!
//! - [`run_batch`] drives every job through source, transform and sink.
//! - [`StreamProvider`] decides where frames come from and where they go.
//! - [`BatchObserver`] receives progress; the transform engine never logs.

/// Pretty JSON mapping ground-truth labels to generated videos.
pub mod manifest;
/// Progress hooks.
pub mod observer;
/// Per-job stream factories.
pub mod provider;
/// Per-profile and per-batch outcomes.
pub mod report;
/// The orchestration loop.
pub mod runner;

/// One requested output video.
pub type BatchJob = crate::motion::catalog::CatalogEntry;

pub use manifest::GroundTruthManifest;
pub use observer::{BatchObserver, NoopObserver, TracingObserver};
pub use provider::{FfmpegStreams, InMemoryStreams, StreamProvider};
pub use report::{BatchReport, LabeledOutput, ProfileReport};
pub use runner::{BatchOpts, run_batch};
