use crate::batch::BatchJob;
use crate::batch::report::LabeledOutput;
use crate::foundation::core::{FrameIndex, StreamMetadata};
use crate::foundation::error::BenchResult;

/// Progress hook invoked by [`run_batch`](crate::batch::run_batch).
///
/// In parallel mode calls for different jobs interleave; calls for one job arrive in order.
pub trait BatchObserver: Sync {
    /// A job's source has been opened and validated.
    fn profile_started(&self, _job: &BatchJob, _meta: &StreamMetadata) {}
    /// Frame `idx` of `total` was accepted by the job's sink.
    fn frame_written(&self, _job: &BatchJob, _idx: FrameIndex, _total: u64) {}
    /// A job finished, successfully or not.
    fn profile_finished(&self, _job: &BatchJob, _outcome: &BenchResult<LabeledOutput>) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl BatchObserver for NoopObserver {}

/// Observer that reports through `tracing`.
#[derive(Clone, Copy, Debug)]
pub struct TracingObserver {
    /// Emit a debug event every this many frames (0 disables per-frame events).
    pub progress_every: u64,
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self { progress_every: 30 }
    }
}

impl BatchObserver for TracingObserver {
    fn profile_started(&self, job: &BatchJob, meta: &StreamMetadata) {
        tracing::info!(
            video_id = %job.video_id,
            label = %job.label(),
            intensity = job.profile.intensity(),
            frames = meta.total_frames,
            "generating"
        );
    }

    fn frame_written(&self, job: &BatchJob, idx: FrameIndex, total: u64) {
        if self.progress_every > 0 && (idx.0 + 1).is_multiple_of(self.progress_every) {
            tracing::debug!(video_id = %job.video_id, frame = idx.0 + 1, total, "progress");
        }
    }

    fn profile_finished(&self, job: &BatchJob, outcome: &BenchResult<LabeledOutput>) {
        match outcome {
            Ok(out) => tracing::info!(
                video_id = %out.video_id,
                location = %out.location,
                frames = out.frames_written,
                "generated"
            ),
            Err(e) => tracing::warn!(
                video_id = %job.video_id,
                label = %job.label(),
                error = %e,
                "profile failed; no output written"
            ),
        }
    }
}
