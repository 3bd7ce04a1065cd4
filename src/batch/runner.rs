use rayon::prelude::*;

use crate::batch::BatchJob;
use crate::batch::observer::BatchObserver;
use crate::batch::provider::StreamProvider;
use crate::batch::report::{BatchReport, LabeledOutput, ProfileReport};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, StreamMetadata};
use crate::foundation::error::{BenchError, BenchResult};
use crate::motion::catalog::validate_entries;
use crate::source::FrameSource;
use crate::transform::transform_frame;

/// Scheduling controls for [`run_batch`].
#[derive(Clone, Debug, Default)]
pub struct BatchOpts {
    /// Run jobs concurrently on a dedicated rayon pool.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
}

/// Generate one output per job from independent handles on the provider's source.
///
/// Fails as a whole only for batch-level configuration errors (empty job list, duplicate or
/// unusable video ids, zero `threads`). Per-job failures are recorded in the report, whose order
/// always matches `jobs`.
#[tracing::instrument(skip_all, fields(jobs = jobs.len(), parallel = opts.parallel))]
pub fn run_batch(
    jobs: &[BatchJob],
    provider: &dyn StreamProvider,
    opts: &BatchOpts,
    observer: &dyn BatchObserver,
) -> BenchResult<BatchReport> {
    validate_entries(jobs)?;

    let profiles: Vec<ProfileReport> = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| {
            jobs.par_iter()
                .map(|job| run_job(job, provider, observer))
                .collect()
        })
    } else {
        jobs.iter()
            .map(|job| run_job(job, provider, observer))
            .collect()
    };

    let report = BatchReport { profiles };
    tracing::debug!(
        succeeded = report.succeeded().len(),
        failed = report.failed().len(),
        "batch finished"
    );
    Ok(report)
}

fn run_job(
    job: &BatchJob,
    provider: &dyn StreamProvider,
    observer: &dyn BatchObserver,
) -> ProfileReport {
    let outcome = generate(job, provider, observer);
    observer.profile_finished(job, &outcome);
    ProfileReport {
        video_id: job.video_id.clone(),
        label: job.label(),
        outcome,
    }
}

fn generate(
    job: &BatchJob,
    provider: &dyn StreamProvider,
    observer: &dyn BatchObserver,
) -> BenchResult<LabeledOutput> {
    let mut source = provider.open_source()?;
    let meta = source.metadata();
    meta.validate()?;
    observer.profile_started(job, &meta);

    let mut sink = provider.open_sink(job)?;
    let written = stream_job(job, &meta, source.as_mut(), sink.as_mut(), observer);
    // Close the encoder before touching its output file.
    drop(sink);

    let frames_written = match written {
        Ok(n) => n,
        Err(e) => {
            if let Err(discard) = provider.discard_output(job) {
                tracing::warn!(video_id = %job.video_id, error = %discard, "failed to discard partial output");
            }
            return Err(e);
        }
    };

    if frames_written != meta.total_frames {
        tracing::debug!(
            video_id = %job.video_id,
            declared = meta.total_frames,
            written = frames_written,
            "source frame count differs from its metadata"
        );
    }

    Ok(LabeledOutput {
        video_id: job.video_id.clone(),
        location: provider.output_location(job),
        profile: job.profile,
        label: job.label(),
        frames_written,
    })
}

/// Read, transform and write every frame in order. Returns the number of frames written.
fn stream_job(
    job: &BatchJob,
    meta: &StreamMetadata,
    source: &mut dyn FrameSource,
    sink: &mut dyn FrameSink,
    observer: &dyn BatchObserver,
) -> BenchResult<u64> {
    sink.begin(SinkConfig::from(meta))?;

    let mut idx = FrameIndex(0);
    while let Some(frame) = source.next_frame()? {
        if !meta.matches(&frame) {
            return Err(BenchError::stream(format!(
                "source frame {} is {}x{}, expected {}x{}",
                idx.0,
                frame.width(),
                frame.height(),
                meta.width,
                meta.height
            )));
        }
        let out = transform_frame(frame, idx, meta, &job.profile);
        sink.push_frame(idx, &out)?;
        observer.frame_written(job, idx, meta.total_frames);
        idx = idx.next();
    }

    if idx.0 == 0 {
        return Err(BenchError::stream("source produced no frames"));
    }
    sink.end()?;
    Ok(idx.0)
}

fn build_thread_pool(threads: Option<usize>) -> BenchResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BenchError::config("batch 'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BenchError::stream(format!("failed to build rayon thread pool: {e}")))
}
