use crate::foundation::core::{Frame, FrameIndex};
use crate::foundation::error::BenchResult;
use crate::source::FrameSource;

/// Indices `floor(i * total_frames / count)` for `i in 0..count`.
///
/// Empty when either argument is zero. When `count > total_frames` an index can repeat.
pub fn uniform_sample_indices(total_frames: u64, count: usize) -> Vec<FrameIndex> {
    if total_frames == 0 || count == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|i| {
            let idx = u128::from(i as u64) * u128::from(total_frames) / count as u128;
            FrameIndex(idx as u64)
        })
        .collect()
}

/// Pull `source` front to back and keep the frames at [`uniform_sample_indices`].
///
/// Stops reading as soon as the last wanted frame is seen. A stream that ends before its declared
/// length yields fewer samples rather than an error.
pub fn sample_frames(
    source: &mut dyn FrameSource,
    count: usize,
) -> BenchResult<Vec<(FrameIndex, Frame)>> {
    let wanted = uniform_sample_indices(source.metadata().total_frames, count);
    let mut out = Vec::with_capacity(wanted.len());
    let mut pending = wanted.iter().copied().peekable();
    let mut idx = FrameIndex(0);

    while pending.peek().is_some() {
        let Some(frame) = source.next_frame()? else {
            tracing::warn!(
                read = idx.0,
                wanted = wanted.len(),
                got = out.len(),
                "source ended before all samples were read"
            );
            break;
        };
        while let Some(&want) = pending.peek()
            && want == idx
        {
            out.push((idx, frame.clone()));
            pending.next();
        }
        idx = idx.next();
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/source/sample.rs"]
mod tests;
