use crate::encode::ffmpeg::{StderrDrain, is_ffmpeg_on_path};
use crate::foundation::core::{Frame, StreamMetadata};
use crate::foundation::error::{BenchError, BenchResult};
use crate::source::FrameSource;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};

/// Read stream metadata of the first video stream in `source_path` via `ffprobe`.
///
/// The frame rate is the stream's `r_frame_rate` truncated to an integer. The frame count is the
/// container's `nb_frames` when present, otherwise `duration * fps` rounded. The result is not
/// validated; callers decide whether degenerate metadata is an error.
pub fn probe_video(source_path: &Path) -> BenchResult<StreamMetadata> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
        r_frame_rate: Option<String>,
        nb_frames: Option<String>,
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        streams: Vec<ProbeStream>,
        format: Option<ProbeFormat>,
    }

    let out = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(source_path)
        .output()
        .map_err(|e| BenchError::stream(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(BenchError::stream(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| BenchError::serde(format!("ffprobe json parse failed: {e}")))?;
    let video = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| {
            BenchError::stream(format!(
                "no video stream found in '{}'",
                source_path.display()
            ))
        })?;
    let width = video
        .width
        .ok_or_else(|| BenchError::stream("missing video width from ffprobe"))?;
    let height = video
        .height
        .ok_or_else(|| BenchError::stream("missing video height from ffprobe"))?;
    let (fps_num, fps_den) = parse_ff_ratio(video.r_frame_rate.as_deref().unwrap_or("0/1"))
        .ok_or_else(|| BenchError::stream("invalid video r_frame_rate"))?;

    let total_frames = match video.nb_frames.as_deref().and_then(|s| s.parse::<u64>().ok()) {
        Some(n) => n,
        None => {
            let duration = video
                .duration
                .as_deref()
                .or(parsed.format.as_ref().and_then(|f| f.duration.as_deref()))
                .and_then(|s| s.parse::<f64>().ok())
                .unwrap_or(0.0);
            (duration * f64::from(fps_num) / f64::from(fps_den))
                .round()
                .max(0.0) as u64
        }
    };

    Ok(StreamMetadata {
        frame_rate: fps_num / fps_den,
        width,
        height,
        total_frames,
    })
}

fn parse_ff_ratio(s: &str) -> Option<(u32, u32)> {
    let mut parts = s.split('/');
    let a = parts.next()?.trim().parse::<u32>().ok()?;
    let b = match parts.next() {
        Some(b) => b.trim().parse::<u32>().ok()?,
        None => 1,
    };
    if b == 0 {
        return None;
    }
    Some((a, b))
}

/// Sequential decoder: one `ffmpeg` process writing raw `rgb24` frames to a pipe.
pub struct FfmpegSource {
    path: PathBuf,
    meta: StreamMetadata,

    child: Option<Child>,
    stdout: Option<ChildStdout>,
    stderr: Option<StderrDrain>,

    delivered: u64,
}

impl FfmpegSource {
    /// Probe `path` and start decoding its first video stream.
    pub fn open(path: impl AsRef<Path>) -> BenchResult<Self> {
        let path = path.as_ref();
        let meta = probe_video(path)?;
        if meta.width == 0 || meta.height == 0 {
            return Err(BenchError::stream(format!(
                "'{}' reports zero-sized frames",
                path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(BenchError::stream(
                "ffmpeg is required for video decoding, but was not found on PATH",
            ));
        }

        let mut child = Command::new("ffmpeg")
            .args(["-v", "error", "-i"])
            .arg(path)
            .args([
                "-map", "0:v:0", "-f", "rawvideo", "-pix_fmt", "rgb24", "pipe:1",
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                BenchError::stream(format!("failed to run ffmpeg for video decode: {e}"))
            })?;

        let stderr = StderrDrain::spawn(&mut child)?;
        let Some(stdout) = child.stdout.take() else {
            let _ = child.kill();
            return Err(BenchError::stream("ffmpeg decoder has no stdout pipe"));
        };

        tracing::debug!(
            source = %path.display(),
            width = meta.width,
            height = meta.height,
            fps = meta.frame_rate,
            frames = meta.total_frames,
            "ffmpeg decoder started"
        );

        Ok(Self {
            path: path.to_path_buf(),
            meta,
            child: Some(child),
            stdout: Some(stdout),
            stderr: Some(stderr),
            delivered: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Frames returned so far.
    pub fn frames_delivered(&self) -> u64 {
        self.delivered
    }

    fn finish(&mut self) -> BenchResult<()> {
        drop(self.stdout.take());
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };
        let status = child
            .wait()
            .map_err(|e| BenchError::stream(format!("failed to wait for ffmpeg decode: {e}")))?;
        let log = match self.stderr.take() {
            Some(drain) => drain.collect()?,
            None => String::new(),
        };
        if !status.success() {
            return Err(BenchError::stream(format!(
                "ffmpeg video decode failed for '{}' (status {status}): {log}",
                self.path.display(),
            )));
        }
        Ok(())
    }
}

impl FrameSource for FfmpegSource {
    fn metadata(&self) -> StreamMetadata {
        self.meta
    }

    fn next_frame(&mut self) -> BenchResult<Option<Frame>> {
        let Some(stdout) = self.stdout.as_mut() else {
            return Ok(None);
        };

        let mut buf = vec![0u8; self.meta.frame_bytes()];
        let got = read_full(stdout, &mut buf).map_err(|e| {
            BenchError::stream(format!(
                "failed reading decoded frames from '{}': {e}",
                self.path.display()
            ))
        })?;

        if got == 0 {
            self.finish()?;
            return Ok(None);
        }
        if got < buf.len() {
            let _ = self.finish();
            return Err(BenchError::stream(format!(
                "truncated frame {} from '{}': got {got} of {} bytes",
                self.delivered,
                self.path.display(),
                buf.len()
            )));
        }

        let frame = Frame::from_raw(self.meta.width, self.meta.height, buf)
            .ok_or_else(|| BenchError::stream("decoded frame buffer has the wrong size"))?;
        self.delivered += 1;
        Ok(Some(frame))
    }
}

impl Drop for FfmpegSource {
    fn drop(&mut self) {
        drop(self.stdout.take());
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// Fill `buf` from `r`, stopping early only at end of stream. Returns bytes read.
fn read_full(r: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
