use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Frame, FrameIndex};
use crate::foundation::error::{BenchError, BenchResult};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

/// Where and how [`FfmpegSink`] writes its MP4.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    pub out_path: PathBuf,
    /// When `false`, an existing file at `out_path` fails `begin`.
    pub overwrite: bool,
}

impl FfmpegSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// H.264 encoder fed through a pipe: each pushed [`Frame`] is written to `ffmpeg` as raw `rgb24`.
///
/// Dropping a sink that was begun but never ended kills the encoder, leaving a partial file for
/// the caller to discard.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    encoder: Option<Encoder>,
}

/// A running `ffmpeg` process plus the stream it was configured for.
struct Encoder {
    child: Child,
    stdin: ChildStdin,
    stderr: StderrDrain,
    cfg: SinkConfig,
    last: Option<FrameIndex>,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
        }
    }

    pub fn out_path(&self) -> &Path {
        &self.opts.out_path
    }

    fn check_config(&self, cfg: &SinkConfig) -> BenchResult<()> {
        if cfg.frame_rate == 0 || cfg.width == 0 || cfg.height == 0 {
            return Err(BenchError::config(format!(
                "cannot encode {}x{} at {} fps",
                cfg.width, cfg.height, cfg.frame_rate
            )));
        }
        // yuv420p subsamples chroma 2x2.
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            return Err(BenchError::stream(format!(
                "{}x{} cannot be encoded as yuv420p: width and height must be even",
                cfg.width, cfg.height
            )));
        }
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(BenchError::stream(format!(
                "refusing to overwrite '{}'",
                self.opts.out_path.display()
            )));
        }
        Ok(())
    }
}

/// Command-line arguments (after the program name) for encoding a `cfg`-shaped rgb24 stream.
fn encoder_args(cfg: &SinkConfig, overwrite: bool) -> Vec<String> {
    let mut args: Vec<String> = vec![if overwrite { "-y" } else { "-n" }.into()];
    args.extend(
        [
            "-loglevel", "error", "-f", "rawvideo", "-pix_fmt", "rgb24", "-s",
        ]
        .map(String::from),
    );
    args.push(format!("{}x{}", cfg.width, cfg.height));
    args.push("-r".into());
    args.push(cfg.frame_rate.to_string());
    args.extend(
        [
            "-i", "pipe:0", "-an", "-c:v", "libx264", "-pix_fmt", "yuv420p", "-movflags",
            "+faststart",
        ]
        .map(String::from),
    );
    args
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> BenchResult<()> {
        self.check_config(&cfg)?;
        if self.encoder.is_some() {
            return Err(BenchError::stream("ffmpeg sink already begun"));
        }
        ensure_parent_dir(&self.opts.out_path)?;
        if !is_ffmpeg_on_path() {
            return Err(BenchError::stream("cannot encode MP4: ffmpeg not found on PATH"));
        }

        let mut child = Command::new("ffmpeg")
            .args(encoder_args(&cfg, self.opts.overwrite))
            .arg(&self.opts.out_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| BenchError::stream(format!("could not start ffmpeg encoder: {e}")))?;
        let stderr = StderrDrain::spawn(&mut child)?;
        let Some(stdin) = child.stdin.take() else {
            let _ = child.kill();
            return Err(BenchError::stream("ffmpeg encoder has no stdin pipe"));
        };

        tracing::debug!(
            out = %self.opts.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            fps = cfg.frame_rate,
            "ffmpeg encoder started"
        );
        self.encoder = Some(Encoder {
            child,
            stdin,
            stderr,
            cfg,
            last: None,
        });
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> BenchResult<()> {
        let enc = self
            .encoder
            .as_mut()
            .ok_or_else(|| BenchError::stream("push_frame called before begin"))?;
        if enc.last.is_some_and(|last| idx <= last) {
            return Err(BenchError::stream(format!(
                "frame {} pushed after frame {}",
                idx.0,
                enc.last.map_or(0, |l| l.0)
            )));
        }
        if frame.dimensions() != (enc.cfg.width, enc.cfg.height) {
            return Err(BenchError::stream(format!(
                "frame {} is {}x{}, encoder expects {}x{}",
                idx.0,
                frame.width(),
                frame.height(),
                enc.cfg.width,
                enc.cfg.height
            )));
        }
        enc.last = Some(idx);
        enc.stdin
            .write_all(frame.as_raw())
            .map_err(|e| BenchError::stream(format!("ffmpeg encoder rejected frame {}: {e}", idx.0)))
    }

    fn end(&mut self) -> BenchResult<()> {
        let Encoder {
            mut child,
            stdin,
            stderr,
            ..
        } = self
            .encoder
            .take()
            .ok_or_else(|| BenchError::stream("end called before begin"))?;

        // Closing stdin is the end-of-stream signal.
        drop(stdin);
        let status = child
            .wait()
            .map_err(|e| BenchError::stream(format!("lost track of ffmpeg encoder: {e}")))?;
        let log = stderr.collect()?;
        if !status.success() {
            return Err(BenchError::stream(format!(
                "ffmpeg encoder for '{}' failed ({status}): {log}",
                self.opts.out_path.display()
            )));
        }
        Ok(())
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        if let Some(mut enc) = self.encoder.take() {
            let _ = enc.child.kill();
            let _ = enc.child.wait();
        }
    }
}

/// Background reader for a child's stderr, so a chatty process never blocks on a full pipe.
pub(crate) struct StderrDrain(JoinHandle<std::io::Result<Vec<u8>>>);

impl StderrDrain {
    pub(crate) fn spawn(child: &mut Child) -> BenchResult<Self> {
        let mut pipe = child
            .stderr
            .take()
            .ok_or_else(|| BenchError::stream("child process has no stderr pipe"))?;
        Ok(Self(std::thread::spawn(move || {
            let mut bytes = Vec::new();
            pipe.read_to_end(&mut bytes)?;
            Ok(bytes)
        })))
    }

    /// Wait for the pipe to close and return its text, trimmed.
    pub(crate) fn collect(self) -> BenchResult<String> {
        let bytes = self
            .0
            .join()
            .map_err(|_| BenchError::stream("stderr reader thread panicked"))?
            .map_err(|e| BenchError::stream(format!("reading child stderr: {e}")))?;
        Ok(String::from_utf8_lossy(&bytes).trim().to_owned())
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> BenchResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory '{}'", parent.display()))?;
    }
    Ok(())
}

pub fn is_ffmpeg_on_path() -> bool {
    runs_with_version_flag("ffmpeg")
}

pub fn is_ffprobe_on_path() -> bool {
    runs_with_version_flag("ffprobe")
}

fn runs_with_version_flag(tool: &str) -> bool {
    Command::new(tool)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}
