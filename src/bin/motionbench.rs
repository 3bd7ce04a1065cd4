use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use motionbench::{
    BatchOpts, Catalog, FfmpegSink, FfmpegSinkOpts, FfmpegSource, FfmpegStreams, Frame,
    FrameIndex, FrameSink, FrameSource, GroundTruthManifest, MotionLabel, MotionProfile,
    SceneConfig, SceneSource, SinkConfig, TracingObserver,
};

#[derive(Parser, Debug)]
#[command(name = "motionbench", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the synthetic test scene to an MP4 (requires `ffmpeg` on PATH).
    Scene(SceneArgs),
    /// Generate one video per motion profile from a source clip.
    Simulate(SimulateArgs),
    /// Render a single transformed frame as a PNG.
    Frame(FrameArgs),
    /// Extract uniformly spaced PNG stills from a video.
    Sample(SampleArgs),
    /// Print a motion catalog as JSON.
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Clone, Copy)]
struct SceneShape {
    /// Frame width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Length in seconds.
    #[arg(long, default_value_t = 3)]
    seconds: u32,
}

impl SceneShape {
    fn config(self) -> SceneConfig {
        SceneConfig::with_duration(self.width, self.height, self.fps, self.seconds)
    }
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    shape: SceneShape,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Source video.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving `<video_id>.mp4` outputs.
    #[arg(long)]
    out_dir: PathBuf,

    /// Motion catalog JSON; defaults to the standard nine-profile set.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Add tracking right/left to the default catalog.
    #[arg(long, conflicts_with = "catalog")]
    tracking: bool,

    /// Generate profiles concurrently.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count for `--parallel`.
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Ground-truth manifest path; defaults to `<out-dir>/manifest.json`.
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Motion label, e.g. `pan_right`, `zoom_in`, `static`.
    #[arg(long)]
    motion: String,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Source video; the synthetic scene is used when absent.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Override the motion's default intensity.
    #[arg(long)]
    intensity: Option<f64>,

    #[command(flatten)]
    shape: SceneShape,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Source video.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of stills.
    #[arg(long, default_value_t = 8)]
    count: usize,

    /// Output directory for `frame_<index>.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Print the extended catalog including tracking shots.
    #[arg(long)]
    tracking: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Scene(args) => cmd_scene(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Catalog(args) => cmd_catalog(args),
    }
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let mut source = SceneSource::new(args.shape.config())?;
    let meta = source.metadata();

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&args.out));
    sink.begin(SinkConfig::from(&meta))?;
    let mut idx = FrameIndex(0);
    while let Some(frame) = source.next_frame()? {
        sink.push_frame(idx, &frame)?;
        idx = idx.next();
    }
    sink.end()
        .with_context(|| format!("encode scene '{}'", args.out.display()))?;

    tracing::info!(
        out = %args.out.display(),
        frames = idx.0,
        width = meta.width,
        height = meta.height,
        "wrote synthetic scene"
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)?,
        None if args.tracking => Catalog::extended(),
        None => Catalog::standard(),
    };

    let provider = FfmpegStreams::new(&args.in_path, &args.out_dir);
    let opts = BatchOpts {
        parallel: args.parallel,
        threads: args.threads,
    };
    let report = motionbench::run_batch(
        &catalog.entries,
        &provider,
        &opts,
        &TracingObserver::default(),
    )?;

    let manifest_path = args
        .manifest
        .clone()
        .unwrap_or_else(|| args.out_dir.join("manifest.json"));
    GroundTruthManifest::from_report(args.in_path.display().to_string(), &report)
        .write_to_path(&manifest_path)?;

    let failed = report.failed();
    eprintln!(
        "generated {}/{} videos in {}",
        report.succeeded().len(),
        report.profiles.len(),
        args.out_dir.display()
    );
    for p in &failed {
        if let Some(e) = p.error() {
            eprintln!("  FAILED {} ({}): {e}; no output written", p.label, p.video_id);
        }
    }
    eprintln!("wrote {}", manifest_path.display());

    if !failed.is_empty() {
        anyhow::bail!("{} of {} profiles failed", failed.len(), report.profiles.len());
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let label: MotionLabel = args
        .motion
        .parse()
        .with_context(|| format!("parse motion label '{}'", args.motion))?;
    let profile = MotionProfile::from_label(label, args.intensity)?;

    let mut source: Box<dyn FrameSource> = match &args.in_path {
        Some(path) => Box::new(FfmpegSource::open(path)?),
        None => Box::new(SceneSource::new(args.shape.config())?),
    };
    let meta = source.metadata();
    meta.validate()?;

    let frame = nth_frame(source.as_mut(), args.frame)?;
    let out = motionbench::transform_frame(frame, FrameIndex(args.frame), &meta, &profile);
    write_png(&out, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let mut source = FfmpegSource::open(&args.in_path)?;
    let samples = motionbench::sample_frames(&mut source, args.count)?;

    for (idx, frame) in &samples {
        let path = args.out_dir.join(format!("frame_{:05}.png", idx.0));
        write_png(frame, &path)?;
    }
    eprintln!(
        "wrote {} stills to {}",
        samples.len(),
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let catalog = if args.tracking {
        Catalog::extended()
    } else {
        Catalog::standard()
    };
    println!("{}", catalog.to_json_pretty()?);
    Ok(())
}

fn nth_frame(source: &mut dyn FrameSource, n: u64) -> anyhow::Result<Frame> {
    let mut idx = 0u64;
    while let Some(frame) = source.next_frame()? {
        if idx == n {
            return Ok(frame);
        }
        idx += 1;
    }
    anyhow::bail!("frame {n} is out of range: source has {idx} frames")
}

fn write_png(frame: &Frame, path: &Path) -> anyhow::Result<()> {
    motionbench::encode::ffmpeg::ensure_parent_dir(path)?;
    frame
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))
}
