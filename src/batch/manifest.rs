use crate::batch::report::BatchReport;
use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::error::{BenchError, BenchResult};
use crate::motion::profile::MotionKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ground truth for downstream evaluation: which video carries which motion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundTruthManifest {
    /// Source footage every output was derived from.
    pub source: String,
    pub generated: Vec<GeneratedVideo>,
    #[serde(default)]
    pub failed: Vec<FailedVideo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedVideo {
    pub label: String,
    pub kind: MotionKind,
    /// Direction word as it appears in the label; absent for static footage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    pub intensity: f64,
    pub video_id: String,
    pub location: String,
    pub frames: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailedVideo {
    pub label: String,
    pub video_id: String,
    pub error: String,
}

impl GroundTruthManifest {
    pub fn from_report(source: impl Into<String>, report: &BatchReport) -> Self {
        let mut generated = Vec::new();
        let mut failed = Vec::new();
        for p in &report.profiles {
            match &p.outcome {
                Ok(out) => generated.push(GeneratedVideo {
                    label: out.label.to_string(),
                    kind: out.profile.kind(),
                    direction: out
                        .profile
                        .direction()
                        .and_then(|d| d.word(out.profile.kind()))
                        .map(str::to_string),
                    intensity: out.profile.intensity(),
                    video_id: out.video_id.clone(),
                    location: out.location.clone(),
                    frames: out.frames_written,
                }),
                Err(e) => failed.push(FailedVideo {
                    label: p.label.to_string(),
                    video_id: p.video_id.clone(),
                    error: e.to_string(),
                }),
            }
        }
        Self {
            source: source.into(),
            generated,
            failed,
        }
    }

    pub fn to_json_pretty(&self) -> BenchResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BenchError::serde(e.to_string()))
    }

    /// Write pretty JSON to `path`, creating parent directories.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> BenchResult<()> {
        use anyhow::Context as _;

        let path = path.as_ref();
        ensure_parent_dir(path)?;
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        std::fs::write(path, json)
            .with_context(|| format!("failed to write manifest '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/manifest.rs"]
mod tests;
