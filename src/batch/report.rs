use crate::foundation::error::{BenchError, BenchResult};
use crate::motion::profile::{MotionLabel, MotionProfile};
use std::collections::BTreeMap;

/// A successfully generated video and the ground truth it encodes.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledOutput {
    pub video_id: String,
    /// Where the provider put the video (a file path for ffmpeg outputs).
    pub location: String,
    pub profile: MotionProfile,
    pub label: MotionLabel,
    pub frames_written: u64,
}

/// Outcome of one job.
#[derive(Debug)]
pub struct ProfileReport {
    pub video_id: String,
    pub label: MotionLabel,
    pub outcome: BenchResult<LabeledOutput>,
}

impl ProfileReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn output(&self) -> Option<&LabeledOutput> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&BenchError> {
        self.outcome.as_ref().err()
    }
}

/// Outcomes of a batch, in job order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub profiles: Vec<ProfileReport>,
}

impl BatchReport {
    pub fn succeeded(&self) -> Vec<&LabeledOutput> {
        self.profiles.iter().filter_map(ProfileReport::output).collect()
    }

    pub fn failed(&self) -> Vec<&ProfileReport> {
        self.profiles.iter().filter(|p| !p.is_success()).collect()
    }

    /// `true` when every job produced an output.
    pub fn is_complete(&self) -> bool {
        self.profiles.iter().all(ProfileReport::is_success)
    }

    /// Ground-truth label to video identifier for every successful job.
    ///
    /// When several jobs share a label the first one in job order wins.
    pub fn label_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for out in self.succeeded() {
            map.entry(out.label.to_string())
                .or_insert_with(|| out.video_id.clone());
        }
        map
    }
}
