use super::*;
use crate::batch::report::{LabeledOutput, ProfileReport};
use crate::motion::profile::{Direction, MotionProfile};

fn ok(profile: MotionProfile) -> ProfileReport {
    let video_id = profile.label().to_string();
    ProfileReport {
        video_id: video_id.clone(),
        label: profile.label(),
        outcome: Ok(LabeledOutput {
            location: format!("out/{video_id}.mp4"),
            video_id,
            profile,
            label: profile.label(),
            frames_written: 90,
        }),
    }
}

fn report() -> BatchReport {
    let tilt = MotionProfile::tilt(Direction::Negative, 30.0).unwrap();
    BatchReport {
        profiles: vec![
            ok(MotionProfile::pan(Direction::Positive, 50.0).unwrap()),
            ok(MotionProfile::stationary()),
            ProfileReport {
                video_id: "tilt_down".to_string(),
                label: tilt.label(),
                outcome: Err(BenchError::stream("encoder exploded")),
            },
        ],
    }
}

#[test]
fn manifest_splits_generated_and_failed() {
    let m = GroundTruthManifest::from_report("in.mp4", &report());
    assert_eq!(m.source, "in.mp4");
    assert_eq!(m.generated.len(), 2);

    let pan = &m.generated[0];
    assert_eq!(pan.label, "pan_right");
    assert_eq!(pan.kind, MotionKind::Pan);
    assert_eq!(pan.direction.as_deref(), Some("right"));
    assert_eq!(pan.intensity, 50.0);
    assert_eq!(pan.location, "out/pan_right.mp4");
    assert_eq!(pan.frames, 90);

    assert_eq!(m.generated[1].label, "static");
    assert_eq!(m.generated[1].direction, None);

    assert_eq!(m.failed.len(), 1);
    assert_eq!(m.failed[0].label, "tilt_down");
    assert!(m.failed[0].error.contains("encoder exploded"));
}

#[test]
fn manifest_json_shape() {
    let m = GroundTruthManifest::from_report("in.mp4", &report());
    let v: serde_json::Value = serde_json::from_str(&m.to_json_pretty().unwrap()).unwrap();
    assert_eq!(v["generated"][0]["kind"], "pan");
    assert_eq!(v["generated"][0]["direction"], "right");
    assert!(v["generated"][1].get("direction").is_none());
    assert_eq!(v["failed"][0]["video_id"], "tilt_down");
}

#[test]
fn manifest_writes_and_reads_back() {
    let path = std::path::PathBuf::from("target/manifest_unit/nested/manifest.json");
    let _ = std::fs::remove_file(&path);
    let m = GroundTruthManifest::from_report("in.mp4", &report());
    m.write_to_path(&path).unwrap();
    let back: GroundTruthManifest =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, m);
}
