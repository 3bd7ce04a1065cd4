use crate::foundation::error::{BenchError, BenchResult};
use crate::motion::profile::{Direction, MotionKind, MotionLabel, MotionProfile, MotionProfileDef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One requested output video: an identifier plus the profile to render it with.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    /// Output video identifier, unique within a batch.
    pub video_id: String,
    pub profile: MotionProfile,
}

impl CatalogEntry {
    /// Entry whose identifier is the profile's ground-truth label.
    pub fn labeled(profile: MotionProfile) -> Self {
        Self {
            video_id: profile.label().to_string(),
            profile,
        }
    }

    pub fn label(&self) -> MotionLabel {
        self.profile.label()
    }
}

/// Ordered list of videos to generate from one source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogDef {
    profiles: Vec<CatalogEntryDef>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogEntryDef {
    #[serde(flatten)]
    profile: MotionProfileDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    video_id: Option<String>,
}

impl Catalog {
    /// The nine-video benchmark set: pan and tilt both ways, zoom and dolly in and out, static.
    pub fn standard() -> Self {
        let entries = STANDARD
            .iter()
            .map(|&(kind, direction)| CatalogEntry::labeled(default_profile(kind, direction)))
            .collect();
        Self { entries }
    }

    /// The standard set followed by tracking right and left.
    pub fn extended() -> Self {
        let mut catalog = Self::standard();
        for direction in [Direction::Positive, Direction::Negative] {
            catalog.entries.push(CatalogEntry::labeled(default_profile(
                MotionKind::Tracking,
                Some(direction),
            )));
        }
        catalog
    }

    /// Parse a catalog from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> BenchResult<Self> {
        let def: CatalogDef = serde_json::from_reader(r).map_err(|e| {
            if e.is_data() {
                BenchError::config(format!("invalid motion catalog: {e}"))
            } else {
                BenchError::serde(format!("parse motion catalog JSON: {e}"))
            }
        })?;

        let mut entries = Vec::with_capacity(def.profiles.len());
        for (i, entry) in def.profiles.into_iter().enumerate() {
            let profile = MotionProfile::try_from(entry.profile)
                .map_err(|e| BenchError::config(format!("catalog entry {i}: {e}")))?;
            let video_id = entry
                .video_id
                .unwrap_or_else(|| profile.label().to_string());
            entries.push(CatalogEntry { video_id, profile });
        }
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BenchResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BenchError::config(format!("open motion catalog '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize back to the JSON form accepted by [`Catalog::from_reader`].
    pub fn to_json_pretty(&self) -> BenchResult<String> {
        let def = CatalogDef {
            profiles: self
                .entries
                .iter()
                .map(|e| CatalogEntryDef {
                    profile: e.profile.into(),
                    video_id: Some(e.video_id.clone()),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&def).map_err(|e| BenchError::serde(e.to_string()))
    }

    /// Reject empty catalogs and duplicate or unusable video identifiers.
    pub fn validate(&self) -> BenchResult<()> {
        validate_entries(&self.entries)
    }

    pub fn labels(&self) -> Vec<MotionLabel> {
        self.entries.iter().map(CatalogEntry::label).collect()
    }
}

/// Jobs of [`Catalog::standard`].
pub fn standard_catalog() -> Vec<CatalogEntry> {
    Catalog::standard().entries
}

/// Jobs of [`Catalog::extended`].
pub fn extended_catalog() -> Vec<CatalogEntry> {
    Catalog::extended().entries
}

pub(crate) fn validate_entries(entries: &[CatalogEntry]) -> BenchResult<()> {
    if entries.is_empty() {
        return Err(BenchError::config("motion catalog is empty"));
    }
    let mut ids = BTreeSet::new();
    for entry in entries {
        let id = entry.video_id.as_str();
        if id.is_empty() || id.contains(['/', '\\']) || id == "." || id == ".." {
            return Err(BenchError::config(format!("invalid video id '{id}'")));
        }
        if !ids.insert(id) {
            return Err(BenchError::config(format!("duplicate video id '{id}'")));
        }
    }
    Ok(())
}

const STANDARD: [(MotionKind, Option<Direction>); 9] = [
    (MotionKind::Pan, Some(Direction::Positive)),
    (MotionKind::Pan, Some(Direction::Negative)),
    (MotionKind::Tilt, Some(Direction::Positive)),
    (MotionKind::Tilt, Some(Direction::Negative)),
    (MotionKind::Zoom, Some(Direction::In)),
    (MotionKind::Zoom, Some(Direction::Out)),
    (MotionKind::Dolly, Some(Direction::In)),
    (MotionKind::Dolly, Some(Direction::Out)),
    (MotionKind::Static, None),
];

fn default_profile(kind: MotionKind, direction: Option<Direction>) -> MotionProfile {
    match (kind, direction) {
        (MotionKind::Static, _) | (_, None) => MotionProfile::stationary(),
        (kind, Some(direction)) => {
            MotionProfile::new(kind, Some(direction), kind.default_intensity())
                .unwrap_or_else(|_| MotionProfile::stationary())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/catalog.rs"]
mod tests;
