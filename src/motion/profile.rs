use crate::foundation::error::{BenchError, BenchResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of simulated camera movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionKind {
    /// Horizontal rotation on a fixed point.
    Pan,
    /// Vertical rotation on a fixed point.
    Tilt,
    /// Lateral camera translation. Rendered with pan arithmetic (no depth in the source).
    Tracking,
    /// Focal length change: centred crop then resample.
    Zoom,
    /// Camera moving toward or away from the scene: whole-frame rescale.
    Dolly,
    /// No movement; negative control.
    Static,
}

impl MotionKind {
    /// Every kind, in label order.
    pub const ALL: [MotionKind; 6] = [
        MotionKind::Pan,
        MotionKind::Tilt,
        MotionKind::Tracking,
        MotionKind::Zoom,
        MotionKind::Dolly,
        MotionKind::Static,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MotionKind::Pan => "pan",
            MotionKind::Tilt => "tilt",
            MotionKind::Tracking => "tracking",
            MotionKind::Zoom => "zoom",
            MotionKind::Dolly => "dolly",
            MotionKind::Static => "static",
        }
    }

    /// Benchmark default intensity: px/s for shifts, maximum scale for zoom/dolly.
    pub fn default_intensity(self) -> f64 {
        match self {
            MotionKind::Pan => 50.0,
            MotionKind::Tilt => 30.0,
            MotionKind::Tracking => 40.0,
            MotionKind::Zoom | MotionKind::Dolly => 1.5,
            MotionKind::Static => 0.0,
        }
    }

    /// Directions accepted by this kind (empty for `Static`).
    pub fn directions(self) -> &'static [Direction] {
        match self {
            MotionKind::Pan | MotionKind::Tilt | MotionKind::Tracking => {
                &[Direction::Positive, Direction::Negative]
            }
            MotionKind::Zoom | MotionKind::Dolly => &[Direction::In, Direction::Out],
            MotionKind::Static => &[],
        }
    }

    /// `true` when intensity is a speed in pixels per second.
    pub fn is_shift(self) -> bool {
        matches!(
            self,
            MotionKind::Pan | MotionKind::Tilt | MotionKind::Tracking
        )
    }

    /// `true` when intensity is a maximum scale factor.
    pub fn is_scale(self) -> bool {
        matches!(self, MotionKind::Zoom | MotionKind::Dolly)
    }
}

impl fmt::Display for MotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotionKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MotionKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| BenchError::config(format!("unknown motion kind '{s}'")))
    }
}

/// Direction of a motion. Which variants are valid depends on the [`MotionKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Right for pan/tracking, up for tilt. Content offset grows from zero.
    Positive,
    /// Left for pan/tracking, down for tilt.
    Negative,
    /// Magnification grows over the video.
    In,
    /// Magnification shrinks over the video.
    Out,
}

impl Direction {
    /// Label word for this direction under `kind`, or `None` if the pair is invalid.
    pub fn word(self, kind: MotionKind) -> Option<&'static str> {
        let word = match (kind, self) {
            (MotionKind::Pan | MotionKind::Tracking, Direction::Positive) => "right",
            (MotionKind::Pan | MotionKind::Tracking, Direction::Negative) => "left",
            (MotionKind::Tilt, Direction::Positive) => "up",
            (MotionKind::Tilt, Direction::Negative) => "down",
            (MotionKind::Zoom | MotionKind::Dolly, Direction::In) => "in",
            (MotionKind::Zoom | MotionKind::Dolly, Direction::Out) => "out",
            _ => return None,
        };
        Some(word)
    }

    /// Inverse of [`Direction::word`].
    pub fn from_word(kind: MotionKind, word: &str) -> Option<Self> {
        kind.directions()
            .iter()
            .copied()
            .find(|d| d.word(kind) == Some(word))
    }
}

/// Canonical ground-truth label: `"{kind}_{direction}"`, or `"static"`.
///
/// Only valid kind/direction pairs can be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MotionLabel {
    kind: MotionKind,
    direction: Option<Direction>,
}

impl MotionLabel {
    /// Create a label, rejecting kind/direction pairs the kind does not accept.
    pub fn new(kind: MotionKind, direction: Option<Direction>) -> BenchResult<Self> {
        match (kind, direction) {
            (MotionKind::Static, None) => {}
            (MotionKind::Static, Some(d)) => {
                return Err(BenchError::config(format!(
                    "static motion takes no direction, got {d:?}"
                )));
            }
            (k, None) => {
                return Err(BenchError::config(format!("{k} motion requires a direction")));
            }
            (k, Some(d)) if d.word(k).is_none() => {
                return Err(BenchError::config(format!(
                    "direction {d:?} is not valid for {k} motion"
                )));
            }
            _ => {}
        }
        Ok(Self { kind, direction })
    }

    pub fn kind(&self) -> MotionKind {
        self.kind
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }
}

impl fmt::Display for MotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction.and_then(|d| d.word(self.kind)) {
            Some(word) => write!(f, "{}_{}", self.kind, word),
            None => f.write_str(self.kind.as_str()),
        }
    }
}

impl FromStr for MotionLabel {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, word) = match s.split_once('_') {
            Some((k, w)) => (k.parse::<MotionKind>()?, Some(w)),
            None => (s.parse::<MotionKind>()?, None),
        };
        let direction = match word {
            Some(w) => Some(Direction::from_word(kind, w).ok_or_else(|| {
                BenchError::config(format!("unknown direction '{w}' for {kind} motion"))
            })?),
            None => None,
        };
        Self::new(kind, direction)
    }
}

impl TryFrom<String> for MotionLabel {
    type Error = BenchError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MotionLabel> for String {
    fn from(label: MotionLabel) -> Self {
        label.to_string()
    }
}

/// Declarative description of the transform applied to one output video.
///
/// Constructed through validating constructors only, so every value is a legal kind/direction
/// pair with a usable intensity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MotionProfileDef", into = "MotionProfileDef")]
pub struct MotionProfile {
    label: MotionLabel,
    intensity: f64,
}

impl MotionProfile {
    pub fn new(kind: MotionKind, direction: Option<Direction>, intensity: f64) -> BenchResult<Self> {
        let label = MotionLabel::new(kind, direction)?;
        Self::from_label(label, Some(intensity))
    }

    /// Build a profile for `label`, using the kind's default when `intensity` is `None`.
    pub fn from_label(label: MotionLabel, intensity: Option<f64>) -> BenchResult<Self> {
        let kind = label.kind();
        if kind == MotionKind::Static {
            return Ok(Self {
                label,
                intensity: 0.0,
            });
        }

        let intensity = intensity.unwrap_or_else(|| kind.default_intensity());
        if !intensity.is_finite() || intensity <= 0.0 {
            return Err(BenchError::config(format!(
                "{label} intensity must be positive and finite, got {intensity}"
            )));
        }
        if kind == MotionKind::Zoom && intensity < 1.0 {
            return Err(BenchError::config(format!(
                "{label} maximum zoom must be >= 1, got {intensity}"
            )));
        }
        Ok(Self { label, intensity })
    }

    pub fn pan(direction: Direction, px_per_sec: f64) -> BenchResult<Self> {
        Self::new(MotionKind::Pan, Some(direction), px_per_sec)
    }

    pub fn tilt(direction: Direction, px_per_sec: f64) -> BenchResult<Self> {
        Self::new(MotionKind::Tilt, Some(direction), px_per_sec)
    }

    pub fn tracking(direction: Direction, px_per_sec: f64) -> BenchResult<Self> {
        Self::new(MotionKind::Tracking, Some(direction), px_per_sec)
    }

    pub fn zoom(direction: Direction, max_zoom: f64) -> BenchResult<Self> {
        Self::new(MotionKind::Zoom, Some(direction), max_zoom)
    }

    pub fn dolly(direction: Direction, max_scale: f64) -> BenchResult<Self> {
        Self::new(MotionKind::Dolly, Some(direction), max_scale)
    }

    /// The identity profile.
    pub fn stationary() -> Self {
        Self {
            label: MotionLabel {
                kind: MotionKind::Static,
                direction: None,
            },
            intensity: 0.0,
        }
    }

    pub fn kind(&self) -> MotionKind {
        self.label.kind()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.label.direction()
    }

    /// Pixels per second (shifts) or maximum scale factor (zoom/dolly). Zero for static.
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn label(&self) -> MotionLabel {
        self.label
    }
}

/// JSON-facing form of a [`MotionProfile`]; directions are label words.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct MotionProfileDef {
    pub(crate) kind: MotionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) intensity: Option<f64>,
}

impl TryFrom<MotionProfileDef> for MotionProfile {
    type Error = BenchError;

    fn try_from(def: MotionProfileDef) -> Result<Self, Self::Error> {
        let direction = match def.direction.as_deref() {
            Some(word) => Some(Direction::from_word(def.kind, word).ok_or_else(|| {
                BenchError::config(format!(
                    "unknown direction '{word}' for {} motion",
                    def.kind
                ))
            })?),
            None => None,
        };
        let label = MotionLabel::new(def.kind, direction)?;
        MotionProfile::from_label(label, def.intensity)
    }
}

impl From<MotionProfile> for MotionProfileDef {
    fn from(p: MotionProfile) -> Self {
        Self {
            kind: p.kind(),
            direction: p
                .direction()
                .and_then(|d| d.word(p.kind()))
                .map(str::to_string),
            intensity: (p.kind() != MotionKind::Static).then_some(p.intensity),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/profile.rs"]
mod tests;
