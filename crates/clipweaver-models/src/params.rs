//! Scene detection parameters forwarded to the analysis backend.
//!
//! Both values are opaque to the client: the backend decides what a
//! sensitivity of 0.3 means. The client only guarantees that whatever it
//! sends lies inside the declared domain.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scene detection sensitivity in `[0.1, 0.9]`, in steps of `0.1`.
///
/// Lower values split scenes more aggressively. The value is kept as a
/// count of tenths so the wire form is always an exact decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Sensitivity(u8);

impl Sensitivity {
    pub const MIN_TENTHS: u8 = 1;
    pub const MAX_TENTHS: u8 = 9;
    pub const DEFAULT_TENTHS: u8 = 4;

    pub const MIN: Self = Self(Self::MIN_TENTHS);
    pub const MAX: Self = Self(Self::MAX_TENTHS);

    /// Build from a slider value, clamping into range and snapping to the
    /// nearest step. NaN yields the default.
    pub fn from_value(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        let tenths = (value * 10.0).round().clamp(Self::MIN_TENTHS as f64, Self::MAX_TENTHS as f64);
        Self(tenths as u8)
    }

    /// Build from a count of tenths, clamping into range.
    pub fn from_tenths(tenths: u8) -> Self {
        Self(tenths.clamp(Self::MIN_TENTHS, Self::MAX_TENTHS))
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn value(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self(Self::DEFAULT_TENTHS)
    }
}

impl From<f64> for Sensitivity {
    fn from(value: f64) -> Self {
        Self::from_value(value)
    }
}

impl From<Sensitivity> for f64 {
    fn from(value: Sensitivity) -> Self {
        value.value()
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0.{}", self.0)
    }
}

/// Upper bound on the number of scenes the backend should produce, in `[1, 20]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct MaxScenes(u32);

impl MaxScenes {
    pub const MIN_VALUE: u32 = 1;
    pub const MAX_VALUE: u32 = 20;
    pub const DEFAULT_VALUE: u32 = 10;

    pub const MIN: Self = Self(Self::MIN_VALUE);
    pub const MAX: Self = Self(Self::MAX_VALUE);

    /// Build from a slider value, clamping into range.
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN_VALUE), i64::from(Self::MAX_VALUE));
        Self(clamped as u32)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for MaxScenes {
    fn default() -> Self {
        Self(Self::DEFAULT_VALUE)
    }
}

impl From<i64> for MaxScenes {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<MaxScenes> for u32 {
    fn from(value: MaxScenes) -> Self {
        value.0
    }
}

impl fmt::Display for MaxScenes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two tuning values sent alongside every upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Sent as the `scene_threshold` form field
    pub sensitivity: Sensitivity,
    /// Sent as the `max_scenes` form field
    pub max_scenes: MaxScenes,
}

impl AnalysisParams {
    pub fn new(sensitivity: Sensitivity, max_scenes: MaxScenes) -> Self {
        Self {
            sensitivity,
            max_scenes,
        }
    }

    /// Form fields in the order they are appended to the upload.
    pub fn form_fields(&self) -> [(&'static str, String); 2] {
        [
            ("scene_threshold", self.sensitivity.to_string()),
            ("max_scenes", self.max_scenes.to_string()),
        ]
    }
}
