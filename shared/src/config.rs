use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::segment_table::{Segment, SegmentTable, SegmentTableError};

/// Every Nth spin of a session is forced onto the winning segment.
pub const GUARANTEE_PERIOD: u32 = 5;
/// Added to the running debt counter on every spin, whatever the result.
pub const DEBT_PER_SPIN: u64 = 50;
/// Full revolutions before the wheel settles. Purely visual.
pub const BASE_TURNS: u32 = 5;
/// Pointer sits at the top of the wheel, the same zero as the segments.
pub const POINTER_OFFSET: f64 = 0.0;
/// Fine calibration for where a guaranteed win lands inside the prize zone.
pub const WIN_ANGLE_OFFSET: f64 = 0.0;
/// Time between applying the rotation and showing the result.
pub const SPIN_DURATION_MS: u32 = 4000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("guarantee_period must be at least 1")]
    ZeroGuaranteePeriod,
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    #[error("invalid segments: {0}")]
    Segments(#[from] SegmentTableError),
}

/// Tunables for one wheel widget. Missing JSON fields keep their defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    pub guarantee_period: u32,
    pub debt_per_spin: u64,
    pub base_turns: u32,
    pub pointer_offset: f64,
    pub win_angle_offset: f64,
    pub spin_duration_ms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            guarantee_period: GUARANTEE_PERIOD,
            debt_per_spin: DEBT_PER_SPIN,
            base_turns: BASE_TURNS,
            pointer_offset: POINTER_OFFSET,
            win_angle_offset: WIN_ANGLE_OFFSET,
            spin_duration_ms: SPIN_DURATION_MS,
            segments: None,
        }
    }
}

impl WheelConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WheelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.guarantee_period == 0 {
            return Err(ConfigError::ZeroGuaranteePeriod);
        }
        if !self.pointer_offset.is_finite() {
            return Err(ConfigError::NonFinite("pointer_offset"));
        }
        if !self.win_angle_offset.is_finite() {
            return Err(ConfigError::NonFinite("win_angle_offset"));
        }
        self.segment_table()?;
        Ok(())
    }

    /// The configured wheel, or the standard one when none is given.
    pub fn segment_table(&self) -> Result<SegmentTable, SegmentTableError> {
        match &self.segments {
            Some(segments) => SegmentTable::new(segments.clone()),
            None => Ok(SegmentTable::standard()),
        }
    }
}
