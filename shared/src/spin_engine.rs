use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::config::{ConfigError, WheelConfig};
use crate::segment_table::{normalize_angle, Segment, SegmentTable, FULL_TURN};

/// Per-page-load counters. Lost on reload, never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub attempt_count: u32,
    pub total_debt_accrued: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one spin and return its 1-based attempt number.
    pub fn record_spin(&mut self, debt_increment: u64) -> u32 {
        self.attempt_count = self.attempt_count.saturating_add(1);
        self.total_debt_accrued = self.total_debt_accrued.saturating_add(debt_increment);
        self.attempt_count
    }
}

/// Everything decided for one spin, before any animation starts.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub segment: Segment,
    pub attempt: u32,
    pub guaranteed: bool,
    pub target_angle: f64,
    pub align_delta: f64,
    pub rotation_degrees: f64,
}

pub fn is_guaranteed_win(attempt: u32, period: u32) -> bool {
    period > 0 && attempt > 0 && attempt % period == 0
}

/// Walk the table in order, spending `r` on each span until it fits.
///
/// `r` is expected in `[0, total_span)`; anything else lands on the first segment.
pub fn weighted_pick(table: &SegmentTable, r: f64) -> &Segment {
    let mut remaining = r;
    for seg in table.segments() {
        let span = seg.span();
        if remaining < span {
            return seg;
        }
        remaining -= span;
    }
    table.first()
}

/// Clockwise rotation in `[0, 360)` that brings `target_angle` under the pointer.
pub fn align_delta(target_angle: f64, pointer_offset: f64) -> f64 {
    normalize_angle((pointer_offset - (target_angle % FULL_TURN)) % FULL_TURN)
}

pub fn final_rotation(base_turns: u32, align_delta: f64) -> f64 {
    base_turns as f64 * FULL_TURN + align_delta
}

/// Carry a wheel already resting at `current` degrees on to `rotation`, always turning forward.
///
/// The result rests at the same angle as `rotation` itself.
pub fn continue_rotation(current: f64, rotation: f64) -> f64 {
    (current / FULL_TURN).ceil() * FULL_TURN + rotation
}

/// Decide one spin. Session counters are bumped before the outcome is chosen.
pub fn decide_spin<R: Rng + ?Sized>(
    table: &SegmentTable,
    session: &mut SessionState,
    rng: &mut R,
    config: &WheelConfig,
) -> SpinOutcome {
    let attempt = session.record_spin(config.debt_per_spin);
    let guaranteed = is_guaranteed_win(attempt, config.guarantee_period);

    let (segment, target_angle) = if guaranteed {
        let win = table.win_segment();
        (win, win.midpoint() + config.win_angle_offset)
    } else {
        let r = rng.gen_range(0.0..table.total_span());
        let seg = weighted_pick(table, r);
        (seg, seg.midpoint())
    };

    let align_delta = align_delta(target_angle, config.pointer_offset);
    let rotation_degrees = final_rotation(config.base_turns, align_delta);

    log::debug!(
        "attempt {} guaranteed={} segment={:?} target_angle={} align_delta={}",
        attempt, guaranteed, segment.label, target_angle, align_delta
    );

    SpinOutcome {
        segment: segment.clone(),
        attempt,
        guaranteed,
        target_angle,
        align_delta,
        rotation_degrees,
    }
}

/// Owns the wheel, its tunables, the session counters and the random source.
#[derive(Debug)]
pub struct SpinEngine<R: Rng = StdRng> {
    table: SegmentTable,
    config: WheelConfig,
    session: SessionState,
    rng: R,
}

impl SpinEngine<StdRng> {
    pub fn new(table: SegmentTable, config: WheelConfig) -> Self {
        Self::with_rng(table, config, StdRng::from_entropy())
    }

    pub fn from_config(config: WheelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = config.segment_table()?;
        Ok(Self::new(table, config))
    }
}

impl<R: Rng> SpinEngine<R> {
    pub fn with_rng(table: SegmentTable, config: WheelConfig, rng: R) -> Self {
        Self {
            table,
            config,
            session: SessionState::new(),
            rng,
        }
    }

    pub fn spin(&mut self) -> SpinOutcome {
        decide_spin(&self.table, &mut self.session, &mut self.rng, &self.config)
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn table(&self) -> &SegmentTable {
        &self.table
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }
}
