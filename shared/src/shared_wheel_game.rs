use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::spin_engine::SpinOutcome;

/// Where the widget is in its spin cycle
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelPhase {
    #[default]
    Idle,
    Spinning,
    ResultShown,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WheelGameError {
    #[error("a spin is already in progress")]
    AlreadySpinning,
    #[error("no spin is in progress")]
    NotSpinning,
    #[error("there is no result to close")]
    NoResult,
}

/// Represents the current state of the wheel widget
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct WheelGame {
    pub phase: WheelPhase,
    pub pending: Option<SpinOutcome>,
    pub last_result: Option<SpinOutcome>,
}

impl WheelGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == WheelPhase::Spinning
    }

    /// The spin button only stays disabled while an outcome is pending.
    pub fn trigger_enabled(&self) -> bool {
        !self.is_spinning()
    }

    pub fn start_spin(&mut self, outcome: SpinOutcome) -> Result<(), WheelGameError> {
        if self.is_spinning() {
            return Err(WheelGameError::AlreadySpinning);
        }
        self.phase = WheelPhase::Spinning;
        self.pending = Some(outcome);
        self.last_result = None;
        Ok(())
    }

    pub fn complete_spin(&mut self) -> Result<&SpinOutcome, WheelGameError> {
        let outcome = match (self.phase, self.pending.take()) {
            (WheelPhase::Spinning, Some(outcome)) => outcome,
            _ => return Err(WheelGameError::NotSpinning),
        };
        self.phase = WheelPhase::ResultShown;
        Ok(self.last_result.insert(outcome))
    }

    /// Claim or dismiss the shown result.
    pub fn close(&mut self) -> Result<(), WheelGameError> {
        match self.phase {
            WheelPhase::ResultShown => {
                self.phase = WheelPhase::Idle;
                Ok(())
            }
            WheelPhase::Spinning => Err(WheelGameError::AlreadySpinning),
            WheelPhase::Idle => Err(WheelGameError::NoResult),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment_table::SegmentTable;

    fn outcome() -> SpinOutcome {
        let win = SegmentTable::standard().win_segment().clone();
        SpinOutcome {
            segment: win,
            attempt: 5,
            guaranteed: true,
            target_angle: 280.0,
            align_delta: 80.0,
            rotation_degrees: 1880.0,
        }
    }

    #[test]
    fn test_full_cycle() {
        let mut game = WheelGame::new();
        assert_eq!(game.phase, WheelPhase::Idle);
        assert!(game.trigger_enabled());

        game.start_spin(outcome()).unwrap();
        assert!(game.is_spinning());
        assert!(!game.trigger_enabled());

        let shown = game.complete_spin().unwrap().clone();
        assert_eq!(shown, outcome());
        assert_eq!(game.phase, WheelPhase::ResultShown);
        assert!(game.trigger_enabled());

        game.close().unwrap();
        assert_eq!(game.phase, WheelPhase::Idle);
        assert_eq!(game.last_result, Some(outcome()));
    }

    #[test]
    fn test_one_spin_in_flight() {
        let mut game = WheelGame::new();
        game.start_spin(outcome()).unwrap();
        assert_eq!(game.start_spin(outcome()), Err(WheelGameError::AlreadySpinning));
        assert_eq!(game.close(), Err(WheelGameError::AlreadySpinning));
    }

    #[test]
    fn test_respin_from_result_hides_previous() {
        let mut game = WheelGame::new();
        game.start_spin(outcome()).unwrap();
        game.complete_spin().unwrap();
        game.start_spin(outcome()).unwrap();
        assert!(game.last_result.is_none());
        assert!(game.pending.is_some());
    }

    #[test]
    fn test_illegal_transitions() {
        let mut game = WheelGame::new();
        assert_eq!(game.complete_spin().map(|_| ()), Err(WheelGameError::NotSpinning));
        assert_eq!(game.close(), Err(WheelGameError::NoResult));
    }
}
