use std::future::Future;

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::{ConfigError, WheelConfig};
use crate::presentation::{claim_summary, debt_display, present_outcome, PresentationDirective};
use crate::shared_wheel_game::{WheelGame, WheelPhase};
use crate::spin_engine::{SessionState, SpinEngine, SpinOutcome};

/// Rendering sink the controller drives. Implementations silently skip any
/// call whose underlying element is not attached.
pub trait WheelSurface {
    /// Snap the wheel back to 0 degrees without animating.
    fn reset_rotation(&mut self);
    fn apply_rotation(&mut self, degrees: f64, duration_ms: u32);
    fn set_trigger_enabled(&mut self, enabled: bool);
    fn show_result(&mut self, directive: &PresentationDirective);
    fn hide_result(&mut self);
    fn show_debt(&mut self, text: &str);
    fn close_modal(&mut self);
    fn reveal_content(&mut self);
    fn play_audio(&mut self);
    fn show_summary(&mut self, text: &str);
}

/// A surface that is not there at all.
impl<S: WheelSurface> WheelSurface for Option<S> {
    fn reset_rotation(&mut self) {
        if let Some(s) = self { s.reset_rotation() }
    }
    fn apply_rotation(&mut self, degrees: f64, duration_ms: u32) {
        if let Some(s) = self { s.apply_rotation(degrees, duration_ms) }
    }
    fn set_trigger_enabled(&mut self, enabled: bool) {
        if let Some(s) = self { s.set_trigger_enabled(enabled) }
    }
    fn show_result(&mut self, directive: &PresentationDirective) {
        if let Some(s) = self { s.show_result(directive) }
    }
    fn hide_result(&mut self) {
        if let Some(s) = self { s.hide_result() }
    }
    fn show_debt(&mut self, text: &str) {
        if let Some(s) = self { s.show_debt(text) }
    }
    fn close_modal(&mut self) {
        if let Some(s) = self { s.close_modal() }
    }
    fn reveal_content(&mut self) {
        if let Some(s) = self { s.reveal_content() }
    }
    fn play_audio(&mut self) {
        if let Some(s) = self { s.play_audio() }
    }
    fn show_summary(&mut self, text: &str) {
        if let Some(s) = self { s.show_summary(text) }
    }
}

/// Ties the spin engine to the widget phase and pushes every visible effect
/// through a [`WheelSurface`].
#[derive(Debug)]
pub struct LotteryController<R: Rng = StdRng> {
    engine: SpinEngine<R>,
    game: WheelGame,
}

impl LotteryController<StdRng> {
    pub fn from_config(config: WheelConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(SpinEngine::from_config(config)?))
    }
}

impl<R: Rng> LotteryController<R> {
    pub fn new(engine: SpinEngine<R>) -> Self {
        Self {
            engine,
            game: WheelGame::new(),
        }
    }

    pub fn attach<S: WheelSurface + ?Sized>(&self, surface: &mut S) {
        surface.reset_rotation();
        surface.set_trigger_enabled(self.game.trigger_enabled());
    }

    /// Decide the spin and start the wheel turning.
    ///
    /// Returns `None` without touching the session while another spin is pending.
    pub fn begin_spin<S: WheelSurface + ?Sized>(&mut self, surface: &mut S) -> Option<SpinOutcome> {
        if self.game.is_spinning() {
            log::warn!("Ignoring spin request while the wheel is still turning");
            return None;
        }

        surface.set_trigger_enabled(false);
        surface.hide_result();

        let outcome = self.engine.spin();
        self.game.start_spin(outcome.clone()).ok()?;
        surface.apply_rotation(outcome.rotation_degrees, self.engine.config().spin_duration_ms);
        Some(outcome)
    }

    /// Show the outcome decided by [`begin_spin`](Self::begin_spin) once the animation is over.
    pub fn finish_spin<S: WheelSurface + ?Sized>(&mut self, surface: &mut S) -> Option<PresentationDirective> {
        let directive = match self.game.complete_spin() {
            Ok(outcome) => present_outcome(&outcome.segment),
            Err(err) => {
                log::warn!("Cannot finish spin: {}", err);
                return None;
            }
        };

        surface.show_result(&directive);
        surface.show_debt(&debt_display(self.engine.session().total_debt_accrued));
        surface.set_trigger_enabled(true);
        Some(directive)
    }

    /// One full spin: decide, wait for `animation_done`, present.
    pub async fn run_spin<S, F>(&mut self, surface: &mut S, animation_done: F) -> Option<PresentationDirective>
    where
        S: WheelSurface + ?Sized,
        F: Future<Output = ()>,
    {
        self.begin_spin(surface)?;
        animation_done.await;
        self.finish_spin(surface)
    }

    pub fn claim<S: WheelSurface + ?Sized>(&mut self, surface: &mut S) {
        self.close_result();
        surface.close_modal();
        surface.reveal_content();
        surface.play_audio();
        surface.show_summary(&claim_summary(self.engine.session().total_debt_accrued));
    }

    pub fn dismiss<S: WheelSurface + ?Sized>(&mut self, surface: &mut S) {
        self.close_result();
        surface.close_modal();
        surface.reveal_content();
    }

    // The close button is live in every phase; only a shown result moves the phase.
    fn close_result(&mut self) {
        if self.game.phase == WheelPhase::ResultShown {
            if let Err(err) = self.game.close() {
                log::warn!("Cannot close result: {}", err);
            }
        }
    }

    pub fn phase(&self) -> WheelPhase {
        self.game.phase
    }

    pub fn game(&self) -> &WheelGame {
        &self.game
    }

    pub fn session(&self) -> &SessionState {
        self.engine.session()
    }

    pub fn engine(&self) -> &SpinEngine<R> {
        &self.engine
    }

    pub fn config(&self) -> &WheelConfig {
        self.engine.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment_table::{Outcome, SegmentTable};
    use futures::executor::block_on;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use std::future::ready;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Reset,
        Rotate(f64, u32),
        Trigger(bool),
        Result(PresentationDirective),
        HideResult,
        Debt(String),
        CloseModal,
        Reveal,
        Audio,
        Summary(String),
    }

    #[derive(Debug, Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl WheelSurface for RecordingSurface {
        fn reset_rotation(&mut self) { self.calls.push(Call::Reset) }
        fn apply_rotation(&mut self, degrees: f64, duration_ms: u32) { self.calls.push(Call::Rotate(degrees, duration_ms)) }
        fn set_trigger_enabled(&mut self, enabled: bool) { self.calls.push(Call::Trigger(enabled)) }
        fn show_result(&mut self, directive: &PresentationDirective) { self.calls.push(Call::Result(directive.clone())) }
        fn hide_result(&mut self) { self.calls.push(Call::HideResult) }
        fn show_debt(&mut self, text: &str) { self.calls.push(Call::Debt(text.to_string())) }
        fn close_modal(&mut self) { self.calls.push(Call::CloseModal) }
        fn reveal_content(&mut self) { self.calls.push(Call::Reveal) }
        fn play_audio(&mut self) { self.calls.push(Call::Audio) }
        fn show_summary(&mut self, text: &str) { self.calls.push(Call::Summary(text.to_string())) }
    }

    fn controller() -> LotteryController<StepRng> {
        let engine = SpinEngine::with_rng(SegmentTable::standard(), WheelConfig::default(), StepRng::new(0, 0));
        LotteryController::new(engine)
    }

    #[test]
    fn test_attach_resets_wheel() {
        let ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.attach(&mut surface);
        assert_eq!(surface.calls, vec![Call::Reset, Call::Trigger(true)]);
    }

    #[test]
    fn test_spin_sequence() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        let directive = block_on(ctrl.run_spin(&mut surface, ready(()))).unwrap();

        assert_eq!(directive.message, "😅 Thanks for playing");
        assert_eq!(surface.calls, vec![
            Call::Trigger(false),
            Call::HideResult,
            Call::Rotate(1800.0 + 332.5, 4000),
            Call::Result(directive.clone()),
            Call::Debt("🐷 The boss owes the author: 50 RMB".to_string()),
            Call::Trigger(true),
        ]);
        assert_eq!(ctrl.phase(), WheelPhase::ResultShown);
    }

    #[test]
    fn test_fifth_spin_offers_claim() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        for _ in 0..4 {
            let directive = block_on(ctrl.run_spin(&mut surface, ready(()))).unwrap();
            assert!(!directive.show_claim);
        }
        let fifth = block_on(ctrl.run_spin(&mut surface, ready(()))).unwrap();
        assert!(fifth.show_claim);
        assert_eq!(ctrl.game().last_result.as_ref().map(|o| o.segment.outcome), Some(Outcome::Win));
        assert_eq!(ctrl.session().total_debt_accrued, 250);
    }

    #[test]
    fn test_second_trigger_blocked_while_spinning() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        assert!(ctrl.begin_spin(&mut surface).is_some());
        surface.calls.clear();

        assert!(ctrl.begin_spin(&mut surface).is_none());
        assert!(surface.calls.is_empty());
        assert_eq!(ctrl.session().attempt_count, 1);

        assert!(ctrl.finish_spin(&mut surface).is_some());
        assert!(ctrl.begin_spin(&mut surface).is_some());
        assert_eq!(ctrl.session().attempt_count, 2);
    }

    #[test]
    fn test_finish_without_spin_is_noop() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        assert!(ctrl.finish_spin(&mut surface).is_none());
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_claim_reports_debt() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        for _ in 0..3 {
            block_on(ctrl.run_spin(&mut surface, ready(())));
        }
        surface.calls.clear();
        ctrl.claim(&mut surface);
        assert_eq!(surface.calls, vec![
            Call::CloseModal,
            Call::Reveal,
            Call::Audio,
            Call::Summary("🐷 The boss's total debt: 150 RMB".to_string()),
        ]);
        assert_eq!(ctrl.phase(), WheelPhase::Idle);
    }

    #[test]
    fn test_dismiss_reveals_without_summary() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.dismiss(&mut surface);
        assert_eq!(surface.calls, vec![Call::CloseModal, Call::Reveal]);
        assert_eq!(ctrl.phase(), WheelPhase::Idle);
    }

    #[test]
    fn test_missing_surface_still_spins() {
        let mut ctrl = controller();
        let mut surface: Option<RecordingSurface> = None;
        let directive = block_on(ctrl.run_spin(&mut surface, ready(())));
        assert!(directive.is_some());
        ctrl.claim(&mut surface);
        assert_eq!(ctrl.session().attempt_count, 1);
    }

    #[test]
    fn test_from_config_uses_configured_duration() {
        let config = WheelConfig { spin_duration_ms: 0, ..WheelConfig::default() };
        let mut ctrl = LotteryController::from_config(config).unwrap();
        let mut surface = RecordingSurface::default();
        let outcome = ctrl.begin_spin(&mut surface).unwrap();
        assert!(surface.calls.contains(&Call::Rotate(outcome.rotation_degrees, 0)));
    }

    #[test]
    fn test_seeded_controller_aligns_to_decided_segment() {
        let engine = SpinEngine::with_rng(SegmentTable::standard(), WheelConfig::default(), StdRng::seed_from_u64(9));
        let mut ctrl = LotteryController::new(engine);
        let mut surface = RecordingSurface::default();
        for _ in 0..20 {
            let outcome = ctrl.begin_spin(&mut surface).unwrap();
            let landed = ctrl.engine().table().segment_containing(-outcome.rotation_degrees).clone();
            assert_eq!(landed, outcome.segment);
            ctrl.finish_spin(&mut surface);
        }
    }
}
