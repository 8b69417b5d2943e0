//! Prize wheel logic shared by the browser widget: the segment table, the
//! spin decision, result wording and the controller that drives a surface.

pub mod config;
pub mod controller;
pub mod presentation;
pub mod segment_table;
pub mod shared_wheel_game;
pub mod spin_engine;

pub use config::WheelConfig;
pub use controller::{LotteryController, WheelSurface};
pub use presentation::{present_outcome, PresentationDirective, Tone};
pub use segment_table::{Outcome, Segment, SegmentTable};
pub use shared_wheel_game::{WheelGame, WheelPhase};
pub use spin_engine::{SessionState, SpinEngine, SpinOutcome};
