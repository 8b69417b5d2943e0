use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Angles are degrees measured clockwise from the top of the wheel.
pub const FULL_TURN: f64 = 360.0;

/// What landing on a segment means for the player
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Lose,
    Retry,
    Win,
}

/// A contiguous zone of the wheel, `[start, end)` in degrees
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub start: f64,
    pub end: f64,
    #[serde(rename = "type")]
    pub outcome: Outcome,
}

impl Segment {
    pub fn new(label: impl Into<String>, start: f64, end: f64, outcome: Outcome) -> Self {
        Self {
            label: label.into(),
            start,
            end,
            outcome,
        }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Center of the zone. Used as the landing angle so the pointer never rests on a border.
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start && angle < self.end
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SegmentTableError {
    #[error("segment table is empty")]
    Empty,
    #[error("segment {index} has non-finite bounds")]
    NonFinite { index: usize },
    #[error("segment {index} is empty or inverted ({start} >= {end})")]
    EmptySpan { index: usize, start: f64, end: f64 },
    #[error("first segment starts at {0}, expected 0")]
    BadStart(f64),
    #[error("segment {index} starts at {start} but the previous one ends at {previous_end}")]
    Discontinuity { index: usize, start: f64, previous_end: f64 },
    #[error("last segment ends at {0}, expected 360")]
    BadEnd(f64),
    #[error("expected exactly one winning segment, found {0}")]
    WinCount(usize),
}

/// Ordered, immutable partition of `[0, 360)` into prize segments.
///
/// The partition is checked once when the table is built, so lookups never
/// have to guess what a gap or overlap was supposed to mean.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentTable {
    segments: Vec<Segment>,
    win_index: usize,
}

impl SegmentTable {
    pub fn new(segments: Vec<Segment>) -> Result<Self, SegmentTableError> {
        let first = segments.first().ok_or(SegmentTableError::Empty)?;
        if first.start != 0.0 {
            return Err(SegmentTableError::BadStart(first.start));
        }

        let mut previous_end: Option<f64> = None;
        for (index, seg) in segments.iter().enumerate() {
            if !seg.start.is_finite() || !seg.end.is_finite() {
                return Err(SegmentTableError::NonFinite { index });
            }
            if seg.end <= seg.start {
                return Err(SegmentTableError::EmptySpan { index, start: seg.start, end: seg.end });
            }
            if let Some(previous_end) = previous_end {
                if seg.start != previous_end {
                    return Err(SegmentTableError::Discontinuity { index, start: seg.start, previous_end });
                }
            }
            previous_end = Some(seg.end);
        }

        if let Some(end) = previous_end {
            if end != FULL_TURN {
                return Err(SegmentTableError::BadEnd(end));
            }
        }

        let wins: Vec<usize> = segments.iter()
            .enumerate()
            .filter(|(_, seg)| seg.outcome == Outcome::Win)
            .map(|(i, _)| i)
            .collect();
        if wins.len() != 1 {
            return Err(SegmentTableError::WinCount(wins.len()));
        }

        Ok(Self {
            segments,
            win_index: wins[0],
        })
    }

    /// The eight-zone wheel shipped with the page: one narrow red grand prize at 270-290.
    pub fn standard() -> Self {
        let segments = vec![
            Segment::new("Thanks for playing", 0.0, 55.0, Outcome::Lose),
            Segment::new("Better luck next time", 55.0, 110.0, Outcome::Lose),
            Segment::new("Thanks for stopping by", 110.0, 165.0, Outcome::Lose),
            Segment::new("Almost", 165.0, 220.0, Outcome::Lose),
            Segment::new("Spin again", 220.0, 270.0, Outcome::Retry),
            Segment::new("Grand prize", 270.0, 290.0, Outcome::Win),
            Segment::new("Thanks for stopping by", 290.0, 330.0, Outcome::Lose),
            Segment::new("So close", 330.0, 360.0, Outcome::Lose),
        ];
        Self {
            segments,
            win_index: 5,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn first(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn win_segment(&self) -> &Segment {
        &self.segments[self.win_index]
    }

    pub fn total_span(&self) -> f64 {
        self.segments.iter().map(Segment::span).sum()
    }

    /// Scan for the segment under `angle` without any fallback.
    pub fn try_segment_containing(&self, angle: f64) -> Option<&Segment> {
        let a = normalize_angle(angle);
        self.segments.iter().find(|seg| seg.contains(a))
    }

    /// Segment under `angle`, after wrapping it into `[0, 360)`.
    ///
    /// Falls back to the first segment when nothing matches, which only a
    /// non-finite angle can cause once the table has been validated.
    pub fn segment_containing(&self, angle: f64) -> &Segment {
        self.try_segment_containing(angle).unwrap_or_else(|| {
            log::error!("No segment contains angle {}, falling back to the first segment", angle);
            self.first()
        })
    }
}

impl Default for SegmentTable {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn normalize_angle(angle: f64) -> f64 {
    ((angle % FULL_TURN) + FULL_TURN) % FULL_TURN
}
