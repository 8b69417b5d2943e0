use serde::{Serialize, Deserialize};

use crate::segment_table::{Outcome, Segment};

/// How the result panel should look
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Celebrate,
    Encourage,
    Console,
}

/// What the result panel shows after the wheel stops
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PresentationDirective {
    pub message: String,
    pub show_claim: bool,
    pub tone: Tone,
}

pub fn present_outcome(segment: &Segment) -> PresentationDirective {
    match segment.outcome {
        Outcome::Win => PresentationDirective {
            message: format!("🎉 Congratulations, you won: {}! 🎉", segment.label),
            show_claim: true,
            tone: Tone::Celebrate,
        },
        Outcome::Retry => PresentationDirective {
            message: format!("👌 {}, try again!", segment.label),
            show_claim: false,
            tone: Tone::Encourage,
        },
        Outcome::Lose => PresentationDirective {
            message: format!("😅 {}", segment.label),
            show_claim: false,
            tone: Tone::Console,
        },
    }
}

/// Running debt line refreshed after every spin
pub fn debt_display(total_debt: u64) -> String {
    format!("🐷 The boss owes the author: {} RMB", total_debt)
}

/// Summary shown once when the prize is claimed
pub fn claim_summary(total_debt: u64) -> String {
    format!("🐷 The boss's total debt: {} RMB", total_debt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment_table::SegmentTable;

    #[test]
    fn test_win_reveals_claim() {
        let table = SegmentTable::standard();
        let directive = present_outcome(table.win_segment());
        assert!(directive.show_claim);
        assert_eq!(directive.tone, Tone::Celebrate);
        assert_eq!(directive.message, "🎉 Congratulations, you won: Grand prize! 🎉");
    }

    #[test]
    fn test_retry_and_lose_hide_claim() {
        let retry = present_outcome(&Segment::new("Spin again", 220.0, 270.0, Outcome::Retry));
        assert!(!retry.show_claim);
        assert_eq!(retry.message, "👌 Spin again, try again!");

        let lose = present_outcome(&Segment::new("Almost", 165.0, 220.0, Outcome::Lose));
        assert!(!lose.show_claim);
        assert_eq!(lose.tone, Tone::Console);
        assert_eq!(lose.message, "😅 Almost");
    }

    #[test]
    fn test_same_segment_same_directive() {
        for seg in SegmentTable::standard().segments() {
            assert_eq!(present_outcome(seg), present_outcome(seg));
            assert_eq!(present_outcome(seg).show_claim, seg.outcome == Outcome::Win);
        }
    }

    #[test]
    fn test_debt_text() {
        assert_eq!(debt_display(150), "🐷 The boss owes the author: 150 RMB");
        assert_eq!(claim_summary(0), "🐷 The boss's total debt: 0 RMB");
    }
}
