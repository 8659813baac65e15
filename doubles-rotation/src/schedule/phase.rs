use super::types::{PlayerIndex, Split};

/// Rounds in one session
pub const ROUNDS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Top-rated players only, fixed splits
    Competitive,
    /// Least-played first, fixed positional splits
    HighLowSplit,
    /// Least-played first, cost-optimized splits
    Balanced,
}

/// Which global rating ranks share a court.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourtPattern {
    /// Court n takes ranks 4(n-1)..4n
    Contiguous,
    /// Courts 1 and 2 split ranks 1-8 between them using these block offsets,
    /// court 3 takes ranks 9-12, and courts 4 onward repeat the split in pairs
    /// from rank 13. An unpaired last court takes a contiguous block.
    Interleave([[usize; 4]; 2]),
}

/// Fixed split by court-local rank (0 = best of the four)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedSplit {
    /// 1st + 4th vs 2nd + 3rd
    OuterVsInner,
    /// 1st + 3rd vs 2nd + 4th
    OddVsEven,
}

impl FixedSplit {
    pub fn apply(self, group: &[PlayerIndex; 4]) -> Split {
        let [r1, r2, r3, r4] = *group;
        match self {
            FixedSplit::OuterVsInner => Split::new([r1, r4], [r2, r3]),
            FixedSplit::OddVsEven => Split::new([r1, r3], [r2, r4]),
        }
    }
}

/// One row of the round table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundPlan {
    pub round: u8,
    pub phase: Phase,
    pub pattern: CourtPattern,
    /// `None` means the split is chosen by the pairing selector
    pub fixed_split: Option<FixedSplit>,
}

const HIGH_LOW: CourtPattern = CourtPattern::Interleave([[0, 3, 4, 7], [1, 2, 5, 6]]);

pub static ROUND_PLANS: [RoundPlan; ROUNDS as usize] = [
    RoundPlan {
        round: 1,
        phase: Phase::Competitive,
        pattern: CourtPattern::Contiguous,
        fixed_split: Some(FixedSplit::OuterVsInner),
    },
    RoundPlan {
        round: 2,
        phase: Phase::Competitive,
        pattern: CourtPattern::Contiguous,
        fixed_split: Some(FixedSplit::OddVsEven),
    },
    RoundPlan {
        round: 3,
        phase: Phase::Balanced,
        pattern: CourtPattern::Interleave([[0, 2, 5, 7], [1, 3, 4, 6]]),
        fixed_split: None,
    },
    RoundPlan {
        round: 4,
        phase: Phase::Balanced,
        pattern: CourtPattern::Interleave([[0, 1, 6, 7], [2, 3, 4, 5]]),
        fixed_split: None,
    },
    RoundPlan {
        round: 5,
        phase: Phase::HighLowSplit,
        pattern: HIGH_LOW,
        fixed_split: Some(FixedSplit::OuterVsInner),
    },
    RoundPlan {
        round: 6,
        phase: Phase::HighLowSplit,
        pattern: HIGH_LOW,
        fixed_split: Some(FixedSplit::OddVsEven),
    },
    RoundPlan {
        round: 7,
        phase: Phase::Balanced,
        pattern: CourtPattern::Interleave([[0, 2, 4, 6], [1, 3, 5, 7]]),
        fixed_split: None,
    },
    RoundPlan {
        round: 8,
        phase: Phase::Balanced,
        pattern: CourtPattern::Interleave([[0, 3, 5, 6], [1, 2, 4, 7]]),
        fixed_split: None,
    },
];

pub fn plan_for(round: u8) -> Option<&'static RoundPlan> {
    ROUND_PLANS.iter().find(|plan| plan.round == round)
}
