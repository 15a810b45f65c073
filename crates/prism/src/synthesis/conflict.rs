use super::domain::StanceSummary;
use super::grouping::StanceGroups;
use serde::Serialize;

/// Whether the evidence groups agree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictState {
    Conflicting,
    OneSidedSupport,
    OneSidedRefute,
    NeutralOnly,
    Empty,
}

impl ConflictState {
    pub const fn is_conflicting(self) -> bool {
        matches!(self, Self::Conflicting)
    }

    pub const fn from_summary(summary: &StanceSummary) -> Self {
        match (summary.supports > 0, summary.refutes > 0) {
            (true, true) => Self::Conflicting,
            (true, false) => Self::OneSidedSupport,
            (false, true) => Self::OneSidedRefute,
            (false, false) if summary.neutral > 0 => Self::NeutralOnly,
            (false, false) => Self::Empty,
        }
    }
}

pub fn detect(groups: &StanceGroups) -> ConflictState {
    ConflictState::from_summary(&groups.summary())
}
