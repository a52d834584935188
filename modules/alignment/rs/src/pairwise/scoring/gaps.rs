use derive_more::Constructor;

use super::Score;

// Gaps are scored per skipped symbol, the same in both sequences.
pub trait Scorer {
    type Score: Score;

    fn gap(&self) -> Self::Score;
}

/// Linear gap model: every inserted or deleted symbol costs `penalty`.
#[derive(Clone, Copy, Debug, PartialEq, Constructor)]
pub struct Linear<S: Score> {
    pub penalty: S,
}

impl<S: Score> Scorer for Linear<S> {
    type Score = S;

    #[inline(always)]
    fn gap(&self) -> Self::Score {
        self.penalty
    }
}
