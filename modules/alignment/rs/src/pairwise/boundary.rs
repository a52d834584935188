use crate::pairwise::scoring::Score;

/// Initialization policy for the first row and column of a score table.
///
/// `S[0][0]` is always zero. The policies differ only in how leading gaps are treated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Boundary {
    /// Textbook global alignment: `S[i][0] = i * gap` and `S[0][j] = j * gap`, leading gaps are
    /// penalized like any other gap.
    #[default]
    CumulativeGap,
    /// Every boundary cell except the origin is `-inf`. Alignments can't start with a gap, and
    /// aligning an empty sequence against a non-empty one scores `-inf`.
    Unreachable,
}

impl Boundary {
    /// Whether boundary cells are reachable from the origin through gaps.
    pub fn is_gapped(&self) -> bool {
        matches!(self, Boundary::CumulativeGap)
    }

    /// Score of a boundary cell given the score of its predecessor along the same edge.
    #[inline(always)]
    pub fn extend<S: Score>(&self, previous: S, gap: S) -> S {
        match self {
            Boundary::CumulativeGap => previous + gap,
            Boundary::Unreachable => S::neg_infinity(),
        }
    }
}
