use std::ops::RangeInclusive;

/// Order in which the score table is filled. Both orders produce identical tables.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum FillOrder {
    /// Row by row, left to right.
    #[default]
    RowMajor,
    /// Anti-diagonal by anti-diagonal. Cells sharing an anti-diagonal don't depend on each other
    /// and are evaluated in parallel.
    Wavefront,
}

impl FillOrder {
    /// Rows `i` of the interior cells `(i, diagonal - i)` lying on the given anti-diagonal.
    pub(crate) fn diagonal(rows: usize, cols: usize, diagonal: usize) -> RangeInclusive<usize> {
        let first = diagonal.saturating_sub(cols - 1).max(1);
        let last = (rows - 1).min(diagonal - 1);
        first..=last
    }
}
