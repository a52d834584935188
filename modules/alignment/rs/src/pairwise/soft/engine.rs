use eyre::Result;
use rayon::prelude::*;

use super::{Config, FillOrder, SmoothMax, Smoothed, Trace};
use crate::pairwise::scoring::{Score, SubstitutionMatrix};
use crate::pairwise::table::Table;

/// Soft Needleman-Wunsch: the global alignment recurrence with `max` replaced by [`SmoothMax`].
///
/// ```text
/// S[i][j] = smoothmax(S[i-1][j-1] + M[i-1][j-1], S[i-1][j] + gap, S[i][j-1] + gap)
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Engine<S: Score> {
    config: Config<S>,
    smoothmax: SmoothMax<S>,
}

impl<S: Score> Engine<S> {
    pub fn new(config: Config<S>) -> Result<Self> {
        let smoothmax = SmoothMax::new(*config.temperature())?;
        Ok(Self { config, smoothmax })
    }

    pub fn config(&self) -> &Config<S> {
        &self.config
    }

    /// Final alignment score without keeping the trace around.
    pub fn score(&self, matrix: &SubstitutionMatrix<S>, gap: S) -> S {
        self.forward(matrix, gap).score()
    }

    /// Fill the score table and record every smooth-max evaluation for the backward pass.
    pub fn forward<'a>(&self, matrix: &'a SubstitutionMatrix<S>, gap: S) -> Trace<'a, S> {
        let (rows, cols) = (matrix.rows() + 1, matrix.cols() + 1);
        let boundary = *self.config.boundary();
        log::debug!(
            "Filling {rows}x{cols} soft alignment table (temperature={:?}, {boundary:?}, {:?})",
            self.config.temperature(),
            self.config.order()
        );

        let unreachable = Smoothed::new(S::neg_infinity(), [S::zero(); 3]);
        let mut cells = Table::new(rows, cols, unreachable);
        cells[(0, 0)] = Smoothed::new(S::zero(), [S::zero(); 3]);

        // Boundary cells are reached through a single deletion / insertion (if at all)
        let (mut deletion, mut insertion) = ([S::zero(); 3], [S::zero(); 3]);
        if boundary.is_gapped() {
            deletion[1] = S::one();
            insertion[2] = S::one();
        }
        for i in 1..rows {
            let score = boundary.extend(cells[(i - 1, 0)].value(), gap);
            cells[(i, 0)] = Smoothed::new(score, deletion);
        }
        for j in 1..cols {
            let score = boundary.extend(cells[(0, j - 1)].value(), gap);
            cells[(0, j)] = Smoothed::new(score, insertion);
        }

        match self.config.order() {
            FillOrder::RowMajor => self.fill_row_major(&mut cells, matrix, gap),
            FillOrder::Wavefront => self.fill_wavefront(&mut cells, matrix, gap),
        }

        let trace = Trace::new(matrix, gap, self.smoothmax, cells);
        if !trace.score().is_finite() {
            log::warn!(
                "Soft alignment score of {}x{} sequences is {:?} under the {boundary:?} boundary",
                matrix.rows(),
                matrix.cols(),
                trace.score()
            );
        }
        trace
    }

    fn fill_row_major(
        &self,
        cells: &mut Table<Smoothed<S, 3>>,
        matrix: &SubstitutionMatrix<S>,
        gap: S,
    ) {
        for i in 1..cells.rows() {
            for j in 1..cells.cols() {
                let candidates = candidates(cells, matrix, gap, i, j);
                cells[(i, j)] = self.smoothmax.apply(candidates);
            }
        }
    }

    fn fill_wavefront(
        &self,
        cells: &mut Table<Smoothed<S, 3>>,
        matrix: &SubstitutionMatrix<S>,
        gap: S,
    ) {
        let (rows, cols) = (cells.rows(), cells.cols());
        if rows < 2 || cols < 2 {
            return;
        }

        for diagonal in 2..=(rows - 1) + (cols - 1) {
            let filled: &Table<_> = cells;
            let evaluated: Vec<_> = FillOrder::diagonal(rows, cols, diagonal)
                .into_par_iter()
                .map(|i| {
                    let candidates = candidates(filled, matrix, gap, i, diagonal - i);
                    (i, self.smoothmax.apply(candidates))
                })
                .collect();

            for (i, smoothed) in evaluated {
                cells[(i, diagonal - i)] = smoothed;
            }
        }
    }
}

/// Match, delete and insert candidates of the interior cell `(i, j)`.
#[inline(always)]
pub(super) fn candidates<S: Score>(
    cells: &Table<Smoothed<S, 3>>,
    matrix: &SubstitutionMatrix<S>,
    gap: S,
    i: usize,
    j: usize,
) -> [S; 3] {
    [
        cells[(i - 1, j - 1)].value() + matrix.score(i - 1, j - 1),
        cells[(i - 1, j)].value() + gap,
        cells[(i, j - 1)].value() + gap,
    ]
}
