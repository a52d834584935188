//! Classical Needleman-Wunsch with a hard `max`: the zero-temperature limit of the soft score.

use crate::pairwise::scoring::{Score, SubstitutionMatrix};
use crate::pairwise::table::Table;
use crate::pairwise::Boundary;

/// Optimal global alignment score under the given boundary policy.
pub fn score<S: Score>(matrix: &SubstitutionMatrix<S>, gap: S, boundary: Boundary) -> S {
    let (rows, cols) = (matrix.rows() + 1, matrix.cols() + 1);
    let mut scores = Table::new(rows, cols, S::neg_infinity());
    scores[(0, 0)] = S::zero();
    for i in 1..rows {
        scores[(i, 0)] = boundary.extend(scores[(i - 1, 0)], gap);
    }
    for j in 1..cols {
        scores[(0, j)] = boundary.extend(scores[(0, j - 1)], gap);
    }

    for i in 1..rows {
        for j in 1..cols {
            scores[(i, j)] = (scores[(i - 1, j - 1)] + matrix.score(i - 1, j - 1))
                .max(scores[(i - 1, j)] + gap)
                .max(scores[(i, j - 1)] + gap);
        }
    }
    scores[(rows - 1, cols - 1)]
}
