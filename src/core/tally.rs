//! Occupancy tally: how many sites hold each energy level.

use super::grid::Grid;

/// Histogram over occupancy levels `0..=max`, with no gaps. Levels that no
/// site currently holds are present with a count of zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tally {
    /// Occupancy levels, always the contiguous range `0..=max_level`.
    pub levels: Vec<u32>,
    /// Number of sites holding each level, aligned with `levels`.
    pub counts: Vec<usize>,
}

impl Tally {
    /// Count site occupancies of `grid` into a dense histogram.
    pub fn from_grid(grid: &Grid) -> Self {
        let max_level = grid.max_level();
        let mut counts = vec![0usize; max_level as usize + 1];
        for level in grid.site_levels() {
            counts[level as usize] += 1;
        }
        Self {
            levels: (0..=max_level).collect(),
            counts,
        }
    }

    /// Total number of sites tallied.
    pub fn sites(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Sum of level times count: the quanta accounted for by the tally.
    pub fn weighted_total(&self) -> u64 {
        self.levels
            .iter()
            .zip(&self.counts)
            .map(|(&level, &count)| level as u64 * count as u64)
            .sum()
    }

    /// Largest per-level count, for scaling the figure's y axis.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
