//! Candidate slot grid.
//!
//! When an offering's nominal slot is unavailable, the generator searches
//! a fixed grid of permissible placements: every teaching day crossed
//! with a configured list of time blocks. The grid is configuration
//! data, not derived from the catalog.

use serde::{Deserialize, Serialize};

/// A day-independent time block, in minutes from midnight.
///
/// Blocks are combined with each [`DayOfWeek`](super::DayOfWeek) at
/// search time to form concrete candidate intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Block start (inclusive).
    pub start_min: u16,
    /// Block end (exclusive).
    pub end_min: u16,
}

impl TimeBlock {
    /// Creates a time block.
    pub fn new(start_min: u16, end_min: u16) -> Self {
        Self { start_min, end_min }
    }
}

/// The standard weekday teaching blocks: six 90-minute periods,
/// 09:00 through 18:00.
const STANDARD_BLOCKS: [(u16, u16); 6] = [
    (9 * 60, 10 * 60 + 30),      // 09:00-10:30
    (10 * 60 + 30, 12 * 60),     // 10:30-12:00
    (12 * 60, 13 * 60 + 30),     // 12:00-13:30
    (13 * 60 + 30, 15 * 60),     // 13:30-15:00
    (15 * 60, 16 * 60 + 30),     // 15:00-16:30
    (16 * 60 + 30, 18 * 60),     // 16:30-18:00
];

/// Fixed enumeration of fallback placement slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGrid {
    blocks: Vec<TimeBlock>,
}

impl SlotGrid {
    /// Creates a grid with no blocks (no fallback capacity).
    pub fn empty() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Creates the standard weekday grid: six 90-minute blocks,
    /// 09:00 through 18:00 on every teaching day.
    pub fn standard() -> Self {
        Self {
            blocks: STANDARD_BLOCKS
                .iter()
                .map(|&(start, end)| TimeBlock::new(start, end))
                .collect(),
        }
    }

    /// Adds a block to the grid.
    pub fn with_block(mut self, start_min: u16, end_min: u16) -> Self {
        self.blocks.push(TimeBlock::new(start_min, end_min));
        self
    }

    /// The grid's time blocks, in configuration order.
    pub fn blocks(&self) -> &[TimeBlock] {
        &self.blocks
    }

    /// Number of candidate cells (days × blocks).
    pub fn cell_count(&self) -> usize {
        super::DayOfWeek::ALL.len() * self.blocks.len()
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeInterval;

    #[test]
    fn test_standard_grid() {
        let grid = SlotGrid::standard();
        assert_eq!(grid.blocks().len(), 6);
        assert_eq!(grid.cell_count(), 30);
        assert_eq!(grid.blocks()[0], TimeBlock::new(540, 630));
        assert_eq!(grid.blocks()[5], TimeBlock::new(990, 1080));
    }

    #[test]
    fn test_standard_blocks_are_valid_and_disjoint() {
        let grid = SlotGrid::standard();
        let intervals: Vec<TimeInterval> = grid
            .blocks()
            .iter()
            .map(|b| {
                TimeInterval::new(crate::models::DayOfWeek::Monday, b.start_min, b.end_min).unwrap()
            })
            .collect();
        for (i, a) in intervals.iter().enumerate() {
            for b in &intervals[i + 1..] {
                assert!(!a.overlaps(b), "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn test_custom_grid() {
        let grid = SlotGrid::empty().with_block(8 * 60, 9 * 60).with_block(9 * 60, 10 * 60);
        assert_eq!(grid.blocks().len(), 2);
        assert_eq!(grid.cell_count(), 10);
    }

    #[test]
    fn test_empty_grid() {
        let grid = SlotGrid::empty();
        assert!(grid.blocks().is_empty());
        assert_eq!(grid.cell_count(), 0);
    }
}
