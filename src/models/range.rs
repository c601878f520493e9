// src/models/range.rs

//! Rank range handling and page mapping.

use crate::error::{AppError, Result};

/// An inclusive, 1-based range of leaderboard rank positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRange {
    start: u64,
    end: u64,
}

impl ItemRange {
    /// Create a validated range.
    ///
    /// Fails if `start` is not positive or exceeds `end`.
    pub fn new(start: u64, end: u64) -> Result<Self> {
        if start < 1 {
            return Err(AppError::invalid_range("start must be >= 1"));
        }
        if start > end {
            return Err(AppError::invalid_range(format!(
                "start ({start}) must be <= end ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// First rank in the range (1-based, inclusive).
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Last rank in the range (inclusive).
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of ranks covered by the range.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Whether a 1-based rank position falls inside the range.
    pub fn contains(&self, rank: u64) -> bool {
        rank >= self.start && rank <= self.end
    }

    /// The ascending, deduplicated page numbers covering this range.
    ///
    /// The page holding rank `i` is `ceil(i / page_size)`.
    pub fn pages(&self, page_size: u64) -> Vec<u64> {
        let first = (self.start - 1) / page_size + 1;
        let last = (self.end - 1) / page_size + 1;
        (first..=last).collect()
    }
}
