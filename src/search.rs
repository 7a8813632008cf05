//! Backtracking over the index in rarity order.
//!
//! The search walks the letters from rarest to most common. At every letter not
//! yet covered it either picks a word anchored on that letter or leaves the
//! letter out. Five words cover 25 letters, so a set of five can leave out only
//! one letter; a branch that has left out `MAX_SKIPS` letters is dead.

use std::time::Instant;

use tracing::{debug, info};

use crate::{
    alphabet::{BUCKETS, LETTERS, RARITY_BITS, RUNGS},
    error::Result,
    index::Index,
    lanes::Intersect,
    pool::{self, WorkerPool},
    slots::SlotBuffer,
    word::Word,
};

pub const SOLUTION_LEN: usize = 5;

/// Number of left out letters at which a branch is abandoned.
pub const MAX_SKIPS: usize = 2;

/// Word ids of one solution, in the order they were chosen.
pub type Solution = [u32; SOLUTION_LEN];

struct Search<'a> {
    index: &'a Index,
    intersect: Intersect,
    solutions: &'a SlotBuffer<Solution>,
    chosen: Solution,
}

impl<'a> Search<'a> {
    fn seed(&mut self, word: &Word) -> Result<()> {
        self.chosen[0] = word.id();
        // every letter rarer than the anchor is left out
        self.descend(word.bitword(), word.anchor() + 1, 1, word.anchor())
    }

    fn descend(&mut self, used: u32, letter: usize, count: usize, skips: usize) -> Result<()> {
        if skips == MAX_SKIPS || letter == LETTERS {
            return Ok(());
        }
        if count == SOLUTION_LEN {
            self.solutions.push(self.chosen)?;
            return Ok(());
        }
        if used & RARITY_BITS[letter] != 0 {
            return self.descend(used, letter + 1, count, skips);
        }

        let index = self.index;
        let intersect = self.intersect;
        for bucket in 0..BUCKETS {
            // every word in a rung's bucket contains the rung letter
            if bucket < RUNGS && used & index.rungs()[bucket] != 0 {
                continue;
            }
            let slot = index.bucket(letter, bucket);
            intersect.try_for_each_disjoint(slot.bits(), used, |i| {
                self.chosen[count] = slot.ids()[i];
                self.descend(used | slot.bits()[i], letter + 1, count + 1, skips)
            })?;
        }

        self.descend(used, letter + 1, count, skips + 1)
    }
}

/// Finds every solution reachable from the index's seeds, splitting the seeds
/// into one contiguous slice per worker.
pub fn solve(
    index: &Index,
    intersect: Intersect,
    capacity: usize,
    pool: &WorkerPool,
) -> Result<Vec<Solution>> {
    let start = Instant::now();
    let solutions = SlotBuffer::new("solution buffer", capacity);
    let seeds = index.seeds();

    pool.run(pool::partition(seeds.len(), pool.threads()), |worker, range| {
        debug!(worker, seeds = range.len(), "searching");
        let mut search = Search {
            index,
            intersect,
            solutions: &solutions,
            chosen: Solution::default(),
        };
        seeds[range].iter().try_for_each(|seed| search.seed(seed))
    })?;

    let mut solutions = solutions.into_vec();
    solutions.sort_unstable();
    info!(
        solutions = solutions.len(),
        elapsed = ?start.elapsed(),
        "searched"
    );
    Ok(solutions)
}
