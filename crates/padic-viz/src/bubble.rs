//! Per-integer orbit state.
//!
//! Every integer `0..=max_int` owns the set of values its orbit has reached.
//! Each tick maps every value through the current [`Iteration`]; values with
//! no image are dropped, so a set can shrink to empty and stay that way.

use rayon::prelude::*;
use std::collections::BTreeSet;

use crate::iteration::Iteration;

/// One value moving during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    /// The integer whose orbit this value belongs to.
    pub origin: u64,
    /// Value before the tick.
    pub from: u64,
    /// Value after the tick, `None` if it vanished.
    pub to: Option<u64>,
}

impl Motion {
    /// A value that does not move.
    #[must_use]
    pub fn stationary(origin: u64, value: u64) -> Self {
        Self {
            origin,
            from: value,
            to: Some(value),
        }
    }
}

/// Orbit sets for every drawn integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BubbleState {
    images: Vec<BTreeSet<u64>>,
    ticks: u64,
}

impl BubbleState {
    /// Starts every integer `0..=max_int` at itself.
    #[must_use]
    pub fn new(max_int: u64) -> Self {
        let images = (0..=max_int).map(|n| BTreeSet::from([n])).collect();
        Self { images, ticks: 0 }
    }

    /// Number of tracked integers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if no integer is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Ticks applied since construction.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current values reached by `origin`'s orbit.
    #[must_use]
    pub fn images(&self, origin: u64) -> Option<&BTreeSet<u64>> {
        self.images.get(usize::try_from(origin).ok()?)
    }

    /// Total number of live values across all orbits.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.images.iter().map(BTreeSet::len).sum()
    }

    /// The current state as motions that stay put.
    #[must_use]
    pub fn stationary(&self) -> Vec<Motion> {
        self.iter_origins()
            .flat_map(|(origin, set)| set.iter().map(move |&v| Motion::stationary(origin, v)))
            .collect()
    }

    /// Applies one step to every value, returning what moved where.
    ///
    /// Motions are ordered by origin, then by starting value.
    pub fn advance(&mut self, step: &Iteration) -> Vec<Motion> {
        let motions = self
            .images
            .par_iter_mut()
            .enumerate()
            .flat_map_iter(|(index, set)| {
                let origin = index as u64;
                let moves: Vec<Motion> = set
                    .iter()
                    .map(|&from| Motion {
                        origin,
                        from,
                        to: step.apply(from),
                    })
                    .collect();
                *set = moves.iter().filter_map(|m| m.to).collect();
                moves
            })
            .collect();
        self.ticks += 1;
        motions
    }

    fn iter_origins(&self) -> impl Iterator<Item = (u64, &BTreeSet<u64>)> {
        self.images
            .iter()
            .enumerate()
            .map(|(index, set)| (index as u64, set))
    }
}
