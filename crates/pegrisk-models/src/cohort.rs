//! Cohort interpretation: probability → expected PEG placements per 100
//! similar patients, read off a sparse decile table.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pegrisk_core::models::prediction::{CohortCount, CohortEstimate};

use crate::classify::classify;

/// Breakpoints in tenths of probability. 0.1 has no entry.
pub const BREAKPOINTS: [u8; 10] = [0, 2, 3, 4, 5, 6, 7, 8, 9, 10];

const SLOT_0_2: usize = 1;
const SLOT_0_5: usize = 4;
const SLOT_0_6: usize = 5;

/// Expected count per 100 patients at each of [`BREAKPOINTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CohortTable {
    counts: [u8; 10],
}

impl CohortTable {
    pub const fn new(counts: [u8; 10]) -> Self {
        Self { counts }
    }

    /// Count at a breakpoint given in tenths, if that breakpoint exists.
    pub fn at_tenth(&self, tenth: i64) -> Option<u8> {
        slot(tenth).map(|s| self.counts[s])
    }

    /// `(breakpoint, count)` pairs in ascending order.
    pub fn entries(&self) -> impl Iterator<Item = (f64, u8)> + '_ {
        BREAKPOINTS
            .iter()
            .zip(self.counts.iter())
            .map(|(&b, &c)| (f64::from(b) / 10.0, c))
    }
}

fn slot(tenth: i64) -> Option<usize> {
    BREAKPOINTS.iter().position(|&b| i64::from(b) == tenth)
}

fn finite_tenth(scaled: f64) -> Option<i64> {
    scaled.is_finite().then_some(scaled as i64)
}

/// Map a probability onto the cohort table of a model with the given cutoff.
///
/// Resolution order:
/// 1. `0.5 < p < cutoff` → count at 0.5.
/// 2. `cutoff < p < 0.6` → count at 0.6.
/// 3. Otherwise the surrounding deciles `floor(10p)/10` and `ceil(10p)/10`.
///    A lower decile without an entry falls back to 0.0; an upper decile
///    without an entry moves to the next breakpoint at or above it, and to
///    0.2 when there is none. Equal deciles or equal counts give a single
///    count, anything else a range.
///
/// Every probability resolves; this never fails.
pub fn interpolate(probability: f64, cutoff: f64, table: &CohortTable) -> CohortEstimate {
    let framing = classify(probability, cutoff);

    let count = if probability > 0.5 && probability < cutoff {
        CohortCount::Single {
            count: table.counts[SLOT_0_5],
        }
    } else if probability < 0.6 && probability > cutoff {
        CohortCount::Single {
            count: table.counts[SLOT_0_6],
        }
    } else {
        let scaled = probability * 10.0;

        let lower = finite_tenth(scaled.floor()).and_then(slot).unwrap_or(0);
        let upper = finite_tenth(scaled.ceil())
            .and_then(|tenth| {
                slot(tenth).or_else(|| BREAKPOINTS.iter().position(|&b| i64::from(b) >= tenth))
            })
            .unwrap_or(SLOT_0_2);

        let (low, high) = (table.counts[lower], table.counts[upper]);
        if lower == upper || low == high {
            CohortCount::Single { count: low }
        } else {
            CohortCount::Range {
                lower: low,
                upper: high,
            }
        }
    };

    CohortEstimate { count, framing }
}
