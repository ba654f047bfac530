//! Basic-strategy chart data.
//!
//! The chart is encoded as constant tables rather than branching logic:
//! one row per hand total (or pair value), one column per dealer upcard
//! value 2..=11. Entries carry their own fallback, so the lookup degrades
//! correctly when doubling or surrendering is unavailable.
//!
//! The rows transcribe the H17/DAS/LS chart the simulator was built
//! against. Two quirks are intentional and kept: soft 17 falls back to
//! stand against 3-6 while soft 18 falls back to hit, and an unsplittable
//! pair of Aces (soft 12) plays by the hard-12 row.

/// A chart entry with its fallback behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// Hit.
    H,
    /// Stand.
    S,
    /// Double if allowed, otherwise hit.
    Dh,
    /// Double if allowed, otherwise stand.
    Ds,
    /// Surrender if allowed, otherwise hit.
    Rh,
}

use Code::{Dh, Ds, H, Rh, S};

/// Hard-total rows for totals 4..=21; column index is upcard value − 2.
pub const HARD: [[Code; 10]; 18] = [
    // up:  2   3   4   5   6   7   8   9   T   A
    /*  4 */ [H, H, H, H, H, H, H, H, H, H],
    /*  5 */ [H, H, H, H, H, H, H, H, H, H],
    /*  6 */ [H, H, H, H, H, H, H, H, H, H],
    /*  7 */ [H, H, H, H, H, H, H, H, H, H],
    /*  8 */ [H, H, H, H, H, H, H, H, H, H],
    /*  9 */ [H, Dh, Dh, Dh, Dh, H, H, H, H, H],
    /* 10 */ [Dh, Dh, Dh, Dh, Dh, Dh, Dh, Dh, H, H],
    /* 11 */ [Dh, Dh, Dh, Dh, Dh, Dh, Dh, Dh, Dh, Dh],
    /* 12 */ [H, H, S, S, S, H, H, H, H, H],
    /* 13 */ [S, S, S, S, S, H, H, H, H, H],
    /* 14 */ [S, S, S, S, S, H, H, H, H, H],
    /* 15 */ [S, S, S, S, S, H, H, H, Rh, H],
    /* 16 */ [S, S, S, S, S, H, H, Rh, Rh, Rh],
    /* 17 */ [S, S, S, S, S, S, S, S, S, S],
    /* 18 */ [S, S, S, S, S, S, S, S, S, S],
    /* 19 */ [S, S, S, S, S, S, S, S, S, S],
    /* 20 */ [S, S, S, S, S, S, S, S, S, S],
    /* 21 */ [S, S, S, S, S, S, S, S, S, S],
];

/// Soft-total rows for totals 12..=21; column index is upcard value − 2.
pub const SOFT: [[Code; 10]; 10] = [
    // up:  2   3   4   5   6   7   8   9   T   A
    /* 12 */ [H, H, S, S, S, H, H, H, H, H],
    /* 13 */ [H, H, H, Dh, Dh, H, H, H, H, H],
    /* 14 */ [H, H, H, Dh, Dh, H, H, H, H, H],
    /* 15 */ [H, H, Dh, Dh, Dh, H, H, H, H, H],
    /* 16 */ [H, H, Dh, Dh, Dh, H, H, H, H, H],
    /* 17 */ [S, Ds, Ds, Ds, Ds, S, S, H, H, H],
    /* 18 */ [S, Dh, Dh, Dh, Dh, S, S, H, H, H],
    /* 19 */ [S, S, S, S, S, S, S, S, S, S],
    /* 20 */ [S, S, S, S, S, S, S, S, S, S],
    /* 21 */ [S, S, S, S, S, S, S, S, S, S],
];

/// Pair rows for pair card values 2..=11 (11 = Aces); `true` means split.
/// Pairs without a split entry fall through to the totals tables.
pub const PAIRS: [[bool; 10]; 10] = {
    const T: bool = true;
    const F: bool = false;
    [
        // up:   2  3  4  5  6  7  8  9  T  A
        /*  2 */ [T, T, T, T, T, T, F, F, F, F],
        /*  3 */ [T, T, T, T, T, T, F, F, F, F],
        /*  4 */ [F, F, F, T, T, F, F, F, F, F],
        /*  5 */ [F, F, F, F, F, F, F, F, F, F],
        /*  6 */ [T, T, T, T, T, F, F, F, F, F],
        /*  7 */ [T, T, T, T, T, T, F, F, F, F],
        /*  8 */ [T, T, T, T, T, T, T, T, T, T],
        /*  9 */ [T, T, T, T, T, F, T, T, F, F],
        /* 10 */ [F, F, F, F, F, F, F, F, F, F],
        /* 11 */ [T, T, T, T, T, T, T, T, T, T],
    ]
};
