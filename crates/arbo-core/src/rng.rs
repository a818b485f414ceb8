//! Deterministic, schedule-independent random streams.
//!
//! # Determinism strategy
//!
//! Every random decision in the pipeline is made from a fresh `SmallRng`
//! whose seed is a pure function of
//!
//!   (global seed, species, agent-or-node id, cycle, phase)
//!
//! folded together with the SplitMix64 finaliser.  Two consequences:
//!
//! - Results do not depend on which worker processes which agent, or in what
//!   order.  Every backend produces bit-identical trajectories.
//! - No RNG state is stored per agent and none is shared between threads.
//!
//! `SimRng` is the sequential counterpart used by loaders (range resolution)
//! and the Monte Carlo driver.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Cycle, Phase, Species};

/// 64-bit fractional golden-ratio constant for seed mixing.
const GOLDEN: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 output function.
#[inline(always)]
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Fold a sequence of words into one well-mixed 64-bit key.
#[inline]
fn fold_key(words: &[u64]) -> u64 {
    words
        .iter()
        .fold(GOLDEN, |acc, &w| mix64(acc ^ w.wrapping_mul(GOLDEN)))
}

/// Seed of Monte Carlo run `run` derived from a base seed.
pub fn derive_seed(base: u64, run: u64) -> u64 {
    fold_key(&[base, run, 0x5eed])
}

// ── DrawRng ───────────────────────────────────────────────────────────────────

/// Short-lived RNG for the draws one agent (or node) makes in one phase of
/// one cycle.
///
/// Construct, draw, drop.  Never stored.
pub struct DrawRng(SmallRng);

impl DrawRng {
    /// Stream for `agent` of `species` during `phase` of `cycle`.
    #[inline]
    pub fn for_agent(seed: u64, species: Species, agent: AgentId, cycle: Cycle, phase: Phase) -> Self {
        let key = fold_key(&[seed, species.salt(), agent.0 as u64, cycle.0, phase.salt()]);
        DrawRng(SmallRng::seed_from_u64(key))
    }

    /// Stream keyed by an arbitrary word list (used by tests and loaders).
    pub fn from_words(words: &[u64]) -> Self {
        DrawRng(SmallRng::seed_from_u64(fold_key(words)))
    }

    /// `true` with probability `p`.
    ///
    /// `p <= 0` (or NaN) never fires and `p >= 1` always fires; neither
    /// touches the generator.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        if !(p > 0.0) {
            false
        } else if p >= 1.0 {
            true
        } else {
            self.0.gen_bool(p)
        }
    }

    /// Uniform index in `0..len`, or `None` when `len == 0`.
    #[inline]
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.0.gen_range(0..len))
        }
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Sequential RNG for single-threaded set-up work (resolving parameter
/// ranges, seeding runs).  Never used inside a parallel phase.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(mix64(seed ^ GOLDEN)))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform integer in the inclusive range `[lo, hi]`.  Requires `lo <= hi`.
    pub fn between_u64(&mut self, lo: u64, hi: u64) -> u64 {
        if lo >= hi { lo } else { self.0.gen_range(lo..=hi) }
    }

    /// Uniform float in `[lo, hi]`.  Requires `lo <= hi`.
    pub fn between_f64(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi { lo } else { self.0.gen_range(lo..=hi) }
    }
}
