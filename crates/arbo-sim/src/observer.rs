//! Run observer trait for progress reporting and data collection.

use arbo_core::Cycle;

use crate::StateSnapshot;

/// Callbacks invoked by [`Simulation::run`](crate::Simulation::run).
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Every { n: u64 }
///
/// impl SimObserver for Every {
///     fn on_snapshot(&mut self, s: &StateSnapshot) {
///         if s.cycle() % self.n == 0 {
///             println!("{s}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// After Insertion, with the cycle-0 counts.
    fn on_prepared(&mut self, _initial: &StateSnapshot) {}

    /// Before Movement of `cycle` (zero-based).
    fn on_cycle_start(&mut self, _cycle: Cycle) {}

    /// After Output of every cycle.
    fn on_snapshot(&mut self, _snapshot: &StateSnapshot) {}

    /// Once, after the final cycle.
    fn on_sim_end(&mut self, _last: &StateSnapshot) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_prepared(&mut self, initial: &StateSnapshot) {
        (**self).on_prepared(initial);
    }

    fn on_cycle_start(&mut self, cycle: Cycle) {
        (**self).on_cycle_start(cycle);
    }

    fn on_snapshot(&mut self, snapshot: &StateSnapshot) {
        (**self).on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, last: &StateSnapshot) {
        (**self).on_sim_end(last);
    }
}
