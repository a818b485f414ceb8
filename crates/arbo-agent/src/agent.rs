//! Single-agent record.

use arbo_core::NodeId;

use crate::DiseaseState;

/// One human or mosquito.
///
/// The fields are private so every state change goes through a mutator that
/// resets the dwell counter.  The agent's id is its index in the owning
/// [`Population`](crate::Population) and is not stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Agent<S> {
    position: NodeId,
    counter:  u32,
    state:    S,
    /// Set by Contact when it changes `state`; consumed by the next
    /// Transition step.
    changed:  bool,
}

impl<S: DiseaseState> Agent<S> {
    pub fn new(state: S, position: NodeId) -> Self {
        Self { position, counter: 0, state, changed: false }
    }

    #[inline]
    pub fn state(&self) -> S {
        self.state
    }

    #[inline]
    pub fn position(&self) -> NodeId {
        self.position
    }

    /// Cycles spent in the current state.
    #[inline]
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Did Contact change this agent's state in the current cycle?
    #[inline]
    pub fn changed_this_cycle(&self) -> bool {
        self.changed
    }

    /// Force `state` with a fresh counter.
    #[inline]
    pub fn reset_to(&mut self, state: S) {
        self.state   = state;
        self.counter = 0;
        self.changed = false;
    }

    /// State change caused by contact with an infectious agent.
    #[inline]
    pub fn transmit_to(&mut self, state: S) {
        self.state   = state;
        self.counter = 0;
        self.changed = true;
    }

    #[inline]
    pub fn move_to(&mut self, node: NodeId) {
        self.position = node;
    }

    #[inline]
    pub(crate) fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    #[inline]
    pub(crate) fn tick(&mut self) {
        self.counter = self.counter.saturating_add(1);
    }
}
