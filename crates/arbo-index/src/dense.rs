//! Dense slot index.
//!
//! # Layout
//!
//! ```text
//! slots[node * population + id] == id    agent `id` is at `node`
//!                                == ABSENT otherwise
//! ```
//!
//! Agent `id` only ever writes column `id`, and within a phase each agent is
//! handled by one execution unit, so relaxed atomics are enough: no two
//! writers share a slot and the phase barrier orders writes before reads.

use std::sync::atomic::{AtomicU32, Ordering};

use arbo_core::{AgentId, NodeId};
use arbo_sched::Scheduler;

use crate::{Buckets, IndexError, IndexResult};

/// Value of an empty slot.
pub const ABSENT: u32 = u32::MAX;

pub struct DenseSlots {
    nodes:      usize,
    population: usize,
    slots:      Vec<AtomicU32>,
}

impl DenseSlots {
    /// All slots empty.  Fails when `nodes * population` exceeds `limit`.
    pub fn new(nodes: usize, population: usize, limit: usize) -> IndexResult<Self> {
        let len = nodes
            .checked_mul(population)
            .filter(|&len| len <= limit)
            .ok_or(IndexError::TooLarge { nodes, population, limit })?;
        let slots = std::iter::repeat_with(|| AtomicU32::new(ABSENT)).take(len).collect();
        Ok(Self { nodes, population, slots })
    }

    #[inline]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.population
    }

    #[inline]
    fn slot(&self, node: NodeId, id: AgentId) -> Option<&AtomicU32> {
        if node.index() < self.nodes && id.index() < self.population {
            self.slots.get(node.index() * self.population + id.index())
        } else {
            None
        }
    }

    /// Mark `id` present at `node`.  Out-of-range pairs are ignored.
    #[inline]
    pub fn place(&self, id: AgentId, node: NodeId) {
        if let Some(slot) = self.slot(node, id) {
            slot.store(id.0, Ordering::Relaxed);
        }
    }

    /// Clear `id` at `from`, then mark it at `to`.
    #[inline]
    pub fn relocate(&self, id: AgentId, from: NodeId, to: NodeId) {
        if from == to {
            return;
        }
        if let Some(slot) = self.slot(from, id) {
            slot.store(ABSENT, Ordering::Relaxed);
        }
        self.place(id, to);
    }

    pub fn contains(&self, node: NodeId, id: AgentId) -> bool {
        self.slot(node, id).is_some_and(|s| s.load(Ordering::Relaxed) == id.0)
    }

    /// Clear every slot, then place agent `i` at `positions[i]`.
    pub fn fill<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        for slot in &mut self.slots {
            *slot.get_mut() = ABSENT;
        }
        for (i, node) in positions.into_iter().enumerate() {
            self.place(AgentId(i as u32), node);
        }
    }

    /// Filter each node's row down to the present ids, one task per node.
    pub fn compact<S: Scheduler>(&self, sched: &S) -> Buckets {
        if self.population == 0 {
            return Buckets::empty(self.nodes);
        }
        let lists = sched.map(self.nodes, |n| {
            let row = &self.slots[n * self.population..(n + 1) * self.population];
            row.iter()
                .map(|s| s.load(Ordering::Relaxed))
                .filter(|&v| v != ABSENT)
                .map(AgentId)
                .collect::<Vec<_>>()
        });
        Buckets::from_lists(lists)
    }
}
