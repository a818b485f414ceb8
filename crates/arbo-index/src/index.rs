//! Strategy selection and the two-population index.

use std::fmt;
use std::str::FromStr;

use arbo_core::{AgentId, NodeId};
use arbo_sched::Scheduler;

use crate::{Buckets, CompactIndex, DenseSlots, IndexError, IndexResult};

/// How bucket membership is maintained between Movement and Contact.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum IndexStrategy {
    /// `nodes x population` atomic slots, compacted before Contact.
    Dense,
    /// Counting-sort rebuild from positions.
    #[default]
    Compacted,
}

impl IndexStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            IndexStrategy::Dense     => "dense",
            IndexStrategy::Compacted => "compacted",
        }
    }
}

impl fmt::Display for IndexStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexStrategy {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dense"                 => Ok(IndexStrategy::Dense),
            "compacted" | "compact" => Ok(IndexStrategy::Compacted),
            other => Err(IndexError::UnknownStrategy(other.to_owned())),
        }
    }
}

// ── PopulationIndex ───────────────────────────────────────────────────────────

/// Index of one population.
pub enum PopulationIndex {
    Dense { slots: DenseSlots, buckets: Buckets },
    Compacted(CompactIndex),
}

impl PopulationIndex {
    /// Index `positions` (agent `i` at `positions[i]`) over `nodes` nodes.
    ///
    /// `dense_limit` caps the slot count of the dense strategy.
    pub fn new<S, I>(
        strategy: IndexStrategy,
        nodes: usize,
        positions: I,
        dense_limit: usize,
        sched: &S,
    ) -> IndexResult<Self>
    where
        S: Scheduler,
        I: ExactSizeIterator<Item = NodeId> + Clone,
    {
        Ok(match strategy {
            IndexStrategy::Dense => {
                let mut slots = DenseSlots::new(nodes, positions.len(), dense_limit)?;
                slots.fill(positions);
                let buckets = slots.compact(sched);
                PopulationIndex::Dense { slots, buckets }
            }
            IndexStrategy::Compacted => PopulationIndex::Compacted(CompactIndex::new(nodes, positions)),
        })
    }

    pub fn strategy(&self) -> IndexStrategy {
        match self {
            PopulationIndex::Dense { .. } => IndexStrategy::Dense,
            PopulationIndex::Compacted(_) => IndexStrategy::Compacted,
        }
    }

    /// Buckets as of the last refresh.
    #[inline]
    pub fn buckets(&self) -> &Buckets {
        match self {
            PopulationIndex::Dense { buckets, .. } => buckets,
            PopulationIndex::Compacted(c) => c.buckets(),
        }
    }

    /// Slots that Movement relocates in place; `None` for the compacted
    /// strategy.
    #[inline]
    pub fn slots(&self) -> Option<&DenseSlots> {
        match self {
            PopulationIndex::Dense { slots, .. } => Some(slots),
            PopulationIndex::Compacted(_) => None,
        }
    }

    /// Bring the buckets up to date after Movement.
    ///
    /// Dense: compact the slots (Movement already relocated them).
    /// Compacted: rebuild from `positions`.
    pub fn refresh<S, I>(&mut self, sched: &S, positions: I)
    where
        S: Scheduler,
        I: IntoIterator<Item = NodeId> + Clone,
    {
        match self {
            PopulationIndex::Dense { slots, buckets } => *buckets = slots.compact(sched),
            PopulationIndex::Compacted(c) => {
                let nodes = c.buckets().nodes();
                c.rebuild(nodes, positions);
            }
        }
    }

    /// Re-index from scratch, as at construction.  Dense slots are cleared
    /// and refilled from `positions`.
    pub fn reset<S, I>(&mut self, sched: &S, positions: I)
    where
        S: Scheduler,
        I: IntoIterator<Item = NodeId> + Clone,
    {
        match self {
            PopulationIndex::Dense { slots, buckets } => {
                slots.fill(positions);
                *buckets = slots.compact(sched);
            }
            PopulationIndex::Compacted(c) => {
                let nodes = c.buckets().nodes();
                c.rebuild(nodes, positions);
            }
        }
    }

    /// Check that agent `i` appears exactly once, in the bucket of
    /// `positions[i]`, and in no other bucket.  Dense slots are checked too.
    pub fn verify<I>(&self, positions: I) -> IndexResult<()>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let buckets = self.buckets();
        let mut placed = 0usize;
        for (i, node) in positions.into_iter().enumerate() {
            let agent = AgentId(i as u32);
            if !buckets.contains(node, agent) {
                return Err(IndexError::Inconsistent { agent, node });
            }
            if let Some(slots) = self.slots() {
                if !slots.contains(node, agent) {
                    return Err(IndexError::Inconsistent { agent, node });
                }
            }
            placed += 1;
        }
        // Every agent was found once; any surplus member is a duplicate or
        // a stale entry.
        if buckets.len() != placed {
            return Err(IndexError::Inconsistent { agent: AgentId::INVALID, node: NodeId::INVALID });
        }
        if let Some(slots) = self.slots() {
            let present = (0..slots.nodes() as u32)
                .map(NodeId)
                .map(|n| (0..slots.population() as u32).filter(|&a| slots.contains(n, AgentId(a))).count())
                .sum::<usize>();
            if present != placed {
                return Err(IndexError::Inconsistent { agent: AgentId::INVALID, node: NodeId::INVALID });
            }
        }
        Ok(())
    }
}

// ── SpatialIndex ──────────────────────────────────────────────────────────────

/// Buckets of both populations.
pub struct SpatialIndex {
    pub humans:    PopulationIndex,
    pub mosquitos: PopulationIndex,
}

impl SpatialIndex {
    pub fn new<S, H, M>(
        strategy: IndexStrategy,
        nodes: usize,
        humans: H,
        mosquitos: M,
        dense_limit: usize,
        sched: &S,
    ) -> IndexResult<Self>
    where
        S: Scheduler,
        H: ExactSizeIterator<Item = NodeId> + Clone,
        M: ExactSizeIterator<Item = NodeId> + Clone,
    {
        let index = Self {
            humans:    PopulationIndex::new(strategy, nodes, humans, dense_limit, sched)?,
            mosquitos: PopulationIndex::new(strategy, nodes, mosquitos, dense_limit, sched)?,
        };
        log::debug!(
            "{strategy} index over {nodes} nodes: {} human(s) on {} node(s), {} mosquito(s) on {} node(s)",
            index.humans.buckets().len(),
            index.humans.buckets().occupied(),
            index.mosquitos.buckets().len(),
            index.mosquitos.buckets().occupied(),
        );
        Ok(index)
    }

    pub fn strategy(&self) -> IndexStrategy {
        self.humans.strategy()
    }

    /// Refresh both populations; returns once both are done.
    pub fn refresh<S, H, M>(&mut self, sched: &S, humans: H, mosquitos: M)
    where
        S: Scheduler,
        H: IntoIterator<Item = NodeId> + Clone + Send,
        M: IntoIterator<Item = NodeId> + Clone + Send,
    {
        let Self { humans: h, mosquitos: m } = self;
        sched.join(|| h.refresh(sched, humans), || m.refresh(sched, mosquitos));
    }

    /// Re-index both populations from scratch.
    pub fn reset<S, H, M>(&mut self, sched: &S, humans: H, mosquitos: M)
    where
        S: Scheduler,
        H: IntoIterator<Item = NodeId> + Clone,
        M: IntoIterator<Item = NodeId> + Clone,
    {
        self.humans.reset(sched, humans);
        self.mosquitos.reset(sched, mosquitos);
    }

    pub fn verify<H, M>(&self, humans: H, mosquitos: M) -> IndexResult<()>
    where
        H: IntoIterator<Item = NodeId>,
        M: IntoIterator<Item = NodeId>,
    {
        self.humans.verify(humans)?;
        self.mosquitos.verify(mosquitos)
    }
}
