//! Counting-sort index.

use arbo_core::{AgentId, NodeId};

use crate::Buckets;

/// Buckets rebuilt from scratch after every Movement phase.
///
/// Two passes over the positions (count, then scatter) plus one prefix sum
/// over the nodes.  Agents are scattered in id order, so every bucket comes
/// out sorted without a sort.
#[derive(Clone, Debug, Default)]
pub struct CompactIndex {
    buckets: Buckets,
    /// Per-node write cursor reused across rebuilds.
    cursor:  Vec<u32>,
}

impl CompactIndex {
    pub fn new<I>(nodes: usize, positions: I) -> Self
    where
        I: IntoIterator<Item = NodeId> + Clone,
    {
        let mut index = Self { buckets: Buckets::empty(nodes), cursor: Vec::new() };
        index.rebuild(nodes, positions);
        index
    }

    #[inline]
    pub fn buckets(&self) -> &Buckets {
        &self.buckets
    }

    /// Replace the buckets with the layout implied by `positions`
    /// (`positions[i]` is the node of agent `i`).  Positions outside
    /// `[0, nodes)` are left out.
    pub fn rebuild<I>(&mut self, nodes: usize, positions: I)
    where
        I: IntoIterator<Item = NodeId> + Clone,
    {
        let mut offsets = vec![0u32; nodes + 1];
        for node in positions.clone() {
            if node.index() < nodes {
                offsets[node.index() + 1] += 1;
            }
        }
        for n in 1..=nodes {
            offsets[n] += offsets[n - 1];
        }

        self.cursor.clear();
        self.cursor.extend_from_slice(&offsets[..nodes]);
        let mut members = vec![AgentId::INVALID; offsets[nodes] as usize];
        for (i, node) in positions.into_iter().enumerate() {
            if node.index() < nodes {
                let slot = &mut self.cursor[node.index()];
                members[*slot as usize] = AgentId(i as u32);
                *slot += 1;
            }
        }

        self.buckets = Buckets::from_parts(offsets, members);
    }
}
