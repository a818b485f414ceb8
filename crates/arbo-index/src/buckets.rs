//! Compacted per-node member lists in CSR form.

use arbo_core::{AgentId, NodeId};

/// Members of node `n` are `members[offsets[n] .. offsets[n + 1]]`, sorted
/// ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buckets {
    offsets: Vec<u32>,
    members: Vec<AgentId>,
}

impl Buckets {
    /// `nodes` empty buckets.
    pub fn empty(nodes: usize) -> Self {
        Self { offsets: vec![0; nodes + 1], members: Vec::new() }
    }

    /// Concatenate per-node lists given in node order.
    pub fn from_lists(lists: Vec<Vec<AgentId>>) -> Self {
        let mut offsets = Vec::with_capacity(lists.len() + 1);
        offsets.push(0u32);
        let total = lists.iter().map(Vec::len).sum();
        let mut members = Vec::with_capacity(total);
        for list in lists {
            members.extend(list);
            offsets.push(members.len() as u32);
        }
        Self { offsets, members }
    }

    pub(crate) fn from_parts(offsets: Vec<u32>, members: Vec<AgentId>) -> Self {
        debug_assert_eq!(offsets.last().copied().unwrap_or(0) as usize, members.len());
        Self { offsets, members }
    }

    /// Number of nodes.
    #[inline]
    pub fn nodes(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Agents present at `node`; empty for a node outside the index.
    #[inline]
    pub fn at(&self, node: NodeId) -> &[AgentId] {
        let n = node.index();
        if n >= self.nodes() {
            return &[];
        }
        &self.members[self.offsets[n] as usize..self.offsets[n + 1] as usize]
    }

    /// Total agents across all buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, node: NodeId, agent: AgentId) -> bool {
        self.at(node).binary_search(&agent).is_ok()
    }

    /// Nodes with at least one agent.
    pub fn occupied(&self) -> usize {
        self.offsets.windows(2).filter(|w| w[0] != w[1]).count()
    }
}
