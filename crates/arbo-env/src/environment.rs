//! Environment graph and builder.
//!
//! # Data layout
//!
//! Adjacency is stored in **Compressed Sparse Row (CSR)** form.  The
//! neighbors of node `n` are the contiguous slice
//!
//! ```text
//! neighbors[ offsets[n] .. offsets[n + 1] ]
//! ```
//!
//! Each slice is sorted ascending and free of duplicates, so a random
//! neighbor pick is a single bounds-checked index into contiguous memory and
//! a given seed selects the same neighbor no matter how the graph was
//! described on input.

use arbo_core::NodeId;

use crate::{EnvError, EnvResult};

/// Planar coordinate of a node as given by the source description.
///
/// Only carried for reporting; movement uses the graph alone.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_sq(self, other: Coord) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

// ── Environment ───────────────────────────────────────────────────────────────

/// Immutable spatial graph: `size()` nodes and, per node, the nodes reachable
/// in one movement step.
///
/// Do not construct directly; use [`EnvironmentBuilder`] or a loader.
#[derive(Clone, Debug)]
pub struct Environment {
    /// CSR row pointer.  Length = `size() + 1`.
    pub offsets: Vec<u32>,

    /// Concatenated neighbor lists, sorted within each row.
    pub neighbors: Vec<NodeId>,

    coords: Option<Vec<Coord>>,
}

impl Environment {
    /// A graph of `size` isolated nodes (every node is a dead end).
    pub fn isolated(size: usize) -> Self {
        Self {
            offsets:   vec![0; size + 1],
            neighbors: Vec::new(),
            coords:    None,
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Total number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.size()
    }

    /// Neighbors of `node`.
    ///
    /// A node outside `[0, size)` has no neighbors; callers moving agents
    /// treat both cases the same way (the agent stays put).
    #[inline]
    pub fn edges(&self, node: NodeId) -> &[NodeId] {
        if !self.contains(node) {
            return &[];
        }
        let start = self.offsets[node.index()] as usize;
        let end   = self.offsets[node.index() + 1] as usize;
        &self.neighbors[start..end]
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.edges(node).len()
    }

    #[inline]
    pub fn is_dead_end(&self, node: NodeId) -> bool {
        self.degree(node) == 0
    }

    /// Number of nodes without outgoing edges.
    pub fn dead_end_count(&self) -> usize {
        self.offsets.windows(2).filter(|w| w[0] == w[1]).count()
    }

    /// Source coordinate of `node`, if the environment was built from
    /// geometry.
    pub fn coord(&self, node: NodeId) -> Option<Coord> {
        self.coords.as_ref().and_then(|c| c.get(node.index()).copied())
    }

    /// Iterator over all node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.size() as u32).map(NodeId)
    }
}

// ── EnvironmentBuilder ────────────────────────────────────────────────────────

/// Construct an [`Environment`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use arbo_env::{Coord, EnvironmentBuilder};
///
/// let mut b = EnvironmentBuilder::new();
/// let a = b.add_node(Coord::new(0.0, 0.0));
/// let c = b.add_node(Coord::new(1.0, 0.0));
/// b.add_link(a, c);
/// let env = b.build().unwrap();
/// assert_eq!(env.size(), 2);
/// assert_eq!(env.edges(a), &[c]);
/// ```
#[derive(Default)]
pub struct EnvironmentBuilder {
    size:   usize,
    coords: Vec<Coord>,
    edges:  Vec<(NodeId, NodeId)>,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `size` nodes without coordinates.
    pub fn with_size(size: usize) -> Self {
        Self { size, ..Self::default() }
    }

    /// Add a node with a coordinate and return its id (sequential from the
    /// current size).
    pub fn add_node(&mut self, coord: Coord) -> NodeId {
        let id = NodeId(self.size as u32);
        self.size += 1;
        self.coords.push(coord);
        id
    }

    /// Add a **directed** edge `from → to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.push((from, to));
    }

    /// Add edges in both directions.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    pub fn node_count(&self) -> usize {
        self.size
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Validate, sort and de-duplicate the edges, then lay them out in CSR.
    ///
    /// Fails if any edge references a node outside `[0, size)`.
    pub fn build(self) -> EnvResult<Environment> {
        let size = self.size;

        if let Some(&(from, to)) = self
            .edges
            .iter()
            .find(|(a, b)| a.index() >= size || b.index() >= size)
        {
            let node = if from.index() >= size { from } else { to };
            return Err(EnvError::NodeOutOfRange { node, size });
        }

        let mut edges = self.edges;
        edges.sort_unstable();
        edges.dedup();

        if edges.len() >= u32::MAX as usize {
            return Err(EnvError::TooManyEdges(edges.len()));
        }

        let mut offsets = vec![0u32; size + 1];
        for &(from, _) in &edges {
            offsets[from.index() + 1] += 1;
        }
        for i in 1..=size {
            offsets[i] += offsets[i - 1];
        }
        debug_assert_eq!(offsets[size] as usize, edges.len());

        let neighbors = edges.into_iter().map(|(_, to)| to).collect();

        // Coordinates are kept only when every node has one.
        let coords = (size > 0 && self.coords.len() == size).then_some(self.coords);

        Ok(Environment { offsets, neighbors, coords })
    }
}
