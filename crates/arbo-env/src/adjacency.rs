//! CSV adjacency loader.
//!
//! # CSV format
//!
//! One directed edge per row:
//!
//! ```csv
//! from,to
//! 0,1
//! 1,2
//! 2,0
//! ```
//!
//! The node count is `AdjacencyOptions::size` when given, otherwise the
//! largest index seen plus one.  With an explicit size, rows referencing a
//! node beyond it fail with [`EnvError::NodeOutOfRange`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use arbo_core::NodeId;

use crate::{EnvResult, Environment, EnvironmentBuilder};

#[derive(Deserialize)]
struct EdgeRecord {
    from: u32,
    to:   u32,
}

/// Loader options.
#[derive(Copy, Clone, Debug, Default)]
pub struct AdjacencyOptions {
    /// Fixed node count.  `None` infers it from the largest index.
    pub size: Option<usize>,
    /// Add the reverse of every row as well.
    pub bidirectional: bool,
}

/// Load an environment from a CSV edge list.
pub fn load_adjacency_csv(path: &Path, options: AdjacencyOptions) -> EnvResult<Environment> {
    let file = std::fs::File::open(path)?;
    load_adjacency_reader(file, options)
}

/// Like [`load_adjacency_csv`] but accepts any `Read` source.
pub fn load_adjacency_reader<R: Read>(reader: R, options: AdjacencyOptions) -> EnvResult<Environment> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut rows: Vec<(NodeId, NodeId)> = Vec::new();
    for result in csv_reader.deserialize::<EdgeRecord>() {
        let row = result?;
        rows.push((NodeId(row.from), NodeId(row.to)));
    }

    let inferred = rows
        .iter()
        .map(|&(a, b)| a.index().max(b.index()) + 1)
        .max()
        .unwrap_or(0);
    let size = options.size.unwrap_or(inferred);

    let mut builder = EnvironmentBuilder::with_size(size);
    for (from, to) in rows {
        if options.bidirectional {
            builder.add_link(from, to);
        } else {
            builder.add_edge(from, to);
        }
    }

    let env = builder.build()?;
    log::info!(
        "loaded adjacency environment: {} nodes, {} directed edges, {} dead ends",
        env.size(),
        env.edge_count(),
        env.dead_end_count(),
    );
    Ok(env)
}
