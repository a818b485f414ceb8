//! GeoJSON environment loader (feature `geojson`).
//!
//! # Accepted input
//!
//! A `FeatureCollection` whose features are
//!
//! - `Point` with an integer `id` (on the feature, or in `properties.id`):
//!   one environment node each;
//! - `LineString`: every consecutive coordinate pair links the two points
//!   that lie within `snap_distance_sq` of the pair's ends, in both
//!   directions.
//!
//! Nodes get dense `NodeId`s in ascending point-id order, so the numbering
//! does not depend on feature order.  Points are collected in a first pass,
//! which lets lines appear anywhere in the file.
//!
//! Other geometry types (`Polygon`, `MultiLineString`, …) are skipped.  A
//! feature without a geometry type fails with
//! [`EnvError::MalformedGeometry`].

use std::path::Path;

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashSet;
use serde_json::Value;

use arbo_core::NodeId;

use crate::{Coord, EnvError, EnvResult, Environment, EnvironmentBuilder};

/// Default squared snapping distance, in source coordinate units.
pub const DEFAULT_SNAP_DISTANCE_SQ: f64 = 1e-10;

/// Loader options.
#[derive(Copy, Clone, Debug)]
pub struct GeoJsonOptions {
    /// A line endpoint matches a point when their squared distance is
    /// strictly below this value.
    pub snap_distance_sq: f64,
}

impl Default for GeoJsonOptions {
    fn default() -> Self {
        Self { snap_distance_sq: DEFAULT_SNAP_DISTANCE_SQ }
    }
}

// ── R-tree point entry ────────────────────────────────────────────────────────

#[derive(Clone)]
struct PointEntry {
    point: [f64; 2],
    id:    NodeId,
}

impl RTreeObject for PointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PointEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an environment from a GeoJSON file.
pub fn load_geojson(path: &Path, options: GeoJsonOptions) -> EnvResult<Environment> {
    let data = std::fs::read_to_string(path)?;
    load_geojson_str(&data, options)
}

/// Like [`load_geojson`] but parses an in-memory document.
pub fn load_geojson_str(data: &str, options: GeoJsonOptions) -> EnvResult<Environment> {
    let root: Value = serde_json::from_str(data)?;
    let features = root
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(0, "document has no \"features\" array"))?;

    // ── Pass 1: points ────────────────────────────────────────────────────
    let mut points: Vec<(u64, Coord)> = Vec::new();
    for (i, feature) in features.iter().enumerate() {
        let kind = geometry_type(feature).ok_or_else(|| malformed(i, "feature has no geometry type"))?;
        if kind == "Point" {
            let id = point_id(feature).ok_or_else(|| malformed(i, "point without integer id"))?;
            let coord = parse_coord(coordinates(feature, i)?, i)?;
            points.push((id, coord));
        }
    }
    points.sort_unstable_by_key(|&(id, _)| id);
    if let Some(w) = points.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(EnvError::DuplicatePoint(w[0].0));
    }

    let mut builder = EnvironmentBuilder::new();
    let entries: Vec<PointEntry> = points
        .iter()
        .map(|&(_, coord)| PointEntry {
            point: [coord.x, coord.y],
            id:    builder.add_node(coord),
        })
        .collect();
    let tree = RTree::bulk_load(entries);

    // ── Pass 2: lines ─────────────────────────────────────────────────────
    let mut degenerate = 0usize;
    let mut linked: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();
    for (i, feature) in features.iter().enumerate() {
        if geometry_type(feature) != Some("LineString") {
            continue;
        }
        let coords = coordinates(feature, i)?
            .as_array()
            .ok_or_else(|| malformed(i, "line coordinates are not an array"))?;
        if coords.len() < 2 {
            return Err(malformed(i, "line has fewer than two coordinates"));
        }

        let mut prev = snap(&tree, parse_coord(&coords[0], i)?, options, i)?;
        for raw in &coords[1..] {
            let next = snap(&tree, parse_coord(raw, i)?, options, i)?;
            if prev == next {
                degenerate += 1;
            } else if linked.insert((prev.min(next), prev.max(next))) {
                builder.add_link(prev, next);
            }
            prev = next;
        }
    }

    if degenerate > 0 {
        log::warn!("dropped {degenerate} line segment(s) whose ends snap to the same point");
    }

    let env = builder.build()?;
    log::info!(
        "loaded GeoJSON environment: {} nodes, {} directed edges, {} dead ends",
        env.size(),
        env.edge_count(),
        env.dead_end_count(),
    );
    Ok(env)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn malformed(feature: usize, reason: &str) -> EnvError {
    EnvError::MalformedGeometry { feature, reason: reason.to_owned() }
}

fn geometry_type(feature: &Value) -> Option<&str> {
    feature.get("geometry")?.get("type")?.as_str()
}

fn coordinates(feature: &Value, i: usize) -> EnvResult<&Value> {
    feature
        .get("geometry")
        .and_then(|g| g.get("coordinates"))
        .ok_or_else(|| malformed(i, "geometry has no coordinates"))
}

fn point_id(feature: &Value) -> Option<u64> {
    let raw = feature
        .get("id")
        .or_else(|| feature.get("properties").and_then(|p| p.get("id")))?;
    match raw {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `[x, y]` or `[x, y, z]`; anything past the second ordinate is ignored.
fn parse_coord(raw: &Value, i: usize) -> EnvResult<Coord> {
    let arr = raw.as_array().ok_or_else(|| malformed(i, "position is not an array"))?;
    match (arr.first().and_then(Value::as_f64), arr.get(1).and_then(Value::as_f64)) {
        (Some(x), Some(y)) => Ok(Coord::new(x, y)),
        _ => Err(malformed(i, "position needs two numeric ordinates")),
    }
}

fn snap(tree: &RTree<PointEntry>, at: Coord, options: GeoJsonOptions, i: usize) -> EnvResult<NodeId> {
    tree.nearest_neighbor(&[at.x, at.y])
        .filter(|e| e.distance_2(&[at.x, at.y]) < options.snap_distance_sq)
        .map(|e| e.id)
        .ok_or(EnvError::DanglingEndpoint { feature: i, x: at.x, y: at.y })
}
