//! `arbo-env` — the spatial environment graph.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`environment`] | `Environment` (CSR adjacency), `EnvironmentBuilder`, `Coord` |
//! | [`adjacency`]   | CSV edge-list loader                                      |
//! | [`geojson`]     | GeoJSON point/line loader (feature = `"geojson"`)         |
//! | [`error`]       | `EnvError`, `EnvResult<T>`                                |
//!
//! The environment is immutable once built.  Every phase of the pipeline
//! reads it through a shared reference, so it needs no synchronisation.

pub mod adjacency;
pub mod environment;
pub mod error;

#[cfg(feature = "geojson")]
pub mod geojson;


pub use adjacency::{AdjacencyOptions, load_adjacency_csv, load_adjacency_reader};
pub use environment::{Coord, Environment, EnvironmentBuilder};
pub use error::{EnvError, EnvResult};

#[cfg(feature = "geojson")]
pub use geojson::{GeoJsonOptions, load_geojson, load_geojson_str};
