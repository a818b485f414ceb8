//! `arbo-output` — trajectory and run-summary writers.
//!
//! | Backend             | Feature  | Files created                         |
//! |---------------------|----------|---------------------------------------|
//! | [`CsvWriter`]       | *(none)* | `trajectory.csv`, `runs.csv`          |
//! | [`JsonResultsWriter`] | *(none)* | `results.json`, `results_<run>.json` |
//! | [`SqliteWriter`]    | `sqlite` | `output.db`                           |
//!
//! All backends implement [`OutputWriter`].  [`SnapshotObserver`] plugs a
//! writer into `Simulation::run`; one observer serves every run of a Monte
//! Carlo batch.
//!
//! ```rust,ignore
//! let mut obs = SnapshotObserver::new(CsvWriter::new(dir)?);
//! for run in 0..mc.runs {
//!     let mut sim = SimBuilder::new(&env, params_for(run), config.clone()).build()?;
//!     obs.start_run(run);
//!     let outcome = sim.run(&mut obs);
//!     obs.write_outcome(&outcome);
//! }
//! obs.finish();
//! if let Some(e) = obs.take_error() { ... }
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonResultsWriter;
pub use observer::SnapshotObserver;
pub use row::{RunSummaryRow, SnapshotRow};
pub use writer::{OutputWriter, Tee};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
