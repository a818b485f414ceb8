//! `results.json` backend.
//!
//! Each run becomes one JSON array of cycle states:
//!
//! ```json
//! [
//!   { "progress": [0, 365], "humans_in_states": [990, 0, 10, 0], "mosquitos_in_states": [3000, 30, 0] },
//!   ...
//! ]
//! ```
//!
//! Run 0 is written to `results.json`, run `k > 0` to `results_<k>.json`.
//! Snapshots are buffered until the run's summary arrives (or `finish`).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::writer::OutputWriter;
use crate::{OutputResult, RunSummaryRow, SnapshotRow};

#[derive(Serialize)]
struct ResultState {
    progress:            [u64; 2],
    humans_in_states:    [u64; 4],
    mosquitos_in_states: [u64; 3],
}

impl From<&SnapshotRow> for ResultState {
    fn from(row: &SnapshotRow) -> Self {
        Self {
            progress:            [row.cycle, row.total_cycles],
            humans_in_states:    row.humans,
            mosquitos_in_states: row.mosquitos,
        }
    }
}

pub struct JsonResultsWriter {
    dir:      PathBuf,
    run:      Option<u64>,
    pending:  Vec<ResultState>,
    finished: bool,
}

impl JsonResultsWriter {
    /// Write into `dir`, which must exist.
    pub fn new(dir: &Path) -> Self {
        Self { dir: dir.to_path_buf(), run: None, pending: Vec::new(), finished: false }
    }

    pub fn path_for(&self, run: u64) -> PathBuf {
        match run {
            0 => self.dir.join("results.json"),
            k => self.dir.join(format!("results_{k}.json")),
        }
    }

    fn flush_run(&mut self) -> OutputResult<()> {
        let Some(run) = self.run.take() else {
            return Ok(());
        };
        let path = self.path_for(run);
        let mut out = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut out, &self.pending)?;
        out.flush()?;
        log::debug!("wrote {} states to {}", self.pending.len(), path.display());
        self.pending.clear();
        Ok(())
    }
}

impl OutputWriter for JsonResultsWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        if self.run.is_some_and(|r| r != row.run) {
            self.flush_run()?;
        }
        self.run = Some(row.run);
        self.pending.push(ResultState::from(row));
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        if self.run == Some(row.run) {
            self.flush_run()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flush_run()
    }
}
