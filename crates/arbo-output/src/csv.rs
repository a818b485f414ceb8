//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `trajectory.csv`: one row per run and cycle, cycle 0 included
//! - `runs.csv`: one row per finished run

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{HUMAN_COLUMNS, MOSQUITO_COLUMNS};
use crate::writer::OutputWriter;
use crate::{OutputResult, RunSummaryRow, SnapshotRow};

pub const TRAJECTORY_FILE: &str = "trajectory.csv";
pub const RUNS_FILE: &str = "runs.csv";

pub struct CsvWriter {
    trajectory: Writer<File>,
    runs:       Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create both files in `dir` (which must exist) and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trajectory = Writer::from_path(dir.join(TRAJECTORY_FILE))?;
        let mut header = vec!["run", "cycle", "total_cycles"];
        header.extend(HUMAN_COLUMNS);
        header.extend(MOSQUITO_COLUMNS);
        trajectory.write_record(&header)?;

        let mut runs = Writer::from_path(dir.join(RUNS_FILE))?;
        let mut header = vec!["run", "seed", "cycles"];
        header.extend(HUMAN_COLUMNS);
        header.extend(MOSQUITO_COLUMNS);
        header.extend(["peak_human_infected", "peak_cycle"]);
        runs.write_record(&header)?;

        Ok(Self { trajectory, runs, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        let mut record = vec![row.run.to_string(), row.cycle.to_string(), row.total_cycles.to_string()];
        record.extend(row.humans.iter().map(u64::to_string));
        record.extend(row.mosquitos.iter().map(u64::to_string));
        self.trajectory.write_record(&record)?;
        Ok(())
    }

    fn write_run_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        let mut record = vec![row.run.to_string(), row.seed.to_string(), row.cycles.to_string()];
        record.extend(row.final_humans.iter().map(u64::to_string));
        record.extend(row.final_mosquitos.iter().map(u64::to_string));
        record.push(row.peak_human_infected.to_string());
        record.push(row.peak_cycle.to_string());
        self.runs.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trajectory.flush()?;
        self.runs.flush()?;
        Ok(())
    }
}
