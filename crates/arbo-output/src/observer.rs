//! `SnapshotObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use arbo_sim::{RunOutcome, SimObserver, StateSnapshot};

use crate::row::{RunSummaryRow, SnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every snapshot, cycle 0 included, to an
/// [`OutputWriter`].
///
/// Errors from the writer are stored because observer callbacks have no
/// return value.  Only the first one is kept; check it with
/// [`take_error`](Self::take_error) after the last run.
///
/// The writer stays open across runs: call [`start_run`](Self::start_run)
/// before each one, [`write_outcome`](Self::write_outcome) after it and
/// [`finish`](Self::finish) once at the end.
pub struct SnapshotObserver<W: OutputWriter> {
    writer:     W,
    run:        u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SnapshotObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, run: 0, last_error: None }
    }

    /// Tag subsequent rows with `run`.
    pub fn start_run(&mut self, run: u64) {
        self.run = run;
    }

    pub fn run(&self) -> u64 {
        self.run
    }

    /// Write the summary row of the current run.
    pub fn write_outcome(&mut self, outcome: &RunOutcome) {
        let row = RunSummaryRow::new(self.run, outcome);
        let result = self.writer.write_run_summary(&row);
        self.store_err(result);
    }

    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write(&mut self, snapshot: &StateSnapshot) {
        let row = SnapshotRow::new(self.run, snapshot);
        let result = self.writer.write_snapshot(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                log::warn!("output error in run {}: {e}", self.run);
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SnapshotObserver<W> {
    fn on_prepared(&mut self, initial: &StateSnapshot) {
        self.write(initial);
    }

    fn on_snapshot(&mut self, snapshot: &StateSnapshot) {
        self.write(snapshot);
    }
}
