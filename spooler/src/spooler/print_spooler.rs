// SPDX-License-Identifier: MIT
//
// Author: Johannes Leupolz <dev@leupolz.eu>

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};

use crate::global_config::ProcessMode;
use crate::spooler::error::SpoolError;

/// Line written after every processing pass.
pub const COMPLETION_MARKER: &str = "Instance Call Finished";

/// Shared job queue. Usually reached through [`crate::spooler::get_instance`],
/// but it can also be owned directly (e.g. behind an `Arc`).
#[derive(Debug, Default)]
pub struct PrintSpooler {
    queue: Mutex<VecDeque<String>>,
    process_mode: ProcessMode,
}

impl PrintSpooler {
    pub fn new(process_mode: ProcessMode) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            process_mode,
        }
    }

    pub fn process_mode(&self) -> ProcessMode {
        self.process_mode
    }

    // A panicking holder cannot leave a queue of owned strings half-written,
    // so a poisoned lock is taken over as is.
    fn lock_queue(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends all `documents` to the queue as one unit.
    ///
    /// The batch is collected before the lock is taken; once the lock is held it is
    /// appended in a single step, so concurrent submissions never interleave within
    /// a batch. `None` is rejected with [`SpoolError::InvalidArgument`] and leaves
    /// the queue untouched.
    pub fn add_jobs<I>(&self, documents: Option<I>) -> Result<(), SpoolError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let documents = documents.ok_or(SpoolError::InvalidArgument { name: "documents" })?;
        let batch: Vec<String> = documents.into_iter().map(Into::into).collect();
        if batch.is_empty() {
            debug!("Ignoring empty batch");
            return Ok(());
        }

        let batch_len = batch.len();
        let mut queue = self.lock_queue();
        queue.extend(batch);
        debug!(
            "Queued batch of {} job(s), {} job(s) pending",
            batch_len,
            queue.len()
        );
        Ok(())
    }

    /// Writes every queued job followed by [`COMPLETION_MARKER`] to `out` and returns
    /// the reported jobs.
    ///
    /// In drain mode the reported jobs are removed, but only after the whole pass
    /// has been written; a failed write keeps the queue as it was.
    pub fn process_jobs_into<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<Vec<String>> {
        let (reported, result) = self.run_pass(out);
        result.map(|()| reported)
    }

    /// Writes the processing pass to standard output. Never fails: a broken
    /// stdout is logged and the jobs that were due for reporting are returned anyway.
    pub fn process_jobs(&self) -> Vec<String> {
        let mut stdout = io::stdout().lock();
        let (reported, result) = self.run_pass(&mut stdout);
        if let Err(e) = result {
            warn!("Failed to write processing pass to stdout: {e}");
        }
        reported
    }

    fn run_pass<W: Write + ?Sized>(&self, out: &mut W) -> (Vec<String>, io::Result<()>) {
        let mut queue = self.lock_queue();
        let result = write_pass(queue.iter(), out);

        let reported: Vec<String> = if result.is_ok() && self.process_mode.removes_reported_jobs()
        {
            queue.drain(..).collect()
        } else {
            queue.iter().cloned().collect()
        };
        info!(
            "Processed {} job(s) in {:?} mode, {} job(s) still pending",
            reported.len(),
            self.process_mode,
            queue.len()
        );
        (reported, result)
    }

    /// Snapshot of the queue in queue order.
    pub fn pending(&self) -> Vec<String> {
        self.lock_queue().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock_queue().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_queue().is_empty()
    }
}

fn write_pass<'a, W: Write + ?Sized>(
    documents: impl Iterator<Item = &'a String>,
    out: &mut W,
) -> io::Result<()> {
    for document in documents {
        writeln!(out, "{document}")?;
    }
    writeln!(out, "{COMPLETION_MARKER}")?;
    out.flush()
}
