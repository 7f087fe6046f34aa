// SPDX-License-Identifier: MIT
//
// Author: Johannes Leupolz <dev@leupolz.eu>
//! # Design: Process-Wide Print Spooler
//!
//! ## Overview
//! One spooler instance per process, created on first access and shared by
//! every workstation that submits documents.
//!
//! - The instance is created lazily by the first `get_instance()` call.
//! - Construction is guarded by a `OnceLock`; racing callers block until the
//!   winner has finished and then all observe the same instance.
//! - The job queue is guarded by its own `Mutex`, independent of the
//!   construction lock.
//! - A submission appends its whole batch in one critical section.
//! - A processing pass reports the whole queue in one critical section.
//!
//! ```text
//!         +--------+   +--------+   +--------+
//!         |  PC1   |   |  PC2   |   |  PCn   |
//!         +---+----+   +---+----+   +---+----+
//!             |            |            |
//!             v            v            v
//!         +---+------------+------------+----+
//!         |   get_instance() (OnceLock)      |
//!         +----------------+-----------------+
//!                          |
//!                          v
//!         +----------------+-----------------+
//!         |  Mutex<VecDeque<String>>  queue  |
//!         +----------------+-----------------+
//!                          |
//!                          v
//!                   process_jobs()
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use log::info;

use crate::global_config;
use crate::spooler::print_spooler::PrintSpooler;

pub mod error;
pub mod print_spooler;

pub static PRINT_SPOOLER: OnceLock<PrintSpooler> = OnceLock::new();

static INSTANCES_CREATED: AtomicU64 = AtomicU64::new(0);

/// Returns the process-wide spooler, creating it on first use.
pub fn get_instance() -> &'static PrintSpooler {
    PRINT_SPOOLER.get_or_init(|| {
        let process_mode = global_config::get_process_mode();
        INSTANCES_CREATED.fetch_add(1, Ordering::SeqCst);
        info!("Creating print spooler (process mode {:?})", process_mode);
        PrintSpooler::new(process_mode)
    })
}

/// Number of times the process-wide spooler has been constructed.
pub fn instances_created() -> u64 {
    INSTANCES_CREATED.load(Ordering::SeqCst)
}
