// SPDX-License-Identifier: MIT
//
// Author: Johannes Leupolz <dev@leupolz.eu>

use clap::ValueEnum;
use std::sync::OnceLock;

#[derive(Debug)]
pub struct GlobalConfig {
    pub process_mode: ProcessMode,
}

// The actual static variable. It starts empty and is set once in main().
pub static CONFIG: OnceLock<GlobalConfig> = OnceLock::new();

/// The process mode decides what happens to a job once it has been reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
#[clap(rename_all = "kebab-case")]
pub enum ProcessMode {
    #[default]
    /// Default: report the queued jobs and keep them queued
    Observe,
    /// Report the queued jobs and remove them from the queue
    Drain,
}

impl ProcessMode {
    pub fn removes_reported_jobs(&self) -> bool {
        matches!(self, ProcessMode::Drain)
    }
}

pub fn initialize_global_config(process_mode: &ProcessMode) -> anyhow::Result<()> {
    CONFIG
        .set(GlobalConfig {
            process_mode: *process_mode,
        })
        .map_err(|_| anyhow::anyhow!("global config has already been initialized"))
}

/// Falls back to the default mode when the binary did not initialize the config,
/// which is the case for library users and tests.
pub fn get_process_mode() -> ProcessMode {
    CONFIG
        .get()
        .map(|config| config.process_mode)
        .unwrap_or_default()
}
