// SPDX-License-Identifier: MIT
// spooler: a process-wide print spooler
//
// - One lazily created instance per process, shared by every workstation.
// - Submissions and processing passes are serialized on the queue lock.
//
// Author: Johannes Leupolz <dev@leupolz.eu>

pub mod global_config;
pub mod spooler;
pub mod workstation;

pub use crate::spooler::error::SpoolError;
pub use crate::spooler::print_spooler::{PrintSpooler, COMPLETION_MARKER};
pub use crate::spooler::{get_instance, instances_created};
