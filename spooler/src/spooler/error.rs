// SPDX-License-Identifier: MIT
//
// Author: Johannes Leupolz <dev@leupolz.eu>

use thiserror::Error;

/// Errors raised by the print spooler
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpoolError {
    #[error("argument '{name}' must not be absent")]
    InvalidArgument { name: &'static str },
}
