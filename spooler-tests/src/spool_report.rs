// SPDX-License-Identifier: MIT
//
// Author: Johannes Leupolz <dev@leupolz.eu>

use spooler::COMPLETION_MARKER;

/// The processing passes printed by one spooler run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SpoolReport {
    pub passes: Vec<Vec<String>>,
    /// Lines after the last completion marker; empty for a clean run.
    pub trailing: Vec<String>,
}

impl SpoolReport {
    pub fn parse(stdout: &str) -> Self {
        let mut report = SpoolReport::default();
        let mut current = Vec::new();
        for line in stdout.lines() {
            if line == COMPLETION_MARKER {
                report.passes.push(std::mem::take(&mut current));
            } else {
                current.push(line.to_string());
            }
        }
        report.trailing = current;
        report
    }

    pub fn from_output(stdout: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(stdout))
    }

    /// Jobs of one pass that start with `prefix`, in the order they were reported.
    pub fn jobs_with_prefix(&self, pass: usize, prefix: &str) -> Vec<String> {
        self.passes
            .get(pass)
            .map(|jobs| {
                jobs.iter()
                    .filter(|job| job.starts_with(prefix))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
