// SPDX-License-Identifier: MIT
//
// Author: Johannes Leupolz <dev@leupolz.eu>

use std::io;
use std::path::Path;
use std::process::{Command, Output};

use spooler::workstation::Workstation;

/// Builder for spooler invocations. The binary is located via `cargo run`.
#[derive(Default)]
pub struct SpoolerBuilder {
    args: Vec<String>,
}

impl SpoolerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `--process-mode <mode>`
    pub fn process_mode(mut self, mode: &str) -> Self {
        self.args.push("--process-mode".into());
        self.args.push(mode.into());
        self
    }

    /// `--batch <json>` built from a workstation name and its documents
    pub fn batch(mut self, workstation: &str, documents: &[&str]) -> Self {
        let batch = Workstation::new(
            workstation,
            documents.iter().map(|doc| doc.to_string()).collect(),
        );
        let json = serde_json::to_string(&batch).expect("failed to encode batch as JSON");
        self.args.push("--batch".into());
        self.args.push(json);
        self
    }

    /// `--batch <raw>`, passed through unchanged
    pub fn raw_batch(mut self, raw: &str) -> Self {
        self.args.push("--batch".into());
        self.args.push(raw.into());
        self
    }

    pub fn batch_file(mut self, path: &Path) -> Self {
        self.args.push("--batch-file".into());
        self.args.push(path.display().to_string());
        self
    }

    pub fn run(self) -> io::Result<Output> {
        println!("Arguments for spooler: {:?}", &self.args);

        let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".into());
        Command::new(cargo)
            .args(["run", "-q", "-p", "spooler", "--"])
            .args(&self.args)
            .env("RUST_LOG", "warn")
            .output()
    }
}
