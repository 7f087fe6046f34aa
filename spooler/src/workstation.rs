// SPDX-License-Identifier: MIT
//
// Author: Johannes Leupolz <dev@leupolz.eu>

use std::ops::Deref;
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, Context};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::spooler::error::SpoolError;
use crate::spooler::print_spooler::PrintSpooler;

/// A client that submits one batch of documents to the spooler.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Workstation {
    #[serde(rename = "workstation")]
    pub name: String,
    pub documents: Vec<String>,
}

impl Workstation {
    pub fn new(name: impl Into<String>, documents: Vec<String>) -> Self {
        Self {
            name: name.into(),
            documents,
        }
    }

    /// The two workstations used when no batch is given on the command line.
    pub fn samples() -> Vec<Workstation> {
        vec![
            Workstation::new(
                "PC1",
                vec!["PC1_doc1".into(), "PC1_doc2".into(), "PC1_doc3".into()],
            ),
            Workstation::new(
                "PC2",
                vec!["PC2_doc4".into(), "PC2_doc5".into(), "PC2_doc6".into()],
            ),
        ]
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).with_context(|| format!("invalid batch JSON: {json}"))
    }
}

/// Runs every submission on its own thread, so workstations really do race for
/// the queue lock.
#[derive(Debug, Default)]
pub struct SubmissionDispatcher {
    handles: Vec<(String, JoinHandle<Result<(), SpoolError>>)>,
}

impl SubmissionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch<S>(&mut self, spooler: S, workstation: Workstation) -> anyhow::Result<()>
    where
        S: Deref<Target = PrintSpooler> + Send + 'static,
    {
        let Workstation { name, documents } = workstation;
        let thread_name = format!("submit-{name}");
        let handle = thread::Builder::new()
            .name(thread_name.clone())
            .spawn(move || {
                debug!("Submitting {} document(s)", documents.len());
                spooler.add_jobs(Some(documents))
            })
            .with_context(|| format!("failed to spawn thread {thread_name}"))?;
        info!("Dispatched submission for {name}");
        self.handles.push((name, handle));
        Ok(())
    }

    pub fn pending_submissions(&self) -> usize {
        self.handles.len()
    }

    /// Joins every submission thread. All threads are joined even if one of them failed;
    /// the first failure is returned.
    pub fn wait_until_finished(&mut self) -> anyhow::Result<()> {
        let mut first_error = None;
        for (name, handle) in self.handles.drain(..) {
            let result = match handle.join() {
                Ok(submitted) => {
                    submitted.with_context(|| format!("submission from {name} was rejected"))
                }
                Err(_) => Err(anyhow!("submission thread for {name} panicked")),
            };
            if let Err(e) = result {
                first_error.get_or_insert(e);
            }
        }
        debug!("All submissions finished");
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
