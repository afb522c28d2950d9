//! Batch orchestration: sequential processing of documents behind
//! `IDocumentAdapter`, one placeholder registry and one decision log for
//! the whole batch. Per-file failures are recorded and do not abort the
//! remaining files.

use tracing::{info, warn};

use redakt_core::errors::RedaktResult;
use redakt_core::traits::IDocumentAdapter;
use redakt_learned::LearnedStore;

use crate::decisions::DecisionLog;
use crate::engine::RedactionEngine;
use crate::registry::PlaceholderRegistry;

/// One document that could not be redacted.
#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    pub name: String,
    pub reason: String,
}

/// Per-file outcomes of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<String>,
    pub failed: Vec<FileFailure>,
}

impl BatchReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A batch session: shares one registry across every file so the same
/// entity resolves to the same placeholder in all of them, and one
/// decision log for the end-of-batch review.
pub struct RedactionBatch<'a> {
    engine: &'a RedactionEngine,
    store: &'a LearnedStore,
    registry: PlaceholderRegistry,
    log: DecisionLog,
}

impl<'a> RedactionBatch<'a> {
    pub fn new(engine: &'a RedactionEngine, store: &'a LearnedStore) -> Self {
        Self {
            engine,
            store,
            registry: PlaceholderRegistry::new(),
            log: DecisionLog::new(),
        }
    }

    /// Redact one document. All segments are redacted first and written
    /// back only if every segment completed all three phases: a file
    /// either finishes whole or produces no output at all.
    pub fn process_document(&mut self, doc: &mut dyn IDocumentAdapter) -> RedaktResult<()> {
        let segments = doc.segments()?;

        let mut redacted = Vec::with_capacity(segments.len());
        for segment in &segments {
            redacted.push(self.engine.redact_segment(
                segment,
                &mut self.registry,
                self.store,
                &mut self.log,
            )?);
        }

        for (index, (original, replacement)) in segments.iter().zip(&redacted).enumerate() {
            if original != replacement {
                doc.replace_segment(index, replacement)?;
            }
        }
        Ok(())
    }

    /// Process every document sequentially. A failing document is
    /// recorded in the report and the batch continues.
    pub fn run(&mut self, docs: &mut [Box<dyn IDocumentAdapter>]) -> BatchReport {
        let mut report = BatchReport::default();
        for doc in docs.iter_mut() {
            let name = doc.name().to_string();
            match self.process_document(doc.as_mut()) {
                Ok(()) => {
                    info!(file = %name, "document redacted");
                    report.processed.push(name);
                }
                Err(e) => {
                    warn!(file = %name, error = %e, "document failed, continuing batch");
                    report.failed.push(FileFailure {
                        name,
                        reason: e.to_string(),
                    });
                }
            }
        }
        report
    }

    /// The shared registry, for the end-of-batch entity summary.
    pub fn registry(&self) -> &PlaceholderRegistry {
        &self.registry
    }

    /// The accumulated decision log, for the review summary.
    pub fn log(&self) -> &DecisionLog {
        &self.log
    }

    /// Consume the session, releasing registry and log for materialized
    /// results.
    pub fn into_parts(self) -> (PlaceholderRegistry, DecisionLog) {
        (self.registry, self.log)
    }
}
