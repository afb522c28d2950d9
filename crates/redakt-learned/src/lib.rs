//! Durable, user-editable correction lists.
//!
//! Two override lists steer the engine past detection mistakes: terms that
//! must never be redacted (false positives the user flagged) and terms per
//! label that must always be redacted (entities detection missed). Every
//! mutation writes through to the JSON file synchronously before
//! returning; a failed write is logged and the in-memory store stays
//! authoritative for the rest of the run. Cross-session concurrent writers
//! are not coordinated.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use redakt_core::errors::StoreError;
use redakt_core::EntityLabel;

/// The persisted object, exactly as written to disk:
/// `{ "never_redact": [...], "always_redact": { "PER": [...], "ORG": [...], "LOC": [...] } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnedData {
    pub never_redact: Vec<String>,
    pub always_redact: BTreeMap<EntityLabel, Vec<String>>,
}

impl Default for LearnedData {
    fn default() -> Self {
        let mut always_redact = BTreeMap::new();
        for label in EntityLabel::ALL {
            always_redact.insert(label, Vec::new());
        }
        Self {
            never_redact: Vec::new(),
            always_redact,
        }
    }
}

/// The learned correction store. Loaded once at process start, read on
/// every pipeline invocation, mutated only by explicit user action.
#[derive(Debug)]
pub struct LearnedStore {
    path: Option<PathBuf>,
    data: LearnedData,
}

impl LearnedStore {
    /// A store without backing file. Mutations stay in memory only.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: LearnedData::default(),
        }
    }

    /// Load the store from `path`. A missing file starts an empty store;
    /// an unreadable or malformed file is an error so a corrupt
    /// corrections list is never silently discarded.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            info!(path = %path.display(), "no corrections file yet, starting empty");
            return Ok(Self {
                path: Some(path),
                data: LearnedData::default(),
            });
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| StoreError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mut data: LearnedData =
            serde_json::from_str(&raw).map_err(|e| StoreError::MalformedFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        // Older files may lack a label key; every label is always present
        // in memory.
        for label in EntityLabel::ALL {
            data.always_redact.entry(label).or_default();
        }

        info!(
            path = %path.display(),
            never = data.never_redact.len(),
            always = data.always_redact.values().map(Vec::len).sum::<usize>(),
            "learned corrections loaded"
        );
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    /// Whether `text` is on the never-redact list.
    pub fn is_never_redact(&self, text: &str) -> bool {
        let clean = text.trim();
        self.data.never_redact.iter().any(|t| t == clean)
    }

    /// Add `text` to the never-redact list and persist.
    pub fn add_never_redact(&mut self, text: &str) {
        let clean = text.trim();
        if clean.is_empty() || self.is_never_redact(clean) {
            return;
        }
        self.data.never_redact.push(clean.to_string());
        self.persist();
    }

    /// Remove `text` from the never-redact list and persist.
    pub fn remove_never_redact(&mut self, text: &str) {
        let clean = text.trim();
        let before = self.data.never_redact.len();
        self.data.never_redact.retain(|t| t != clean);
        if self.data.never_redact.len() != before {
            self.persist();
        }
    }

    /// Add `text` to the always-redact list under `label` and persist.
    pub fn add_always_redact(&mut self, text: &str, label: EntityLabel) {
        let clean = text.trim();
        if clean.is_empty() {
            return;
        }
        let terms = self.data.always_redact.entry(label).or_default();
        if terms.iter().any(|t| t == clean) {
            return;
        }
        terms.push(clean.to_string());
        self.persist();
    }

    /// Remove `text` from the always-redact list under `label` and persist.
    pub fn remove_always_redact(&mut self, text: &str, label: EntityLabel) {
        let clean = text.trim();
        let Some(terms) = self.data.always_redact.get_mut(&label) else {
            return;
        };
        let before = terms.len();
        terms.retain(|t| t != clean);
        if terms.len() != before {
            self.persist();
        }
    }

    /// All always-redact terms, keyed by label in PER/ORG/LOC order.
    pub fn always_redact(&self) -> &BTreeMap<EntityLabel, Vec<String>> {
        &self.data.always_redact
    }

    /// The full correction data, for review surfaces.
    pub fn data(&self) -> &LearnedData {
        &self.data
    }

    /// Write-through. Persistence failure is logged, never fatal: the
    /// in-memory lists stay authoritative for the rest of the run.
    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let json = match serde_json::to_string_pretty(&self.data) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "could not serialize learned corrections");
                return;
            }
        };
        if let Err(e) = std::fs::write(path, json) {
            warn!(
                path = %path.display(),
                error = %e,
                "could not persist learned corrections, keeping in-memory state"
            );
        }
    }
}
