mod common;

use std::sync::Arc;

use redakt_core::errors::{RedaktError, RedaktResult};
use redakt_core::traits::IDocumentAdapter;
use redakt_core::{EntityLabel, Sensitivity};
use redakt_engine::{RedactionBatch, RedactionEngine};
use redakt_learned::LearnedStore;

use common::{FindingExtractor, TriggerFailExtractor};

/// In-memory document: a name plus editable text segments.
struct VecDocument {
    name: String,
    segments: Vec<String>,
}

impl VecDocument {
    fn boxed(name: &str, segments: &[&str]) -> Box<dyn IDocumentAdapter> {
        Box::new(Self {
            name: name.to_string(),
            segments: segments.iter().map(|s| s.to_string()).collect(),
        })
    }
}

impl IDocumentAdapter for VecDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn segments(&self) -> RedaktResult<Vec<String>> {
        Ok(self.segments.clone())
    }

    fn replace_segment(&mut self, index: usize, replacement: &str) -> RedaktResult<()> {
        let slot = self
            .segments
            .get_mut(index)
            .ok_or_else(|| RedaktError::Adapter {
                reason: format!("segment index {index} out of range"),
            })?;
        *slot = replacement.to_string();
        Ok(())
    }
}

/// A document whose container cannot even be read.
struct CorruptDocument;

impl IDocumentAdapter for CorruptDocument {
    fn name(&self) -> &str {
        "corrupt.docx"
    }

    fn segments(&self) -> RedaktResult<Vec<String>> {
        Err(RedaktError::Adapter {
            reason: "container is corrupt".into(),
        })
    }

    fn replace_segment(&mut self, _index: usize, _replacement: &str) -> RedaktResult<()> {
        Ok(())
    }
}

fn standard_engine(entities: &[(&str, EntityLabel, f64)]) -> RedactionEngine {
    RedactionEngine::new(
        Arc::new(FindingExtractor::new(entities)),
        Sensitivity::Standard,
    )
}

// ── Happy path ────────────────────────────────────────────────────────────

#[test]
fn batch_redacts_all_segments_of_all_documents() {
    let engine = standard_engine(&[("Max Mustermann", EntityLabel::Per, 0.95)]);
    let store = LearnedStore::in_memory();
    let mut batch = RedactionBatch::new(&engine, &store);

    let mut docs = vec![
        VecDocument::boxed(
            "klage.docx",
            &["Max Mustermann erhebt Klage.", "Kontakt: max@kanzlei-beispiel.de"],
        ),
        VecDocument::boxed("anlage.docx", &["Anlage ohne sensible Daten."]),
    ];
    let report = batch.run(&mut docs);

    assert!(report.all_succeeded());
    assert_eq!(report.processed.len(), 2);

    let first = docs[0].segments().unwrap();
    assert_eq!(first[0], "Person A erhebt Klage.");
    assert_eq!(first[1], "Kontakt: [E-MAIL REDACTED]");
    let second = docs[1].segments().unwrap();
    assert_eq!(second[0], "Anlage ohne sensible Daten.");
}

#[test]
fn same_person_in_two_files_shares_one_placeholder() {
    let engine = standard_engine(&[("Max Mustermann", EntityLabel::Per, 0.95)]);
    let store = LearnedStore::in_memory();
    let mut batch = RedactionBatch::new(&engine, &store);

    let mut docs = vec![
        VecDocument::boxed("a.docx", &["Max Mustermann ist Kläger."]),
        VecDocument::boxed("b.docx", &["Zeugenaussage von Max Mustermann."]),
    ];
    let report = batch.run(&mut docs);

    assert!(report.all_succeeded());
    assert_eq!(
        docs[0].segments().unwrap()[0],
        "Person A ist Kläger."
    );
    assert_eq!(
        docs[1].segments().unwrap()[0],
        "Zeugenaussage von Person A."
    );
    assert_eq!(batch.registry().count(EntityLabel::Per), 1);
}

// ── Failure isolation ─────────────────────────────────────────────────────

#[test]
fn corrupt_document_does_not_abort_the_batch() {
    let engine = standard_engine(&[("Max Mustermann", EntityLabel::Per, 0.95)]);
    let store = LearnedStore::in_memory();
    let mut batch = RedactionBatch::new(&engine, &store);

    let mut docs: Vec<Box<dyn IDocumentAdapter>> = vec![
        Box::new(CorruptDocument),
        VecDocument::boxed("ok.docx", &["Max Mustermann erschien."]),
    ];
    let report = batch.run(&mut docs);

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].name, "corrupt.docx");
    assert!(report.failed[0].reason.contains("corrupt"));
    assert_eq!(report.processed, ["ok.docx"]);
    assert_eq!(docs[1].segments().unwrap()[0], "Person A erschien.");
}

#[test]
fn unavailable_engine_fails_the_file_not_the_batch_machinery() {
    use redakt_extract::EnsembleExtractor;

    let engine = RedactionEngine::new(
        Arc::new(EnsembleExtractor::new(None, None)),
        Sensitivity::Standard,
    );
    let store = LearnedStore::in_memory();
    let mut batch = RedactionBatch::new(&engine, &store);

    let mut docs = vec![VecDocument::boxed("doc.docx", &["Max Mustermann klagt."])];
    let report = batch.run(&mut docs);

    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].reason.contains("unavailable"));
}

#[test]
fn no_partial_output_when_a_later_segment_fails() {
    let engine = RedactionEngine::new(
        Arc::new(TriggerFailExtractor { needle: "KAPUTT" }),
        Sensitivity::Standard,
    );
    let store = LearnedStore::in_memory();
    let mut batch = RedactionBatch::new(&engine, &store);

    let mut docs = vec![VecDocument::boxed(
        "teils.docx",
        &["Kontakt: max@kanzlei-beispiel.de", "KAPUTT macht alles kaputt"],
    )];
    let report = batch.run(&mut docs);

    assert_eq!(report.failed.len(), 1);
    // The first segment would have been redacted, but the file failed as a
    // whole: nothing may be written back.
    let segments = docs[0].segments().unwrap();
    assert_eq!(segments[0], "Kontakt: max@kanzlei-beispiel.de");
}

// ── Session summary surfaces ──────────────────────────────────────────────

#[test]
fn registry_and_log_are_available_after_the_run() {
    let engine = standard_engine(&[
        ("Max Mustermann", EntityLabel::Per, 0.95),
        ("Berlin", EntityLabel::Loc, 0.95),
    ]);
    let store = LearnedStore::in_memory();
    let mut batch = RedactionBatch::new(&engine, &store);

    let mut docs = vec![VecDocument::boxed(
        "doc.docx",
        &["Max Mustermann wohnt in Berlin."],
    )];
    batch.run(&mut docs);

    let assignments: Vec<(&str, &str)> = batch.registry().assignments(EntityLabel::Per).collect();
    assert_eq!(assignments, [("Max Mustermann", "Person A")]);
    assert!(batch
        .log()
        .whitelisted()
        .iter()
        .any(|e| e.text == "Berlin"));

    let (registry, log) = batch.into_parts();
    assert_eq!(registry.total(), 1);
    assert!(!log.is_empty());
}

#[test]
fn repeated_skips_deduplicate_in_the_review_view() {
    use redakt_engine::DecisionLog;

    let engine = standard_engine(&[("Berlin", EntityLabel::Loc, 0.95)]);
    let store = LearnedStore::in_memory();
    let mut batch = RedactionBatch::new(&engine, &store);

    let mut docs = vec![VecDocument::boxed(
        "doc.docx",
        &["Berlin bleibt Berlin.", "Berlin ist Hauptstadt."],
    )];
    batch.run(&mut docs);

    assert_eq!(batch.log().whitelisted().len(), 3);
    let unique = DecisionLog::unique(batch.log().whitelisted());
    assert_eq!(unique, [("Berlin".to_string(), EntityLabel::Loc)]);
}

// ── Offset substitutions through the adapter contract ─────────────────────

#[test]
fn adapter_applies_offset_substitutions_back_to_front() {
    use redakt_core::traits::Substitution;

    let mut doc = VecDocument {
        name: "seite.pdf".into(),
        segments: vec!["Herr Max Mustermann wohnt in Görlitz".into()],
    };
    // Spans as the rewrite alignment would report them, in ascending order;
    // the adapter must apply them back-to-front.
    let subs = [
        Substitution {
            start: 5,
            end: 19,
            replacement: "██████".into(),
        },
        Substitution {
            start: 29,
            end: 36,
            replacement: "██████".into(),
        },
    ];
    doc.apply_substitutions(0, &subs).unwrap();
    assert_eq!(
        doc.segments().unwrap()[0],
        "Herr ██████ wohnt in ██████"
    );
}
