use redakt_core::errors::{RedaktError, RedaktResult};
use redakt_core::traits::IRewriter;
use redakt_engine::{align_marker_spans, rewrite_segment, MarkedSpan};

struct ScriptedRewriter {
    output: String,
}

impl IRewriter for ScriptedRewriter {
    fn rewrite(&self, _text: &str) -> RedaktResult<String> {
        Ok(self.output.clone())
    }
}

struct BrokenRewriter;

impl IRewriter for BrokenRewriter {
    fn rewrite(&self, _text: &str) -> RedaktResult<String> {
        Err(RedaktError::Rewrite {
            reason: "service timeout".into(),
        })
    }
}

// ── Marker alignment ──────────────────────────────────────────────────────

#[test]
fn marker_run_aligns_to_the_covered_words() {
    let input = "Herr Max Mustermann wohnt in Berlin";
    let rewritten = "Herr [REDACTED] [REDACTED] wohnt in Berlin";
    let spans = align_marker_spans(input, rewritten);
    assert_eq!(spans, [MarkedSpan { start: 5, end: 19 }]);

    let covered: String = input
        .chars()
        .skip(spans[0].start)
        .take(spans[0].end - spans[0].start)
        .collect();
    assert_eq!(covered, "Max Mustermann");
}

#[test]
fn trailing_marker_extends_to_the_input_end() {
    let input = "wohnhaft in Kleinstadt am See";
    let rewritten = "wohnhaft in [REDACTED]";
    let spans = align_marker_spans(input, rewritten);
    assert_eq!(spans, [MarkedSpan { start: 12, end: 29 }]);
}

#[test]
fn multiple_marker_runs_produce_multiple_spans() {
    let input = "Max klagt gegen Erika wegen Geld";
    let rewritten = "[REDACTED] klagt gegen [REDACTED] wegen Geld";
    let spans = align_marker_spans(input, rewritten);
    assert_eq!(
        spans,
        [
            MarkedSpan { start: 0, end: 3 },
            MarkedSpan { start: 16, end: 21 },
        ]
    );
}

#[test]
fn marker_glued_to_punctuation_still_counts() {
    let input = "Der Zeuge Max sagte aus";
    let rewritten = "Der Zeuge [REDACTED], sagte aus";
    let spans = align_marker_spans(input, rewritten);
    assert_eq!(spans, [MarkedSpan { start: 10, end: 13 }]);
}

#[test]
fn no_markers_mean_no_spans() {
    let input = "nichts zu schwärzen";
    assert!(align_marker_spans(input, input).is_empty());
}

#[test]
fn fully_redacted_output_covers_the_whole_input() {
    let input = "Max Mustermann";
    let rewritten = "[REDACTED] [REDACTED]";
    let spans = align_marker_spans(input, rewritten);
    assert_eq!(spans, [MarkedSpan { start: 0, end: 14 }]);
}

#[test]
fn alignment_skips_reflowed_words() {
    // The service dropped a filler word; alignment anchors on the next
    // word both sequences share.
    let input = "Der oben genannte Max Mustermann erschien";
    let rewritten = "Der genannte [REDACTED] [REDACTED] erschien";
    let spans = align_marker_spans(input, rewritten);
    assert_eq!(spans.len(), 1);
    let covered: String = input
        .chars()
        .skip(spans[0].start)
        .take(spans[0].end - spans[0].start)
        .collect();
    assert_eq!(covered, "Max Mustermann");
}

#[test]
fn offsets_are_character_indexed() {
    let input = "Größe egal: Jürgen bleibt";
    let rewritten = "Größe egal: [REDACTED] bleibt";
    let spans = align_marker_spans(input, rewritten);
    assert_eq!(spans, [MarkedSpan { start: 12, end: 18 }]);
}

// ── Service wrapper ───────────────────────────────────────────────────────

#[test]
fn rewrite_segment_returns_text_and_spans() {
    let rewriter = ScriptedRewriter {
        output: "Herr [REDACTED] wohnt hier".into(),
    };
    let (rewritten, spans) = rewrite_segment(&rewriter, "Herr Maier wohnt hier").unwrap();
    assert_eq!(rewritten, "Herr [REDACTED] wohnt hier");
    assert_eq!(spans, [MarkedSpan { start: 5, end: 10 }]);
}

#[test]
fn rewriter_failure_propagates() {
    let err = rewrite_segment(&BrokenRewriter, "Text").unwrap_err();
    assert!(matches!(err, RedaktError::Rewrite { .. }));
}
