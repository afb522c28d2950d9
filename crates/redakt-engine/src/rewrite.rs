//! Alignment for the external rewriting service.
//!
//! The service returns rewritten text in which sensitive spans became the
//! fixed marker token, with no offsets. For downstream visual blackout the
//! approximate source spans are recovered by greedily aligning contiguous
//! marker runs in the rewritten word sequence against the input word
//! sequence. An approximation, not exact: reflowed words are skipped over
//! and unanchored trailing markers extend to the end of the input.

use redakt_core::constants::REWRITE_MARKER;
use redakt_core::errors::RedaktResult;
use redakt_core::traits::IRewriter;

/// An approximate character range of the input that the rewriting service
/// redacted. `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkedSpan {
    pub start: usize,
    pub end: usize,
}

struct Word {
    start: usize,
    end: usize,
    text: String,
}

fn words_with_offsets(text: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut start = None;
    let mut buf = String::new();
    let mut index = 0;
    for c in text.chars() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push(Word {
                    start: s,
                    end: index,
                    text: std::mem::take(&mut buf),
                });
            }
        } else {
            if start.is_none() {
                start = Some(index);
            }
            buf.push(c);
        }
        index += 1;
    }
    if let Some(s) = start {
        words.push(Word {
            start: s,
            end: index,
            text: buf,
        });
    }
    words
}

/// Recover approximate redacted spans of `input` from `rewritten`.
/// Offsets are character positions into `input`.
pub fn align_marker_spans(input: &str, rewritten: &str) -> Vec<MarkedSpan> {
    let input_words = words_with_offsets(input);
    let output_words: Vec<&str> = rewritten.split_whitespace().collect();

    let mut spans = Vec::new();
    let mut i = 0; // input word cursor
    let mut j = 0; // output word cursor
    while j < output_words.len() {
        if output_words[j].contains(REWRITE_MARKER) {
            // Consume the whole contiguous marker run.
            while j < output_words.len() && output_words[j].contains(REWRITE_MARKER) {
                j += 1;
            }
            // The redacted input words run up to the next word both
            // sequences agree on; without such an anchor the run extends
            // to the end of the input.
            let run_start = i;
            let run_end = match output_words.get(j) {
                Some(anchor) => input_words[i..]
                    .iter()
                    .position(|w| w.text == *anchor)
                    .map(|offset| i + offset)
                    .unwrap_or(input_words.len()),
                None => input_words.len(),
            };
            if run_end > run_start {
                spans.push(MarkedSpan {
                    start: input_words[run_start].start,
                    end: input_words[run_end - 1].end,
                });
            }
            i = run_end;
        } else {
            if let Some(offset) = input_words[i..]
                .iter()
                .position(|w| w.text == output_words[j])
            {
                i += offset + 1;
            }
            j += 1;
        }
    }
    spans
}

/// Run the rewriting service on one segment and align its markers back
/// onto the input.
pub fn rewrite_segment(
    rewriter: &dyn IRewriter,
    text: &str,
) -> RedaktResult<(String, Vec<MarkedSpan>)> {
    let rewritten = rewriter.rewrite(text)?;
    let spans = align_marker_spans(text, &rewritten);
    Ok((rewritten, spans))
}
