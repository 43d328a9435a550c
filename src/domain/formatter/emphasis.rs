//! Emphasis splitter: breaks a flat string into plain and emphasized
//! segments on matched `**...**` marker pairs.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::content::Segment;

/// A complete, non-greedy, non-nested `**...**` pair. A lone or
/// unterminated `**` never matches and therefore stays plain text.
static EMPHASIS_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*.*?\*\*").expect("emphasis pattern must compile"));

/// Splits `input` into an ordered sequence of segments.
///
/// The split keeps every fragment, including empty ones between or
/// around marker pairs, so that concatenating the segment texts yields
/// `input` with all `**` pairs removed and nothing else changed.
/// Evaluation is lazy; segments are produced on demand.
pub fn split_emphasis(input: &str) -> EmphasisSegments<'_> {
    EmphasisSegments {
        input,
        cursor: 0,
        queued: None,
        exhausted: false,
    }
}

/// Lazy iterator over the segments of one input string.
///
/// Alternates plain gaps with emphasized spans: before each `**...**`
/// match the (possibly empty) gap is yielded as a plain segment, then
/// the span with its markers stripped as an emphasized segment; the
/// final gap after the last match is always yielded, even when empty.
pub struct EmphasisSegments<'a> {
    input: &'a str,
    cursor: usize,
    queued: Option<Segment>,
    exhausted: bool,
}

impl Iterator for EmphasisSegments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if let Some(segment) = self.queued.take() {
            return Some(segment);
        }
        if self.exhausted {
            return None;
        }

        match EMPHASIS_PAIR.find_at(self.input, self.cursor) {
            Some(found) => {
                let gap = &self.input[self.cursor..found.start()];
                let span = found.as_str();
                self.queued = Some(Segment::emphasized(&span[2..span.len() - 2]));
                self.cursor = found.end();
                Some(Segment::plain(gap))
            }
            None => {
                self.exhausted = true;
                Some(Segment::plain(&self.input[self.cursor..]))
            }
        }
    }
}
