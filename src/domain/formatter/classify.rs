//! Structure classifier: decides whether a reply carries an enumerated
//! list and splits it into introduction, items, and conclusion.
//!
//! The list-and-conclusion region is tokenized into marker and text
//! fragments, then walked by a two-state machine. The machine collects
//! items only while enumerator markers keep arriving back to back; the
//! first fragment that is not announced by a marker ends list mode for
//! good, and everything after it (further markers included) becomes
//! conclusion text. A second enumeration later in the same message is
//! therefore swallowed into the conclusion rather than re-detected.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::content::{ContentNode, Segment};

use super::emphasis::split_emphasis;

/// Probe for the start of a list: the literal `1.` enumerator. Only this
/// first detection is anchored to the digit one; subsequent markers are
/// matched generically.
static LIST_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*1\.\s*").expect("list-start pattern must compile"));

/// Generic enumerator: one or more digits, a period, optional
/// whitespace. Matching is lexical, never numeric.
static ENUMERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.\s*").expect("enumerator pattern must compile"));

/// One lexical fragment of the list-and-conclusion region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fragment<'a> {
    /// An enumerator token. Structural only; never rendered as content.
    Marker(&'a str),
    /// Prose between enumerators, non-empty after trimming.
    Text(&'a str),
}

impl<'a> Fragment<'a> {
    fn raw(self) -> &'a str {
        match self {
            Fragment::Marker(raw) | Fragment::Text(raw) => raw,
        }
    }
}

/// Classifier phase while walking region fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListPhase {
    /// Enumerator markers are arriving; the next text fragment becomes a
    /// list item.
    AwaitingItem,
    /// List mode has ended; every remaining fragment is conclusion text.
    Concluding,
}

/// Turns a full reply string into its ordered content nodes.
///
/// Total over all inputs: there is no failure path. Prose that merely
/// looks like an enumerator (`"see section 1. below"`) is misread as a
/// list start; that lexical best-effort guess is intentional and is not
/// special-cased away.
pub fn classify_message(text: &str) -> Vec<ContentNode> {
    let Some(probe) = LIST_START.find(text) else {
        return vec![ContentNode::Paragraph(segments_of(text.trim()))];
    };

    let intro = text[..probe.start()].trim();
    let region = text[probe.start()..].trim();

    let mut items: Vec<&str> = Vec::new();
    let mut conclusion = String::new();
    let mut phase = ListPhase::AwaitingItem;

    for fragment in tokenize_region(region) {
        match phase {
            ListPhase::AwaitingItem => match fragment {
                Fragment::Marker(_) => {}
                Fragment::Text(body) => {
                    items.push(body.trim());
                    phase = ListPhase::Concluding;
                }
            },
            ListPhase::Concluding => conclusion.push_str(fragment.raw()),
        }
    }

    let mut nodes = Vec::new();
    if !intro.is_empty() {
        nodes.push(ContentNode::Paragraph(segments_of(intro)));
    }
    if !items.is_empty() {
        nodes.push(ContentNode::List(
            items.into_iter().map(segments_of).collect(),
        ));
    }
    let conclusion = conclusion.trim();
    if !conclusion.is_empty() {
        nodes.push(ContentNode::Paragraph(segments_of(conclusion)));
    }

    nodes
}

/// Splits the region on enumerators while keeping the enumerators
/// themselves as fragments. Gaps that are empty after trimming are
/// dropped; surviving fragments keep their raw text (markers retain
/// trailing whitespace) so conclusion concatenation stays verbatim.
fn tokenize_region(region: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut cursor = 0;

    for found in ENUMERATOR.find_iter(region) {
        let gap = &region[cursor..found.start()];
        if !gap.trim().is_empty() {
            fragments.push(Fragment::Text(gap));
        }
        fragments.push(Fragment::Marker(found.as_str()));
        cursor = found.end();
    }

    let tail = &region[cursor..];
    if !tail.trim().is_empty() {
        fragments.push(Fragment::Text(tail));
    }

    fragments
}

fn segments_of(text: &str) -> Vec<Segment> {
    split_emphasis(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(text: &str) -> ContentNode {
        ContentNode::Paragraph(vec![Segment::plain(text)])
    }

    #[test]
    fn prose_without_enumerators_is_one_paragraph() {
        let nodes = classify_message("Hello world");

        assert_eq!(nodes, vec![paragraph("Hello world")]);
    }

    #[test]
    fn empty_input_is_one_paragraph_with_an_empty_segment() {
        let nodes = classify_message("");

        assert_eq!(nodes, vec![paragraph("")]);
    }

    #[test]
    fn whole_input_is_trimmed_when_no_list_is_found() {
        let nodes = classify_message("  padded prose  ");

        assert_eq!(nodes, vec![paragraph("padded prose")]);
    }

    #[test]
    fn first_unescorted_fragment_ends_list_mode_for_good() {
        let nodes = classify_message("Intro text 1. First item 2. Second item Conclusion.");

        assert_eq!(
            nodes,
            vec![
                paragraph("Intro text"),
                ContentNode::List(vec![vec![Segment::plain("First item")]]),
                paragraph("2. Second item Conclusion."),
            ]
        );
    }

    #[test]
    fn introduction_keeps_its_emphasis_segments() {
        let nodes = classify_message("**Bold** start 1. one 2. two");

        assert_eq!(
            nodes,
            vec![
                ContentNode::Paragraph(vec![
                    Segment::plain(""),
                    Segment::emphasized("Bold"),
                    Segment::plain(" start"),
                ]),
                ContentNode::List(vec![vec![Segment::plain("one")]]),
                paragraph("2. two"),
            ]
        );
    }

    #[test]
    fn list_without_introduction_omits_the_intro_paragraph() {
        let nodes = classify_message("1. only item");

        assert_eq!(
            nodes,
            vec![ContentNode::List(vec![vec![Segment::plain("only item")]])]
        );
    }

    #[test]
    fn consecutive_markers_keep_awaiting_an_item() {
        let nodes = classify_message("Steps: 1. 2. go");

        assert_eq!(
            nodes,
            vec![
                paragraph("Steps:"),
                ContentNode::List(vec![vec![Segment::plain("go")]]),
            ]
        );
    }

    #[test]
    fn bare_enumerator_produces_no_nodes() {
        let nodes = classify_message("1.");

        assert!(nodes.is_empty());
    }

    #[test]
    fn item_text_is_split_for_emphasis() {
        let nodes = classify_message("Pick: 1. **red** paint 2. blue");

        assert_eq!(
            nodes,
            vec![
                paragraph("Pick:"),
                ContentNode::List(vec![vec![
                    Segment::plain(""),
                    Segment::emphasized("red"),
                    Segment::plain(" paint"),
                ]]),
                paragraph("2. blue"),
            ]
        );
    }

    #[test]
    fn digit_period_prose_is_misread_as_a_list_by_design() {
        let nodes = classify_message("Version 1. 2 is out");

        assert_eq!(
            nodes,
            vec![
                paragraph("Version"),
                ContentNode::List(vec![vec![Segment::plain("2 is out")]]),
            ]
        );
    }

    #[test]
    fn later_enumerations_are_swallowed_into_the_conclusion() {
        let nodes =
            classify_message("Plan: 1. draft the copy then review. Also: 1. budget 2. launch");

        assert_eq!(
            nodes,
            vec![
                paragraph("Plan:"),
                ContentNode::List(vec![vec![Segment::plain(
                    "draft the copy then review. Also:"
                )]]),
                paragraph("1. budget 2. launch"),
            ]
        );
    }

    #[test]
    fn enumerator_matching_is_lexical_not_numeric() {
        let nodes = classify_message("1. first 17. not renumbered");

        assert_eq!(
            nodes,
            vec![
                ContentNode::List(vec![vec![Segment::plain("first")]]),
                paragraph("17. not renumbered"),
            ]
        );
    }
}
