use tracing::trace;

use crate::core::errors::AlignmentError;
use crate::core::oracle::LabeledSpan;
use crate::core::words::WordSlot;

/// Apply one window's labeler output to the global slot sequence.
///
/// Expands every span into its words, checks the expansion against the
/// window word-for-word, and only then records one vote per position. A
/// window that cannot be reconciled contributes nothing: the whole
/// expansion is validated before the first vote is written.
pub fn align_and_vote(
    window_start: usize,
    window_len: usize,
    spans: &[LabeledSpan],
    slots: &mut [WordSlot],
) -> Result<(), AlignmentError> {
    debug_assert!(window_start + window_len <= slots.len());
    let expanded: Vec<(&str, &str)> = spans
        .iter()
        .flat_map(|span| {
            span.text
                .split_whitespace()
                .map(move |word| (span.label.as_str(), word))
        })
        .collect();
    if expanded.len() != window_len {
        return Err(AlignmentError::SpanCount {
            window_start,
            expected: window_len,
            found: expanded.len(),
        });
    }
    for (position, (_, word)) in expanded.iter().enumerate() {
        let index = window_start + position;
        if slots[index].word() != *word {
            return Err(AlignmentError::WordMismatch {
                window_start,
                index,
                expected: slots[index].word().to_string(),
                found: (*word).to_string(),
            });
        }
    }
    for (position, (label, _)) in expanded.into_iter().enumerate() {
        slots[window_start + position].push_vote(label);
    }
    trace!(window_start, words = window_len, "window votes recorded");
    Ok(())
}
