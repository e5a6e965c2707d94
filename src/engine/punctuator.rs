use std::sync::Arc;

use tracing::debug;

use crate::config::PunctConfig;
use crate::core::errors::PunctError;
use crate::core::labels;
use crate::core::normalize::normalize_and_split;
use crate::core::oracle::SpanLabeler;
use crate::core::words::{join_words, WordSlot};
use crate::engine::votes::align_and_vote;
use crate::engine::windows::plan_windows;

/// One-shot punctuation engine.
///
/// Runs the whole input through the windowing, labeling, vote-aggregation
/// and reconstruction stages in a single call. For incremental input see
/// [`StreamingPunctuator`](crate::engine::streamer::StreamingPunctuator).
pub struct Punctuator {
    labeler: Arc<dyn SpanLabeler>,
    config: PunctConfig,
}

impl Punctuator {
    pub fn new(labeler: Arc<dyn SpanLabeler>, config: PunctConfig) -> Self {
        Self { labeler, config }
    }

    pub fn config(&self) -> &PunctConfig {
        &self.config
    }

    pub(crate) fn labeler(&self) -> &dyn SpanLabeler {
        self.labeler.as_ref()
    }

    /// Restore punctuation and casing over `text`.
    ///
    /// The input is normalized first, so casing and stray punctuation in it
    /// do not leak through. Returns an empty string for input that
    /// normalizes to no words.
    pub fn punctuate(&self, text: &str) -> Result<String, PunctError> {
        let words = normalize_and_split(text);
        if words.is_empty() {
            return Ok(String::new());
        }
        let mut slots: Vec<WordSlot> = words.into_iter().map(WordSlot::new).collect();
        let windows = plan_windows(slots.len(), &self.config);
        let window_texts: Vec<String> = windows
            .iter()
            .map(|window| join_words(&slots[window.start..window.end()]))
            .collect();
        debug!(
            words = slots.len(),
            windows = windows.len(),
            "labelling windows"
        );
        let labelled = self.labeler.label_windows(&window_texts)?;
        for (window, spans) in windows.iter().zip(labelled.iter()) {
            align_and_vote(window.start, window.len, spans, &mut slots)?;
        }
        labels::render(&slots)
    }
}
