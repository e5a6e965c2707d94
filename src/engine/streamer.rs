use tracing::debug;

use crate::core::errors::PunctError;
use crate::core::labels;
use crate::core::normalize::normalize_and_split;
use crate::core::words::{join_words, WordSlot};
use crate::engine::punctuator::Punctuator;
use crate::engine::votes::align_and_vote;

/// Incremental punctuation engine.
///
/// Accepts text in arbitrary segments and carves full windows off the
/// incoming words as soon as they are available. The settled prefix of the
/// output is exposed early: a position is settled once it has collected a
/// vote from every window that could ever cover it, so nothing returned
/// from [`ingest`](Self::ingest) or [`current_output`](Self::current_output)
/// is later revised. One instance serves one stream of strictly ordered
/// calls.
pub struct StreamingPunctuator {
    punctuator: Punctuator,
    /// Words ingested but not yet part of any window.
    pending: Vec<WordSlot>,
    /// Words included in at least one window, in global order.
    ledger: Vec<WordSlot>,
    /// Per-position vote cap, extended in lockstep with the ledger.
    vote_caps: Vec<usize>,
    /// Length of the settled ledger prefix. Monotone between resets.
    settled: usize,
    /// Global start index of the next window to carve.
    next_start: usize,
}

impl StreamingPunctuator {
    pub fn new(punctuator: Punctuator) -> Self {
        Self {
            punctuator,
            pending: Vec::new(),
            ledger: Vec::new(),
            vote_caps: Vec::new(),
            settled: 0,
            next_start: 0,
        }
    }

    /// Stream in a text segment.
    ///
    /// Returns `Ok(Some(partial))` when the new words completed at least one
    /// window and the settled output grew, `Ok(None)` when the segment only
    /// accumulated. The partial is the whole settled output so far, not just
    /// the newly settled piece.
    pub fn ingest(&mut self, segment: &str) -> Result<Option<String>, PunctError> {
        let words = normalize_and_split(segment);
        self.pending.extend(words.into_iter().map(WordSlot::new));
        if self.drain(false)? == 0 {
            return Ok(None);
        }
        self.current_output().map(Some)
    }

    /// The settled output so far. Empty until the first window has been
    /// carved, and stable across repeated calls without new input.
    pub fn current_output(&self) -> Result<String, PunctError> {
        labels::render(&self.ledger[..self.settled])
    }

    /// Flush everything still buffered through the labeler and return the
    /// complete punctuated text for the stream, then reset for the next one.
    pub fn finalize(&mut self) -> Result<String, PunctError> {
        self.drain(true)?;
        debug!(words = self.ledger.len(), "finalising stream");
        let output = labels::render(&self.ledger)?;
        self.reset();
        Ok(output)
    }

    /// Discard all buffered words, votes and settled output.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.ledger.clear();
        self.vote_caps.clear();
        self.settled = 0;
        self.next_start = 0;
    }

    /// Carve and label as many windows as the buffered words allow,
    /// returning how many were carved.
    ///
    /// Windows start every `stride` words. A window is normally carved only
    /// once a full chunk of words is available past its start; when
    /// finalizing, ever-shorter windows are carved until every ingested word
    /// has been covered. Words entering their first window move from
    /// `pending` to the ledger; a window's overlap prefix is re-read from
    /// the ledger tail so each word has exactly one owner.
    fn drain(&mut self, finalizing: bool) -> Result<usize, PunctError> {
        let chunk_size = self.punctuator.config().chunk_size();
        let stride = self.punctuator.config().stride();
        let mut carved = 0usize;
        loop {
            let total = self.ledger.len() + self.pending.len();
            let remaining = total.saturating_sub(self.next_start);
            if remaining < chunk_size && !(finalizing && remaining > 0) {
                break;
            }
            let start = self.next_start;
            let len = chunk_size.min(remaining);
            let end = start + len;
            if end > self.ledger.len() {
                let newly_windowed = end - self.ledger.len();
                self.ledger.extend(self.pending.drain(..newly_windowed));
                while self.vote_caps.len() < self.ledger.len() {
                    let cap = self.punctuator.config().coverage(self.vote_caps.len());
                    self.vote_caps.push(cap);
                }
            }
            let window_text = join_words(&self.ledger[start..end]);
            let spans = self.punctuator.labeler().label_window(&window_text)?;
            align_and_vote(start, len, &spans, &mut self.ledger)?;
            self.next_start = start + stride;
            carved += 1;
            debug!(start, len, finalizing, "carved window");
        }
        if carved > 0 {
            self.advance_settled();
        }
        Ok(carved)
    }

    /// Advance the settled frontier over every position that has collected
    /// its full vote cap. Settledness is monotone, so positions are only
    /// ever appended to the settled prefix.
    fn advance_settled(&mut self) {
        while self.settled < self.ledger.len()
            && self.ledger[self.settled].vote_count() == self.vote_caps[self.settled]
        {
            self.settled += 1;
        }
    }
}
