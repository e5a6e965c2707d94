use std::collections::HashMap;

/// One input word and the label votes it has collected, one vote per window
/// that covered it, in window-processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSlot {
    word: String,
    votes: Vec<String>,
}

impl WordSlot {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            votes: Vec::new(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    pub fn push_vote(&mut self, label_code: impl Into<String>) {
        self.votes.push(label_code.into());
    }

    /// Majority label across the recorded votes, `None` when no window has
    /// voted yet. Ties go to the code whose running count first reached the
    /// winning total, so the earliest window wins a two-way split.
    pub fn resolved_label(&self) -> Option<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut best: Option<&str> = None;
        let mut best_count = 0usize;
        for code in &self.votes {
            let count = counts.entry(code.as_str()).or_insert(0);
            *count += 1;
            if *count > best_count {
                best_count = *count;
                best = Some(code.as_str());
            }
        }
        best
    }
}

/// Join slot words with single spaces, the exact form windows are submitted
/// to the labeler in.
pub fn join_words(slots: &[WordSlot]) -> String {
    let mut text = String::new();
    for slot in slots {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(slot.word());
    }
    text
}
