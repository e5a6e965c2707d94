use serde::{Deserialize, Serialize};

/// One contiguous run of words sharing a single label code, as returned by a
/// token-classification backend.
///
/// Field names serialize to the wire form such backends emit
/// (`entity_group`/`word`), so a remote model served as JSON can be consumed
/// without adapter types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSpan {
    #[serde(rename = "entity_group")]
    pub label: String,
    #[serde(rename = "word")]
    pub text: String,
}

impl LabeledSpan {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Object-safe interface to the sequence-labeling model.
///
/// Implementations are selected at construction time and shared behind
/// `Arc<dyn SpanLabeler>`; the engines depend only on this trait. A call is
/// blocking request/response: one window of single-space-joined words in,
/// an ordered span list out whose concatenated words must re-split to
/// exactly the window's words. Backend failures are reported as opaque
/// errors and folded into [`PunctError::Labeler`](crate::core::errors::PunctError).
pub trait SpanLabeler: Send + Sync {
    /// Label a single window.
    fn label_window(&self, window_text: &str) -> Result<Vec<LabeledSpan>, anyhow::Error>;

    /// Label a batch of windows, preserving order. The default maps
    /// [`label_window`](Self::label_window) over the batch; backends with a
    /// native batched call can override it.
    fn label_windows(
        &self,
        window_texts: &[String],
    ) -> Result<Vec<Vec<LabeledSpan>>, anyhow::Error> {
        window_texts
            .iter()
            .map(|text| self.label_window(text))
            .collect()
    }
}
