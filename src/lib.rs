//! Punctuation and casing restoration for raw, unpunctuated transcripts.
//!
//! Speech-to-text output arrives as a lowercase word stream with no sentence
//! structure. This crate rebuilds that structure. The input is split into
//! fixed-size word windows with a configurable overlap and each window is
//! sent to a token-classification backend through the [`SpanLabeler`]
//! trait; every word's final label is decided by majority vote over the
//! windows that covered it, and the labels are then rendered back into
//! punctuated, cased text.
//!
//! [`Punctuator`] processes a complete transcript in one call;
//! [`StreamingPunctuator`] accepts text incrementally and surfaces the
//! settled prefix of the output as soon as no future window can change it.
//!
//! ```
//! use std::sync::Arc;
//!
//! use repunct::{LabeledSpan, PunctConfig, Punctuator, SpanLabeler};
//!
//! /// Labels every word as plain lowercase.
//! struct EchoLabeler;
//!
//! impl SpanLabeler for EchoLabeler {
//!     fn label_window(&self, window_text: &str) -> Result<Vec<LabeledSpan>, anyhow::Error> {
//!         Ok(vec![LabeledSpan::new("OO", window_text)])
//!     }
//! }
//!
//! let engine = Punctuator::new(Arc::new(EchoLabeler), PunctConfig::default());
//! assert_eq!(engine.punctuate("Hello, world")?, "hello world");
//! # Ok::<(), repunct::PunctError>(())
//! ```

pub mod config;

pub mod core {
    pub mod errors;
    pub mod labels;
    pub mod normalize;
    pub mod oracle;
    pub mod words;
}

pub mod engine {
    pub mod punctuator;
    pub mod streamer;
    pub mod votes;
    pub mod windows;
}

pub use self::config::{Language, PunctConfig};
pub use self::core::errors::{AlignmentError, GeometryError, PunctError};
pub use self::core::labels::Label;
pub use self::core::normalize::normalize_and_split;
pub use self::core::oracle::{LabeledSpan, SpanLabeler};
pub use self::core::words::WordSlot;
pub use self::engine::punctuator::Punctuator;
pub use self::engine::streamer::StreamingPunctuator;
