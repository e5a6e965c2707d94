use std::fmt::{Display, Formatter};

use crate::core::errors::GeometryError;

/// Window geometry for the punctuation engine.
///
/// `chunk_size` is the number of words submitted to the labeler per window,
/// `overlap` the number of words shared between consecutive windows. Both are
/// validated once here so the engines never have to re-check them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunctConfig {
    chunk_size: usize,
    overlap: usize,
}

impl PunctConfig {
    /// Build a validated geometry. Rejects a zero chunk size and any overlap
    /// that is not strictly smaller than the chunk size.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self, GeometryError> {
        if chunk_size == 0 {
            return Err(GeometryError::ZeroChunkSize);
        }
        if overlap >= chunk_size {
            return Err(GeometryError::OverlapTooLarge {
                chunk_size,
                overlap,
            });
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Distance between consecutive window starts. At least 1 for any
    /// validated geometry.
    pub fn stride(&self) -> usize {
        self.chunk_size - self.overlap
    }

    /// Number of windows that can ever cover `position` if the word sequence
    /// extends indefinitely: the count of window indices `i` with
    /// `i * stride <= position < i * stride + chunk_size`.
    pub fn coverage(&self, position: usize) -> usize {
        let stride = self.stride();
        let last = position / stride;
        let first = if position + 1 > self.chunk_size {
            (position + 1 - self.chunk_size + stride - 1) / stride
        } else {
            0
        };
        last - first + 1
    }
}

impl Default for PunctConfig {
    fn default() -> Self {
        Self {
            chunk_size: 100,
            overlap: 70,
        }
    }
}

/// Languages with a published restoration checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Danish,
    German,
    English,
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Danish => write!(f, "da"),
            Language::German => write!(f, "de"),
            Language::English => write!(f, "en"),
        }
    }
}

impl Language {
    /// Parse a language selector. Accepts the two-letter code or the English
    /// language name, case-insensitively.
    pub fn from_code(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "da" | "danish" => Some(Language::Danish),
            "de" | "german" => Some(Language::German),
            "en" | "english" => Some(Language::English),
            _ => None,
        }
    }

    /// Human-readable language name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Danish => "Danish",
            Language::German => "German",
            Language::English => "English",
        }
    }

    /// Identifier of the published token-classification checkpoint for this
    /// language. Custom backends ignore the registry and implement the
    /// labeler trait directly.
    pub fn model_id(&self) -> &'static str {
        match self {
            Language::Danish => "Alvenir/bert-punct-restoration-da",
            Language::German => "Alvenir/bert-punct-restoration-de",
            Language::English => "Alvenir/bert-punct-restoration-en",
        }
    }
}
