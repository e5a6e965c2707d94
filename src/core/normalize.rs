use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("static pattern"));

/// Lowercase `text`, strip everything that is neither a word character nor
/// whitespace, and split on whitespace.
///
/// This is the tokenization both engines run on their input, so a streamed
/// text and its one-shot equivalent always agree on word boundaries.
/// Idempotent: re-normalizing the joined output changes nothing. An empty or
/// all-whitespace input yields no words.
pub fn normalize_and_split(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    stripped.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize_and_split("Hej, med Dig!"),
            vec!["hej", "med", "dig"]
        );
    }

    #[test]
    fn keeps_unicode_word_characters() {
        assert_eq!(
            normalize_and_split("Træning på Århus-kajen"),
            vec!["træning", "på", "århuskajen"]
        );
    }

    #[test]
    fn collapses_arbitrary_whitespace() {
        assert_eq!(
            normalize_and_split("  et\tto \n tre  "),
            vec!["et", "to", "tre"]
        );
    }

    #[test]
    fn empty_and_blank_inputs_yield_no_words() {
        assert!(normalize_and_split("").is_empty());
        assert!(normalize_and_split(" \t\n ").is_empty());
        assert!(normalize_and_split("...!?,").is_empty());
    }

    #[test]
    fn normalizing_is_idempotent() {
        let words = normalize_and_split("Mit navn, det er Rasmus!");
        let rejoined = words.join(" ");
        assert_eq!(normalize_and_split(&rejoined), words);
    }
}
