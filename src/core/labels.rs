use crate::core::errors::PunctError;
use crate::core::words::WordSlot;

/// A decoded label code.
///
/// Codes carry two independent signals: the leading character names the
/// punctuation mark to append after the word (`'O'` meaning none), the
/// trailing character is `'U'` when the word itself must be capitalized.
/// `"OU"` capitalizes without punctuation, `".O"` appends a period to a
/// lowercase word, `",U"` does both with a comma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    punctuation: Option<char>,
    capitalize: bool,
}

impl Label {
    /// Decode a label code. Total: unknown characters in either position are
    /// carried through as-is, and a single-character code such as `"O"` reads
    /// both positions from the same character.
    pub fn parse(code: &str) -> Self {
        let punctuation = code.chars().next().filter(|&mark| mark != 'O');
        let capitalize = code.chars().last() == Some('U');
        Self {
            punctuation,
            capitalize,
        }
    }

    pub fn punctuation(&self) -> Option<char> {
        self.punctuation
    }

    pub fn capitalize(&self) -> bool {
        self.capitalize
    }

    /// Whether this label ends a sentence and forces a capital on the next
    /// word.
    pub fn ends_sentence(&self) -> bool {
        matches!(self.punctuation, Some('.') | Some('!') | Some('?'))
    }
}

/// Apply a resolved label to a single word.
///
/// Steps, in order: capitalize the word if the label asks for it, append the
/// label's punctuation mark, re-capitalize if the previous word ended a
/// sentence (idempotent when the label already capitalized), then report
/// whether the appended mark forces a capital on the next word.
pub fn compose(word: &str, label: Label, carry_capitalize: bool) -> (String, bool) {
    let mut text = if label.capitalize() {
        true_case(word)
    } else {
        word.to_string()
    };
    if let Some(mark) = label.punctuation() {
        text.push(mark);
    }
    if carry_capitalize {
        text = true_case(&text);
    }
    (text, label.ends_sentence())
}

/// Render a fully voted slot sequence into the final punctuated string.
///
/// Words are joined with single spaces and the sentence-terminator carry
/// starts cleared. Reading a slot that never received a vote is a
/// precondition violation and surfaces as [`PunctError::UnvotedSlot`].
pub fn render(slots: &[WordSlot]) -> Result<String, PunctError> {
    let mut output = String::new();
    let mut carry_capitalize = false;
    for (index, slot) in slots.iter().enumerate() {
        let code = slot
            .resolved_label()
            .ok_or(PunctError::UnvotedSlot { index })?;
        let (text, next_carry) = compose(slot.word(), Label::parse(code), carry_capitalize);
        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(&text);
        carry_capitalize = next_carry;
    }
    Ok(output)
}

/// Upper-case the first character and lower-case the remainder.
fn true_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voted(word: &str, code: &str) -> WordSlot {
        let mut slot = WordSlot::new(word);
        slot.push_vote(code);
        slot
    }

    #[test]
    fn parses_both_label_positions() {
        assert_eq!(
            Label::parse("OU"),
            Label {
                punctuation: None,
                capitalize: true,
            }
        );
        assert_eq!(
            Label::parse(".O"),
            Label {
                punctuation: Some('.'),
                capitalize: false,
            }
        );
        assert_eq!(
            Label::parse(",U"),
            Label {
                punctuation: Some(','),
                capitalize: true,
            }
        );
    }

    #[test]
    fn short_and_empty_codes_read_as_plain() {
        assert_eq!(
            Label::parse("O"),
            Label {
                punctuation: None,
                capitalize: false,
            }
        );
        assert_eq!(
            Label::parse(""),
            Label {
                punctuation: None,
                capitalize: false,
            }
        );
        let question = Label::parse("?");
        assert_eq!(question.punctuation(), Some('?'));
        assert!(!question.capitalize());
        assert!(question.ends_sentence());
    }

    #[test]
    fn only_terminators_end_sentences() {
        assert!(Label::parse(".U").ends_sentence());
        assert!(Label::parse("!O").ends_sentence());
        assert!(Label::parse("?O").ends_sentence());
        assert!(!Label::parse(",U").ends_sentence());
        assert!(!Label::parse("OU").ends_sentence());
    }

    #[test]
    fn compose_true_cases_rather_than_upper_casing() {
        let (text, carry) = compose("rasmus", Label::parse("OU"), false);
        assert_eq!(text, "Rasmus");
        assert!(!carry);
        // True-casing lowers the tail, so an all-caps word is normalised.
        let (text, _) = compose("USA", Label::parse("OU"), false);
        assert_eq!(text, "Usa");
        let (text, _) = compose("æble", Label::parse("OU"), false);
        assert_eq!(text, "Æble");
    }

    #[test]
    fn compose_appends_punctuation_and_sets_carry() {
        let (text, carry) = compose("alvenir", Label::parse(".U"), false);
        assert_eq!(text, "Alvenir.");
        assert!(carry);
        let (text, carry) = compose("ja", Label::parse(",O"), false);
        assert_eq!(text, "ja,");
        assert!(!carry);
    }

    #[test]
    fn carry_capitalizes_even_without_own_flag() {
        let (text, carry) = compose("det", Label::parse("OO"), true);
        assert_eq!(text, "Det");
        assert!(!carry);
        // Idempotent when the label already capitalized.
        let (text, _) = compose("det", Label::parse("OU"), true);
        assert_eq!(text, "Det");
        // Carry applies to the punctuated form without disturbing the mark.
        let (text, carry) = compose("slut", Label::parse(".O"), true);
        assert_eq!(text, "Slut.");
        assert!(carry);
    }

    #[test]
    fn renders_sequence_with_sentence_carry() {
        let slots = vec![
            voted("hej", "OU"),
            voted("med", "OO"),
            voted("dig", ".O"),
            voted("hvordan", "OO"),
            voted("går", "OO"),
            voted("det", "?O"),
        ];
        assert_eq!(render(&slots).unwrap(), "Hej med dig. Hvordan går det?");
    }

    #[test]
    fn render_of_empty_sequence_is_empty() {
        assert_eq!(render(&[]).unwrap(), "");
    }

    #[test]
    fn render_guards_unvoted_slots() {
        let slots = vec![voted("et", "OO"), WordSlot::new("to")];
        match render(&slots) {
            Err(PunctError::UnvotedSlot { index }) => assert_eq!(index, 1),
            other => panic!("expected unvoted slot error, got {other:?}"),
        }
    }
}
