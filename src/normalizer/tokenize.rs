use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::tokens::{Token, TokenKind, WeightUnit};

/// Rep-count suffix vocabulary.
const REPS_MARKERS: [&str; 3] = ["rep", "reps", "repetitions"];

/// Speech engines terminate utterances with sentence punctuation and
/// sometimes comma-separate fields ("Bench Press, 100 kg, 5 reps.").
static TRAILING_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.,!?;:]+$").unwrap());

/// Normalize a raw transcript into an ordered token sequence.
///
/// Pure function of its input: splits on whitespace, strips terminal
/// punctuation from each token, and classifies tokens on their lower-cased
/// form while preserving the original casing in `Token::raw`. No
/// numeric-word conversion is performed; "one hundred" stays two words.
pub fn normalize(raw: &str) -> Vec<Token> {
    let tokens: Vec<Token> = raw
        .split_whitespace()
        .filter_map(|word| {
            let cleaned = TRAILING_PUNCT.replace(word, "");
            if cleaned.is_empty() {
                return None;
            }
            let lower = cleaned.to_lowercase();
            Some(Token {
                kind: classify(&lower),
                raw: cleaned.into_owned(),
            })
        })
        .collect();

    debug!("Normalized {:?} into {} tokens", raw, tokens.len());
    tokens
}

fn classify(lower: &str) -> TokenKind {
    if let Some(unit) = WeightUnit::from_word(lower) {
        return TokenKind::Unit(unit);
    }
    if REPS_MARKERS.contains(&lower) {
        return TokenKind::RepsMarker;
    }
    if let Ok(value) = lower.parse::<f64>() {
        // Signed or non-finite tokens never come out of a speech engine;
        // treat anything outside plain non-negative digits as a word.
        if value.is_finite() && value >= 0.0 {
            return TokenKind::Number(value);
        }
    }
    TokenKind::Word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_classifies_fields() {
        let tokens = normalize("Bench Press 100 kg 5 reps");
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Word);
        assert_eq!(tokens[2].kind, TokenKind::Number(100.0));
        assert_eq!(tokens[3].kind, TokenKind::Unit(WeightUnit::Kg));
        assert_eq!(tokens[4].kind, TokenKind::Number(5.0));
        assert_eq!(tokens[5].kind, TokenKind::RepsMarker);
    }

    #[test]
    fn test_normalize_preserves_original_casing() {
        let tokens = normalize("Bench Press 100");
        assert_eq!(tokens[0].raw, "Bench");
        assert_eq!(tokens[1].raw, "Press");
    }

    #[test]
    fn test_normalize_strips_terminal_punctuation() {
        let tokens = normalize("Squat, 80 kg, 3 reps.");
        assert_eq!(tokens[0].raw, "Squat");
        assert_eq!(tokens[1].kind, TokenKind::Number(80.0));
        assert_eq!(tokens[4].kind, TokenKind::RepsMarker);
    }

    #[test]
    fn test_normalize_unit_vocabulary() {
        assert_eq!(
            normalize("pounds")[0].kind,
            TokenKind::Unit(WeightUnit::Lb)
        );
        assert_eq!(normalize("LBS")[0].kind, TokenKind::Unit(WeightUnit::Lb));
        assert_eq!(
            normalize("Kilograms")[0].kind,
            TokenKind::Unit(WeightUnit::Kg)
        );
    }

    #[test]
    fn test_normalize_empty_and_whitespace() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \t  ").is_empty());
        assert!(normalize("...").is_empty());
    }

    #[test]
    fn test_normalize_no_numeric_word_conversion() {
        let tokens = normalize("one hundred kilograms");
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Word);
        assert!(!tokens.iter().any(|t| t.number().is_some()));
    }

    #[test]
    fn test_normalize_rejects_signed_numbers() {
        assert_eq!(normalize("-5")[0].kind, TokenKind::Word);
        assert_eq!(normalize("inf")[0].kind, TokenKind::Word);
    }

    #[test]
    fn test_normalize_decimal_weight() {
        assert_eq!(normalize("62.5")[0].kind, TokenKind::Number(62.5));
    }
}
